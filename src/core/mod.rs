pub mod fetch;
pub mod render;

pub use crate::domain::model::{NewUser, RelayBody, RenderVariables};
pub use crate::utils::error::Result;
