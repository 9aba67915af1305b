pub mod config;
pub mod core;
pub mod domain;
pub mod http;
pub mod store;
pub mod utils;

pub use config::ServerConfig;
pub use http::{build_router, run_server, AppState};
pub use utils::error::{RelayError, Result};
