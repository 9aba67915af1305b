use thiserror::Error;

#[derive(Error, Debug)]
pub enum RelayError {
    #[error("Upstream fetch failed: {0}")]
    FetchError(#[from] reqwest::Error),

    #[error("Template rendering failed: {0}")]
    RenderError(#[from] handlebars::RenderError),

    #[error("User store error: {0}")]
    StoreError(#[from] mongodb::error::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value for '{field}' ({value}): {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

pub type Result<T> = std::result::Result<T, RelayError>;
