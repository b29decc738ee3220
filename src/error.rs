use thiserror::Error;

pub type Result<T> = std::result::Result<T, DashboardError>;

#[derive(Error, Debug)]
pub enum DashboardError {
    #[error("Unauthorized: {status_text}")]
    Unauthorized { status_text: String },

    #[error("Invalid base64 input: {0}")]
    InvalidBase64(#[from] base64::DecodeError),

    #[error("Invalid encoded text: {0}")]
    InvalidEncoding(String),

    #[error("Invalid timestamp: {input}")]
    InvalidTimestamp { input: String },

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Invalid arguments: {0}")]
    InvalidArguments(String),
}

impl DashboardError {
    pub fn config_error(msg: impl Into<String>) -> Self {
        DashboardError::ConfigError(msg.into())
    }

    pub fn invalid_arguments(msg: impl Into<String>) -> Self {
        DashboardError::InvalidArguments(msg.into())
    }

    pub fn invalid_timestamp(input: impl Into<String>) -> Self {
        DashboardError::InvalidTimestamp {
            input: input.into(),
        }
    }
}
