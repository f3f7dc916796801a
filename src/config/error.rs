//! Error types for settings loading

use thiserror::Error;

/// Errors that can occur while reading gallery settings
#[derive(Error, Debug)]
pub enum ConfigError {
    /// IO error from std::io
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON parsing error from serde_json
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    /// A value that cannot be sanitised into something usable
    #[error("Invalid value for {field}: {reason}")]
    InvalidValue { field: &'static str, reason: String },
}

/// Result type alias for settings operations
pub type ConfigResult<T> = Result<T, ConfigError>;
