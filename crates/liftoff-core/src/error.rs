//! Error types for liftoff configuration

use thiserror::Error;

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Required environment variable is missing or empty
    #[error("Required environment variable not set: {0}")]
    MissingToken(&'static str),

    /// Environment variable holds an unusable value
    #[error("Invalid value for {var}: {message}")]
    InvalidValue { var: &'static str, message: String },
}
