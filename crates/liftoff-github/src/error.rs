//! Hosting-service error types

use thiserror::Error;

/// Errors from the release host
#[derive(Debug, Error)]
pub enum HostError {
    /// Non-success response from the API
    #[error("API error: {status} - {message}")]
    ApiError { status: u16, message: String },

    /// Artifact could not be read
    #[error("Invalid artifact: {0}")]
    InvalidArtifact(String),

    /// Network-level failure
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for release-host operations
pub type Result<T> = std::result::Result<T, HostError>;
