//! Chat-platform error types

use thiserror::Error;

/// Errors from the chat platform
#[derive(Debug, Error)]
pub enum ChatError {
    /// Session could not authenticate
    #[error("Chat connection failed: {0}")]
    ConnectionFailed(String),

    /// Target channel does not exist or is not visible to the bot
    #[error("Channel not found: {0}")]
    ChannelNotFound(u64),

    /// Non-success response from the API
    #[error("API error: {status} - {message}")]
    ApiError { status: u16, message: String },

    /// Network-level failure
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
}

/// Result type for chat operations
pub type Result<T> = std::result::Result<T, ChatError>;
