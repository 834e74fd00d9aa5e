//! Error handling for SakuraBot
//!
//! This module defines the main error types used throughout the application
//! and provides a unified error handling strategy.

use thiserror::Error;

/// Main error type for SakuraBot application
#[derive(Error, Debug)]
pub enum SakuraError {
    #[error("Telegram API error: {0}")]
    Telegram(#[from] teloxide::RequestError),

    #[error("HTTP request error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("URL parsing error: {0}")]
    UrlParse(#[from] url::ParseError),

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

/// Result type alias for SakuraBot operations
pub type Result<T> = std::result::Result<T, SakuraError>;

impl SakuraError {
    /// Check if the error is recoverable
    pub fn is_recoverable(&self) -> bool {
        match self {
            SakuraError::Telegram(_) => true,
            SakuraError::Http(_) => true,
            SakuraError::Io(_) => true,
            SakuraError::Config(_) => false,
            SakuraError::Serialization(_) => false,
            SakuraError::UrlParse(_) => false,
            SakuraError::InvalidInput(_) => false,
        }
    }
}
