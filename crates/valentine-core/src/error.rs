//! Error types for the Valentine card

use thiserror::Error;

/// Main error type for card configuration and setup
#[derive(Error, Debug)]
pub enum CardError {
    /// Reading a config file failed
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Config file was not valid JSON for a card
    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),

    /// Config parsed but holds values the card cannot use
    #[error("Invalid config: {0}")]
    InvalidConfig(String),
}

/// Result type alias using CardError
pub type CardResult<T> = Result<T, CardError>;
