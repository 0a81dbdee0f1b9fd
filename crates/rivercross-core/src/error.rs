//! Error types for Rivercross

use thiserror::Error;

/// Main error type for Rivercross operations
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RiverCrossingError {
    /// Error in the puzzle configuration
    #[error("Configuration error: {0}")]
    Config(String),

    /// A state transition would break the bank partition
    #[error("Invalid state: {0}")]
    InvalidState(String),
}

/// Result type alias for Rivercross operations
pub type Result<T> = std::result::Result<T, RiverCrossingError>;
