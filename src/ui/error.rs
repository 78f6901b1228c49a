//! UI error types

use crate::discovery::WalkerError;
use thiserror::Error;

/// Errors that can occur while running the finder
#[derive(Debug, Error)]
pub enum UiError {
    /// Terminal I/O failed
    #[error("Terminal error: {0}")]
    Io(#[from] std::io::Error),

    /// The discovery pool could not be started
    #[error(transparent)]
    Walker(#[from] WalkerError),
}

/// Result type for UI operations
pub type Result<T> = std::result::Result<T, UiError>;
