//! Error handling for the entryline HAL

use thiserror::Error;

/// Result type for HAL operations
pub type HalResult<T> = Result<T, HalError>;

/// Errors raised by terminal implementations
#[derive(Debug, Error)]
pub enum HalError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A scripted input source ran out of key events
    #[error("input exhausted")]
    InputExhausted,

    #[error("unsupported terminal operation: {0}")]
    Unsupported(String),
}

impl HalError {
    /// True when the error only means "no more input will ever arrive".
    pub fn is_input_exhausted(&self) -> bool {
        matches!(self, HalError::InputExhausted)
    }
}
