//! Error types for the line editor

use entryline_hal::HalError;
use thiserror::Error;

pub type EditorResult<T> = Result<T, EditorError>;

#[derive(Debug, Error)]
pub enum EditorError {
    /// The terminal collaborator failed; editing cannot continue
    #[error("terminal error: {0}")]
    Terminal(#[from] HalError),

    /// Rejected at construction time
    #[error("invalid editor configuration: {0}")]
    InvalidConfig(String),
}
