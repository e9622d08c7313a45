use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AeonTextError {
    /// Malformed text at the given byte offset.
    #[error("invalid aeon text at offset {0}")]
    Invalid(usize),
}
