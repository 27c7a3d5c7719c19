//! Error types for chain operations.

use thiserror::Error;

/// Result type alias for indexed chain operations.
pub type Result<T> = core::result::Result<T, ChainError>;

/// Errors raised by indexed chain operations.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChainError {
    /// The index lies outside the range accepted by the operation.
    ///
    /// `len` is the length observed by the bounds check that rejected the index.
    #[error("index {index} out of range for chain of length {len}")]
    OutOfRange { index: usize, len: usize },
}

impl ChainError {
    pub(crate) fn out_of_range(op: &'static str, index: usize, len: usize) -> Self {
        tracing::debug!(op, index, len, "index out of range");
        ChainError::OutOfRange { index, len }
    }
}
