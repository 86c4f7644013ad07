//! Error types for the linalg crate.

use thiserror::Error;

/// Errors that can occur in vector and matrix operations.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum LinalgError {
    /// Operand sizes are incompatible with the operation.
    #[error("dimension mismatch: expected {expected}, got {got}")]
    DimensionMismatch {
        /// Dimension required by the left-hand operand.
        expected: usize,
        /// Dimension actually supplied.
        got: usize,
    },
}

/// Result type for linalg operations.
pub type LinalgResult<T> = Result<T, LinalgError>;
