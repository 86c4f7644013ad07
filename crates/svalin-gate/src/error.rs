//! Error types for the gate crate.

use svalin_linalg::LinalgError;
use thiserror::Error;

/// Errors that can occur while constructing gates.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum GateError {
    /// Controlled-gate builder called with an unusable control/target set.
    #[error("invalid control set for width {width}: controls {controls:?}, target {target}")]
    InvalidControlSet {
        /// Register width the gate was requested at.
        width: usize,
        /// The offending control indices.
        controls: Vec<usize>,
        /// The requested target index.
        target: usize,
    },

    /// Underlying linear-algebra failure.
    #[error("linalg error: {0}")]
    Linalg(#[from] LinalgError),
}

/// Result type for gate construction.
pub type GateResult<T> = Result<T, GateError>;
