//! Error types for the simulator crate.

use svalin_gate::GateError;
use svalin_linalg::LinalgError;
use thiserror::Error;

/// Errors that can occur in register and facade operations.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum SimError {
    /// Qubit handle out of range of the current register width.
    #[error("qubit {qubit} out of range for register of width {width}")]
    InvalidHandle {
        /// The offending qubit index.
        qubit: usize,
        /// Current register width.
        width: usize,
    },

    /// Operation requires at least one allocated qubit.
    #[error("register holds no qubits")]
    EmptyRegister,

    /// The measured branch carries no probability mass.
    ///
    /// Unreachable on normalised states; reported explicitly rather than
    /// dividing by a vanishing norm.
    #[error("measurement of qubit {qubit} drew a branch with vanishing probability")]
    DegenerateMeasurement {
        /// The measured qubit.
        qubit: usize,
    },

    /// Gate construction failed.
    #[error("gate error: {0}")]
    Gate(#[from] GateError),

    /// Vector/matrix dimensions incompatible with the register.
    #[error("linalg error: {0}")]
    Linalg(#[from] LinalgError),
}

/// Result type for simulator operations.
pub type SimResult<T> = Result<T, SimError>;
