//! Qubit handles and measurement outcomes.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Stable handle for an allocated qubit.
///
/// The handle equals the qubit's position at allocation time, and the bit
/// position of qubit `h` in the n-bit basis index is exactly `h` (MSB
/// first). Handles never move; qubits are never dropped or reordered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct QubitId(pub u32);

impl QubitId {
    /// The handle as a bit position.
    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for QubitId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "q{}", self.0)
    }
}

impl From<u32> for QubitId {
    fn from(id: u32) -> Self {
        QubitId(id)
    }
}

/// The outcome of a single-qubit projective measurement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// The qubit collapsed to |0⟩.
    Zero,
    /// The qubit collapsed to |1⟩.
    One,
}

impl Outcome {
    /// Whether the outcome is |0⟩.
    #[inline]
    pub fn is_zero(self) -> bool {
        self == Outcome::Zero
    }

    /// Whether the outcome is |1⟩.
    #[inline]
    pub fn is_one(self) -> bool {
        self == Outcome::One
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Zero => write!(f, "|0⟩"),
            Outcome::One => write!(f, "|1⟩"),
        }
    }
}

impl From<Outcome> for usize {
    fn from(outcome: Outcome) -> usize {
        match outcome {
            Outcome::Zero => 0,
            Outcome::One => 1,
        }
    }
}
