//! Svalin state-vector simulator
//!
//! This crate provides the simulation surface of the Svalin workspace: the
//! [`Register`] holding 2ⁿ complex amplitudes, and the [`Simulator`] facade
//! that grows a register qubit by qubit and lifts gate specifications to
//! the full register width.
//!
//! # Overview
//!
//! - **Register**: apply operators, read probabilities, perform global and
//!   single-qubit projective measurement, Monte-Carlo estimation of reduced
//!   single-qubit states, fidelity
//! - **Simulator**: stable [`QubitId`] handles, fluent gate methods,
//!   classically-conditioned corrections, QFT / inverse QFT, sampling
//! - **number**: the classical helpers (`gcd`, `mod_pow`) used by
//!   order-finding post-processing
//!
//! Everything is single-threaded and synchronous; a simulator mutates its
//! register in place from the caller's thread. Exact results are compared
//! within 1e-13, Monte-Carlo fidelities within 1e-3.
//!
//! # Example: Bell pair
//!
//! ```rust
//! use svalin_sim::Simulator;
//!
//! let mut sim = Simulator::new();
//! let q0 = sim.zero();
//! let q1 = sim.zero();
//!
//! sim.h(&[q0]).unwrap().cnot(q0, q1).unwrap();
//!
//! // Measurements of the two qubits always agree.
//! let first = sim.measure(q0).unwrap();
//! let second = sim.measure(q1).unwrap();
//! assert_eq!(first, second);
//! ```

pub mod error;
pub mod number;
pub mod qubit;
pub mod register;
pub mod simulator;

pub use error::{SimError, SimResult};
pub use qubit::{Outcome, QubitId};
pub use register::Register;
pub use simulator::Simulator;
