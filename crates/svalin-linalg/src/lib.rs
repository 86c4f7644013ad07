//! Svalin dense complex linear algebra
//!
//! This crate provides the numerical floor of the Svalin simulator: dense
//! complex amplitude vectors and square complex matrices, with the tensor
//! (Kronecker) algebra that quantum state evolution is built from.
//!
//! # Core Components
//!
//! - [`Vector`]: a length-2ⁿ amplitude vector with inner/outer products,
//!   tensor products and matrix application
//! - [`Matrix`]: a square row-major complex matrix with matmul, dagger,
//!   trace and tensor products
//! - [`LinalgError`]: dimension-mismatch reporting for every fallible
//!   operation
//!
//! # Conventions
//!
//! Tensor products put the *first* operand in the high-order bits, so
//! `(A ⊗ B)·(u ⊗ v) = (A·u) ⊗ (B·v)` holds with matching index layouts on
//! both sides. `apply` composes in circuit order: `a.apply(b)` is the
//! operator `b·a`, and `v.apply(m)` is the vector `m·v`.
//!
//! Comparisons are tolerance-based: two values are equal when they differ
//! by less than [`EPSILON`] entry-wise.
//!
//! # Example
//!
//! ```rust
//! use num_complex::Complex64;
//! use svalin_linalg::{Matrix, Vector};
//!
//! let v = Vector::from_reals(&[1.0, 0.0]);
//! let x = Matrix::from_rows(vec![
//!     vec![Complex64::new(0.0, 0.0), Complex64::new(1.0, 0.0)],
//!     vec![Complex64::new(1.0, 0.0), Complex64::new(0.0, 0.0)],
//! ]).unwrap();
//!
//! let flipped = v.apply(&x).unwrap();
//! assert!(flipped.equals(&Vector::from_reals(&[0.0, 1.0])));
//! ```

pub mod error;
pub mod matrix;
pub mod vector;

pub use error::{LinalgError, LinalgResult};
pub use matrix::Matrix;
pub use vector::Vector;

/// Tolerance for exact-arithmetic comparisons across the whole workspace.
pub const EPSILON: f64 = 1e-13;
