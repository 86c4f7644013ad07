//! Svalin gate library
//!
//! Named unitaries and controlled-gate construction on top of
//! [`svalin_linalg`]. Every function returns a dense [`Matrix`] ready to be
//! applied to an amplitude vector of the matching width.
//!
//! # Conventions
//!
//! Qubit `h` of an n-qubit register occupies bit `n − 1 − h` of the basis
//! index: qubit 0 is the most significant bit. Widened operators are built
//! by tensoring left to right, so `a.tensor_product(&b)` puts `a` on the
//! lower-numbered qubits.
//!
//! # Example
//!
//! ```rust
//! use svalin_gate as gate;
//!
//! // A Bell-pair preparation operator on two qubits.
//! let op = gate::h()
//!     .tensor_product(&gate::id(1))
//!     .apply(&gate::cnot(2, 0, 1).unwrap())
//!     .unwrap();
//! assert!(op.is_unitary());
//! ```

use std::f64::consts::PI;

use num_complex::Complex64;
use svalin_linalg::Matrix;

pub mod error;

pub use error::{GateError, GateResult};

/// The identity on `n` qubits (2ⁿ × 2ⁿ).
pub fn id(n: usize) -> Matrix {
    Matrix::identity(1 << n)
}

/// The Pauli-X gate.
pub fn x() -> Matrix {
    Matrix::from_flat(
        2,
        vec![
            Complex64::new(0.0, 0.0),
            Complex64::new(1.0, 0.0),
            Complex64::new(1.0, 0.0),
            Complex64::new(0.0, 0.0),
        ],
    )
}

/// The Pauli-Y gate.
pub fn y() -> Matrix {
    Matrix::from_flat(
        2,
        vec![
            Complex64::new(0.0, 0.0),
            Complex64::new(0.0, -1.0),
            Complex64::new(0.0, 1.0),
            Complex64::new(0.0, 0.0),
        ],
    )
}

/// The Pauli-Z gate.
pub fn z() -> Matrix {
    Matrix::from_flat(
        2,
        vec![
            Complex64::new(1.0, 0.0),
            Complex64::new(0.0, 0.0),
            Complex64::new(0.0, 0.0),
            Complex64::new(-1.0, 0.0),
        ],
    )
}

/// The Hadamard gate.
pub fn h() -> Matrix {
    let s = 1.0 / 2.0_f64.sqrt();
    Matrix::from_flat(
        2,
        vec![
            Complex64::new(s, 0.0),
            Complex64::new(s, 0.0),
            Complex64::new(s, 0.0),
            Complex64::new(-s, 0.0),
        ],
    )
}

/// The S gate, diag(1, i).
pub fn s() -> Matrix {
    Matrix::from_flat(
        2,
        vec![
            Complex64::new(1.0, 0.0),
            Complex64::new(0.0, 0.0),
            Complex64::new(0.0, 0.0),
            Complex64::new(0.0, 1.0),
        ],
    )
}

/// The T gate, diag(1, e^{iπ/4}).
pub fn t() -> Matrix {
    Matrix::from_flat(
        2,
        vec![
            Complex64::new(1.0, 0.0),
            Complex64::new(0.0, 0.0),
            Complex64::new(0.0, 0.0),
            Complex64::from_polar(1.0, PI / 4.0),
        ],
    )
}

/// The phase-rotation gate R(k), diag(1, e^{2πi/2ᵏ}).
///
/// `r(1)` is Z, `r(2)` is S, `r(3)` is T; the general form is the rotation
/// ladder the Quantum Fourier Transform is made of.
pub fn r(k: u32) -> Matrix {
    let theta = 2.0 * PI / f64::from(1u32 << k);
    Matrix::from_flat(
        2,
        vec![
            Complex64::new(1.0, 0.0),
            Complex64::new(0.0, 0.0),
            Complex64::new(0.0, 0.0),
            Complex64::from_polar(1.0, theta),
        ],
    )
}

/// General controlled-U on an n-qubit register.
///
/// Produces the 2ⁿ × 2ⁿ operator that applies the 2×2 unitary `u` to the
/// `target` qubit on every basis state whose `controls` bits are all 1, and
/// acts as the identity elsewhere: starting from I(n), each such basis row
/// pair (target bit 0/1) has the corresponding `u` block spliced in.
///
/// Validation happens before any allocation: duplicate controls, a target
/// inside the control set, or any index ≥ n yield `InvalidControlSet`; a
/// non-2×2 `u` yields a dimension error.
pub fn controlled(u: &Matrix, n: usize, controls: &[usize], target: usize) -> GateResult<Matrix> {
    validate_control_set(n, controls, target)?;
    if u.dim() != 2 {
        return Err(GateError::Linalg(svalin_linalg::LinalgError::DimensionMismatch {
            expected: 2,
            got: u.dim(),
        }));
    }

    let dim = 1usize << n;
    let target_bit = 1usize << (n - 1 - target);
    let mut m = Matrix::identity(dim);

    for i in 0..dim {
        let armed = controls.iter().all(|&c| i & (1 << (n - 1 - c)) != 0);
        if armed && i & target_bit == 0 {
            let j = i | target_bit;
            m[(i, i)] = u[(0, 0)];
            m[(i, j)] = u[(0, 1)];
            m[(j, i)] = u[(1, 0)];
            m[(j, j)] = u[(1, 1)];
        }
    }

    Ok(m)
}

/// Controlled-NOT at width `n` with control `c` and target `t`.
///
/// The canonical two-qubit CNOT of the gate set is `cnot(2, 0, 1)`.
pub fn cnot(n: usize, c: usize, t: usize) -> GateResult<Matrix> {
    controlled(&x(), n, &[c], t)
}

/// Controlled-Z at width `n` with control `c` and target `t`.
pub fn cz(n: usize, c: usize, t: usize) -> GateResult<Matrix> {
    controlled(&z(), n, &[c], t)
}

/// Controlled-R(k) at width `n` with control `c` and target `t`.
pub fn cr(n: usize, c: usize, t: usize, k: u32) -> GateResult<Matrix> {
    controlled(&r(k), n, &[c], t)
}

/// Multi-controlled NOT at width `n`.
pub fn controlled_not(n: usize, controls: &[usize], t: usize) -> GateResult<Matrix> {
    controlled(&x(), n, controls, t)
}

/// Multi-controlled Z at width `n`.
pub fn controlled_z(n: usize, controls: &[usize], t: usize) -> GateResult<Matrix> {
    controlled(&z(), n, controls, t)
}

/// Multi-controlled R(k) at width `n`.
pub fn controlled_r(n: usize, controls: &[usize], t: usize, k: u32) -> GateResult<Matrix> {
    controlled(&r(k), n, controls, t)
}

/// Swap of qubits `i` and `j` at width `n`, as the CNOT triple
/// CNOT(i,j)·CNOT(j,i)·CNOT(i,j).
pub fn swap(n: usize, i: usize, j: usize) -> GateResult<Matrix> {
    let forward = cnot(n, i, j)?;
    let backward = cnot(n, j, i)?;
    Ok(forward.apply(&backward)?.apply(&forward)?)
}

fn validate_control_set(n: usize, controls: &[usize], target: usize) -> GateResult<()> {
    let mut seen = vec![false; n];
    let in_range =
        target < n && controls.iter().all(|&c| c < n) && !controls.contains(&target);
    let distinct = in_range
        && controls.iter().all(|&c| {
            let fresh = !seen[c];
            seen[c] = true;
            fresh
        });

    if !in_range || !distinct || controls.is_empty() {
        return Err(GateError::InvalidControlSet {
            width: n,
            controls: controls.to_vec(),
            target,
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use svalin_linalg::{Vector, EPSILON};

    #[test]
    fn test_pauli_algebra() {
        assert!(x().matmul(&x()).unwrap().equals(&id(1)));
        assert!(y().matmul(&y()).unwrap().equals(&id(1)));
        assert!(z().matmul(&z()).unwrap().equals(&id(1)));
        assert!(h().matmul(&h()).unwrap().equals(&id(1)));
    }

    #[test]
    fn test_rotation_ladder() {
        assert!(r(1).equals(&z()));
        assert!(r(2).equals(&s()));
        assert!(r(3).equals(&t()));
        // S² = Z, T² = S.
        assert!(s().matmul(&s()).unwrap().equals(&z()));
        assert!(t().matmul(&t()).unwrap().equals(&s()));
    }

    #[test]
    fn test_cnot_action() {
        let cx = cnot(2, 0, 1).unwrap();
        // |10⟩ → |11⟩, |00⟩ untouched.
        let flipped = Vector::basis(4, 2).apply(&cx).unwrap();
        assert!(flipped.equals(&Vector::basis(4, 3)));
        let idle = Vector::basis(4, 0).apply(&cx).unwrap();
        assert!(idle.equals(&Vector::basis(4, 0)));
    }

    #[test]
    fn test_cz_symmetric() {
        let a = cz(3, 0, 2).unwrap();
        let b = cz(3, 2, 0).unwrap();
        assert!(a.equals(&b));
    }

    #[test]
    fn test_multi_controlled_not() {
        let ccx = controlled_not(3, &[0, 1], 2).unwrap();
        // |110⟩ → |111⟩, |100⟩ untouched.
        assert!(Vector::basis(8, 6)
            .apply(&ccx)
            .unwrap()
            .equals(&Vector::basis(8, 7)));
        assert!(Vector::basis(8, 4)
            .apply(&ccx)
            .unwrap()
            .equals(&Vector::basis(8, 4)));
    }

    #[test]
    fn test_swap_exchanges_qubits() {
        let sw = swap(2, 0, 1).unwrap();
        let u = Vector::new(vec![
            Complex64::new(0.6, 0.0),
            Complex64::new(0.0, 0.8),
        ]);
        let v = Vector::from_reals(&[0.8, -0.6]);
        let swapped = u.tensor_product(&v).apply(&sw).unwrap();
        assert!(swapped.equals(&v.tensor_product(&u)));
    }

    #[test]
    fn test_invalid_control_sets() {
        let u = x();
        assert!(matches!(
            controlled(&u, 3, &[0, 0], 2),
            Err(GateError::InvalidControlSet { .. })
        ));
        assert!(matches!(
            controlled(&u, 3, &[1], 1),
            Err(GateError::InvalidControlSet { .. })
        ));
        assert!(matches!(
            controlled(&u, 3, &[3], 1),
            Err(GateError::InvalidControlSet { .. })
        ));
        assert!(matches!(
            controlled(&u, 3, &[0], 3),
            Err(GateError::InvalidControlSet { .. })
        ));
        assert!(matches!(
            controlled(&u, 3, &[], 1),
            Err(GateError::InvalidControlSet { .. })
        ));
    }

    #[test]
    fn test_controlled_rejects_wide_u() {
        let wide = id(2);
        assert!(matches!(
            controlled(&wide, 3, &[0], 1),
            Err(GateError::Linalg(_))
        ));
    }

    #[test]
    fn test_hadamard_column_norm() {
        let h = h();
        let col: f64 = (0..2).map(|i| h[(i, 0)].norm_sqr()).sum();
        assert!((col - 1.0).abs() < EPSILON);
    }
}
