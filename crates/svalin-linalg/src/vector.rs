//! Dense complex amplitude vectors.

use std::ops::Index;

use num_complex::Complex64;

use crate::error::{LinalgError, LinalgResult};
use crate::matrix::Matrix;
use crate::EPSILON;

/// A dense complex vector.
///
/// In the simulator this holds the 2ⁿ amplitudes of an n-qubit state, with
/// basis index `i` read MSB-first: qubit 0 occupies the highest-order bit.
/// The type itself is agnostic of normalisation; intermediate algebraic
/// values flow through the same operations as states.
#[derive(Debug, Clone)]
pub struct Vector {
    data: Vec<Complex64>,
}

impl Vector {
    /// Create a vector from literal amplitudes.
    pub fn new(data: Vec<Complex64>) -> Self {
        Self { data }
    }

    /// Create a vector from real amplitudes.
    pub fn from_reals(reals: &[f64]) -> Self {
        Self {
            data: reals.iter().map(|&r| Complex64::new(r, 0.0)).collect(),
        }
    }

    /// Create the zero vector of the given dimension.
    pub fn zero(dim: usize) -> Self {
        Self {
            data: vec![Complex64::new(0.0, 0.0); dim],
        }
    }

    /// Create the computational basis vector `|index⟩` of the given dimension.
    ///
    /// # Panics
    ///
    /// Panics if `index >= dim`.
    pub fn basis(dim: usize, index: usize) -> Self {
        assert!(index < dim, "basis index {index} out of range for dimension {dim}");
        let mut data = vec![Complex64::new(0.0, 0.0); dim];
        data[index] = Complex64::new(1.0, 0.0);
        Self { data }
    }

    /// The dimension of the vector.
    pub fn dim(&self) -> usize {
        self.data.len()
    }

    /// The amplitudes as a slice.
    pub fn as_slice(&self) -> &[Complex64] {
        &self.data
    }

    /// Element-wise complex conjugate.
    pub fn dual(&self) -> Self {
        Self {
            data: self.data.iter().map(|c| c.conj()).collect(),
        }
    }

    /// Pointwise sum.
    pub fn add(&self, other: &Self) -> LinalgResult<Self> {
        self.check_dim(other.dim())?;
        Ok(Self {
            data: self
                .data
                .iter()
                .zip(other.data.iter())
                .map(|(a, b)| a + b)
                .collect(),
        })
    }

    /// Pointwise difference.
    pub fn sub(&self, other: &Self) -> LinalgResult<Self> {
        self.check_dim(other.dim())?;
        Ok(Self {
            data: self
                .data
                .iter()
                .zip(other.data.iter())
                .map(|(a, b)| a - b)
                .collect(),
        })
    }

    /// Scalar multiple.
    pub fn scale(&self, z: Complex64) -> Self {
        Self {
            data: self.data.iter().map(|c| c * z).collect(),
        }
    }

    /// Inner product `⟨other|self⟩ = Σᵢ conj(otherᵢ)·selfᵢ`.
    ///
    /// The *argument* is conjugated; the receiver enters linearly. Fidelity
    /// and orthogonality checks all go through this one convention.
    pub fn inner_product(&self, other: &Self) -> LinalgResult<Complex64> {
        self.check_dim(other.dim())?;
        Ok(self
            .data
            .iter()
            .zip(other.data.iter())
            .map(|(a, b)| b.conj() * a)
            .sum())
    }

    /// Outer product `|self⟩⟨other|`: the matrix with `M[i][j] = selfᵢ·conj(otherⱼ)`.
    pub fn outer_product(&self, other: &Self) -> LinalgResult<Matrix> {
        self.check_dim(other.dim())?;
        let dim = self.dim();
        let mut data = Vec::with_capacity(dim * dim);
        for i in 0..dim {
            for j in 0..dim {
                data.push(self.data[i] * other.data[j].conj());
            }
        }
        Ok(Matrix::from_flat(dim, data))
    }

    /// The L2 norm `√⟨v,v⟩`.
    pub fn norm(&self) -> f64 {
        self.data
            .iter()
            .map(|c| c.norm_sqr())
            .sum::<f64>()
            .sqrt()
    }

    /// Whether the vector has unit norm, within tolerance.
    pub fn is_unit(&self) -> bool {
        (self.norm() - 1.0).abs() < EPSILON
    }

    /// Whether the two vectors are orthogonal, within tolerance.
    ///
    /// Vectors of different dimension are not orthogonal (nor anything
    /// else); this returns `false` rather than an error.
    pub fn is_orthogonal(&self, other: &Self) -> bool {
        match self.inner_product(other) {
            Ok(ip) => ip.norm() < EPSILON,
            Err(_) => false,
        }
    }

    /// A unit-norm copy of the vector.
    pub fn normalized(&self) -> Self {
        self.scale(Complex64::new(1.0 / self.norm(), 0.0))
    }

    /// Kronecker product `self ⊗ other`.
    ///
    /// The receiver supplies the high-order bits of the combined index.
    pub fn tensor_product(&self, other: &Self) -> Self {
        let mut data = Vec::with_capacity(self.dim() * other.dim());
        for a in &self.data {
            for b in &other.data {
                data.push(a * b);
            }
        }
        Self { data }
    }

    /// The k-fold tensor power `self ⊗ self ⊗ …`.
    ///
    /// Both `k = 0` and `k = 1` return a plain clone.
    pub fn tensor_pow(&self, k: usize) -> Self {
        let mut result = self.clone();
        for _ in 1..k {
            result = result.tensor_product(self);
        }
        result
    }

    /// Matrix application `M·self`.
    pub fn apply(&self, m: &Matrix) -> LinalgResult<Self> {
        if m.dim() != self.dim() {
            return Err(LinalgError::DimensionMismatch {
                expected: self.dim(),
                got: m.dim(),
            });
        }
        let dim = self.dim();
        let mut data = vec![Complex64::new(0.0, 0.0); dim];
        for (i, out) in data.iter_mut().enumerate() {
            let mut acc = Complex64::new(0.0, 0.0);
            for j in 0..dim {
                acc += m[(i, j)] * self.data[j];
            }
            *out = acc;
        }
        Ok(Self { data })
    }

    /// Entry-wise equality within tolerance.
    ///
    /// Vectors of different dimension are never equal.
    pub fn equals(&self, other: &Self) -> bool {
        self.dim() == other.dim()
            && self
                .data
                .iter()
                .zip(other.data.iter())
                .all(|(a, b)| (a - b).norm() < EPSILON)
    }

    /// Iterate over the amplitudes.
    pub fn iter(&self) -> std::slice::Iter<'_, Complex64> {
        self.data.iter()
    }

    fn check_dim(&self, got: usize) -> LinalgResult<()> {
        if self.dim() != got {
            return Err(LinalgError::DimensionMismatch {
                expected: self.dim(),
                got,
            });
        }
        Ok(())
    }
}

impl Index<usize> for Vector {
    type Output = Complex64;

    fn index(&self, index: usize) -> &Complex64 {
        &self.data[index]
    }
}

impl<'a> IntoIterator for &'a Vector {
    type Item = &'a Complex64;
    type IntoIter = std::slice::Iter<'a, Complex64>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.iter()
    }
}
