//! Dense square complex matrices.

use std::ops::{Index, IndexMut};

use num_complex::Complex64;

use crate::error::{LinalgError, LinalgResult};
use crate::EPSILON;

/// A square dense complex matrix in row-major order.
///
/// Gates produced by the library are 2ᵏ×2ᵏ unitaries acting on k qubits;
/// the type itself carries no unitarity requirement so measurement
/// operators (POVM elements, projectors) flow through the same algebra.
#[derive(Debug, Clone)]
pub struct Matrix {
    dim: usize,
    data: Vec<Complex64>,
}

impl Matrix {
    /// Create a matrix from rows of equal length.
    ///
    /// Returns `DimensionMismatch` unless the rows form a square matrix.
    pub fn from_rows(rows: Vec<Vec<Complex64>>) -> LinalgResult<Self> {
        let dim = rows.len();
        let mut data = Vec::with_capacity(dim * dim);
        for row in &rows {
            if row.len() != dim {
                return Err(LinalgError::DimensionMismatch {
                    expected: dim,
                    got: row.len(),
                });
            }
            data.extend_from_slice(row);
        }
        Ok(Self { dim, data })
    }

    /// Create a matrix from row-major storage of length `dim * dim`.
    ///
    /// # Panics
    ///
    /// Panics if `data.len() != dim * dim`.
    pub fn from_flat(dim: usize, data: Vec<Complex64>) -> Self {
        assert_eq!(
            data.len(),
            dim * dim,
            "flat storage length {} does not match dimension {dim}",
            data.len(),
        );
        Self { dim, data }
    }

    /// The zero matrix of the given dimension.
    pub fn zero(dim: usize) -> Self {
        Self {
            dim,
            data: vec![Complex64::new(0.0, 0.0); dim * dim],
        }
    }

    /// The identity matrix of the given dimension.
    pub fn identity(dim: usize) -> Self {
        let mut m = Self::zero(dim);
        for i in 0..dim {
            m[(i, i)] = Complex64::new(1.0, 0.0);
        }
        m
    }

    /// The dimension (number of rows = number of columns).
    pub fn dim(&self) -> usize {
        self.dim
    }

    /// Entry-wise sum.
    pub fn add(&self, other: &Self) -> LinalgResult<Self> {
        self.check_dim(other.dim)?;
        Ok(Self {
            dim: self.dim,
            data: self
                .data
                .iter()
                .zip(other.data.iter())
                .map(|(a, b)| a + b)
                .collect(),
        })
    }

    /// Entry-wise difference.
    pub fn sub(&self, other: &Self) -> LinalgResult<Self> {
        self.check_dim(other.dim)?;
        Ok(Self {
            dim: self.dim,
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
            dim: self.dim,
            data: self.data.iter().map(|c| c * z).collect(),
        }
    }

    /// Matrix product `self · other`.
    pub fn matmul(&self, other: &Self) -> LinalgResult<Self> {
        self.check_dim(other.dim)?;
        let dim = self.dim;
        let mut data = vec![Complex64::new(0.0, 0.0); dim * dim];
        for i in 0..dim {
            for k in 0..dim {
                let a = self.data[i * dim + k];
                if a.norm_sqr() == 0.0 {
                    continue;
                }
                for j in 0..dim {
                    data[i * dim + j] += a * other.data[k * dim + j];
                }
            }
        }
        Ok(Self { dim, data })
    }

    /// Left-multiplication in circuit order: `self.apply(other)` is the
    /// operator `other · self`, so `a.apply(b).apply(c)` composes the gate
    /// sequence a, b, c as written. The register uses the same convention.
    pub fn apply(&self, other: &Self) -> LinalgResult<Self> {
        other.matmul(self)
    }

    /// Conjugate transpose.
    pub fn dagger(&self) -> Self {
        let dim = self.dim;
        let mut data = Vec::with_capacity(dim * dim);
        for i in 0..dim {
            for j in 0..dim {
                data.push(self.data[j * dim + i].conj());
            }
        }
        Self { dim, data }
    }

    /// Sum of the diagonal entries.
    pub fn trace(&self) -> Complex64 {
        (0..self.dim).map(|i| self.data[i * self.dim + i]).sum()
    }

    /// Kronecker product `self ⊗ other`.
    ///
    /// The receiver supplies the high-order bits of the combined index, the
    /// same layout as [`crate::Vector::tensor_product`], so that
    /// `(A ⊗ B)·(u ⊗ v) = (A·u) ⊗ (B·v)`.
    pub fn tensor_product(&self, other: &Self) -> Self {
        let (p, q) = (self.dim, other.dim);
        let dim = p * q;
        let mut data = vec![Complex64::new(0.0, 0.0); dim * dim];
        for ia in 0..p {
            for ja in 0..p {
                let a = self.data[ia * p + ja];
                if a.norm_sqr() == 0.0 {
                    continue;
                }
                for ib in 0..q {
                    for jb in 0..q {
                        data[(ia * q + ib) * dim + (ja * q + jb)] = a * other.data[ib * q + jb];
                    }
                }
            }
        }
        Self { dim, data }
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

    /// Entry-wise equality within tolerance.
    ///
    /// Matrices of different dimension are never equal.
    pub fn equals(&self, other: &Self) -> bool {
        self.dim == other.dim
            && self
                .data
                .iter()
                .zip(other.data.iter())
                .all(|(a, b)| (a - b).norm() < EPSILON)
    }

    /// Whether `M·M† = I` within tolerance.
    pub fn is_unitary(&self) -> bool {
        match self.matmul(&self.dagger()) {
            Ok(product) => product.equals(&Self::identity(self.dim)),
            Err(_) => false,
        }
    }

    fn check_dim(&self, got: usize) -> LinalgResult<()> {
        if self.dim != got {
            return Err(LinalgError::DimensionMismatch {
                expected: self.dim,
                got,
            });
        }
        Ok(())
    }
}

impl Index<(usize, usize)> for Matrix {
    type Output = Complex64;

    fn index(&self, (row, col): (usize, usize)) -> &Complex64 {
        &self.data[row * self.dim + col]
    }
}

impl IndexMut<(usize, usize)> for Matrix {
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut Complex64 {
        &mut self.data[row * self.dim + col]
    }
}
