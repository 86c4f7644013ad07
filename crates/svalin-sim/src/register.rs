//! The qubit register: an amplitude vector that *is* the state.

use num_complex::Complex64;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::debug;

use svalin_linalg::{Matrix, Vector, EPSILON};

use crate::error::{SimError, SimResult};
use crate::qubit::Outcome;

/// Default shot count for Monte-Carlo single-qubit estimation.
///
/// Sized so the 1e-3 fidelity tolerance of the estimation tests sits at
/// several standard deviations of the binomial noise.
pub const ESTIMATE_SHOTS: usize = 10_000;

/// An n-qubit register holding 2ⁿ complex amplitudes.
///
/// The register owns its amplitude vector and a seeded pseudo-random
/// generator for measurement draws. Width only grows: tensoring another
/// register in appends its qubits at the low-order end of the basis index.
///
/// Basis index `i` is read MSB-first: the bit of qubit `h` is bit
/// `n − 1 − h` of `i`.
#[derive(Debug)]
pub struct Register {
    state: Vector,
    rng: StdRng,
}

impl Register {
    /// Build a register from literal amplitudes, normalising them.
    ///
    /// `new(&[1, 2])` is the single-qubit state with probabilities 1/5 and
    /// 4/5.
    ///
    /// # Panics
    ///
    /// Panics if the amplitude count is not a power of two of at least 2,
    /// or if all amplitudes are zero.
    pub fn new(amps: &[Complex64]) -> Self {
        assert!(
            amps.len() >= 2 && amps.len().is_power_of_two(),
            "amplitude count {} is not a power of two",
            amps.len(),
        );
        let state = Vector::new(amps.to_vec());
        assert!(state.norm() > 0.0, "state must have non-zero norm");
        Self {
            state: state.normalized(),
            rng: StdRng::from_entropy(),
        }
    }

    /// Build a register from real amplitudes, normalising them.
    pub fn from_reals(reals: &[f64]) -> Self {
        let amps: Vec<Complex64> = reals.iter().map(|&r| Complex64::new(r, 0.0)).collect();
        Self::new(&amps)
    }

    /// The single-qubit state |0⟩.
    pub fn zero() -> Self {
        Self::basis_state(1, 0)
    }

    /// The single-qubit state |1⟩.
    pub fn one() -> Self {
        Self::basis_state(1, 1)
    }

    /// The k-qubit state |0…0⟩.
    ///
    /// # Panics
    ///
    /// Panics if `k` is zero.
    pub fn zeros(k: usize) -> Self {
        assert!(k > 0, "register must hold at least one qubit");
        Self::basis_state(k, 0)
    }

    /// The width-0 scalar register the facade grows from.
    pub(crate) fn scalar() -> Self {
        Self {
            state: Vector::new(vec![Complex64::new(1.0, 0.0)]),
            rng: StdRng::from_entropy(),
        }
    }

    fn basis_state(n: usize, index: usize) -> Self {
        Self {
            state: Vector::basis(1 << n, index),
            rng: StdRng::from_entropy(),
        }
    }

    /// Reseed the register's random generator.
    ///
    /// Determinism is not a contract of the simulator, but reseeding pins
    /// measurement draws for tests.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng = StdRng::seed_from_u64(seed);
        self
    }

    /// The amplitude vector.
    pub fn state(&self) -> &Vector {
        &self.state
    }

    /// The amplitudes as a slice.
    pub fn amplitudes(&self) -> &[Complex64] {
        self.state.as_slice()
    }

    /// The dimension 2ⁿ of the amplitude vector.
    pub fn dim(&self) -> usize {
        self.state.dim()
    }

    /// The register width n.
    pub fn num_qubits(&self) -> usize {
        self.state.dim().trailing_zeros() as usize
    }

    /// Grow the register: V ← V ⊗ other.V.
    pub fn tensor_product(&mut self, other: &Register) -> &mut Self {
        self.state = self.state.tensor_product(&other.state);
        debug!(width = self.num_qubits(), "register grew");
        self
    }

    /// Apply an operator: V ← M·V.
    ///
    /// `M` must be 2ⁿ×2ⁿ for the current width. Gates are unitary and
    /// preserve the norm; measurement operators (POVM elements) flow
    /// through the same path and are allowed to shrink it.
    pub fn apply(&mut self, m: &Matrix) -> SimResult<&mut Self> {
        self.state = self.state.apply(m)?;
        Ok(self)
    }

    /// The probability distribution p[i] = |Vᵢ|² over basis states.
    pub fn probability(&self) -> Vec<f64> {
        self.state.iter().map(|a| a.norm_sqr()).collect()
    }

    /// Draw a basis index from the amplitude distribution without
    /// collapsing the state.
    pub fn sample(&mut self) -> usize {
        let r: f64 = self.rng.gen();
        let mut cumulative = 0.0;
        for (i, amp) in self.state.iter().enumerate() {
            cumulative += amp.norm_sqr();
            if r < cumulative {
                return i;
            }
        }
        self.dim() - 1
    }

    /// Global projective measurement.
    ///
    /// Draws a basis index from the amplitude distribution, collapses the
    /// register onto it, and returns it.
    pub fn measure(&mut self) -> usize {
        let drawn = self.sample();
        self.state = Vector::basis(self.dim(), drawn);
        debug!(index = drawn, "register collapsed");
        drawn
    }

    /// Projective measurement of the single qubit `h`.
    ///
    /// Draws the outcome from the qubit's marginal distribution, zeroes
    /// every amplitude on the opposite branch and renormalises the rest.
    pub fn measure_qubit(&mut self, h: usize) -> SimResult<Outcome> {
        let n = self.num_qubits();
        if h >= n {
            return Err(SimError::InvalidHandle { qubit: h, width: n });
        }

        let bit = 1usize << (n - 1 - h);
        let p_one: f64 = self
            .state
            .iter()
            .enumerate()
            .filter(|(i, _)| i & bit != 0)
            .map(|(_, a)| a.norm_sqr())
            .sum();

        let r: f64 = self.rng.gen();
        let outcome = if r < 1.0 - p_one {
            Outcome::Zero
        } else {
            Outcome::One
        };

        let branch = if outcome.is_one() { p_one } else { 1.0 - p_one };
        if branch < EPSILON {
            return Err(SimError::DegenerateMeasurement { qubit: h });
        }

        let scale = Complex64::new(1.0 / branch.sqrt(), 0.0);
        let keep_one = outcome.is_one();
        let collapsed: Vec<Complex64> = self
            .state
            .iter()
            .enumerate()
            .map(|(i, a)| {
                if (i & bit != 0) == keep_one {
                    a * scale
                } else {
                    Complex64::new(0.0, 0.0)
                }
            })
            .collect();
        self.state = Vector::new(collapsed);

        debug!(qubit = h, outcome = %outcome, "qubit measured");
        Ok(outcome)
    }

    /// Monte-Carlo estimate of the reduced state of qubit `h` with the
    /// default shot count.
    pub fn estimate(&mut self, h: usize) -> SimResult<Register> {
        self.estimate_with(h, ESTIMATE_SHOTS)
    }

    /// Monte-Carlo estimate of the reduced state of qubit `h`.
    ///
    /// Runs `shots` independent measurements of `h` on copies of the
    /// current state (child generators are seeded from this register's
    /// generator) and returns the single-qubit state
    /// √(n₀/N)·|0⟩ + √(n₁/N)·|1⟩. Accurate to the binomial noise floor;
    /// intended for fidelity checks at ~1e-3 tolerance.
    pub fn estimate_with(&mut self, h: usize, shots: usize) -> SimResult<Register> {
        let n = self.num_qubits();
        if h >= n {
            return Err(SimError::InvalidHandle { qubit: h, width: n });
        }

        let mut ones = 0usize;
        for _ in 0..shots {
            let mut copy = Register {
                state: self.state.clone(),
                rng: StdRng::seed_from_u64(self.rng.gen()),
            };
            if copy.measure_qubit(h)?.is_one() {
                ones += 1;
            }
        }

        let p_one = ones as f64 / shots as f64;
        let state = Vector::from_reals(&[(1.0 - p_one).sqrt(), p_one.sqrt()]);
        Ok(Register {
            state,
            rng: StdRng::seed_from_u64(self.rng.gen()),
        })
    }

    /// Fidelity |⟨other|self⟩|² between two states of equal width.
    pub fn fidelity(&self, other: &Register) -> SimResult<f64> {
        Ok(self.state.inner_product(other.state())?.norm_sqr())
    }

    /// Whether this is the single-qubit state |0⟩ within tolerance.
    pub fn is_zero(&self) -> bool {
        self.state.equals(&Vector::basis(2, 0))
    }

    /// Whether this is the single-qubit state |1⟩ within tolerance.
    pub fn is_one(&self) -> bool {
        self.state.equals(&Vector::basis(2, 1))
    }

    /// State equality within tolerance.
    pub fn equals(&self, other: &Register) -> bool {
        self.state.equals(other.state())
    }
}
