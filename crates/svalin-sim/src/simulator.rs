//! High-level circuit facade over the qubit register.

use num_complex::Complex64;
use rustc_hash::FxHashMap;
use tracing::debug;

use svalin_gate as gate;
use svalin_linalg::Matrix;

use crate::error::{SimError, SimResult};
use crate::qubit::{Outcome, QubitId};
use crate::register::Register;

/// A growing quantum circuit simulator.
///
/// The simulator owns one [`Register`] and hands out a stable [`QubitId`]
/// for every qubit allocated; the handle equals the qubit's bit position in
/// the basis index and never moves. Gate methods lift their operand to the
/// full current width and return `&mut Self` for chaining.
///
/// # Example
///
/// ```rust
/// use svalin_sim::Simulator;
///
/// let mut sim = Simulator::new();
/// let q0 = sim.zero();
/// let q1 = sim.zero();
///
/// sim.h(&[q0]).unwrap().cnot(q0, q1).unwrap();
///
/// let p = sim.probability();
/// assert!((p[0] - 0.5).abs() < 1e-13);
/// assert!((p[3] - 0.5).abs() < 1e-13);
/// ```
#[derive(Debug)]
pub struct Simulator {
    register: Register,
}

impl Simulator {
    /// Create an empty simulator.
    pub fn new() -> Self {
        Self {
            register: Register::scalar(),
        }
    }

    /// Create an empty simulator with a seeded random generator.
    pub fn with_seed(seed: u64) -> Self {
        Self {
            register: Register::scalar().with_seed(seed),
        }
    }

    // =========================================================================
    // Qubit allocation
    // =========================================================================

    /// Allocate a qubit in state |0⟩.
    pub fn zero(&mut self) -> QubitId {
        self.extend(Register::zero())
    }

    /// Allocate a qubit in state |1⟩.
    pub fn one(&mut self) -> QubitId {
        self.extend(Register::one())
    }

    /// Allocate a qubit with literal amplitudes, normalised.
    ///
    /// `alloc(1.0, 2.0)` yields the qubit with probabilities 1/5 and 4/5.
    ///
    /// # Panics
    ///
    /// Panics if both amplitudes are zero.
    pub fn alloc(&mut self, a: impl Into<Complex64>, b: impl Into<Complex64>) -> QubitId {
        self.extend(Register::new(&[a.into(), b.into()]))
    }

    fn extend(&mut self, q: Register) -> QubitId {
        self.register.tensor_product(&q);
        let id = QubitId((self.num_qubits() - 1) as u32);
        debug!(%id, "qubit allocated");
        id
    }

    // =========================================================================
    // Single-qubit gates
    // =========================================================================

    /// Apply Hadamard to each listed qubit.
    pub fn h(&mut self, qubits: &[QubitId]) -> SimResult<&mut Self> {
        self.apply_single(&gate::h(), qubits)
    }

    /// Apply Pauli-X to each listed qubit.
    pub fn x(&mut self, qubits: &[QubitId]) -> SimResult<&mut Self> {
        self.apply_single(&gate::x(), qubits)
    }

    /// Apply Pauli-Y to each listed qubit.
    pub fn y(&mut self, qubits: &[QubitId]) -> SimResult<&mut Self> {
        self.apply_single(&gate::y(), qubits)
    }

    /// Apply Pauli-Z to each listed qubit.
    pub fn z(&mut self, qubits: &[QubitId]) -> SimResult<&mut Self> {
        self.apply_single(&gate::z(), qubits)
    }

    /// Apply the S gate to each listed qubit.
    pub fn s(&mut self, qubits: &[QubitId]) -> SimResult<&mut Self> {
        self.apply_single(&gate::s(), qubits)
    }

    /// Apply the T gate to each listed qubit.
    pub fn t(&mut self, qubits: &[QubitId]) -> SimResult<&mut Self> {
        self.apply_single(&gate::t(), qubits)
    }

    /// Lift `g` to the current width with `g` at every selected position
    /// and the identity elsewhere, then apply the widened operator once.
    fn apply_single(&mut self, g: &Matrix, qubits: &[QubitId]) -> SimResult<&mut Self> {
        let n = self.require_qubits()?;
        let mut selected = vec![false; n];
        for &q in qubits {
            selected[self.index_of(q)?] = true;
        }

        let identity = gate::id(1);
        let mut op = if selected[0] { g.clone() } else { identity.clone() };
        for &hit in &selected[1..] {
            op = op.tensor_product(if hit { g } else { &identity });
        }

        self.register.apply(&op)?;
        Ok(self)
    }

    // =========================================================================
    // Controlled gates
    // =========================================================================

    /// Apply CNOT with control `c` and target `t`.
    pub fn cnot(&mut self, c: QubitId, t: QubitId) -> SimResult<&mut Self> {
        let n = self.require_qubits()?;
        let m = gate::cnot(n, self.index_of(c)?, self.index_of(t)?)?;
        self.register.apply(&m)?;
        Ok(self)
    }

    /// Apply controlled-Z with control `c` and target `t`.
    pub fn cz(&mut self, c: QubitId, t: QubitId) -> SimResult<&mut Self> {
        let n = self.require_qubits()?;
        let m = gate::cz(n, self.index_of(c)?, self.index_of(t)?)?;
        self.register.apply(&m)?;
        Ok(self)
    }

    /// Apply controlled-R(k) with control `c` and target `t`.
    pub fn cr(&mut self, c: QubitId, t: QubitId, k: u32) -> SimResult<&mut Self> {
        let n = self.require_qubits()?;
        let m = gate::cr(n, self.index_of(c)?, self.index_of(t)?, k)?;
        self.register.apply(&m)?;
        Ok(self)
    }

    /// Swap qubits `a` and `b`.
    pub fn swap(&mut self, a: QubitId, b: QubitId) -> SimResult<&mut Self> {
        let n = self.require_qubits()?;
        let m = gate::swap(n, self.index_of(a)?, self.index_of(b)?)?;
        self.register.apply(&m)?;
        Ok(self)
    }

    /// Apply NOT on `t` controlled by every qubit in `controls`.
    pub fn controlled_not(&mut self, controls: &[QubitId], t: QubitId) -> SimResult<&mut Self> {
        let n = self.require_qubits()?;
        let controls = self.indices_of(controls)?;
        let m = gate::controlled_not(n, &controls, self.index_of(t)?)?;
        self.register.apply(&m)?;
        Ok(self)
    }

    /// Apply Z on `t` controlled by every qubit in `controls`.
    pub fn controlled_z(&mut self, controls: &[QubitId], t: QubitId) -> SimResult<&mut Self> {
        let n = self.require_qubits()?;
        let controls = self.indices_of(controls)?;
        let m = gate::controlled_z(n, &controls, self.index_of(t)?)?;
        self.register.apply(&m)?;
        Ok(self)
    }

    // =========================================================================
    // Classically-conditioned corrections
    // =========================================================================

    /// Apply X on `q` when `cond` holds; no-op otherwise.
    pub fn condition_x(&mut self, cond: bool, q: QubitId) -> SimResult<&mut Self> {
        if cond {
            self.x(&[q])
        } else {
            Ok(self)
        }
    }

    /// Apply Z on `q` when `cond` holds; no-op otherwise.
    pub fn condition_z(&mut self, cond: bool, q: QubitId) -> SimResult<&mut Self> {
        if cond {
            self.z(&[q])
        } else {
            Ok(self)
        }
    }

    // =========================================================================
    // Quantum Fourier Transform
    // =========================================================================

    /// Apply the Quantum Fourier Transform to all allocated qubits,
    /// including the final bit-reversal swap network.
    pub fn qft(&mut self) -> SimResult<&mut Self> {
        let n = self.require_qubits()?;
        for i in 0..n {
            self.apply_single_at(&gate::h(), i)?;
            for j in (i + 1)..n {
                let k = (j - i + 1) as u32;
                let m = gate::cr(n, j, i, k)?;
                self.register.apply(&m)?;
            }
        }
        self.reverse_qubits(n)?;
        Ok(self)
    }

    /// Apply the inverse Quantum Fourier Transform to all allocated qubits:
    /// the daggered rotation network of [`Self::qft`] in reverse order.
    pub fn inverse_qft(&mut self) -> SimResult<&mut Self> {
        let n = self.require_qubits()?;
        self.reverse_qubits(n)?;
        for i in (0..n).rev() {
            for j in ((i + 1)..n).rev() {
                let k = (j - i + 1) as u32;
                let m = gate::controlled(&gate::r(k).dagger(), n, &[j], i)?;
                self.register.apply(&m)?;
            }
            self.apply_single_at(&gate::h(), i)?;
        }
        Ok(self)
    }

    fn reverse_qubits(&mut self, n: usize) -> SimResult<()> {
        for i in 0..n / 2 {
            let m = gate::swap(n, i, n - 1 - i)?;
            self.register.apply(&m)?;
        }
        Ok(())
    }

    fn apply_single_at(&mut self, g: &Matrix, position: usize) -> SimResult<()> {
        let n = self.num_qubits();
        let identity = gate::id(1);
        let mut op = if position == 0 { g.clone() } else { identity.clone() };
        for p in 1..n {
            op = op.tensor_product(if p == position { g } else { &identity });
        }
        self.register.apply(&op)?;
        Ok(())
    }

    // =========================================================================
    // Measurement and readout
    // =========================================================================

    /// Measure qubit `q`, collapsing its branch of the state.
    pub fn measure(&mut self, q: QubitId) -> SimResult<Outcome> {
        let h = self.index_of(q)?;
        self.register.measure_qubit(h)
    }

    /// Measure the whole register, collapsing it to one basis state, and
    /// return that state's index.
    pub fn measure_all(&mut self) -> SimResult<usize> {
        self.require_qubits()?;
        Ok(self.register.measure())
    }

    /// Monte-Carlo estimate of the reduced state of qubit `q`.
    pub fn estimate(&mut self, q: QubitId) -> SimResult<Register> {
        let h = self.index_of(q)?;
        self.register.estimate(h)
    }

    /// The probability distribution over basis states.
    pub fn probability(&self) -> Vec<f64> {
        self.register.probability()
    }

    /// The raw amplitudes.
    pub fn amplitudes(&self) -> &[Complex64] {
        self.register.amplitudes()
    }

    /// The number of allocated qubits.
    pub fn num_qubits(&self) -> usize {
        self.register.num_qubits()
    }

    /// The underlying register.
    pub fn register(&self) -> &Register {
        &self.register
    }

    /// Sample `shots` measurement outcomes without collapsing the state,
    /// returning a histogram keyed by MSB-first bitstring.
    pub fn sample(&mut self, shots: u32) -> FxHashMap<String, u32> {
        let n = self.num_qubits();
        let mut counts: FxHashMap<String, u32> = FxHashMap::default();
        for shot in 0..shots {
            let drawn = self.register.sample();
            *counts.entry(format!("{drawn:0n$b}")).or_insert(0) += 1;
            if shot > 0 && shot % 1000 == 0 {
                debug!("completed {shot} shots");
            }
        }
        counts
    }

    // =========================================================================
    // Handle checks
    // =========================================================================

    fn index_of(&self, q: QubitId) -> SimResult<usize> {
        let width = self.num_qubits();
        let index = q.index();
        if index >= width {
            return Err(SimError::InvalidHandle {
                qubit: index,
                width,
            });
        }
        Ok(index)
    }

    fn indices_of(&self, qubits: &[QubitId]) -> SimResult<Vec<usize>> {
        qubits.iter().map(|&q| self.index_of(q)).collect()
    }

    fn require_qubits(&self) -> SimResult<usize> {
        let n = self.num_qubits();
        if n == 0 {
            return Err(SimError::EmptyRegister);
        }
        Ok(n)
    }
}

impl Default for Simulator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use svalin_linalg::EPSILON;

    #[test]
    fn test_allocation_handles() {
        let mut sim = Simulator::new();
        assert_eq!(sim.num_qubits(), 0);

        let q0 = sim.zero();
        let q1 = sim.one();
        let q2 = sim.alloc(1.0, 2.0);
        assert_eq!(q0, QubitId(0));
        assert_eq!(q1, QubitId(1));
        assert_eq!(q2, QubitId(2));
        assert_eq!(sim.num_qubits(), 3);
    }

    #[test]
    fn test_gates_on_empty_register() {
        let mut sim = Simulator::new();
        assert!(matches!(sim.h(&[]), Err(SimError::EmptyRegister)));
        assert!(matches!(sim.qft(), Err(SimError::EmptyRegister)));
        assert!(matches!(sim.measure_all(), Err(SimError::EmptyRegister)));
    }

    #[test]
    fn test_invalid_handle() {
        let mut sim = Simulator::new();
        let q0 = sim.zero();
        assert!(matches!(
            sim.h(&[QubitId(1)]),
            Err(SimError::InvalidHandle { qubit: 1, width: 1 })
        ));
        assert!(matches!(
            sim.cnot(q0, QubitId(5)),
            Err(SimError::InvalidHandle { qubit: 5, width: 1 })
        ));
    }

    #[test]
    fn test_fluent_bell_pair() {
        let mut sim = Simulator::with_seed(1);
        let q0 = sim.zero();
        let q1 = sim.zero();

        sim.h(&[q0]).unwrap().cnot(q0, q1).unwrap();

        let p = sim.probability();
        assert!((p[0] - 0.5).abs() < EPSILON);
        assert!((p[3] - 0.5).abs() < EPSILON);
    }

    #[test]
    fn test_condition_gates() {
        let mut sim = Simulator::with_seed(2);
        let q0 = sim.zero();

        sim.condition_x(false, q0).unwrap();
        assert!((sim.probability()[0] - 1.0).abs() < EPSILON);

        sim.condition_x(true, q0).unwrap();
        assert!((sim.probability()[1] - 1.0).abs() < EPSILON);
    }

    #[test]
    fn test_multi_target_single_gate() {
        let mut sim = Simulator::with_seed(3);
        let q0 = sim.zero();
        let q1 = sim.zero();
        let q2 = sim.zero();

        sim.x(&[q0, q2]).unwrap();
        // |101⟩
        assert!((sim.probability()[5] - 1.0).abs() < EPSILON);
        let _ = q1;
    }

    #[test]
    fn test_sample_deterministic_state() {
        let mut sim = Simulator::with_seed(4);
        let q0 = sim.zero();
        sim.x(&[q0]).unwrap();

        let counts = sim.sample(100);
        assert_eq!(counts.get("1"), Some(&100));
        assert_eq!(counts.len(), 1);
    }
}
