//! Measurement postulates: collapse consistency, normalisation, POVM
//! completeness.

use num_complex::Complex64;
use svalin_gate as gate;
use svalin_linalg::{Vector, EPSILON};
use svalin_sim::{Register, Simulator};

#[test]
fn measured_qubit_zeroes_the_opposite_branch() {
    let mut sim = Simulator::with_seed(41);
    let q0 = sim.zero();
    let q1 = sim.zero();
    let q2 = sim.zero();

    sim.h(&[q0, q1, q2]).unwrap();
    sim.cr(q0, q2, 2).unwrap();

    let outcome = sim.measure(q1).unwrap();

    let n = sim.num_qubits();
    let bit = 1usize << (n - 1 - 1);
    let mut kept = 0.0;
    for (i, a) in sim.amplitudes().iter().enumerate() {
        if (i & bit != 0) != outcome.is_one() {
            assert!(a.norm() < EPSILON, "amplitude {i} survived the collapse");
        } else {
            kept += a.norm_sqr();
        }
    }
    assert!((kept - 1.0).abs() < EPSILON);
}

#[test]
fn normalisation_survives_gate_sequences() {
    let mut sim = Simulator::with_seed(42);
    let q0 = sim.alloc(1.0, 2.0);
    let q1 = sim.zero();
    let q2 = sim.one();

    sim.h(&[q0, q2])
        .unwrap()
        .t(&[q1])
        .unwrap()
        .cnot(q0, q1)
        .unwrap()
        .s(&[q2])
        .unwrap()
        .cz(q1, q2)
        .unwrap()
        .swap(q0, q2)
        .unwrap()
        .y(&[q1])
        .unwrap();

    let total: f64 = sim.probability().iter().sum();
    assert!((total - 1.0).abs() < EPSILON);
    assert!(sim.register().state().is_unit());
}

#[test]
fn povm_elements_complete_and_discriminate() {
    let weight = Complex64::new(2.0_f64.sqrt() / (1.0 + 2.0_f64.sqrt()), 0.0);

    // E1 ∝ |1⟩⟨1| never fires on |0⟩.
    let one = Vector::basis(2, 1);
    let e1 = one.outer_product(&one).unwrap().scale(weight);

    // E2 ∝ |−⟩⟨−| never fires on |+⟩.
    let minus = Vector::from_reals(&[1.0, -1.0]);
    let e2 = minus
        .outer_product(&minus)
        .unwrap()
        .scale(Complex64::new(0.5, 0.0))
        .scale(weight);

    let e3 = gate::id(1).sub(&e1).unwrap().sub(&e2).unwrap();

    // Completeness: E1 + E2 + E3 = I.
    let total = e1.add(&e2).unwrap().add(&e3).unwrap();
    assert!(total.equals(&gate::id(1)));

    // ⟨0|E1|0⟩ = 0.
    let mut q0 = Register::zero();
    q0.apply(&e1).unwrap();
    let overlap0 = q0
        .state()
        .inner_product(Register::zero().state())
        .unwrap();
    assert!(overlap0.norm() < EPSILON);

    // ⟨+|E2|+⟩ = 0.
    let mut plus = Register::zero();
    plus.apply(&gate::h()).unwrap();
    let reference = Vector::from_reals(&[1.0, 1.0]).normalized();
    plus.apply(&e2).unwrap();
    let overlap_plus = plus.state().inner_product(&reference).unwrap();
    assert!(overlap_plus.norm() < EPSILON);
}

#[test]
fn projector_from_outer_product_is_idempotent() {
    let plus = Vector::from_reals(&[1.0, 1.0]).normalized();
    let proj = plus.outer_product(&plus).unwrap();

    assert!(proj.matmul(&proj).unwrap().equals(&proj));
    assert!((proj.trace() - Complex64::new(1.0, 0.0)).norm() < EPSILON);
    assert!(proj.equals(&proj.dagger()));
}

#[test]
fn global_measurement_collapses_to_sampled_state() {
    let mut reg = Register::zeros(2).with_seed(43);
    reg.apply(&gate::h().tensor_pow(2)).unwrap();

    let drawn = reg.measure();
    assert!(drawn < 4);

    let p = reg.probability();
    for (i, pp) in p.iter().enumerate() {
        let expected = if i == drawn { 1.0 } else { 0.0 };
        assert!((pp - expected).abs() < EPSILON);
    }
}
