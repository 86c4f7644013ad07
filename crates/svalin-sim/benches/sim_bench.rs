//! Benchmarks for gate application and sampling.
//!
//! Run with: cargo bench -p svalin-sim

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use svalin_sim::Simulator;

fn bell_pair(sim: &mut Simulator) {
    let q0 = sim.zero();
    let q1 = sim.zero();
    sim.h(&[q0]).unwrap().cnot(q0, q1).unwrap();
}

fn bench_gate_application(c: &mut Criterion) {
    let mut group = c.benchmark_group("gate_application");

    for num_qubits in &[2usize, 4, 6] {
        group.bench_with_input(
            BenchmarkId::new("h_all", num_qubits),
            num_qubits,
            |b, &n| {
                b.iter(|| {
                    let mut sim = Simulator::with_seed(1);
                    let qubits: Vec<_> = (0..n).map(|_| sim.zero()).collect();
                    sim.h(black_box(&qubits)).unwrap();
                });
            },
        );
    }

    group.finish();
}

fn bench_qft(c: &mut Criterion) {
    c.bench_function("qft_4", |b| {
        b.iter(|| {
            let mut sim = Simulator::with_seed(2);
            for _ in 0..4 {
                sim.zero();
            }
            sim.qft().unwrap();
        });
    });
}

fn bench_sampling(c: &mut Criterion) {
    c.bench_function("sample_1000", |b| {
        let mut sim = Simulator::with_seed(3);
        bell_pair(&mut sim);
        b.iter(|| {
            let counts = sim.sample(black_box(1000));
            black_box(counts);
        });
    });
}

criterion_group!(benches, bench_gate_application, bench_qft, bench_sampling);
criterion_main!(benches);
