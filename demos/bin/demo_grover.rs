//! Run Grover search for |011⟩ and print the amplified distribution.

use svalin_demos::circuits;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let mut sim = circuits::grover().expect("grover circuit construction");

    println!("Grover search over 3 qubits, marked state |011⟩:");
    for (i, p) in sim.probability().iter().enumerate() {
        if *p > 1e-13 {
            println!("  |{:03b}⟩|{}⟩  {p:.5}", i >> 1, i & 1);
        }
    }

    let shots = 1024;
    let counts = sim.sample(shots);
    let mut sorted: Vec<_> = counts.into_iter().collect();
    sorted.sort_by(|a, b| b.1.cmp(&a.1));

    println!("\n{shots} shots (search register | ancilla):");
    for (bits, count) in sorted {
        println!("  |{bits}⟩  {count}");
    }
}
