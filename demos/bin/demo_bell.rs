//! Prepare a Bell pair and print its sampled histogram.

use svalin_demos::circuits;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let mut sim = circuits::bell().expect("bell circuit construction");

    println!("Bell pair probabilities:");
    for (i, p) in sim.probability().iter().enumerate() {
        println!("  |{i:02b}⟩  {p:.4}");
    }

    let shots = 1024;
    let counts = sim.sample(shots);
    let mut sorted: Vec<_> = counts.into_iter().collect();
    sorted.sort();

    println!("\n{shots} shots:");
    for (bits, count) in sorted {
        println!("  |{bits}⟩  {count}");
    }
}
