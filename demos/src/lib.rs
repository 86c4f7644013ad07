//! Demo circuits for the Svalin simulator.

pub mod circuits;
