//! Circuit builders shared by the demo binaries.

use svalin_sim::{QubitId, SimResult, Simulator};

/// Prepare a Bell pair on a fresh simulator.
pub fn bell() -> SimResult<Simulator> {
    let mut sim = Simulator::new();
    let q0 = sim.zero();
    let q1 = sim.zero();

    sim.h(&[q0])?.cnot(q0, q1)?;
    Ok(sim)
}

/// Grover search for |011⟩ over three qubits, with a phase-kickback
/// ancilla as the fourth qubit.
pub fn grover() -> SimResult<Simulator> {
    let mut sim = Simulator::new();
    let q0 = sim.zero();
    let q1 = sim.zero();
    let q2 = sim.zero();
    let ancilla = sim.one();

    sim.h(&[q0, q1, q2, ancilla])?;

    oracle(&mut sim, q0, &[q0, q1, q2], ancilla)?;
    diffusion(&mut sim, &[q0, q1, q2], ancilla)?;

    Ok(sim)
}

/// Flip the ancilla's phase on the marked state: X frames the zero bit,
/// the multi-controlled NOT kicks the phase back.
fn oracle(
    sim: &mut Simulator,
    framed: QubitId,
    search: &[QubitId],
    ancilla: QubitId,
) -> SimResult<()> {
    sim.x(&[framed])?;
    sim.controlled_not(search, ancilla)?;
    sim.x(&[framed])?;
    Ok(())
}

/// The Grover diffusion operator over the search qubits.
fn diffusion(sim: &mut Simulator, search: &[QubitId], ancilla: QubitId) -> SimResult<()> {
    let mut all = search.to_vec();
    all.push(ancilla);

    sim.h(&all)?;
    sim.x(search)?;
    sim.controlled_z(&search[..search.len() - 1], search[search.len() - 1])?;
    sim.h(search)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bell_distribution() {
        let sim = bell().unwrap();
        let p = sim.probability();
        assert!((p[0] - 0.5).abs() < 1e-13);
        assert!((p[3] - 0.5).abs() < 1e-13);
    }

    #[test]
    fn test_grover_peak() {
        let sim = grover().unwrap();
        let p = sim.probability();
        assert!((p[7] - 0.78125).abs() < 1e-13);
    }
}
