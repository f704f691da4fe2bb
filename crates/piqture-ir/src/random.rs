//! Seeded random circuit generation.
//!
//! Each layer shuffles the qubits and packs them greedily into gates whose
//! arity is drawn from `1..=max_operands`. Rotation angles are uniform in
//! `[0, 2π)`. The same seed always yields the same circuit.

use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use std::f64::consts::PI;

use crate::circuit::Circuit;
use crate::error::{IrError, IrResult};
use crate::gate::StandardGate;
use crate::qubit::QubitId;

const ONE_QUBIT_POOL: usize = 14;
const TWO_QUBIT_POOL: usize = 12;
const THREE_QUBIT_POOL: usize = 2;

fn angle(rng: &mut impl Rng) -> f64 {
    rng.gen_range(0.0..2.0 * PI)
}

fn one_qubit_gate(rng: &mut impl Rng) -> StandardGate {
    match rng.gen_range(0..ONE_QUBIT_POOL) {
        0 => StandardGate::I,
        1 => StandardGate::X,
        2 => StandardGate::Y,
        3 => StandardGate::Z,
        4 => StandardGate::H,
        5 => StandardGate::S,
        6 => StandardGate::Sdg,
        7 => StandardGate::T,
        8 => StandardGate::Tdg,
        9 => StandardGate::SX,
        10 => StandardGate::Rx(angle(rng).into()),
        11 => StandardGate::Ry(angle(rng).into()),
        12 => StandardGate::Rz(angle(rng).into()),
        _ => StandardGate::U(angle(rng).into(), angle(rng).into(), angle(rng).into()),
    }
}

fn two_qubit_gate(rng: &mut impl Rng) -> StandardGate {
    match rng.gen_range(0..TWO_QUBIT_POOL) {
        0 => StandardGate::CX,
        1 => StandardGate::CY,
        2 => StandardGate::CZ,
        3 => StandardGate::CH,
        4 => StandardGate::Swap,
        5 => StandardGate::CRx(angle(rng).into()),
        6 => StandardGate::CRy(angle(rng).into()),
        7 => StandardGate::CRz(angle(rng).into()),
        8 => StandardGate::CP(angle(rng).into()),
        9 => StandardGate::RXX(angle(rng).into()),
        10 => StandardGate::RYY(angle(rng).into()),
        _ => StandardGate::RZZ(angle(rng).into()),
    }
}

fn three_qubit_gate(rng: &mut impl Rng) -> StandardGate {
    match rng.gen_range(0..THREE_QUBIT_POOL) {
        0 => StandardGate::CCX,
        _ => StandardGate::CSwap,
    }
}

/// Generate a random circuit.
///
/// `max_operands` bounds gate arity and must be in `1..=3`. Arity is further
/// capped by `num_qubits`, so a one-qubit request only ever draws one-qubit
/// gates. With `measure`, every qubit is measured into its own classical bit.
#[allow(clippy::cast_possible_truncation)]
pub fn random_circuit(
    num_qubits: u32,
    depth: u32,
    max_operands: u32,
    measure: bool,
    seed: u64,
) -> IrResult<Circuit> {
    if num_qubits == 0 {
        return Err(IrError::InvalidRandomCircuit(
            "num_qubits must be at least 1".into(),
        ));
    }
    if !(1..=3).contains(&max_operands) {
        return Err(IrError::InvalidRandomCircuit(format!(
            "max_operands must be between 1 and 3, got {max_operands}"
        )));
    }

    let mut rng = rand::rngs::SmallRng::seed_from_u64(seed);
    let mut circuit = Circuit::with_size(format!("random_{num_qubits}"), num_qubits, 0);
    let max_arity = max_operands.min(num_qubits) as usize;

    for _layer in 0..depth {
        let mut remaining: Vec<QubitId> = circuit.qubit_ids().collect();
        remaining.shuffle(&mut rng);

        while !remaining.is_empty() {
            let arity = rng.gen_range(1..=max_arity.min(remaining.len()));
            let operands: Vec<QubitId> = remaining.drain(..arity).collect();
            let gate = match arity {
                1 => one_qubit_gate(&mut rng),
                2 => two_qubit_gate(&mut rng),
                _ => three_qubit_gate(&mut rng),
            };
            circuit.gate(gate, operands)?;
        }
    }

    if measure {
        circuit.measure_all()?;
    }

    tracing::trace!(
        num_qubits,
        depth,
        seed,
        ops = circuit.num_ops(),
        "generated random circuit"
    );

    Ok(circuit)
}
