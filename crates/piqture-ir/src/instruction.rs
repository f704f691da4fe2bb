//! One operation of a circuit together with the bits it touches.

use serde::{Deserialize, Serialize};

use crate::error::{IrError, IrResult};
use crate::gate::StandardGate;
use crate::qubit::{ClbitId, QubitId};

/// What an [`Instruction`] does.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum InstructionKind {
    Gate(StandardGate),
    /// Reads `qubits[i]` into `clbits[i]`.
    Measure,
    /// Returns the qubit to `|0⟩`.
    Reset,
    /// Ordering fence; no effect on the state.
    Barrier,
}

/// An operation with its operands. Only measurements carry classical bits.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Instruction {
    pub kind: InstructionKind,
    pub qubits: Vec<QubitId>,
    pub clbits: Vec<ClbitId>,
}

impl Instruction {
    fn quantum(kind: InstructionKind, qubits: impl IntoIterator<Item = QubitId>) -> Self {
        Self {
            kind,
            qubits: qubits.into_iter().collect(),
            clbits: Vec::new(),
        }
    }

    /// `gate` on `qubits`, controls first.
    pub fn gate(gate: StandardGate, qubits: impl IntoIterator<Item = QubitId>) -> Self {
        Self::quantum(InstructionKind::Gate(gate), qubits)
    }

    pub fn measure(qubit: QubitId, clbit: ClbitId) -> Self {
        Self {
            kind: InstructionKind::Measure,
            qubits: vec![qubit],
            clbits: vec![clbit],
        }
    }

    /// A single measurement over several qubits, pairing them with `clbits`
    /// position by position. Both lists must be the same length.
    pub fn measure_all(
        qubits: impl IntoIterator<Item = QubitId>,
        clbits: impl IntoIterator<Item = ClbitId>,
    ) -> IrResult<Self> {
        let qubits: Vec<QubitId> = qubits.into_iter().collect();
        let clbits: Vec<ClbitId> = clbits.into_iter().collect();
        if qubits.len() == clbits.len() {
            Ok(Self {
                kind: InstructionKind::Measure,
                qubits,
                clbits,
            })
        } else {
            Err(IrError::MeasureMismatch {
                qubits: qubits.len(),
                clbits: clbits.len(),
            })
        }
    }

    pub fn reset(qubit: QubitId) -> Self {
        Self::quantum(InstructionKind::Reset, [qubit])
    }

    pub fn barrier(qubits: impl IntoIterator<Item = QubitId>) -> Self {
        Self::quantum(InstructionKind::Barrier, qubits)
    }

    pub fn is_measure(&self) -> bool {
        self.kind == InstructionKind::Measure
    }

    pub fn is_barrier(&self) -> bool {
        self.kind == InstructionKind::Barrier
    }

    /// The gate, unless this is a non-unitary operation.
    pub fn as_gate(&self) -> Option<&StandardGate> {
        match &self.kind {
            InstructionKind::Gate(g) => Some(g),
            _ => None,
        }
    }

    pub fn gate_mut(&mut self) -> Option<&mut StandardGate> {
        match &mut self.kind {
            InstructionKind::Gate(g) => Some(g),
            _ => None,
        }
    }

    /// Copy with every operand sent through the given maps.
    pub(crate) fn remapped(
        &self,
        qubit_map: impl Fn(QubitId) -> QubitId,
        clbit_map: impl Fn(ClbitId) -> ClbitId,
    ) -> Self {
        Self {
            kind: self.kind.clone(),
            qubits: self.qubits.iter().copied().map(qubit_map).collect(),
            clbits: self.clbits.iter().copied().map(clbit_map).collect(),
        }
    }

    /// OpenQASM keyword of the operation.
    pub fn name(&self) -> &str {
        match &self.kind {
            InstructionKind::Gate(g) => g.name(),
            InstructionKind::Measure => "measure",
            InstructionKind::Reset => "reset",
            InstructionKind::Barrier => "barrier",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gate_name_and_operands() {
        let inst = Instruction::gate(StandardGate::H, [QubitId(0)]);
        assert!(inst.as_gate().is_some());
        assert!(inst.clbits.is_empty());
        assert_eq!(inst.name(), "h");
        assert_eq!(Instruction::reset(QubitId(2)).name(), "reset");
    }

    #[test]
    fn test_measure_all_length_mismatch() {
        let err = Instruction::measure_all([QubitId(0), QubitId(1)], [ClbitId(0)]).unwrap_err();
        assert!(matches!(
            err,
            IrError::MeasureMismatch {
                qubits: 2,
                clbits: 1
            }
        ));
    }

    #[test]
    fn test_remapped() {
        let inst = Instruction::gate(StandardGate::CX, [QubitId(0), QubitId(1)]);
        let moved = inst.remapped(|q| QubitId(q.0 + 3), |c| c);
        assert_eq!(moved.qubits, vec![QubitId(3), QubitId(4)]);
        assert_eq!(moved.kind, inst.kind);
    }
}
