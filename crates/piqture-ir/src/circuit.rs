//! High-level circuit builder API.

use std::collections::{BTreeMap, BTreeSet};

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::dag::CircuitDag;
use crate::error::{IrError, IrResult};
use crate::gate::StandardGate;
use crate::instruction::Instruction;
use crate::parameter::ParameterExpression;
use crate::qubit::{ClbitId, QubitId};
use crate::vector::ParameterVector;

/// A quantum circuit.
///
/// Two circuits compare equal when they have the same number of qubits and
/// classical bits and the same instruction sequence. The name is a label only.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(into = "CircuitData", try_from = "CircuitData")]
pub struct Circuit {
    name: String,
    dag: CircuitDag,
}

/// Flat serialized form of a [`Circuit`].
#[derive(Debug, Clone, Serialize, Deserialize)]
struct CircuitData {
    name: String,
    num_qubits: u32,
    num_clbits: u32,
    instructions: Vec<Instruction>,
}

impl From<Circuit> for CircuitData {
    #[allow(clippy::cast_possible_truncation)]
    fn from(circuit: Circuit) -> Self {
        Self {
            num_qubits: circuit.num_qubits() as u32,
            num_clbits: circuit.num_clbits() as u32,
            instructions: circuit.instructions().cloned().collect(),
            name: circuit.name,
        }
    }
}

impl TryFrom<CircuitData> for Circuit {
    type Error = IrError;

    fn try_from(data: CircuitData) -> IrResult<Self> {
        let mut circuit = Circuit::with_size(data.name, data.num_qubits, data.num_clbits);
        for inst in data.instructions {
            circuit.dag.apply(inst)?;
        }
        Ok(circuit)
    }
}

impl PartialEq for Circuit {
    fn eq(&self, other: &Self) -> bool {
        self.num_qubits() == other.num_qubits()
            && self.num_clbits() == other.num_clbits()
            && self.num_ops() == other.num_ops()
            && self.instructions().eq(other.instructions())
    }
}

/// Builder methods for gates without angles: `name => Variant(operands);`.
macro_rules! fixed_gates {
    ($($(#[$doc:meta])* $method:ident => $variant:ident($($q:ident),+);)*) => {
        $(
            $(#[$doc])*
            pub fn $method(&mut self, $($q: QubitId),+) -> IrResult<&mut Self> {
                self.gate(StandardGate::$variant, [$($q),+])
            }
        )*
    };
}

/// Builder methods for gates taking one angle `theta` ahead of the operands.
macro_rules! rotation_gates {
    ($($(#[$doc:meta])* $method:ident => $variant:ident($($q:ident),+);)*) => {
        $(
            $(#[$doc])*
            pub fn $method(
                &mut self,
                theta: impl Into<ParameterExpression>,
                $($q: QubitId),+
            ) -> IrResult<&mut Self> {
                self.gate(StandardGate::$variant(theta.into()), [$($q),+])
            }
        )*
    };
}

fn operands(controls: &[QubitId], target: QubitId) -> impl Iterator<Item = QubitId> + '_ {
    controls.iter().copied().chain(std::iter::once(target))
}

impl Circuit {
    /// A circuit with no wires.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            dag: CircuitDag::new(),
        }
    }

    pub fn with_size(name: impl Into<String>, num_qubits: u32, num_clbits: u32) -> Self {
        let mut circuit = Self::new(name);
        for _ in 0..num_qubits {
            circuit.add_qubit();
        }
        for _ in 0..num_clbits {
            circuit.add_clbit();
        }
        circuit
    }

    /// Append one qubit wire and return its id.
    #[allow(clippy::cast_possible_truncation)]
    pub fn add_qubit(&mut self) -> QubitId {
        let id = QubitId(self.dag.num_qubits() as u32);
        self.dag.add_qubit(id);
        id
    }

    #[allow(clippy::cast_possible_truncation)]
    pub fn add_clbit(&mut self) -> ClbitId {
        let id = ClbitId(self.dag.num_clbits() as u32);
        self.dag.add_clbit(id);
        id
    }

    /// Append `size` qubit wires.
    pub fn add_qreg(&mut self, size: u32) -> Vec<QubitId> {
        (0..size).map(|_| self.add_qubit()).collect()
    }

    pub fn add_creg(&mut self, size: u32) -> Vec<ClbitId> {
        (0..size).map(|_| self.add_clbit()).collect()
    }

    fn push(&mut self, instruction: Instruction) -> IrResult<&mut Self> {
        self.dag.apply(instruction)?;
        Ok(self)
    }

    fixed_gates! {
        /// Hadamard on `q`.
        h => H(q);
        /// Bit flip on `q`.
        x => X(q);
        /// Pauli Y on `q`.
        y => Y(q);
        /// Phase flip on `q`.
        z => Z(q);
        /// CNOT from `control` onto `target`.
        cx => CX(control, target);
        cz => CZ(control, target);
        swap => Swap(a, b);
        /// Toffoli with controls `c1`, `c2`.
        ccx => CCX(c1, c2, target);
    }

    rotation_gates! {
        rx => Rx(q);
        /// Y rotation, the pixel and block workhorse.
        ry => Ry(q);
        rz => Rz(q);
        /// Y rotation on `target` when `control` is set.
        cry => CRy(control, target);
    }

    /// Generic single-qubit rotation `U(θ, φ, λ)`.
    pub fn u(
        &mut self,
        theta: impl Into<ParameterExpression>,
        phi: impl Into<ParameterExpression>,
        lambda: impl Into<ParameterExpression>,
        qubit: QubitId,
    ) -> IrResult<&mut Self> {
        let gate = StandardGate::U(theta.into(), phi.into(), lambda.into());
        self.gate(gate, [qubit])
    }

    /// X on `target` when every qubit in `controls` is set.
    ///
    /// Up to two controls lower to `x`, `cx` and `ccx`.
    #[allow(clippy::cast_possible_truncation)]
    pub fn mcx(&mut self, controls: &[QubitId], target: QubitId) -> IrResult<&mut Self> {
        match *controls {
            [] => self.x(target),
            [c] => self.cx(c, target),
            [c1, c2] => self.ccx(c1, c2, target),
            _ => {
                let num_ctrl = controls.len() as u32;
                self.gate(StandardGate::MCX { num_ctrl }, operands(controls, target))
            }
        }
    }

    /// `Ry(theta)` on `target` when every qubit in `controls` is set.
    ///
    /// Zero and one control lower to `ry` and `cry`.
    #[allow(clippy::cast_possible_truncation)]
    pub fn mcry(
        &mut self,
        theta: impl Into<ParameterExpression>,
        controls: &[QubitId],
        target: QubitId,
    ) -> IrResult<&mut Self> {
        match *controls {
            [] => self.ry(theta, target),
            [c] => self.cry(theta, c, target),
            _ => {
                let gate = StandardGate::MCRy {
                    theta: theta.into(),
                    num_ctrl: controls.len() as u32,
                };
                self.gate(gate, operands(controls, target))
            }
        }
    }

    /// Append `gate` on `qubits`, controls first.
    pub fn gate(
        &mut self,
        gate: StandardGate,
        qubits: impl IntoIterator<Item = QubitId>,
    ) -> IrResult<&mut Self> {
        self.push(Instruction::gate(gate, qubits))
    }

    pub fn measure(&mut self, qubit: QubitId, clbit: ClbitId) -> IrResult<&mut Self> {
        self.push(Instruction::measure(qubit, clbit))
    }

    /// Measure qubit `i` into classical bit `i` for every qubit, growing the
    /// classical register when it is too short.
    pub fn measure_all(&mut self) -> IrResult<&mut Self> {
        let missing = self.num_qubits().saturating_sub(self.num_clbits());
        for _ in 0..missing {
            self.add_clbit();
        }
        let qubits: Vec<QubitId> = self.qubit_ids().collect();
        let clbits: Vec<ClbitId> = self.clbit_ids().take(qubits.len()).collect();
        self.push(Instruction::measure_all(qubits, clbits)?)
    }

    pub fn reset(&mut self, qubit: QubitId) -> IrResult<&mut Self> {
        self.push(Instruction::reset(qubit))
    }

    pub fn barrier(&mut self, qubits: impl IntoIterator<Item = QubitId>) -> IrResult<&mut Self> {
        self.push(Instruction::barrier(qubits))
    }

    /// Barrier across the whole register.
    pub fn barrier_all(&mut self) -> IrResult<&mut Self> {
        let qubits: Vec<QubitId> = self.qubit_ids().collect();
        self.barrier(qubits)
    }

    /// Append the instructions of `other` onto this circuit.
    ///
    /// Qubit `i` of `other` lands on `qubits[i]`, or on qubit `i` of `self`
    /// when no mapping is given. Classical bits map by index.
    pub fn compose(&mut self, other: &Circuit, qubits: Option<&[QubitId]>) -> IrResult<&mut Self> {
        let mapping: Vec<QubitId> = match qubits {
            Some(q) => q.to_vec(),
            None => self.qubit_ids().collect(),
        };
        if other.num_qubits() > mapping.len() {
            return Err(IrError::ComposeMismatch {
                other: other.num_qubits(),
                available: mapping.len(),
            });
        }

        // Check everything before touching the host so a failure leaves it as is.
        let mapped: Vec<Instruction> = other
            .instructions()
            .map(|inst| inst.remapped(|q| mapping[q.0 as usize], |c| c))
            .collect();
        for inst in &mapped {
            self.dag.check_operands(inst)?;
        }
        for inst in mapped {
            self.dag.apply(inst)?;
        }
        Ok(self)
    }

    /// Bind named symbols to values throughout the circuit.
    pub fn assign_parameters<'a>(
        &mut self,
        values: impl IntoIterator<Item = (&'a str, f64)>,
    ) -> &mut Self {
        let values: FxHashMap<String, f64> = values
            .into_iter()
            .map(|(name, v)| (name.to_string(), v))
            .collect();
        self.dag.for_each_op_mut(|inst| {
            if let Some(gate) = inst.gate_mut() {
                gate.bind(&values);
            }
        });
        self
    }

    /// Bind every element of `vector` to the matching entry of `values`.
    pub fn assign_vector(
        &mut self,
        vector: &ParameterVector,
        values: &[f64],
    ) -> IrResult<&mut Self> {
        if values.len() != vector.len() {
            return Err(IrError::ParameterLengthMismatch {
                name: vector.name().to_string(),
                expected: vector.len(),
                got: values.len(),
            });
        }
        let names: Vec<String> = (0..vector.len()).map(|i| vector.element_name(i)).collect();
        Ok(self.assign_parameters(names.iter().map(String::as_str).zip(values.iter().copied())))
    }

    /// Free symbol names, sorted.
    pub fn parameters(&self) -> BTreeSet<String> {
        let mut set = BTreeSet::new();
        for gate in self.instructions().filter_map(Instruction::as_gate) {
            for param in gate.parameters() {
                param.collect_symbols(&mut set);
            }
        }
        set
    }

    /// Remove every instruction, keeping qubits and classical bits.
    #[allow(clippy::cast_possible_truncation)]
    pub fn clear(&mut self) {
        let mut dag = CircuitDag::new();
        for q in 0..self.num_qubits() {
            dag.add_qubit(QubitId(q as u32));
        }
        for c in 0..self.num_clbits() {
            dag.add_clbit(ClbitId(c as u32));
        }
        self.dag = dag;
    }

    /// Label given at construction.
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn num_qubits(&self) -> usize {
        self.dag.num_qubits()
    }

    pub fn num_clbits(&self) -> usize {
        self.dag.num_clbits()
    }

    /// All qubit ids in index order.
    #[allow(clippy::cast_possible_truncation)]
    pub fn qubit_ids(&self) -> impl Iterator<Item = QubitId> {
        (0..self.num_qubits() as u32).map(QubitId)
    }

    /// All classical bit ids in index order.
    #[allow(clippy::cast_possible_truncation)]
    pub fn clbit_ids(&self) -> impl Iterator<Item = ClbitId> {
        (0..self.num_clbits() as u32).map(ClbitId)
    }

    /// Instructions in the order they were appended.
    pub fn instructions(&self) -> impl Iterator<Item = &Instruction> + '_ {
        self.dag.ops()
    }

    pub fn num_ops(&self) -> usize {
        self.dag.num_ops()
    }

    /// Longest chain of instructions sharing a wire.
    pub fn depth(&self) -> usize {
        self.dag.depth()
    }

    /// Instruction counts by name.
    pub fn count_ops(&self) -> BTreeMap<String, usize> {
        let mut counts = BTreeMap::new();
        for inst in self.instructions() {
            *counts.entry(inst.name().to_string()).or_insert(0) += 1;
        }
        counts
    }

    /// Dependency graph backing this circuit.
    pub fn dag(&self) -> &CircuitDag {
        &self.dag
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::PI;

    #[test]
    fn test_circuit_with_size() {
        let circuit = Circuit::with_size("test", 3, 2);
        assert_eq!(circuit.num_qubits(), 3);
        assert_eq!(circuit.num_clbits(), 2);
        assert_eq!(circuit.num_ops(), 0);
    }

    #[test]
    fn test_fluent_api() {
        let mut circuit = Circuit::with_size("test", 2, 2);
        circuit
            .h(QubitId(0))
            .unwrap()
            .cx(QubitId(0), QubitId(1))
            .unwrap()
            .measure(QubitId(0), ClbitId(0))
            .unwrap()
            .measure(QubitId(1), ClbitId(1))
            .unwrap();

        assert_eq!(circuit.depth(), 3);
    }

    #[test]
    fn test_equality_ignores_name() {
        let mut a = Circuit::with_size("a", 2, 0);
        let mut b = Circuit::with_size("b", 2, 0);
        a.h(QubitId(0)).unwrap();
        b.h(QubitId(0)).unwrap();
        assert_eq!(a, b);

        b.x(QubitId(1)).unwrap();
        assert_ne!(a, b);
        assert_ne!(Circuit::with_size("a", 2, 0), Circuit::with_size("a", 3, 0));
    }

    #[test]
    fn test_mcx_lowering() {
        let mut circuit = Circuit::with_size("test", 5, 0);
        circuit.mcx(&[], QubitId(4)).unwrap();
        circuit.mcx(&[QubitId(0)], QubitId(4)).unwrap();
        circuit.mcx(&[QubitId(0), QubitId(1)], QubitId(4)).unwrap();
        circuit
            .mcx(&[QubitId(0), QubitId(1), QubitId(2)], QubitId(4))
            .unwrap();

        let names: Vec<_> = circuit.instructions().map(Instruction::name).collect();
        assert_eq!(names, vec!["x", "cx", "ccx", "mcx"]);
        let last = circuit.instructions().last().unwrap();
        assert_eq!(
            last.qubits,
            vec![QubitId(0), QubitId(1), QubitId(2), QubitId(4)]
        );
    }

    #[test]
    fn test_compose_with_mapping() {
        let mut block = Circuit::with_size("block", 2, 0);
        block.ry(0.5, QubitId(0)).unwrap();
        block.cx(QubitId(0), QubitId(1)).unwrap();

        let mut host = Circuit::with_size("host", 4, 0);
        host.compose(&block, Some(&[QubitId(2), QubitId(3)]))
            .unwrap();

        let cx = host.instructions().nth(1).unwrap();
        assert_eq!(cx.qubits, vec![QubitId(2), QubitId(3)]);
    }

    #[test]
    fn test_failed_compose_leaves_host_untouched() {
        let mut other = Circuit::with_size("other", 1, 1);
        other.h(QubitId(0)).unwrap();
        other.measure(QubitId(0), ClbitId(0)).unwrap();

        let mut host = Circuit::with_size("host", 1, 0);
        let err = host.compose(&other, None).unwrap_err();
        assert!(matches!(err, IrError::UnknownClbit { clbit: ClbitId(0), .. }));
        assert_eq!(host.num_ops(), 0);
    }

    #[test]
    fn test_compose_too_large() {
        let block = Circuit::with_size("block", 3, 0);
        let mut host = Circuit::with_size("host", 4, 0);
        let err = host
            .compose(&block, Some(&[QubitId(0), QubitId(1)]))
            .unwrap_err();
        assert!(matches!(
            err,
            IrError::ComposeMismatch {
                other: 3,
                available: 2
            }
        ));
    }

    #[test]
    fn test_assign_vector() {
        let theta = ParameterVector::new("theta", 2);
        let mut circuit = Circuit::with_size("test", 1, 0);
        circuit.rx(theta.param(0), QubitId(0)).unwrap();
        circuit.ry(-theta.param(1), QubitId(0)).unwrap();
        assert_eq!(circuit.parameters().len(), 2);

        assert!(matches!(
            circuit.assign_vector(&theta, &[1.0]),
            Err(IrError::ParameterLengthMismatch { .. })
        ));

        circuit.assign_vector(&theta, &[PI, 0.5]).unwrap();
        assert!(circuit.parameters().is_empty());

        let mut expected = Circuit::with_size("test", 1, 0);
        expected.rx(PI, QubitId(0)).unwrap();
        expected.ry(-0.5, QubitId(0)).unwrap();
        assert_eq!(circuit, expected);
    }

    #[test]
    fn test_clear_keeps_wires() {
        let mut circuit = Circuit::with_size("test", 2, 1);
        circuit.h(QubitId(0)).unwrap();
        circuit.clear();
        assert_eq!(circuit.num_ops(), 0);
        assert_eq!(circuit, Circuit::with_size("other", 2, 1));
    }

    #[test]
    fn test_serde_roundtrip() {
        let mut circuit = Circuit::with_size("neqr", 3, 0);
        circuit.h(QubitId(0)).unwrap();
        circuit.mcx(&[QubitId(0), QubitId(1)], QubitId(2)).unwrap();

        let json = serde_json::to_string(&circuit).unwrap();
        let back: Circuit = serde_json::from_str(&json).unwrap();
        assert_eq!(back, circuit);
        assert_eq!(back.name(), "neqr");
    }

    #[test]
    fn test_barrier_and_reset() {
        let mut circuit = Circuit::with_size("test", 3, 0);
        circuit.barrier([QubitId(0), QubitId(2)]).unwrap();
        circuit.reset(QubitId(1)).unwrap();
        circuit.barrier_all().unwrap();

        let barriers: Vec<_> = circuit.instructions().filter(|i| i.is_barrier()).collect();
        assert_eq!(barriers.len(), 2);
        assert_eq!(barriers[0].qubits, vec![QubitId(0), QubitId(2)]);
        assert_eq!(barriers[1].qubits.len(), 3);
        assert!(circuit.barrier([QubitId(5)]).is_err());
    }

    #[test]
    fn test_count_ops() {
        let mut circuit = Circuit::with_size("test", 2, 0);
        circuit.h(QubitId(0)).unwrap().h(QubitId(1)).unwrap();
        circuit.measure_all().unwrap();
        let counts = circuit.count_ops();
        assert_eq!(counts["h"], 2);
        assert_eq!(counts["measure"], 1);
        assert_eq!(circuit.num_clbits(), 2);
    }
}
