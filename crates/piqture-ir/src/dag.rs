//! Wire-level dependency graph of a circuit.
//!
//! Every wire owns an `In` and an `Out` node. Appending an operation splices
//! it in front of the `Out` node of each wire it touches, so edges always run
//! from earlier to later operations on the same wire.

use petgraph::Direction;
use petgraph::graph::{DiGraph, NodeIndex as PetNodeIndex};
use petgraph::visit::EdgeRef;
use rustc_hash::{FxHashMap, FxHashSet};
use serde::{Deserialize, Serialize};

use crate::error::{IrError, IrResult};
use crate::instruction::Instruction;
use crate::qubit::{ClbitId, QubitId};

pub type NodeIndex = PetNodeIndex<u32>;

/// A quantum or classical wire. Graph edges are labelled with the wire they
/// belong to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Wire {
    Qubit(QubitId),
    Clbit(ClbitId),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum DagNode {
    In(Wire),
    Out(Wire),
    Op(Instruction),
}

impl DagNode {
    pub fn instruction(&self) -> Option<&Instruction> {
        match self {
            DagNode::Op(inst) => Some(inst),
            DagNode::In(_) | DagNode::Out(_) => None,
        }
    }
}

/// Endpoints of one wire plus the last node spliced onto it.
#[derive(Debug, Clone, Copy)]
struct WireEnds {
    input: NodeIndex,
    output: NodeIndex,
    last: NodeIndex,
}

/// Append-only DAG of a circuit.
///
/// Operations keep their insertion order, which is also a topological order
/// of the graph.
#[derive(Debug, Clone, Default)]
pub struct CircuitDag {
    graph: DiGraph<DagNode, Wire, u32>,
    wires: FxHashMap<Wire, WireEnds>,
    ops: Vec<NodeIndex>,
    num_qubits: usize,
    num_clbits: usize,
}

impl CircuitDag {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a qubit wire. Re-adding a known qubit does nothing.
    pub fn add_qubit(&mut self, qubit: QubitId) {
        self.num_qubits += usize::from(self.add_wire(Wire::Qubit(qubit)));
    }

    /// Register a classical wire. Re-adding a known bit does nothing.
    pub fn add_clbit(&mut self, clbit: ClbitId) {
        self.num_clbits += usize::from(self.add_wire(Wire::Clbit(clbit)));
    }

    fn add_wire(&mut self, wire: Wire) -> bool {
        if self.wires.contains_key(&wire) {
            return false;
        }
        let input = self.graph.add_node(DagNode::In(wire));
        let output = self.graph.add_node(DagNode::Out(wire));
        self.graph.add_edge(input, output, wire);
        self.wires.insert(
            wire,
            WireEnds {
                input,
                output,
                last: input,
            },
        );
        true
    }

    /// Reject instructions with the wrong arity, unknown bits or a qubit
    /// listed twice.
    pub(crate) fn check_operands(&self, inst: &Instruction) -> IrResult<()> {
        let op = || inst.name().to_string();

        if let Some(gate) = inst.as_gate() {
            let expected = gate.num_qubits() as usize;
            if inst.qubits.len() != expected {
                return Err(IrError::Arity {
                    op: op(),
                    expected,
                    got: inst.qubits.len(),
                });
            }
        }

        let mut seen = FxHashSet::default();
        for &qubit in &inst.qubits {
            if !self.wires.contains_key(&Wire::Qubit(qubit)) {
                return Err(IrError::UnknownQubit { op: op(), qubit });
            }
            if !seen.insert(qubit) {
                return Err(IrError::RepeatedQubit { op: op(), qubit });
            }
        }
        match inst
            .clbits
            .iter()
            .find(|&&c| !self.wires.contains_key(&Wire::Clbit(c)))
        {
            Some(&clbit) => Err(IrError::UnknownClbit { op: op(), clbit }),
            None => Ok(()),
        }
    }

    /// Validate `inst` and splice it onto the end of its wires.
    pub fn apply(&mut self, inst: Instruction) -> IrResult<NodeIndex> {
        self.check_operands(&inst)?;

        let wires: Vec<Wire> = inst
            .qubits
            .iter()
            .copied()
            .map(Wire::Qubit)
            .chain(inst.clbits.iter().copied().map(Wire::Clbit))
            .collect();

        let node = self.graph.add_node(DagNode::Op(inst));
        for wire in wires {
            self.splice(wire, node)?;
        }
        self.ops.push(node);
        Ok(node)
    }

    fn splice(&mut self, wire: Wire, node: NodeIndex) -> IrResult<()> {
        let ends = self
            .wires
            .get_mut(&wire)
            .ok_or_else(|| IrError::InvalidDag(format!("no endpoints for {wire:?}")))?;
        let tail = self
            .graph
            .edges_connecting(ends.last, ends.output)
            .find(|e| *e.weight() == wire)
            .map(|e| e.id())
            .ok_or_else(|| IrError::InvalidDag(format!("{wire:?} does not reach its output")))?;

        self.graph.remove_edge(tail);
        self.graph.add_edge(ends.last, node, wire);
        self.graph.add_edge(node, ends.output, wire);
        ends.last = node;
        Ok(())
    }

    /// Operations in insertion order.
    pub fn ops(&self) -> impl Iterator<Item = &Instruction> + '_ {
        self.ops
            .iter()
            .filter_map(|&idx| self.graph[idx].instruction())
    }

    pub fn for_each_op_mut(&mut self, mut f: impl FnMut(&mut Instruction)) {
        for &idx in &self.ops {
            if let DagNode::Op(inst) = &mut self.graph[idx] {
                f(inst);
            }
        }
    }

    pub fn num_qubits(&self) -> usize {
        self.num_qubits
    }

    pub fn num_clbits(&self) -> usize {
        self.num_clbits
    }

    pub fn num_ops(&self) -> usize {
        self.ops.len()
    }

    /// Length of the longest operation chain. Barriers count as layers.
    pub fn depth(&self) -> usize {
        let mut layer: FxHashMap<NodeIndex, usize> = FxHashMap::default();
        for &node in &self.ops {
            let below = self
                .graph
                .neighbors_directed(node, Direction::Incoming)
                .filter_map(|pred| layer.get(&pred).copied())
                .max()
                .unwrap_or(0);
            layer.insert(node, below + 1);
        }
        layer.into_values().max().unwrap_or(0)
    }

    pub fn graph(&self) -> &DiGraph<DagNode, Wire, u32> {
        &self.graph
    }

    /// Check that the graph is acyclic and that each wire can be walked from
    /// its `In` node to its `Out` node.
    pub fn verify_integrity(&self) -> IrResult<()> {
        if petgraph::algo::is_cyclic_directed(&self.graph) {
            return Err(IrError::InvalidDag("cycle detected".into()));
        }

        for (&wire, ends) in &self.wires {
            let mut node = ends.input;
            // An acyclic walk visits each node at most once.
            for _ in 0..self.graph.node_count() {
                if node == ends.output {
                    break;
                }
                node = self
                    .graph
                    .edges_directed(node, Direction::Outgoing)
                    .find(|e| *e.weight() == wire)
                    .map(|e| e.target())
                    .ok_or_else(|| IrError::InvalidDag(format!("{wire:?} breaks at {node:?}")))?;
            }
            if node != ends.output {
                return Err(IrError::InvalidDag(format!("{wire:?} never reaches its output")));
            }
        }
        Ok(())
    }
}
