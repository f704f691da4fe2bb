//! Circuit substrate for piqture.
//!
//! Image encoders, tensor-network ansätze and quanvolutional filters all
//! emit a [`Circuit`]: a fixed register of qubits and classical bits with an
//! append-only list of [`Instruction`]s. Gate angles are
//! [`ParameterExpression`]s, so a circuit can stay symbolic over a
//! [`ParameterVector`] until values are bound.
//!
//! The instruction list is what circuit equality compares. A [`CircuitDag`]
//! mirrors it for depth queries and wire validation.
//!
//! Gates beyond the usual single and two-qubit set are the multi-controlled
//! [`StandardGate::MCX`] and [`StandardGate::MCRy`]. [`random_circuit`]
//! builds seeded filters.
//!
//! ```rust
//! use piqture_ir::{Circuit, QubitId};
//!
//! let mut circuit = Circuit::with_size("bell_state", 2, 2);
//! circuit.h(QubitId(0)).unwrap();
//! circuit.cx(QubitId(0), QubitId(1)).unwrap();
//! circuit.measure_all().unwrap();
//!
//! assert_eq!(circuit.num_qubits(), 2);
//! assert_eq!(circuit.depth(), 3);
//! ```
//!
//! Symbolic angles bind by vector:
//!
//! ```rust
//! use piqture_ir::{Circuit, ParameterVector, QubitId};
//!
//! let theta = ParameterVector::new("theta", 2);
//! let mut circuit = Circuit::with_size("ansatz", 2, 0);
//! circuit.ry(theta.param(0), QubitId(0)).unwrap();
//! circuit.ry(theta.param(1), QubitId(1)).unwrap();
//! assert_eq!(circuit.parameters().len(), 2);
//!
//! circuit.assign_vector(&theta, &[0.1, 0.2]).unwrap();
//! assert!(circuit.parameters().is_empty());
//! ```

pub mod circuit;
pub mod dag;
pub mod error;
pub mod gate;
pub mod instruction;
pub mod parameter;
pub mod qubit;
pub mod random;
pub mod vector;

pub use circuit::Circuit;
pub use dag::{CircuitDag, DagNode, NodeIndex, Wire};
pub use error::{IrError, IrResult};
pub use gate::StandardGate;
pub use instruction::{Instruction, InstructionKind};
pub use parameter::{BinaryOp, ParameterExpression};
pub use qubit::{ClbitId, QubitId};
pub use random::random_circuit;
pub use vector::{ParameterCursor, ParameterVector};
