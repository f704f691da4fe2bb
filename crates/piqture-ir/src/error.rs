use crate::qubit::{ClbitId, QubitId};
use thiserror::Error;

/// Failures while building or editing circuits.
///
/// Operand errors name the offending instruction (`cx`, `measure`, ...).
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum IrError {
    #[error("{op}: qubit {qubit} is not part of the circuit")]
    UnknownQubit { op: String, qubit: QubitId },

    #[error("{op}: classical bit {clbit} is not part of the circuit")]
    UnknownClbit { op: String, clbit: ClbitId },

    #[error("{op}: qubit {qubit} appears more than once")]
    RepeatedQubit { op: String, qubit: QubitId },

    #[error("{op} acts on {expected} qubits but was given {got}")]
    Arity {
        op: String,
        expected: usize,
        got: usize,
    },

    #[error("cannot measure {qubits} qubits into {clbits} classical bits")]
    MeasureMismatch { qubits: usize, clbits: usize },

    /// Wire bookkeeping no longer matches the graph.
    #[error("corrupt circuit graph: {0}")]
    InvalidDag(String),

    #[error("cannot compose a {other}-qubit circuit onto {available} qubits")]
    ComposeMismatch { other: usize, available: usize },

    #[error("parameter vector '{name}' has {expected} elements, got {got} values")]
    ParameterLengthMismatch {
        name: String,
        expected: usize,
        got: usize,
    },

    /// A [`ParameterCursor`](crate::ParameterCursor) ran dry.
    #[error("not enough parameters: needed {needed}, {remaining} remaining")]
    InsufficientParameters { needed: usize, remaining: usize },

    #[error("invalid random circuit request: {0}")]
    InvalidRandomCircuit(String),
}

pub type IrResult<T> = Result<T, IrError>;
