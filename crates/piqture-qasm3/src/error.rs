//! Error types for the QASM3 emitter.

use thiserror::Error;

/// Errors that can occur during emission.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum EmitError {
    /// Parameter name that cannot be turned into a QASM identifier.
    #[error("Cannot emit parameter '{0}' as an OpenQASM identifier")]
    InvalidIdentifier(String),

    /// Measurement operands that do not pair up.
    #[error("Measurement on {qubits} qubits into {clbits} classical bits")]
    UnpairedMeasurement {
        /// Number of measured qubits.
        qubits: usize,
        /// Number of target classical bits.
        clbits: usize,
    },
}

/// Result type for emission.
pub type EmitResult<T> = Result<T, EmitError>;
