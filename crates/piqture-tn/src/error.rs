//! Error types for tensor-network ansätze.

use piqture_ir::IrError;
use thiserror::Error;

/// Errors that can occur while building tensor-network circuits.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum TnError {
    /// Zero-sized image.
    #[error("Image dimensions cannot be zero or negative, got {rows}x{cols}")]
    InvalidDimensions {
        /// Number of rows.
        rows: u32,
        /// Number of columns.
        cols: u32,
    },

    /// Unrecognized block structure name.
    #[error("Unknown block structure '{0}', expected 'simple' or 'general'")]
    UnknownStructure(String),

    /// Error from the circuit IR.
    #[error(transparent)]
    Ir(#[from] IrError),
}

/// Result type for tensor-network operations.
pub type TnResult<T> = Result<T, TnError>;
