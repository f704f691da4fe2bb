//! Error types for neural-network layers.

use piqture_embed::EmbedError;
use piqture_ir::IrError;
use thiserror::Error;

/// Errors that can occur while configuring or building a layer.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum NnError {
    /// Unrecognized embedding name.
    #[error("Unknown embedding '{0}', expected 'angle'")]
    UnknownEmbedding(String),

    /// Invalid image, filter, stride or pixel input.
    #[error(transparent)]
    Embed(#[from] EmbedError),

    /// Error from the circuit IR.
    #[error(transparent)]
    Ir(#[from] IrError),
}

/// Result type for layer operations.
pub type NnResult<T> = Result<T, NnError>;
