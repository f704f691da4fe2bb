//! Error types for image embeddings.

use piqture_ir::IrError;
use thiserror::Error;

/// Errors that can occur while validating images or building encodings.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum EmbedError {
    /// Zero-sized image.
    #[error("Image dimensions must be positive, got {rows}x{cols}")]
    InvalidDimensions {
        /// Number of rows.
        rows: u32,
        /// Number of columns.
        cols: u32,
    },

    /// Dimension string that is not of the form `RxC`.
    #[error("Cannot parse image dimensions '{0}', expected ROWSxCOLS")]
    InvalidDimensionSpec(String),

    /// Encoder that only handles square images got a rectangular one.
    #[error("{encoder} supports square images only. Input img_dims must have same dimensions.")]
    NonSquareImage {
        /// Name of the encoder.
        encoder: &'static str,
    },

    /// No pixel list was supplied.
    #[error("At least one pixel list is required")]
    NoPixelLists,

    /// A pixel list does not cover the image.
    #[error(
        "No. of pixels ([{got}]) in each pixel_lists in pixel_vals must be equal to the product of image dimensions {expected}."
    )]
    PixelCountMismatch {
        /// Length of the offending list.
        got: usize,
        /// `rows * cols`.
        expected: usize,
    },

    /// A pixel value outside the accepted range.
    #[error("Pixel values cannot be less than 0 or greater than {max}. Got {value}.")]
    PixelOutOfRange {
        /// The offending value.
        value: f64,
        /// Upper bound.
        max: f64,
    },

    /// NEQR color values must be whole numbers.
    #[error("Pixel value {0} is not an integer")]
    NonIntegralPixel(f64),

    /// NEQR color depth out of range.
    #[error("Maximum color intensity cannot be less than 0 or greater than 255.")]
    InvalidColorIntensity(i32),

    /// Filter that does not fit the image.
    #[error("The filter_size must be less than or equal to the minimum image dimension.")]
    InvalidFilterSize {
        /// Filter rows.
        rows: u32,
        /// Filter columns.
        cols: u32,
    },

    /// Stride of zero or larger than the image.
    #[error(
        "The input stride must be at least 1 and less than or equal to the minimum image dimension."
    )]
    InvalidStride(u32),

    /// Error from the circuit IR.
    #[error(transparent)]
    Ir(#[from] IrError),
}

/// Result type for embedding operations.
pub type EmbedResult<T> = Result<T, EmbedError>;
