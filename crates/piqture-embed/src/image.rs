//! Image data model and the shared encoding loop.
//!
//! Every encoding in this crate lays an image out the same way: a register of
//! position qubits in uniform superposition addresses the pixels, and each
//! pixel's value is written while its address is selected. The
//! [`ImageEmbedding`] trait captures that loop; encoders supply only
//! [`ImageEmbedding::pixel_value`].

use std::fmt;
use std::str::FromStr;

use piqture_ir::{Circuit, QubitId};
use serde::{Deserialize, Serialize};

use crate::error::{EmbedError, EmbedResult};

/// Largest accepted pixel value.
pub const MAX_PIXEL_VALUE: f64 = 255.0;

/// Image size in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ImageDims {
    rows: u32,
    cols: u32,
}

impl ImageDims {
    /// Create image dimensions. Both sides must be non-zero.
    pub fn new(rows: u32, cols: u32) -> EmbedResult<Self> {
        if rows == 0 || cols == 0 {
            return Err(EmbedError::InvalidDimensions { rows, cols });
        }
        Ok(Self { rows, cols })
    }

    /// Number of rows.
    pub fn rows(&self) -> u32 {
        self.rows
    }

    /// Number of columns.
    pub fn cols(&self) -> u32 {
        self.cols
    }

    /// `rows * cols`.
    pub fn num_pixels(&self) -> usize {
        self.rows as usize * self.cols as usize
    }

    /// The smaller side.
    pub fn min_dim(&self) -> u32 {
        self.rows.min(self.cols)
    }

    /// Whether both sides are equal.
    pub fn is_square(&self) -> bool {
        self.rows == self.cols
    }
}

impl fmt::Display for ImageDims {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.rows, self.cols)
    }
}

impl FromStr for ImageDims {
    type Err = EmbedError;

    fn from_str(s: &str) -> EmbedResult<Self> {
        let invalid = || EmbedError::InvalidDimensionSpec(s.to_string());
        let (rows, cols) = s
            .trim()
            .split_once(['x', 'X'])
            .ok_or_else(invalid)?;
        let rows = rows.trim().parse().map_err(|_| invalid())?;
        let cols = cols.trim().parse().map_err(|_| invalid())?;
        Self::new(rows, cols)
    }
}

/// Pixel data handed to an encoder.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PixelValues {
    /// One or more row-major pixel lists.
    Concrete(Vec<Vec<f64>>),
    /// Pixel angles left as free circuit parameters.
    Symbolic,
}

impl PixelValues {
    /// A single concrete pixel list.
    pub fn single(values: Vec<f64>) -> Self {
        Self::Concrete(vec![values])
    }

    /// Whether the values are free parameters.
    pub fn is_symbolic(&self) -> bool {
        matches!(self, Self::Symbolic)
    }

    /// All concrete values in list order, or `None` when symbolic.
    pub fn flattened(&self) -> Option<Vec<f64>> {
        match self {
            Self::Concrete(lists) => Some(lists.iter().flatten().copied().collect()),
            Self::Symbolic => None,
        }
    }
}

/// Check that `pixels` describes an image of size `dims` with values in
/// `[0, 255]`. Symbolic pixels are always valid.
pub fn validate_pixel_values(dims: ImageDims, pixels: &PixelValues) -> EmbedResult<()> {
    match pixels {
        PixelValues::Concrete(lists) => validate_pixel_lists(dims, lists, MAX_PIXEL_VALUE),
        PixelValues::Symbolic => Ok(()),
    }
}

/// Check pixel lists against `dims` and the inclusive range `[0, max]`.
pub fn validate_pixel_lists(dims: ImageDims, lists: &[Vec<f64>], max: f64) -> EmbedResult<()> {
    if lists.is_empty() {
        return Err(EmbedError::NoPixelLists);
    }
    let expected = dims.num_pixels();
    for list in lists {
        if list.len() != expected {
            return Err(EmbedError::PixelCountMismatch {
                got: list.len(),
                expected,
            });
        }
        if let Some(&value) = list
            .iter()
            .find(|v| !v.is_finite() || **v < 0.0 || **v > max)
        {
            return Err(EmbedError::PixelOutOfRange { value, max });
        }
    }
    Ok(())
}

/// Reject non-square images for encoders that need them.
pub fn validate_square(dims: ImageDims, encoder: &'static str) -> EmbedResult<()> {
    if dims.is_square() {
        Ok(())
    } else {
        Err(EmbedError::NonSquareImage { encoder })
    }
}

/// Bits needed to index `n` distinct values, at least one.
pub(crate) fn bit_width(n: usize) -> u32 {
    if n <= 1 {
        1
    } else {
        usize::BITS - (n - 1).leading_zeros()
    }
}

/// Position qubits needed to address every pixel of `dims`.
pub fn position_qubit_count(dims: ImageDims) -> u32 {
    bit_width(dims.num_pixels())
}

/// Select pixel `pixel_index` on the position register.
///
/// The index is written MSB first across `position_qubits`, and an X is
/// applied to every qubit whose bit is `0`. Applying it twice restores the
/// register.
#[allow(clippy::cast_possible_truncation)]
pub fn pixel_position(
    circuit: &mut Circuit,
    position_qubits: &[QubitId],
    pixel_index: usize,
) -> EmbedResult<()> {
    let width = position_qubits.len();
    for (i, qubit) in position_qubits.iter().enumerate() {
        let shift = width - 1 - i;
        let bit = pixel_index.checked_shr(shift as u32).unwrap_or(0) & 1;
        if bit == 0 {
            circuit.x(*qubit)?;
        }
    }
    Ok(())
}

/// An image encoding built pixel by pixel on a position register.
pub trait ImageEmbedding {
    /// Encoder name used in messages and logs.
    const NAME: &'static str;

    /// Image size.
    fn dims(&self) -> ImageDims;

    /// The circuit under construction.
    fn circuit(&self) -> &Circuit;

    /// Mutable access to the circuit under construction.
    fn circuit_mut(&mut self) -> &mut Circuit;

    /// Write the value of pixel `pixel` while its address is selected.
    fn pixel_value(&mut self, pixel: usize) -> EmbedResult<()>;

    /// The position register, qubits `0..position_qubit_count`.
    fn position_qubits(&self) -> Vec<QubitId> {
        QubitId::range(0, position_qubit_count(self.dims())).collect()
    }

    /// Select pixel `pixel` on the position register.
    fn pixel_position(&mut self, pixel: usize) -> EmbedResult<()> {
        let qubits = self.position_qubits();
        pixel_position(self.circuit_mut(), &qubits, pixel)
    }

    /// Build the full encoding and return the circuit.
    ///
    /// Any earlier contents are discarded, so building twice gives the same
    /// circuit.
    fn build_circuit(&mut self) -> EmbedResult<&Circuit> {
        self.circuit_mut().clear();

        for qubit in self.position_qubits() {
            self.circuit_mut().h(qubit)?;
        }

        for pixel in 0..self.dims().num_pixels() {
            self.pixel_position(pixel)?;
            self.pixel_value(pixel)?;
            self.pixel_position(pixel)?;
            tracing::trace!(encoder = Self::NAME, pixel, "embedded pixel");
        }

        let circuit = self.circuit();
        tracing::debug!(
            encoder = Self::NAME,
            dims = %self.dims(),
            qubits = circuit.num_qubits(),
            ops = circuit.num_ops(),
            depth = circuit.depth(),
            "built image encoding"
        );
        Ok(circuit)
    }
}
