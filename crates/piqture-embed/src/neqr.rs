//! Novel Enhanced Quantum Representation (NEQR).
//!
//! Each pixel's color is stored as a bit string on a color register, written
//! with X gates controlled on the whole position register.

use piqture_ir::{Circuit, QubitId};

use crate::error::{EmbedError, EmbedResult};
use crate::image::{
    ImageDims, ImageEmbedding, bit_width, position_qubit_count, validate_pixel_lists,
    validate_square,
};

/// Default maximum color intensity (8-bit grayscale).
pub const DEFAULT_MAX_COLOR_INTENSITY: i32 = 255;

/// NEQR encoder for a square grayscale image.
#[derive(Debug, Clone)]
pub struct Neqr {
    dims: ImageDims,
    pixels: Vec<f64>,
    max_color_intensity: u32,
    position_qubits: u32,
    color_qubits: u32,
    circuit: Circuit,
}

impl Neqr {
    /// Create an encoder for `pixels` (row-major, whole numbers in
    /// `[0, max_color_intensity]`).
    ///
    /// The circuit starts empty; call [`ImageEmbedding::build_circuit`] to
    /// fill it.
    #[allow(clippy::cast_sign_loss)]
    pub fn new(dims: ImageDims, pixels: Vec<f64>, max_color_intensity: i32) -> EmbedResult<Self> {
        validate_square(dims, Self::NAME)?;

        if !(0..=255).contains(&max_color_intensity) {
            return Err(EmbedError::InvalidColorIntensity(max_color_intensity));
        }
        let max_color_intensity = max_color_intensity as u32;

        validate_pixel_lists(
            dims,
            std::slice::from_ref(&pixels),
            f64::from(max_color_intensity),
        )?;
        if let Some(&value) = pixels.iter().find(|v| v.fract() != 0.0) {
            return Err(EmbedError::NonIntegralPixel(value));
        }

        let position_qubits = position_qubit_count(dims);
        let color_qubits = bit_width(max_color_intensity as usize + 1);
        let circuit = Circuit::with_size("neqr", position_qubits + color_qubits, 0);

        Ok(Self {
            dims,
            pixels,
            max_color_intensity,
            position_qubits,
            color_qubits,
            circuit,
        })
    }

    /// Largest representable color.
    pub fn max_color_intensity(&self) -> u32 {
        self.max_color_intensity
    }

    /// Width of the color register.
    pub fn color_qubits(&self) -> u32 {
        self.color_qubits
    }

    /// Width of the position register.
    pub fn num_position_qubits(&self) -> u32 {
        self.position_qubits
    }

    /// Consume the encoder and return its circuit.
    pub fn into_circuit(self) -> Circuit {
        self.circuit
    }
}

impl ImageEmbedding for Neqr {
    const NAME: &'static str = "NEQR";

    fn dims(&self) -> ImageDims {
        self.dims
    }

    fn circuit(&self) -> &Circuit {
        &self.circuit
    }

    fn circuit_mut(&mut self) -> &mut Circuit {
        &mut self.circuit
    }

    /// Set color bit `k` (MSB first) on qubit `position_qubits + k` for each
    /// `1` in the pixel's color.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    fn pixel_value(&mut self, pixel: usize) -> EmbedResult<()> {
        let color = self
            .pixels
            .get(pixel)
            .copied()
            .ok_or(EmbedError::PixelCountMismatch {
                got: self.pixels.len(),
                expected: self.dims.num_pixels(),
            })? as u32;
        let controls = self.position_qubits();

        for bit_index in 0..self.color_qubits {
            let shift = self.color_qubits - 1 - bit_index;
            if (color >> shift) & 1 == 1 {
                let target = QubitId(self.position_qubits + bit_index);
                self.circuit.mcx(&controls, target)?;
            }
        }
        Ok(())
    }
}
