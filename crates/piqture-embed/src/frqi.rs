//! Flexible Representation of Quantum Images (FRQI).
//!
//! A single color qubit carries each pixel as a rotation angle, applied as a
//! Ry controlled on the pixel's address.

use piqture_ir::{Circuit, ParameterExpression, ParameterVector, QubitId};

use crate::error::{EmbedError, EmbedResult};
use crate::image::{
    ImageDims, ImageEmbedding, PixelValues, position_qubit_count, validate_pixel_values,
    validate_square,
};

/// Name of the parameter vector used for symbolic pixel angles.
pub const ANGLE_VECTOR_NAME: &str = "Angle";

/// FRQI encoder for a square image.
#[derive(Debug, Clone)]
pub struct Frqi {
    dims: ImageDims,
    angles: Vec<ParameterExpression>,
    parameters: Option<ParameterVector>,
    color_qubit: QubitId,
    circuit: Circuit,
}

impl Frqi {
    /// Create an encoder.
    ///
    /// Concrete pixel lists are flattened in order and used directly as
    /// angles. [`PixelValues::Symbolic`] leaves one free parameter
    /// `Angle[i]` per pixel.
    pub fn new(dims: ImageDims, pixels: PixelValues) -> EmbedResult<Self> {
        validate_square(dims, Self::NAME)?;
        validate_pixel_values(dims, &pixels)?;

        let (angles, parameters) = match pixels.flattened() {
            Some(values) => (values.into_iter().map(ParameterExpression::from).collect(), None),
            None => {
                let vector = ParameterVector::new(ANGLE_VECTOR_NAME, dims.num_pixels());
                (vector.params(), Some(vector))
            }
        };

        let position_qubits = position_qubit_count(dims);
        let circuit = Circuit::with_size("frqi", position_qubits + 1, 0);

        Ok(Self {
            dims,
            angles,
            parameters,
            color_qubit: QubitId(position_qubits),
            circuit,
        })
    }

    /// The free pixel-angle vector, when built symbolically.
    pub fn parameters(&self) -> Option<&ParameterVector> {
        self.parameters.as_ref()
    }

    /// The qubit holding the color angle.
    pub fn color_qubit(&self) -> QubitId {
        self.color_qubit
    }

    /// Consume the encoder and return its circuit.
    pub fn into_circuit(self) -> Circuit {
        self.circuit
    }

    fn angle(&self, pixel: usize) -> EmbedResult<ParameterExpression> {
        self.angles
            .get(pixel)
            .cloned()
            .ok_or(EmbedError::PixelCountMismatch {
                got: self.angles.len(),
                expected: self.dims.num_pixels(),
            })
    }
}

impl ImageEmbedding for Frqi {
    const NAME: &'static str = "FRQI";

    fn dims(&self) -> ImageDims {
        self.dims
    }

    fn circuit(&self) -> &Circuit {
        &self.circuit
    }

    fn circuit_mut(&mut self) -> &mut Circuit {
        &mut self.circuit
    }

    fn pixel_value(&mut self, pixel: usize) -> EmbedResult<()> {
        let theta = self.angle(pixel)?;
        let double = || (ParameterExpression::constant(2.0) * theta.clone()).simplify();
        let color = self.color_qubit;

        match self.position_qubits().as_slice() {
            [p0] => {
                self.circuit.cry(double(), *p0, color)?;
            }
            // Ry(2θ) controlled on both address bits
            [p0, p1] => {
                let neg = (-theta.clone()).simplify();
                self.circuit
                    .cry(theta.clone(), *p0, color)?
                    .cx(*p0, *p1)?
                    .cry(neg, *p1, color)?
                    .cx(*p0, *p1)?
                    .cry(theta.clone(), *p1, color)?;
            }
            controls => {
                self.circuit.mcry(double(), controls, color)?;
            }
        }
        Ok(())
    }
}
