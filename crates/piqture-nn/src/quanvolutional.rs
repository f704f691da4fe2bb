//! Quanvolutional layer.
//!
//! The quantum analogue of a convolution: the image is cut into patches, each
//! patch is angle-embedded on one qubit per pixel, a fixed non-trainable
//! random circuit (the filter) is applied, and every qubit is measured.
//!
//! Reference: M. Henderson, S. Shakya, S. Pradhan and T. Cook,
//! "Quanvolutional Neural Networks: Powering Image Recognition with Quantum
//! Circuits", arXiv:1904.04767.

use std::f64::consts::PI;
use std::fmt;
use std::str::FromStr;

use piqture_embed::{
    EmbedError, ImageDims, MAX_PIXEL_VALUE, SubImage, produce_sub_images, validate_pixel_lists,
};
use piqture_ir::{Circuit, QubitId, random_circuit};
use serde::{Deserialize, Serialize};

use crate::error::{NnError, NnResult};

/// Default depth of the random filter circuit.
pub const DEFAULT_FILTER_DEPTH: u32 = 2;

/// Largest gate arity drawn for the random filter.
pub const FILTER_MAX_OPERANDS: u32 = 3;

/// How patch pixels are loaded onto qubits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Embedding {
    /// `ry(π · v / 255)` on one qubit per pixel.
    #[default]
    Angle,
}

impl Embedding {
    fn apply(self, circuit: &mut Circuit, values: &[f64]) -> NnResult<()> {
        match self {
            Embedding::Angle => {
                let qubits: Vec<QubitId> = circuit.qubit_ids().collect();
                for (qubit, value) in qubits.into_iter().zip(values) {
                    circuit.ry(PI * value / MAX_PIXEL_VALUE, qubit)?;
                }
            }
        }
        Ok(())
    }
}

impl fmt::Display for Embedding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Embedding::Angle => f.write_str("angle"),
        }
    }
}

impl FromStr for Embedding {
    type Err = NnError;

    fn from_str(s: &str) -> NnResult<Self> {
        match s.to_ascii_lowercase().as_str() {
            "angle" | "angleembedding" => Ok(Embedding::Angle),
            _ => Err(NnError::UnknownEmbedding(s.to_string())),
        }
    }
}

/// Quanvolutional layer settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuanvolutionalConfig {
    /// Image size.
    pub img_dims: ImageDims,
    /// Patch size `(rows, cols)`.
    pub filter_size: (u32, u32),
    /// Step between patch corners.
    pub stride: u32,
    /// Row-major pixel values in `[0, 255]`.
    pub pixels: Vec<f64>,
    /// Apply a random filter circuit; without it patches are only embedded
    /// and measured.
    pub random: bool,
    /// Pixel loading scheme.
    pub embedding: Embedding,
    /// Seed for the random filter.
    pub seed: u64,
    /// Layers in the random filter.
    pub depth: u32,
}

impl QuanvolutionalConfig {
    /// Settings with a seeded random filter of the default depth.
    pub fn new(img_dims: ImageDims, filter_size: (u32, u32), stride: u32, pixels: Vec<f64>) -> Self {
        Self {
            img_dims,
            filter_size,
            stride,
            pixels,
            random: true,
            embedding: Embedding::Angle,
            seed: 0,
            depth: DEFAULT_FILTER_DEPTH,
        }
    }

    /// Set the filter seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Enable or disable the random filter.
    #[must_use]
    pub fn with_random(mut self, random: bool) -> Self {
        self.random = random;
        self
    }

    /// Set the filter depth.
    #[must_use]
    pub fn with_depth(mut self, depth: u32) -> Self {
        self.depth = depth;
        self
    }

    fn validate(&self) -> NnResult<()> {
        let min_dim = self.img_dims.min_dim();
        let (fr, fc) = self.filter_size;
        if fr == 0 || fc == 0 || fr > min_dim || fc > min_dim {
            return Err(EmbedError::InvalidFilterSize { rows: fr, cols: fc }.into());
        }
        if self.stride == 0 || self.stride > min_dim {
            return Err(EmbedError::InvalidStride(self.stride).into());
        }
        validate_pixel_lists(
            self.img_dims,
            std::slice::from_ref(&self.pixels),
            MAX_PIXEL_VALUE,
        )?;
        Ok(())
    }
}

/// A quanvolutional layer with a fixed filter.
#[derive(Debug, Clone)]
pub struct QuanvolutionalLayer {
    config: QuanvolutionalConfig,
    filter: Option<Circuit>,
}

impl QuanvolutionalLayer {
    /// Validate `config` and draw the layer's filter.
    pub fn new(config: QuanvolutionalConfig) -> NnResult<Self> {
        config.validate()?;

        let filter = if config.random {
            let (fr, fc) = config.filter_size;
            Some(random_circuit(
                fr * fc,
                config.depth,
                FILTER_MAX_OPERANDS,
                false,
                config.seed,
            )?)
        } else {
            None
        };

        Ok(Self { config, filter })
    }

    /// Layer settings.
    pub fn config(&self) -> &QuanvolutionalConfig {
        &self.config
    }

    /// The filter circuit shared by every patch, if any.
    pub fn filter(&self) -> Option<&Circuit> {
        self.filter.as_ref()
    }

    /// Qubits per patch circuit.
    pub fn qubits_per_patch(&self) -> u32 {
        self.config.filter_size.0 * self.config.filter_size.1
    }

    /// The image patches, in row-major order of their corners.
    pub fn sub_images(&self) -> NnResult<Vec<SubImage>> {
        Ok(produce_sub_images(
            self.config.img_dims,
            &self.config.pixels,
            self.config.filter_size,
            self.config.stride,
        )?)
    }

    /// Embed, filter and measure one patch.
    pub fn build_sub_circuit(&self, sub_image: &SubImage) -> NnResult<Circuit> {
        let (row, col) = sub_image.origin;
        let num_qubits = u32::try_from(sub_image.values.len())
            .map_err(|_| EmbedError::InvalidFilterSize {
                rows: sub_image.dims.rows(),
                cols: sub_image.dims.cols(),
            })?;
        let mut circuit = Circuit::with_size(format!("quanv_{row}_{col}"), num_qubits, 0);

        self.config.embedding.apply(&mut circuit, &sub_image.values)?;

        if let Some(filter) = &self.filter {
            let qubits: Vec<QubitId> = circuit.qubit_ids().collect();
            circuit.compose(filter, Some(&qubits))?;
        }

        circuit.measure_all()?;
        Ok(circuit)
    }

    /// One measured circuit per patch, in patch order.
    pub fn build_layer(&self) -> NnResult<Vec<Circuit>> {
        let circuits = self
            .sub_images()?
            .iter()
            .map(|sub_image| self.build_sub_circuit(sub_image))
            .collect::<NnResult<Vec<_>>>()?;

        tracing::debug!(
            dims = %self.config.img_dims,
            patches = circuits.len(),
            qubits = self.qubits_per_patch(),
            random = self.config.random,
            seed = self.config.seed,
            "built quanvolutional layer"
        );
        Ok(circuits)
    }
}
