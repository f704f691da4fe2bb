//! piqture Image Embeddings
//!
//! Encodes classical images into quantum circuits built on [`piqture_ir`].
//!
//! # Encodings
//!
//! - [`Neqr`]: Novel Enhanced Quantum Representation. Colors are stored as bit
//!   strings on a color register, so pixels must be whole numbers.
//! - [`Frqi`]: Flexible Representation of Quantum Images. Each pixel is a
//!   rotation angle on a single color qubit, either concrete or left free as
//!   a parameter.
//!
//! Both encoders address pixels with `max(1, ceil(log2(rows * cols)))`
//! position qubits placed first in the circuit, and share the build loop in
//! [`ImageEmbedding::build_circuit`].
//!
//! # Example
//!
//! ```rust
//! use piqture_embed::{Frqi, ImageDims, ImageEmbedding, PixelValues};
//!
//! let dims = ImageDims::new(2, 2).unwrap();
//! let mut frqi = Frqi::new(dims, PixelValues::Symbolic).unwrap();
//! let circuit = frqi.build_circuit().unwrap();
//!
//! assert_eq!(circuit.num_qubits(), 3);
//! assert_eq!(circuit.parameters().len(), 4);
//! ```
//!
//! [`produce_sub_images`] cuts an image into patches for the quanvolutional
//! layer.

mod error;
pub mod frqi;
pub mod image;
pub mod neqr;
pub mod sub_images;

pub use error::{EmbedError, EmbedResult};
pub use frqi::Frqi;
pub use image::{
    ImageDims, ImageEmbedding, MAX_PIXEL_VALUE, PixelValues, pixel_position,
    position_qubit_count, validate_pixel_lists, validate_pixel_values, validate_square,
};
pub use neqr::{DEFAULT_MAX_COLOR_INTENSITY, Neqr};
pub use sub_images::{SubImage, produce_sub_images};
