//! piqture Quantum Neural-Network Layers
//!
//! Currently provides the [`QuanvolutionalLayer`]: image patches are
//! angle-embedded, passed through one seeded random filter circuit shared by
//! the whole layer, and measured.
//!
//! # Example
//!
//! ```rust
//! use piqture_embed::ImageDims;
//! use piqture_nn::{QuanvolutionalConfig, QuanvolutionalLayer};
//!
//! let dims = ImageDims::new(4, 4).unwrap();
//! let pixels = vec![128.0; 16];
//! let config = QuanvolutionalConfig::new(dims, (2, 2), 2, pixels).with_seed(42);
//!
//! let layer = QuanvolutionalLayer::new(config).unwrap();
//! let circuits = layer.build_layer().unwrap();
//! assert_eq!(circuits.len(), 4);
//! assert!(circuits.iter().all(|c| c.num_qubits() == 4));
//! ```

mod error;
pub mod quanvolutional;

pub use error::{NnError, NnResult};
pub use quanvolutional::{
    DEFAULT_FILTER_DEPTH, Embedding, FILTER_MAX_OPERANDS, QuanvolutionalConfig,
    QuanvolutionalLayer,
};
