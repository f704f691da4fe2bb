//! piqture Tensor-Network Ansätze
//!
//! Parameterized circuit structures inspired by tensor networks, for use as
//! trainable layers on top of an image encoding.
//!
//! - [`TwoQubitUnitary`]: simple and general parameterizations of a
//!   two-qubit block, in real and complex variants.
//! - [`Mps`]: a Matrix Product State chain of such blocks.
//!
//! | Block | Real | Complex |
//! |-------|------|---------|
//! | simple | 2 | 6 |
//! | general | 6 | 15 |
//!
//! An MPS over `n` qubits has `n - 1` blocks and so needs
//! `params_per_block * (n - 1)` parameters.
//!
//! # Example
//!
//! ```rust
//! use piqture_tn::{BlockStructure, Mps};
//!
//! let mut mps = Mps::new((2, 2)).unwrap();
//! let circuit = mps.mps_general(false).unwrap();
//!
//! assert_eq!(circuit.num_qubits(), 4);
//! assert_eq!(
//!     circuit.parameters().len(),
//!     mps.num_parameters(BlockStructure::General, false)
//! );
//! ```

mod error;
pub mod mps;
pub mod two_qubit_unitary;

pub use error::{TnError, TnResult};
pub use mps::{Mps, THETA_VECTOR_NAME};
pub use two_qubit_unitary::{BlockStructure, TwoQubitUnitary};
