//! `OpenQASM` 3 Emitter for piqture
//!
//! Serializes [`piqture_ir::Circuit`]s to `OpenQASM` 3.0 so encoded images and
//! ansätze can be handed to any toolchain that reads QASM.
//!
//! Free parameters (symbolic FRQI angles, MPS weights) are declared as
//! `input angle` variables. Element `theta[3]` of a parameter vector becomes
//! the identifier `theta_3`.
//!
//! # Example
//!
//! ```rust
//! use piqture_ir::{Circuit, QubitId};
//! use piqture_qasm3::emit;
//!
//! let mut circuit = Circuit::with_size("neqr", 3, 0);
//! circuit.h(QubitId(0)).unwrap();
//! circuit.mcx(&[QubitId(0), QubitId(1)], QubitId(2)).unwrap();
//!
//! let qasm = emit(&circuit).unwrap();
//! assert!(qasm.contains("OPENQASM 3.0;"));
//! assert!(qasm.contains("ccx q[0], q[1], q[2];"));
//! ```

mod emitter;
mod error;

pub use emitter::{emit, qasm_identifier};
pub use error::{EmitError, EmitResult};
