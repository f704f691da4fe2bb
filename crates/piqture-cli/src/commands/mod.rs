//! CLI command implementations.

pub mod common;
pub mod frqi;
pub mod mps;
pub mod neqr;
pub mod quanv;
pub mod version;
