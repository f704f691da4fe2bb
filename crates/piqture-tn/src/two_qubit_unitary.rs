//! Parameterized two-qubit blocks.
//!
//! Each block is a fresh 2-qubit circuit whose rotation angles are drawn, in
//! order, from a [`ParameterCursor`]. The cursor keeps whatever the block did
//! not consume for the next one.

use std::fmt;
use std::str::FromStr;

use piqture_ir::{Circuit, ParameterCursor, ParameterExpression, QubitId};
use serde::{Deserialize, Serialize};

use crate::error::{TnError, TnResult};

/// Gate layout of a two-qubit block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BlockStructure {
    /// One rotation layer and a single entangler.
    Simple,
    /// Three rotation layers around alternating entanglers.
    General,
}

impl BlockStructure {
    /// Lowercase name.
    pub fn name(self) -> &'static str {
        match self {
            BlockStructure::Simple => "simple",
            BlockStructure::General => "general",
        }
    }
}

impl fmt::Display for BlockStructure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for BlockStructure {
    type Err = TnError;

    fn from_str(s: &str) -> TnResult<Self> {
        match s.to_ascii_lowercase().as_str() {
            "simple" => Ok(BlockStructure::Simple),
            "general" => Ok(BlockStructure::General),
            _ => Err(TnError::UnknownStructure(s.to_string())),
        }
    }
}

/// Builder for two-qubit unitary blocks.
#[derive(Debug, Clone, Copy, Default)]
pub struct TwoQubitUnitary;

impl TwoQubitUnitary {
    /// Parameters consumed by one block.
    pub fn params_per_block(structure: BlockStructure, complex: bool) -> usize {
        match (structure, complex) {
            (BlockStructure::Simple, false) => 2,
            (BlockStructure::Simple, true) | (BlockStructure::General, false) => 6,
            (BlockStructure::General, true) => 15,
        }
    }

    /// Gates emitted by one block.
    pub fn gates_per_block(structure: BlockStructure, complex: bool) -> usize {
        match (structure, complex) {
            (BlockStructure::Simple, false) => 3,
            (BlockStructure::Simple, true) => 7,
            (BlockStructure::General, false) => 8,
            (BlockStructure::General, true) => 10,
        }
    }

    /// Build one block of the given structure.
    pub fn block(
        structure: BlockStructure,
        cursor: &mut ParameterCursor,
        complex: bool,
    ) -> TnResult<Circuit> {
        match structure {
            BlockStructure::Simple => Self::simple_parameterization(cursor, complex),
            BlockStructure::General => Self::general_parameterization(cursor, complex),
        }
    }

    /// Single-layer block: `ry ⊗ ry` (real) or `rz·ry·rz ⊗ rz·ry·rz`
    /// (complex), followed by `cx(q0, q1)`.
    pub fn simple_parameterization(
        cursor: &mut ParameterCursor,
        complex: bool,
    ) -> TnResult<Circuit> {
        let params = cursor.take(Self::params_per_block(BlockStructure::Simple, complex))?;
        let block = if complex {
            complex_simple_block(&params)?
        } else {
            real_simple_block(&params)?
        };
        Ok(block)
    }

    /// Three-layer block. The real form uses `ry` rotations only; the complex
    /// form uses general single-qubit `u` gates and covers SU(4).
    pub fn general_parameterization(
        cursor: &mut ParameterCursor,
        complex: bool,
    ) -> TnResult<Circuit> {
        let params = cursor.take(Self::params_per_block(BlockStructure::General, complex))?;
        let block = if complex {
            complex_general_block(&params)?
        } else {
            real_general_block(&params)?
        };
        Ok(block)
    }
}

const Q0: QubitId = QubitId(0);
const Q1: QubitId = QubitId(1);

fn new_block(name: &str) -> Circuit {
    Circuit::with_size(name, 2, 0)
}

fn real_simple_block(p: &[ParameterExpression]) -> piqture_ir::IrResult<Circuit> {
    let mut block = new_block("real_simple");
    block.ry(&p[0], Q0)?.ry(&p[1], Q1)?.cx(Q0, Q1)?;
    Ok(block)
}

fn complex_simple_block(p: &[ParameterExpression]) -> piqture_ir::IrResult<Circuit> {
    let mut block = new_block("complex_simple");
    block
        .rz(&p[0], Q0)?
        .ry(&p[1], Q0)?
        .rz(&p[2], Q0)?
        .rz(&p[3], Q1)?
        .ry(&p[4], Q1)?
        .rz(&p[5], Q1)?
        .cx(Q0, Q1)?;
    Ok(block)
}

fn real_general_block(p: &[ParameterExpression]) -> piqture_ir::IrResult<Circuit> {
    let mut block = new_block("real_general");
    block
        .ry(&p[0], Q0)?
        .ry(&p[1], Q1)?
        .cx(Q0, Q1)?
        .ry(&p[2], Q0)?
        .ry(&p[3], Q1)?
        .cx(Q1, Q0)?
        .ry(&p[4], Q0)?
        .ry(&p[5], Q1)?;
    Ok(block)
}

fn complex_general_block(p: &[ParameterExpression]) -> piqture_ir::IrResult<Circuit> {
    let mut block = new_block("complex_general");
    block
        .u(&p[0], &p[1], &p[2], Q0)?
        .u(&p[3], &p[4], &p[5], Q1)?
        .cx(Q1, Q0)?
        .rz(&p[6], Q0)?
        .ry(&p[7], Q1)?
        .cx(Q0, Q1)?
        .ry(&p[8], Q1)?
        .cx(Q1, Q0)?
        .u(&p[9], &p[10], &p[11], Q0)?
        .u(&p[12], &p[13], &p[14], Q1)?;
    Ok(block)
}

#[cfg(test)]
mod tests {
    use super::*;
    use piqture_ir::ParameterVector;

    const ALL: [(BlockStructure, bool); 4] = [
        (BlockStructure::Simple, false),
        (BlockStructure::Simple, true),
        (BlockStructure::General, false),
        (BlockStructure::General, true),
    ];

    #[test]
    fn test_real_simple_block() {
        let theta = ParameterVector::new("theta", 2);
        let mut cursor = theta.cursor();
        let block = TwoQubitUnitary::simple_parameterization(&mut cursor, false).unwrap();

        let mut expected = Circuit::with_size("expected", 2, 0);
        expected.ry(theta.param(0), Q0).unwrap();
        expected.ry(theta.param(1), Q1).unwrap();
        expected.cx(Q0, Q1).unwrap();
        assert_eq!(block, expected);
        assert_eq!(cursor.remaining(), 0);
    }

    #[test]
    fn test_block_sizes() {
        for (structure, complex) in ALL {
            let n = TwoQubitUnitary::params_per_block(structure, complex);
            let theta = ParameterVector::new("theta", n + 1);
            let mut cursor = theta.cursor();
            let block = TwoQubitUnitary::block(structure, &mut cursor, complex).unwrap();

            assert_eq!(block.num_qubits(), 2);
            assert_eq!(block.parameters().len(), n, "{structure} complex={complex}");
            assert_eq!(
                block.num_ops(),
                TwoQubitUnitary::gates_per_block(structure, complex)
            );
            assert_eq!(cursor.remaining(), 1);
        }
    }

    #[test]
    fn test_cursor_advances_between_blocks() {
        let theta = ParameterVector::new("theta", 12);
        let mut cursor = theta.cursor();
        let first = TwoQubitUnitary::simple_parameterization(&mut cursor, true).unwrap();
        let second = TwoQubitUnitary::simple_parameterization(&mut cursor, true).unwrap();

        assert!(first.parameters().contains("theta[0]"));
        assert!(second.parameters().contains("theta[6]"));
        assert!(!second.parameters().contains("theta[5]"));
    }

    #[test]
    fn test_insufficient_parameters() {
        let theta = ParameterVector::new("theta", 14);
        let mut cursor = theta.cursor();
        let err = TwoQubitUnitary::general_parameterization(&mut cursor, true).unwrap_err();
        assert!(matches!(
            err,
            TnError::Ir(piqture_ir::IrError::InsufficientParameters {
                needed: 15,
                remaining: 14
            })
        ));
    }

    #[test]
    fn test_structure_from_str() {
        assert_eq!("General".parse::<BlockStructure>().unwrap(), BlockStructure::General);
        assert!("aux".parse::<BlockStructure>().is_err());
    }
}
