//! Matrix Product State ansatz.
//!
//! One qubit per image pixel; a chain of two-qubit blocks on neighbouring
//! qubits `(i, i + 1)`, each block taking the next slice of a single
//! `theta` parameter vector.

use piqture_ir::{Circuit, ParameterVector, QubitId};

use crate::error::{TnError, TnResult};
use crate::two_qubit_unitary::{BlockStructure, TwoQubitUnitary};

/// Name of the parameter vector allocated by [`Mps::mps_simple`] and
/// [`Mps::mps_general`].
pub const THETA_VECTOR_NAME: &str = "theta";

/// MPS tensor-network circuit for an image of `rows x cols` pixels.
#[derive(Debug, Clone)]
pub struct Mps {
    img_dims: (u32, u32),
    num_qubits: u32,
    parameters: Option<ParameterVector>,
    circuit: Circuit,
}

impl Mps {
    /// Create an empty MPS circuit with `rows * cols` qubits.
    pub fn new(img_dims: (u32, u32)) -> TnResult<Self> {
        let (rows, cols) = img_dims;
        let num_qubits = rows
            .checked_mul(cols)
            .filter(|&n| n > 0)
            .ok_or(TnError::InvalidDimensions { rows, cols })?;
        Ok(Self {
            img_dims,
            num_qubits,
            parameters: None,
            circuit: Circuit::with_size("mps", num_qubits, 0),
        })
    }

    /// Image dimensions.
    pub fn img_dims(&self) -> (u32, u32) {
        self.img_dims
    }

    /// Number of qubits (one per pixel).
    pub fn num_qubits(&self) -> u32 {
        self.num_qubits
    }

    /// Number of two-qubit blocks in the chain.
    pub fn num_blocks(&self) -> usize {
        self.num_qubits.saturating_sub(1) as usize
    }

    /// Parameters needed for a full chain of `structure` blocks.
    pub fn num_parameters(&self, structure: BlockStructure, complex: bool) -> usize {
        TwoQubitUnitary::params_per_block(structure, complex) * self.num_blocks()
    }

    /// The vector allocated by the last [`Mps::mps_simple`] or
    /// [`Mps::mps_general`] call.
    pub fn parameters(&self) -> Option<&ParameterVector> {
        self.parameters.as_ref()
    }

    /// The circuit built so far.
    pub fn circuit(&self) -> &Circuit {
        &self.circuit
    }

    /// Consume the builder and return its circuit.
    pub fn into_circuit(self) -> Circuit {
        self.circuit
    }

    /// MPS with simple block parameterization.
    pub fn mps_simple(&mut self, complex: bool) -> TnResult<&Circuit> {
        self.with_fresh_parameters(BlockStructure::Simple, complex)
    }

    /// MPS with general block parameterization.
    pub fn mps_general(&mut self, complex: bool) -> TnResult<&Circuit> {
        self.with_fresh_parameters(BlockStructure::General, complex)
    }

    fn with_fresh_parameters(
        &mut self,
        structure: BlockStructure,
        complex: bool,
    ) -> TnResult<&Circuit> {
        let vector = ParameterVector::new(THETA_VECTOR_NAME, self.num_parameters(structure, complex));
        self.parameters = Some(vector.clone());
        self.mps_backbone(structure, &vector, complex)
    }

    /// Lay out the block chain using parameters from `params`, in order.
    ///
    /// Rebuilds the circuit from scratch. Fails with
    /// [`piqture_ir::IrError::InsufficientParameters`] if `params` is too
    /// short, leaving the previous circuit in place; extra parameters are
    /// left unused.
    #[allow(clippy::cast_possible_truncation)]
    pub fn mps_backbone(
        &mut self,
        structure: BlockStructure,
        params: &ParameterVector,
        complex: bool,
    ) -> TnResult<&Circuit> {
        let mut chain = Circuit::with_size(self.circuit.name(), self.num_qubits, 0);
        let mut cursor = params.cursor();

        for index in 0..self.num_blocks() as u32 {
            let block = TwoQubitUnitary::block(structure, &mut cursor, complex)?;
            chain.compose(&block, Some(&[QubitId(index), QubitId(index + 1)]))?;
            tracing::trace!(block = index, consumed = cursor.consumed(), "placed MPS block");
        }
        self.circuit = chain;

        tracing::debug!(
            qubits = self.num_qubits,
            %structure,
            complex,
            ops = self.circuit.num_ops(),
            unused = cursor.remaining(),
            "built MPS circuit"
        );
        Ok(&self.circuit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_zero_dims() {
        assert!(matches!(
            Mps::new((0, 4)),
            Err(TnError::InvalidDimensions { rows: 0, cols: 4 })
        ));
    }

    #[test]
    fn test_rejects_overflowing_dims() {
        assert!(matches!(
            Mps::new((65536, 65536)),
            Err(TnError::InvalidDimensions {
                rows: 65536,
                cols: 65536
            })
        ));
    }

    #[test]
    fn test_parameter_counts() {
        let mps = Mps::new((2, 2)).unwrap();
        assert_eq!(mps.num_parameters(BlockStructure::Simple, false), 6);
        assert_eq!(mps.num_parameters(BlockStructure::Simple, true), 18);
        assert_eq!(mps.num_parameters(BlockStructure::General, false), 18);
        assert_eq!(mps.num_parameters(BlockStructure::General, true), 45);
    }

    #[test]
    fn test_real_simple_chain() {
        let mut mps = Mps::new((1, 3)).unwrap();
        let built = mps.mps_simple(false).unwrap().clone();

        let theta = ParameterVector::new("theta", 4);
        let mut expected = Circuit::with_size("expected", 3, 0);
        expected
            .ry(theta.param(0), QubitId(0))
            .unwrap()
            .ry(theta.param(1), QubitId(1))
            .unwrap()
            .cx(QubitId(0), QubitId(1))
            .unwrap()
            .ry(theta.param(2), QubitId(1))
            .unwrap()
            .ry(theta.param(3), QubitId(2))
            .unwrap()
            .cx(QubitId(1), QubitId(2))
            .unwrap();

        assert_eq!(built, expected);
        assert_eq!(mps.parameters(), Some(&theta));
    }

    #[test]
    fn test_single_pixel_has_no_blocks() {
        let mut mps = Mps::new((1, 1)).unwrap();
        let circuit = mps.mps_general(true).unwrap();
        assert_eq!(circuit.num_qubits(), 1);
        assert_eq!(circuit.num_ops(), 0);
    }

    #[test]
    fn test_backbone_short_vector() {
        let mut mps = Mps::new((2, 2)).unwrap();
        let short = ParameterVector::new("w", 5);
        assert!(mps.mps_backbone(BlockStructure::Simple, &short, false).is_err());
        assert_eq!(mps.circuit().num_ops(), 0);

        let long = ParameterVector::new("w", 10);
        let circuit = mps.mps_backbone(BlockStructure::Simple, &long, false).unwrap();
        assert_eq!(circuit.parameters().len(), 6);
    }

    #[test]
    fn test_rebuild_replaces_circuit() {
        let mut mps = Mps::new((2, 2)).unwrap();
        mps.mps_general(true).unwrap();
        let ops = mps.mps_simple(false).unwrap().num_ops();
        assert_eq!(ops, 9);
    }

    #[test]
    fn test_failed_rebuild_keeps_previous_chain() {
        let mut mps = Mps::new((1, 4)).unwrap();
        let before = mps.mps_general(false).unwrap().clone();

        let short = ParameterVector::new("w", 7);
        assert!(mps.mps_backbone(BlockStructure::General, &short, false).is_err());
        assert_eq!(mps.circuit(), &before);
        assert_eq!(mps.circuit().num_ops(), 3 * 8);
    }
}
