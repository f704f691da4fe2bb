//! MPS command implementation.

use anyhow::{Context, Result};
use console::style;

use piqture_tn::{BlockStructure, Mps};

use super::common::{OutputTarget, parse_dims, print_summary, write_circuits};

/// Execute the mps command.
pub fn execute(dims: &str, structure: &str, complex: bool, output: &OutputTarget) -> Result<()> {
    let dims = parse_dims(dims)?;
    let structure: BlockStructure = structure.parse()?;

    let mut mps = Mps::new((dims.rows(), dims.cols())).context("Invalid MPS dimensions")?;

    eprintln!(
        "{} Building {} MPS over {} qubits ({} {} blocks, {} parameters)",
        style("→").cyan().bold(),
        style(dims).green(),
        mps.num_qubits(),
        mps.num_blocks(),
        style(format!("{} {structure}", if complex { "complex" } else { "real" })).yellow(),
        mps.num_parameters(structure, complex)
    );

    let circuit = match structure {
        BlockStructure::Simple => mps.mps_simple(complex)?,
        BlockStructure::General => mps.mps_general(complex)?,
    };

    print_summary(circuit);
    write_circuits(std::slice::from_ref(circuit), output)
}
