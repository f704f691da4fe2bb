//! NEQR command implementation.

use anyhow::{Context, Result};
use console::style;

use piqture_embed::{ImageEmbedding, Neqr};

use super::common::{OutputTarget, parse_dims, parse_pixels, print_summary, write_circuits};

/// Execute the neqr command.
pub fn execute(
    dims: &str,
    pixels: &str,
    max_color_intensity: i32,
    output: &OutputTarget,
) -> Result<()> {
    let dims = parse_dims(dims)?;
    let pixels = parse_pixels(pixels)?;

    eprintln!(
        "{} Encoding {} image as {} (max intensity {})",
        style("→").cyan().bold(),
        style(dims).green(),
        style("NEQR").yellow(),
        max_color_intensity
    );

    let mut neqr = Neqr::new(dims, pixels, max_color_intensity).context("Invalid NEQR input")?;
    let circuit = neqr.build_circuit()?;

    print_summary(circuit);
    write_circuits(std::slice::from_ref(circuit), output)
}
