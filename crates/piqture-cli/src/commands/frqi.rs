//! FRQI command implementation.

use anyhow::{Context, Result};
use console::style;

use piqture_embed::{Frqi, ImageEmbedding, PixelValues};

use super::common::{OutputTarget, parse_dims, parse_pixels, print_summary, write_circuits};

/// Execute the frqi command.
///
/// Without `pixels` the angles are left as free `Angle[i]` parameters.
pub fn execute(dims: &str, pixels: Option<&str>, output: &OutputTarget) -> Result<()> {
    let dims = parse_dims(dims)?;
    let pixels = match pixels {
        Some(spec) => PixelValues::single(parse_pixels(spec)?),
        None => PixelValues::Symbolic,
    };

    eprintln!(
        "{} Encoding {} image as {}{}",
        style("→").cyan().bold(),
        style(dims).green(),
        style("FRQI").yellow(),
        if pixels.is_symbolic() { " (symbolic)" } else { "" }
    );

    let mut frqi = Frqi::new(dims, pixels).context("Invalid FRQI input")?;
    let circuit = frqi.build_circuit()?;

    print_summary(circuit);
    write_circuits(std::slice::from_ref(circuit), output)
}
