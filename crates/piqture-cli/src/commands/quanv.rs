//! Quanvolutional layer command implementation.

use anyhow::{Context, Result};
use console::style;
use indicatif::{ProgressBar, ProgressStyle};

use piqture_nn::{QuanvolutionalConfig, QuanvolutionalLayer};

use super::common::{OutputTarget, parse_dims, parse_pixels, write_circuits};

/// Settings for the quanv command after config and flags are merged.
#[derive(Debug, Clone)]
pub struct QuanvArgs<'a> {
    pub dims: &'a str,
    pub pixels: &'a str,
    pub filter: &'a str,
    pub stride: u32,
    pub random: bool,
    pub seed: u64,
    pub depth: u32,
}

/// Execute the quanv command.
pub fn execute(args: &QuanvArgs<'_>, output: &OutputTarget) -> Result<()> {
    let dims = parse_dims(args.dims)?;
    let filter = parse_dims(args.filter).context("Invalid --filter value")?;
    let pixels = parse_pixels(args.pixels)?;

    let filter_size = (filter.rows(), filter.cols());
    let config = QuanvolutionalConfig::new(dims, filter_size, args.stride, pixels)
        .with_random(args.random)
        .with_seed(args.seed)
        .with_depth(args.depth);
    let layer = QuanvolutionalLayer::new(config).context("Invalid quanvolutional layer input")?;
    let sub_images = layer.sub_images()?;

    eprintln!(
        "{} Quanvolution over {} image: {} filter, stride {}, {} patches",
        style("→").cyan().bold(),
        style(dims).green(),
        style(filter).yellow(),
        args.stride,
        sub_images.len()
    );
    match layer.filter() {
        Some(f) => eprintln!(
            "  Random filter: seed {}, depth {}, {} ops",
            args.seed,
            args.depth,
            f.num_ops()
        ),
        None => eprintln!("  No filter: embedding and measurement only"),
    }

    let progress = ProgressBar::new(sub_images.len() as u64);
    progress.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.cyan} [{bar:30.cyan/blue}] {pos}/{len} patches")
            .context("Invalid progress template")?
            .progress_chars("=> "),
    );

    let mut circuits = Vec::with_capacity(sub_images.len());
    for sub_image in &sub_images {
        circuits.push(layer.build_sub_circuit(sub_image)?);
        progress.inc(1);
    }
    progress.finish_and_clear();

    eprintln!(
        "{} Built {} circuits of {} qubits",
        style("✓").green().bold(),
        circuits.len(),
        layer.qubits_per_patch()
    );
    write_circuits(&circuits, output)
}
