//! Shared helpers for CLI commands.

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use anyhow::{Context, Result};
use console::style;

use piqture_embed::ImageDims;
use piqture_ir::Circuit;
use piqture_qasm3::emit;

/// Serialization of built circuits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// `OpenQASM` 3 source
    Qasm,
    /// serde JSON
    Json,
}

impl FromStr for OutputFormat {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "qasm" | "qasm3" => Ok(OutputFormat::Qasm),
            "json" => Ok(OutputFormat::Json),
            other => anyhow::bail!("Unknown format: '{other}'. Available: qasm, json"),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Qasm => f.write_str("qasm"),
            OutputFormat::Json => f.write_str("json"),
        }
    }
}

/// Where and how to write results.
#[derive(Debug, Clone)]
pub struct OutputTarget {
    pub format: OutputFormat,
    pub path: Option<PathBuf>,
}

/// Parse `ROWSxCOLS`.
pub fn parse_dims(spec: &str) -> Result<ImageDims> {
    spec.parse::<ImageDims>()
        .with_context(|| format!("Invalid --dims value: '{spec}'"))
}

/// Parse a pixel list.
///
/// Values are separated by commas or whitespace. `@path` reads the list from
/// a file.
pub fn parse_pixels(spec: &str) -> Result<Vec<f64>> {
    let source = match spec.strip_prefix('@') {
        Some(path) => fs::read_to_string(path)
            .with_context(|| format!("Failed to read pixel file: {path}"))?,
        None => spec.to_string(),
    };

    source
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|token| !token.is_empty())
        .map(|token| {
            token
                .parse::<f64>()
                .with_context(|| format!("Invalid pixel value: '{token}'"))
        })
        .collect()
}

/// Serialize circuits in the requested format.
///
/// Several QASM programs are separated by a comment line naming each
/// circuit; several JSON circuits form an array.
pub fn render(circuits: &[Circuit], format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Qasm => {
            if let [circuit] = circuits {
                return emit(circuit).map_err(|e| anyhow::anyhow!("Emit error: {e}"));
            }
            let mut out = String::new();
            for circuit in circuits {
                out.push_str(&format!("// circuit: {}\n", circuit.name()));
                out.push_str(&emit(circuit).map_err(|e| anyhow::anyhow!("Emit error: {e}"))?);
                out.push('\n');
            }
            Ok(out)
        }
        OutputFormat::Json => {
            let json = match circuits {
                [circuit] => serde_json::to_string_pretty(circuit),
                _ => serde_json::to_string_pretty(circuits),
            };
            json.context("Failed to serialize circuit")
        }
    }
}

/// Write circuits to the target file, or stdout when no path is set.
pub fn write_circuits(circuits: &[Circuit], target: &OutputTarget) -> Result<()> {
    let content = render(circuits, target.format)?;

    match &target.path {
        Some(path) => {
            write_file(path, &content)?;
            eprintln!(
                "  Output: {} ({})",
                style(path.display()).green(),
                target.format
            );
        }
        None => print!("{content}"),
    }
    Ok(())
}

fn write_file(path: &Path, content: &str) -> Result<()> {
    fs::write(path, content).with_context(|| format!("Failed to write file: {}", path.display()))
}

/// Print a one-line circuit summary to stderr.
pub fn print_summary(circuit: &Circuit) {
    let params = circuit.parameters().len();
    eprintln!(
        "{} Built {}: {} qubits, {} ops, depth {}{}",
        style("✓").green().bold(),
        style(circuit.name()).cyan(),
        circuit.num_qubits(),
        circuit.num_ops(),
        circuit.depth(),
        if params > 0 {
            format!(", {params} free parameters")
        } else {
            String::new()
        }
    );
}
