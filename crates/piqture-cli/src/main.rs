//! piqture Command-Line Interface
//!
//! Builds image encodings, tensor-network ansätze and quanvolutional layers
//! and writes them as `OpenQASM` 3 or JSON.
//!
//! ```text
//! piqture neqr --dims 2x2 --pixels 0,64,128,255
//! piqture frqi --dims 4x4 --symbolic -o frqi.qasm
//! piqture mps --dims 2x2 --structure general --real --format json
//! piqture quanv --dims 4x4 --pixels @image.txt --filter 2x2 --stride 2 --seed 7
//! ```

#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

use std::path::PathBuf;

use anyhow::Context;
use clap::{Args, Parser, Subcommand};
use console::style;
use tracing_subscriber::EnvFilter;

mod commands;
mod config;

use commands::common::{OutputFormat, OutputTarget};
use commands::quanv::QuanvArgs;
use commands::{frqi, mps, neqr, quanv, version};
use config::Config;

/// piqture - quantum image encodings, tensor-network ansätze and quanvolution
#[derive(Parser)]
#[command(name = "piqture")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Configuration file (YAML)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

/// Output flags shared by every builder command.
#[derive(Args, Debug, Clone, Default)]
struct OutputArgs {
    /// Output file (stdout if omitted)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Output format (qasm, json)
    #[arg(short, long)]
    format: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Encode an image with NEQR
    Neqr {
        /// Image dimensions, ROWSxCOLS
        #[arg(short, long)]
        dims: String,

        /// Pixel values (comma separated, or @file)
        #[arg(short, long)]
        pixels: String,

        /// Maximum color intensity (0-255)
        #[arg(long, allow_negative_numbers = true)]
        max_color_intensity: Option<i32>,

        #[command(flatten)]
        output: OutputArgs,
    },

    /// Encode an image with FRQI
    Frqi {
        /// Image dimensions, ROWSxCOLS
        #[arg(short, long)]
        dims: String,

        /// Pixel values (comma separated, or @file)
        #[arg(short, long, required_unless_present = "symbolic")]
        pixels: Option<String>,

        /// Leave pixel angles as free parameters
        #[arg(long, conflicts_with = "pixels")]
        symbolic: bool,

        #[command(flatten)]
        output: OutputArgs,
    },

    /// Build a Matrix Product State ansatz
    Mps {
        /// Image dimensions, ROWSxCOLS (one qubit per pixel)
        #[arg(short, long)]
        dims: String,

        /// Block parameterization (simple, general)
        #[arg(short, long, default_value = "simple")]
        structure: String,

        /// Use real-valued blocks instead of complex ones
        #[arg(long)]
        real: bool,

        #[command(flatten)]
        output: OutputArgs,
    },

    /// Build a quanvolutional layer
    Quanv {
        /// Image dimensions, ROWSxCOLS
        #[arg(short, long)]
        dims: String,

        /// Pixel values (comma separated, or @file)
        #[arg(short, long)]
        pixels: String,

        /// Filter size, ROWSxCOLS
        #[arg(long, default_value = "2x2")]
        filter: String,

        /// Stride between patches
        #[arg(long, default_value = "1")]
        stride: u32,

        /// Skip the random filter circuit
        #[arg(long)]
        no_random: bool,

        /// Seed for the random filter
        #[arg(long)]
        seed: Option<u64>,

        /// Depth of the random filter
        #[arg(long)]
        depth: Option<u32>,

        #[command(flatten)]
        output: OutputArgs,
    },

    /// Show version information
    Version,
}

impl OutputArgs {
    fn resolve(&self, config: &Config) -> anyhow::Result<OutputTarget> {
        let format: OutputFormat = self
            .format
            .as_deref()
            .unwrap_or(&config.output.format)
            .parse()?;
        Ok(OutputTarget {
            format,
            path: self.output.clone(),
        })
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config_path = Config::locate(cli.config.as_deref());
    let result = Config::load(config_path.as_deref())
        .context("Failed to load configuration")
        .and_then(|config| {
            let filter = match cli.verbose {
                0 => config.log_level.as_str(),
                1 => "info",
                2 => "debug",
                _ => "trace",
            };
            tracing_subscriber::fmt()
                .with_env_filter(EnvFilter::new(filter))
                .with_target(false)
                .with_writer(std::io::stderr)
                .init();
            if let Some(path) = &config_path {
                tracing::debug!(path = %path.display(), "loaded config file");
            }

            run(cli.command, &config)
        });

    // Handle errors
    if let Err(e) = result {
        eprintln!("{} {:#}", style("Error:").red().bold(), e);
        std::process::exit(1);
    }

    Ok(())
}

fn run(command: Commands, config: &Config) -> anyhow::Result<()> {
    match command {
        Commands::Neqr {
            dims,
            pixels,
            max_color_intensity,
            output,
        } => neqr::execute(
            &dims,
            &pixels,
            max_color_intensity.unwrap_or(config.neqr.max_color_intensity),
            &output.resolve(config)?,
        ),

        Commands::Frqi {
            dims,
            pixels,
            symbolic: _,
            output,
        } => frqi::execute(&dims, pixels.as_deref(), &output.resolve(config)?),

        Commands::Mps {
            dims,
            structure,
            real,
            output,
        } => mps::execute(&dims, &structure, !real, &output.resolve(config)?),

        Commands::Quanv {
            dims,
            pixels,
            filter,
            stride,
            no_random,
            seed,
            depth,
            output,
        } => {
            let args = QuanvArgs {
                dims: &dims,
                pixels: &pixels,
                filter: &filter,
                stride,
                random: !no_random,
                seed: seed.unwrap_or(config.quanv.seed),
                depth: depth.unwrap_or(config.quanv.depth),
            };
            quanv::execute(&args, &output.resolve(config)?)
        }

        Commands::Version => {
            version::execute();
            Ok(())
        }
    }
}
