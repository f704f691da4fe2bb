//! Configuration for the piqture CLI.
//!
//! Values are resolved with the following precedence (highest first):
//! 1. Command-line flags
//! 2. Environment variables (`PIQTURE_FORMAT`, `PIQTURE_LOG`, `PIQTURE_SEED`)
//! 3. Configuration file (YAML)
//! 4. Default values
//!
//! Without `--config`, `<config dir>/piqture/config.yaml` is read when it
//! exists.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use piqture_embed::DEFAULT_MAX_COLOR_INTENSITY;
use piqture_nn::DEFAULT_FILTER_DEPTH;

const FORMATS: [&str; 2] = ["qasm", "json"];
const LOG_LEVELS: [&str; 5] = ["error", "warn", "info", "debug", "trace"];

/// Complete CLI configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Output settings
    pub output: OutputConfig,

    /// Log level used when no `-v` flag is given
    pub log_level: String,

    /// Quanvolutional layer defaults
    pub quanv: QuanvConfig,

    /// NEQR defaults
    pub neqr: NeqrConfig,
}

/// Output settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// `qasm` or `json`
    pub format: String,
}

/// Quanvolutional layer defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct QuanvConfig {
    /// Seed for the random filter
    pub seed: u64,

    /// Depth of the random filter
    pub depth: u32,
}

/// NEQR defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NeqrConfig {
    /// Maximum color intensity, 0 to 255
    pub max_color_intensity: i32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            output: OutputConfig::default(),
            log_level: "warn".into(),
            quanv: QuanvConfig::default(),
            neqr: NeqrConfig::default(),
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: "qasm".into(),
        }
    }
}

impl Default for QuanvConfig {
    fn default() -> Self {
        Self {
            seed: 0,
            depth: DEFAULT_FILTER_DEPTH,
        }
    }
}

impl Default for NeqrConfig {
    fn default() -> Self {
        Self {
            max_color_intensity: DEFAULT_MAX_COLOR_INTENSITY,
        }
    }
}

impl Config {
    /// Parse a YAML file. Missing keys keep their defaults; values are
    /// validated by [`Config::load`] once environment overrides are in.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path.as_ref()).map_err(|e| {
            ConfigError::Read(format!("{}: {e}", path.as_ref().display()))
        })?;

        serde_yaml_ng::from_str(&contents).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// The file to read: `explicit` if given, else the default location when
    /// it exists.
    pub fn locate(explicit: Option<&Path>) -> Option<PathBuf> {
        explicit
            .map(Path::to_path_buf)
            .or_else(|| default_config_path().filter(|p| p.exists()))
    }

    /// Read `path` (or start from defaults), apply `PIQTURE_*` overrides
    /// from the process environment, then validate.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        Self::load_with_env(path, |key| std::env::var(key).ok())
    }

    fn load_with_env(
        path: Option<&Path>,
        env: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, ConfigError> {
        let config = match path {
            Some(path) => Self::from_file(path)?,
            None => Config::default(),
        };
        let config = config.merge_env(env)?;
        config.validate()?;
        Ok(config)
    }

    /// Apply the variables `env` knows about; absent ones leave values
    /// unchanged.
    fn merge_env(mut self, env: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        if let Some(v) = env("PIQTURE_FORMAT") {
            self.output.format = v;
        }
        if let Some(v) = env("PIQTURE_LOG") {
            self.log_level = v;
        }
        if let Some(v) = env("PIQTURE_SEED") {
            self.quanv.seed = v.trim().parse().map_err(|_| {
                ConfigError::Invalid(format!("PIQTURE_SEED: '{v}' is not an unsigned integer"))
            })?;
        }
        Ok(self)
    }

    /// Reject unknown formats and log levels and out-of-range defaults.
    pub fn validate(&self) -> Result<(), ConfigError> {
        one_of("output format", &self.output.format, &FORMATS)?;
        one_of("log level", &self.log_level, &LOG_LEVELS)?;

        if self.quanv.depth == 0 {
            return Err(ConfigError::Invalid("quanv.depth: must be at least 1".into()));
        }
        if !(0..=255).contains(&self.neqr.max_color_intensity) {
            return Err(ConfigError::Invalid(format!(
                "neqr.max_color_intensity: must be between 0 and 255, got {}",
                self.neqr.max_color_intensity
            )));
        }
        Ok(())
    }
}

/// Case-insensitive membership check with a message listing the choices.
fn one_of(what: &str, value: &str, allowed: &[&str]) -> Result<(), ConfigError> {
    if allowed.iter().any(|a| a.eq_ignore_ascii_case(value)) {
        Ok(())
    } else {
        Err(ConfigError::Invalid(format!(
            "{what}: '{value}'. Must be one of: {}",
            allowed.join(", ")
        )))
    }
}

/// `<config dir>/piqture/config.yaml`, if the platform has a config dir.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("piqture").join("config.yaml"))
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("cannot read config {0}")]
    Read(String),

    #[error("malformed config: {0}")]
    Parse(String),

    #[error("Invalid {0}")]
    Invalid(String),
}
