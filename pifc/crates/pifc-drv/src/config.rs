//! Configuration module for the pifc driver.
//!
//! Settings come from an optional `pifc.toml`; every field has a default, so
//! an empty file (or none at all) is a valid configuration. Command-line
//! flags are applied on top by the binary.
//!
//! ```toml
//! symbol_table_capacity = 50
//!
//! [output]
//! symbol_table = "ST.out"
//! pif = "PIF.out"
//! emit = "both"
//! ```

use std::path::{Path, PathBuf};

use clap::ValueEnum;
use pifc_util::{DEFAULT_CAPACITY, MAX_CAPACITY};
use serde::{Deserialize, Serialize};

use crate::error::{DriverError, Result};

/// Default configuration file name.
pub const CONFIG_FILE_NAME: &str = "pifc.toml";

/// Which outputs a successful scan produces.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Emit {
    /// Symbol table and PIF
    #[default]
    Both,
    /// PIF only
    Pif,
    /// Symbol table only
    Symbols,
}

impl Emit {
    /// Whether the symbol table is written
    pub fn symbols(self) -> bool {
        matches!(self, Emit::Both | Emit::Symbols)
    }

    /// Whether the PIF is written
    pub fn pif(self) -> bool {
        matches!(self, Emit::Both | Emit::Pif)
    }
}

/// Driver configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Number of symbol table buckets.
    #[serde(default = "default_capacity")]
    pub symbol_table_capacity: usize,

    /// Output settings.
    #[serde(default)]
    pub output: OutputConfig,
}

/// Output file settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct OutputConfig {
    /// Symbol table output path.
    #[serde(default = "default_symbol_table_path")]
    pub symbol_table: PathBuf,

    /// PIF output path.
    #[serde(default = "default_pif_path")]
    pub pif: PathBuf,

    /// Outputs to produce.
    #[serde(default)]
    pub emit: Emit,
}

fn default_capacity() -> usize {
    DEFAULT_CAPACITY
}

fn default_symbol_table_path() -> PathBuf {
    PathBuf::from("ST.out")
}

fn default_pif_path() -> PathBuf {
    PathBuf::from("PIF.out")
}

impl Default for Config {
    fn default() -> Self {
        Self {
            symbol_table_capacity: default_capacity(),
            output: OutputConfig::default(),
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            symbol_table: default_symbol_table_path(),
            pif: default_pif_path(),
            emit: Emit::default(),
        }
    }
}

impl Config {
    /// Load `pifc.toml` from the current directory, or the defaults if
    /// there is none.
    pub fn load() -> Result<Self> {
        let path = Path::new(CONFIG_FILE_NAME);
        if path.is_file() {
            Self::load_from_path(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Load configuration from a specific path.
    pub fn load_from_path(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|source| DriverError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config: Config = toml::from_str(&content).map_err(|source| DriverError::ConfigParse {
            path: path.to_path_buf(),
            source,
        })?;
        config.validate()?;
        tracing::debug!(path = %path.display(), "loaded configuration");
        Ok(config)
    }

    /// Check values serde cannot check.
    pub fn validate(&self) -> Result<()> {
        if self.symbol_table_capacity == 0 {
            return Err(DriverError::Config(
                "symbol_table_capacity must be greater than 0".to_string(),
            ));
        }
        if self.symbol_table_capacity > MAX_CAPACITY {
            return Err(DriverError::Config(format!(
                "symbol_table_capacity must be at most {}",
                MAX_CAPACITY
            )));
        }
        Ok(())
    }

    /// Where the symbol table goes, under `out_dir` if given.
    pub fn symbol_table_path(&self, out_dir: Option<&Path>) -> PathBuf {
        place(&self.output.symbol_table, out_dir)
    }

    /// Where the PIF goes, under `out_dir` if given.
    pub fn pif_path(&self, out_dir: Option<&Path>) -> PathBuf {
        place(&self.output.pif, out_dir)
    }
}

fn place(path: &Path, out_dir: Option<&Path>) -> PathBuf {
    match out_dir {
        Some(dir) => dir.join(path),
        None => path.to_path_buf(),
    }
}
