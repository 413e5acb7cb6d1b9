//! pifc-drv - Scanner Driver
//!
//! Runs one scan over one input file and delivers the results: the symbol
//! table and PIF as files (or on stdout), or rendered diagnostics when the
//! scan recorded lexical errors. A failed scan writes nothing.
//!
//! - [`config`] - `pifc.toml` settings
//! - [`render`] - Scan errors as diagnostics
//! - [`error`] - Driver error type

pub mod config;
pub mod error;
pub mod render;

use std::fs;
use std::path::{Path, PathBuf};

use pifc_lex::{ProgramInternalForm, ScanFailure, ScanOutcome, Scanner};
use pifc_util::SymbolTable;
use tracing::{debug, info};

pub use config::{Config, Emit, OutputConfig, CONFIG_FILE_NAME};
pub use error::{DriverError, Result};

/// Where a successful scan's results go
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Target {
    /// Write the configured output files, under a directory if given
    Files(Option<PathBuf>),
    /// Print to standard output
    Stdout,
}

/// One scan of one input file
#[derive(Debug, Clone)]
pub struct Session {
    /// Driver configuration
    pub config: Config,
    /// Source file to scan
    pub input: PathBuf,
    scanner: Scanner,
}

impl Session {
    /// Create a session; the input is not read until [`Session::scan`]
    pub fn new(config: Config, input: impl Into<PathBuf>) -> Self {
        let scanner = Scanner::new().capacity(config.symbol_table_capacity);
        Self {
            config,
            input: input.into(),
            scanner,
        }
    }

    /// Scan the input file
    pub fn scan(&self) -> Result<ScanOutcome> {
        debug!(
            input = %self.input.display(),
            capacity = self.config.symbol_table_capacity,
            "starting scan"
        );
        Ok(self.scanner.scan_file(&self.input)?)
    }

    /// Render the errors of a failed scan against the input's source
    pub fn report(&self, failure: &ScanFailure) -> String {
        let source = fs::read_to_string(&self.input).ok();
        render::render_all(
            &failure.errors,
            source.as_deref(),
            &self.input.display().to_string(),
        )
    }

    /// The selected outputs as text
    pub fn emit_text(&self, symbols: &SymbolTable, pif: &ProgramInternalForm) -> String {
        let emit = self.config.output.emit;
        let mut parts = Vec::new();
        if emit.symbols() {
            parts.push(symbols.to_string());
        }
        if emit.pif() {
            parts.push(pif.to_string());
        }
        parts.join("\n\n")
    }

    /// Write the selected outputs, returning the paths written
    pub fn write_outputs(
        &self,
        symbols: &SymbolTable,
        pif: &ProgramInternalForm,
        out_dir: Option<&Path>,
    ) -> Result<Vec<PathBuf>> {
        let emit = self.config.output.emit;
        let mut written = Vec::new();
        if emit.symbols() {
            let path = self.config.symbol_table_path(out_dir);
            write_file(&path, &symbols.to_string())?;
            written.push(path);
        }
        if emit.pif() {
            let path = self.config.pif_path(out_dir);
            write_file(&path, &pif.to_string())?;
            written.push(path);
        }
        Ok(written)
    }

    /// Scan and deliver
    ///
    /// On a failed scan the rendered diagnostics go to stderr, nothing is
    /// written, and the failure is returned.
    pub fn run(&self, target: Target) -> Result<()> {
        let outcome = self.scan()?;
        let (symbols, pif) = match outcome.into_result() {
            Ok(results) => results,
            Err(failure) => {
                eprintln!("{}", self.report(&failure));
                return Err(failure.into());
            },
        };

        match target {
            Target::Stdout => println!("{}", self.emit_text(&symbols, &pif)),
            Target::Files(out_dir) => {
                for path in self.write_outputs(&symbols, &pif, out_dir.as_deref())? {
                    info!(path = %path.display(), "wrote output");
                }
            },
        }
        Ok(())
    }
}

fn write_file(path: &Path, contents: &str) -> Result<()> {
    let result = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => fs::create_dir_all(parent),
        _ => Ok(()),
    }
    .and_then(|()| fs::write(path, format!("{}\n", contents)));

    result.map_err(|source| DriverError::Write {
        path: path.to_path_buf(),
        source,
    })
}
