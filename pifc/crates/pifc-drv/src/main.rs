//! pifc - Lexical scanner CLI.
//!
//! Scans one source file and writes its symbol table and program internal
//! form. Exits with status 1 if the scan records any lexical error.

use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use pifc_drv::{Config, Emit, Session, Target};
use pifc_util::MAX_CAPACITY;

/// pifc - Scan a source file into a symbol table and PIF
#[derive(Parser, Debug)]
#[command(name = "pifc")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Scan a source file into a symbol table and program internal form", long_about = None)]
struct Cli {
    /// Source file to scan
    input: PathBuf,

    /// Path to configuration file (default: ./pifc.toml if present)
    #[arg(short, long, env = "PIFC_CONFIG")]
    config: Option<PathBuf>,

    /// Directory for the output files
    #[arg(short, long)]
    out_dir: Option<PathBuf>,

    /// Number of symbol table buckets
    #[arg(long, value_parser = clap::value_parser!(u64).range(1..=MAX_CAPACITY as u64))]
    capacity: Option<u64>,

    /// Outputs to produce
    #[arg(long, value_enum)]
    emit: Option<Emit>,

    /// Print results instead of writing files
    #[arg(long)]
    stdout: bool,

    /// Enable verbose output
    #[arg(short, long, env = "PIFC_VERBOSE")]
    verbose: bool,

    /// Disable color output
    #[arg(long, env = "PIFC_NO_COLOR")]
    no_color: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbose, cli.no_color)?;

    let mut config = load_config(cli.config.as_deref())?;
    if let Some(capacity) = cli.capacity {
        config.symbol_table_capacity = usize::try_from(capacity)
            .context("symbol table capacity does not fit in memory")?;
    }
    if let Some(emit) = cli.emit {
        config.output.emit = emit;
    }

    let target = if cli.stdout {
        Target::Stdout
    } else {
        Target::Files(cli.out_dir)
    };

    let session = Session::new(config, cli.input);
    session
        .run(target)
        .with_context(|| format!("scanning `{}`", session.input.display()))
}

/// Initialize the logging system.
///
/// `RUST_LOG` takes precedence over the level chosen by `verbose`.
fn init_logging(verbose: bool, no_color: bool) -> anyhow::Result<()> {
    let level = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    let layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_ansi(!no_color)
        .with_target(false)
        .with_thread_ids(false)
        .with_thread_names(false);

    tracing_subscriber::registry()
        .with(filter)
        .with(layer)
        .try_init()
        .context("failed to initialize logging")?;

    Ok(())
}

/// Load configuration from file or use defaults.
fn load_config(config_path: Option<&Path>) -> anyhow::Result<Config> {
    let config = match config_path {
        Some(path) => Config::load_from_path(path)?,
        None => Config::load()?,
    };
    Ok(config)
}
