//! Error handling module for the pifc driver.
//!
//! This module provides the driver's error type using `thiserror`. The
//! binary wraps it in `anyhow` at the top level.

use std::path::PathBuf;

use pifc_lex::{ScanFailure, ScanIoError};
use thiserror::Error;

/// Main error type for the pifc driver.
#[derive(Error, Debug)]
pub enum DriverError {
    /// Configuration is invalid.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration `{}`", .path.display())]
    ConfigParse {
        /// Configuration file path
        path: PathBuf,
        /// Parser error
        #[source]
        source: toml::de::Error,
    },

    /// A file could not be read.
    #[error("Failed to read `{}`", .path.display())]
    Read {
        /// Path being read
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// An output file could not be written.
    #[error("Failed to write `{}`", .path.display())]
    Write {
        /// Path being written
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// The scanner could not read its input.
    #[error(transparent)]
    Scan(#[from] ScanIoError),

    /// The scan completed but recorded lexical errors.
    #[error(transparent)]
    Lexical(#[from] ScanFailure),
}

/// Result type alias using DriverError.
pub type Result<T> = std::result::Result<T, DriverError>;
