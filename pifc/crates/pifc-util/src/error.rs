//! Core error types for pifc-util crate
//!
//! This module defines error types used throughout the util crate.

use thiserror::Error;

/// Error type for symbol table operations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SymbolError {
    /// The `(bucket, slot)` pair does not name an entry
    ///
    /// Only reachable through references that were not issued by the table
    /// being queried.
    #[error("symbol reference ({bucket}, {slot}) is out of range")]
    OutOfRange { bucket: usize, slot: usize },
}

/// Result type alias for symbol operations
pub type SymbolResult<T> = std::result::Result<T, SymbolError>;
