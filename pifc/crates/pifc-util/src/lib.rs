//! pifc-util - Core Utilities and Foundation Types
//!
//! ============================================================================
//! MODULE OVERVIEW
//! ============================================================================
//!
//! Shared building blocks for the pifc front end. Everything here is
//! independent of the concrete token set, so the lexer and the driver can both
//! depend on it without depending on each other.
//!
//! - [`symbol`] - Fixed-capacity symbol table mapping lexemes to `(bucket, slot)`
//! - [`span`] - Line/offset source locations
//! - [`diagnostic`] - Diagnostic levels, codes, snippets and rendering
//! - [`error`] - Error types for this crate
//
// ============================================================================
// SYMBOL TABLE
// ============================================================================
//
// The symbol table is the only piece of scan output with identity: every
// identifier and constant token carries a reference into it, and a parser
// resolves that reference back to text. Two properties matter:
//
// 1. IDEMPOTENCE
//    add(L) = add(L) for every lexeme L, and size() grows only on new text.
//
// 2. STABILITY
//    A reference, once handed out, resolves to the same text for the whole
//    scan. The bucket count is fixed at construction, so neither the bucket
//    nor the slot of an entry ever moves.
//
// LAYOUT:
// -------
// ```
// bucket = (Σ char codes of L) mod capacity
//
// Bucket 0:  []
// ...
// Bucket 47: ["a", "AAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAA..."]   (chained)
// Bucket 48: ["b"]
// ```
//
// A secondary hash index maps text to its reference, so lookups stay O(1)
// however long a chain grows.

pub mod diagnostic;
pub mod error;
pub mod span;
pub mod symbol;

pub use diagnostic::{Diagnostic, DiagnosticCode, Level, SourceSnippet};
pub use error::{SymbolError, SymbolResult};
pub use span::Span;
pub use symbol::{SymbolRef, SymbolTable, DEFAULT_CAPACITY, MAX_CAPACITY};
