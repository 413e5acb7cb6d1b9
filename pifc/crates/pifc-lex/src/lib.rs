//! pifc-lex - Lexical Scanner
//!
//! This crate turns source text into a Program Internal Form (PIF), the
//! classified token stream in source order, and a symbol table holding every
//! distinct identifier and constant lexeme.
//!
//! # Example Usage
//!
//! ```
//! use pifc_lex::{Scanner, TokenClass};
//!
//! let outcome = Scanner::new().scan_str("if (a <= 10) { write(\"a,b\"); }");
//! assert!(outcome.is_success());
//!
//! let strings: Vec<_> = outcome
//!     .pif
//!     .iter()
//!     .filter(|token| token.class == TokenClass::StringConstant)
//!     .collect();
//! assert_eq!(strings.len(), 1);
//!
//! let text = outcome.symbols.resolve(strings[0].attribute.unwrap()).unwrap();
//! assert_eq!(text, "\"a,b\"");
//! ```
//!
//! # Pipeline
//!
//! ```text
//! line ──► splitter ──► ScanState ──► classify ──► PIF
//!          (lexemes)    (quotes,      (class)       │
//!                        signs)                      └─► symbol table
//! ```
//!
//! # Module Structure
//!
//! - [`token`] - Token classes and tokens
//! - [`tables`] - Reserved words, operators and separators
//! - [`splitter`] - Cutting a line into lexemes
//! - [`state`] - Quote and sign context across lexemes and lines
//! - [`classify`] - Deciding the class of a candidate lexeme
//! - [`scanner`] - The scan driver
//! - [`pif`] - The token stream
//! - [`error`] - Error types
//!
//! # Token Categories
//!
//! **Reserved words**: `main`, `bool`, `number`, `char`, `string`, `if`,
//! `else`, `for`, `while`, `read`, `write`, `const`, `void`
//!
//! **Operators**: `+ - / * = <= < == != > >= // && || ++ -- %`
//!
//! **Separators**: `[ ] { } ( ) ; ,`
//!
//! **Identifiers**: a letter followed by letters or digits
//!
//! **Constants**: numbers (`0`, `42`, `-5`), chars (`'a'`), strings
//! (`"text"`), bools (`true`, `false`)

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod classify;
pub mod error;
pub mod pif;
pub mod scanner;
pub mod splitter;
pub mod state;
pub mod tables;
pub mod token;

#[cfg(test)]
mod edge_cases;

// Re-export main types for convenience
pub use error::{LexResult, LexicalError, ScanError, ScanFailure, ScanIoError};
pub use pif::ProgramInternalForm;
pub use scanner::{ScanOutcome, Scanner};
pub use state::{Mode, ScanState};
pub use tables::LexTables;
pub use token::{Category, Token, TokenClass, NO_ATTRIBUTE};
