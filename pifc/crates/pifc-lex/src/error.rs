//! Error types for pifc-lex.
//!
//! Lexical errors never abort a scan: each one is recorded as a
//! [`ScanError`] and scanning continues with the next lexeme. Only failing
//! to read the input stops a scan early ([`ScanIoError`]).

use std::io;
use std::path::PathBuf;

use pifc_util::{DiagnosticCode, Span};
use thiserror::Error;

/// Why a candidate lexeme could not be classified
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LexicalError {
    /// The text matches no table entry and no token rule
    #[error("token `{text}` is not a reserved word or a valid identifier or constant")]
    UnknownToken {
        /// Offending text
        text: String,
    },

    /// Digits with a leading zero, like `007`
    #[error("number `{text}` is not in canonical form")]
    NonCanonicalNumber {
        /// Offending text
        text: String,
    },

    /// `+0` or `-0`
    #[error("0 can't be preceded by a sign")]
    SignedZero {
        /// Offending text
        text: String,
    },
}

impl LexicalError {
    /// The text that failed to classify
    pub fn text(&self) -> &str {
        match self {
            LexicalError::UnknownToken { text }
            | LexicalError::NonCanonicalNumber { text }
            | LexicalError::SignedZero { text } => text,
        }
    }

    /// Diagnostic code for this error
    pub fn code(&self) -> DiagnosticCode {
        match self {
            LexicalError::UnknownToken { .. } => DiagnosticCode::E_LEXER_UNKNOWN_TOKEN,
            LexicalError::NonCanonicalNumber { .. } => DiagnosticCode::E_LEXER_INVALID_NUMBER,
            LexicalError::SignedZero { .. } => DiagnosticCode::E_LEXER_SIGNED_ZERO,
        }
    }
}

/// A lexical error together with where the offending lexeme starts
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{error} on line {}, offset {}", .span.line, .span.offset)]
pub struct ScanError {
    /// What went wrong
    pub error: LexicalError,
    /// Start of the offending lexeme; `width` covers its text
    pub span: Span,
}

impl ScanError {
    /// Create a scan error
    pub fn new(error: LexicalError, span: Span) -> Self {
        Self { error, span }
    }

    /// Human-readable message, without location
    pub fn message(&self) -> String {
        self.error.to_string()
    }

    /// 1-based line number
    #[inline]
    pub fn line(&self) -> u32 {
        self.span.line
    }

    /// 0-based character offset on the line
    #[inline]
    pub fn offset(&self) -> u32 {
        self.span.offset
    }

    /// The offending text
    pub fn text(&self) -> &str {
        self.error.text()
    }
}

/// Reading the input failed
#[derive(Debug, Error)]
pub enum ScanIoError {
    /// The input file could not be opened
    #[error("failed to open `{}`", .path.display())]
    Open {
        /// Path that was opened
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: io::Error,
    },

    /// A line could not be read
    #[error("failed to read line {line}")]
    Read {
        /// Line that was being read (1-based)
        line: u32,
        /// Underlying I/O error
        #[source]
        source: io::Error,
    },
}

/// A completed scan that recorded at least one lexical error
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("lexical analysis failed with {} error(s)", .errors.len())]
pub struct ScanFailure {
    /// Every recorded error, in source order
    pub errors: Vec<ScanError>,
}

/// Result type alias for classification
pub type LexResult<T> = std::result::Result<T, LexicalError>;
