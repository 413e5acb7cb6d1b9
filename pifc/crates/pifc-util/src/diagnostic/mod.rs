//! Diagnostic module - Error and warning reporting infrastructure.
//!
//! This module provides types for creating and formatting front-end
//! diagnostics. Collection is left to the caller: the scanner returns its
//! errors as values, and the driver turns them into [`Diagnostic`]s for
//! display.
//!
//! # Examples
//!
//! ```
//! use pifc_util::diagnostic::{DiagnosticBuilder, DiagnosticCode, SourceSnippet};
//! use pifc_util::Span;
//!
//! let span = Span::new(1, 2, 1);
//! let diag = DiagnosticBuilder::error("unknown token `@`")
//!     .code(DiagnosticCode::E_LEXER_UNKNOWN_TOKEN)
//!     .span(span)
//!     .snippet(SourceSnippet::for_span("a @ b", span))
//!     .build();
//!
//! let rendered = diag.render("main.txt");
//! assert!(rendered.starts_with("error[E1001]: unknown token `@`"));
//! assert!(rendered.contains(" --> main.txt:1:3"));
//! ```

mod builder;
mod codes;

pub use builder::{DiagnosticBuilder, SourceSnippet};
pub use codes::DiagnosticCode;

use crate::Span;
use std::fmt;

/// Diagnostic severity level
///
/// # Examples
///
/// ```
/// use pifc_util::diagnostic::Level;
///
/// assert_eq!(format!("{}", Level::Error), "error");
/// assert_eq!(format!("{}", Level::Warning), "warning");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Level {
    /// An error that fails the scan
    Error,
    /// A warning that doesn't fail the scan
    Warning,
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Level::Error => write!(f, "error"),
            Level::Warning => write!(f, "warning"),
        }
    }
}

/// A diagnostic message with severity and location
#[derive(Clone, Debug)]
pub struct Diagnostic {
    /// Diagnostic severity level
    pub level: Level,
    /// Main diagnostic message
    pub message: String,
    /// Source location
    pub span: Span,
    /// Optional diagnostic code
    pub code: Option<DiagnosticCode>,
    /// Additional notes for context
    pub notes: Vec<String>,
    /// Help suggestions for fixing the issue
    pub helps: Vec<String>,
    /// Source code snippets for display
    pub snippets: Vec<SourceSnippet>,
}

impl Diagnostic {
    /// Create a new diagnostic
    pub fn new(level: Level, message: impl Into<String>, span: Span) -> Self {
        Self {
            level,
            message: message.into(),
            span,
            code: None,
            notes: Vec::new(),
            helps: Vec::new(),
            snippets: Vec::new(),
        }
    }

    /// Create an error diagnostic
    pub fn error(message: impl Into<String>, span: Span) -> Self {
        Self::new(Level::Error, message, span)
    }

    /// Whether this diagnostic fails the scan
    pub fn is_error(&self) -> bool {
        self.level == Level::Error
    }

    /// Render the diagnostic, naming `origin` (usually a file path) in the
    /// location line
    ///
    /// ```text
    /// error[E1001]: unknown token `@`
    ///  --> main.txt:1:3
    ///   1 | a @ b
    ///     |   ^
    ///   = help: ...
    /// ```
    pub fn render(&self, origin: &str) -> String {
        let mut out = String::new();
        match self.code {
            Some(code) => out.push_str(&format!("{}[{}]: {}", self.level, code, self.message)),
            None => out.push_str(&format!("{}: {}", self.level, self.message)),
        }
        out.push_str(&format!(
            "\n --> {}:{}:{}",
            origin,
            self.span.line,
            self.span.column()
        ));
        for snippet in &self.snippets {
            out.push('\n');
            out.push_str(&snippet.format());
        }
        for note in &self.notes {
            out.push_str(&format!("\n    = note: {}", note));
        }
        for help in &self.helps {
            out.push_str(&format!("\n    = help: {}", help));
        }
        out
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render("<input>"))
    }
}
