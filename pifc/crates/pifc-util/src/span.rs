//! Span module - Source location tracking.
//!
//! Scanning is line oriented, so a location is a line number plus a
//! character offset within that line rather than a byte range into the
//! whole file.
//!
//! # Examples
//!
//! ```
//! use pifc_util::span::Span;
//!
//! let span = Span::new(3, 4, 2);
//! assert_eq!(span.line, 3);
//! assert_eq!(span.column(), 5);
//! assert_eq!(span.to_string(), "3:4");
//! ```

use std::fmt;

/// Source location span
///
/// - `line` is 1-based
/// - `offset` is the 0-based character (not byte) offset on that line
/// - `width` is the length of the spanned text in characters
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Span {
    /// Line number (1-based)
    pub line: u32,
    /// Character offset within the line (0-based)
    pub offset: u32,
    /// Width in characters
    pub width: u32,
}

impl Span {
    /// Dummy span for testing
    pub const DUMMY: Span = Span {
        line: 0,
        offset: 0,
        width: 0,
    };

    /// Create a new span
    #[inline]
    pub const fn new(line: u32, offset: u32, width: u32) -> Self {
        Self { line, offset, width }
    }

    /// Create a zero-width span
    #[inline]
    pub const fn point(line: u32, offset: u32) -> Self {
        Self::new(line, offset, 0)
    }

    /// 1-based column, as editors display it
    #[inline]
    pub const fn column(&self) -> u32 {
        self.offset + 1
    }

    /// Return the same location with a different width
    #[inline]
    pub const fn with_width(self, width: u32) -> Self {
        Self { width, ..self }
    }
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.offset)
    }
}
