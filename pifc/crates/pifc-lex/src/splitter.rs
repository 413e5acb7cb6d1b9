//! Lexeme splitter.
//!
//! Cuts one source line into lexemes at whitespace and at every delimiter
//! (operator or separator) occurrence. Delimiters are kept as their own
//! lexemes, and whitespace runs come out as [`LexemeKind::Blank`] so an open
//! quoted literal can keep its spaces.
//!
//! Delimiters are matched longest first, so `++` is one lexeme, never two
//! `+`.
//!
//! # Examples
//!
//! ```
//! use pifc_lex::splitter::{split, LexemeKind};
//! use pifc_lex::LexTables;
//!
//! let tables = LexTables::standard();
//! let lexemes: Vec<_> = split("i++;", &tables).collect();
//! let texts: Vec<&str> = lexemes.iter().map(|l| l.text).collect();
//! assert_eq!(texts, ["i", "++", ";"]);
//! assert_eq!(lexemes[1].kind, LexemeKind::Delimiter);
//! assert_eq!(lexemes[2].offset, 3);
//! ```

use crate::tables::LexTables;

/// What kind of text a lexeme holds
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum LexemeKind {
    /// Run of non-blank, non-delimiter characters
    Word,
    /// One operator or separator
    Delimiter,
    /// Run of whitespace
    Blank,
}

/// An unclassified piece of a line
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Lexeme<'a> {
    /// Source text
    pub text: &'a str,
    /// 0-based character offset on the line
    pub offset: u32,
    /// Kind of text
    pub kind: LexemeKind,
}

impl Lexeme<'_> {
    /// Width in characters
    pub fn width(&self) -> u32 {
        self.text.chars().count() as u32
    }
}

/// Iterator over the lexemes of one line
///
/// Tracks a byte position for slicing and a character offset for
/// reporting, the same way a cursor over the line would.
pub struct Splitter<'a, 'd> {
    line: &'a str,
    delimiters: &'d [Box<str>],
    /// Byte position in `line`
    position: usize,
    /// Character offset of `position`
    offset: u32,
}

/// Split `line` using the delimiters of `tables`
pub fn split<'a, 'd>(line: &'a str, tables: &'d LexTables) -> Splitter<'a, 'd> {
    Splitter::new(line, tables.delimiters())
}

impl<'a, 'd> Splitter<'a, 'd> {
    /// Create a splitter over `line`
    ///
    /// `delimiters` must already be in matching order (longest first).
    pub fn new(line: &'a str, delimiters: &'d [Box<str>]) -> Self {
        Self {
            line,
            delimiters,
            position: 0,
            offset: 0,
        }
    }

    fn rest(&self) -> &'a str {
        &self.line[self.position..]
    }

    /// Byte and character length of the delimiter starting at `position`
    fn delimiter_at(&self, position: usize) -> Option<(usize, u32)> {
        let rest = &self.line[position..];
        self.delimiters
            .iter()
            .find(|d| rest.starts_with(&***d))
            .map(|d| (d.len(), d.chars().count() as u32))
    }

    /// Consume characters while `keep` holds; returns bytes and chars consumed
    fn eat_while(&self, mut keep: impl FnMut(usize, char) -> bool) -> (usize, u32) {
        let mut bytes = 0;
        let mut chars = 0;
        for (index, c) in self.rest().char_indices() {
            if !keep(self.position + index, c) {
                break;
            }
            bytes = index + c.len_utf8();
            chars += 1;
        }
        (bytes, chars)
    }
}

impl<'a> Iterator for Splitter<'a, '_> {
    type Item = Lexeme<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let first = self.rest().chars().next()?;
        let start = self.position;
        let offset = self.offset;

        let (kind, bytes, chars) = if first.is_whitespace() {
            let (bytes, chars) = self.eat_while(|_, c| c.is_whitespace());
            (LexemeKind::Blank, bytes, chars)
        } else if let Some((bytes, chars)) = self.delimiter_at(start) {
            (LexemeKind::Delimiter, bytes, chars)
        } else {
            let (bytes, chars) = self.eat_while(|position, c| {
                !c.is_whitespace() && self.delimiter_at(position).is_none()
            });
            (LexemeKind::Word, bytes, chars)
        };

        self.position += bytes;
        self.offset += chars;
        Some(Lexeme {
            text: &self.line[start..start + bytes],
            offset,
            kind,
        })
    }
}
