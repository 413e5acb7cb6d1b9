//! Scan state: the context that spans lexemes and lines.
//!
//! The splitter cuts a line without knowing anything about quotes or signs,
//! so two kinds of lexeme need stitching back together before they can be
//! classified:
//!
//! - quoted literals, cut at every delimiter and blank inside them
//!   (`"a,b"` arrives as `"a`, `,`, `b"`), possibly across lines;
//! - signed numbers, where a lone `+`/`-` is glued onto the next word when
//!   no operand precedes it (`x = -5`), and left as an operator when one
//!   does (`a-5`).
//!
//! [`ScanState`] holds that context for one scan. The scanner feeds it
//! lexemes, classifies the candidates it hands back and reports the class of
//! each emitted token with [`ScanState::record`].

use std::borrow::Cow;

use pifc_util::Span;

use crate::splitter::{Lexeme, LexemeKind};
use crate::token::TokenClass;

const QUOTES: [char; 2] = ['\'', '"'];

/// Which buffer, if any, is currently open
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Mode {
    /// No buffer open
    Scanning,
    /// Inside a quoted literal
    InQuote,
    /// Holding a sign that may belong to the next number
    InSign,
}

/// Text ready for classification
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Candidate<'a> {
    /// Text to classify
    pub text: Cow<'a, str>,
    /// Where the text starts; `width` covers it
    pub span: Span,
}

impl<'a> Candidate<'a> {
    fn borrowed(text: &'a str, span: Span) -> Self {
        Self {
            text: Cow::Borrowed(text),
            span,
        }
    }

    fn owned(text: String, span: Span) -> Self {
        let span = span.with_width(text.chars().count() as u32);
        Self {
            text: Cow::Owned(text),
            span,
        }
    }
}

#[derive(Clone, Debug)]
struct OpenQuote {
    quote: char,
    text: String,
    start: Span,
}

#[derive(Clone, Debug)]
struct HeldSign {
    text: String,
    span: Span,
}

/// Cross-lexeme context for one scan
#[derive(Clone, Debug, Default)]
pub struct ScanState {
    quote: Option<OpenQuote>,
    sign: Option<HeldSign>,
    prev_class: Option<TokenClass>,
}

impl ScanState {
    /// Fresh state for a new scan
    pub fn new() -> Self {
        Self::default()
    }

    /// Which buffer is open
    pub fn mode(&self) -> Mode {
        if self.quote.is_some() {
            Mode::InQuote
        } else if self.sign.is_some() {
            Mode::InSign
        } else {
            Mode::Scanning
        }
    }

    /// Class of the last token appended to the PIF
    #[inline]
    pub fn prev_class(&self) -> Option<TokenClass> {
        self.prev_class
    }

    /// Note that a token of `class` was appended to the PIF
    ///
    /// Not called for lexemes that failed to classify.
    #[inline]
    pub fn record(&mut self, class: TokenClass) {
        self.prev_class = Some(class);
    }

    /// Feed one lexeme of `line`; completed candidates are pushed to `out`
    ///
    /// Zero, one or two candidates come out per lexeme: two when a held sign
    /// is released ahead of the lexeme that released it.
    pub fn feed<'a>(&mut self, lexeme: Lexeme<'a>, line: u32, out: &mut Vec<Candidate<'a>>) {
        let span = Span::new(line, lexeme.offset, lexeme.width());

        if let Some(open) = &mut self.quote {
            open.text.push_str(lexeme.text);
            // the first matching quote closes the literal, even mid-word
            if lexeme.text.contains(open.quote) {
                if let Some(open) = self.quote.take() {
                    out.push(Candidate::owned(open.text, open.start));
                }
            }
            return;
        }

        if lexeme.kind == LexemeKind::Blank {
            return;
        }

        if let Some(sign) = self.sign.take() {
            if lexeme.kind == LexemeKind::Word && !lexeme.text.starts_with(QUOTES) {
                out.push(Candidate::owned(sign.text + lexeme.text, sign.span));
                return;
            }
            // released as its operator; a held sign means no operand precedes
            // it, so the decision below is unchanged by its emission
            out.push(Candidate::owned(sign.text, sign.span));
        }

        match lexeme.kind {
            LexemeKind::Delimiter if is_sign(lexeme.text) && !self.follows_operand() => {
                self.sign = Some(HeldSign {
                    text: lexeme.text.to_owned(),
                    span,
                });
            },
            LexemeKind::Word if opens_quote(lexeme.text) => {
                let quote = lexeme.text.chars().next().unwrap_or('"');
                self.quote = Some(OpenQuote {
                    quote,
                    text: lexeme.text.to_owned(),
                    start: span,
                });
            },
            _ => out.push(Candidate::borrowed(lexeme.text, span)),
        }
    }

    /// Line break; an open quoted literal keeps it as `\n`
    pub fn end_line(&mut self) {
        if let Some(open) = &mut self.quote {
            open.text.push('\n');
        }
    }

    /// End of input: flush whatever buffer is still open
    ///
    /// An unterminated literal becomes a final candidate (which fails to
    /// classify) unless it is nothing but the opening quote. A held sign
    /// becomes its operator.
    pub fn finish(&mut self, out: &mut Vec<Candidate<'static>>) {
        if let Some(open) = self.quote.take() {
            let body = open.text.trim_end_matches('\n');
            if body.chars().ne(std::iter::once(open.quote)) {
                out.push(Candidate::owned(open.text, open.start));
            } else {
                tracing::debug!(line = open.start.line, "dropping lone quote at end of input");
            }
        }
        if let Some(sign) = self.sign.take() {
            out.push(Candidate::owned(sign.text, sign.span));
        }
    }

    fn follows_operand(&self) -> bool {
        self.prev_class.is_some_and(TokenClass::takes_attribute)
    }
}

fn is_sign(text: &str) -> bool {
    matches!(text, "+" | "-")
}

/// Begins with a quote that the word itself never closes
fn opens_quote(text: &str) -> bool {
    match text.chars().next() {
        Some(quote) if QUOTES.contains(&quote) => !text[quote.len_utf8()..].contains(quote),
        _ => false,
    }
}
