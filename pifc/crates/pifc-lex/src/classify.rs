//! Token classifier.
//!
//! Decides the [`TokenClass`] of one candidate lexeme. Rules are tried in a
//! fixed order and the first match wins:
//!
//! 1. empty text: nothing to emit
//! 2. exact reserved word, operator or separator
//! 3. `true` / `false`
//! 4. identifier: a letter, then letters or digits
//! 5. number: optional sign, then canonical decimal digits
//! 6. char: exactly three characters between single quotes
//! 7. string: two or more characters between double quotes
//!
//! Anything else is [`LexicalError::UnknownToken`].

use crate::error::{LexResult, LexicalError};
use crate::tables::LexTables;
use crate::token::TokenClass;

/// Classify a candidate lexeme
///
/// Returns `Ok(None)` for empty text, which the scanner skips.
///
/// # Examples
///
/// ```
/// use pifc_lex::classify::classify;
/// use pifc_lex::{LexTables, LexicalError, TokenClass};
///
/// let tables = LexTables::standard();
/// assert_eq!(classify(&tables, "if"), Ok(Some(TokenClass::If)));
/// assert_eq!(classify(&tables, "-42"), Ok(Some(TokenClass::NumberConstant)));
/// assert_eq!(classify(&tables, ""), Ok(None));
/// assert!(matches!(
///     classify(&tables, "-0"),
///     Err(LexicalError::SignedZero { .. })
/// ));
/// ```
pub fn classify(tables: &LexTables, text: &str) -> LexResult<Option<TokenClass>> {
    if text.is_empty() {
        return Ok(None);
    }
    if let Some(class) = tables.lookup(text) {
        return Ok(Some(class));
    }
    if is_bool(text) {
        return Ok(Some(TokenClass::BoolConstant));
    }
    if is_identifier(text) {
        return Ok(Some(TokenClass::Identifier));
    }
    if let Some(number) = number(text) {
        return number.map(|()| Some(TokenClass::NumberConstant));
    }
    if is_char(text) {
        return Ok(Some(TokenClass::CharConstant));
    }
    if is_string(text) {
        return Ok(Some(TokenClass::StringConstant));
    }
    Err(LexicalError::UnknownToken { text: text.into() })
}

/// `true` or `false`
#[inline]
pub fn is_bool(text: &str) -> bool {
    matches!(text, "true" | "false")
}

/// A letter followed by letters or digits
pub fn is_identifier(text: &str) -> bool {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) if first.is_alphabetic() => chars.all(char::is_alphanumeric),
        _ => false,
    }
}

/// Number rule
///
/// `None` when the text is not shaped like a number at all, `Some(Err(_))`
/// when it is but breaks canonical form.
fn number(text: &str) -> Option<LexResult<()>> {
    let (signed, digits) = match text.strip_prefix(['+', '-']) {
        Some(digits) => (true, digits),
        None => (false, text),
    };
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }

    if digits.len() > 1 && digits.starts_with('0') {
        return Some(Err(LexicalError::NonCanonicalNumber { text: text.into() }));
    }
    if signed && digits == "0" {
        return Some(Err(LexicalError::SignedZero { text: text.into() }));
    }
    Some(Ok(()))
}

/// Optional sign followed by canonical decimal digits
pub fn is_number(text: &str) -> bool {
    matches!(number(text), Some(Ok(())))
}

/// Exactly three characters, first and last `'`
pub fn is_char(text: &str) -> bool {
    text.chars().count() == 3 && text.starts_with('\'') && text.ends_with('\'')
}

/// At least two characters, first and last `"`
pub fn is_string(text: &str) -> bool {
    text.len() >= 2 && text.starts_with('"') && text.ends_with('"')
}
