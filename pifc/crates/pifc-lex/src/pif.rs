//! Program Internal Form: the token stream in source order.

use std::fmt;
use std::ops::Index;
use std::slice;

use crate::token::{Token, TokenClass};

/// Tokens in the order they appear in the source
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ProgramInternalForm {
    tokens: Vec<Token>,
}

impl ProgramInternalForm {
    /// Empty PIF
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a token
    #[inline]
    pub fn push(&mut self, token: Token) {
        self.tokens.push(token);
    }

    /// Number of tokens
    #[inline]
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// Whether no token was emitted
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Tokens as a slice
    #[inline]
    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    /// Iterate over tokens
    pub fn iter(&self) -> slice::Iter<'_, Token> {
        self.tokens.iter()
    }

    /// Token classes only, in order
    pub fn classes(&self) -> impl Iterator<Item = TokenClass> + '_ {
        self.tokens.iter().map(|token| token.class)
    }
}

impl Index<usize> for ProgramInternalForm {
    type Output = Token;

    fn index(&self, index: usize) -> &Token {
        &self.tokens[index]
    }
}

impl<'a> IntoIterator for &'a ProgramInternalForm {
    type Item = &'a Token;
    type IntoIter = slice::Iter<'a, Token>;

    fn into_iter(self) -> Self::IntoIter {
        self.tokens.iter()
    }
}

impl IntoIterator for ProgramInternalForm {
    type Item = Token;
    type IntoIter = std::vec::IntoIter<Token>;

    fn into_iter(self) -> Self::IntoIter {
        self.tokens.into_iter()
    }
}

impl FromIterator<Token> for ProgramInternalForm {
    fn from_iter<I: IntoIterator<Item = Token>>(iter: I) -> Self {
        Self {
            tokens: iter.into_iter().collect(),
        }
    }
}

/// One token per line
impl fmt::Display for ProgramInternalForm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, token) in self.tokens.iter().enumerate() {
            if index > 0 {
                f.write_str("\n")?;
            }
            write!(f, "{}", token)?;
        }
        Ok(())
    }
}
