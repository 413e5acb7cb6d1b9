//! Lexical tables: the fixed vocabulary of the language.
//!
//! Reserved words, operators and separators each map their exact text to a
//! [`TokenClass`]. Operators and separators together are also the delimiter
//! set the splitter cuts lines at.
//!
//! Tables are plain values handed to the [`Scanner`](crate::Scanner), so a
//! test can scan with a reduced or renamed vocabulary.
//!
//! # Examples
//!
//! ```
//! use pifc_lex::{LexTables, TokenClass};
//!
//! let tables = LexTables::standard();
//! assert_eq!(tables.lookup("while"), Some(TokenClass::While));
//! assert_eq!(tables.lookup("<="), Some(TokenClass::LtEq));
//! assert_eq!(tables.lookup("x"), None);
//! assert_eq!(&*tables.delimiters()[0], "<=");
//! ```

use indexmap::IndexMap;

use crate::token::TokenClass;

/// Reserved word, operator and separator tables
#[derive(Clone, Debug)]
pub struct LexTables {
    reserved: IndexMap<Box<str>, TokenClass>,
    operators: IndexMap<Box<str>, TokenClass>,
    separators: IndexMap<Box<str>, TokenClass>,

    /// Operator and separator texts, longest first; ties keep table order
    delimiters: Vec<Box<str>>,
}

impl LexTables {
    /// Tables with no entries
    pub fn empty() -> Self {
        Self {
            reserved: IndexMap::new(),
            operators: IndexMap::new(),
            separators: IndexMap::new(),
            delimiters: Vec::new(),
        }
    }

    /// The language's standard vocabulary
    pub fn standard() -> Self {
        fn table(classes: &[TokenClass]) -> IndexMap<Box<str>, TokenClass> {
            classes
                .iter()
                .filter_map(|&class| class.lexeme().map(|text| (text.into(), class)))
                .collect()
        }

        let mut tables = Self {
            reserved: table(&TokenClass::RESERVED),
            operators: table(&TokenClass::OPERATORS),
            separators: table(&TokenClass::SEPARATORS),
            delimiters: Vec::new(),
        };
        tables.rebuild_delimiters();
        tables
    }

    /// Add or replace a reserved word
    pub fn insert_reserved(&mut self, text: &str, class: TokenClass) -> &mut Self {
        self.reserved.insert(text.into(), class);
        self
    }

    /// Add or replace an operator
    pub fn insert_operator(&mut self, text: &str, class: TokenClass) -> &mut Self {
        self.operators.insert(text.into(), class);
        self.rebuild_delimiters();
        self
    }

    /// Add or replace a separator
    pub fn insert_separator(&mut self, text: &str, class: TokenClass) -> &mut Self {
        self.separators.insert(text.into(), class);
        self.rebuild_delimiters();
        self
    }

    /// Remove `text` from whichever table holds it
    pub fn remove(&mut self, text: &str) -> Option<TokenClass> {
        if let Some(class) = self.reserved.shift_remove(text) {
            return Some(class);
        }
        let removed = self
            .operators
            .shift_remove(text)
            .or_else(|| self.separators.shift_remove(text));
        if removed.is_some() {
            self.rebuild_delimiters();
        }
        removed
    }

    /// Class of an exact reserved word, operator or separator
    pub fn lookup(&self, text: &str) -> Option<TokenClass> {
        self.reserved
            .get(text)
            .or_else(|| self.operators.get(text))
            .or_else(|| self.separators.get(text))
            .copied()
    }

    /// Delimiter texts in matching order
    pub fn delimiters(&self) -> &[Box<str>] {
        &self.delimiters
    }

    /// Reserved words in table order
    pub fn reserved(&self) -> impl Iterator<Item = (&str, TokenClass)> + '_ {
        self.reserved.iter().map(|(text, &class)| (&**text, class))
    }

    /// Operators in table order
    pub fn operators(&self) -> impl Iterator<Item = (&str, TokenClass)> + '_ {
        self.operators.iter().map(|(text, &class)| (&**text, class))
    }

    /// Separators in table order
    pub fn separators(&self) -> impl Iterator<Item = (&str, TokenClass)> + '_ {
        self.separators.iter().map(|(text, &class)| (&**text, class))
    }

    fn rebuild_delimiters(&mut self) {
        self.delimiters = self
            .operators
            .keys()
            .chain(self.separators.keys())
            .filter(|text| !text.is_empty())
            .cloned()
            .collect();
        // stable: equal lengths keep insertion order
        self.delimiters
            .sort_by_key(|text| std::cmp::Reverse(text.chars().count()));
    }
}

impl Default for LexTables {
    fn default() -> Self {
        Self::standard()
    }
}
