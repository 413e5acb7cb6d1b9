//! Scan driver.
//!
//! Reads the source line by line, splits each line, lets [`ScanState`]
//! stitch quotes and signs back together, classifies every candidate and
//! appends the result to the PIF. Identifier and constant text goes into the
//! symbol table on the way.
//!
//! Lexical errors are recorded and the scan carries on; the caller gets the
//! partial PIF, the symbol table and the error list together in a
//! [`ScanOutcome`].

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use pifc_util::{SymbolTable, DEFAULT_CAPACITY, MAX_CAPACITY};
use tracing::{debug, trace, warn};

use crate::classify::classify;
use crate::error::{ScanError, ScanFailure, ScanIoError};
use crate::pif::ProgramInternalForm;
use crate::splitter::split;
use crate::state::{Candidate, ScanState};
use crate::tables::LexTables;
use crate::token::Token;

/// Everything a completed scan produced
#[derive(Clone, Debug)]
pub struct ScanOutcome {
    /// Symbol table of identifier and constant lexemes
    pub symbols: SymbolTable,
    /// Tokens in source order
    pub pif: ProgramInternalForm,
    /// Recorded lexical errors, in source order
    pub errors: Vec<ScanError>,
}

impl ScanOutcome {
    /// Whether the scan recorded no error
    #[inline]
    pub fn is_success(&self) -> bool {
        self.errors.is_empty()
    }

    /// Turn the outcome into a pass/fail verdict
    ///
    /// # Errors
    ///
    /// [`ScanFailure`] with every recorded error if there was at least one.
    pub fn into_result(self) -> Result<(SymbolTable, ProgramInternalForm), ScanFailure> {
        if self.errors.is_empty() {
            Ok((self.symbols, self.pif))
        } else {
            Err(ScanFailure {
                errors: self.errors,
            })
        }
    }
}

/// Lexical scanner
///
/// Holds the lexical tables and symbol table capacity; every scan starts
/// from fresh state and a fresh symbol table.
///
/// # Examples
///
/// ```
/// use pifc_lex::{Scanner, TokenClass};
///
/// let outcome = Scanner::new().scan_str("number x = -5;");
/// assert!(outcome.is_success());
/// assert_eq!(
///     outcome.pif.classes().collect::<Vec<_>>(),
///     [
///         TokenClass::Number,
///         TokenClass::Identifier,
///         TokenClass::Eq,
///         TokenClass::NumberConstant,
///         TokenClass::Semicolon,
///     ]
/// );
/// assert_eq!(outcome.symbols.size(), 2);
/// ```
#[derive(Clone, Debug)]
pub struct Scanner {
    tables: LexTables,
    capacity: usize,
}

impl Scanner {
    /// Scanner with the standard tables and default capacity
    pub fn new() -> Self {
        Self::with_tables(LexTables::standard())
    }

    /// Scanner with custom tables
    pub fn with_tables(tables: LexTables) -> Self {
        Self {
            tables,
            capacity: DEFAULT_CAPACITY,
        }
    }

    /// Set the symbol table capacity used by each scan
    ///
    /// Clamped to `1..=MAX_CAPACITY`, as [`SymbolTable::with_capacity`] does.
    pub fn capacity(mut self, capacity: usize) -> Self {
        self.capacity = capacity.clamp(1, MAX_CAPACITY);
        self
    }

    /// Lexical tables in use
    pub fn tables(&self) -> &LexTables {
        &self.tables
    }

    /// Symbol table capacity used by each scan
    pub fn symbol_capacity(&self) -> usize {
        self.capacity
    }

    /// Scan an in-memory source
    pub fn scan_str(&self, source: &str) -> ScanOutcome {
        let mut scan = Scan::new(self);
        for (index, line) in source.lines().enumerate() {
            scan.line(line_number(index), line);
        }
        scan.finish()
    }

    /// Scan line by line from a reader
    ///
    /// # Errors
    ///
    /// [`ScanIoError::Read`] if a line cannot be read. Lexical errors are not
    /// I/O errors; they are in [`ScanOutcome::errors`].
    pub fn scan_reader<R: BufRead>(&self, reader: R) -> Result<ScanOutcome, ScanIoError> {
        let mut scan = Scan::new(self);
        for (index, line) in reader.lines().enumerate() {
            let number = line_number(index);
            let line = line.map_err(|source| ScanIoError::Read {
                line: number,
                source,
            })?;
            scan.line(number, &line);
        }
        Ok(scan.finish())
    }

    /// Scan a file
    ///
    /// # Errors
    ///
    /// [`ScanIoError::Open`] if the file cannot be opened, otherwise as
    /// [`Scanner::scan_reader`].
    pub fn scan_file(&self, path: impl AsRef<Path>) -> Result<ScanOutcome, ScanIoError> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| ScanIoError::Open {
            path: path.to_path_buf(),
            source,
        })?;
        debug!(path = %path.display(), "scanning file");
        self.scan_reader(BufReader::new(file))
    }
}

impl Default for Scanner {
    fn default() -> Self {
        Self::new()
    }
}

fn line_number(index: usize) -> u32 {
    u32::try_from(index + 1).unwrap_or(u32::MAX)
}

/// One scan in progress
struct Scan<'s> {
    tables: &'s LexTables,
    state: ScanState,
    symbols: SymbolTable,
    pif: ProgramInternalForm,
    errors: Vec<ScanError>,
}

impl<'s> Scan<'s> {
    fn new(scanner: &'s Scanner) -> Self {
        Self {
            tables: &scanner.tables,
            state: ScanState::new(),
            symbols: SymbolTable::with_capacity(scanner.capacity),
            pif: ProgramInternalForm::new(),
            errors: Vec::new(),
        }
    }

    fn line(&mut self, number: u32, text: &str) {
        let mut candidates = Vec::new();
        for lexeme in split(text, self.tables) {
            self.state.feed(lexeme, number, &mut candidates);
            for candidate in candidates.drain(..) {
                self.emit(candidate);
            }
        }
        self.state.end_line();
    }

    fn emit(&mut self, candidate: Candidate<'_>) {
        match classify(self.tables, &candidate.text) {
            Ok(None) => {},
            Ok(Some(class)) => {
                let token = if class.takes_attribute() {
                    Token::with_symbol(class, self.symbols.add(&candidate.text))
                } else {
                    Token::fixed(class)
                };
                trace!(%token, text = %candidate.text, "token");
                self.pif.push(token);
                self.state.record(class);
            },
            Err(error) => {
                let error = ScanError::new(error, candidate.span);
                warn!(
                    line = error.line(),
                    offset = error.offset(),
                    code = %error.error.code(),
                    "{}",
                    error.error
                );
                self.errors.push(error);
            },
        }
    }

    fn finish(mut self) -> ScanOutcome {
        let mut trailing = Vec::new();
        self.state.finish(&mut trailing);
        for candidate in trailing {
            self.emit(candidate);
        }

        debug!(
            tokens = self.pif.len(),
            symbols = self.symbols.size(),
            errors = self.errors.len(),
            "scan finished"
        );
        ScanOutcome {
            symbols: self.symbols,
            pif: self.pif,
            errors: self.errors,
        }
    }
}
