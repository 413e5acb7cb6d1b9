//! Symbol table - Interning of identifier and constant lexemes.
//!
//! The table maps every distinct lexeme to a [`SymbolRef`], a `(bucket, slot)`
//! pair. The bucket is chosen by summing the character codes of the lexeme
//! modulo the fixed capacity; the slot is the entry's position inside that
//! bucket's insertion-ordered chain.
//!
//! # Examples
//!
//! ```
//! use pifc_util::symbol::{SymbolRef, SymbolTable};
//!
//! let mut table = SymbolTable::new();
//! let a = table.add("a");
//! assert_eq!(a, SymbolRef::new(47, 0));
//! assert_eq!(table.add("a"), a);
//! assert_eq!(table.size(), 1);
//! assert_eq!(table.get(47, 0).unwrap(), "a");
//! ```

use std::fmt;

use indexmap::IndexSet;
use rustc_hash::FxBuildHasher;
use static_assertions::{assert_eq_size, assert_impl_all};

use crate::error::{SymbolError, SymbolResult};


/// Number of buckets used by [`SymbolTable::new`]
pub const DEFAULT_CAPACITY: usize = 50;

/// Largest bucket count a table will allocate
///
/// Buckets are allocated up front, so the count is bounded.
pub const MAX_CAPACITY: usize = 1_000_000;

/// A stable reference into a [`SymbolTable`]
///
/// References are never invalidated: the bucket count is fixed and chains
/// only grow at the end.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SymbolRef {
    bucket: u32,
    slot: u32,
}

assert_eq_size!(SymbolRef, u64);

impl SymbolRef {
    /// Create a reference from raw indices
    #[inline]
    pub const fn new(bucket: u32, slot: u32) -> Self {
        Self { bucket, slot }
    }

    /// Index of the bucket holding the entry
    #[inline]
    pub const fn bucket(self) -> usize {
        self.bucket as usize
    }

    /// Position of the entry inside its bucket
    #[inline]
    pub const fn slot(self) -> usize {
        self.slot as usize
    }
}

impl fmt::Display for SymbolRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.bucket, self.slot)
    }
}

/// Fixed-capacity, bucket-chained symbol table
///
/// Capacity never changes after construction. Lookup goes through a hash
/// index over all entries, so the cost of [`SymbolTable::add`] does not depend
/// on how long a bucket chain has grown.
#[derive(Clone, Debug)]
pub struct SymbolTable {
    /// Entry ids per bucket, in insertion order
    buckets: Vec<Vec<usize>>,

    /// Lexeme text by entry id
    lexemes: IndexSet<Box<str>, FxBuildHasher>,

    /// Reference of each entry, parallel to `lexemes`
    refs: Vec<SymbolRef>,
}

assert_impl_all!(SymbolTable: Send, Sync, Clone);

impl SymbolTable {
    /// Create a table with [`DEFAULT_CAPACITY`] buckets
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    /// Create a table with a fixed number of buckets
    ///
    /// The capacity is clamped to `1..=MAX_CAPACITY`.
    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = capacity.clamp(1, MAX_CAPACITY);
        Self {
            buckets: vec![Vec::new(); capacity],
            lexemes: IndexSet::with_hasher(FxBuildHasher),
            refs: Vec::new(),
        }
    }

    /// Number of buckets
    #[inline]
    pub fn capacity(&self) -> usize {
        self.buckets.len()
    }

    /// Total number of entries across all buckets
    #[inline]
    pub fn size(&self) -> usize {
        self.refs.len()
    }

    /// Whether no lexeme has been added yet
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.refs.is_empty()
    }

    /// Bucket index for `lexeme`: sum of its character codes modulo capacity
    pub fn bucket_of(&self, lexeme: &str) -> usize {
        let sum = lexeme
            .chars()
            .fold(0usize, |acc, c| acc.wrapping_add(c as usize));
        sum % self.buckets.len()
    }

    /// Add a lexeme, returning its reference
    ///
    /// Returns the existing reference if the exact text is already present;
    /// otherwise appends it to its bucket.
    pub fn add(&mut self, lexeme: &str) -> SymbolRef {
        if let Some(existing) = self.lookup(lexeme) {
            return existing;
        }

        let bucket = self.bucket_of(lexeme);
        let chain = &mut self.buckets[bucket];
        let reference = SymbolRef::new(bucket as u32, chain.len() as u32);

        let (id, _) = self.lexemes.insert_full(lexeme.into());
        chain.push(id);
        self.refs.push(reference);
        reference
    }

    /// Reference of `lexeme`, if present
    pub fn lookup(&self, lexeme: &str) -> Option<SymbolRef> {
        self.lexemes
            .get_index_of(lexeme)
            .and_then(|id| self.refs.get(id).copied())
    }

    /// Whether `lexeme` is present
    pub fn contains(&self, lexeme: &str) -> bool {
        self.lexemes.contains(lexeme)
    }

    /// Text stored at `(bucket, slot)`
    ///
    /// # Errors
    ///
    /// [`SymbolError::OutOfRange`] if either index does not name an entry.
    pub fn get(&self, bucket: usize, slot: usize) -> SymbolResult<&str> {
        self.buckets
            .get(bucket)
            .and_then(|chain| chain.get(slot))
            .and_then(|&id| self.lexemes.get_index(id))
            .map(|text| &**text)
            .ok_or(SymbolError::OutOfRange { bucket, slot })
    }

    /// Text behind a reference
    pub fn resolve(&self, reference: SymbolRef) -> SymbolResult<&str> {
        self.get(reference.bucket(), reference.slot())
    }

    /// Lexemes of one bucket, in insertion order
    pub fn bucket(&self, bucket: usize) -> impl Iterator<Item = &str> + '_ {
        self.buckets
            .get(bucket)
            .into_iter()
            .flatten()
            .filter_map(|&id| self.lexemes.get_index(id))
            .map(|text| &**text)
    }

    /// Every bucket in index order, each yielding its lexemes in insertion
    /// order
    pub fn buckets(&self) -> impl Iterator<Item = impl Iterator<Item = &str> + '_> + '_ {
        (0..self.capacity()).map(move |bucket| self.bucket(bucket))
    }

    /// All entries in global insertion order
    pub fn entries(&self) -> impl Iterator<Item = (SymbolRef, &str)> + '_ {
        self.refs
            .iter()
            .copied()
            .zip(self.lexemes.iter().map(|text| &**text))
    }
}

impl Default for SymbolTable {
    fn default() -> Self {
        Self::new()
    }
}

/// One line per bucket, each rendered as `[a,b,c]`
impl fmt::Display for SymbolTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, bucket) in self.buckets().enumerate() {
            if index > 0 {
                writeln!(f)?;
            }
            f.write_str("[")?;
            for (i, lexeme) in bucket.enumerate() {
                if i > 0 {
                    f.write_str(",")?;
                }
                f.write_str(lexeme)?;
            }
            f.write_str("]")?;
        }
        Ok(())
    }
}
