use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::errors::RangeError;

// =============================================================================
// Symbol
// =============================================================================

/// A stock or index symbol, e.g. "CBA" or "XAO".
///
/// Cheap to clone. Comparison is exact; callers that need case folding must
/// normalize before building the symbol.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Symbol(Arc<str>);

impl Symbol {
    /// Builds a symbol, rejecting empty strings and embedded whitespace.
    pub fn new(symbol: &str) -> Result<Self, RangeError> {
        if symbol.is_empty() || symbol.chars().any(char::is_whitespace) {
            return Err(RangeError::InvalidSymbol(symbol.to_string()));
        }
        Ok(Self(Arc::from(symbol)))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Number of characters in the symbol text.
    pub fn char_count(&self) -> usize {
        self.0.chars().count()
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for Symbol {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for Symbol {
    type Error = RangeError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::new(&s)
    }
}

impl TryFrom<&str> for Symbol {
    type Error = RangeError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        Self::new(s)
    }
}

impl From<Symbol> for String {
    fn from(symbol: Symbol) -> Self {
        symbol.0.to_string()
    }
}

// =============================================================================
// SymbolSet
// =============================================================================

/// A non-empty, duplicate-free list of symbols that keeps insertion order.
///
/// Linear lookup; explicit symbol lists are small.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "Vec<String>", into = "Vec<String>")]
pub struct SymbolSet {
    symbols: Vec<Symbol>,
}

impl SymbolSet {
    /// Builds a set from symbol strings. Duplicates after the first
    /// occurrence are dropped.
    pub fn new<I, S>(symbols: I) -> Result<Self, RangeError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut set: Vec<Symbol> = Vec::new();
        for symbol in symbols {
            let symbol = Symbol::new(symbol.as_ref())?;
            if !set.contains(&symbol) {
                set.push(symbol);
            }
        }

        if set.is_empty() {
            return Err(RangeError::EmptySymbolSet);
        }
        Ok(Self { symbols: set })
    }

    /// A set holding exactly one symbol.
    pub fn single(symbol: Symbol) -> Self {
        Self {
            symbols: vec![symbol],
        }
    }

    pub fn contains(&self, symbol: &str) -> bool {
        self.symbols.iter().any(|s| s.as_str() == symbol)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Symbol> {
        self.symbols.iter()
    }

    pub fn as_slice(&self) -> &[Symbol] {
        &self.symbols
    }

    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    /// Always false; kept for API symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }
}

impl<'a> IntoIterator for &'a SymbolSet {
    type Item = &'a Symbol;
    type IntoIter = std::slice::Iter<'a, Symbol>;

    fn into_iter(self) -> Self::IntoIter {
        self.symbols.iter()
    }
}

impl TryFrom<Vec<String>> for SymbolSet {
    type Error = RangeError;

    fn try_from(symbols: Vec<String>) -> Result<Self, Self::Error> {
        Self::new(symbols)
    }
}

impl From<SymbolSet> for Vec<String> {
    fn from(set: SymbolSet) -> Self {
        set.symbols.into_iter().map(String::from).collect()
    }
}
