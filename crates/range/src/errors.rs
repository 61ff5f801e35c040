//! Error types for building quote ranges.
//!
//! The range algebra itself cannot fail: every operation is a pure function
//! over values that were validated when they were built. Only the
//! constructors and parsers that accept caller input return [`RangeError`].

use thiserror::Error;

/// Errors raised while validating the parts of a quote range.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RangeError {
    /// An explicit symbol selector was built from no symbols at all.
    #[error("Symbol set must contain at least one symbol")]
    EmptySymbolSet,

    /// A symbol string was empty or contained whitespace.
    #[error("Invalid symbol: '{0}'")]
    InvalidSymbol(String),

    /// Both date bounds were given but the first one lies after the last one.
    #[error("Inverted date bounds: {first} is after {last}")]
    InvertedBounds {
        /// Earliest date as supplied
        first: String,
        /// Latest date as supplied
        last: String,
    },

    /// A date string could not be parsed.
    #[error("Invalid date: {0}")]
    InvalidDate(String),
}
