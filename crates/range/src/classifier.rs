//! Symbol classification.
//!
//! The `ALL_ORDINARIES` and `MARKET_INDICES` selectors need to know whether a
//! symbol is a market index. That knowledge belongs to whoever owns the
//! symbol universe (usually the quote source), so it is injected through the
//! [`SymbolClassifier`] trait rather than looked up globally.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::errors::RangeError;
use crate::models::Symbol;

/// Classifies symbols as market indices or ordinary instruments.
///
/// Implementations must be stable: the same symbol must always classify the
/// same way, otherwise containment and clipping stop being consistent.
pub trait SymbolClassifier: Send + Sync {
    /// Returns true if `symbol` is an aggregate market index.
    fn is_market_index(&self, symbol: &str) -> bool;
}

impl<T: SymbolClassifier + ?Sized> SymbolClassifier for &T {
    fn is_market_index(&self, symbol: &str) -> bool {
        (**self).is_market_index(symbol)
    }
}

impl<T: SymbolClassifier + ?Sized> SymbolClassifier for Arc<T> {
    fn is_market_index(&self, symbol: &str) -> bool {
        (**self).is_market_index(symbol)
    }
}

/// Classifier for universes without any market indices.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoMarketIndices;

impl SymbolClassifier for NoMarketIndices {
    fn is_market_index(&self, _symbol: &str) -> bool {
        false
    }
}

/// Classifier backed by an explicit list of index symbols.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MarketIndexList {
    indices: Vec<Symbol>,
}

impl MarketIndexList {
    pub fn new<I, S>(indices: I) -> Result<Self, RangeError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let indices = indices
            .into_iter()
            .map(|s| Symbol::new(s.as_ref()))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { indices })
    }

    pub fn len(&self) -> usize {
        self.indices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }
}

impl SymbolClassifier for MarketIndexList {
    fn is_market_index(&self, symbol: &str) -> bool {
        self.indices.iter().any(|index| index.as_str() == symbol)
    }
}
