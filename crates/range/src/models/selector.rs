use std::fmt;

use serde::{Deserialize, Serialize};

use super::symbols::{Symbol, SymbolSet};
use crate::classifier::SymbolClassifier;
use crate::errors::RangeError;

/// Longest symbol, in characters, that still counts as an ordinary equity.
pub const ORDINARY_SYMBOL_MAX_CHARS: usize = 3;

/// Which symbols a quote range applies to.
///
/// Either one of three semantic categories or an explicit, non-empty list of
/// symbols. Category selectors carry no symbols at all.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "type", content = "symbols", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SymbolSelector {
    /// Every symbol, indices included.
    AllSymbols,
    /// Ordinary equities: not a market index and at most three characters long.
    AllOrdinaries,
    /// Market indices, as decided by the classifier.
    MarketIndices,
    /// An explicit list of symbols.
    GivenSymbols(SymbolSet),
}

impl SymbolSelector {
    /// Builds an explicit selector from symbol strings.
    pub fn given<I, S>(symbols: I) -> Result<Self, RangeError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        SymbolSet::new(symbols).map(Self::GivenSymbols)
    }

    /// Explicit selector for a single symbol.
    pub fn single(symbol: Symbol) -> Self {
        Self::GivenSymbols(SymbolSet::single(symbol))
    }

    /// The explicit symbols, if this is a `GivenSymbols` selector.
    pub fn symbols(&self) -> Option<&SymbolSet> {
        match self {
            Self::GivenSymbols(set) => Some(set),
            _ => None,
        }
    }

    /// Returns true if `symbol` falls under this selector.
    pub fn contains_symbol<C>(&self, symbol: &str, classifier: &C) -> bool
    where
        C: SymbolClassifier + ?Sized,
    {
        match self {
            Self::AllSymbols => true,
            Self::GivenSymbols(set) => set.contains(symbol),
            Self::AllOrdinaries => is_ordinary(symbol, classifier),
            Self::MarketIndices => classifier.is_market_index(symbol),
        }
    }

    /// Returns true if every candidate falls under this selector.
    ///
    /// Stops at the first candidate that does not.
    pub fn contains_all_symbols<C>(&self, candidates: &SymbolSet, classifier: &C) -> bool
    where
        C: SymbolClassifier + ?Sized,
    {
        match self {
            Self::AllSymbols => true,
            Self::GivenSymbols(set) => candidates.iter().all(|c| set.contains(c.as_str())),
            Self::AllOrdinaries => candidates
                .iter()
                .all(|c| is_ordinary(c.as_str(), classifier)),
            Self::MarketIndices => candidates
                .iter()
                .all(|c| classifier.is_market_index(c.as_str())),
        }
    }

    /// Human-readable description, e.g. "CBA, WBC" or "All Ordinaries".
    pub fn describe(&self) -> String {
        self.to_string()
    }
}

fn is_ordinary<C>(symbol: &str, classifier: &C) -> bool
where
    C: SymbolClassifier + ?Sized,
{
    !classifier.is_market_index(symbol) && symbol.chars().count() <= ORDINARY_SYMBOL_MAX_CHARS
}

impl fmt::Display for SymbolSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AllSymbols => write!(f, "All Symbols"),
            Self::AllOrdinaries => write!(f, "All Ordinaries"),
            Self::MarketIndices => write!(f, "Market Indices"),
            Self::GivenSymbols(set) => {
                let names: Vec<String> = set.iter().map(|s| s.as_str().to_uppercase()).collect();
                write!(f, "{}", names.join(", "))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classifier::{MarketIndexList, NoMarketIndices};

    fn indices() -> MarketIndexList {
        MarketIndexList::new(["XAO", "XJO"]).unwrap()
    }

    fn set(symbols: &[&str]) -> SymbolSet {
        SymbolSet::new(symbols).unwrap()
    }

    #[test]
    fn test_all_symbols_contains_everything() {
        let selector = SymbolSelector::AllSymbols;
        assert!(selector.contains_symbol("CBA", &indices()));
        assert!(selector.contains_symbol("XAO", &indices()));
        assert!(selector.contains_symbol("LONGNAME", &indices()));
    }

    #[test]
    fn test_given_symbols_membership() {
        let selector = SymbolSelector::given(["CBA"]).unwrap();
        assert!(selector.contains_symbol("CBA", &NoMarketIndices));
        assert!(!selector.contains_symbol("WBC", &NoMarketIndices));
    }

    #[test]
    fn test_all_ordinaries_excludes_indices_and_long_symbols() {
        let selector = SymbolSelector::AllOrdinaries;
        assert!(selector.contains_symbol("CBA", &indices()));
        assert!(selector.contains_symbol("AB", &indices()));
        assert!(!selector.contains_symbol("XAO", &indices()));
        assert!(!selector.contains_symbol("CBAPA", &indices()));
    }

    #[test]
    fn test_market_indices_follow_classifier() {
        let selector = SymbolSelector::MarketIndices;
        assert!(selector.contains_symbol("XAO", &indices()));
        assert!(!selector.contains_symbol("CBA", &indices()));
        assert!(!selector.contains_symbol("XAO", &NoMarketIndices));
    }

    #[test]
    fn test_contains_all_symbols_for_given() {
        let selector = SymbolSelector::given(["CBA", "WBC", "ANZ"]).unwrap();
        assert!(selector.contains_all_symbols(&set(&["CBA", "ANZ"]), &NoMarketIndices));
        assert!(!selector.contains_all_symbols(&set(&["CBA", "NAB"]), &NoMarketIndices));
    }

    #[test]
    fn test_contains_all_symbols_for_categories() {
        let classifier = indices();
        assert!(SymbolSelector::AllSymbols.contains_all_symbols(&set(&["XAO", "CBAPA"]), &classifier));
        assert!(SymbolSelector::AllOrdinaries.contains_all_symbols(&set(&["CBA", "WBC"]), &classifier));
        assert!(!SymbolSelector::AllOrdinaries.contains_all_symbols(&set(&["CBA", "XAO"]), &classifier));
        assert!(SymbolSelector::MarketIndices.contains_all_symbols(&set(&["XAO", "XJO"]), &classifier));
        assert!(!SymbolSelector::MarketIndices.contains_all_symbols(&set(&["XAO", "CBA"]), &classifier));
    }

    #[test]
    fn test_given_requires_symbols() {
        let empty: Vec<String> = Vec::new();
        assert_eq!(SymbolSelector::given(empty), Err(RangeError::EmptySymbolSet));
        assert!(SymbolSelector::AllSymbols.symbols().is_none());
        assert_eq!(
            SymbolSelector::given(["CBA"]).unwrap().symbols().map(SymbolSet::len),
            Some(1)
        );
    }

    #[test]
    fn test_describe() {
        assert_eq!(SymbolSelector::AllSymbols.describe(), "All Symbols");
        assert_eq!(SymbolSelector::AllOrdinaries.describe(), "All Ordinaries");
        assert_eq!(SymbolSelector::MarketIndices.describe(), "Market Indices");
        assert_eq!(
            SymbolSelector::given(["cba", "wbc"]).unwrap().describe(),
            "CBA, WBC"
        );
    }

    #[test]
    fn test_serde_shape() {
        let selector = SymbolSelector::given(["CBA"]).unwrap();
        let json = serde_json::to_string(&selector).unwrap();
        assert_eq!(json, r#"{"type":"GIVEN_SYMBOLS","symbols":["CBA"]}"#);

        let parsed: SymbolSelector = serde_json::from_str(r#"{"type":"ALL_ORDINARIES"}"#).unwrap();
        assert_eq!(parsed, SymbolSelector::AllOrdinaries);

        assert!(serde_json::from_str::<SymbolSelector>(r#"{"type":"GIVEN_SYMBOLS","symbols":[]}"#).is_err());
    }
}
