//! Quote source trait definitions.
//!
//! This module defines the `QuoteSource` trait that every backing store
//! (database, flat files, network service) implements to feed the cache.

use async_trait::async_trait;
use quoteshelf_range::{QuoteRange, SymbolClassifier};

use crate::errors::MarketDataError;
use crate::models::Quote;

/// Trait for slow backing stores of historical quotes.
///
/// A source is also the authority on which of its symbols are market
/// indices, hence the [`SymbolClassifier`] supertrait.
///
/// # Example
///
/// ```ignore
/// use async_trait::async_trait;
/// use quoteshelf_market_data::{MarketDataError, Quote, QuoteRange, QuoteSource, SymbolClassifier};
///
/// struct DatabaseSource {
///     pool: Pool,
/// }
///
/// impl SymbolClassifier for DatabaseSource {
///     fn is_market_index(&self, symbol: &str) -> bool {
///         self.pool.index_symbols().contains(symbol)
///     }
/// }
///
/// #[async_trait]
/// impl QuoteSource for DatabaseSource {
///     fn id(&self) -> &'static str {
///         "DATABASE"
///     }
///
///     async fn fetch(&self, range: &QuoteRange) -> Result<Vec<Quote>, MarketDataError> {
///         // ... query rows for range.selector() and range.dates()
///     }
/// }
/// ```
#[async_trait]
pub trait QuoteSource: SymbolClassifier {
    /// Unique identifier for this source.
    ///
    /// Should be a constant string like "DATABASE" or "HTTPS".
    /// Used for logging and error reporting.
    fn id(&self) -> &'static str;

    /// Fetch every record inside `range`.
    ///
    /// # Arguments
    ///
    /// * `range` - Symbols and dates to fetch; either end of the dates may be open
    ///
    /// # Returns
    ///
    /// The records, ordered by date and then symbol, or a `MarketDataError`
    /// on failure. An empty vector means the range holds no data.
    async fn fetch(&self, range: &QuoteRange) -> Result<Vec<Quote>, MarketDataError>;
}
