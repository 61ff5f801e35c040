//! In-memory quote source.
//!
//! Serves a fixed set of records, e.g. loaded once from a JSON export or
//! built by hand in tests. Every fetch is recorded so callers can check what
//! the cache actually asked for.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Mutex, MutexGuard};

use async_trait::async_trait;
use log::{debug, warn};
use quoteshelf_range::{MarketIndexList, QuoteRange, SymbolClassifier};
use serde::Deserialize;

use crate::errors::MarketDataError;
use crate::models::Quote;
use crate::provider::QuoteSource;

const SOURCE_ID: &str = "MEMORY";

/// JSON layout accepted by [`InMemoryQuoteSource::from_json`].
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct QuoteFixture {
    #[serde(default)]
    market_indices: MarketIndexList,
    quotes: Vec<Quote>,
}

/// Quote source backed by a vector of records.
pub struct InMemoryQuoteSource {
    quotes: Vec<Quote>,
    indices: MarketIndexList,
    fetch_count: AtomicUsize,
    fetched: Mutex<Vec<QuoteRange>>,
}

impl InMemoryQuoteSource {
    /// Create a source over `quotes`, classifying `indices` as market indices.
    pub fn new(mut quotes: Vec<Quote>, indices: MarketIndexList) -> Self {
        quotes.sort_by(|a, b| (a.date, &a.symbol).cmp(&(b.date, &b.symbol)));
        Self {
            quotes,
            indices,
            fetch_count: AtomicUsize::new(0),
            fetched: Mutex::new(Vec::new()),
        }
    }

    /// Load a source from JSON of the form
    /// `{"marketIndices": ["XAO"], "quotes": [{"symbol": "CBA", "date": "2000-01-03", "close": 27.5}]}`.
    pub fn from_json(json: &str) -> Result<Self, MarketDataError> {
        let fixture: QuoteFixture = serde_json::from_str(json)?;
        debug!(
            "Loaded {} quotes and {} market indices into memory source",
            fixture.quotes.len(),
            fixture.market_indices.len()
        );
        Ok(Self::new(fixture.quotes, fixture.market_indices))
    }

    /// Number of fetches served so far.
    pub fn fetch_count(&self) -> usize {
        self.fetch_count.load(Ordering::SeqCst)
    }

    /// Every range fetched so far, oldest first.
    pub fn fetched_ranges(&self) -> Vec<QuoteRange> {
        self.lock_fetched().clone()
    }

    /// Lock the fetch log, recovering from poison if necessary.
    ///
    /// The log is informational only, so a poisoned lock is not fatal.
    fn lock_fetched(&self) -> MutexGuard<'_, Vec<QuoteRange>> {
        self.fetched.lock().unwrap_or_else(|poisoned| {
            warn!("Memory source fetch log mutex was poisoned, recovering");
            poisoned.into_inner()
        })
    }
}

impl SymbolClassifier for InMemoryQuoteSource {
    fn is_market_index(&self, symbol: &str) -> bool {
        self.indices.is_market_index(symbol)
    }
}

#[async_trait]
impl QuoteSource for InMemoryQuoteSource {
    fn id(&self) -> &'static str {
        SOURCE_ID
    }

    async fn fetch(&self, range: &QuoteRange) -> Result<Vec<Quote>, MarketDataError> {
        self.fetch_count.fetch_add(1, Ordering::SeqCst);
        self.lock_fetched().push(range.clone());

        let quotes: Vec<Quote> = self
            .quotes
            .iter()
            .filter(|q| range.covers(q.symbol.as_str(), q.date, &self.indices))
            .cloned()
            .collect();

        debug!("Memory source returned {} quotes for {}", quotes.len(), range);
        Ok(quotes)
    }
}
