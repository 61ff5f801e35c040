//! Range-aware quote cache.
//!
//! The cache remembers which [`QuoteRange`]s it has already retrieved and,
//! for every new request, only asks the source for the part that is still
//! missing.

use std::collections::BTreeMap;
use std::sync::Arc;

use log::{debug, info, warn};
use quoteshelf_range::{
    clip_with_calendar, selector_covers, DateBound, QuoteRange, Symbol, TradingDate,
};
use serde::Serialize;
use tokio::sync::Mutex;

use crate::cache::{CacheConfig, QuoteValidator};
use crate::errors::MarketDataError;
use crate::models::Quote;
use crate::provider::QuoteSource;

/// Snapshot of cache contents.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CacheStats {
    /// Number of distinct serviced ranges held.
    pub ranges: usize,
    /// Number of stored records.
    pub records: usize,
    /// Number of successful source fetches since creation or the last clear.
    pub fetches: usize,
}

#[derive(Default)]
struct CacheState {
    ranges: Vec<QuoteRange>,
    quotes: BTreeMap<(TradingDate, Symbol), Quote>,
    fetches: usize,
}

/// Quote cache in front of a slow [`QuoteSource`].
///
/// All requests go through a single async lock, so a range is fetched at
/// most once even when identical requests arrive concurrently.
pub struct QuoteCache<S: QuoteSource> {
    source: Arc<S>,
    config: CacheConfig,
    validator: QuoteValidator,
    state: Mutex<CacheState>,
}

impl<S: QuoteSource> QuoteCache<S> {
    /// Create a cache with the default configuration.
    pub fn new(source: Arc<S>) -> Self {
        Self::with_config(source, CacheConfig::default())
    }

    /// Create a cache with a custom configuration.
    pub fn with_config(source: Arc<S>, config: CacheConfig) -> Self {
        let validator = QuoteValidator::with_config(config.validator.clone());
        Self {
            source,
            config,
            validator,
            state: Mutex::new(CacheState::default()),
        }
    }

    /// The source behind this cache.
    pub fn source(&self) -> &Arc<S> {
        &self.source
    }

    pub fn config(&self) -> &CacheConfig {
        &self.config
    }

    /// Return every record inside `request`, ordered by date then symbol.
    ///
    /// Only the part of `request` not already serviced is fetched. If the
    /// fetch fails the error is returned and nothing is registered.
    pub async fn get_quotes(&self, request: &QuoteRange) -> Result<Vec<Quote>, MarketDataError> {
        let mut state = self.state.lock().await;

        match self.outstanding(&state.ranges, request) {
            Some(outstanding) => {
                info!(
                    "Fetching {} from {} (requested {})",
                    outstanding,
                    self.source.id(),
                    request
                );
                let fetched = self.source.fetch(&outstanding).await.map_err(|e| {
                    warn!("Fetch of {} from {} failed: {}", outstanding, self.source.id(), e);
                    e
                })?;
                state.fetches += 1;

                let quotes = self.accept(&outstanding, fetched);
                for quote in quotes {
                    state.quotes.insert((quote.date, quote.symbol.clone()), quote);
                }
                self.register(&mut state.ranges, outstanding);
            }
            None => debug!("Cache hit for {}", request),
        }

        let classifier = self.source.as_ref();
        Ok(state
            .quotes
            .values()
            .filter(|q| request.covers(q.symbol.as_str(), q.date, classifier))
            .cloned()
            .collect())
    }

    /// Serviced ranges currently held.
    pub async fn cached_ranges(&self) -> Vec<QuoteRange> {
        self.state.lock().await.ranges.clone()
    }

    pub async fn stats(&self) -> CacheStats {
        let state = self.state.lock().await;
        CacheStats {
            ranges: state.ranges.len(),
            records: state.quotes.len(),
            fetches: state.fetches,
        }
    }

    /// Drop every cached range and record.
    pub async fn clear(&self) {
        let mut state = self.state.lock().await;
        info!(
            "Clearing quote cache ({} ranges, {} records)",
            state.ranges.len(),
            state.quotes.len()
        );
        *state = CacheState::default();
    }

    /// Clip `request` against every serviced range, repeating passes until
    /// nothing changes.
    ///
    /// A range that sits inside the request cannot trim it, but may cover
    /// what is left once its neighbours have trimmed both ends.
    fn outstanding(&self, ranges: &[QuoteRange], request: &QuoteRange) -> Option<QuoteRange> {
        let mut remaining = request.clone();
        loop {
            let before = remaining.clone();
            for cached in ranges {
                match self.clip_one(cached, &remaining) {
                    Some(clipped) => {
                        if clipped != remaining {
                            debug!("Clipped {} to {} against {}", remaining, clipped, cached);
                        }
                        remaining = clipped;
                    }
                    None => {
                        debug!("{} already covered by {}", remaining, cached);
                        return None;
                    }
                }
            }
            if remaining == before {
                return Some(remaining);
            }
        }
    }

    /// Clip `remaining` against a single serviced range.
    ///
    /// `classify` reports any range with an open first date as containing
    /// the other one. That holds for a range open at both ends, but a range
    /// open only at the start, up to `D`, covers nothing after `D`, so it is
    /// handled here instead.
    fn clip_one(&self, cached: &QuoteRange, remaining: &QuoteRange) -> Option<QuoteRange> {
        let classifier = self.source.as_ref();
        let calendar = self.config.calendar;

        let cached_last = match (cached.first_date(), cached.last_date()) {
            (None, Some(last)) => last,
            _ => return clip_with_calendar(cached, remaining, classifier, calendar),
        };
        if !selector_covers(cached.selector(), remaining.selector(), classifier) {
            return Some(remaining.clone());
        }

        if remaining.last_date().is_some_and(|last| last <= cached_last) {
            return None;
        }
        if remaining.first_date().is_some_and(|first| first > cached_last) {
            return Some(remaining.clone());
        }

        let first = calendar.next_day(cached_last)?;
        DateBound::new(Some(first), remaining.last_date())
            .ok()
            .map(|dates| remaining.with_dates(dates))
    }

    /// Keep the fetched records that belong to `range` and pass validation.
    fn accept(&self, range: &QuoteRange, fetched: Vec<Quote>) -> Vec<Quote> {
        let classifier = self.source.as_ref();
        let total = fetched.len();
        let in_range: Vec<Quote> = fetched
            .into_iter()
            .filter(|q| range.covers(q.symbol.as_str(), q.date, classifier))
            .collect();
        if in_range.len() < total {
            debug!(
                "Dropped {} records from {} outside {}",
                total - in_range.len(),
                self.source.id(),
                range
            );
        }

        if !self.config.validate_quotes {
            return in_range;
        }

        let (valid, invalid) = self.validator.validate_batch(in_range);
        for (_, error) in &invalid {
            warn!("Dropping record from {}: {}", self.source.id(), error);
        }
        valid
    }

    /// Add `fetched` to the serviced ranges, folding in every same-selector
    /// range it overlaps or touches.
    fn register(&self, ranges: &mut Vec<QuoteRange>, fetched: QuoteRange) {
        if !self.config.merge_ranges {
            ranges.push(fetched);
            return;
        }

        let calendar = self.config.calendar;
        let mut merged = fetched;
        loop {
            let before = ranges.len();
            ranges.retain(|cached| match merged.merge(cached, calendar) {
                Some(joined) => {
                    merged = joined;
                    false
                }
                None => true,
            });
            if ranges.len() == before {
                break;
            }
        }
        debug!("Registered serviced range {}", merged);
        ranges.push(merged);
    }
}
