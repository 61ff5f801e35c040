//! Quoteshelf Market Data Crate
//!
//! This crate keeps an in-memory cache of end-of-day quotes in front of a
//! slow quote source (database, flat files, network service).
//!
//! # Overview
//!
//! The cache remembers which ranges it has already retrieved and, for each
//! new request, fetches only what is still missing:
//!
//! ```text
//! +------------------+
//! |  QuoteRange      |  (requested symbols x dates)
//! +------------------+
//!          |
//!          v
//! +------------------+     +------------------+
//! |  QuoteCache      | --> |  clip against    |  (quoteshelf-range)
//! +------------------+     |  cached ranges   |
//!          |               +------------------+
//!          v
//! +------------------+
//! |  QuoteSource     |  (outstanding part only)
//! +------------------+
//!          |
//!          v
//! +------------------+
//! |  QuoteValidator  |  (drop bad records)
//! +------------------+
//!          |
//!          v
//! +------------------+
//! |  Quote           |  (answer, ordered by date then symbol)
//! +------------------+
//! ```
//!
//! # Core Types
//!
//! - [`QuoteCache`] - Range-aware cache over a [`QuoteSource`]
//! - [`QuoteSource`] - Async trait implemented by backing stores
//! - [`InMemoryQuoteSource`] - Source over a fixed set of records
//! - [`Quote`] - End-of-day OHLCV record
//! - [`CacheConfig`] - Calendar, merging and validation settings
//!
//! Range types are re-exported from `quoteshelf-range`.

pub mod cache;
pub mod errors;
pub mod models;
pub mod provider;

pub use cache::{
    CacheConfig, CacheStats, QuoteCache, QuoteValidator, ValidationIssue, ValidationSeverity,
    ValidatorConfig,
};
pub use errors::MarketDataError;
pub use models::Quote;
pub use provider::{InMemoryQuoteSource, QuoteSource};

pub use quoteshelf_range::{
    clip, clip_with_calendar, DateBound, MarketIndexList, NoMarketIndices, QuoteRange, Symbol,
    SymbolClassifier, SymbolSelector, SymbolSet, TradingCalendar, TradingDate,
};
