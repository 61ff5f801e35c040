//! Quoteshelf Range Crate
//!
//! Describes what quote data has already been retrieved and works out the
//! smallest additional range that has to be fetched when a new, possibly
//! overlapping request arrives.
//!
//! # Overview
//!
//! A [`QuoteRange`] crosses a [`SymbolSelector`] (explicit symbols, or one of
//! the "all symbols", "all ordinaries" and "market indices" categories) with a
//! [`DateBound`] (inclusive dates, either end optionally open).
//!
//! ```text
//! +------------------+     +------------------+
//! |  cached range    |     | requested range  |
//! +------------------+     +------------------+
//!          \                       /
//!           v                     v
//!          +-----------------------+
//!          |  classify (dates)     |  NoOverlap / Contains / Contained / Partial
//!          +-----------------------+
//!                     |
//!                     v
//!          +-----------------------+
//!          |  selector_covers      |  symbol compatibility
//!          +-----------------------+
//!                     |
//!                     v
//!          +-----------------------+
//!          |  clip                 |  None, request unchanged, or trimmed
//!          +-----------------------+
//! ```
//!
//! Everything here is a pure function over immutable values: no I/O, no
//! interior mutability, safe to share across threads. Whether a symbol is a
//! market index is answered by an injected [`SymbolClassifier`].
//!
//! # Example
//!
//! ```
//! use quoteshelf_range::{clip, DateBound, NoMarketIndices, QuoteRange, SymbolSelector, TradingDate};
//!
//! let day = |y, m, d| TradingDate::from_ymd(y, m, d).unwrap();
//! let cba = SymbolSelector::given(["CBA"]).unwrap();
//!
//! let cached = QuoteRange::new(cba.clone(), DateBound::between(day(2000, 1, 1), day(2000, 12, 1)).unwrap());
//! let requested = QuoteRange::new(cba.clone(), DateBound::between(day(1999, 1, 1), day(2000, 6, 6)).unwrap());
//!
//! let outstanding = clip(&cached, &requested, &NoMarketIndices).unwrap();
//! assert_eq!(outstanding.describe(), "CBA between 1999-01-01 and 1999-12-31");
//! ```

pub mod classifier;
pub mod clip;
pub mod errors;
pub mod models;
pub mod overlap;

pub use classifier::{MarketIndexList, NoMarketIndices, SymbolClassifier};
pub use clip::{clip, clip_with_calendar, selector_covers};
pub use errors::RangeError;
pub use models::{
    DateBound, QuoteRange, Symbol, SymbolSelector, SymbolSet, TradingCalendar, TradingDate,
    ORDINARY_SYMBOL_MAX_CHARS,
};
pub use overlap::{classify, classify_dates, OverlapRelation};
