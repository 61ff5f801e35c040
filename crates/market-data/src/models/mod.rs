//! Market data models
//!
//! - `quote` - End-of-day quote records (Quote)
//!
//! Range types (QuoteRange, SymbolSelector, DateBound, TradingDate) live in
//! `quoteshelf-range` and are re-exported from the crate root.

mod quote;

pub use quote::Quote;
