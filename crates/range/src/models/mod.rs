//! Quote range models
//!
//! - `trading_date` - Day-resolution dates and the calendars used to step them
//! - `symbols` - Validated symbols and non-empty symbol sets
//! - `selector` - Which symbols a range applies to (SymbolSelector)
//! - `date_bound` - Optionally open inclusive date intervals (DateBound)
//! - `quote_range` - Selector crossed with a date bound (QuoteRange)

mod date_bound;
mod quote_range;
mod selector;
mod symbols;
mod trading_date;

pub use date_bound::DateBound;
pub use quote_range::QuoteRange;
pub use selector::{SymbolSelector, ORDINARY_SYMBOL_MAX_CHARS};
pub use symbols::{Symbol, SymbolSet};
pub use trading_date::{TradingCalendar, TradingDate};
