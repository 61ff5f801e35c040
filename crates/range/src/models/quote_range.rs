use std::fmt;

use serde::{Deserialize, Serialize};

use super::date_bound::DateBound;
use super::selector::SymbolSelector;
use super::trading_date::{TradingCalendar, TradingDate};
use crate::classifier::SymbolClassifier;

/// A set of time-series records: which symbols, over which dates.
///
/// Describes either a pending request or an extent that has already been
/// fetched. Values are never changed in place; operations that adjust a
/// range build a new one.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct QuoteRange {
    selector: SymbolSelector,
    dates: DateBound,
}

impl QuoteRange {
    pub fn new(selector: SymbolSelector, dates: DateBound) -> Self {
        Self { selector, dates }
    }

    /// The given selector over every available date.
    pub fn all_dates(selector: SymbolSelector) -> Self {
        Self::new(selector, DateBound::all())
    }

    pub fn selector(&self) -> &SymbolSelector {
        &self.selector
    }

    pub fn dates(&self) -> DateBound {
        self.dates
    }

    pub fn first_date(&self) -> Option<TradingDate> {
        self.dates.first()
    }

    pub fn last_date(&self) -> Option<TradingDate> {
        self.dates.last()
    }

    pub fn covers_date(&self, date: TradingDate) -> bool {
        self.dates.contains(date)
    }

    /// Returns true if a record for `symbol` on `date` belongs to this range.
    pub fn covers<C>(&self, symbol: &str, date: TradingDate, classifier: &C) -> bool
    where
        C: SymbolClassifier + ?Sized,
    {
        self.covers_date(date) && self.selector.contains_symbol(symbol, classifier)
    }

    /// Same selector, different dates.
    pub fn with_dates(&self, dates: DateBound) -> Self {
        Self {
            selector: self.selector.clone(),
            dates,
        }
    }

    /// Union of two ranges with the same selector whose dates overlap or
    /// touch under `calendar`.
    ///
    /// Returns None when the selectors differ or a gap of at least one
    /// trading day separates the two ranges.
    pub fn merge(&self, other: &QuoteRange, calendar: TradingCalendar) -> Option<QuoteRange> {
        if self.selector != other.selector {
            return None;
        }

        let (earlier, later) = if starts_no_later(self.first_date(), other.first_date()) {
            (self, other)
        } else {
            (other, self)
        };

        let joined = match (earlier.last_date(), later.first_date()) {
            (None, _) | (_, None) => true,
            (Some(end), Some(start)) => start <= end || calendar.is_contiguous(end, start),
        };
        if !joined {
            return None;
        }

        let last = match (earlier.last_date(), later.last_date()) {
            (Some(a), Some(b)) => Some(a.max(b)),
            _ => None,
        };
        let dates = DateBound::new(earlier.first_date(), last).ok()?;
        Some(self.with_dates(dates))
    }

    /// Human-readable description, e.g. "CBA, WBC on date 2000-01-03".
    pub fn describe(&self) -> String {
        self.to_string()
    }
}

/// Compares two first dates where `None` means "since the beginning".
fn starts_no_later(a: Option<TradingDate>, b: Option<TradingDate>) -> bool {
    match (a, b) {
        (None, _) => true,
        (Some(_), None) => false,
        (Some(a), Some(b)) => a <= b,
    }
}

impl fmt::Display for QuoteRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.selector, self.dates)
    }
}
