use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

use crate::errors::RangeError;

// =============================================================================
// TradingDate
// =============================================================================

/// A calendar date with day resolution.
///
/// Wraps `NaiveDate`; ordering is chronological. Formats as "YYYY-MM-DD".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, PartialOrd, Ord)]
pub struct TradingDate(pub NaiveDate);

impl TradingDate {
    pub fn new(date: NaiveDate) -> Self {
        Self(date)
    }

    /// Creates a date from year, month, day components.
    /// Returns None if the date is invalid.
    pub fn from_ymd(year: i32, month: u32, day: u32) -> Option<Self> {
        NaiveDate::from_ymd_opt(year, month, day).map(Self)
    }

    /// Returns the underlying NaiveDate.
    pub fn date(&self) -> NaiveDate {
        self.0
    }

    /// Parses a date from "YYYY-MM-DD" format.
    pub fn parse(s: &str) -> Result<Self, RangeError> {
        NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d")
            .map(Self)
            .map_err(|e| RangeError::InvalidDate(format!("'{}': {}", s, e)))
    }

    pub fn is_weekend(&self) -> bool {
        matches!(self.0.weekday(), Weekday::Sat | Weekday::Sun)
    }
}

impl fmt::Display for TradingDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%Y-%m-%d"))
    }
}

impl FromStr for TradingDate {
    type Err = RangeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl From<NaiveDate> for TradingDate {
    fn from(date: NaiveDate) -> Self {
        Self(date)
    }
}

impl From<TradingDate> for NaiveDate {
    fn from(date: TradingDate) -> Self {
        date.0
    }
}

// =============================================================================
// TradingCalendar
// =============================================================================

/// Decides which calendar days count as trading days when a range bound is
/// moved forward or backward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TradingCalendar {
    /// Every calendar day is a step.
    #[default]
    Continuous,
    /// Monday to Friday; weekends are skipped.
    Weekdays,
}

impl TradingCalendar {
    pub fn is_trading_day(&self, date: TradingDate) -> bool {
        match self {
            Self::Continuous => true,
            Self::Weekdays => !date.is_weekend(),
        }
    }

    /// The first trading day strictly after `date`.
    ///
    /// Returns None when the end of the representable calendar is reached.
    pub fn next_day(&self, date: TradingDate) -> Option<TradingDate> {
        let mut current = date.0;
        loop {
            current = current.succ_opt()?;
            if self.is_trading_day(TradingDate(current)) {
                return Some(TradingDate(current));
            }
        }
    }

    /// The last trading day strictly before `date`.
    ///
    /// Returns None when the start of the representable calendar is reached.
    pub fn previous_day(&self, date: TradingDate) -> Option<TradingDate> {
        let mut current = date.0;
        loop {
            current = current.pred_opt()?;
            if self.is_trading_day(TradingDate(current)) {
                return Some(TradingDate(current));
            }
        }
    }

    /// Returns true if no trading day lies strictly between `earlier` and `later`.
    pub fn is_contiguous(&self, earlier: TradingDate, later: TradingDate) -> bool {
        if later <= earlier {
            return true;
        }
        self.next_day(earlier).map_or(true, |next| later <= next)
    }
}
