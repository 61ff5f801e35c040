use std::fmt;

use serde::{Deserialize, Serialize};

use super::trading_date::TradingDate;
use crate::errors::RangeError;

/// An inclusive date interval where either end may be open.
///
/// `None` on the first side means "from the earliest available data", on the
/// last side "up to the latest available data". Both open means every date
/// for which data exists. When both ends are set, `first <= last`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "RawDateBound")]
pub struct DateBound {
    first: Option<TradingDate>,
    last: Option<TradingDate>,
}

#[derive(Deserialize)]
struct RawDateBound {
    first: Option<TradingDate>,
    last: Option<TradingDate>,
}

impl TryFrom<RawDateBound> for DateBound {
    type Error = RangeError;

    fn try_from(raw: RawDateBound) -> Result<Self, Self::Error> {
        Self::new(raw.first, raw.last)
    }
}

impl DateBound {
    pub fn new(first: Option<TradingDate>, last: Option<TradingDate>) -> Result<Self, RangeError> {
        if let (Some(first), Some(last)) = (first, last) {
            if first > last {
                return Err(RangeError::InvertedBounds {
                    first: first.to_string(),
                    last: last.to_string(),
                });
            }
        }
        Ok(Self { first, last })
    }

    /// Every date for which data exists.
    pub const fn all() -> Self {
        Self {
            first: None,
            last: None,
        }
    }

    /// A single day.
    pub const fn on(date: TradingDate) -> Self {
        Self {
            first: Some(date),
            last: Some(date),
        }
    }

    pub fn between(first: TradingDate, last: TradingDate) -> Result<Self, RangeError> {
        Self::new(Some(first), Some(last))
    }

    /// From `first` up to the latest available data.
    pub const fn starting_from(first: TradingDate) -> Self {
        Self {
            first: Some(first),
            last: None,
        }
    }

    /// From the earliest available data up to `last`.
    pub const fn up_to(last: TradingDate) -> Self {
        Self {
            first: None,
            last: Some(last),
        }
    }

    pub fn first(&self) -> Option<TradingDate> {
        self.first
    }

    pub fn last(&self) -> Option<TradingDate> {
        self.last
    }

    /// Returns true if neither end is set.
    pub fn is_unbounded(&self) -> bool {
        self.first.is_none() && self.last.is_none()
    }

    /// The single day covered, if both ends are the same date.
    pub fn single_date(&self) -> Option<TradingDate> {
        match (self.first, self.last) {
            (Some(first), Some(last)) if first == last => Some(first),
            _ => None,
        }
    }

    /// Returns true if `date` lies within the bound.
    pub fn contains(&self, date: TradingDate) -> bool {
        self.first.map_or(true, |first| date >= first) && self.last.map_or(true, |last| date <= last)
    }

    /// Copy with a new first date; `None` if the result would be empty.
    pub(crate) fn with_first(&self, first: TradingDate) -> Option<Self> {
        Self::new(Some(first), self.last).ok()
    }

    /// Copy with a new last date; `None` if the result would be empty.
    pub(crate) fn with_last(&self, last: TradingDate) -> Option<Self> {
        Self::new(self.first, Some(last)).ok()
    }
}

impl fmt::Display for DateBound {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.first, self.last) {
            (None, None) => write!(f, "for all dates"),
            (Some(first), Some(last)) if first == last => write!(f, "on date {}", first),
            (Some(first), Some(last)) => write!(f, "between {} and {}", first, last),
            (Some(first), None) => write!(f, "from {} onwards", first),
            (None, Some(last)) => write!(f, "up to {}", last),
        }
    }
}
