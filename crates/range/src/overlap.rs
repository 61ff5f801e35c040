//! Date overlap classification between two quote ranges.
//!
//! Only the date bounds take part; symbol selectors are ignored here and
//! checked separately by [`clip`](crate::clip).
//!
//! An open last date is treated as later than any concrete date. An open
//! first date short-circuits the comparison: a range with no first date
//! contains the other one, even when the other range is open too.

use serde::{Deserialize, Serialize};

use crate::models::{DateBound, QuoteRange, TradingDate};

/// How the dates of range `a` relate to the dates of range `b`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OverlapRelation {
    /// The two ranges share no date.
    NoOverlap,
    /// `a` covers every date of `b`.
    Contains,
    /// `b` covers every date of `a`, with room on both sides.
    Contained,
    /// The ranges share some dates and each has dates the other lacks.
    PartialOverlap,
}

/// Classifies how the dates of `a` relate to the dates of `b`.
pub fn classify(a: &QuoteRange, b: &QuoteRange) -> OverlapRelation {
    classify_dates(a.dates(), b.dates())
}

/// Same as [`classify`], on bare date bounds.
///
/// Ties resolve toward `Contains` or `Contained`, never `PartialOverlap`.
pub fn classify_dates(a: DateBound, b: DateBound) -> OverlapRelation {
    let a_first = match a.first() {
        None => return OverlapRelation::Contains,
        Some(first) => first,
    };
    let b_first = match b.first() {
        None => return OverlapRelation::Contained,
        Some(first) => first,
    };

    let a_after_b = b.last().is_some_and(|b_last| a_first > b_last);
    let a_before_b = a.last().is_some_and(|a_last| a_last < b_first);
    if a_after_b || a_before_b {
        return OverlapRelation::NoOverlap;
    }

    if a_first <= b_first && ends_no_earlier(a.last(), b.last()) {
        OverlapRelation::Contains
    } else if a_first > b_first && !ends_no_earlier(a.last(), b.last()) {
        OverlapRelation::Contained
    } else {
        OverlapRelation::PartialOverlap
    }
}

/// Compares two last dates where `None` means "up to the latest data".
pub(crate) fn ends_no_earlier(a: Option<TradingDate>, b: Option<TradingDate>) -> bool {
    match (a, b) {
        (None, _) => true,
        (Some(_), None) => false,
        (Some(a), Some(b)) => a >= b,
    }
}
