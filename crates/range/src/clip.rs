//! Clipping a requested range against a range that is already cached.
//!
//! [`clip`] answers "what part of `requested` still has to be fetched, given
//! that everything in `cached` is already in memory?". The answer is either
//! nothing (`None`), the request unchanged, or the request with one date
//! bound pulled in past the cached edge.
//!
//! Reuse requires two things: the dates must overlap in a usable way (see
//! [`classify`]) and the cached selector must be guaranteed to cover every
//! symbol the request could return (see [`selector_covers`]).

use crate::classifier::SymbolClassifier;
use crate::models::{QuoteRange, SymbolSelector, TradingCalendar};
use crate::overlap::{classify, ends_no_earlier, OverlapRelation};

/// Clips `requested` against `cached`, stepping bounds by calendar day.
///
/// Returns `None` when `cached` already covers the whole request.
pub fn clip<C>(cached: &QuoteRange, requested: &QuoteRange, classifier: &C) -> Option<QuoteRange>
where
    C: SymbolClassifier + ?Sized,
{
    clip_with_calendar(cached, requested, classifier, TradingCalendar::default())
}

/// Clips `requested` against `cached`, stepping trimmed bounds with `calendar`.
///
/// When trimming leaves no trading day (possible with
/// [`TradingCalendar::Weekdays`] when only a weekend remains), the result is
/// `None`: there is nothing left to fetch.
pub fn clip_with_calendar<C>(
    cached: &QuoteRange,
    requested: &QuoteRange,
    classifier: &C,
    calendar: TradingCalendar,
) -> Option<QuoteRange>
where
    C: SymbolClassifier + ?Sized,
{
    let relation = classify(cached, requested);
    if matches!(relation, OverlapRelation::NoOverlap | OverlapRelation::Contained) {
        return Some(requested.clone());
    }

    if !selector_covers(cached.selector(), requested.selector(), classifier) {
        return Some(requested.clone());
    }

    match relation {
        OverlapRelation::Contains => None,
        _ => trim_partial(cached, requested, calendar),
    }
}

/// Returns true if every symbol `requested` could return is guaranteed to be
/// covered by `cached`.
///
/// Deliberately conservative: pairings that might cover but cannot be proven
/// to (for example `MarketIndices` against explicit symbols) return false.
pub fn selector_covers<C>(cached: &SymbolSelector, requested: &SymbolSelector, classifier: &C) -> bool
where
    C: SymbolClassifier + ?Sized,
{
    use SymbolSelector::*;

    match (cached, requested) {
        (AllSymbols, _) => true,
        (AllOrdinaries, AllOrdinaries) | (MarketIndices, MarketIndices) => true,
        (AllOrdinaries, GivenSymbols(symbols)) | (GivenSymbols(_), GivenSymbols(symbols)) => {
            cached.contains_all_symbols(symbols, classifier)
        }
        _ => false,
    }
}

/// Trims the side of `requested` that `cached` already covers.
fn trim_partial(
    cached: &QuoteRange,
    requested: &QuoteRange,
    calendar: TradingCalendar,
) -> Option<QuoteRange> {
    let (cached_first, requested_first) = match (cached.first_date(), requested.first_date()) {
        (Some(c), Some(r)) => (c, r),
        _ => unreachable!(
            "partial overlap with an open first date: {} against {}",
            cached, requested
        ),
    };

    // cached overlaps the earlier part of the request: move the first date up
    if cached_first <= requested_first && ends_no_earlier(requested.last_date(), cached.last_date()) {
        let cached_last = cached
            .last_date()
            .unwrap_or_else(|| unreachable!("open-ended {} cannot partially overlap", cached));
        let first = calendar.next_day(cached_last)?;
        return requested.dates().with_first(first).map(|d| requested.with_dates(d));
    }

    // cached overlaps the later part of the request: move the last date back
    if cached_first >= requested_first && ends_no_earlier(cached.last_date(), requested.last_date()) {
        let last = calendar.previous_day(cached_first)?;
        return requested.dates().with_last(last).map(|d| requested.with_dates(d));
    }

    unreachable!(
        "partial overlap matches neither edge: {} against {}",
        cached, requested
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classifier::{MarketIndexList, NoMarketIndices};
    use crate::models::{DateBound, TradingDate};

    fn day(year: i32, month: u32, day: u32) -> TradingDate {
        TradingDate::from_ymd(year, month, day).unwrap()
    }

    fn range(selector: SymbolSelector, first: TradingDate, last: TradingDate) -> QuoteRange {
        QuoteRange::new(selector, DateBound::between(first, last).unwrap())
    }

    fn given(symbols: &[&str]) -> SymbolSelector {
        SymbolSelector::given(symbols).unwrap()
    }

    fn indices() -> MarketIndexList {
        MarketIndexList::new(["XAO", "XJO"]).unwrap()
    }

    #[test]
    fn test_right_overlap_trims_last_date() {
        let cached = range(given(&["CBA"]), day(2000, 1, 1), day(2000, 12, 1));
        let requested = range(given(&["CBA"]), day(1999, 1, 1), day(2000, 6, 6));

        let clipped = clip(&cached, &requested, &NoMarketIndices);
        assert_eq!(
            clipped,
            Some(range(given(&["CBA"]), day(1999, 1, 1), day(1999, 12, 31)))
        );
    }

    #[test]
    fn test_left_overlap_trims_first_date() {
        let cached = range(SymbolSelector::MarketIndices, day(2020, 1, 1), day(2020, 1, 31));
        let requested = range(SymbolSelector::MarketIndices, day(2020, 1, 15), day(2020, 2, 15));

        let clipped = clip(&cached, &requested, &indices());
        assert_eq!(
            clipped,
            Some(range(SymbolSelector::MarketIndices, day(2020, 2, 1), day(2020, 2, 15)))
        );
    }

    #[test]
    fn test_left_overlap_with_weekday_calendar() {
        let cached = range(SymbolSelector::MarketIndices, day(2020, 1, 1), day(2020, 1, 31));
        let requested = range(SymbolSelector::MarketIndices, day(2020, 1, 15), day(2020, 2, 15));

        let clipped = clip_with_calendar(&cached, &requested, &indices(), TradingCalendar::Weekdays);
        assert_eq!(
            clipped,
            Some(range(SymbolSelector::MarketIndices, day(2020, 2, 3), day(2020, 2, 15)))
        );
    }

    #[test]
    fn test_weekend_remainder_needs_nothing() {
        // cached ends Friday 2020-01-31, request ends Sunday 2020-02-02
        let cached = range(SymbolSelector::AllSymbols, day(2020, 1, 1), day(2020, 1, 31));
        let requested = range(SymbolSelector::AllSymbols, day(2020, 1, 15), day(2020, 2, 2));

        assert_eq!(
            clip_with_calendar(&cached, &requested, &NoMarketIndices, TradingCalendar::Weekdays),
            None
        );
        assert!(clip(&cached, &requested, &NoMarketIndices).is_some());
    }

    #[test]
    fn test_unbounded_all_symbols_covers_any_request() {
        let cached = QuoteRange::all_dates(SymbolSelector::AllSymbols);
        let requests = [
            range(given(&["CBA", "XAO"]), day(2000, 1, 1), day(2000, 12, 31)),
            QuoteRange::all_dates(SymbolSelector::MarketIndices),
            QuoteRange::new(SymbolSelector::AllOrdinaries, DateBound::starting_from(day(2010, 1, 1))),
        ];

        for requested in &requests {
            assert_eq!(clip(&cached, requested, &indices()), None, "{}", requested);
        }
    }

    #[test]
    fn test_symbol_incompatibility_blocks_containment() {
        let cached = range(given(&["CBA"]), day(2000, 1, 1), day(2000, 12, 31));
        let requested = range(given(&["CBA", "WBC"]), day(2000, 6, 1), day(2000, 6, 30));

        assert_eq!(
            clip(&cached, &requested, &NoMarketIndices),
            Some(requested.clone())
        );
    }

    #[test]
    fn test_no_overlap_returns_request() {
        let cached = range(SymbolSelector::AllSymbols, day(2000, 1, 1), day(2000, 1, 31));
        let requested = range(given(&["CBA"]), day(2001, 1, 1), day(2001, 1, 31));
        assert_eq!(clip(&cached, &requested, &NoMarketIndices), Some(requested.clone()));
    }

    #[test]
    fn test_cached_inside_request_returns_request() {
        let cached = range(SymbolSelector::AllSymbols, day(2000, 6, 1), day(2000, 6, 30));
        let requested = range(SymbolSelector::AllSymbols, day(2000, 1, 1), day(2000, 12, 31));
        assert_eq!(clip(&cached, &requested, &NoMarketIndices), Some(requested.clone()));
    }

    #[test]
    fn test_clip_against_itself_is_fully_covered() {
        let dates = DateBound::between(day(2000, 1, 1), day(2000, 1, 31)).unwrap();
        let selectors = [
            SymbolSelector::AllSymbols,
            SymbolSelector::AllOrdinaries,
            SymbolSelector::MarketIndices,
            given(&["CBA", "WBC"]),
        ];

        for selector in selectors {
            let range = QuoteRange::new(selector, dates);
            assert_eq!(clip(&range, &range, &indices()), None, "{}", range);
        }
    }

    #[test]
    fn test_all_ordinaries_covers_given_ordinaries_only() {
        let cached = range(SymbolSelector::AllOrdinaries, day(2000, 1, 1), day(2000, 12, 31));
        let ordinary = range(given(&["CBA", "WBC"]), day(2000, 3, 1), day(2000, 3, 31));
        let with_index = range(given(&["CBA", "XAO"]), day(2000, 3, 1), day(2000, 3, 31));
        let long_symbol = range(given(&["CBAPA"]), day(2000, 3, 1), day(2000, 3, 31));

        assert_eq!(clip(&cached, &ordinary, &indices()), None);
        assert_eq!(clip(&cached, &with_index, &indices()), Some(with_index.clone()));
        assert_eq!(clip(&cached, &long_symbol, &indices()), Some(long_symbol.clone()));
    }

    #[test]
    fn test_selector_covers_table() {
        let classifier = indices();
        let all = SymbolSelector::AllSymbols;
        let ords = SymbolSelector::AllOrdinaries;
        let idx = SymbolSelector::MarketIndices;
        let cba = given(&["CBA"]);
        let xao = given(&["XAO"]);

        assert!(selector_covers(&all, &ords, &classifier));
        assert!(selector_covers(&all, &idx, &classifier));
        assert!(selector_covers(&all, &cba, &classifier));
        assert!(selector_covers(&ords, &ords, &classifier));
        assert!(selector_covers(&idx, &idx, &classifier));
        assert!(selector_covers(&ords, &cba, &classifier));
        assert!(selector_covers(&cba, &cba, &classifier));

        assert!(!selector_covers(&ords, &all, &classifier));
        assert!(!selector_covers(&ords, &idx, &classifier));
        assert!(!selector_covers(&idx, &xao, &classifier));
        assert!(!selector_covers(&cba, &ords, &classifier));
        assert!(!selector_covers(&cba, &all, &classifier));
    }

    #[test]
    fn test_unbounded_cached_start_short_circuits_dates() {
        // the cached range ends before the request, but an open first date
        // is classified as containing everything
        let cached = QuoteRange::new(given(&["CBA"]), DateBound::up_to(day(2000, 1, 31)));
        let requested = range(given(&["CBA"]), day(2000, 6, 1), day(2000, 6, 30));
        assert_eq!(clip(&cached, &requested, &NoMarketIndices), None);

        let incompatible = range(given(&["WBC"]), day(2000, 6, 1), day(2000, 6, 30));
        assert_eq!(
            clip(&cached, &incompatible, &NoMarketIndices),
            Some(incompatible.clone())
        );
    }

    #[test]
    fn test_clipping_is_idempotent() {
        let cached = range(SymbolSelector::AllSymbols, day(2020, 1, 1), day(2020, 1, 31));
        let requested = range(SymbolSelector::AllSymbols, day(2020, 1, 15), day(2020, 2, 15));

        let once = clip(&cached, &requested, &NoMarketIndices).unwrap();
        let twice = clip(&cached, &once, &NoMarketIndices);
        assert_eq!(twice, Some(once));
    }

    #[test]
    fn test_open_ended_request_trims_first_date() {
        let cached = range(SymbolSelector::AllSymbols, day(2000, 1, 1), day(2000, 12, 31));
        let requested = QuoteRange::new(
            SymbolSelector::AllSymbols,
            DateBound::starting_from(day(2000, 6, 1)),
        );
        let clipped = clip(&cached, &requested, &NoMarketIndices).unwrap();
        assert_eq!(clipped.dates(), DateBound::starting_from(day(2001, 1, 1)));
    }
}
