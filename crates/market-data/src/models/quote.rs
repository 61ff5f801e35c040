use quoteshelf_range::{Symbol, TradingDate};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// End-of-day price/volume record for one symbol on one trading date.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Quote {
    /// Symbol the record belongs to
    pub symbol: Symbol,

    /// Trading date of the record
    pub date: TradingDate,

    /// Opening price
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub open: Option<Decimal>,

    /// Day high
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub high: Option<Decimal>,

    /// Day low
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub low: Option<Decimal>,

    /// Closing price (required)
    pub close: Decimal,

    /// Traded volume
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub volume: Option<Decimal>,
}

impl Quote {
    /// Create a close-only record
    pub fn new(symbol: Symbol, date: TradingDate, close: Decimal) -> Self {
        Self {
            symbol,
            date,
            open: None,
            high: None,
            low: None,
            close,
            volume: None,
        }
    }

    /// Create a full OHLCV record
    pub fn ohlcv(
        symbol: Symbol,
        date: TradingDate,
        open: Decimal,
        high: Decimal,
        low: Decimal,
        close: Decimal,
        volume: Decimal,
    ) -> Self {
        Self {
            symbol,
            date,
            open: Some(open),
            high: Some(high),
            low: Some(low),
            close,
            volume: Some(volume),
        }
    }
}
