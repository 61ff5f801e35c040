//! Quote data validation.
//!
//! Validates records returned by a quote source before they are cached:
//! - OHLC invariants (high >= low, open/close between high/low)
//! - Non-negative prices and volume
//! - Reasonable value ranges

use log::warn;
use rust_decimal::Decimal;
use serde::Deserialize;

use crate::errors::MarketDataError;
use crate::models::Quote;

/// Validation severity levels.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ValidationSeverity {
    /// Hard failure - the record is dropped.
    Hard,
    /// Soft warning - the record is kept but a warning is logged.
    Soft,
}

/// A single problem found in a record.
#[derive(Clone, Debug)]
pub struct ValidationIssue {
    /// Severity of the issue.
    pub severity: ValidationSeverity,
    /// Description of the issue.
    pub message: String,
}

impl ValidationIssue {
    fn hard(message: String) -> Self {
        Self {
            severity: ValidationSeverity::Hard,
            message,
        }
    }

    fn soft(message: String) -> Self {
        Self {
            severity: ValidationSeverity::Soft,
            message,
        }
    }
}

/// Quote validator configuration.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ValidatorConfig {
    /// Whether to reject records with negative prices.
    pub reject_negative_prices: bool,
    /// Whether to reject records where high < low.
    pub reject_invalid_ohlc: bool,
    /// Maximum expected price; larger prices only warn.
    pub max_price: Option<Decimal>,
    /// Whether to warn on zero volume.
    pub warn_on_zero_volume: bool,
    /// Whether to warn on missing OHLC data.
    pub warn_on_missing_ohlc: bool,
}

impl Default for ValidatorConfig {
    fn default() -> Self {
        Self {
            reject_negative_prices: true,
            reject_invalid_ohlc: true,
            max_price: Some(Decimal::from(1_000_000_000i64)),
            warn_on_zero_volume: false,
            warn_on_missing_ohlc: false,
        }
    }
}

/// Quote data validator.
#[derive(Clone, Debug, Default)]
pub struct QuoteValidator {
    config: ValidatorConfig,
}

impl QuoteValidator {
    /// Create a new validator with default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a validator with custom configuration.
    pub fn with_config(config: ValidatorConfig) -> Self {
        Self { config }
    }

    /// Validate a record.
    ///
    /// Returns Ok(()) if the record is acceptable. Soft issues are logged but
    /// do not cause rejection.
    pub fn validate(&self, quote: &Quote) -> Result<(), MarketDataError> {
        let issues = self.issues(quote);

        let errors: Vec<&str> = issues
            .iter()
            .filter(|i| i.severity == ValidationSeverity::Hard)
            .map(|i| i.message.as_str())
            .collect();

        if !errors.is_empty() {
            return Err(MarketDataError::ValidationFailed {
                message: format!("{} on {}: {}", quote.symbol, quote.date, errors.join("; ")),
            });
        }

        for issue in issues.iter().filter(|i| i.severity == ValidationSeverity::Soft) {
            warn!(
                "Quote validation warning for {} on {}: {}",
                quote.symbol, quote.date, issue.message
            );
        }

        Ok(())
    }

    /// Validate all records in a batch.
    ///
    /// Returns a tuple of (valid_quotes, invalid_quotes_with_errors).
    pub fn validate_batch(&self, quotes: Vec<Quote>) -> (Vec<Quote>, Vec<(Quote, MarketDataError)>) {
        let mut valid = Vec::with_capacity(quotes.len());
        let mut invalid = Vec::new();

        for quote in quotes {
            match self.validate(&quote) {
                Ok(()) => valid.push(quote),
                Err(e) => invalid.push((quote, e)),
            }
        }

        (valid, invalid)
    }

    /// Collect every issue with `quote`, hard and soft.
    pub fn issues(&self, quote: &Quote) -> Vec<ValidationIssue> {
        let mut issues = Vec::new();
        self.check_close_price(quote, &mut issues);
        self.check_ohlc(quote, &mut issues);
        self.check_price_range(quote, &mut issues);
        self.check_volume(quote, &mut issues);
        issues
    }

    fn check_close_price(&self, quote: &Quote, issues: &mut Vec<ValidationIssue>) {
        if self.config.reject_negative_prices && quote.close < Decimal::ZERO {
            issues.push(ValidationIssue::hard(format!(
                "Negative close price: {}",
                quote.close
            )));
        }
    }

    /// Missing open/high/low fall back to the close price.
    fn check_ohlc(&self, quote: &Quote, issues: &mut Vec<ValidationIssue>) {
        match (quote.open, quote.high, quote.low) {
            (None, None, None) => {
                if self.config.warn_on_missing_ohlc {
                    issues.push(ValidationIssue::soft(
                        "Missing OHLC data (only close provided)".to_string(),
                    ));
                }
                return;
            }
            (Some(_), Some(_), Some(_)) => {}
            _ => {
                if self.config.warn_on_missing_ohlc {
                    issues.push(ValidationIssue::soft("Partial OHLC data provided".to_string()));
                }
            }
        }

        let open = quote.open.unwrap_or(quote.close);
        let high = quote.high.unwrap_or(quote.close);
        let low = quote.low.unwrap_or(quote.close);

        if self.config.reject_invalid_ohlc {
            if high < low {
                issues.push(ValidationIssue::hard(format!(
                    "High ({}) is less than Low ({})",
                    high, low
                )));
            }
            if open < low || open > high {
                issues.push(ValidationIssue::soft(format!(
                    "Open ({}) is outside High/Low range ({}-{})",
                    open, low, high
                )));
            }
            if quote.close < low || quote.close > high {
                issues.push(ValidationIssue::soft(format!(
                    "Close ({}) is outside High/Low range ({}-{})",
                    quote.close, low, high
                )));
            }
        }

        if self.config.reject_negative_prices {
            for (name, price) in [("open", open), ("high", high), ("low", low)] {
                if price < Decimal::ZERO {
                    issues.push(ValidationIssue::hard(format!(
                        "Negative {} price: {}",
                        name, price
                    )));
                }
            }
        }
    }

    fn check_price_range(&self, quote: &Quote, issues: &mut Vec<ValidationIssue>) {
        let Some(max_price) = self.config.max_price else {
            return;
        };

        if quote.close > max_price {
            issues.push(ValidationIssue::soft(format!(
                "Close price ({}) exceeds max threshold ({})",
                quote.close, max_price
            )));
        }
        if let Some(high) = quote.high.filter(|high| *high > max_price) {
            issues.push(ValidationIssue::soft(format!(
                "High price ({}) exceeds max threshold ({})",
                high, max_price
            )));
        }
    }

    fn check_volume(&self, quote: &Quote, issues: &mut Vec<ValidationIssue>) {
        let Some(volume) = quote.volume else {
            return;
        };

        if volume < Decimal::ZERO {
            issues.push(ValidationIssue::hard(format!("Negative volume: {}", volume)));
        }
        if self.config.warn_on_zero_volume && volume == Decimal::ZERO {
            issues.push(ValidationIssue::soft("Zero volume".to_string()));
        }
    }
}
