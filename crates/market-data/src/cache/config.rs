use quoteshelf_range::TradingCalendar;
use rust_decimal::Decimal;
use serde::Deserialize;

use crate::cache::ValidatorConfig;
use crate::errors::MarketDataError;

/// Quote cache configuration.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CacheConfig {
    /// Calendar used to step past cached dates when trimming a request.
    pub calendar: TradingCalendar,
    /// Whether newly fetched ranges are merged with adjacent cached ranges.
    pub merge_ranges: bool,
    /// Whether fetched records are validated before being stored.
    pub validate_quotes: bool,
    /// Validation thresholds, used when `validate_quotes` is set.
    pub validator: ValidatorConfig,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            calendar: TradingCalendar::Continuous,
            merge_ranges: true,
            validate_quotes: true,
            validator: ValidatorConfig::default(),
        }
    }
}

impl CacheConfig {
    /// Parse and validate a configuration from JSON. Missing fields take
    /// their defaults.
    pub fn from_json(json: &str) -> Result<Self, MarketDataError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Check values that parse but make no sense.
    pub fn validate(&self) -> Result<(), MarketDataError> {
        if let Some(max_price) = self.validator.max_price {
            if max_price <= Decimal::ZERO {
                return Err(MarketDataError::InvalidConfig(format!(
                    "validator.maxPrice must be positive, got {}",
                    max_price
                )));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = CacheConfig::default();
        assert_eq!(config.calendar, TradingCalendar::Continuous);
        assert!(config.merge_ranges);
        assert!(config.validate_quotes);
    }

    #[test]
    fn test_from_json_partial() {
        let config = CacheConfig::from_json(r#"{"calendar": "WEEKDAYS", "mergeRanges": false}"#)
            .unwrap();

        assert_eq!(config.calendar, TradingCalendar::Weekdays);
        assert!(!config.merge_ranges);
        assert!(config.validate_quotes);
        assert_eq!(config.validator, ValidatorConfig::default());
    }

    #[test]
    fn test_from_json_empty_object() {
        assert_eq!(CacheConfig::from_json("{}").unwrap(), CacheConfig::default());
    }

    #[test]
    fn test_from_json_rejects_non_positive_max_price() {
        let result = CacheConfig::from_json(r#"{"validator": {"maxPrice": 0}}"#);
        match result {
            Err(MarketDataError::InvalidConfig(message)) => {
                assert!(message.contains("maxPrice"));
            }
            other => panic!("expected invalid config, got {:?}", other),
        }
    }

    #[test]
    fn test_validate_accepts_defaults_and_no_max_price() {
        assert!(CacheConfig::default().validate().is_ok());

        let mut config = CacheConfig::default();
        config.validator.max_price = None;
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_from_json_rejects_unknown_calendar() {
        let result = CacheConfig::from_json(r#"{"calendar": "LUNAR"}"#);
        assert!(matches!(result, Err(MarketDataError::Json(_))));
    }
}
