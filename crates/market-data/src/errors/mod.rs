//! Error types for the market data crate.
//!
//! [`MarketDataError`] covers everything that can go wrong between a cache
//! request and the quote source behind it. Range construction errors from
//! `quoteshelf-range` convert into it.

use quoteshelf_range::RangeError;
use thiserror::Error;

/// Errors that can occur during quote fetching and caching.
#[derive(Error, Debug)]
pub enum MarketDataError {
    /// The quote source failed while fetching a range.
    #[error("Source error: {provider} - {message}")]
    SourceError {
        /// The source that returned the error
        provider: String,
        /// The error message from the source
        message: String,
    },

    /// The request to the source timed out.
    #[error("Timeout: {provider}")]
    Timeout {
        /// The source that timed out
        provider: String,
    },

    /// Data validation failed.
    #[error("Validation failed: {message}")]
    ValidationFailed {
        /// Description of the validation failure
        message: String,
    },

    /// A configuration value was rejected.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// A range, symbol or date could not be built from caller input.
    #[error("Invalid range: {0}")]
    Range(#[from] RangeError),

    /// JSON configuration or fixture data could not be parsed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl MarketDataError {
    /// Returns true if repeating the same fetch later may succeed.
    ///
    /// The cache never retries on its own; callers decide.
    pub fn is_transient(&self) -> bool {
        matches!(self, Self::SourceError { .. } | Self::Timeout { .. })
    }
}
