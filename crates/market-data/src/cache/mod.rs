//! Range-aware caching in front of a quote source.
//!
//! - `config` - Cache configuration (CacheConfig)
//! - `validator` - Record validation before storage (QuoteValidator)
//! - `quote_cache` - The cache itself (QuoteCache)

mod config;
mod quote_cache;
mod validator;

pub use config::CacheConfig;
pub use quote_cache::{CacheStats, QuoteCache};
pub use validator::{QuoteValidator, ValidationIssue, ValidationSeverity, ValidatorConfig};
