//! Quote source abstractions and implementations.
//!
//! This module contains:
//! - The `QuoteSource` trait that every backing store implements
//! - `InMemoryQuoteSource`, a source over a fixed set of records
//!
//! Sources only ever see the outstanding part of a request: the cache clips
//! each request against what it already holds before calling `fetch`.

mod memory;
mod traits;

pub use memory::InMemoryQuoteSource;
pub use traits::QuoteSource;
