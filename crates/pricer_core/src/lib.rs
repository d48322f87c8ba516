//! # pricer_core: Foundation Layer for Options Risk
//!
//! ## Layer 1 (Foundation) Role
//!
//! pricer_core is the bottom layer of the workspace, providing:
//! - Generic floating-point support and pricing traits (`traits`)
//! - The cross-crate error taxonomy: `PricingError` (`types::error`)
//! - Market quotes, quote providers and historical volatility (`market_data`)
//!
//! ## Zero Dependency Principle
//!
//! Layer 1 has no dependencies on other pricer_* crates, with minimal external dependencies:
//! - num-traits: Traits for generic numerical computation
//! - thiserror: Structured error types
//! - serde: Serialisation support (optional)
//!
//! ## Usage Examples
//!
//! ```rust
//! use pricer_core::market_data::{MarketQuote, QuoteProvider, StaticQuoteProvider};
//!
//! let mut provider = StaticQuoteProvider::new();
//! provider.insert("AAPL", MarketQuote::new(190.0, 0.25).unwrap());
//!
//! let quote = provider.quote("AAPL").unwrap();
//! assert_eq!(quote.underlying_price(), 190.0);
//! assert!(provider.quote("MSFT").is_err());
//! ```
//!
//! ## Feature Flags
//!
//! - `serde` (default): Enable serialisation for market quotes

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod market_data;
pub mod traits;
pub mod types;
