//! Market data inputs for option valuation.
//!
//! Every position in a book is valued off a pair of observables for its
//! underlying: the current price and an annualised volatility. This module
//! provides the validated quote type, a provider abstraction for looking
//! quotes up by instrument, and a historical volatility estimator for
//! deriving the volatility leg from a close-price series.
//!
//! # Components
//!
//! - [`quote`]: Validated `(underlying_price, volatility)` pair (MarketQuote)
//! - [`provider`]: Quote lookup trait and an in-memory implementation
//! - [`volatility`]: Annualised historical volatility from close prices
//! - [`error`]: Market data error types (MarketDataError)
//!
//! # Example
//!
//! ```
//! use pricer_core::market_data::{historical_volatility, MarketQuote, TRADING_DAYS_PER_YEAR};
//!
//! let closes = [100.0, 101.0, 99.5, 100.5, 102.0];
//! let vol = historical_volatility(&closes, TRADING_DAYS_PER_YEAR).unwrap();
//! assert!(vol > 0.0);
//!
//! let quote = MarketQuote::from_close_prices(&closes).unwrap();
//! assert_eq!(quote.underlying_price(), 102.0);
//! assert_eq!(quote.volatility(), vol);
//! ```

pub mod error;
pub mod provider;
pub mod quote;
pub mod volatility;

pub use error::MarketDataError;
pub use provider::{QuoteProvider, StaticQuoteProvider};
pub use quote::MarketQuote;
pub use volatility::{historical_volatility, TRADING_DAYS_PER_YEAR};
