//! Market data error types.

use crate::types::PricingError;
use thiserror::Error;

/// Market data operation errors.
///
/// # Variants
///
/// - `InvalidPrice`: Non-positive or non-finite underlying price
/// - `InvalidVolatility`: Non-positive or non-finite volatility
/// - `InstrumentNotFound`: No quote available for the requested instrument
/// - `InsufficientData`: Not enough observations for an estimate
///
/// # Examples
///
/// ```
/// use pricer_core::market_data::MarketDataError;
///
/// let err = MarketDataError::InvalidPrice { price: -1.0 };
/// assert!(format!("{}", err).contains("-1"));
/// ```
#[derive(Error, Debug, Clone, PartialEq)]
pub enum MarketDataError {
    /// Invalid underlying price (non-positive or non-finite).
    #[error("Invalid underlying price: S = {price}")]
    InvalidPrice {
        /// The invalid price value
        price: f64,
    },

    /// Invalid volatility (non-positive or non-finite).
    #[error("Invalid volatility: σ = {volatility}")]
    InvalidVolatility {
        /// The invalid volatility value
        volatility: f64,
    },

    /// No quote for the requested instrument.
    #[error("No market data for instrument '{instrument}'")]
    InstrumentNotFound {
        /// The instrument identifier that was looked up
        instrument: String,
    },

    /// Insufficient data for an estimate.
    #[error("Insufficient data: got {got}, need {need}")]
    InsufficientData {
        /// Number of points provided
        got: usize,
        /// Minimum number of points required
        need: usize,
    },
}

impl From<MarketDataError> for PricingError {
    fn from(err: MarketDataError) -> Self {
        PricingError::InvalidInput(err.to_string())
    }
}
