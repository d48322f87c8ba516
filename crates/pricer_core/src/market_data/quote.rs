//! Validated spot/volatility quote for a single underlying.

use super::error::MarketDataError;
use super::volatility::{historical_volatility, TRADING_DAYS_PER_YEAR};

/// Current market observables for one underlying.
///
/// Both legs are guaranteed positive and finite.
///
/// # Examples
///
/// ```
/// use pricer_core::market_data::MarketQuote;
///
/// let quote = MarketQuote::new(100.0, 0.2).unwrap();
/// assert_eq!(quote.underlying_price(), 100.0);
/// assert_eq!(quote.volatility(), 0.2);
///
/// assert!(MarketQuote::new(0.0, 0.2).is_err());
/// assert!(MarketQuote::new(100.0, f64::NAN).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct MarketQuote {
    underlying_price: f64,
    volatility: f64,
}

impl MarketQuote {
    /// Creates a quote, validating both legs.
    ///
    /// # Errors
    ///
    /// - [`MarketDataError::InvalidPrice`] if the price is not positive and finite
    /// - [`MarketDataError::InvalidVolatility`] if the volatility is not positive and finite
    pub fn new(underlying_price: f64, volatility: f64) -> Result<Self, MarketDataError> {
        if !(underlying_price > 0.0) || !underlying_price.is_finite() {
            return Err(MarketDataError::InvalidPrice {
                price: underlying_price,
            });
        }
        if !(volatility > 0.0) || !volatility.is_finite() {
            return Err(MarketDataError::InvalidVolatility { volatility });
        }
        Ok(Self {
            underlying_price,
            volatility,
        })
    }

    /// Builds a quote from a close-price history.
    ///
    /// The price leg is the last close; the volatility leg is the annualised
    /// historical volatility of simple daily returns.
    pub fn from_close_prices(closes: &[f64]) -> Result<Self, MarketDataError> {
        let volatility = historical_volatility(closes, TRADING_DAYS_PER_YEAR)?;
        let last = closes
            .last()
            .copied()
            .ok_or(MarketDataError::InsufficientData { got: 0, need: 3 })?;
        Self::new(last, volatility)
    }

    /// Current price of the underlying.
    #[inline]
    pub fn underlying_price(&self) -> f64 {
        self.underlying_price
    }

    /// Annualised volatility of the underlying.
    #[inline]
    pub fn volatility(&self) -> f64 {
        self.volatility
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_new_valid() {
        let quote = MarketQuote::new(150.0, 0.3).unwrap();
        assert_eq!(quote.underlying_price(), 150.0);
        assert_eq!(quote.volatility(), 0.3);
    }

    #[test]
    fn test_rejects_non_positive_price() {
        assert!(matches!(
            MarketQuote::new(0.0, 0.2),
            Err(MarketDataError::InvalidPrice { .. })
        ));
        assert!(matches!(
            MarketQuote::new(-5.0, 0.2),
            Err(MarketDataError::InvalidPrice { .. })
        ));
    }

    #[test]
    fn test_rejects_non_finite_inputs() {
        assert!(MarketQuote::new(f64::INFINITY, 0.2).is_err());
        assert!(MarketQuote::new(f64::NAN, 0.2).is_err());
        assert!(matches!(
            MarketQuote::new(100.0, f64::INFINITY),
            Err(MarketDataError::InvalidVolatility { .. })
        ));
    }

    #[test]
    fn test_rejects_non_positive_volatility() {
        assert!(matches!(
            MarketQuote::new(100.0, 0.0),
            Err(MarketDataError::InvalidVolatility { .. })
        ));
    }

    #[test]
    fn test_from_close_prices() {
        let closes = [100.0, 102.0, 101.0, 103.0];
        let quote = MarketQuote::from_close_prices(&closes).unwrap();
        assert_eq!(quote.underlying_price(), 103.0);
        assert_relative_eq!(
            quote.volatility(),
            historical_volatility(&closes, TRADING_DAYS_PER_YEAR).unwrap(),
            epsilon = 1e-15
        );
    }

    #[test]
    fn test_from_flat_close_prices_fails() {
        // Zero realised volatility is not a usable quote
        let closes = [100.0, 100.0, 100.0];
        assert!(matches!(
            MarketQuote::from_close_prices(&closes),
            Err(MarketDataError::InvalidVolatility { .. })
        ));
    }
}
