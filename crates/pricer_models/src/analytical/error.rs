//! Error types for analytical pricing operations.
//!
//! This module provides:
//! - `AnalyticalError`: Errors specific to analytical pricing models

use pricer_core::types::PricingError;
use thiserror::Error;

/// Analytical pricing errors.
///
/// # Variants
/// - `InvalidSpot`: Non-positive or non-finite spot price
/// - `InvalidStrike`: Non-positive or non-finite strike
/// - `InvalidExpiry`: Non-positive or non-finite time to expiry (`T = 0` included)
/// - `InvalidVolatility`: Non-positive or non-finite volatility
/// - `InvalidRate`: Non-finite risk-free rate
/// - `NumericalInstability`: Computation produced a non-finite value
///
/// # Examples
/// ```
/// use pricer_models::analytical::AnalyticalError;
///
/// let err = AnalyticalError::InvalidVolatility { volatility: -0.2 };
/// assert!(format!("{}", err).contains("volatility"));
/// ```
#[derive(Debug, Clone, Error, PartialEq)]
pub enum AnalyticalError {
    /// Invalid spot price.
    #[error("Invalid spot price: S = {spot}")]
    InvalidSpot {
        /// The invalid spot price value
        spot: f64,
    },

    /// Invalid strike price.
    #[error("Invalid strike: K = {strike}")]
    InvalidStrike {
        /// The invalid strike value
        strike: f64,
    },

    /// Invalid time to expiry.
    #[error("Invalid expiry: T = {expiry}")]
    InvalidExpiry {
        /// The invalid expiry value
        expiry: f64,
    },

    /// Invalid volatility.
    #[error("Invalid volatility: σ = {volatility}")]
    InvalidVolatility {
        /// The invalid volatility value
        volatility: f64,
    },

    /// Invalid (non-finite) risk-free rate.
    #[error("Invalid rate: r = {rate}")]
    InvalidRate {
        /// The invalid rate value
        rate: f64,
    },

    /// Numerical instability during computation.
    #[error("Numerical instability: {message}")]
    NumericalInstability {
        /// Description of the numerical issue
        message: String,
    },
}

impl From<AnalyticalError> for PricingError {
    fn from(err: AnalyticalError) -> Self {
        match err {
            AnalyticalError::NumericalInstability { message } => {
                PricingError::NumericalInstability(message)
            }
            other => PricingError::InvalidInput(other.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_spot_display() {
        let err = AnalyticalError::InvalidSpot { spot: -100.0 };
        assert_eq!(format!("{}", err), "Invalid spot price: S = -100");
    }

    #[test]
    fn test_invalid_strike_display() {
        let err = AnalyticalError::InvalidStrike { strike: 0.0 };
        assert_eq!(format!("{}", err), "Invalid strike: K = 0");
    }

    #[test]
    fn test_invalid_expiry_display() {
        let err = AnalyticalError::InvalidExpiry { expiry: 0.0 };
        assert_eq!(format!("{}", err), "Invalid expiry: T = 0");
    }

    #[test]
    fn test_invalid_volatility_display() {
        let err = AnalyticalError::InvalidVolatility { volatility: -0.2 };
        assert_eq!(format!("{}", err), "Invalid volatility: σ = -0.2");
    }

    #[test]
    fn test_invalid_rate_display() {
        let err = AnalyticalError::InvalidRate { rate: f64::NAN };
        assert_eq!(format!("{}", err), "Invalid rate: r = NaN");
    }

    #[test]
    fn test_numerical_instability_display() {
        let err = AnalyticalError::NumericalInstability {
            message: "d1 is not finite".to_string(),
        };
        assert_eq!(format!("{}", err), "Numerical instability: d1 is not finite");
    }

    #[test]
    fn test_domain_errors_convert_to_invalid_input() {
        let errors = [
            AnalyticalError::InvalidSpot { spot: 0.0 },
            AnalyticalError::InvalidStrike { strike: 0.0 },
            AnalyticalError::InvalidExpiry { expiry: 0.0 },
            AnalyticalError::InvalidVolatility { volatility: 0.0 },
            AnalyticalError::InvalidRate { rate: f64::INFINITY },
        ];
        for err in errors {
            let expected = err.to_string();
            match PricingError::from(err) {
                PricingError::InvalidInput(msg) => assert_eq!(msg, expected),
                other => panic!("Expected InvalidInput, got {:?}", other),
            }
        }
    }

    #[test]
    fn test_instability_converts_to_numerical_instability() {
        let err = AnalyticalError::NumericalInstability {
            message: "price is NaN".to_string(),
        };
        assert_eq!(
            PricingError::from(err),
            PricingError::NumericalInstability("price is NaN".to_string())
        );
    }
}
