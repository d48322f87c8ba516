//! Annualised historical volatility from a close-price series.

use super::error::MarketDataError;

/// Trading days used to annualise daily return volatility.
pub const TRADING_DAYS_PER_YEAR: f64 = 252.0;

/// Minimum number of closes: two returns are needed for a sample deviation.
const MIN_OBSERVATIONS: usize = 3;

/// Computes annualised volatility from close prices.
///
/// Simple returns `c[i] / c[i-1] - 1` are formed, their sample standard
/// deviation (n - 1 denominator) is taken and scaled by
/// `sqrt(periods_per_year)`.
///
/// # Errors
///
/// - [`MarketDataError::InsufficientData`] for fewer than three closes
/// - [`MarketDataError::InvalidPrice`] for any non-positive or non-finite close
///
/// # Examples
///
/// ```
/// use pricer_core::market_data::historical_volatility;
///
/// let vol = historical_volatility(&[100.0, 110.0, 99.0], 252.0).unwrap();
/// assert!(vol > 1.0);
/// ```
pub fn historical_volatility(
    closes: &[f64],
    periods_per_year: f64,
) -> Result<f64, MarketDataError> {
    if closes.len() < MIN_OBSERVATIONS {
        return Err(MarketDataError::InsufficientData {
            got: closes.len(),
            need: MIN_OBSERVATIONS,
        });
    }
    if let Some(&bad) = closes.iter().find(|c| !(**c > 0.0) || !c.is_finite()) {
        return Err(MarketDataError::InvalidPrice { price: bad });
    }

    let returns: Vec<f64> = closes.windows(2).map(|w| w[1] / w[0] - 1.0).collect();
    let n = returns.len() as f64;
    let mean = returns.iter().sum::<f64>() / n;
    let variance = returns.iter().map(|r| (r - mean).powi(2)).sum::<f64>() / (n - 1.0);

    Ok(variance.sqrt() * periods_per_year.sqrt())
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_known_series() {
        // returns: +10%, -10%  -> mean 0, sample var = (0.01 + 0.01) / 1 = 0.02
        let vol = historical_volatility(&[100.0, 110.0, 99.0], 1.0).unwrap();
        assert_relative_eq!(vol, 0.02_f64.sqrt(), epsilon = 1e-12);
    }

    #[test]
    fn test_annualisation_scales_by_sqrt_periods() {
        let closes = [50.0, 51.0, 50.5, 52.0, 51.5];
        let daily = historical_volatility(&closes, 1.0).unwrap();
        let annual = historical_volatility(&closes, TRADING_DAYS_PER_YEAR).unwrap();
        assert_relative_eq!(annual, daily * 252.0_f64.sqrt(), epsilon = 1e-12);
    }

    #[test]
    fn test_flat_series_has_zero_volatility() {
        let vol = historical_volatility(&[10.0, 10.0, 10.0, 10.0], 252.0).unwrap();
        assert_eq!(vol, 0.0);
    }

    #[test]
    fn test_insufficient_data() {
        assert_eq!(
            historical_volatility(&[100.0, 101.0], 252.0),
            Err(MarketDataError::InsufficientData { got: 2, need: 3 })
        );
        assert!(historical_volatility(&[], 252.0).is_err());
    }

    #[test]
    fn test_rejects_bad_close() {
        assert_eq!(
            historical_volatility(&[100.0, 0.0, 101.0], 252.0),
            Err(MarketDataError::InvalidPrice { price: 0.0 })
        );
        assert!(historical_volatility(&[100.0, f64::NAN, 101.0], 252.0).is_err());
    }
}
