//! First-order sensitivities and per-unit valuation results.

use num_traits::Float;
use std::ops::{Add, AddAssign};

use super::distributions::constant;

/// Days used to turn an annual theta into a daily one.
pub const DAYS_PER_YEAR: f64 = 365.0;

/// Option sensitivities in raw model units.
///
/// - `delta`: ∂V/∂S
/// - `gamma`: ∂²V/∂S²
/// - `vega`: ∂V/∂σ per 1.00 (100 percentage points) of volatility
/// - `theta`: time decay per year (usually negative)
/// - `rho`: ∂V/∂r per 1.00 of rate
///
/// Greeks aggregate linearly: [`scale`](Greeks::scale) by a quantity and sum
/// with `+`.
///
/// # Examples
/// ```
/// use pricer_models::analytical::Greeks;
///
/// let unit = Greeks::with_values(0.5, 0.02, 40.0, -6.0, 50.0);
/// let book = unit.scale(10.0) + unit.scale(-4.0);
/// assert_eq!(book.delta, 3.0);
/// assert_eq!(book.vega_per_vol_point(), 2.4);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Greeks<T: Float> {
    /// Sensitivity to the underlying price
    pub delta: T,
    /// Sensitivity of delta to the underlying price
    pub gamma: T,
    /// Sensitivity to volatility (per unit volatility)
    pub vega: T,
    /// Sensitivity to the passage of time (per year)
    pub theta: T,
    /// Sensitivity to the risk-free rate (per unit rate)
    pub rho: T,
}

impl<T: Float> Greeks<T> {
    /// All sensitivities zero; the identity for aggregation.
    pub fn zero() -> Self {
        Self::with_values(T::zero(), T::zero(), T::zero(), T::zero(), T::zero())
    }

    /// Creates a set of Greeks from explicit values.
    pub fn with_values(delta: T, gamma: T, vega: T, theta: T, rho: T) -> Self {
        Self {
            delta,
            gamma,
            vega,
            theta,
            rho,
        }
    }

    /// Multiplies every sensitivity by `factor`.
    #[inline]
    pub fn scale(&self, factor: T) -> Self {
        Self {
            delta: self.delta * factor,
            gamma: self.gamma * factor,
            vega: self.vega * factor,
            theta: self.theta * factor,
            rho: self.rho * factor,
        }
    }

    /// Theta per calendar day.
    pub fn theta_per_day(&self) -> T {
        self.theta / constant(DAYS_PER_YEAR)
    }

    /// Vega per one percentage point of volatility.
    pub fn vega_per_vol_point(&self) -> T {
        self.vega / constant(100.0)
    }

    /// Rho per one percentage point of rate.
    pub fn rho_per_rate_point(&self) -> T {
        self.rho / constant(100.0)
    }

    /// Returns `true` if every sensitivity is finite.
    pub fn is_finite(&self) -> bool {
        self.delta.is_finite()
            && self.gamma.is_finite()
            && self.vega.is_finite()
            && self.theta.is_finite()
            && self.rho.is_finite()
    }
}

impl<T: Float> Default for Greeks<T> {
    fn default() -> Self {
        Self::zero()
    }
}

impl<T: Float> Add for Greeks<T> {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self {
            delta: self.delta + other.delta,
            gamma: self.gamma + other.gamma,
            vega: self.vega + other.vega,
            theta: self.theta + other.theta,
            rho: self.rho + other.rho,
        }
    }
}

impl<T: Float> AddAssign for Greeks<T> {
    fn add_assign(&mut self, other: Self) {
        *self = *self + other;
    }
}

/// Price and Greeks of one unit of one option.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct OptionAnalytics<T: Float> {
    /// Theoretical price per unit
    pub price: T,
    /// Sensitivities per unit
    pub greeks: Greeks<T>,
}

impl<T: Float> OptionAnalytics<T> {
    /// Scales price and Greeks by a position quantity.
    pub fn scale(&self, quantity: T) -> Self {
        Self {
            price: self.price * quantity,
            greeks: self.greeks.scale(quantity),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_zero_is_additive_identity() {
        let g = Greeks::with_values(0.6, 0.01, 35.0, -7.0, 45.0);
        assert_eq!(g + Greeks::zero(), g);
        assert_eq!(Greeks::<f64>::default(), Greeks::zero());
    }

    #[test]
    fn test_scale() {
        let g = Greeks::with_values(0.5, 0.02, 40.0, -6.0, 50.0).scale(-2.0);
        assert_eq!(g.delta, -1.0);
        assert_eq!(g.gamma, -0.04);
        assert_eq!(g.vega, -80.0);
        assert_eq!(g.theta, 12.0);
        assert_eq!(g.rho, -100.0);
    }

    #[test]
    fn test_add_assign() {
        let mut total = Greeks::zero();
        total += Greeks::with_values(1.0, 2.0, 3.0, 4.0, 5.0);
        total += Greeks::with_values(1.0, 1.0, 1.0, 1.0, 1.0);
        assert_eq!(total, Greeks::with_values(2.0, 3.0, 4.0, 5.0, 6.0));
    }

    #[test]
    fn test_display_conversions() {
        let g = Greeks::with_values(0.5, 0.02, 37.5, -6.5, 53.2);
        assert_relative_eq!(g.theta_per_day(), -6.5 / 365.0, epsilon = 1e-15);
        assert_relative_eq!(g.vega_per_vol_point(), 0.375, epsilon = 1e-15);
        assert_relative_eq!(g.rho_per_rate_point(), 0.532, epsilon = 1e-15);
    }

    #[test]
    fn test_is_finite() {
        assert!(Greeks::with_values(1.0, 0.0, 0.0, 0.0, 0.0).is_finite());
        assert!(!Greeks::with_values(f64::NAN, 0.0, 0.0, 0.0, 0.0).is_finite());
        assert!(!Greeks::with_values(0.0, 0.0, 0.0, f64::INFINITY, 0.0).is_finite());
    }

    #[test]
    fn test_analytics_scale() {
        let unit = OptionAnalytics {
            price: 10.0,
            greeks: Greeks::with_values(0.5, 0.02, 40.0, -6.0, 50.0),
        };
        let scaled = unit.scale(3.0);
        assert_eq!(scaled.price, 30.0);
        assert_eq!(scaled.greeks.delta, 1.5);
    }
}
