//! Black-Scholes pricing model for European options.
//!
//! This module provides the Black-Scholes model for pricing European
//! call and put options with analytical Greeks.
//!
//! ## Mathematical Formulas
//!
//! **Call Price**: C = S·N(d₁) - K·e^(-rT)·N(d₂)
//! **Put Price**: P = K·e^(-rT)·N(-d₂) - S·N(-d₁)
//!
//! Where:
//! - d₁ = (ln(S/K) + (r + σ²/2)T) / (σ√T)
//! - d₂ = d₁ - σ√T
//!
//! ## Domain
//!
//! S, K, T and σ must be strictly positive and finite; r must be finite.
//! There is no expiry or zero-volatility fallback: such inputs are rejected.

use num_traits::Float;

use super::distributions::{constant, norm_cdf, norm_pdf};
use super::error::AnalyticalError;
use super::greeks::{Greeks, OptionAnalytics};
use crate::instruments::OptionType;

#[inline]
fn as_f64<T: Float>(x: T) -> f64 {
    x.to_f64().unwrap_or(f64::NAN)
}

#[inline]
fn is_positive_finite<T: Float>(x: T) -> bool {
    x > T::zero() && x.is_finite()
}

/// Intermediate terms shared by the price and every Greek.
#[derive(Debug, Clone, Copy)]
struct Terms<T> {
    d1: T,
    d2: T,
    sqrt_t: T,
    discount: T,
}

/// Black-Scholes model for European option pricing.
///
/// Holds the market side of the valuation (spot, rate, volatility); the
/// contract side (strike, expiry, option type) is supplied per call.
///
/// # Type Parameters
/// * `T` - Floating-point type implementing `Float` (e.g., `f64`, `f32`)
///
/// # Examples
/// ```
/// use pricer_models::analytical::BlackScholes;
/// use pricer_models::instruments::OptionType;
///
/// let bs = BlackScholes::new(100.0_f64, 0.05, 0.2).unwrap();
/// let call_price = bs.price(100.0, 1.0, OptionType::Call).unwrap();
/// let put_price = bs.price(100.0, 1.0, OptionType::Put).unwrap();
///
/// // Put-call parity: C - P = S - K*exp(-rT)
/// let parity = call_price - put_price - (100.0 - 100.0 * (-0.05_f64).exp());
/// assert!(parity.abs() < 1e-10);
/// ```
#[derive(Debug, Clone)]
pub struct BlackScholes<T: Float> {
    /// Spot price (S)
    spot: T,
    /// Risk-free interest rate (r)
    rate: T,
    /// Volatility (σ)
    volatility: T,
}

impl<T: Float> BlackScholes<T> {
    /// Creates a new Black-Scholes model.
    ///
    /// # Arguments
    /// * `spot` - Current spot price (must be positive)
    /// * `rate` - Risk-free interest rate (annualised, may be negative)
    /// * `volatility` - Volatility (must be positive)
    ///
    /// # Errors
    /// - `AnalyticalError::InvalidSpot` if spot <= 0 or not finite
    /// - `AnalyticalError::InvalidVolatility` if volatility <= 0 or not finite
    /// - `AnalyticalError::InvalidRate` if rate is not finite
    ///
    /// # Examples
    /// ```
    /// use pricer_models::analytical::BlackScholes;
    ///
    /// assert!(BlackScholes::new(100.0_f64, 0.05, 0.2).is_ok());
    /// assert!(BlackScholes::new(-100.0_f64, 0.05, 0.2).is_err());
    /// assert!(BlackScholes::new(100.0_f64, 0.05, 0.0).is_err());
    /// assert!(BlackScholes::new(100.0_f64, f64::NAN, 0.2).is_err());
    /// ```
    pub fn new(spot: T, rate: T, volatility: T) -> Result<Self, AnalyticalError> {
        if !is_positive_finite(spot) {
            return Err(AnalyticalError::InvalidSpot {
                spot: as_f64(spot),
            });
        }

        if !is_positive_finite(volatility) {
            return Err(AnalyticalError::InvalidVolatility {
                volatility: as_f64(volatility),
            });
        }

        if !rate.is_finite() {
            return Err(AnalyticalError::InvalidRate {
                rate: as_f64(rate),
            });
        }

        Ok(Self {
            spot,
            rate,
            volatility,
        })
    }

    /// Returns the spot price.
    #[inline]
    pub fn spot(&self) -> T {
        self.spot
    }

    /// Returns the risk-free rate.
    #[inline]
    pub fn rate(&self) -> T {
        self.rate
    }

    /// Returns the volatility.
    #[inline]
    pub fn volatility(&self) -> T {
        self.volatility
    }

    fn terms(&self, strike: T, expiry: T) -> Result<Terms<T>, AnalyticalError> {
        if !is_positive_finite(strike) {
            return Err(AnalyticalError::InvalidStrike {
                strike: as_f64(strike),
            });
        }
        if !is_positive_finite(expiry) {
            return Err(AnalyticalError::InvalidExpiry {
                expiry: as_f64(expiry),
            });
        }

        let half = constant::<T>(0.5);
        let sqrt_t = expiry.sqrt();
        let vol_sqrt_t = self.volatility * sqrt_t;

        let log_moneyness = (self.spot / strike).ln();
        let drift = (self.rate + half * self.volatility * self.volatility) * expiry;
        let d1 = (log_moneyness + drift) / vol_sqrt_t;

        if !d1.is_finite() {
            return Err(AnalyticalError::NumericalInstability {
                message: format!(
                    "d1 is not finite (S = {}, K = {}, T = {}, σ = {})",
                    as_f64(self.spot),
                    as_f64(strike),
                    as_f64(expiry),
                    as_f64(self.volatility)
                ),
            });
        }

        let discount = (-self.rate * expiry).exp();
        if !discount.is_finite() {
            return Err(AnalyticalError::NumericalInstability {
                message: format!(
                    "discount factor is not finite (r = {}, T = {})",
                    as_f64(self.rate),
                    as_f64(expiry)
                ),
            });
        }

        Ok(Terms {
            d1,
            d2: d1 - vol_sqrt_t,
            sqrt_t,
            discount,
        })
    }

    /// Computes the d1 term of the Black-Scholes formula.
    ///
    /// d₁ = (ln(S/K) + (r + σ²/2)T) / (σ√T)
    ///
    /// # Errors
    /// Domain errors for strike and expiry; `NumericalInstability` if the
    /// result is not finite.
    pub fn d1(&self, strike: T, expiry: T) -> Result<T, AnalyticalError> {
        self.terms(strike, expiry).map(|t| t.d1)
    }

    /// Computes the d2 term of the Black-Scholes formula.
    ///
    /// d₂ = d₁ - σ√T
    pub fn d2(&self, strike: T, expiry: T) -> Result<T, AnalyticalError> {
        self.terms(strike, expiry).map(|t| t.d2)
    }

    fn price_from(&self, terms: &Terms<T>, strike: T, option_type: OptionType) -> T {
        match option_type {
            // C = S·N(d₁) - K·e^(-rT)·N(d₂)
            OptionType::Call => {
                self.spot * norm_cdf(terms.d1) - strike * terms.discount * norm_cdf(terms.d2)
            }
            // P = K·e^(-rT)·N(-d₂) - S·N(-d₁)
            OptionType::Put => {
                strike * terms.discount * norm_cdf(-terms.d2) - self.spot * norm_cdf(-terms.d1)
            }
        }
    }

    /// Computes the European option price.
    ///
    /// # Examples
    /// ```
    /// use pricer_models::analytical::BlackScholes;
    /// use pricer_models::instruments::OptionType;
    ///
    /// let bs = BlackScholes::new(100.0_f64, 0.05, 0.2).unwrap();
    /// let price = bs.price(100.0, 1.0, OptionType::Call).unwrap();
    /// assert!((price - 10.4506).abs() < 1e-4);
    ///
    /// // Zero time to expiry is outside the model domain
    /// assert!(bs.price(100.0, 0.0, OptionType::Call).is_err());
    /// ```
    pub fn price(
        &self,
        strike: T,
        expiry: T,
        option_type: OptionType,
    ) -> Result<T, AnalyticalError> {
        let terms = self.terms(strike, expiry)?;
        let price = self.price_from(&terms, strike, option_type);
        if !price.is_finite() {
            return Err(AnalyticalError::NumericalInstability {
                message: format!("{} price is not finite", option_type),
            });
        }
        Ok(price)
    }

    /// Computes the price and all first-order Greeks in one evaluation.
    ///
    /// - Delta: N(d₁) for calls, N(d₁) - 1 for puts
    /// - Gamma: φ(d₁) / (S·σ·√T)
    /// - Vega: S·√T·φ(d₁), per unit volatility
    /// - Theta: -(S·σ·φ(d₁))/(2√T) ∓ r·K·e^(-rT)·N(±d₂), per year
    /// - Rho: ±K·T·e^(-rT)·N(±d₂), per unit rate
    ///
    /// # Errors
    /// - `InvalidStrike` / `InvalidExpiry` for out-of-domain contract terms
    /// - `NumericalInstability` if any intermediate or output is not finite
    ///
    /// # Examples
    /// ```
    /// use pricer_models::analytical::BlackScholes;
    /// use pricer_models::instruments::OptionType;
    ///
    /// let bs = BlackScholes::new(100.0_f64, 0.05, 0.2).unwrap();
    /// let put = bs.price_and_greeks(100.0, 1.0, OptionType::Put).unwrap();
    /// assert!(put.greeks.delta < 0.0 && put.greeks.delta > -1.0);
    /// assert!(put.greeks.rho < 0.0);
    /// ```
    pub fn price_and_greeks(
        &self,
        strike: T,
        expiry: T,
        option_type: OptionType,
    ) -> Result<OptionAnalytics<T>, AnalyticalError> {
        let terms = self.terms(strike, expiry)?;
        let price = self.price_from(&terms, strike, option_type);

        let pdf_d1 = norm_pdf(terms.d1);
        let gamma = pdf_d1 / (self.spot * self.volatility * terms.sqrt_t);
        let vega = self.spot * terms.sqrt_t * pdf_d1;
        let decay = -(self.spot * self.volatility * pdf_d1) / (constant::<T>(2.0) * terms.sqrt_t);
        let discounted_strike = strike * terms.discount;

        let greeks = match option_type {
            OptionType::Call => {
                let n_d2 = norm_cdf(terms.d2);
                Greeks {
                    delta: norm_cdf(terms.d1),
                    gamma,
                    vega,
                    theta: decay - self.rate * discounted_strike * n_d2,
                    rho: discounted_strike * expiry * n_d2,
                }
            }
            OptionType::Put => {
                let n_minus_d2 = norm_cdf(-terms.d2);
                Greeks {
                    delta: norm_cdf(terms.d1) - T::one(),
                    gamma,
                    vega,
                    theta: decay + self.rate * discounted_strike * n_minus_d2,
                    rho: -discounted_strike * expiry * n_minus_d2,
                }
            }
        };

        if !price.is_finite() || !greeks.is_finite() {
            return Err(AnalyticalError::NumericalInstability {
                message: format!(
                    "{} analytics are not finite (price = {}, d1 = {})",
                    option_type,
                    as_f64(price),
                    as_f64(terms.d1)
                ),
            });
        }

        Ok(OptionAnalytics { price, greeks })
    }
}

/// Prices one unit of a European option and returns all first-order Greeks.
///
/// Convenience wrapper over [`BlackScholes::new`] and
/// [`BlackScholes::price_and_greeks`].
///
/// # Errors
/// Any domain violation among `spot`, `strike`, `expiry`, `volatility` (each
/// must be positive and finite) or a non-finite `rate`; `NumericalInstability`
/// if the evaluation overflows.
///
/// # Examples
/// ```
/// use pricer_models::analytical::price_and_greeks;
/// use pricer_models::instruments::OptionType;
///
/// let put = price_and_greeks(100.0_f64, 100.0, 1.0, 0.05, 0.2, OptionType::Put).unwrap();
/// assert!((put.price - 5.57).abs() < 0.01);
///
/// assert!(price_and_greeks(100.0_f64, 100.0, 0.0, 0.05, 0.2, OptionType::Put).is_err());
/// ```
pub fn price_and_greeks<T: Float>(
    spot: T,
    strike: T,
    expiry: T,
    rate: T,
    volatility: T,
    option_type: OptionType,
) -> Result<OptionAnalytics<T>, AnalyticalError> {
    BlackScholes::new(spot, rate, volatility)?.price_and_greeks(strike, expiry, option_type)
}
