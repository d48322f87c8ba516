//! A single option holding.

use pricer_core::traits::Priceable;
use pricer_core::types::PricingError;
use pricer_models::analytical::{BlackScholes, OptionAnalytics};
use pricer_models::instruments::OptionType;

use super::ids::UnderlyingId;

/// An immutable holding of one European option line.
///
/// Carries its own market inputs (spot, rate, volatility) next to the
/// contract terms, and a signed quantity: positive for long, negative for
/// short. Construction does not validate; out-of-domain inputs, including a
/// non-finite quantity, are rejected when the position is evaluated.
///
/// # Examples
///
/// ```
/// use pricer_core::traits::Priceable;
/// use pricer_models::instruments::OptionType;
/// use pricer_risk::portfolio::Position;
///
/// let long_call = Position::new(100.0, 100.0, 1.0, 0.05, 0.2, OptionType::Call, 10.0);
/// let value = long_call.price().unwrap();
/// assert!((value - 104.5058).abs() < 1e-3);
///
/// // Invalid inputs surface at evaluation time
/// let expired = long_call.with_expiry(0.0);
/// assert!(expired.price().is_err());
/// ```
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Position {
    spot: f64,
    strike: f64,
    expiry: f64,
    rate: f64,
    volatility: f64,
    option_type: OptionType,
    quantity: f64,
    #[cfg_attr(feature = "serde", serde(default))]
    underlying: UnderlyingId,
}

impl Position {
    /// Creates a position on the default underlying.
    ///
    /// # Arguments
    /// * `spot` - Current underlying price (S)
    /// * `strike` - Strike price (K)
    /// * `expiry` - Time to expiry in years (T)
    /// * `rate` - Continuously compounded risk-free rate (r)
    /// * `volatility` - Annualised volatility (σ)
    /// * `option_type` - Call or put
    /// * `quantity` - Signed number of contracts
    pub fn new(
        spot: f64,
        strike: f64,
        expiry: f64,
        rate: f64,
        volatility: f64,
        option_type: OptionType,
        quantity: f64,
    ) -> Self {
        Self {
            spot,
            strike,
            expiry,
            rate,
            volatility,
            option_type,
            quantity,
            underlying: UnderlyingId::default(),
        }
    }

    /// Assigns the underlying this option is written on.
    pub fn with_underlying(mut self, underlying: impl Into<UnderlyingId>) -> Self {
        self.underlying = underlying.into();
        self
    }

    /// Copy with a different spot.
    pub fn with_spot(&self, spot: f64) -> Self {
        Self {
            spot,
            ..self.clone()
        }
    }

    /// Copy with a different time to expiry.
    pub fn with_expiry(&self, expiry: f64) -> Self {
        Self {
            expiry,
            ..self.clone()
        }
    }

    /// Copy with a different rate.
    pub fn with_rate(&self, rate: f64) -> Self {
        Self {
            rate,
            ..self.clone()
        }
    }

    /// Copy with a different volatility.
    pub fn with_volatility(&self, volatility: f64) -> Self {
        Self {
            volatility,
            ..self.clone()
        }
    }

    /// Copy with a different quantity.
    pub fn with_quantity(&self, quantity: f64) -> Self {
        Self {
            quantity,
            ..self.clone()
        }
    }

    /// Underlying price.
    #[inline]
    pub fn spot(&self) -> f64 {
        self.spot
    }

    /// Strike price.
    #[inline]
    pub fn strike(&self) -> f64 {
        self.strike
    }

    /// Time to expiry in years.
    #[inline]
    pub fn expiry(&self) -> f64 {
        self.expiry
    }

    /// Risk-free rate.
    #[inline]
    pub fn rate(&self) -> f64 {
        self.rate
    }

    /// Volatility.
    #[inline]
    pub fn volatility(&self) -> f64 {
        self.volatility
    }

    /// Call or put.
    #[inline]
    pub fn option_type(&self) -> OptionType {
        self.option_type
    }

    /// Signed number of contracts.
    #[inline]
    pub fn quantity(&self) -> f64 {
        self.quantity
    }

    /// Underlying identifier.
    #[inline]
    pub fn underlying(&self) -> &UnderlyingId {
        &self.underlying
    }

    fn model(&self) -> Result<BlackScholes<f64>, PricingError> {
        if !self.quantity.is_finite() {
            return Err(PricingError::InvalidInput(format!(
                "Invalid quantity: {} (must be finite)",
                self.quantity
            )));
        }
        Ok(BlackScholes::new(self.spot, self.rate, self.volatility)?)
    }

    /// Price of one unit of the option.
    pub fn unit_price(&self) -> Result<f64, PricingError> {
        Ok(self
            .model()?
            .price(self.strike, self.expiry, self.option_type)?)
    }

    /// Price and Greeks of one unit of the option.
    pub fn unit_analytics(&self) -> Result<OptionAnalytics<f64>, PricingError> {
        Ok(self
            .model()?
            .price_and_greeks(self.strike, self.expiry, self.option_type)?)
    }
}

impl Priceable<f64> for Position {
    /// Position value: quantity times the unit price.
    fn price(&self) -> Result<f64, PricingError> {
        let value = self.quantity * self.unit_price()?;
        if !value.is_finite() {
            return Err(PricingError::NumericalInstability(format!(
                "position value {} is not finite",
                value
            )));
        }
        Ok(value)
    }
}
