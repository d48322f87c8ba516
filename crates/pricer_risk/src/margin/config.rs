//! Margin calculator configuration.

use crate::error::ConfigError;

/// Parameters of the margin rule.
///
/// # Examples
///
/// ```
/// use pricer_risk::margin::MarginConfig;
///
/// let config = MarginConfig::default();
/// assert_eq!(config.risk_free_rate, 0.05);
/// assert_eq!(config.margin_rate, 0.15);
/// assert_eq!(config.contract_multiplier, 1.0);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct MarginConfig {
    /// Rate used when computing deltas
    pub risk_free_rate: f64,
    /// Fraction of delta-equivalent notional held as margin
    pub margin_rate: f64,
    /// Units of underlying per contract
    pub contract_multiplier: f64,
}

impl Default for MarginConfig {
    fn default() -> Self {
        Self {
            risk_free_rate: 0.05,
            margin_rate: 0.15,
            contract_multiplier: 1.0,
        }
    }
}

impl MarginConfig {
    /// Sets the contract multiplier.
    pub fn with_contract_multiplier(mut self, contract_multiplier: f64) -> Self {
        self.contract_multiplier = contract_multiplier;
        self
    }

    /// Sets the margin rate.
    pub fn with_margin_rate(mut self, margin_rate: f64) -> Self {
        self.margin_rate = margin_rate;
        self
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidParameter` if the rate is not finite, the
    /// margin rate is negative or not finite, or the multiplier is not
    /// strictly positive.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.risk_free_rate.is_finite() {
            return Err(ConfigError::InvalidParameter {
                name: "risk_free_rate",
                value: format!("must be finite, got {}", self.risk_free_rate),
            });
        }
        if !self.margin_rate.is_finite() || self.margin_rate < 0.0 {
            return Err(ConfigError::InvalidParameter {
                name: "margin_rate",
                value: format!("must be non-negative, got {}", self.margin_rate),
            });
        }
        if !self.contract_multiplier.is_finite() || self.contract_multiplier <= 0.0 {
            return Err(ConfigError::InvalidParameter {
                name: "contract_multiplier",
                value: format!("must be positive, got {}", self.contract_multiplier),
            });
        }
        Ok(())
    }
}
