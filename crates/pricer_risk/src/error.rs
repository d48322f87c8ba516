//! Error types for portfolio risk operations.
//!
//! This module provides:
//! - `RiskError`: Failures of portfolio, scenario, simulation and margin calls
//! - `ConfigError`: Invalid engine configuration

use pricer_core::market_data::MarketDataError;
use pricer_core::types::{ErrorKind, PricingError};
use thiserror::Error;

/// Configuration error for the risk engines.
///
/// Raised when an engine is built from out-of-range parameters.
#[derive(Error, Clone, Debug, PartialEq)]
pub enum ConfigError {
    /// Simulation count outside valid range.
    #[error("Invalid simulation count {n_sims}: must be in range [1, {max}]")]
    InvalidSimCount {
        /// Requested number of simulations
        n_sims: usize,
        /// Largest accepted value
        max: usize,
    },

    /// Invalid parameter value with name and description.
    #[error("Invalid parameter '{name}': {value}")]
    InvalidParameter {
        /// Parameter name
        name: &'static str,
        /// Description of the invalid value
        value: String,
    },
}

/// Errors raised by portfolio-level risk calculations.
///
/// Every operation is fail-fast: the first offending position aborts the
/// whole call and is identified by its index in portfolio order.
///
/// # Examples
///
/// ```
/// use pricer_core::types::{ErrorKind, PricingError};
/// use pricer_risk::RiskError;
///
/// let err = RiskError::Position {
///     index: 3,
///     source: PricingError::InvalidInput("Invalid expiry: T = 0".to_string()),
/// };
/// assert_eq!(err.to_string(), "Position 3: Invalid input: Invalid expiry: T = 0");
/// assert_eq!(err.kind(), ErrorKind::InvalidInput);
/// assert_eq!(err.position_index(), Some(3));
/// ```
#[derive(Error, Clone, Debug, PartialEq)]
pub enum RiskError {
    /// A position could not be valued.
    #[error("Position {index}: {source}")]
    Position {
        /// Index of the offending position
        index: usize,
        /// Underlying pricing failure
        #[source]
        source: PricingError,
    },

    /// Simulation horizon reaches or passes a position's expiry.
    #[error("Horizon {horizon} must be shorter than the expiry of position {index} (T = {expiry})")]
    InvalidHorizon {
        /// Index of the first position expiring within the horizon
        index: usize,
        /// Requested horizon in years
        horizon: f64,
        /// Expiry of that position in years
        expiry: f64,
    },

    /// An aggregate over valid positions overflowed or became NaN.
    #[error("Numerical instability: aggregate {metric} is not finite")]
    NonFiniteAggregate {
        /// Name of the offending aggregate, e.g. `value` or `margin`
        metric: &'static str,
    },

    /// Invalid engine configuration.
    #[error("Invalid configuration: {0}")]
    Config(#[from] ConfigError),

    /// Invalid or missing market data.
    #[error("Market data error: {0}")]
    MarketData(#[from] MarketDataError),
}

impl RiskError {
    /// Wraps a pricing failure with the index of the position that caused it.
    pub fn at_position(index: usize, source: impl Into<PricingError>) -> Self {
        RiskError::Position {
            index,
            source: source.into(),
        }
    }

    /// Returns the classification of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            RiskError::Position { source, .. } => source.kind(),
            RiskError::NonFiniteAggregate { .. } => ErrorKind::NumericalInstability,
            RiskError::InvalidHorizon { .. } | RiskError::Config(_) | RiskError::MarketData(_) => {
                ErrorKind::InvalidInput
            }
        }
    }

    /// Index of the offending position, where one applies.
    pub fn position_index(&self) -> Option<usize> {
        match self {
            RiskError::Position { index, .. } | RiskError::InvalidHorizon { index, .. } => {
                Some(*index)
            }
            RiskError::NonFiniteAggregate { .. }
            | RiskError::Config(_)
            | RiskError::MarketData(_) => None,
        }
    }
}

impl From<RiskError> for PricingError {
    fn from(err: RiskError) -> Self {
        match err.kind() {
            ErrorKind::InvalidInput => PricingError::InvalidInput(err.to_string()),
            ErrorKind::NumericalInstability => PricingError::NumericalInstability(err.to_string()),
        }
    }
}
