//! `optrisk.toml` configuration.
//!
//! Handles loading of the risk configuration from a TOML file with
//! environment variable overrides. Every key is optional.

use std::collections::BTreeMap;
use std::path::Path;

use pricer_core::market_data::{MarketDataError, MarketQuote, StaticQuoteProvider};
use pricer_risk::margin::MarginConfig;
use pricer_risk::monte_carlo::{ShockModel, MAX_SIMS};
use pricer_risk::parallel::DEFAULT_PARALLEL_THRESHOLD;
use serde::Deserialize;
use thiserror::Error;

/// Quote for one ticker: explicit values, or a close-price history.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(default)]
pub struct QuoteSettings {
    /// Current underlying price
    pub underlying_price: Option<f64>,
    /// Annualised volatility
    pub volatility: Option<f64>,
    /// Daily close prices, oldest first
    pub close_prices: Vec<f64>,
}

impl QuoteSettings {
    /// Resolves the quote.
    ///
    /// Explicit values take precedence over those derived from
    /// `close_prices` (last close and historical volatility).
    pub fn to_quote(&self) -> Result<MarketQuote, MarketDataError> {
        match (self.underlying_price, self.volatility) {
            (Some(price), Some(vol)) => MarketQuote::new(price, vol),
            (price, vol) => {
                let history = MarketQuote::from_close_prices(&self.close_prices)?;
                MarketQuote::new(
                    price.unwrap_or(history.underlying_price()),
                    vol.unwrap_or(history.volatility()),
                )
            }
        }
    }
}

/// `[monte_carlo]` section.
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default)]
pub struct MonteCarloSettings {
    /// Number of trials
    pub n_sims: usize,
    /// Horizon in years
    pub horizon: f64,
    /// Base seed; omitted for an entropy seed
    pub seed: Option<u64>,
    /// Shock assignment
    pub shock_model: ShockModel,
    /// Minimum trial count before using the thread pool
    pub parallel_threshold: usize,
}

impl Default for MonteCarloSettings {
    fn default() -> Self {
        Self {
            n_sims: 10_000,
            horizon: 0.25,
            seed: Some(42),
            shock_model: ShockModel::PerPosition,
            parallel_threshold: DEFAULT_PARALLEL_THRESHOLD,
        }
    }
}

/// `[margin]` section.
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default)]
pub struct MarginSettings {
    /// Fraction of delta-equivalent notional held as margin
    pub margin_rate: f64,
    /// Units of underlying per contract
    pub contract_multiplier: f64,
    /// Additive volatility shock for the stressed figure
    pub stress_scenario: f64,
}

impl Default for MarginSettings {
    fn default() -> Self {
        Self {
            margin_rate: 0.15,
            contract_multiplier: 1.0,
            stress_scenario: 0.20,
        }
    }
}

/// Risk configuration.
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default)]
pub struct RiskConfig {
    /// Log level used when `RUST_LOG` is unset
    pub log_level: String,
    /// Continuously compounded risk-free rate
    pub risk_free_rate: f64,
    /// Ticker used when none is given on the command line
    pub default_ticker: String,
    /// Quotes by ticker
    pub quotes: BTreeMap<String, QuoteSettings>,
    /// Monte Carlo settings
    pub monte_carlo: MonteCarloSettings,
    /// Margin settings
    pub margin: MarginSettings,
}

impl Default for RiskConfig {
    fn default() -> Self {
        let mut quotes = BTreeMap::new();
        quotes.insert(
            "AAPL".to_string(),
            QuoteSettings {
                underlying_price: Some(190.0),
                volatility: Some(0.25),
                close_prices: Vec::new(),
            },
        );

        Self {
            log_level: "info".to_string(),
            risk_free_rate: 0.05,
            default_ticker: "AAPL".to_string(),
            quotes,
            monte_carlo: MonteCarloSettings::default(),
            margin: MarginSettings::default(),
        }
    }
}

impl RiskConfig {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io(e.to_string()))?;
        Self::from_toml(&content)
    }

    /// Parse configuration from TOML text
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Load configuration from `path`, or defaults if it does not exist
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Apply environment variable overrides
    pub fn with_env_override(mut self) -> Self {
        if let Ok(log_level) = std::env::var("OPTRISK_LOG_LEVEL") {
            self.log_level = log_level;
        }

        if let Ok(rate) = std::env::var("OPTRISK_RISK_FREE_RATE") {
            if let Ok(rate) = rate.parse() {
                self.risk_free_rate = rate;
            }
        }

        if let Ok(ticker) = std::env::var("OPTRISK_TICKER") {
            self.default_ticker = ticker;
        }

        if let Ok(seed) = std::env::var("OPTRISK_MC_SEED") {
            self.monte_carlo.seed = seed.parse().ok();
        }

        if let Ok(n_sims) = std::env::var("OPTRISK_MC_SIMS") {
            if let Ok(n_sims) = n_sims.parse() {
                self.monte_carlo.n_sims = n_sims;
            }
        }

        self
    }

    /// Margin calculator configuration
    pub fn margin_config(&self) -> MarginConfig {
        MarginConfig {
            risk_free_rate: self.risk_free_rate,
            margin_rate: self.margin.margin_rate,
            contract_multiplier: self.margin.contract_multiplier,
        }
    }

    /// Quote provider over the configured tickers
    pub fn quote_provider(&self) -> Result<StaticQuoteProvider, MarketDataError> {
        let mut provider = StaticQuoteProvider::new();
        for (ticker, settings) in &self.quotes {
            provider.insert(ticker.clone(), settings.to_quote()?);
        }
        Ok(provider)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        let mut errors = Vec::new();

        let valid_log_levels = ["trace", "debug", "info", "warn", "error"];
        if !valid_log_levels.contains(&self.log_level.to_lowercase().as_str()) {
            errors.push(format!(
                "Invalid log_level '{}'. Valid values: {:?}",
                self.log_level, valid_log_levels
            ));
        }

        if !self.risk_free_rate.is_finite() {
            errors.push(format!("risk_free_rate must be finite, got {}", self.risk_free_rate));
        }

        if self.default_ticker.trim().is_empty() {
            errors.push("default_ticker cannot be empty".to_string());
        }

        for (ticker, settings) in &self.quotes {
            if let Err(e) = settings.to_quote() {
                errors.push(format!("quotes.{}: {}", ticker, e));
            }
        }

        let mc = &self.monte_carlo;
        if mc.n_sims == 0 || mc.n_sims > MAX_SIMS {
            errors.push(format!(
                "monte_carlo.n_sims {} outside [1, {}]",
                mc.n_sims, MAX_SIMS
            ));
        }
        if !mc.horizon.is_finite() || mc.horizon <= 0.0 {
            errors.push(format!("monte_carlo.horizon must be positive, got {}", mc.horizon));
        }

        if let Err(e) = self.margin_config().validate() {
            errors.push(format!("margin: {}", e));
        }
        if !self.margin.stress_scenario.is_finite() {
            errors.push(format!(
                "margin.stress_scenario must be finite, got {}",
                self.margin.stress_scenario
            ));
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(ConfigError::Validation(errors))
        }
    }
}

/// Configuration error type
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// IO error reading config file
    #[error("IO error: {0}")]
    Io(String),
    /// Parse error in config file
    #[error("Parse error: {0}")]
    Parse(String),
    /// Validation error
    #[error("Validation errors: {}", .0.join("; "))]
    Validation(Vec<String>),
}
