//! Inputs shared by every risk command.

use std::path::Path;

use pricer_core::market_data::{MarketQuote, QuoteProvider};
use pricer_risk::parallel::{ParallelConfig, DEFAULT_BATCH_SIZE};
use pricer_risk::portfolio::{Portfolio, PositionRecord};
use tracing::{debug, info};

use crate::config::RiskConfig;
use crate::{CliError, Result};

/// Market and position inputs resolved from configuration and flags.
#[derive(Debug, Clone)]
pub struct RiskContext {
    /// Ticker the quote belongs to
    pub ticker: String,
    /// Underlying price and volatility
    pub quote: MarketQuote,
    /// Risk-free rate
    pub rate: f64,
    /// Stored position records
    pub records: Vec<PositionRecord>,
    /// Parallel evaluation thresholds
    pub parallel: ParallelConfig,
}

/// Command line market overrides.
#[derive(Debug, Clone, Default)]
pub struct MarketOverrides {
    /// Ticker to quote
    pub ticker: Option<String>,
    /// Underlying price
    pub spot: Option<f64>,
    /// Volatility
    pub vol: Option<f64>,
    /// Risk-free rate
    pub rate: Option<f64>,
}

/// Parses a JSON array of position records.
pub fn parse_records(json: &str) -> Result<Vec<PositionRecord>> {
    Ok(serde_json::from_str(json)?)
}

/// Reads position records from a JSON file.
pub fn load_records(path: &Path) -> Result<Vec<PositionRecord>> {
    let content = std::fs::read_to_string(path).map_err(|source| CliError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_records(&content)
}

/// Resolves the quote for `overrides.ticker` (or the default ticker).
///
/// A price and volatility given on the command line replace the configured
/// ones; a ticker with no configured quote needs both.
pub fn resolve_quote(
    config: &RiskConfig,
    overrides: &MarketOverrides,
) -> Result<(String, MarketQuote)> {
    let ticker = overrides
        .ticker
        .clone()
        .unwrap_or_else(|| config.default_ticker.clone());

    let quote = match (overrides.spot, overrides.vol) {
        (Some(spot), Some(vol)) => MarketQuote::new(spot, vol)?,
        (spot, vol) => {
            let configured = config.quote_provider()?.quote(&ticker)?;
            MarketQuote::new(
                spot.unwrap_or(configured.underlying_price()),
                vol.unwrap_or(configured.volatility()),
            )?
        }
    };

    Ok((ticker, quote))
}

impl RiskContext {
    /// Builds the context from configuration, a portfolio file and overrides.
    pub fn load(
        config: &RiskConfig,
        portfolio: Option<&Path>,
        overrides: &MarketOverrides,
    ) -> Result<Self> {
        let path = portfolio.ok_or_else(|| {
            CliError::InvalidArgument("--portfolio <FILE> is required".to_string())
        })?;
        let records = load_records(path)?;
        let (ticker, quote) = resolve_quote(config, overrides)?;
        let rate = overrides.rate.unwrap_or(config.risk_free_rate);

        info!(
            ticker = %ticker,
            positions = records.len(),
            spot = quote.underlying_price(),
            vol = quote.volatility(),
            rate,
            "loaded portfolio"
        );

        Ok(Self {
            ticker,
            quote,
            rate,
            records,
            parallel: ParallelConfig::new(
                DEFAULT_BATCH_SIZE,
                config.monte_carlo.parallel_threshold,
            ),
        })
    }

    /// Portfolio valued off the resolved quote and rate.
    pub fn portfolio(&self) -> Portfolio {
        debug!(positions = self.records.len(), "building portfolio");
        Portfolio::from_records(&self.records, &self.quote, self.rate)
            .with_parallel_config(self.parallel.clone())
    }
}
