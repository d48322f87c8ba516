//! CLI error types.

use std::path::PathBuf;

use pricer_core::market_data::MarketDataError;
use pricer_risk::RiskError;
use thiserror::Error;

use crate::config::ConfigError;

/// Errors surfaced by `optrisk` commands.
///
/// Every variant aborts the command; no partial or zero result is printed.
#[derive(Error, Debug)]
pub enum CliError {
    /// Configuration could not be loaded or is invalid.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// A file could not be read.
    #[error("Cannot read {}: {source}", path.display())]
    Io {
        /// Offending path
        path: PathBuf,
        /// Underlying IO failure
        #[source]
        source: std::io::Error,
    },

    /// Malformed JSON input, or output serialisation failure.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Market data could not be resolved.
    #[error("Market data error: {0}")]
    MarketData(#[from] MarketDataError),

    /// Engine parameters rejected.
    #[error("Invalid engine configuration: {0}")]
    Engine(#[from] pricer_risk::ConfigError),

    /// A risk calculation failed.
    #[error("{0}")]
    Risk(#[from] RiskError),

    /// Invalid command line argument.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

/// Result alias for CLI operations.
pub type Result<T> = std::result::Result<T, CliError>;
