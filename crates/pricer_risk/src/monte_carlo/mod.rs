//! Monte Carlo value-at-risk for option portfolios.
//!
//! Spots evolve over a horizon under geometric Brownian motion, positions
//! are repriced with the remaining time to expiry, and the distribution of
//! portfolio values is summarised by mean, standard deviation and lower
//! percentiles.

mod config;
mod engine;
mod statistics;

pub use config::{MonteCarloConfig, MonteCarloConfigBuilder, ShockModel, MAX_SIMS};
pub use engine::MonteCarloEngine;
pub use statistics::{percentile, SimulationSummary};
