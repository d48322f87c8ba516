//! # Pricer Risk (L4: Application)
//!
//! Portfolio aggregation, scenario stress, Monte Carlo value-at-risk and
//! margin for books of European options.
//!
//! This crate provides:
//! - Positions and portfolios with linear value and Greeks aggregation
//! - Deterministic revaluation under spot, volatility and rate shifts
//! - Named and preset scenarios run through a scenario engine
//! - Monte Carlo simulation of portfolio values at a horizon
//! - Delta-based margin with optional market stress
//! - Rayon-based parallelisation with order-preserving reductions
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │            pricer_risk (L4)             │
//! ├─────────────────────────────────────────┤
//! │  portfolio/   - Position, Portfolio,    │
//! │                 PositionRecord          │
//! │  scenarios/   - Shifts, stress, engine, │
//! │                 presets                 │
//! │  monte_carlo/ - GBM trials, VaR summary │
//! │  margin/      - Delta margin            │
//! │  rng/         - Per-trial RNG streams   │
//! │  parallel/    - Rayon utilities         │
//! └─────────────────────────────────────────┘
//!          ↓
//! ┌─────────────────────────────────────────┐
//! │           pricer_models (L2)            │
//! │  Black-Scholes price and Greeks         │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Determinism
//!
//! Per-position and per-trial work may run on the Rayon pool, but results
//! are collected in input order and reduced sequentially. Repeated calls on
//! the same inputs, and seeded simulations, are bit-identical regardless of
//! thread count.
//!
//! ## Example
//!
//! ```
//! use pricer_models::instruments::OptionType;
//! use pricer_risk::portfolio::{Portfolio, Position};
//! use pricer_risk::scenarios::ScenarioShift;
//!
//! let mut portfolio = Portfolio::new();
//! portfolio.add_position(Position::new(100.0, 100.0, 1.0, 0.05, 0.2, OptionType::Call, 10.0));
//! portfolio.add_position(Position::new(100.0, 95.0, 0.5, 0.05, 0.2, OptionType::Put, -5.0));
//!
//! let base = portfolio.valuation().unwrap();
//! let pnl = portfolio.scenario_shift(-5.0, 0.02, 0.0).unwrap();
//!
//! assert_eq!(pnl.base_value, base.value);
//! assert!(pnl.is_loss());
//!
//! let shocked = portfolio.stress(&ScenarioShift::absolute(-5.0, 0.02, 0.0)).unwrap();
//! assert_eq!(shocked.value, pnl.stressed_value);
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod error;
pub mod margin;
pub mod monte_carlo;
pub mod parallel;
pub mod portfolio;
pub mod rng;
pub mod scenarios;

// Re-export commonly used types
pub use error::{ConfigError, RiskError};
pub use margin::{MarginCalculator, MarginConfig, MarginStress};
pub use monte_carlo::{MonteCarloConfig, MonteCarloEngine, ShockModel, SimulationSummary};
pub use parallel::{ParallelConfig, DEFAULT_BATCH_SIZE};
pub use portfolio::{Portfolio, Position, PositionRecord, Valuation};
pub use scenarios::{ScenarioEngine, ScenarioPnL, ScenarioShift};
