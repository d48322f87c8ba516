//! Monte Carlo revaluation of a portfolio at a horizon.

use std::collections::HashMap;

use pricer_core::types::PricingError;
use pricer_models::analytical::BlackScholes;
use pricer_models::instruments::OptionType;
use tracing::{debug, info, instrument, warn};

use super::config::{MonteCarloConfig, ShockModel, MAX_SIMS};
use super::statistics::SimulationSummary;
use crate::error::{ConfigError, RiskError};
use crate::parallel::map_indices;
use crate::portfolio::{Portfolio, Position};
use crate::rng::PricerRng;

/// Precomputed terms for evolving one position over the horizon.
#[derive(Clone, Debug)]
struct PositionPath {
    spot: f64,
    /// (r - σ²/2)·h
    drift: f64,
    /// σ·√h
    diffusion: f64,
    strike: f64,
    remaining: f64,
    rate: f64,
    volatility: f64,
    option_type: OptionType,
    quantity: f64,
    shock: usize,
}

impl PositionPath {
    fn new(position: &Position, horizon: f64, shock: usize) -> Self {
        let sigma = position.volatility();
        Self {
            spot: position.spot(),
            drift: (position.rate() - 0.5 * sigma * sigma) * horizon,
            diffusion: sigma * horizon.sqrt(),
            strike: position.strike(),
            remaining: position.expiry() - horizon,
            rate: position.rate(),
            volatility: sigma,
            option_type: position.option_type(),
            quantity: position.quantity(),
            shock,
        }
    }

    /// Position value after the horizon for standard normal shock `z`.
    fn value(&self, z: f64) -> Result<f64, PricingError> {
        let spot = self.spot * (self.drift + self.diffusion * z).exp();
        let unit = BlackScholes::new(spot, self.rate, self.volatility)?.price(
            self.strike,
            self.remaining,
            self.option_type,
        )?;
        Ok(self.quantity * unit)
    }
}

/// Validated simulation inputs for one portfolio.
struct TrialPlan {
    paths: Vec<PositionPath>,
    n_shocks: usize,
}

impl TrialPlan {
    /// Validates every position and the horizon before any trial runs.
    fn new(
        portfolio: &Portfolio,
        horizon: f64,
        shock_model: ShockModel,
    ) -> Result<Self, RiskError> {
        portfolio.try_map_positions(Position::unit_price)?;

        if let Some((index, position)) = portfolio
            .iter()
            .enumerate()
            .find(|(_, p)| p.expiry() <= horizon)
        {
            warn!(index, horizon, expiry = position.expiry(), "horizon reaches expiry");
            return Err(RiskError::InvalidHorizon {
                index,
                horizon,
                expiry: position.expiry(),
            });
        }

        let (paths, n_shocks) = match shock_model {
            ShockModel::PerPosition => {
                let paths = portfolio
                    .iter()
                    .enumerate()
                    .map(|(i, p)| PositionPath::new(p, horizon, i))
                    .collect();
                (paths, portfolio.len())
            }
            ShockModel::PerUnderlying => {
                let mut shock_of = HashMap::new();
                let paths = portfolio
                    .iter()
                    .map(|p| {
                        let next = shock_of.len();
                        let shock = *shock_of.entry(p.underlying()).or_insert(next);
                        PositionPath::new(p, horizon, shock)
                    })
                    .collect();
                (paths, shock_of.len())
            }
        };

        Ok(Self { paths, n_shocks })
    }

    /// Portfolio value in trial `trial`, summed in portfolio order.
    fn trial_value(&self, seed: u64, trial: usize) -> Result<f64, RiskError> {
        let mut rng = PricerRng::for_stream(seed, trial as u64);
        let mut shocks = vec![0.0; self.n_shocks];
        rng.fill_normal(&mut shocks);

        let mut total = 0.0;
        for (index, path) in self.paths.iter().enumerate() {
            total += path
                .value(shocks[path.shock])
                .map_err(|e| RiskError::at_position(index, e))?;
        }
        if !total.is_finite() {
            return Err(RiskError::NonFiniteAggregate {
                metric: "trial value",
            });
        }
        Ok(total)
    }
}

/// Simulates portfolio values at a horizon under geometric Brownian motion.
///
/// Each trial draws standard normal shocks, moves every spot to
/// `S·exp((r − σ²/2)·h + σ·√h·z)`, shortens every expiry by `h` and
/// reprices the book with Black-Scholes. Strike, rate, volatility, type and
/// quantity are unchanged.
///
/// Trial `i` draws from an RNG stream derived from `(seed, i)`, so a seeded
/// run gives identical results serially and on the Rayon pool.
///
/// # Examples
///
/// ```
/// use pricer_models::instruments::OptionType;
/// use pricer_risk::monte_carlo::{MonteCarloConfig, MonteCarloEngine};
/// use pricer_risk::portfolio::{Portfolio, Position};
///
/// let mut portfolio = Portfolio::new();
/// portfolio.add_position(Position::new(100.0, 100.0, 1.0, 0.05, 0.2, OptionType::Call, 10.0));
///
/// let config = MonteCarloConfig::builder()
///     .n_sims(2_000)
///     .horizon(0.1)
///     .seed(42)
///     .build()
///     .unwrap();
/// let summary = MonteCarloEngine::new(config).simulate(&portfolio).unwrap();
///
/// assert!(summary.var_99 <= summary.var_95);
/// assert!(summary.std > 0.0);
/// ```
#[derive(Clone, Debug)]
pub struct MonteCarloEngine {
    config: MonteCarloConfig,
}

impl MonteCarloEngine {
    /// Creates an engine from a validated configuration.
    pub fn new(config: MonteCarloConfig) -> Self {
        Self { config }
    }

    /// Returns the configuration.
    pub fn config(&self) -> &MonteCarloConfig {
        &self.config
    }

    fn resolve_seed(&self) -> u64 {
        self.config.seed().unwrap_or_else(PricerRng::entropy_seed)
    }

    /// Runs the simulation and summarises the trial values.
    ///
    /// # Errors
    ///
    /// - [`RiskError::Position`] if a position cannot be valued
    /// - [`RiskError::InvalidHorizon`] if the horizon is not shorter than
    ///   every expiry
    ///
    /// Both are raised before any trial runs.
    #[instrument(
        skip_all,
        fields(
            n_sims = self.config.n_sims(),
            horizon = self.config.horizon(),
            positions = portfolio.len()
        )
    )]
    pub fn simulate(&self, portfolio: &Portfolio) -> Result<SimulationSummary, RiskError> {
        let seed = self.resolve_seed();
        let values = self.run(portfolio, seed)?;

        let summary = SimulationSummary::from_values(&values, self.config.horizon(), seed)
            .ok_or(ConfigError::InvalidSimCount {
                n_sims: values.len(),
                max: MAX_SIMS,
            })?;

        info!(
            mean = summary.mean,
            std = summary.std,
            var_95 = summary.var_95,
            var_99 = summary.var_99,
            "simulation completed"
        );
        Ok(summary)
    }

    /// Per-trial portfolio values, in trial order.
    pub fn simulate_values(&self, portfolio: &Portfolio) -> Result<Vec<f64>, RiskError> {
        self.run(portfolio, self.resolve_seed())
    }

    fn run(&self, portfolio: &Portfolio, seed: u64) -> Result<Vec<f64>, RiskError> {
        self.config.validate()?;

        let plan = TrialPlan::new(portfolio, self.config.horizon(), self.config.shock_model())?;
        debug!(
            seed,
            shock_model = ?self.config.shock_model(),
            n_shocks = plan.n_shocks,
            "starting trials"
        );

        map_indices(self.config.n_sims(), self.config.parallel(), |trial| {
            plan.trial_value(seed, trial)
        })
        .into_iter()
        .collect()
    }
}
