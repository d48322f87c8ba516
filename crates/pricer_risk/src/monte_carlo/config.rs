//! Monte Carlo simulation configuration.

use crate::error::ConfigError;
use crate::parallel::ParallelConfig;

/// Maximum number of simulation trials allowed.
pub const MAX_SIMS: usize = 10_000_000;

/// How random shocks are assigned to positions within one trial.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum ShockModel {
    /// One independent draw per position per trial.
    ///
    /// Positions on the same underlying move independently.
    #[default]
    PerPosition,

    /// One draw per distinct underlying per trial.
    ///
    /// Positions sharing an [`UnderlyingId`](crate::portfolio::UnderlyingId)
    /// see the same shock.
    PerUnderlying,
}

/// Monte Carlo simulation configuration.
///
/// Immutable configuration specifying simulation parameters.
/// Use [`MonteCarloConfigBuilder`] to construct instances.
///
/// # Examples
///
/// ```rust
/// use pricer_risk::monte_carlo::{MonteCarloConfig, ShockModel};
///
/// let config = MonteCarloConfig::builder()
///     .n_sims(10_000)
///     .horizon(10.0 / 252.0)
///     .seed(42)
///     .build()
///     .expect("valid configuration");
///
/// assert_eq!(config.n_sims(), 10_000);
/// assert_eq!(config.shock_model(), ShockModel::PerPosition);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct MonteCarloConfig {
    /// Number of simulation trials.
    n_sims: usize,
    /// Horizon in years.
    horizon: f64,
    /// Optional base seed for reproducibility.
    seed: Option<u64>,
    /// Shock assignment.
    shock_model: ShockModel,
    /// Parallel execution thresholds.
    parallel: ParallelConfig,
}

impl MonteCarloConfig {
    /// Creates a new configuration builder.
    #[inline]
    pub fn builder() -> MonteCarloConfigBuilder {
        MonteCarloConfigBuilder::default()
    }

    /// Returns the number of simulation trials.
    #[inline]
    pub fn n_sims(&self) -> usize {
        self.n_sims
    }

    /// Returns the horizon in years.
    #[inline]
    pub fn horizon(&self) -> f64 {
        self.horizon
    }

    /// Returns the optional seed for reproducibility.
    #[inline]
    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    /// Returns the shock model.
    #[inline]
    pub fn shock_model(&self) -> ShockModel {
        self.shock_model
    }

    /// Returns the parallel execution thresholds.
    #[inline]
    pub fn parallel(&self) -> &ParallelConfig {
        &self.parallel
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if:
    /// - `n_sims` is 0 or greater than 10,000,000
    /// - `horizon` is not finite or not strictly positive
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.n_sims == 0 || self.n_sims > MAX_SIMS {
            return Err(ConfigError::InvalidSimCount {
                n_sims: self.n_sims,
                max: MAX_SIMS,
            });
        }
        if !self.horizon.is_finite() || self.horizon <= 0.0 {
            return Err(ConfigError::InvalidParameter {
                name: "horizon",
                value: format!("must be positive and finite, got {}", self.horizon),
            });
        }
        Ok(())
    }
}

/// Builder for [`MonteCarloConfig`].
#[derive(Clone, Debug, Default)]
pub struct MonteCarloConfigBuilder {
    n_sims: Option<usize>,
    horizon: Option<f64>,
    seed: Option<u64>,
    shock_model: ShockModel,
    parallel: ParallelConfig,
}

impl MonteCarloConfigBuilder {
    /// Sets the number of trials, in [1, 10_000_000].
    #[inline]
    pub fn n_sims(mut self, n_sims: usize) -> Self {
        self.n_sims = Some(n_sims);
        self
    }

    /// Sets the horizon in years.
    #[inline]
    pub fn horizon(mut self, horizon: f64) -> Self {
        self.horizon = Some(horizon);
        self
    }

    /// Sets the base seed for reproducibility.
    #[inline]
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Sets an optional base seed; `None` draws one from entropy per run.
    #[inline]
    pub fn maybe_seed(mut self, seed: Option<u64>) -> Self {
        self.seed = seed;
        self
    }

    /// Sets the shock model.
    #[inline]
    pub fn shock_model(mut self, shock_model: ShockModel) -> Self {
        self.shock_model = shock_model;
        self
    }

    /// Sets the parallel execution thresholds.
    #[inline]
    pub fn parallel(mut self, parallel: ParallelConfig) -> Self {
        self.parallel = parallel;
        self
    }

    /// Builds the configuration.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if `n_sims` or `horizon` is missing or invalid.
    pub fn build(self) -> Result<MonteCarloConfig, ConfigError> {
        let n_sims = self.n_sims.ok_or(ConfigError::InvalidParameter {
            name: "n_sims",
            value: "must be specified".to_string(),
        })?;

        let horizon = self.horizon.ok_or(ConfigError::InvalidParameter {
            name: "horizon",
            value: "must be specified".to_string(),
        })?;

        let config = MonteCarloConfig {
            n_sims,
            horizon,
            seed: self.seed,
            shock_model: self.shock_model,
            parallel: self.parallel,
        };

        config.validate()?;
        Ok(config)
    }
}
