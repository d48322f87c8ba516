//! Simulate command implementation
//!
//! Monte Carlo distribution of portfolio value at a horizon.

use clap::ValueEnum;
use pricer_risk::monte_carlo::{MonteCarloConfig, MonteCarloEngine, ShockModel};
use pricer_risk::ParallelConfig;
use tracing::info;

use crate::config::MonteCarloSettings;
use crate::context::RiskContext;
use crate::output::{num, print_json, OutputFormat};
use crate::Result;

/// Shock assignment selectable on the command line.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ShockArg {
    /// Independent draw for every position
    PerPosition,
    /// Shared draw for positions on the same underlying
    PerUnderlying,
}

impl From<ShockArg> for ShockModel {
    fn from(arg: ShockArg) -> Self {
        match arg {
            ShockArg::PerPosition => ShockModel::PerPosition,
            ShockArg::PerUnderlying => ShockModel::PerUnderlying,
        }
    }
}

/// Command line overrides of the `[monte_carlo]` settings.
#[derive(Clone, Debug, Default)]
pub struct SimulateArgs {
    /// Number of trials (`--n-sims`)
    pub n_sims: Option<usize>,
    /// Horizon in years (`--horizon`)
    pub horizon: Option<f64>,
    /// Base seed (`--seed`)
    pub seed: Option<u64>,
    /// Shock assignment (`--shock-model`)
    pub shock_model: Option<ShockArg>,
}

fn build_config(
    settings: &MonteCarloSettings,
    args: &SimulateArgs,
    parallel: ParallelConfig,
) -> Result<MonteCarloConfig> {
    let config = MonteCarloConfig::builder()
        .n_sims(args.n_sims.unwrap_or(settings.n_sims))
        .horizon(args.horizon.unwrap_or(settings.horizon))
        .maybe_seed(args.seed.or(settings.seed))
        .shock_model(args.shock_model.map(Into::into).unwrap_or(settings.shock_model))
        .parallel(parallel)
        .build()?;
    Ok(config)
}

/// Run the simulate command
pub fn run(
    ctx: &RiskContext,
    settings: &MonteCarloSettings,
    args: &SimulateArgs,
    format: OutputFormat,
) -> Result<()> {
    let config = build_config(settings, args, ctx.parallel.clone())?;
    let engine = MonteCarloEngine::new(config);
    let summary = engine.simulate(&ctx.portfolio())?;
    info!(seed = summary.seed, "simulation finished");

    match format {
        OutputFormat::Json => print_json(&summary),
        OutputFormat::Table => {
            println!(
                "\nMonte Carlo: {} trials, horizon {} years, seed {}",
                summary.n_sims, summary.horizon, summary.seed
            );
            println!(
                "  Mean value: {:>14}  (±{} at 95%)",
                num(summary.mean, 4),
                num(summary.confidence_95(), 4)
            );
            println!("  Std dev:    {:>14}", num(summary.std, 4));
            println!("  VaR 95%:    {:>14}", num(summary.var_95, 4));
            println!("  VaR 99%:    {:>14}", num(summary.var_99, 4));
            Ok(())
        }
    }
}
