//! optrisk - Command Line Risk for European Option Books
//!
//! Operational entry point for Black-Scholes portfolio risk.
//!
//! # Commands
//!
//! - `optrisk greeks --portfolio <file>` - Value and Greeks per position and in total
//! - `optrisk scenario --portfolio <file> --d-spot -5` - P&L under an absolute shift
//! - `optrisk stress --portfolio <file>` - Preset stress scenarios and the worst case
//! - `optrisk simulate --portfolio <file>` - Monte Carlo value distribution and VaR
//! - `optrisk margin --portfolio <file>` - Delta-based margin
//! - `optrisk check` - Validate configuration and quotes
//!
//! Logging goes to stderr and honours `RUST_LOG`; results go to stdout.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use pricer_risk::scenarios::PresetScenarioType;
use tracing::{debug, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod commands;
mod config;
mod context;
mod error;
mod output;

pub use error::{CliError, Result};

use commands::scenario::ShiftArgs;
use commands::simulate::{ShockArg, SimulateArgs};
use config::RiskConfig;
use context::{MarketOverrides, RiskContext};
use output::OutputFormat;

/// Black-Scholes risk for European option portfolios
#[derive(Parser, Debug)]
#[command(name = "optrisk")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Configuration file path
    #[arg(short, long, global = true, default_value = "optrisk.toml")]
    config: PathBuf,

    /// Portfolio file (JSON array of position records)
    #[arg(short, long, global = true)]
    portfolio: Option<PathBuf>,

    /// Ticker whose configured quote is used
    #[arg(short, long, global = true)]
    ticker: Option<String>,

    /// Override the underlying price
    #[arg(long, global = true)]
    spot: Option<f64>,

    /// Override the volatility
    #[arg(long, global = true)]
    vol: Option<f64>,

    /// Override the risk-free rate
    #[arg(long, global = true)]
    rate: Option<f64>,

    /// Output format
    #[arg(short, long, global = true, value_enum, default_value_t = OutputFormat::Table)]
    format: OutputFormat,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Value and Greeks per position and for the book
    Greeks,

    /// Revalue the book under an absolute market shift
    Scenario {
        /// Underlying price change
        #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
        d_spot: f64,

        /// Volatility change
        #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
        d_vol: f64,

        /// Rate change
        #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
        d_rate: f64,
    },

    /// Run preset stress scenarios
    Stress {
        /// Presets to run (e.g. market_crash); all presets when omitted
        #[arg(long = "preset", value_parser = commands::stress::parse_preset)]
        presets: Vec<PresetScenarioType>,
    },

    /// Monte Carlo distribution of book value at a horizon
    Simulate {
        /// Number of trials
        #[arg(short = 'n', long)]
        n_sims: Option<usize>,

        /// Horizon in years
        #[arg(long)]
        horizon: Option<f64>,

        /// Base seed; omit in config and here for a fresh entropy seed
        #[arg(long)]
        seed: Option<u64>,

        /// How shocks are shared between positions
        #[arg(long, value_enum)]
        shock_model: Option<ShockArg>,
    },

    /// Delta-based margin requirement
    Margin {
        /// Volatility add-on applied before computing deltas
        #[arg(long, allow_negative_numbers = true)]
        stress_scenario: Option<f64>,

        /// Apply the market crash move to the quote first
        #[arg(long)]
        crash: bool,
    },

    /// Check configuration and quotes
    Check,
}

fn init_tracing(config: &RiskConfig, verbose: bool) {
    let fallback = if verbose { "debug" } else { config.log_level.as_str() };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();
}

fn run(cli: Cli) -> Result<()> {
    let config = RiskConfig::load_or_default(&cli.config)?.with_env_override();
    config.validate()?;

    init_tracing(&config, cli.verbose);
    debug!(path = %cli.config.display(), "configuration loaded");

    if cli.verbose {
        info!("Verbose mode enabled");
    }

    if let Commands::Check = cli.command {
        return commands::check::run(&config);
    }

    let overrides = MarketOverrides {
        ticker: cli.ticker,
        spot: cli.spot,
        vol: cli.vol,
        rate: cli.rate,
    };
    let ctx = RiskContext::load(&config, cli.portfolio.as_deref(), &overrides)?;

    match cli.command {
        Commands::Greeks => commands::greeks::run(&ctx, cli.format),
        Commands::Scenario {
            d_spot,
            d_vol,
            d_rate,
        } => commands::scenario::run(
            &ctx,
            ShiftArgs {
                d_spot,
                d_vol,
                d_rate,
            },
            cli.format,
        ),
        Commands::Stress { presets } => commands::stress::run(&ctx, presets, cli.format),
        Commands::Simulate {
            n_sims,
            horizon,
            seed,
            shock_model,
        } => commands::simulate::run(
            &ctx,
            &config.monte_carlo,
            &SimulateArgs {
                n_sims,
                horizon,
                seed,
                shock_model,
            },
            cli.format,
        ),
        Commands::Margin {
            stress_scenario,
            crash,
        } => commands::margin::run(&ctx, &config, stress_scenario, crash, cli.format),
        Commands::Check => commands::check::run(&config),
    }
}

fn main() -> ExitCode {
    match run(Cli::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {}", e);
            ExitCode::FAILURE
        }
    }
}
