//! Margin command implementation
//!
//! Delta-based margin for the stored records at the resolved quote.

use pricer_risk::margin::{MarginCalculator, MarginConfig, MarginReport, MarginStress};
use tracing::info;

use crate::config::RiskConfig;
use crate::context::RiskContext;
use crate::output::{num, print_footer, print_header, print_json, print_row, OutputFormat};
use crate::Result;

const COLUMNS: [(&str, usize); 6] = [
    ("#", 3),
    ("Type", 4),
    ("Strike", 9),
    ("Qty", 8),
    ("Delta", 9),
    ("Margin", 12),
];

/// Market stress applied before computing deltas.
///
/// Plain mode adds `stress_scenario` (or the configured default) to the
/// quoted volatility. Crash mode applies [`MarginStress::market_crash`] and
/// only adds a volatility shock when one is given explicitly.
fn resolve_stress(
    config: &RiskConfig,
    stress_scenario: Option<f64>,
    crash: bool,
) -> MarginStress {
    if crash {
        let base = MarginStress::market_crash();
        MarginStress {
            vol_shock: stress_scenario.unwrap_or(base.vol_shock),
            ..base
        }
    } else {
        MarginStress {
            vol_shock: stress_scenario.unwrap_or(config.margin.stress_scenario),
            ..MarginStress::default()
        }
    }
}

fn margin_report(
    ctx: &RiskContext,
    config: &RiskConfig,
    stress: &MarginStress,
) -> Result<MarginReport> {
    let margin_config = MarginConfig {
        risk_free_rate: ctx.rate,
        ..config.margin_config()
    };
    let calculator =
        MarginCalculator::new(margin_config)?.with_parallel_config(ctx.parallel.clone());

    Ok(calculator.margin_breakdown(
        &ctx.records,
        ctx.quote.underlying_price() * stress.spot_multiplier,
        ctx.quote.volatility() * stress.vol_multiplier,
        stress.vol_shock,
    )?)
}

/// Run the margin command
pub fn run(
    ctx: &RiskContext,
    config: &RiskConfig,
    stress_scenario: Option<f64>,
    crash: bool,
    format: OutputFormat,
) -> Result<()> {
    let stress = resolve_stress(config, stress_scenario, crash);
    let report = margin_report(ctx, config, &stress)?;
    info!(total = report.total, records = ctx.records.len(), "margin computed");

    match format {
        OutputFormat::Json => print_json(&serde_json::json!({
            "ticker": ctx.ticker,
            "stress": stress,
            "report": report,
        })),
        OutputFormat::Table => {
            println!(
                "\nMargin {}  S = {:.2}  σ = {:.4}  stress = {:+}",
                ctx.ticker,
                ctx.quote.underlying_price() * stress.spot_multiplier,
                ctx.quote.volatility() * stress.vol_multiplier,
                stress.vol_shock
            );
            print_header(&COLUMNS);
            for (position, record) in report.positions.iter().zip(&ctx.records) {
                print_row(
                    &COLUMNS,
                    &[
                        position.index.to_string(),
                        record.option_type.to_string(),
                        num(record.strike, 2),
                        num(record.quantity, 2),
                        num(position.delta, 4),
                        num(position.margin, 2),
                    ],
                );
            }
            print_footer(&COLUMNS);
            println!("Total margin: {}", num(report.total, 2));
            Ok(())
        }
    }
}
