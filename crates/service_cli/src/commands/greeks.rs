//! Greeks command implementation
//!
//! Prints per-position and aggregate price and Greeks.

use serde_json::json;
use tracing::info;

use crate::context::RiskContext;
use crate::output::{num, print_footer, print_header, print_json, print_row, OutputFormat};
use crate::Result;

const COLUMNS: [(&str, usize); 10] = [
    ("#", 3),
    ("Type", 4),
    ("Strike", 9),
    ("Qty", 8),
    ("Value", 11),
    ("Delta", 9),
    ("Gamma", 9),
    ("Vega/pt", 9),
    ("Theta/d", 9),
    ("Rho/pt", 9),
];

/// Run the greeks command
pub fn run(ctx: &RiskContext, format: OutputFormat) -> Result<()> {
    let portfolio = ctx.portfolio();
    let risks = portfolio.position_risks()?;
    let total = portfolio.valuation()?;
    info!(value = total.value, delta = total.greeks.delta, "portfolio valued");

    match format {
        OutputFormat::Json => print_json(&json!({
            "ticker": ctx.ticker,
            "quote": ctx.quote,
            "rate": ctx.rate,
            "positions": risks,
            "total": total,
        })),
        OutputFormat::Table => {
            println!(
                "\n{}  S = {:.2}  σ = {:.4}  r = {:.4}",
                ctx.ticker,
                ctx.quote.underlying_price(),
                ctx.quote.volatility(),
                ctx.rate
            );
            print_header(&COLUMNS);
            for risk in &risks {
                let g = &risk.exposure.greeks;
                print_row(
                    &COLUMNS,
                    &[
                        risk.index.to_string(),
                        risk.option_type.to_string(),
                        num(risk.strike, 2),
                        num(risk.quantity, 2),
                        num(risk.exposure.price, 2),
                        num(g.delta, 4),
                        num(g.gamma, 4),
                        num(g.vega_per_vol_point(), 4),
                        num(g.theta_per_day(), 4),
                        num(g.rho_per_rate_point(), 4),
                    ],
                );
            }
            let g = &total.greeks;
            print_row(
                &COLUMNS,
                &[
                    "Σ".to_string(),
                    String::new(),
                    String::new(),
                    String::new(),
                    num(total.value, 2),
                    num(g.delta, 4),
                    num(g.gamma, 4),
                    num(g.vega_per_vol_point(), 4),
                    num(g.theta_per_day(), 4),
                    num(g.rho_per_rate_point(), 4),
                ],
            );
            print_footer(&COLUMNS);
            Ok(())
        }
    }
}
