//! Scenario command implementation
//!
//! Revalues the book under one absolute spot, volatility and rate shift.

use pricer_risk::scenarios::{ScenarioPnL, ScenarioShift};
use tracing::info;

use crate::context::RiskContext;
use crate::output::{num, print_json, OutputFormat};
use crate::Result;

/// Absolute market moves given on the command line.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ShiftArgs {
    /// Underlying price change
    pub d_spot: f64,
    /// Volatility change
    pub d_vol: f64,
    /// Rate change
    pub d_rate: f64,
}

impl ShiftArgs {
    fn to_shift(self) -> ScenarioShift {
        ScenarioShift::absolute(self.d_spot, self.d_vol, self.d_rate)
    }
}

/// Run the scenario command
pub fn run(ctx: &RiskContext, shift: ShiftArgs, format: OutputFormat) -> Result<()> {
    let portfolio = ctx.portfolio();
    let pnl = portfolio.scenario_shift(shift.d_spot, shift.d_vol, shift.d_rate)?;
    info!(pnl = pnl.pnl, "scenario evaluated");

    match format {
        OutputFormat::Json => {
            let stressed = portfolio.stress(&shift.to_shift())?;
            print_json(&serde_json::json!({
                "shift": shift_json(shift),
                "pnl": pnl,
                "stressed": stressed,
            }))
        }
        OutputFormat::Table => {
            println!();
            for line in table_lines(shift, &pnl) {
                println!("{}", line);
            }
            Ok(())
        }
    }
}

/// Table rendering; `pnl_pct` is a fraction and is shown in percent.
fn table_lines(shift: ShiftArgs, pnl: &ScenarioPnL) -> Vec<String> {
    let mut lines = vec![
        format!(
            "Scenario: ΔS = {:+}  Δσ = {:+}  Δr = {:+}",
            shift.d_spot, shift.d_vol, shift.d_rate
        ),
        format!("  Base value:     {:>14}", num(pnl.base_value, 4)),
        format!("  Stressed value: {:>14}", num(pnl.stressed_value, 4)),
        format!("  P&L:            {:>14}", num(pnl.pnl, 4)),
    ];
    if pnl.pnl_pct.is_finite() {
        lines.push(format!("  P&L %:          {:>13}%", num(pnl.pnl_pct * 100.0, 2)));
    }
    lines
}

fn shift_json(shift: ShiftArgs) -> serde_json::Value {
    serde_json::json!({
        "d_spot": shift.d_spot,
        "d_vol": shift.d_vol,
        "d_rate": shift.d_rate,
    })
}
