//! Stress command implementation
//!
//! Runs preset scenarios through the scenario engine and reports the
//! worst case.

use pricer_risk::scenarios::{PresetScenarioType, ScenarioEngine};
use tracing::info;

use crate::context::RiskContext;
use crate::output::{num, print_footer, print_header, print_json, print_row, OutputFormat};
use crate::Result;

const COLUMNS: [(&str, usize); 5] = [
    ("Scenario", 14),
    ("Base", 12),
    ("Stressed", 12),
    ("P&L", 12),
    ("Worst pos", 9),
];

/// Parses a preset from its snake_case key, e.g. `market_crash`.
pub fn parse_preset(s: &str) -> std::result::Result<PresetScenarioType, String> {
    let key = s.trim().to_ascii_lowercase().replace('-', "_");
    PresetScenarioType::all()
        .into_iter()
        .find(|p| preset_key(*p) == key)
        .ok_or_else(|| {
            let known: Vec<&str> = PresetScenarioType::all().into_iter().map(preset_key).collect();
            format!("unknown preset '{}', expected one of: {}", s, known.join(", "))
        })
}

fn preset_key(preset: PresetScenarioType) -> &'static str {
    match preset {
        PresetScenarioType::SpotUp10Pct => "spot_up_10_pct",
        PresetScenarioType::SpotDown10Pct => "spot_down_10_pct",
        PresetScenarioType::SpotDown20Pct => "spot_down_20_pct",
        PresetScenarioType::VolUp5Pts => "vol_up_5_pts",
        PresetScenarioType::VolDown5Pts => "vol_down_5_pts",
        PresetScenarioType::RateUp100bp => "rate_up_100bp",
        PresetScenarioType::RateDown100bp => "rate_down_100bp",
        PresetScenarioType::MarketCrash => "market_crash",
    }
}

/// Run the stress command
pub fn run(
    ctx: &RiskContext,
    presets: Vec<PresetScenarioType>,
    format: OutputFormat,
) -> Result<()> {
    let presets = if presets.is_empty() {
        PresetScenarioType::all()
    } else {
        presets
    };

    let mut engine = ScenarioEngine::new();
    engine.add_presets(presets);
    let results = engine.execute_all(&ctx.portfolio())?;
    let worst = engine.worst_case();

    if let Some(w) = worst {
        info!(scenario = %w.scenario_name, pnl = w.portfolio_pnl.pnl, "worst case");
    }

    match format {
        OutputFormat::Json => print_json(&serde_json::json!({
            "results": results,
            "worst_case": worst.map(|w| &w.scenario_name),
        })),
        OutputFormat::Table => {
            println!();
            print_header(&COLUMNS);
            for r in &results {
                let worst_position = r
                    .worst_position_pnl()
                    .map(|(i, _)| i.to_string())
                    .unwrap_or_default();
                print_row(
                    &COLUMNS,
                    &[
                        r.scenario_name.clone(),
                        num(r.portfolio_pnl.base_value, 2),
                        num(r.portfolio_pnl.stressed_value, 2),
                        num(r.portfolio_pnl.pnl, 2),
                        worst_position,
                    ],
                );
            }
            print_footer(&COLUMNS);
            if let Some(w) = worst {
                println!("Worst case: {} ({})", w.scenario_name, num(w.portfolio_pnl.pnl, 2));
            }
            Ok(())
        }
    }
}
