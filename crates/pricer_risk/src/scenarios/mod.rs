//! Scenario analysis for option portfolios.
//!
//! This module provides infrastructure for:
//! - Market shifts of spot, volatility and rate
//! - Deterministic revaluation under a shift
//! - Scenario definition and execution
//! - Preset stress scenarios
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────┐
//! │              Scenario Engine                 │
//! ├──────────────────────────────────────────────┤
//! │  ScenarioShift   - Spot, vol and rate moves  │
//! │  stress          - Revalue under a shift     │
//! │  Scenario        - Named shift               │
//! │  ScenarioEngine  - Execution & results       │
//! └──────────────────────────────────────────────┘
//! ```

mod engine;
mod presets;
mod shifts;
mod stress;

pub use engine::{ScenarioEngine, ScenarioPnL, ScenarioResult};
pub use presets::PresetScenarioType;
pub use shifts::{Scenario, ScenarioShift, Shift, VOLATILITY_FLOOR};
pub use stress::{scenario_shift, stress};
