//! Preset scenarios for common stress tests.
//!
//! Provides ready-to-use scenarios for typical option book analysis:
//! - Spot moves (±10%, -20%)
//! - Volatility moves (±5 points)
//! - Parallel rate shifts (±100bp)
//! - Market crash (spot -10%, volatility ×1.5)

use super::shifts::{Scenario, ScenarioShift, Shift};

/// Types of preset scenarios.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum PresetScenarioType {
    /// Underlying +10%
    SpotUp10Pct,
    /// Underlying -10%
    SpotDown10Pct,
    /// Underlying -20%
    SpotDown20Pct,
    /// Volatility +5 points
    VolUp5Pts,
    /// Volatility -5 points
    VolDown5Pts,
    /// Interest rate +100bp parallel shift
    RateUp100bp,
    /// Interest rate -100bp parallel shift
    RateDown100bp,
    /// Underlying -10% with volatility up by half
    MarketCrash,
}

impl PresetScenarioType {
    /// Get all preset scenarios.
    pub fn all() -> Vec<Self> {
        vec![
            Self::SpotUp10Pct,
            Self::SpotDown10Pct,
            Self::SpotDown20Pct,
            Self::VolUp5Pts,
            Self::VolDown5Pts,
            Self::RateUp100bp,
            Self::RateDown100bp,
            Self::MarketCrash,
        ]
    }

    /// Get all stress scenarios.
    pub fn stress_scenarios() -> Vec<Self> {
        vec![
            Self::SpotDown20Pct,
            Self::VolUp5Pts,
            Self::RateUp100bp,
            Self::MarketCrash,
        ]
    }

    /// Get human-readable name.
    pub fn name(&self) -> &'static str {
        match self {
            Self::SpotUp10Pct => "Spot +10%",
            Self::SpotDown10Pct => "Spot -10%",
            Self::SpotDown20Pct => "Spot -20%",
            Self::VolUp5Pts => "Vol +5pts",
            Self::VolDown5Pts => "Vol -5pts",
            Self::RateUp100bp => "IR +100bp",
            Self::RateDown100bp => "IR -100bp",
            Self::MarketCrash => "Market Crash",
        }
    }

    /// Get description.
    pub fn description(&self) -> &'static str {
        match self {
            Self::SpotUp10Pct => "Underlying price rises 10%",
            Self::SpotDown10Pct => "Underlying price falls 10%",
            Self::SpotDown20Pct => "Underlying price falls 20%",
            Self::VolUp5Pts => "Volatility increases 5 percentage points",
            Self::VolDown5Pts => "Volatility decreases 5 percentage points",
            Self::RateUp100bp => "Parallel interest rate shift +100 basis points",
            Self::RateDown100bp => "Parallel interest rate shift -100 basis points",
            Self::MarketCrash => "Underlying falls 10% and volatility rises 50%",
        }
    }

    /// Market shift for this preset.
    pub fn shift(&self) -> ScenarioShift {
        let none = ScenarioShift::none();
        match self {
            Self::SpotUp10Pct => none.with_spot(Shift::Relative(0.10)),
            Self::SpotDown10Pct => none.with_spot(Shift::Relative(-0.10)),
            Self::SpotDown20Pct => none.with_spot(Shift::Relative(-0.20)),
            Self::VolUp5Pts => none.with_volatility(Shift::Absolute(0.05)),
            Self::VolDown5Pts => none.with_volatility(Shift::Absolute(-0.05)),
            Self::RateUp100bp => none.with_rate(0.01),
            Self::RateDown100bp => none.with_rate(-0.01),
            Self::MarketCrash => none
                .with_spot(Shift::Relative(-0.10))
                .with_volatility(Shift::Relative(0.50)),
        }
    }

    /// Named scenario for this preset.
    pub fn scenario(&self) -> Scenario {
        Scenario::new(self.name(), self.shift()).with_description(self.description())
    }
}

impl From<PresetScenarioType> for Scenario {
    fn from(preset: PresetScenarioType) -> Self {
        preset.scenario()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_presets_are_distinct() {
        let all = PresetScenarioType::all();
        assert_eq!(all.len(), 8);
        let names: std::collections::HashSet<_> = all.iter().map(|p| p.name()).collect();
        assert_eq!(names.len(), all.len());
    }

    #[test]
    fn test_stress_scenarios_subset_of_all() {
        let all = PresetScenarioType::all();
        assert!(PresetScenarioType::stress_scenarios()
            .iter()
            .all(|p| all.contains(p)));
    }

    #[test]
    fn test_market_crash_shift() {
        let shift = PresetScenarioType::MarketCrash.shift();
        assert_eq!(shift.spot, Shift::Relative(-0.10));
        assert_eq!(shift.volatility, Shift::Relative(0.50));
        assert_eq!(shift.rate, 0.0);
    }

    #[test]
    fn test_rate_presets() {
        assert_eq!(PresetScenarioType::RateUp100bp.shift().rate, 0.01);
        assert_eq!(PresetScenarioType::RateDown100bp.shift().rate, -0.01);
        assert!(PresetScenarioType::RateUp100bp.shift().spot.is_zero());
    }

    #[test]
    fn test_scenario_conversion() {
        let scenario: Scenario = PresetScenarioType::VolUp5Pts.into();
        assert_eq!(scenario.name(), "Vol +5pts");
        assert_eq!(
            scenario.description(),
            Some("Volatility increases 5 percentage points")
        );
        assert_eq!(scenario.shift().volatility, Shift::Absolute(0.05));
    }
}
