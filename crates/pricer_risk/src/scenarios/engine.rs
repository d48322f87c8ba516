//! Scenario execution engine.
//!
//! Runs registered scenarios against a portfolio and keeps their results.

use pricer_models::analytical::OptionAnalytics;
use tracing::{debug, info, instrument};

use super::shifts::Scenario;
use crate::error::RiskError;
use crate::portfolio::{Portfolio, Valuation};

/// P&L result from a single scenario.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ScenarioPnL {
    /// Scenario name
    pub scenario_name: String,
    /// Base value before scenario
    pub base_value: f64,
    /// Stressed value after scenario
    pub stressed_value: f64,
    /// P&L (stressed - base)
    pub pnl: f64,
    /// P&L as a fraction of |base|
    pub pnl_pct: f64,
}

impl ScenarioPnL {
    /// Create a new scenario P&L result.
    pub fn new(scenario_name: impl Into<String>, base_value: f64, stressed_value: f64) -> Self {
        let pnl = stressed_value - base_value;
        let pnl_pct = if base_value != 0.0 {
            pnl / base_value.abs()
        } else {
            0.0
        };
        Self {
            scenario_name: scenario_name.into(),
            base_value,
            stressed_value,
            pnl,
            pnl_pct,
        }
    }

    /// Check if P&L is a loss (negative).
    pub fn is_loss(&self) -> bool {
        self.pnl < 0.0
    }

    /// Check if P&L is a gain (positive).
    pub fn is_gain(&self) -> bool {
        self.pnl > 0.0
    }
}

/// Complete result from scenario execution.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ScenarioResult {
    /// Scenario that was executed
    pub scenario_name: String,
    /// Portfolio-level P&L
    pub portfolio_pnl: ScenarioPnL,
    /// Value and Greeks after the shift
    pub stressed: Valuation,
    /// P&L by position, in portfolio order
    pub position_pnls: Vec<f64>,
}

impl ScenarioResult {
    /// Get position P&L count.
    pub fn position_count(&self) -> usize {
        self.position_pnls.len()
    }

    /// Index and P&L of the worst position.
    pub fn worst_position_pnl(&self) -> Option<(usize, f64)> {
        self.position_pnls
            .iter()
            .copied()
            .enumerate()
            .min_by(|a, b| a.1.partial_cmp(&b.1).unwrap_or(std::cmp::Ordering::Equal))
    }
}

/// Engine for executing scenarios against portfolios.
///
/// # Examples
///
/// ```
/// use pricer_models::instruments::OptionType;
/// use pricer_risk::portfolio::{Portfolio, Position};
/// use pricer_risk::scenarios::{PresetScenarioType, ScenarioEngine};
///
/// let mut portfolio = Portfolio::new();
/// portfolio.add_position(Position::new(100.0, 100.0, 1.0, 0.05, 0.2, OptionType::Call, 10.0));
///
/// let mut engine = ScenarioEngine::new();
/// engine.add_presets(PresetScenarioType::all());
/// engine.execute_all(&portfolio).unwrap();
///
/// let worst = engine.worst_case().unwrap();
/// assert_eq!(worst.scenario_name, "Spot -20%");
/// ```
#[derive(Clone, Debug, Default)]
pub struct ScenarioEngine {
    /// Registered scenarios
    scenarios: Vec<Scenario>,
    /// Results from executed scenarios
    results: Vec<ScenarioResult>,
}

impl ScenarioEngine {
    /// Create a new scenario engine.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a scenario.
    pub fn add_scenario(&mut self, scenario: Scenario) {
        self.scenarios.push(scenario);
    }

    /// Add multiple scenarios.
    pub fn add_scenarios(&mut self, scenarios: impl IntoIterator<Item = Scenario>) {
        self.scenarios.extend(scenarios);
    }

    /// Add preset scenarios.
    pub fn add_presets(&mut self, presets: impl IntoIterator<Item = super::PresetScenarioType>) {
        self.scenarios
            .extend(presets.into_iter().map(|preset| preset.scenario()));
    }

    /// Get registered scenarios.
    pub fn scenarios(&self) -> &[Scenario] {
        &self.scenarios
    }

    /// Get scenario count.
    pub fn scenario_count(&self) -> usize {
        self.scenarios.len()
    }

    /// Execute a single scenario and record its result.
    ///
    /// # Errors
    ///
    /// Fails on the first position that cannot be valued at base or after
    /// the shift. Nothing is recorded on failure.
    #[instrument(skip_all, fields(scenario = %scenario.name()))]
    pub fn execute_scenario(
        &mut self,
        portfolio: &Portfolio,
        scenario: &Scenario,
    ) -> Result<ScenarioResult, RiskError> {
        let base = portfolio.position_analytics()?;
        let result = run_scenario(portfolio, &base, scenario)?;
        self.results.push(result.clone());
        Ok(result)
    }

    /// Execute all registered scenarios.
    ///
    /// The base portfolio is valued once. On error no results from this
    /// call are recorded.
    #[instrument(skip_all, fields(scenarios = self.scenarios.len(), positions = portfolio.len()))]
    pub fn execute_all(&mut self, portfolio: &Portfolio) -> Result<Vec<ScenarioResult>, RiskError> {
        let base = portfolio.position_analytics()?;

        let results = self
            .scenarios
            .iter()
            .map(|scenario| run_scenario(portfolio, &base, scenario))
            .collect::<Result<Vec<_>, _>>()?;

        info!(count = results.len(), "scenario suite completed");
        self.results.extend(results.iter().cloned());
        Ok(results)
    }

    /// Get all results.
    pub fn results(&self) -> &[ScenarioResult] {
        &self.results
    }

    /// Get the worst-case scenario (largest loss).
    pub fn worst_case(&self) -> Option<&ScenarioResult> {
        self.results.iter().min_by(|a, b| {
            a.portfolio_pnl
                .pnl
                .partial_cmp(&b.portfolio_pnl.pnl)
                .unwrap_or(std::cmp::Ordering::Equal)
        })
    }

    /// Clear all results.
    pub fn clear_results(&mut self) {
        self.results.clear();
    }

    /// Clear scenarios and results.
    pub fn clear(&mut self) {
        self.scenarios.clear();
        self.results.clear();
    }
}

fn run_scenario(
    portfolio: &Portfolio,
    base: &[OptionAnalytics<f64>],
    scenario: &Scenario,
) -> Result<ScenarioResult, RiskError> {
    debug!(scenario = scenario.name(), shift = ?scenario.shift(), "executing scenario");

    let shifted_portfolio = portfolio.map(|p| scenario.shift().apply(p));
    let shifted = shifted_portfolio.position_analytics()?;

    let base_value = portfolio.aggregate(base)?.value;
    let stressed = shifted_portfolio.aggregate(&shifted)?;

    let position_pnls = portfolio
        .iter()
        .zip(base.iter().zip(&shifted))
        .map(|(position, (b, s))| position.quantity() * s.price - position.quantity() * b.price)
        .collect();

    Ok(ScenarioResult {
        scenario_name: scenario.name().to_string(),
        portfolio_pnl: ScenarioPnL::new(scenario.name(), base_value, stressed.value),
        stressed,
        position_pnls,
    })
}

#[cfg(test)]
mod tests {
    use super::super::shifts::ScenarioShift;
    use super::*;
    use crate::portfolio::Position;
    use approx::assert_relative_eq;
    use pricer_models::instruments::OptionType;

    fn book() -> Portfolio {
        let mut portfolio = Portfolio::new();
        portfolio.add_position(Position::new(100.0, 100.0, 1.0, 0.05, 0.2, OptionType::Call, 10.0));
        portfolio.add_position(Position::new(100.0, 95.0, 0.5, 0.05, 0.2, OptionType::Put, 4.0));
        portfolio
    }

    #[test]
    fn test_scenario_pnl_new() {
        let pnl = ScenarioPnL::new("Spot -1%", 1_000_000.0, 999_000.0);

        assert_eq!(pnl.scenario_name, "Spot -1%");
        assert_eq!(pnl.base_value, 1_000_000.0);
        assert_eq!(pnl.stressed_value, 999_000.0);
        assert!((pnl.pnl - (-1_000.0)).abs() < 1e-10);
        assert!((pnl.pnl_pct - (-0.001)).abs() < 1e-10);
    }

    #[test]
    fn test_scenario_pnl_zero_base() {
        let pnl = ScenarioPnL::new("Flat", 0.0, 5.0);
        assert_eq!(pnl.pnl_pct, 0.0);
        assert!(pnl.is_gain());
        assert!(!pnl.is_loss());
    }

    #[test]
    fn test_scenario_engine_new() {
        let engine = ScenarioEngine::new();
        assert_eq!(engine.scenario_count(), 0);
        assert!(engine.worst_case().is_none());
    }

    #[test]
    fn test_execute_scenario_records_result() {
        let mut engine = ScenarioEngine::new();
        let scenario = Scenario::new("Spot +5", ScenarioShift::absolute(5.0, 0.0, 0.0));

        let result = engine.execute_scenario(&book(), &scenario).unwrap();

        assert_eq!(result.scenario_name, "Spot +5");
        assert_eq!(result.position_count(), 2);
        assert_eq!(engine.results().len(), 1);
        assert_eq!(result.stressed.value, result.portfolio_pnl.stressed_value);
    }

    #[test]
    fn test_position_pnls_sum_to_portfolio_pnl() {
        let mut engine = ScenarioEngine::new();
        let scenario = Scenario::new("Mixed", ScenarioShift::absolute(-3.0, 0.04, -0.01));
        let result = engine.execute_scenario(&book(), &scenario).unwrap();

        let total: f64 = result.position_pnls.iter().sum();
        assert_relative_eq!(total, result.portfolio_pnl.pnl, epsilon = 1e-9);
        assert!(result.position_pnls[0] < 0.0);
        assert!(result.position_pnls[1] > 0.0);
        assert_eq!(result.worst_position_pnl().map(|(i, _)| i), Some(0));
    }

    #[test]
    fn test_execute_all_and_worst_case() {
        let mut engine = ScenarioEngine::new();
        engine.add_scenario(Scenario::new("Small", ScenarioShift::absolute(-1.0, 0.0, 0.0)));
        engine.add_scenario(Scenario::new("Large", ScenarioShift::absolute(-15.0, 0.0, 0.0)));
        engine.add_scenario(Scenario::new("Up", ScenarioShift::absolute(15.0, 0.0, 0.0)));

        let results = engine.execute_all(&book()).unwrap();

        assert_eq!(results.len(), 3);
        assert_eq!(engine.results().len(), 3);
        assert_eq!(engine.worst_case().unwrap().scenario_name, "Large");
    }

    #[test]
    fn test_execute_all_fails_without_recording() {
        let mut portfolio = book();
        portfolio.add_position(Position::new(100.0, 100.0, 0.0, 0.05, 0.2, OptionType::Call, 1.0));

        let mut engine = ScenarioEngine::new();
        engine.add_scenario(Scenario::new("Any", ScenarioShift::none()));

        let err = engine.execute_all(&portfolio).unwrap_err();
        assert_eq!(err.position_index(), Some(2));
        assert!(engine.results().is_empty());
    }

    #[test]
    fn test_scenario_engine_clear() {
        let mut engine = ScenarioEngine::new();
        engine.add_scenario(Scenario::new("Test", ScenarioShift::none()));
        engine.execute_all(&book()).unwrap();

        engine.clear_results();
        assert!(engine.results().is_empty());
        assert_eq!(engine.scenario_count(), 1);

        engine.clear();
        assert_eq!(engine.scenario_count(), 0);
    }
}
