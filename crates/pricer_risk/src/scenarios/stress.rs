//! Deterministic revaluation under a market shift.

use super::engine::ScenarioPnL;
use super::shifts::ScenarioShift;
use crate::error::RiskError;
use crate::portfolio::{Portfolio, Valuation};

/// Value and Greeks of `portfolio` after applying `shift` to every position.
///
/// The input portfolio is not modified.
pub fn stress(portfolio: &Portfolio, shift: &ScenarioShift) -> Result<Valuation, RiskError> {
    portfolio.map(|p| shift.apply(p)).valuation()
}

/// Base value, shifted value and their difference for `shift`.
///
/// Both values are computed over the same position list, so
/// `pnl = stressed_value - base_value` exactly.
pub fn scenario_shift(
    portfolio: &Portfolio,
    name: &str,
    shift: &ScenarioShift,
) -> Result<ScenarioPnL, RiskError> {
    let base_value = portfolio.value()?;
    let stressed_value = stress(portfolio, shift)?.value;
    Ok(ScenarioPnL::new(name, base_value, stressed_value))
}

impl Portfolio {
    /// Revalues the portfolio under `shift`. See [`stress`].
    ///
    /// # Examples
    ///
    /// ```
    /// use pricer_models::instruments::OptionType;
    /// use pricer_risk::portfolio::{Portfolio, Position};
    /// use pricer_risk::scenarios::ScenarioShift;
    ///
    /// let mut portfolio = Portfolio::new();
    /// portfolio.add_position(Position::new(100.0, 100.0, 1.0, 0.05, 0.2, OptionType::Call, 10.0));
    ///
    /// let base = portfolio.valuation().unwrap();
    /// let unchanged = portfolio.stress(&ScenarioShift::none()).unwrap();
    /// assert_eq!(base, unchanged);
    ///
    /// let up = portfolio.stress(&ScenarioShift::absolute(5.0, 0.0, 0.0)).unwrap();
    /// assert!(up.value > base.value);
    /// ```
    pub fn stress(&self, shift: &ScenarioShift) -> Result<Valuation, RiskError> {
        stress(self, shift)
    }

    /// P&L from additive shifts of spot, volatility and rate.
    pub fn scenario_shift(
        &self,
        d_spot: f64,
        d_vol: f64,
        d_rate: f64,
    ) -> Result<ScenarioPnL, RiskError> {
        scenario_shift(self, "custom", &ScenarioShift::absolute(d_spot, d_vol, d_rate))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::portfolio::Position;
    use crate::scenarios::Shift;
    use approx::assert_relative_eq;
    use pricer_models::analytical::price_and_greeks;
    use pricer_models::instruments::OptionType;

    fn book() -> Portfolio {
        let mut portfolio = Portfolio::new();
        portfolio.add_position(Position::new(100.0, 100.0, 1.0, 0.05, 0.2, OptionType::Call, 10.0));
        portfolio.add_position(Position::new(100.0, 90.0, 0.5, 0.05, 0.25, OptionType::Put, -5.0));
        portfolio
    }

    #[test]
    fn test_zero_shift_reproduces_base_exactly() {
        let portfolio = book();
        let stressed = portfolio.stress(&ScenarioShift::none()).unwrap();
        assert_eq!(stressed.value, portfolio.value().unwrap());
        assert_eq!(stressed.greeks, portfolio.greeks().unwrap());

        let pnl = portfolio.scenario_shift(0.0, 0.0, 0.0).unwrap();
        assert_eq!(pnl.pnl, 0.0);
    }

    #[test]
    fn test_stress_matches_manual_revaluation() {
        let portfolio = book();
        let stressed = portfolio
            .stress(&ScenarioShift::absolute(-10.0, 0.05, 0.01))
            .unwrap();

        let call = price_and_greeks(90.0, 100.0, 1.0, 0.06, 0.25, OptionType::Call).unwrap();
        let put = price_and_greeks(90.0, 90.0, 0.5, 0.06, 0.3, OptionType::Put).unwrap();
        let expected = 10.0 * call.price - 5.0 * put.price;
        assert_relative_eq!(stressed.value, expected, epsilon = 1e-9);
        assert_relative_eq!(
            stressed.greeks.delta,
            10.0 * call.greeks.delta - 5.0 * put.greeks.delta,
            epsilon = 1e-9
        );
    }

    #[test]
    fn test_pnl_is_shifted_minus_base() {
        let portfolio = book();
        let pnl = portfolio.scenario_shift(5.0, 0.0, 0.0).unwrap();
        assert_eq!(pnl.pnl, pnl.stressed_value - pnl.base_value);
        assert_eq!(pnl.base_value, portfolio.value().unwrap());
        assert!(pnl.is_gain());
    }

    #[test]
    fn test_stress_does_not_modify_portfolio() {
        let portfolio = book();
        let before = portfolio.positions().to_vec();
        let _ = portfolio.stress(&ScenarioShift::absolute(10.0, 0.1, 0.02)).unwrap();
        assert_eq!(portfolio.positions(), before.as_slice());
    }

    #[test]
    fn test_volatility_floor_keeps_stress_valid() {
        let portfolio = book();
        let crushed = portfolio.stress(&ScenarioShift::absolute(0.0, -1.0, 0.0));
        assert!(crushed.is_ok());
    }

    #[test]
    fn test_invalid_spot_shift_fails() {
        let portfolio = book();
        let err = portfolio
            .stress(&ScenarioShift::none().with_spot(Shift::Absolute(-200.0)))
            .unwrap_err();
        assert_eq!(err.position_index(), Some(0));
    }
}
