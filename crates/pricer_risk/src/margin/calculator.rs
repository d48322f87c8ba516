//! Margin computation over stored position records.

use pricer_core::market_data::MarketQuote;
use tracing::{debug, instrument, warn};

use super::config::MarginConfig;
use crate::error::{ConfigError, RiskError};
use crate::parallel::ParallelConfig;
use crate::portfolio::{Portfolio, Position, PositionRecord};

/// Rounds half away from zero to two decimal places.
///
/// # Examples
///
/// ```
/// use pricer_risk::margin::round_to_cents;
///
/// assert_eq!(round_to_cents(95.524597), 95.52);
/// assert_eq!(round_to_cents(0.125), 0.13);
/// assert_eq!(round_to_cents(0.0), 0.0);
/// ```
#[inline]
pub fn round_to_cents(amount: f64) -> f64 {
    (amount * 100.0).round() / 100.0
}

/// Market moves applied before computing a stressed margin.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MarginStress {
    /// Factor applied to the underlying price
    pub spot_multiplier: f64,
    /// Factor applied to the volatility
    pub vol_multiplier: f64,
    /// Additive volatility shock applied after the multiplier
    pub vol_shock: f64,
}

impl Default for MarginStress {
    fn default() -> Self {
        Self {
            spot_multiplier: 1.0,
            vol_multiplier: 1.0,
            vol_shock: 0.0,
        }
    }
}

impl MarginStress {
    /// Underlying down 10% with volatility up by half.
    pub fn market_crash() -> Self {
        Self {
            spot_multiplier: 0.90,
            vol_multiplier: 1.50,
            vol_shock: 0.0,
        }
    }
}

/// Margin of one record.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct PositionMargin {
    /// Index in input order
    pub index: usize,
    /// Unit delta at the margin inputs
    pub delta: f64,
    /// Unrounded margin requirement
    pub margin: f64,
}

/// Per-record margins and their rounded total.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct MarginReport {
    /// Margins in input order
    pub positions: Vec<PositionMargin>,
    /// Sum of margins rounded to cents
    pub total: f64,
}

/// Delta-based margin calculator.
///
/// # Examples
///
/// ```
/// use pricer_models::instruments::OptionType;
/// use pricer_risk::margin::{MarginCalculator, MarginConfig};
/// use pricer_risk::portfolio::PositionRecord;
///
/// let calculator = MarginCalculator::new(MarginConfig::default()).unwrap();
/// let records = vec![PositionRecord::new(OptionType::Call, 100.0, 10.0, 365)];
///
/// let margin = calculator.calculate_margin(&records, 100.0, 0.2, 0.0).unwrap();
/// assert_eq!(margin, 95.52);
/// assert_eq!(calculator.calculate_margin(&[], 100.0, 0.2, 0.0).unwrap(), 0.0);
/// ```
#[derive(Clone, Debug)]
pub struct MarginCalculator {
    config: MarginConfig,
    parallel: ParallelConfig,
}

impl Default for MarginCalculator {
    fn default() -> Self {
        Self {
            config: MarginConfig::default(),
            parallel: ParallelConfig::default(),
        }
    }
}

impl MarginCalculator {
    /// Creates a calculator from a validated configuration.
    pub fn new(config: MarginConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            config,
            parallel: ParallelConfig::default(),
        })
    }

    /// Sets the thresholds for parallel delta evaluation.
    pub fn with_parallel_config(mut self, parallel: ParallelConfig) -> Self {
        self.parallel = parallel;
        self
    }

    /// Returns the configuration.
    pub fn config(&self) -> &MarginConfig {
        &self.config
    }

    /// Per-record margins at `underlying_price` and `volatility + stress_scenario`.
    ///
    /// # Errors
    ///
    /// - [`RiskError::Position`] for the first record whose delta cannot be
    ///   computed, including a non-positive stressed volatility or a
    ///   non-finite quantity
    /// - [`RiskError::NonFiniteAggregate`] if the margin sum overflows
    #[instrument(
        skip_all,
        fields(
            records = records.len(),
            underlying_price = underlying_price,
            stress = stress_scenario
        )
    )]
    pub fn margin_breakdown(
        &self,
        records: &[PositionRecord],
        underlying_price: f64,
        volatility: f64,
        stress_scenario: f64,
    ) -> Result<MarginReport, RiskError> {
        if records.is_empty() {
            return Ok(MarginReport {
                positions: Vec::new(),
                total: 0.0,
            });
        }

        let sigma = volatility + stress_scenario;
        debug!(sigma, "computing margin deltas");

        let portfolio = records
            .iter()
            .map(|r| {
                Position::new(
                    underlying_price,
                    r.strike,
                    r.expiry_years(),
                    self.config.risk_free_rate,
                    sigma,
                    r.option_type,
                    r.quantity,
                )
            })
            .collect::<Portfolio>()
            .with_parallel_config(self.parallel.clone());

        let notional_rate =
            underlying_price * self.config.margin_rate * self.config.contract_multiplier;

        let positions: Vec<PositionMargin> = portfolio
            .position_analytics()?
            .into_iter()
            .zip(records)
            .enumerate()
            .map(|(index, (unit, record))| PositionMargin {
                index,
                delta: unit.greeks.delta,
                margin: unit.greeks.delta.abs() * record.quantity.abs() * notional_rate,
            })
            .collect();

        let total: f64 = positions.iter().map(|p| p.margin).sum();
        if !total.is_finite() {
            warn!(total, "margin total is not finite");
            return Err(RiskError::NonFiniteAggregate { metric: "margin" });
        }

        Ok(MarginReport {
            positions,
            total: round_to_cents(total),
        })
    }

    /// Total margin rounded to cents. Zero for an empty record list.
    pub fn calculate_margin(
        &self,
        records: &[PositionRecord],
        underlying_price: f64,
        volatility: f64,
        stress_scenario: f64,
    ) -> Result<f64, RiskError> {
        self.margin_breakdown(records, underlying_price, volatility, stress_scenario)
            .map(|report| report.total)
    }

    /// Total margin after applying `stress` to the quoted market.
    pub fn calculate_stressed_margin(
        &self,
        records: &[PositionRecord],
        quote: &MarketQuote,
        stress: &MarginStress,
    ) -> Result<f64, RiskError> {
        self.calculate_margin(
            records,
            quote.underlying_price() * stress.spot_multiplier,
            quote.volatility() * stress.vol_multiplier,
            stress.vol_shock,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use pricer_core::types::ErrorKind;
    use pricer_models::instruments::OptionType;

    fn records() -> Vec<PositionRecord> {
        vec![
            PositionRecord::new(OptionType::Call, 100.0, 10.0, 365),
            PositionRecord::new(OptionType::Put, 95.0, -5.0, 60),
        ]
    }

    #[test]
    fn test_reference_margin() {
        let calculator = MarginCalculator::default();
        let report = calculator.margin_breakdown(&records(), 100.0, 0.2, 0.0).unwrap();

        assert_eq!(report.positions.len(), 2);
        assert_relative_eq!(report.positions[0].margin, 95.52459767634286, epsilon = 1e-3);
        assert_relative_eq!(report.positions[1].margin, 16.449608387814376, epsilon = 1e-3);
        assert!(report.positions[1].delta < 0.0);
        assert_eq!(report.total, 111.97);
    }

    #[test]
    fn test_empty_records_zero_margin() {
        let calculator = MarginCalculator::default();
        assert_eq!(calculator.calculate_margin(&[], 100.0, 0.2, 0.0).unwrap(), 0.0);
        assert_eq!(calculator.calculate_margin(&[], -1.0, 0.0, -5.0).unwrap(), 0.0);
    }

    #[test]
    fn test_short_positions_do_not_offset() {
        let calculator = MarginCalculator::default();
        let long = vec![PositionRecord::new(OptionType::Call, 100.0, 10.0, 365)];
        let hedged = vec![
            PositionRecord::new(OptionType::Call, 100.0, 10.0, 365),
            PositionRecord::new(OptionType::Call, 100.0, -10.0, 365),
        ];
        let single = calculator.calculate_margin(&long, 100.0, 0.2, 0.0).unwrap();
        let both = calculator.calculate_margin(&hedged, 100.0, 0.2, 0.0).unwrap();
        assert_relative_eq!(both, 2.0 * single, epsilon = 0.011);
    }

    #[test]
    fn test_stress_scenario_adds_to_volatility() {
        let calculator = MarginCalculator::default();
        let stressed = calculator.calculate_margin(&records()[..1], 100.0, 0.2, 0.1).unwrap();
        assert_eq!(stressed, round_to_cents(93.63775918590186));
    }

    #[test]
    fn test_non_positive_stressed_vol_fails() {
        let calculator = MarginCalculator::default();
        let err = calculator.calculate_margin(&records(), 100.0, 0.2, -0.2).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidInput);
        assert_eq!(err.position_index(), Some(0));
    }

    #[test]
    fn test_zero_day_record_fails() {
        let calculator = MarginCalculator::default();
        let mut recs = records();
        recs.push(PositionRecord::new(OptionType::Call, 100.0, 1.0, 0));
        let err = calculator.calculate_margin(&recs, 100.0, 0.2, 0.0).unwrap_err();
        assert_eq!(err.position_index(), Some(2));
    }

    #[test]
    fn test_nan_quantity_record_fails() {
        let calculator = MarginCalculator::default();
        let mut recs = records();
        recs.push(PositionRecord::new(OptionType::Put, 90.0, f64::NAN, 30));
        let err = calculator.calculate_margin(&recs, 100.0, 0.2, 0.0).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidInput);
        assert_eq!(err.position_index(), Some(2));
    }

    #[test]
    fn test_overflowing_margin_is_instability() {
        let calculator = MarginCalculator::default();
        let recs = vec![
            PositionRecord::new(OptionType::Call, 100.0, 1e308, 365),
            PositionRecord::new(OptionType::Call, 100.0, 1e308, 365),
        ];
        let err = calculator.calculate_margin(&recs, 100.0, 0.2, 0.0).unwrap_err();
        assert!(matches!(err, RiskError::NonFiniteAggregate { metric: "margin" }));
        assert_eq!(err.kind(), ErrorKind::NumericalInstability);
    }

    #[test]
    fn test_contract_multiplier_scales_margin() {
        let calculator =
            MarginCalculator::new(MarginConfig::default().with_contract_multiplier(100.0)).unwrap();
        let margin = calculator.calculate_margin(&records()[..1], 100.0, 0.2, 0.0).unwrap();
        assert_eq!(margin, round_to_cents(9552.459767634286));
    }

    #[test]
    fn test_market_crash_margin() {
        let calculator = MarginCalculator::default();
        let quote = MarketQuote::new(100.0, 0.2).unwrap();
        let crashed = calculator
            .calculate_stressed_margin(&records(), &quote, &MarginStress::market_crash())
            .unwrap();
        let direct = calculator.calculate_margin(&records(), 90.0, 0.3, 0.0).unwrap();
        assert_eq!(crashed, direct);
        assert_eq!(crashed, round_to_cents(65.64040816965691 + 42.123040924420316));

        let unchanged = calculator
            .calculate_stressed_margin(&records(), &quote, &MarginStress::default())
            .unwrap();
        assert_eq!(unchanged, 111.97);
    }

    #[test]
    fn test_new_rejects_invalid_config() {
        assert!(MarginCalculator::new(MarginConfig::default().with_margin_rate(f64::NAN)).is_err());
    }
}
