//! Ordered collection of positions and its linear aggregation.

use pricer_core::market_data::MarketQuote;
use pricer_core::traits::Priceable;
use pricer_core::types::PricingError;
use pricer_models::analytical::{Greeks, OptionAnalytics};
use pricer_models::instruments::OptionType;
use tracing::warn;

use super::ids::UnderlyingId;
use super::position::Position;
use super::record::PositionRecord;
use crate::error::RiskError;
use crate::parallel::{parallel_map, ParallelConfig};

/// Aggregate value and sensitivities of a set of positions.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Valuation {
    /// Σ quantity × unit price
    pub value: f64,
    /// Σ quantity × unit Greeks
    pub greeks: Greeks<f64>,
}

/// Per-position breakdown for reporting.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct PositionRisk {
    /// Index in portfolio order
    pub index: usize,
    /// Underlying identifier
    pub underlying: UnderlyingId,
    /// Call or put
    pub option_type: OptionType,
    /// Strike price
    pub strike: f64,
    /// Time to expiry in years
    pub expiry: f64,
    /// Signed number of contracts
    pub quantity: f64,
    /// Price and Greeks of one contract
    pub unit: OptionAnalytics<f64>,
    /// Price and Greeks scaled by quantity
    pub exposure: OptionAnalytics<f64>,
}

/// An ordered book of option positions.
///
/// Every aggregate is linear in quantity:
/// `metric = Σ quantity_i × unit_metric_i`, with no cross-position terms.
/// Per-position analytics may be computed on the Rayon pool, but the sums
/// are always taken sequentially in portfolio order, so repeated calls on
/// the same portfolio are bit-identical.
///
/// # Examples
///
/// ```
/// use pricer_models::instruments::OptionType;
/// use pricer_risk::portfolio::{Portfolio, Position};
///
/// let mut portfolio = Portfolio::new();
/// portfolio.add_position(Position::new(100.0, 100.0, 1.0, 0.05, 0.2, OptionType::Call, 10.0));
/// portfolio.add_position(Position::new(100.0, 95.0, 0.5, 0.05, 0.2, OptionType::Put, -5.0));
///
/// let valuation = portfolio.valuation().unwrap();
/// assert_eq!(valuation.value, portfolio.value().unwrap());
/// assert_eq!(valuation.greeks, portfolio.greeks().unwrap());
/// ```
#[derive(Clone, Debug, Default)]
pub struct Portfolio {
    positions: Vec<Position>,
    parallel: ParallelConfig,
}

impl Portfolio {
    /// Creates an empty portfolio.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the thresholds for parallel evaluation.
    pub fn with_parallel_config(mut self, parallel: ParallelConfig) -> Self {
        self.parallel = parallel;
        self
    }

    /// Builds a portfolio from stored records sharing one underlying quote.
    ///
    /// Each record becomes a position with `S` and `σ` from `quote`,
    /// `T = days_to_expiry / 365` and the given `rate`. Records are not
    /// validated here; invalid terms surface when the portfolio is evaluated.
    pub fn from_records(records: &[PositionRecord], quote: &MarketQuote, rate: f64) -> Self {
        records.iter().map(|r| r.to_position(quote, rate)).collect()
    }

    /// Parallel evaluation thresholds.
    pub fn parallel_config(&self) -> &ParallelConfig {
        &self.parallel
    }

    /// Appends a position. Order is preserved for reporting.
    pub fn add_position(&mut self, position: Position) {
        self.positions.push(position);
    }

    /// Positions in insertion order.
    pub fn positions(&self) -> &[Position] {
        &self.positions
    }

    /// Number of positions.
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    /// Returns `true` if the portfolio holds no positions.
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Iterates over positions in order.
    pub fn iter(&self) -> std::slice::Iter<'_, Position> {
        self.positions.iter()
    }

    /// Returns a portfolio with every position replaced by `f(position)`.
    ///
    /// The parallel configuration is carried over.
    pub fn map<F>(&self, f: F) -> Portfolio
    where
        F: Fn(&Position) -> Position,
    {
        Portfolio {
            positions: self.positions.iter().map(f).collect(),
            parallel: self.parallel.clone(),
        }
    }

    /// Evaluates `f` for every position, failing on the lowest failing index.
    pub(crate) fn try_map_positions<R, F>(&self, f: F) -> Result<Vec<R>, RiskError>
    where
        R: Send,
        F: Fn(&Position) -> Result<R, PricingError> + Sync + Send,
    {
        parallel_map(&self.positions, &self.parallel, f)
            .into_iter()
            .enumerate()
            .map(|(index, result)| {
                result.map_err(|source| {
                    warn!(index, error = %source, "position evaluation failed");
                    RiskError::Position { index, source }
                })
            })
            .collect()
    }

    /// Price and Greeks of one unit of each position, in portfolio order.
    pub fn position_analytics(&self) -> Result<Vec<OptionAnalytics<f64>>, RiskError> {
        self.try_map_positions(Position::unit_analytics)
    }

    /// Value and Greeks of the whole book in one pass.
    ///
    /// # Errors
    ///
    /// - [`RiskError::Position`] for the first position that cannot be
    ///   valued; no partial aggregate is returned
    /// - [`RiskError::NonFiniteAggregate`] if the sums overflow
    pub fn valuation(&self) -> Result<Valuation, RiskError> {
        let analytics = self.position_analytics()?;
        self.aggregate(&analytics)
    }

    /// Sums unit analytics weighted by quantity, in portfolio order.
    pub(crate) fn aggregate(
        &self,
        analytics: &[OptionAnalytics<f64>],
    ) -> Result<Valuation, RiskError> {
        let mut value = 0.0;
        let mut greeks = Greeks::zero();
        for (position, unit) in self.positions.iter().zip(analytics) {
            value += position.quantity() * unit.price;
            greeks += unit.greeks.scale(position.quantity());
        }

        if !value.is_finite() {
            warn!(value, "portfolio value is not finite");
            return Err(RiskError::NonFiniteAggregate { metric: "value" });
        }
        if !greeks.is_finite() {
            warn!(?greeks, "portfolio greeks are not finite");
            return Err(RiskError::NonFiniteAggregate { metric: "greeks" });
        }
        Ok(Valuation { value, greeks })
    }

    /// Σ quantity × unit price. Zero for an empty portfolio.
    pub fn value(&self) -> Result<f64, RiskError> {
        self.valuation().map(|v| v.value)
    }

    /// Element-wise Σ quantity × unit Greeks. All zero for an empty portfolio.
    pub fn greeks(&self) -> Result<Greeks<f64>, RiskError> {
        self.valuation().map(|v| v.greeks)
    }

    /// Per-position breakdown with unit and quantity-weighted analytics.
    pub fn position_risks(&self) -> Result<Vec<PositionRisk>, RiskError> {
        let analytics = self.position_analytics()?;
        Ok(self
            .positions
            .iter()
            .zip(analytics)
            .enumerate()
            .map(|(index, (position, unit))| PositionRisk {
                index,
                underlying: position.underlying().clone(),
                option_type: position.option_type(),
                strike: position.strike(),
                expiry: position.expiry(),
                quantity: position.quantity(),
                exposure: unit.scale(position.quantity()),
                unit,
            })
            .collect())
    }
}

impl Priceable<f64> for Portfolio {
    fn price(&self) -> Result<f64, PricingError> {
        Ok(self.value()?)
    }
}

impl FromIterator<Position> for Portfolio {
    fn from_iter<I: IntoIterator<Item = Position>>(iter: I) -> Self {
        Self {
            positions: iter.into_iter().collect(),
            parallel: ParallelConfig::default(),
        }
    }
}

impl Extend<Position> for Portfolio {
    fn extend<I: IntoIterator<Item = Position>>(&mut self, iter: I) {
        self.positions.extend(iter);
    }
}

impl<'a> IntoIterator for &'a Portfolio {
    type Item = &'a Position;
    type IntoIter = std::slice::Iter<'a, Position>;

    fn into_iter(self) -> Self::IntoIter {
        self.positions.iter()
    }
}
