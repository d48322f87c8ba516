//! Market shifts and named scenarios.
//!
//! - `Shift`: absolute or relative move of one market input
//! - `ScenarioShift`: coordinated move of spot, volatility and rate
//! - `Scenario`: named shift with description

use crate::portfolio::Position;

/// Lower bound applied to volatility after a shift.
pub const VOLATILITY_FLOOR: f64 = 1e-6;

/// Move applied to a single market input.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Shift {
    /// `x' = x + amount`
    Absolute(f64),
    /// `x' = x · (1 + pct)`
    Relative(f64),
}

impl Default for Shift {
    fn default() -> Self {
        Shift::Absolute(0.0)
    }
}

impl Shift {
    /// Applies the shift to `value`.
    #[inline]
    pub fn apply(&self, value: f64) -> f64 {
        match *self {
            Shift::Absolute(amount) => value + amount,
            Shift::Relative(pct) => value * (1.0 + pct),
        }
    }

    /// Returns `true` if applying the shift leaves every finite value unchanged.
    pub fn is_zero(&self) -> bool {
        match *self {
            Shift::Absolute(x) | Shift::Relative(x) => x == 0.0,
        }
    }
}

/// Simultaneous shift of spot, volatility and rate across a portfolio.
///
/// Strike, expiry, option type and quantity are never changed. After
/// shifting, volatility is floored at [`VOLATILITY_FLOOR`].
///
/// # Examples
///
/// ```
/// use pricer_models::instruments::OptionType;
/// use pricer_risk::portfolio::Position;
/// use pricer_risk::scenarios::ScenarioShift;
///
/// let position = Position::new(100.0, 100.0, 1.0, 0.05, 0.2, OptionType::Call, 1.0);
/// let shifted = ScenarioShift::absolute(-5.0, -0.5, 0.01).apply(&position);
///
/// assert_eq!(shifted.spot(), 95.0);
/// assert_eq!(shifted.volatility(), 1e-6);
/// assert!((shifted.rate() - 0.06).abs() < 1e-15);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScenarioShift {
    /// Shift of the underlying price
    pub spot: Shift,
    /// Shift of the volatility
    pub volatility: Shift,
    /// Additive shift of the risk-free rate
    pub rate: f64,
}

impl ScenarioShift {
    /// Additive shifts: `S + d_spot`, `σ + d_vol`, `r + d_rate`.
    pub fn absolute(d_spot: f64, d_vol: f64, d_rate: f64) -> Self {
        Self {
            spot: Shift::Absolute(d_spot),
            volatility: Shift::Absolute(d_vol),
            rate: d_rate,
        }
    }

    /// Shift that leaves every position unchanged.
    pub fn none() -> Self {
        Self::default()
    }

    /// Replaces the spot shift.
    pub fn with_spot(mut self, spot: Shift) -> Self {
        self.spot = spot;
        self
    }

    /// Replaces the volatility shift.
    pub fn with_volatility(mut self, volatility: Shift) -> Self {
        self.volatility = volatility;
        self
    }

    /// Replaces the rate shift.
    pub fn with_rate(mut self, rate: f64) -> Self {
        self.rate = rate;
        self
    }

    /// Returns `true` if no input is moved.
    pub fn is_zero(&self) -> bool {
        self.spot.is_zero() && self.volatility.is_zero() && self.rate == 0.0
    }

    /// Returns a copy of `position` with shifted market inputs.
    pub fn apply(&self, position: &Position) -> Position {
        let volatility = self
            .volatility
            .apply(position.volatility())
            .max(VOLATILITY_FLOOR);

        position
            .with_spot(self.spot.apply(position.spot()))
            .with_volatility(volatility)
            .with_rate(position.rate() + self.rate)
    }
}

/// A named market scenario.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Scenario {
    name: String,
    #[cfg_attr(feature = "serde", serde(default))]
    description: Option<String>,
    shift: ScenarioShift,
}

impl Scenario {
    /// Creates a scenario.
    pub fn new(name: impl Into<String>, shift: ScenarioShift) -> Self {
        Self {
            name: name.into(),
            description: None,
            shift,
        }
    }

    /// Adds a description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Scenario name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Scenario description, if any.
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Market shift applied by the scenario.
    pub fn shift(&self) -> &ScenarioShift {
        &self.shift
    }
}
