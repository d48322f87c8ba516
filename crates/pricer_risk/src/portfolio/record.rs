//! Loader records for externally stored portfolios.
//!
//! A stored portfolio lists contract terms only. Market inputs come from a
//! [`MarketQuote`] for the shared underlying and a caller-supplied rate.
//!
//! ```json
//! [
//!   { "type": "call", "strike": 100.0, "quantity": 10, "days_to_expiry": 30 },
//!   { "type": "put",  "strike": 95.0,  "quantity": -5, "days_to_expiry": 60 }
//! ]
//! ```

use pricer_core::market_data::MarketQuote;
use pricer_models::analytical::DAYS_PER_YEAR;
use pricer_models::instruments::OptionType;

use super::position::Position;

/// Contract terms of one stored position.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PositionRecord {
    /// Call or put
    #[cfg_attr(feature = "serde", serde(rename = "type"))]
    pub option_type: OptionType,
    /// Strike price
    pub strike: f64,
    /// Signed number of contracts
    pub quantity: f64,
    /// Calendar days until expiry
    pub days_to_expiry: u32,
}

impl PositionRecord {
    /// Creates a record.
    pub fn new(option_type: OptionType, strike: f64, quantity: f64, days_to_expiry: u32) -> Self {
        Self {
            option_type,
            strike,
            quantity,
            days_to_expiry,
        }
    }

    /// Time to expiry in years (`days_to_expiry / 365`).
    #[inline]
    pub fn expiry_years(&self) -> f64 {
        f64::from(self.days_to_expiry) / DAYS_PER_YEAR
    }

    /// Builds a position valued off `quote` at risk-free `rate`.
    ///
    /// # Examples
    ///
    /// ```
    /// use pricer_core::market_data::MarketQuote;
    /// use pricer_models::instruments::OptionType;
    /// use pricer_risk::portfolio::PositionRecord;
    ///
    /// let record = PositionRecord::new(OptionType::Put, 95.0, -5.0, 73);
    /// let quote = MarketQuote::new(100.0, 0.3).unwrap();
    /// let position = record.to_position(&quote, 0.05);
    ///
    /// assert_eq!(position.spot(), 100.0);
    /// assert_eq!(position.volatility(), 0.3);
    /// assert!((position.expiry() - 0.2).abs() < 1e-12);
    /// assert_eq!(position.quantity(), -5.0);
    /// ```
    pub fn to_position(&self, quote: &MarketQuote, rate: f64) -> Position {
        Position::new(
            quote.underlying_price(),
            self.strike,
            self.expiry_years(),
            rate,
            quote.volatility(),
            self.option_type,
            self.quantity,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expiry_years() {
        assert_eq!(PositionRecord::new(OptionType::Call, 1.0, 1.0, 365).expiry_years(), 1.0);
        assert_eq!(PositionRecord::new(OptionType::Call, 1.0, 1.0, 0).expiry_years(), 0.0);
    }

    #[test]
    fn test_zero_day_record_fails_at_evaluation() {
        let quote = MarketQuote::new(100.0, 0.2).unwrap();
        let position =
            PositionRecord::new(OptionType::Call, 100.0, 1.0, 0).to_position(&quote, 0.05);
        assert!(position.unit_price().is_err());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_deserialize_json_records() {
        let json = r#"[
            {"type": "call", "strike": 100.0, "quantity": 10, "days_to_expiry": 30},
            {"type": "PUT", "strike": 95.0, "quantity": -5, "days_to_expiry": 60}
        ]"#;
        let records: Vec<PositionRecord> = serde_json::from_str(json).unwrap();

        assert_eq!(records.len(), 2);
        assert_eq!(records[0], PositionRecord::new(OptionType::Call, 100.0, 10.0, 30));
        assert_eq!(records[1].option_type, OptionType::Put);
        assert_eq!(records[1].quantity, -5.0);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_deserialize_rejects_unknown_type() {
        let json = r#"{"type": "digital", "strike": 100.0, "quantity": 1, "days_to_expiry": 30}"#;
        assert!(serde_json::from_str::<PositionRecord>(json).is_err());
    }
}
