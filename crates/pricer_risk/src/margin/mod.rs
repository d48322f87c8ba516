//! Delta-based initial margin for option books.
//!
//! Margin for a position is `|Δ| · |quantity| · S · margin_rate ·
//! contract_multiplier`; the total is rounded to cents. Short positions never
//! reduce the requirement.

mod calculator;
mod config;

pub use calculator::{round_to_cents, MarginCalculator, MarginReport, MarginStress, PositionMargin};
pub use config::MarginConfig;
