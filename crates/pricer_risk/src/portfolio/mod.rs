//! Position and portfolio model.
//!
//! - [`Position`]: one option line with its market inputs and signed quantity
//! - [`Portfolio`]: ordered book with linear value and Greeks aggregation
//! - [`PositionRecord`]: stored contract terms, resolved against a quote
//! - [`UnderlyingId`]: groups positions for shared Monte Carlo shocks

mod book;
mod ids;
mod position;
mod record;

pub use book::{Portfolio, PositionRisk, Valuation};
pub use ids::{UnderlyingId, DEFAULT_UNDERLYING};
pub use position::Position;
pub use record::PositionRecord;
