//! Analytical pricing formulas for European options.
//!
//! This module provides closed-form solutions for option pricing:
//! - Black-Scholes model for lognormal dynamics
//! - Analytical Greeks (Delta, Gamma, Vega, Theta, Rho)
//!
//! ## Design Principles
//!
//! - **Generic over `T: Float`**: Supports `f64` and `f32`
//! - **Validated domain**: every entry point checks its inputs before evaluating
//! - **Numerical Stability**: Uses an erfc-based CDF with relative accuracy in the tails

pub mod black_scholes;
pub mod distributions;
pub mod error;
pub mod greeks;

// Re-export main types at module level
pub use black_scholes::{price_and_greeks, BlackScholes};
pub use distributions::{norm_cdf, norm_pdf};
pub use error::AnalyticalError;
pub use greeks::{Greeks, OptionAnalytics, DAYS_PER_YEAR};
