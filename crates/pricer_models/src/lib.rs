//! # Pricer Models (L2: Business Logic)
//!
//! Option definitions and closed-form valuation.
//!
//! This crate provides:
//! - The [`OptionType`](instruments::OptionType) enumeration and its parsing rules
//! - The Black-Scholes kernel returning price and all first-order Greeks
//! - Standard normal distribution functions stable into the tails
//!
//! ## Design Principles
//!
//! - **Enum-based option types**: unknown strings are rejected at parse time
//! - **Fail fast**: out-of-domain parameters (including `T = 0` and `σ = 0`)
//!   are errors, never NaN or infinity
//! - **Raw units**: vega per unit volatility, theta per year, rho per unit rate;
//!   display scaling lives on [`Greeks`](analytical::Greeks)
//!
//! ## Example
//!
//! ```
//! use pricer_models::analytical::price_and_greeks;
//! use pricer_models::instruments::OptionType;
//!
//! let call = price_and_greeks(100.0_f64, 100.0, 1.0, 0.05, 0.2, OptionType::Call).unwrap();
//! assert!((call.price - 10.45).abs() < 0.01);
//! assert!(call.greeks.delta > 0.0 && call.greeks.delta < 1.0);
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod analytical;
pub mod instruments;
