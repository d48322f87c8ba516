//! Core error types shared by every layer.
//!
//! # Re-exports
//!
//! - [`PricingError`] and [`ErrorKind`] from `error`

pub mod error;

pub use error::{ErrorKind, PricingError};
