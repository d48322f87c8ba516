//! CLI command implementations
//!
//! Each submodule implements a specific CLI command.

pub mod check;
pub mod greeks;
pub mod margin;
pub mod scenario;
pub mod simulate;
pub mod stress;
