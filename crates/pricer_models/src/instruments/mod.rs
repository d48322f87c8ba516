//! Option contract definitions.
//!
//! # Types
//!
//! - [`OptionType`]: Call or put, parsed case-insensitively from text
//! - [`InstrumentError`]: Contract definition errors
//!
//! # Examples
//!
//! ```
//! use pricer_models::instruments::OptionType;
//!
//! let call: OptionType = "CALL".parse().unwrap();
//! assert_eq!(call, OptionType::Call);
//! assert!("straddle".parse::<OptionType>().is_err());
//! ```

mod error;
mod option_type;

pub use error::InstrumentError;
pub use option_type::OptionType;
