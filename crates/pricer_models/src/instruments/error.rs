//! Instrument error types.

use pricer_core::types::PricingError;
use thiserror::Error;

/// Instrument-related errors.
///
/// # Variants
/// - `UnknownOptionType`: Text that names neither a call nor a put
///
/// # Examples
/// ```
/// use pricer_models::instruments::InstrumentError;
///
/// let err = InstrumentError::UnknownOptionType { value: "cal".to_string() };
/// assert!(format!("{}", err).contains("cal"));
/// ```
#[derive(Error, Debug, Clone, PartialEq)]
pub enum InstrumentError {
    /// Unrecognised option type.
    #[error("Unknown option type '{value}': expected 'call' or 'put'")]
    UnknownOptionType {
        /// The text that failed to parse
        value: String,
    },
}

impl From<InstrumentError> for PricingError {
    fn from(err: InstrumentError) -> Self {
        PricingError::InvalidInput(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_option_type_display() {
        let err = InstrumentError::UnknownOptionType {
            value: "straddle".to_string(),
        };
        assert_eq!(
            format!("{}", err),
            "Unknown option type 'straddle': expected 'call' or 'put'"
        );
    }

    #[test]
    fn test_into_pricing_error() {
        let err = InstrumentError::UnknownOptionType {
            value: "x".to_string(),
        };
        match PricingError::from(err) {
            PricingError::InvalidInput(msg) => assert!(msg.contains("'x'")),
            other => panic!("Expected InvalidInput, got {:?}", other),
        }
    }
}
