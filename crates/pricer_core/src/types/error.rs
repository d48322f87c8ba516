//! Error types for structured error handling.
//!
//! This module provides:
//! - `PricingError`: The error taxonomy every pricing and risk operation reports into
//! - `ErrorKind`: The coarse classification callers branch on

use std::fmt;

/// Coarse classification of a failure.
///
/// Every error raised anywhere in the workspace maps to exactly one kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// A caller supplied an out-of-domain or malformed parameter
    InvalidInput,
    /// A computation produced a non-finite intermediate or result
    NumericalInstability,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorKind::InvalidInput => write!(f, "invalid input"),
            ErrorKind::NumericalInstability => write!(f, "numerical instability"),
        }
    }
}

/// Categorised pricing errors.
///
/// # Variants
/// - `InvalidInput`: Invalid market data, contract terms or parameters
/// - `NumericalInstability`: Computation produced NaN or infinity
///
/// # Examples
/// ```
/// use pricer_core::types::{ErrorKind, PricingError};
///
/// let err = PricingError::InvalidInput("Negative spot price".to_string());
/// assert_eq!(format!("{}", err), "Invalid input: Negative spot price");
/// assert_eq!(err.kind(), ErrorKind::InvalidInput);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PricingError {
    /// Invalid input data or parameters
    InvalidInput(String),

    /// Numerical instability during computation
    NumericalInstability(String),
}

impl PricingError {
    /// Returns the classification of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            PricingError::InvalidInput(_) => ErrorKind::InvalidInput,
            PricingError::NumericalInstability(_) => ErrorKind::NumericalInstability,
        }
    }
}

impl fmt::Display for PricingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PricingError::InvalidInput(msg) => write!(f, "Invalid input: {}", msg),
            PricingError::NumericalInstability(msg) => {
                write!(f, "Numerical instability: {}", msg)
            }
        }
    }
}

impl std::error::Error for PricingError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_input_display() {
        let err = PricingError::InvalidInput("strike must be positive".to_string());
        assert_eq!(format!("{}", err), "Invalid input: strike must be positive");
    }

    #[test]
    fn test_numerical_instability_display() {
        let err = PricingError::NumericalInstability("d1 is NaN".to_string());
        assert_eq!(format!("{}", err), "Numerical instability: d1 is NaN");
    }

    #[test]
    fn test_kind_classification() {
        assert_eq!(
            PricingError::InvalidInput(String::new()).kind(),
            ErrorKind::InvalidInput
        );
        assert_eq!(
            PricingError::NumericalInstability(String::new()).kind(),
            ErrorKind::NumericalInstability
        );
    }

    #[test]
    fn test_kind_display() {
        assert_eq!(ErrorKind::InvalidInput.to_string(), "invalid input");
        assert_eq!(
            ErrorKind::NumericalInstability.to_string(),
            "numerical instability"
        );
    }

    #[test]
    fn test_error_trait_implementation() {
        let err = PricingError::InvalidInput("x".to_string());
        let _: &dyn std::error::Error = &err;
    }

    #[test]
    fn test_clone_and_equality() {
        let err1 = PricingError::NumericalInstability("overflow".to_string());
        let err2 = err1.clone();
        assert_eq!(err1, err2);
    }
}
