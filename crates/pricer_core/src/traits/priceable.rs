//! Trait for entities that can be priced.

use crate::types::PricingError;
use num_traits::Float;

/// Trait for entities that can be priced.
///
/// # Type Parameters
/// * `T` - Floating-point type (f32 or f64)
///
/// Pricing is fallible: an entity built from out-of-domain parameters
/// reports a [`PricingError`] instead of producing NaN or infinity.
///
/// ```
/// use pricer_core::traits::Priceable;
/// use pricer_core::types::PricingError;
///
/// struct Cash(f64);
///
/// impl Priceable<f64> for Cash {
///     fn price(&self) -> Result<f64, PricingError> {
///         if self.0.is_finite() {
///             Ok(self.0)
///         } else {
///             Err(PricingError::InvalidInput(format!("cash = {}", self.0)))
///         }
///     }
/// }
///
/// assert_eq!(Cash(100.0).price().unwrap(), 100.0);
/// assert!(Cash(f64::NAN).price().is_err());
/// ```
pub trait Priceable<T: Float> {
    /// Calculate the present value.
    ///
    /// # Invariants
    /// - The method must be pure (no side effects, deterministic)
    /// - A returned `Ok` value is always finite
    fn price(&self) -> Result<T, PricingError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    enum SimpleInstrument {
        FixedValue(f64),
    }

    impl Priceable<f64> for SimpleInstrument {
        fn price(&self) -> Result<f64, PricingError> {
            match self {
                SimpleInstrument::FixedValue(val) => Ok(*val),
            }
        }
    }

    #[test]
    fn test_priceable_with_f64() {
        let instrument = SimpleInstrument::FixedValue(100.0);
        assert_eq!(instrument.price().unwrap(), 100.0);
    }

    #[test]
    fn test_trait_method_has_no_side_effects() {
        let instrument = SimpleInstrument::FixedValue(100.0);
        let price1 = instrument.price().unwrap();
        let price2 = instrument.price().unwrap();
        assert_eq!(price1, price2);
    }
}
