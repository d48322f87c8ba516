//! Property-based tests for the Black-Scholes kernel.
//!
//! Covers the model-level invariants that must hold across the whole
//! parameter domain, not just at hand-picked points.

use pricer_models::analytical::{price_and_greeks, AnalyticalError};
use pricer_models::instruments::OptionType;
use proptest::prelude::*;

// ============================================================================
// Put-Call Parity
// ============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    /// C - P = S - K·e^(-rT) across a broad domain.
    #[test]
    fn prop_put_call_parity(
        spot in 1.0_f64..500.0,
        moneyness in 0.5_f64..2.0,
        expiry in 0.01_f64..5.0,
        rate in -0.05_f64..0.15,
        vol in 0.05_f64..1.0,
    ) {
        let strike = spot * moneyness;
        let call = price_and_greeks(spot, strike, expiry, rate, vol, OptionType::Call).unwrap();
        let put = price_and_greeks(spot, strike, expiry, rate, vol, OptionType::Put).unwrap();

        let forward = spot - strike * (-rate * expiry).exp();
        let scale = spot.max(strike);
        prop_assert!(
            (call.price - put.price - forward).abs() <= 1e-9 * scale,
            "parity violated: C={} P={} F={}", call.price, put.price, forward
        );
    }

    /// Prices are never negative.
    #[test]
    fn prop_prices_non_negative(
        spot in 1.0_f64..500.0,
        moneyness in 0.5_f64..2.0,
        expiry in 0.01_f64..5.0,
        rate in 0.0_f64..0.15,
        vol in 0.05_f64..1.0,
    ) {
        let strike = spot * moneyness;
        for ty in [OptionType::Call, OptionType::Put] {
            let result = price_and_greeks(spot, strike, expiry, rate, vol, ty).unwrap();
            prop_assert!(result.price >= -1e-9 * spot);
        }
    }
}

// ============================================================================
// Greek Sign Invariants
// ============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    /// 0 < Δcall < 1, -1 < Δput < 0, Γ > 0, vega > 0 away from the
    /// numerical saturation of Φ.
    #[test]
    fn prop_greek_signs(
        spot in 20.0_f64..300.0,
        moneyness in 0.8_f64..1.25,
        expiry in 0.25_f64..2.0,
        rate in -0.02_f64..0.08,
        vol in 0.2_f64..0.5,
    ) {
        let strike = spot * moneyness;
        let call = price_and_greeks(spot, strike, expiry, rate, vol, OptionType::Call).unwrap();
        let put = price_and_greeks(spot, strike, expiry, rate, vol, OptionType::Put).unwrap();

        prop_assert!(call.greeks.delta > 0.0 && call.greeks.delta < 1.0);
        prop_assert!(put.greeks.delta > -1.0 && put.greeks.delta < 0.0);
        prop_assert!(call.greeks.gamma > 0.0);
        prop_assert!(call.greeks.vega > 0.0);
        prop_assert_eq!(call.greeks.gamma, put.greeks.gamma);
        prop_assert!(call.greeks.rho > 0.0);
        prop_assert!(put.greeks.rho < 0.0);
    }

    /// Non-positive expiry is always rejected, never priced.
    #[test]
    fn prop_non_positive_expiry_rejected(
        spot in 1.0_f64..500.0,
        expiry in -5.0_f64..=0.0,
    ) {
        let result = price_and_greeks(spot, spot, expiry, 0.05, 0.2, OptionType::Call);
        let is_invalid_expiry = matches!(result, Err(AnalyticalError::InvalidExpiry { .. }));
        prop_assert!(is_invalid_expiry);
    }
}

// ============================================================================
// Stability Near the Tails
// ============================================================================

#[test]
fn test_extreme_moneyness_stays_finite() {
    // |d1| around 10 and beyond
    for (spot, strike) in [(100.0_f64, 1.0_f64), (1.0, 100.0), (100.0, 1e4), (1e4, 100.0)] {
        for ty in [OptionType::Call, OptionType::Put] {
            let result = price_and_greeks(spot, strike, 0.5, 0.05, 0.3, ty).unwrap();
            assert!(result.price.is_finite());
            assert!(result.price >= 0.0);
            assert!(result.greeks.is_finite());
        }
    }
}

#[test]
fn test_benchmark_prices_round_to_reference() {
    let call = price_and_greeks(100.0_f64, 100.0, 1.0, 0.05, 0.2, OptionType::Call).unwrap();
    let put = price_and_greeks(100.0_f64, 100.0, 1.0, 0.05, 0.2, OptionType::Put).unwrap();
    assert_eq!((call.price * 100.0).round() / 100.0, 10.45);
    assert_eq!((put.price * 100.0).round() / 100.0, 5.57);
}
