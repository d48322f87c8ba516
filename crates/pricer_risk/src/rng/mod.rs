//! # Random Number Generation
//!
//! Seeded pseudo-random streams for Monte Carlo simulation.
//!
//! Every trial draws from its own stream, derived from a base seed and the
//! trial index. A simulation therefore produces the same values whether its
//! trials run on one thread or across the Rayon pool.
//!
//! ```rust
//! use pricer_risk::rng::PricerRng;
//!
//! let mut a = PricerRng::for_stream(42, 7);
//! let mut b = PricerRng::for_stream(42, 7);
//! assert_eq!(a.gen_normal(), b.gen_normal());
//! ```

mod prng;

pub use prng::{stream_seed, PricerRng};
