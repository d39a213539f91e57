//! Linear congruential generator
//!
//! The classic mixed recurrence `x[i+1] = (a*x[i] + c) mod m`. With the
//! textbook Numerical Recipes constants it covers the full period `m`; with
//! small classroom parameters it cycles quickly, which is exactly what the
//! randomness tests are meant to expose.
//!
//! # Example
//!
//! ```
//! use randlab::generator::{Generator, LinearCongruential};
//!
//! let mut lcg = LinearCongruential::new(1, 5, 3, 16);
//! assert_eq!(lcg.next_value(), 0.5); // (5*1 + 3) % 16 = 8
//! ```

use super::{floor_mod, Generator};

/// Linear (mixed) congruential generator
///
/// State and parameters are plain `i64`; each step widens to `i128` so the
/// multiply-add cannot overflow for any finite input.
pub struct LinearCongruential {
    state: i64,
    multiplier: i64,
    increment: i64,
    modulus: i64,
}

impl LinearCongruential {
    /// Create a generator starting from `seed` as `x[0]`
    pub fn new(seed: i64, multiplier: i64, increment: i64, modulus: i64) -> Self {
        Self {
            state: seed,
            multiplier,
            increment,
            modulus,
        }
    }
}

impl Generator for LinearCongruential {
    fn next_value(&mut self) -> f64 {
        if self.modulus == 0 {
            // Degenerate request; emit zeros rather than faulting.
            self.state = 0;
            return 0.0;
        }
        let next = floor_mod(
            self.multiplier as i128 * self.state as i128 + self.increment as i128,
            self.modulus as i128,
        );
        self.state = next as i64;
        next as f64 / self.modulus as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator::{generate, GeneratorSpec};

    #[test]
    fn test_textbook_sequence() {
        // seed=1, a=5, c=3, m=16:
        // x1 = 8 -> 0.5, x2 = 43%16 = 11 -> 0.6875, x3 = 58%16 = 10 -> 0.625,
        // x4 = 53%16 = 5 -> 0.3125, x5 = 28%16 = 12 -> 0.75
        let spec = GeneratorSpec::Linear {
            seed: 1,
            multiplier: 5,
            increment: 3,
            modulus: 16,
        };
        assert_eq!(generate(&spec, 5), vec![0.5, 0.6875, 0.625, 0.3125, 0.75]);
    }

    #[test]
    fn test_deterministic() {
        let spec = GeneratorSpec::Linear {
            seed: 1,
            multiplier: 1_664_525,
            increment: 1_013_904_223,
            modulus: 1 << 32,
        };
        assert_eq!(generate(&spec, 200), generate(&spec, 200));
    }

    #[test]
    fn test_values_in_unit_interval() {
        let spec = GeneratorSpec::Linear {
            seed: 123,
            multiplier: 1_664_525,
            increment: 1_013_904_223,
            modulus: 1 << 32,
        };
        for value in generate(&spec, 5000) {
            assert!((0.0..1.0).contains(&value), "value {value} out of range");
        }
    }

    #[test]
    fn test_negative_seed_stays_in_range() {
        let mut lcg = LinearCongruential::new(-9, 5, 3, 16);
        for _ in 0..50 {
            let value = lcg.next_value();
            assert!((0.0..1.0).contains(&value), "value {value} out of range");
        }
    }

    #[test]
    fn test_zero_multiplier_is_degenerate_not_fatal() {
        // a=0 collapses the recurrence to the constant c % m after one step.
        let mut lcg = LinearCongruential::new(1, 0, 3, 16);
        assert_eq!(lcg.next_value(), 3.0 / 16.0);
        assert_eq!(lcg.next_value(), 3.0 / 16.0);
    }

    #[test]
    fn test_zero_modulus_yields_zeros() {
        let mut lcg = LinearCongruential::new(1, 5, 3, 0);
        assert_eq!(lcg.next_value(), 0.0);
        assert_eq!(lcg.next_value(), 0.0);
    }

    #[test]
    fn test_extreme_parameters_do_not_panic() {
        let mut lcg = LinearCongruential::new(i64::MAX, i64::MAX, i64::MAX, i64::MAX);
        for _ in 0..10 {
            let value = lcg.next_value();
            assert!(value.is_finite());
        }
    }
}
