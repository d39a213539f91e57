//! Multiplicative congruential generator
//!
//! The increment-free recurrence `x[i+1] = (a*x[i]) mod m`. The Lehmer
//! generator is the same recurrence with a prime modulus; the parser accepts
//! `lehmer` as an alias for this method.
//!
//! A zero seed (or any seed sharing a factor with the modulus) degrades the
//! cycle; the validator screens for that, not this module.

use super::{floor_mod, Generator};

/// Multiplicative congruential generator
pub struct MultiplicativeCongruential {
    state: i64,
    multiplier: i64,
    modulus: i64,
}

impl MultiplicativeCongruential {
    /// Create a generator starting from `seed` as `x[0]`
    pub fn new(seed: i64, multiplier: i64, modulus: i64) -> Self {
        Self {
            state: seed,
            multiplier,
            modulus,
        }
    }
}

impl Generator for MultiplicativeCongruential {
    fn next_value(&mut self) -> f64 {
        if self.modulus == 0 {
            self.state = 0;
            return 0.0;
        }
        let next = floor_mod(
            self.multiplier as i128 * self.state as i128,
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
    fn test_small_cycle() {
        // seed=1, a=5, m=16: states 5, 9, 13, 1 then the cycle repeats
        let spec = GeneratorSpec::Multiplicative {
            seed: 1,
            multiplier: 5,
            modulus: 16,
        };
        assert_eq!(
            generate(&spec, 5),
            vec![0.3125, 0.5625, 0.8125, 0.0625, 0.3125]
        );
    }

    #[test]
    fn test_lehmer_first_step() {
        // The MINSTD parameters: a = 48271, m = 2^31 - 1.
        let mut lehmer = MultiplicativeCongruential::new(1, 48_271, 2_147_483_647);
        assert_eq!(lehmer.next_value(), 48_271.0 / 2_147_483_647.0);
    }

    #[test]
    fn test_deterministic() {
        let spec = GeneratorSpec::Multiplicative {
            seed: 42,
            multiplier: 48_271,
            modulus: 2_147_483_647,
        };
        assert_eq!(generate(&spec, 500), generate(&spec, 500));
    }

    #[test]
    fn test_zero_seed_sticks_at_zero() {
        // Degenerate but well-defined: 0 is an absorbing state.
        let mut generator = MultiplicativeCongruential::new(0, 48_271, 2_147_483_647);
        assert_eq!(generator.next_value(), 0.0);
        assert_eq!(generator.next_value(), 0.0);
    }

    #[test]
    fn test_values_in_unit_interval() {
        let spec = GeneratorSpec::Multiplicative {
            seed: 7,
            multiplier: 48_271,
            modulus: 2_147_483_647,
        };
        for value in generate(&spec, 5000) {
            assert!((0.0..1.0).contains(&value), "value {value} out of range");
        }
    }
}
