//! Congruential pseudo-random sequence generators
//!
//! This module provides the classic congruential recurrences used in
//! computational-statistics coursework, plus a modern seeded PRNG used as a
//! comparison baseline.
//!
//! # Methods
//!
//! - **Linear**: `x[i+1] = (a*x[i] + c) mod m` (also reachable as `mixed`)
//! - **Multiplicative**: `x[i+1] = (a*x[i]) mod m` (also reachable as `lehmer`)
//! - **Quadratic**: `x[i+1] = (a*x[i]^2 + b*x[i] + c) mod m`
//! - **Reference**: seeded xoshiro256++, for side-by-side quality comparison
//!
//! Every generated value is the new state divided by the modulus, so outputs
//! land in `[0, 1)` for any nonzero modulus. The recurrence itself is pure
//! integer arithmetic; reduction follows floored-division semantics so
//! negative coefficients or seeds still normalize into range.
//!
//! # Trust Model
//!
//! Generators perform NO parameter validation. Degenerate inputs (zero
//! multiplier, modulus not exceeding the seed, ...) silently produce
//! constant or short-cycling sequences; rejecting them up front is the
//! job of [`crate::config::validator`]. The only hard guarantee is that no
//! finite integer input can make a generator panic: a zero modulus yields an
//! all-zero sequence instead of a division fault.
//!
//! # Example
//!
//! ```
//! use randlab::generator::{generate, GeneratorSpec};
//!
//! let spec = GeneratorSpec::Linear { seed: 1, multiplier: 5, increment: 3, modulus: 16 };
//! let values = generate(&spec, 5);
//! assert_eq!(values, vec![0.5, 0.6875, 0.625, 0.3125, 0.75]);
//! ```

pub mod batch;
pub mod linear;
pub mod multiplicative;
pub mod quadratic;
pub mod reference;

use crate::config::validator::GeneratorRequest;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

pub use batch::{run_batches, BatchOutcome};
pub use linear::LinearCongruential;
pub use multiplicative::MultiplicativeCongruential;
pub use quadratic::QuadraticCongruential;
pub use reference::ReferenceGenerator;

/// Generator trait for normalized pseudo-random values
///
/// Each implementation owns its recurrence state. `next_value` advances the
/// recurrence by one step and returns the new state normalized to `[0, 1)`.
///
/// Implementations must be `Send` so sequences can be produced off the main
/// thread, and must never panic regardless of how degenerate the configured
/// parameters are.
pub trait Generator: Send {
    /// Advance the recurrence and return the next normalized value
    fn next_value(&mut self) -> f64;
}

/// Produce a sequence of exactly `count` values from `spec`
///
/// The sequence starts at the first recurrence step: the configured seed is
/// `x[0]` and is never emitted itself.
pub fn generate(spec: &GeneratorSpec, count: usize) -> Vec<f64> {
    let mut generator = spec.build();
    (0..count).map(|_| generator.next_value()).collect()
}

/// Generator method identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GeneratorKind {
    Linear,
    Multiplicative,
    Quadratic,
    Reference,
}

impl GeneratorKind {
    /// Canonical lowercase name used in reports and CSV exports
    pub fn name(&self) -> &'static str {
        match self {
            GeneratorKind::Linear => "linear",
            GeneratorKind::Multiplicative => "multiplicative",
            GeneratorKind::Quadratic => "quadratic",
            GeneratorKind::Reference => "reference",
        }
    }
}

impl fmt::Display for GeneratorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for GeneratorKind {
    type Err = String;

    /// Parse a method name, accepting the historical aliases `mixed`
    /// (linear with increment) and `lehmer` (multiplicative).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "linear" | "mixed" => Ok(GeneratorKind::Linear),
            "multiplicative" | "lehmer" => Ok(GeneratorKind::Multiplicative),
            "quadratic" => Ok(GeneratorKind::Quadratic),
            "reference" => Ok(GeneratorKind::Reference),
            other => Err(format!("unknown generator type: '{other}'")),
        }
    }
}

/// Fully resolved generator parameters
///
/// One variant per method, carrying exactly the integers that method needs.
/// A spec is expected to have passed through the validator already; building
/// a generator from it never fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GeneratorSpec {
    Linear {
        seed: i64,
        multiplier: i64,
        increment: i64,
        modulus: i64,
    },
    Multiplicative {
        seed: i64,
        multiplier: i64,
        modulus: i64,
    },
    Quadratic {
        seed: i64,
        quadratic: i64,
        linear: i64,
        constant: i64,
        modulus: i64,
    },
    Reference {
        seed: u64,
    },
}

impl GeneratorSpec {
    /// Method identifier for this spec
    pub fn kind(&self) -> GeneratorKind {
        match self {
            GeneratorSpec::Linear { .. } => GeneratorKind::Linear,
            GeneratorSpec::Multiplicative { .. } => GeneratorKind::Multiplicative,
            GeneratorSpec::Quadratic { .. } => GeneratorKind::Quadratic,
            GeneratorSpec::Reference { .. } => GeneratorKind::Reference,
        }
    }

    /// Instantiate the generator for this spec
    pub fn build(&self) -> Box<dyn Generator> {
        match *self {
            GeneratorSpec::Linear {
                seed,
                multiplier,
                increment,
                modulus,
            } => Box::new(LinearCongruential::new(seed, multiplier, increment, modulus)),
            GeneratorSpec::Multiplicative {
                seed,
                multiplier,
                modulus,
            } => Box::new(MultiplicativeCongruential::new(seed, multiplier, modulus)),
            GeneratorSpec::Quadratic {
                seed,
                quadratic,
                linear,
                constant,
                modulus,
            } => Box::new(QuadraticCongruential::new(
                seed, quadratic, linear, constant, modulus,
            )),
            GeneratorSpec::Reference { seed } => Box::new(ReferenceGenerator::with_seed(seed)),
        }
    }

    /// Same spec with the seed shifted by `offset`
    ///
    /// Used by the batch runner to give every batch an independent starting
    /// point. Wrapping arithmetic keeps extreme seeds from panicking.
    pub fn with_seed_offset(&self, offset: i64) -> GeneratorSpec {
        let mut spec = *self;
        match &mut spec {
            GeneratorSpec::Linear { seed, .. }
            | GeneratorSpec::Multiplicative { seed, .. }
            | GeneratorSpec::Quadratic { seed, .. } => *seed = seed.wrapping_add(offset),
            GeneratorSpec::Reference { seed } => *seed = seed.wrapping_add(offset as u64),
        }
        spec
    }

    /// Build a spec from a validated request, falling back to small textbook
    /// defaults for anything left unset
    pub fn from_request(kind: GeneratorKind, request: &GeneratorRequest) -> GeneratorSpec {
        let seed = request.seed.unwrap_or(1);
        match kind {
            GeneratorKind::Linear => GeneratorSpec::Linear {
                seed,
                multiplier: request.a.unwrap_or(5),
                increment: request.c.unwrap_or(3),
                modulus: request.m.unwrap_or(16),
            },
            GeneratorKind::Multiplicative => GeneratorSpec::Multiplicative {
                seed,
                multiplier: request.a.unwrap_or(5),
                modulus: request.m.unwrap_or(16),
            },
            GeneratorKind::Quadratic => GeneratorSpec::Quadratic {
                seed,
                quadratic: request.a.unwrap_or(1),
                linear: request.b.unwrap_or(1),
                constant: request.c.unwrap_or(1),
                modulus: request.m.unwrap_or(65_536),
            },
            GeneratorKind::Reference => GeneratorSpec::Reference { seed: seed as u64 },
        }
    }
}

/// Floored-division remainder (Python `%` semantics)
///
/// For a nonzero modulus the result has the modulus' sign, so `r / m` is
/// always in `[0, 1)`. Callers guard `modulus == 0` themselves.
pub(crate) fn floor_mod(value: i128, modulus: i128) -> i128 {
    let r = value % modulus;
    if r != 0 && (r < 0) != (modulus < 0) {
        r + modulus
    } else {
        r
    }
}

/// Modular product of two values already bounded by `i64`
///
/// The operands each fit in 64 bits, so the `i128` product cannot overflow.
pub(crate) fn mul_mod(a: i128, b: i128, modulus: i128) -> i128 {
    floor_mod(a * b, modulus)
}
