//! randlab - Congruential sequence generation and statistical analysis
//!
//! randlab generates pseudo-random number sequences with the classic
//! congruential recurrences and runs them through a descriptive-statistics
//! and randomness-test battery, the workflow of a computational-statistics
//! course in a single binary.
//!
//! # Architecture
//!
//! - **Generators**: linear, multiplicative, and quadratic congruential
//!   recurrences plus a seeded xoshiro256++ baseline
//! - **Statistics engine**: moments, quantiles, mode, and histogram binning
//! - **Randomness tests**: Kolmogorov-Smirnov uniformity, chi-square
//!   goodness of fit, runs test, serial correlation
//! - **Validation**: complete-error-list checks for generator parameters
//!   and tabular datasets
//! - **Output**: text, JSON, and timestamped CSV exports

pub mod config;
pub mod dataset;
pub mod generator;
pub mod output;
pub mod randomness;
pub mod stats;

// Re-export commonly used types
pub use config::validator::ValidationReport;
pub use config::Config;
pub use generator::{Generator, GeneratorKind, GeneratorSpec};

/// Result type used throughout randlab
pub type Result<T> = anyhow::Result<T>;
