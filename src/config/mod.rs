//! Configuration module
//!
//! Handles CLI argument parsing, TOML parameter files, and validation.
//! Defaults follow the classroom presets: small parameters for the linear
//! method so cycles are visible, the MINSTD pair for the multiplicative
//! method, and the Numerical Recipes constants available through the TOML
//! template for full-period runs.

pub mod cli;
pub mod toml;
pub mod validator;

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Complete tool configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub linear: LinearDefaults,
    #[serde(default)]
    pub multiplicative: MultiplicativeDefaults,
    #[serde(default)]
    pub quadratic: QuadraticDefaults,
    #[serde(default)]
    pub limits: Limits,
    #[serde(default)]
    pub output: OutputConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            linear: LinearDefaults::default(),
            multiplicative: MultiplicativeDefaults::default(),
            quadratic: QuadraticDefaults::default(),
            limits: Limits::default(),
            output: OutputConfig::default(),
        }
    }
}

/// Default parameters for the linear method
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LinearDefaults {
    #[serde(default = "default_seed")]
    pub seed: i64,
    #[serde(default = "default_linear_multiplier")]
    pub multiplier: i64,
    #[serde(default = "default_linear_increment")]
    pub increment: i64,
    #[serde(default = "default_linear_modulus")]
    pub modulus: i64,
}

impl Default for LinearDefaults {
    fn default() -> Self {
        Self {
            seed: default_seed(),
            multiplier: default_linear_multiplier(),
            increment: default_linear_increment(),
            modulus: default_linear_modulus(),
        }
    }
}

/// Default parameters for the multiplicative method (MINSTD)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MultiplicativeDefaults {
    #[serde(default = "default_seed")]
    pub seed: i64,
    #[serde(default = "default_minstd_multiplier")]
    pub multiplier: i64,
    #[serde(default = "default_minstd_modulus")]
    pub modulus: i64,
}

impl Default for MultiplicativeDefaults {
    fn default() -> Self {
        Self {
            seed: default_seed(),
            multiplier: default_minstd_multiplier(),
            modulus: default_minstd_modulus(),
        }
    }
}

/// Default parameters for the quadratic method
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuadraticDefaults {
    #[serde(default = "default_seed")]
    pub seed: i64,
    #[serde(default = "default_one")]
    pub quadratic: i64,
    #[serde(default = "default_one")]
    pub linear: i64,
    #[serde(default = "default_one")]
    pub constant: i64,
    #[serde(default = "default_quadratic_modulus")]
    pub modulus: i64,
}

impl Default for QuadraticDefaults {
    fn default() -> Self {
        Self {
            seed: default_seed(),
            quadratic: default_one(),
            linear: default_one(),
            constant: default_one(),
            modulus: default_quadratic_modulus(),
        }
    }
}

/// Safety limits for generation and file processing
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Limits {
    /// Smallest sequence worth analyzing
    #[serde(default = "default_min_count")]
    pub min_count: i64,
    /// Largest sequence a single request may produce
    #[serde(default = "default_max_count")]
    pub max_count: i64,
    /// Rows beyond this trigger a warning during dataset inspection
    #[serde(default = "default_max_rows")]
    pub max_rows: usize,
    /// Batches per batched run when not specified
    #[serde(default = "default_batches")]
    pub default_batches: usize,
}

impl Default for Limits {
    fn default() -> Self {
        Self {
            min_count: default_min_count(),
            max_count: default_max_count(),
            max_rows: default_max_rows(),
            default_batches: default_batches(),
        }
    }
}

/// Output and export configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Directory for timestamped CSV exports
    #[serde(default = "default_export_dir")]
    pub export_dir: PathBuf,
    /// Values shown in text previews
    #[serde(default = "default_preview")]
    pub preview: usize,
    /// Decimal places in text reports
    #[serde(default = "default_precision")]
    pub precision: usize,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            export_dir: default_export_dir(),
            preview: default_preview(),
            precision: default_precision(),
        }
    }
}

fn default_seed() -> i64 {
    1
}

fn default_one() -> i64 {
    1
}

// Small classroom constants: the cycle is visible within a single preview.
fn default_linear_multiplier() -> i64 {
    5
}

fn default_linear_increment() -> i64 {
    3
}

fn default_linear_modulus() -> i64 {
    16
}

// MINSTD: Park-Miller minimal standard generator.
fn default_minstd_multiplier() -> i64 {
    48_271
}

fn default_minstd_modulus() -> i64 {
    2_147_483_647
}

fn default_quadratic_modulus() -> i64 {
    65_536
}

fn default_min_count() -> i64 {
    10
}

fn default_max_count() -> i64 {
    100_000
}

fn default_max_rows() -> usize {
    100_000
}

fn default_batches() -> usize {
    5
}

fn default_export_dir() -> PathBuf {
    PathBuf::from("results")
}

fn default_preview() -> usize {
    10
}

fn default_precision() -> usize {
    4
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.linear.multiplier, 5);
        assert_eq!(config.linear.modulus, 16);
        assert_eq!(config.multiplicative.multiplier, 48_271);
        assert_eq!(config.multiplicative.modulus, 2_147_483_647);
        assert_eq!(config.quadratic.modulus, 65_536);
        assert_eq!(config.limits.min_count, 10);
        assert_eq!(config.limits.max_count, 100_000);
        assert_eq!(config.limits.default_batches, 5);
    }
}
