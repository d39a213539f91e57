//! Parameter and dataset validation
//!
//! A pure gate in front of the generators and the dataset pipeline. Reports
//! are complete: validation never stops at the first problem, so the caller
//! sees every error at once. The single exception is an unrecognized
//! generator type, which is terminal and reported alone.
//!
//! Validation is deliberately separate from generation. The generators
//! accept whatever integers they are handed (and quietly produce degenerate
//! sequences for bad ones); this module is the only place that says no.

use crate::dataset::Dataset;
use serde::{Deserialize, Serialize};

/// Inclusive bounds on how many numbers one request may generate
pub const MIN_COUNT: i64 = 10;
pub const MAX_COUNT: i64 = 100_000;

/// Raw generator parameters before validation
///
/// Field meanings depend on the method: `a` is the multiplier for the
/// linear/multiplicative methods and the quadratic coefficient for the
/// quadratic method; `c` is the increment for linear and the constant term
/// for quadratic; `b` is the quadratic method's linear coefficient.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratorRequest {
    pub seed: Option<i64>,
    pub a: Option<i64>,
    pub b: Option<i64>,
    pub c: Option<i64>,
    pub m: Option<i64>,
    pub count: Option<i64>,
}

/// Terminal result of a validation pass
#[derive(Debug, Clone, Serialize)]
pub struct ValidationReport {
    pub is_valid: bool,
    pub errors: Vec<String>,
}

impl ValidationReport {
    /// Build a report from the collected errors
    pub fn from_errors(errors: Vec<String>) -> Self {
        Self {
            is_valid: errors.is_empty(),
            errors,
        }
    }
}

/// Validate generator parameters for the named method
///
/// `kind` accepts the same names and aliases as the generator parser. An
/// unrecognized name short-circuits into a single-error report; every other
/// path accumulates the full error list.
pub fn validate_generator(kind: &str, request: &GeneratorRequest) -> ValidationReport {
    if !matches!(
        kind,
        "linear" | "mixed" | "multiplicative" | "lehmer" | "quadratic" | "reference"
    ) {
        return ValidationReport::from_errors(vec![format!("unknown generator type: '{kind}'")]);
    }

    let mut errors = Vec::new();

    match request.seed {
        Some(seed) if seed > 0 => {}
        _ => errors.push("the seed must be a positive integer".to_string()),
    }

    let count = request.count.unwrap_or(1);
    if !(MIN_COUNT..=MAX_COUNT).contains(&count) {
        errors.push(format!(
            "the amount of numbers must be between {MIN_COUNT} and {MAX_COUNT}"
        ));
    }

    // The reference baseline has no recurrence parameters to check.
    if kind == "reference" {
        return ValidationReport::from_errors(errors);
    }

    match request.m {
        Some(modulus) if modulus > 0 => {}
        _ => errors.push("the modulus m must be a positive integer".to_string()),
    }

    match kind {
        "linear" | "mixed" => {
            match request.a {
                None => errors.push("the multiplier 'a' is required".to_string()),
                Some(a) if a <= 0 => {
                    errors.push("the multiplier 'a' must be positive".to_string())
                }
                Some(_) => {}
            }
            match request.c {
                None => errors.push("the increment 'c' is required".to_string()),
                Some(c) if c < 0 => {
                    errors.push("the increment 'c' must be non-negative".to_string())
                }
                Some(_) => {}
            }
            push_modulus_exceeds_seed(&mut errors, request);
        }
        "multiplicative" | "lehmer" => {
            match request.a {
                None => errors.push("the multiplier 'a' is required".to_string()),
                Some(a) if a <= 0 => {
                    errors.push("the multiplier 'a' must be positive".to_string())
                }
                Some(_) => {}
            }
            push_modulus_exceeds_seed(&mut errors, request);
        }
        "quadratic" => {
            match request.a {
                None | Some(0) => errors.push(
                    "the quadratic coefficient 'a' is required and cannot be zero".to_string(),
                ),
                Some(_) => {}
            }
            if request.b.is_none() {
                errors.push("the linear coefficient 'b' is required".to_string());
            }
            if request.c.is_none() {
                errors.push("the constant term 'c' is required".to_string());
            }
        }
        _ => unreachable!("kind screened above"),
    }

    ValidationReport::from_errors(errors)
}

/// The modulus must exceed the seed or the first states repeat trivially
fn push_modulus_exceeds_seed(errors: &mut Vec<String>, request: &GeneratorRequest) {
    if let (Some(modulus), Some(seed)) = (request.m, request.seed) {
        if modulus != 0 && seed != 0 && modulus <= seed {
            errors.push("the modulus m must be greater than the seed".to_string());
        }
    }
}

/// Validate the structure of a tabular dataset
///
/// An empty dataset is terminal. Otherwise: every missing required column
/// is an error, a table without any numeric column is an error, and columns
/// containing missing values are reported together in one error.
pub fn validate_dataset(dataset: &Dataset, required_columns: &[&str]) -> ValidationReport {
    if dataset.is_empty() {
        return ValidationReport::from_errors(vec!["the dataset is empty".to_string()]);
    }

    let mut errors = Vec::new();

    for &column in required_columns {
        if dataset.column_index(column).is_none() {
            errors.push(format!("required column not found: {column}"));
        }
    }

    if dataset.numeric_column_names().is_empty() {
        errors.push("no numeric columns were found in the dataset".to_string());
    }

    let with_missing = dataset.columns_with_missing();
    if !with_missing.is_empty() {
        errors.push(format!(
            "missing values found in columns: {}",
            with_missing.join(", ")
        ));
    }

    ValidationReport::from_errors(errors)
}
