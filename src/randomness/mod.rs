//! Goodness-of-fit and randomness tests
//!
//! Hypothesis tests over a generated sequence, each producing a structured
//! verdict with a test statistic, p-value, boolean conclusion, and a
//! human-readable interpretation.
//!
//! # Tests
//!
//! - **Uniformity**: Kolmogorov-Smirnov against uniform(0, 1)
//! - **Goodness of fit**: chi-square against uniform, or a Shapiro-Wilk
//!   style statistic against normal
//! - **Runs test**: independence check over the above/below-median sign
//!   sequence
//! - **Serial correlation**: lag-k Pearson autocorrelation (plain
//!   arithmetic, always available)
//!
//! # Availability
//!
//! The p-value machinery (chi-square and normal CDFs) comes from the
//! optional `statrs` back end behind the `statistical-tests` feature
//! (enabled by default). Compiled without it, every hypothesis test returns
//! [`TestResult::Unavailable`] instead of failing; callers branch on the
//! variant, never on a panic.

pub mod chi_square;
pub mod runs;
pub mod serial;
pub mod uniformity;

use serde::Serialize;

pub use chi_square::{chi_square_test, GoodnessOfFitReport, TargetDistribution};
pub use runs::{runs_test, RunsReport};
pub use serial::serial_correlation;
pub use uniformity::{uniformity_test, UniformityReport, DEFAULT_ALPHA};

/// Significance threshold shared by the fixed-level tests
pub const SIGNIFICANCE: f64 = 0.05;

/// Outcome of a hypothesis test
///
/// `Unavailable` models the statistical back end being compiled out; it is
/// a report, not an error, and serializes alongside completed results.
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum TestResult<T> {
    Completed(T),
    Unavailable {
        error: String,
        interpretation: String,
    },
}

impl<T> TestResult<T> {
    /// Standard unavailable result for a named test
    pub fn unavailable(test_name: &str) -> Self {
        TestResult::Unavailable {
            error: "statistical back end not compiled in".to_string(),
            interpretation: format!(
                "the {test_name} could not be run; rebuild with the `statistical-tests` feature"
            ),
        }
    }

    /// True when the test actually ran
    pub fn is_available(&self) -> bool {
        matches!(self, TestResult::Completed(_))
    }

    /// The completed report, if the test ran
    pub fn report(&self) -> Option<&T> {
        match self {
            TestResult::Completed(report) => Some(report),
            TestResult::Unavailable { .. } => None,
        }
    }
}

/// True when the statistical back end is compiled in
pub const fn backend_available() -> bool {
    cfg!(feature = "statistical-tests")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unavailable_result_shape() {
        let result: TestResult<()> = TestResult::unavailable("runs test");
        assert!(!result.is_available());
        assert!(result.report().is_none());
        match result {
            TestResult::Unavailable {
                error,
                interpretation,
            } => {
                assert!(error.contains("not compiled in"));
                assert!(interpretation.contains("runs test"));
            }
            TestResult::Completed(_) => panic!("expected unavailable"),
        }
    }

    #[test]
    fn test_backend_flag_matches_feature() {
        assert_eq!(backend_available(), cfg!(feature = "statistical-tests"));
    }
}
