//! Kolmogorov-Smirnov uniformity test
//!
//! Compares the empirical CDF of the sample against the uniform(0, 1) CDF.
//! The p-value uses the asymptotic Kolmogorov distribution with the
//! small-sample lambda correction from Numerical Recipes.

use super::TestResult;
use serde::Serialize;

/// Default significance level
pub const DEFAULT_ALPHA: f64 = 0.05;

/// Verdict of the uniformity test
#[derive(Debug, Clone, Serialize)]
pub struct UniformityReport {
    /// Kolmogorov-Smirnov D statistic
    pub statistic: f64,
    pub p_value: f64,
    /// True when the sample is consistent with uniform(0, 1)
    pub uniform: bool,
    pub alpha: f64,
    pub interpretation: String,
}

/// Test `values` for uniformity over `[0, 1)` at significance `alpha`
///
/// An empty sample reports `D = 0`, `p = 1` rather than failing.
#[cfg(feature = "statistical-tests")]
pub fn uniformity_test(values: &[f64], alpha: f64) -> TestResult<UniformityReport> {
    let (statistic, p_value) = ks_statistic_uniform(values);
    let uniform = p_value > alpha;
    TestResult::Completed(UniformityReport {
        statistic,
        p_value,
        uniform,
        alpha,
        interpretation: format!(
            "the numbers are {}uniformly distributed (p={:.4})",
            if uniform { "" } else { "not " },
            p_value
        ),
    })
}

#[cfg(not(feature = "statistical-tests"))]
pub fn uniformity_test(_values: &[f64], _alpha: f64) -> TestResult<UniformityReport> {
    TestResult::unavailable("uniformity test")
}

/// D statistic and p-value against the uniform(0, 1) CDF
#[cfg(feature = "statistical-tests")]
fn ks_statistic_uniform(values: &[f64]) -> (f64, f64) {
    if values.is_empty() {
        return (0.0, 1.0);
    }
    let mut sorted = values.to_vec();
    sorted.sort_unstable_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));

    let n = sorted.len() as f64;
    let mut d_max = 0.0_f64;
    for (i, &x) in sorted.iter().enumerate() {
        let cdf = x.clamp(0.0, 1.0);
        let above = ((i + 1) as f64 / n - cdf).abs();
        let below = (i as f64 / n - cdf).abs();
        d_max = d_max.max(above).max(below);
    }

    let sqrt_n = n.sqrt();
    let lambda = (sqrt_n + 0.12 + 0.11 / sqrt_n) * d_max;
    (d_max, kolmogorov_survival(lambda))
}

/// Asymptotic Kolmogorov survival function Q(lambda)
///
/// Alternating series from Numerical Recipes; a series that fails to
/// converge means the statistic is effectively zero, so the probability is 1.
#[cfg(feature = "statistical-tests")]
fn kolmogorov_survival(lambda: f64) -> f64 {
    let mut fac = 2.0_f64;
    let mut sum = 0.0_f64;
    let mut previous_term = 0.0_f64;
    for j in 1..=100 {
        let term = fac * (-2.0 * (j as f64 * lambda) * (j as f64 * lambda)).exp();
        sum += term;
        if term.abs() <= 0.001 * previous_term || term.abs() <= 1.0e-8 * sum.abs() {
            return sum.clamp(0.0, 1.0);
        }
        fac = -fac;
        previous_term = term.abs();
    }
    1.0
}


#[cfg(all(test, not(feature = "statistical-tests")))]
mod fallback_tests {
    use super::*;

    #[test]
    fn test_unavailable_without_backend() {
        let result = uniformity_test(&[0.1, 0.5, 0.9], DEFAULT_ALPHA);
        assert!(!result.is_available());
    }
}
