//! Chi-square goodness-of-fit test
//!
//! Against the uniform target the sample is binned into 10 equal-width
//! intervals and the observed counts are compared with `N/10` via the
//! classic chi-square statistic (9 degrees of freedom). Against the normal
//! target a Shapiro-Wilk style statistic is reported instead: the
//! Shapiro-Francia W', the squared correlation between the order statistics
//! and their Blom-score normal expectations, with Royston's approximation
//! for the p-value.

use super::TestResult;
use serde::Serialize;

/// Number of bins for the uniform chi-square statistic
const CHI_SQUARE_BINS: usize = 10;

/// Distribution the sample is tested against
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TargetDistribution {
    Uniform,
    Normal,
}

impl TargetDistribution {
    pub fn name(&self) -> &'static str {
        match self {
            TargetDistribution::Uniform => "uniform",
            TargetDistribution::Normal => "normal",
        }
    }
}

/// Verdict of the goodness-of-fit test
#[derive(Debug, Clone, Serialize)]
pub struct GoodnessOfFitReport {
    /// Chi-square statistic (uniform) or W' statistic (normal)
    pub statistic: f64,
    pub p_value: f64,
    pub distribution: TargetDistribution,
    /// True when the sample is consistent with the target distribution
    pub fits: bool,
    pub interpretation: String,
}

/// Test how well `values` fit the target distribution
///
/// Degenerate samples (empty input; for the normal target, fewer than five
/// values or zero spread) report a zero statistic with `p = 1` rather than
/// failing.
#[cfg(feature = "statistical-tests")]
pub fn chi_square_test(values: &[f64], target: TargetDistribution) -> TestResult<GoodnessOfFitReport> {
    let (statistic, p_value) = match target {
        TargetDistribution::Uniform => uniform_chi_square(values),
        TargetDistribution::Normal => shapiro_francia(values),
    };
    let fits = p_value > super::SIGNIFICANCE;
    TestResult::Completed(GoodnessOfFitReport {
        statistic,
        p_value,
        distribution: target,
        fits,
        interpretation: format!(
            "the numbers fit a {} distribution {} (p={:.4})",
            target.name(),
            if fits { "adequately" } else { "inadequately" },
            p_value
        ),
    })
}

#[cfg(not(feature = "statistical-tests"))]
pub fn chi_square_test(
    _values: &[f64],
    _target: TargetDistribution,
) -> TestResult<GoodnessOfFitReport> {
    TestResult::unavailable("goodness-of-fit test")
}

/// Chi-square statistic over 10 equal-width bins with expected counts N/10
#[cfg(feature = "statistical-tests")]
fn uniform_chi_square(values: &[f64]) -> (f64, f64) {
    use statrs::distribution::{ChiSquared, ContinuousCDF};

    let observed = match crate::stats::histogram(values, CHI_SQUARE_BINS) {
        Some(hist) => hist.frequencies,
        None => return (0.0, 1.0),
    };
    let expected = values.len() as f64 / CHI_SQUARE_BINS as f64;
    let statistic: f64 = observed
        .iter()
        .map(|&count| {
            let diff = count as f64 - expected;
            diff * diff / expected
        })
        .sum();

    let p_value = match ChiSquared::new((CHI_SQUARE_BINS - 1) as f64) {
        Ok(dist) => 1.0 - dist.cdf(statistic),
        Err(_) => 1.0,
    };
    (statistic, p_value)
}

/// Shapiro-Francia W' statistic with Royston's p-value approximation
///
/// W' is the squared Pearson correlation between the sorted sample and the
/// Blom-score expected normal order statistics. Royston (1993) gives the
/// normal approximation for `ln(1 - W')` used for the p-value.
#[cfg(feature = "statistical-tests")]
fn shapiro_francia(values: &[f64]) -> (f64, f64) {
    use statrs::distribution::{ContinuousCDF, Normal};

    let n = values.len();
    if n < 5 {
        return (0.0, 1.0);
    }
    let mut sorted = values.to_vec();
    sorted.sort_unstable_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));
    if sorted[0] == sorted[n - 1] {
        // Zero spread: normality is undefined, report the degenerate answer.
        return (0.0, 1.0);
    }

    let normal = Normal::standard();
    let scores: Vec<f64> = (1..=n)
        .map(|i| normal.inverse_cdf((i as f64 - 0.375) / (n as f64 + 0.25)))
        .collect();
    let w = super::serial::pearson(&sorted, &scores).powi(2);

    let nf = n as f64;
    let u = nf.ln().ln();
    let v = nf.ln();
    let mu = -1.2725 + 1.0521 * (u - v);
    let sigma = 1.0308 - 0.26758 * (u + 2.0 / v);
    let z = ((1.0 - w).max(1e-12).ln() - mu) / sigma;
    let p_value = 1.0 - normal.cdf(z);
    (w, p_value)
}

#[cfg(all(test, feature = "statistical-tests"))]
mod tests {
    use super::*;
    use crate::generator::{generate, GeneratorSpec};

    fn completed(result: TestResult<GoodnessOfFitReport>) -> GoodnessOfFitReport {
        match result {
            TestResult::Completed(report) => report,
            TestResult::Unavailable { .. } => panic!("test should be available"),
        }
    }

    #[test]
    fn test_balanced_bins_have_zero_statistic() {
        // 10 values per decile: observed == expected in every bin.
        let values: Vec<f64> = (0..100).map(|i| (i as f64 + 0.5) / 100.0).collect();
        let report = completed(chi_square_test(&values, TargetDistribution::Uniform));
        assert!(report.statistic.abs() < 1e-9);
        assert!(report.fits);
        assert!((report.p_value - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_skewed_sample_rejected_as_uniform() {
        // Histogram bins span [min, max], so the imbalance between deciles is
        // what the statistic sees.
        let mut values: Vec<f64> = (0..90).map(|i| i as f64 / 1000.0).collect();
        values.push(1.0);
        let report = completed(chi_square_test(&values, TargetDistribution::Uniform));
        assert!(!report.fits, "p={} chi2={}", report.p_value, report.statistic);
        assert!(report.interpretation.contains("inadequately"));
    }

    #[test]
    fn test_empty_sample_is_degenerate() {
        let report = completed(chi_square_test(&[], TargetDistribution::Uniform));
        assert_eq!(report.statistic, 0.0);
        assert_eq!(report.p_value, 1.0);
    }

    #[test]
    fn test_chi_square_known_value() {
        // Two-level sample: 15 values at the low end, 5 at the high end.
        let mut values = Vec::new();
        for i in 0..15 {
            values.push(i as f64 * 0.001);
        }
        for i in 0..5 {
            values.push(0.9 + i as f64 * 0.001);
        }
        let report = completed(chi_square_test(&values, TargetDistribution::Uniform));
        // Bins: 15 in the first, 5 in the last, expected 2 everywhere:
        // chi2 = 13^2/2 + 8*(0-2)^2/2 + 3^2/2 = 84.5 + 16 + 4.5 = 105
        assert!((report.statistic - 105.0).abs() < 1e-9);
        assert!(!report.fits);
    }

    #[test]
    fn test_normal_target_accepts_gaussian_shape() {
        // Sum of twelve uniforms is close enough to normal for W'.
        let uniform = generate(&GeneratorSpec::Reference { seed: 11 }, 12 * 200);
        let values: Vec<f64> = uniform.chunks(12).map(|chunk| chunk.iter().sum()).collect();
        let report = completed(chi_square_test(&values, TargetDistribution::Normal));
        // W' should be very close to 1 for a near-normal sample.
        assert!(report.statistic > 0.98, "w={}", report.statistic);
        assert!(report.p_value > 0.001, "p={}", report.p_value);
    }

    #[test]
    fn test_normal_target_rejects_uniform_sample() {
        let values = generate(&GeneratorSpec::Reference { seed: 3 }, 3000);
        let report = completed(chi_square_test(&values, TargetDistribution::Normal));
        assert!(!report.fits, "p={} w={}", report.p_value, report.statistic);
    }

    #[test]
    fn test_normal_target_degenerate_samples() {
        let tiny = completed(chi_square_test(&[0.1, 0.2, 0.3], TargetDistribution::Normal));
        assert_eq!(tiny.statistic, 0.0);
        assert_eq!(tiny.p_value, 1.0);

        let constant = completed(chi_square_test(&[0.5; 20], TargetDistribution::Normal));
        assert_eq!(constant.statistic, 0.0);
        assert_eq!(constant.p_value, 1.0);
    }
}

#[cfg(all(test, not(feature = "statistical-tests")))]
mod fallback_tests {
    use super::*;

    #[test]
    fn test_unavailable_without_backend() {
        let result = chi_square_test(&[0.1, 0.5], TargetDistribution::Uniform);
        assert!(!result.is_available());
    }
}
