//! Runs test for randomness
//!
//! Converts the sequence into an above/below-median sign sequence (strictly
//! above counts as 1), counts maximal same-sign runs, and compares the
//! observed count against its expectation under independence. The z
//! statistic is referred to the standard normal for a two-tailed p-value.

use super::TestResult;
use serde::Serialize;

/// Verdict of the runs test
#[derive(Debug, Clone, Serialize)]
pub struct RunsReport {
    /// Observed number of runs
    pub runs: usize,
    /// z statistic; 0.0 when the run-count variance is zero
    pub statistic: f64,
    pub p_value: f64,
    /// True when the sequence is consistent with randomness
    pub random: bool,
    pub interpretation: String,
}

/// Runs test over the above/below-median sign sequence
///
/// An empty sample reports zero runs with `p = 1`; a one-sided sample (all
/// values on the same side of the median) has zero variance and reports
/// `z = 0`.
#[cfg(feature = "statistical-tests")]
pub fn runs_test(values: &[f64]) -> TestResult<RunsReport> {
    use statrs::distribution::{ContinuousCDF, Normal};

    if values.is_empty() {
        return TestResult::Completed(RunsReport {
            runs: 0,
            statistic: 0.0,
            p_value: 1.0,
            random: true,
            interpretation: "the sequence is empty; no runs to evaluate".to_string(),
        });
    }

    let median = crate::stats::median(values).unwrap_or(0.0);
    let signs: Vec<u8> = values
        .iter()
        .map(|&x| if x > median { 1 } else { 0 })
        .collect();

    let mut runs = 1usize;
    for pair in signs.windows(2) {
        if pair[0] != pair[1] {
            runs += 1;
        }
    }

    let n1 = signs.iter().filter(|&&s| s == 1).count() as f64;
    let n2 = signs.len() as f64 - n1;
    let total = n1 + n2;

    let expected = 2.0 * n1 * n2 / total + 1.0;
    let variance = if total > 1.0 {
        (2.0 * n1 * n2 * (2.0 * n1 * n2 - n1 - n2)) / (total * total * (total - 1.0))
    } else {
        0.0
    };
    let statistic = if variance == 0.0 {
        0.0
    } else {
        (runs as f64 - expected) / variance.sqrt()
    };

    let normal = Normal::standard();
    let p_value = 2.0 * (1.0 - normal.cdf(statistic.abs()));
    let random = p_value > super::SIGNIFICANCE;

    TestResult::Completed(RunsReport {
        runs,
        statistic,
        p_value,
        random,
        interpretation: format!(
            "the sequence is {}random (p={:.4})",
            if random { "" } else { "not " },
            p_value
        ),
    })
}

#[cfg(not(feature = "statistical-tests"))]
pub fn runs_test(_values: &[f64]) -> TestResult<RunsReport> {
    TestResult::unavailable("runs test")
}

#[cfg(all(test, feature = "statistical-tests"))]
mod tests {
    use super::*;
    use crate::generator::{generate, GeneratorSpec};

    fn completed(result: TestResult<RunsReport>) -> RunsReport {
        match result {
            TestResult::Completed(report) => report,
            TestResult::Unavailable { .. } => panic!("test should be available"),
        }
    }

    #[test]
    fn test_alternating_sequence_has_maximal_runs() {
        // Strict alternation above/below the median: every element starts a run.
        let values: Vec<f64> = (0..40)
            .map(|i| if i % 2 == 0 { 0.2 } else { 0.8 })
            .collect();
        let report = completed(runs_test(&values));
        assert_eq!(report.runs, values.len());
        // Far too many runs for a random sequence.
        assert!(!report.random);
    }

    #[test]
    fn test_blocked_sequence_has_two_runs() {
        let mut values = vec![0.1; 20];
        values.extend(vec![0.9; 20]);
        let report = completed(runs_test(&values));
        assert_eq!(report.runs, 2);
        assert!(!report.random, "two runs in 40 samples is not random");
    }

    #[test]
    fn test_reference_generator_looks_random() {
        let values = generate(&GeneratorSpec::Reference { seed: 7 }, 1000);
        let report = completed(runs_test(&values));
        // The z statistic for a healthy generator stays within a few sigma.
        assert!(
            report.statistic.abs() < 3.5,
            "p={} z={}",
            report.p_value,
            report.statistic
        );
        assert!(report.p_value > 0.0005);
    }

    #[test]
    fn test_empty_sequence() {
        let report = completed(runs_test(&[]));
        assert_eq!(report.runs, 0);
        assert_eq!(report.statistic, 0.0);
        assert_eq!(report.p_value, 1.0);
    }

    #[test]
    fn test_constant_sequence_has_zero_variance() {
        // All values equal: nothing is strictly above the median, so the
        // variance collapses and z pins to zero.
        let report = completed(runs_test(&[0.5; 30]));
        assert_eq!(report.runs, 1);
        assert_eq!(report.statistic, 0.0);
        assert_eq!(report.p_value, 1.0);
        assert!(report.random);
    }

    #[test]
    fn test_singleton_sequence() {
        let report = completed(runs_test(&[0.5]));
        assert_eq!(report.runs, 1);
        assert_eq!(report.statistic, 0.0);
    }
}
