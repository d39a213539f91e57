//! JSON report assembly
//!
//! [`AnalysisReport`] is the single document tying a sequence to everything
//! computed about it: descriptive statistics, histogram, and the randomness
//! test battery. The text printer renders the same struct, so both formats
//! always agree.

use crate::randomness::{
    chi_square_test, runs_test, serial_correlation, uniformity_test, GoodnessOfFitReport,
    RunsReport, TargetDistribution, TestResult, UniformityReport,
};
use crate::stats::{full_statistics, histogram, FullStatistics, Histogram};
use crate::Result;
use serde::Serialize;

/// Complete analysis of one sequence
#[derive(Debug, Serialize)]
pub struct AnalysisReport {
    /// Generator method or data-source label
    pub method: String,
    /// Local wall-clock time the report was assembled
    pub generated_at: String,
    pub count: usize,
    pub sequence: Vec<f64>,
    /// `None` when the sequence is empty
    pub statistics: Option<FullStatistics>,
    /// `None` when the sequence is empty
    pub histogram: Option<Histogram>,
    pub uniformity: TestResult<UniformityReport>,
    pub goodness_of_fit: TestResult<GoodnessOfFitReport>,
    pub runs: TestResult<RunsReport>,
    pub serial_lag: usize,
    pub serial_correlation: f64,
}

impl AnalysisReport {
    /// Run the full battery over `values`
    pub fn build(
        method: &str,
        values: Vec<f64>,
        bins: usize,
        alpha: f64,
        fit: TargetDistribution,
        lag: usize,
    ) -> AnalysisReport {
        AnalysisReport {
            method: method.to_string(),
            generated_at: chrono::Local::now().format("%Y-%m-%d %H:%M:%S").to_string(),
            count: values.len(),
            statistics: full_statistics(&values),
            histogram: histogram(&values, bins),
            uniformity: uniformity_test(&values, alpha),
            goodness_of_fit: chi_square_test(&values, fit),
            runs: runs_test(&values),
            serial_lag: lag,
            serial_correlation: serial_correlation(&values, lag),
            sequence: values,
        }
    }

    /// Pretty-printed JSON document
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator::{generate, GeneratorSpec};

    fn sample_report() -> AnalysisReport {
        let values = generate(&GeneratorSpec::Reference { seed: 5 }, 500);
        AnalysisReport::build("reference", values, 10, 0.05, TargetDistribution::Uniform, 1)
    }

    #[test]
    fn test_report_shape() {
        let report = sample_report();
        assert_eq!(report.count, 500);
        assert_eq!(report.sequence.len(), 500);
        assert!(report.statistics.is_some());
        let hist = report.histogram.as_ref().unwrap();
        assert_eq!(hist.frequencies.iter().sum::<u64>(), 500);
    }

    #[test]
    fn test_empty_sequence_report() {
        let report =
            AnalysisReport::build("sample", Vec::new(), 10, 0.05, TargetDistribution::Uniform, 1);
        assert_eq!(report.count, 0);
        assert!(report.statistics.is_none());
        assert!(report.histogram.is_none());
        assert_eq!(report.serial_correlation, 0.0);
    }

    #[test]
    fn test_json_serialization() {
        let rendered = sample_report().to_json().unwrap();
        assert!(rendered.contains("\"method\": \"reference\""));
        assert!(rendered.contains("\"mean\""));
        assert!(rendered.contains("\"frequencies\""));
    }

    #[cfg(feature = "statistical-tests")]
    #[test]
    fn test_tests_completed_with_backend() {
        let report = sample_report();
        assert!(report.uniformity.is_available());
        assert!(report.goodness_of_fit.is_available());
        assert!(report.runs.is_available());
    }

    #[cfg(not(feature = "statistical-tests"))]
    #[test]
    fn test_tests_unavailable_without_backend() {
        let report = sample_report();
        assert!(!report.uniformity.is_available());
        assert!(!report.goodness_of_fit.is_available());
        assert!(!report.runs.is_available());
        let rendered = report.to_json().unwrap();
        assert!(rendered.contains("not compiled in"));
    }
}
