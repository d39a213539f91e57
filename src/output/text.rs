//! Human-readable text output

use crate::config::validator::ValidationReport;
use crate::dataset::DatasetSummary;
use crate::generator::BatchOutcome;
use crate::output::AnalysisReport;
use crate::randomness::TestResult;
use crate::stats::BasicStatistics;

/// Print the full analysis report to the console
///
/// Shows a preview of the sequence, the descriptive statistics, the
/// histogram as a bar chart, and the verdict of every randomness test.
pub fn print_analysis(report: &AnalysisReport, precision: usize, preview: usize) {
    println!("═══════════════════════════════════════════════════════════");
    println!("                  ANALYSIS: {}", report.method);
    println!("═══════════════════════════════════════════════════════════");
    println!();
    println!("Generated: {}", report.generated_at);
    println!("Values:    {}", report.count);
    println!();

    if report.count > 0 {
        println!("Sequence preview:");
        println!("  {}", preview_values(&report.sequence, preview, precision));
        println!();
    }

    match &report.statistics {
        Some(stats) => {
            println!("Statistics:");
            print_basic(&stats.basic, precision);
            println!("  Mode:       {}", preview_values(&stats.mode, 5, precision));
            println!("  Skewness:   {:.*}", precision, stats.skewness);
            println!("  Kurtosis:   {:.*}", precision, stats.kurtosis);
            println!(
                "  Coef. var.: {:.*}",
                precision, stats.coefficient_of_variation
            );
        }
        None => println!("Statistics: no data"),
    }
    println!();

    if let Some(hist) = &report.histogram {
        println!("Histogram (bin width {:.*}):", precision, hist.bin_width);
        let peak = hist.frequencies.iter().copied().max().unwrap_or(1).max(1);
        for (label, &count) in hist.bin_labels.iter().zip(&hist.frequencies) {
            let bar_length = (count * 40 / peak) as usize;
            println!("  {label:>17} | {:<40} {count}", "#".repeat(bar_length));
        }
        println!();
    }

    println!("Randomness tests:");
    match &report.uniformity {
        TestResult::Completed(test) => println!(
            "  Uniformity (KS):     D={:.4}  p={:.4}  -> {}",
            test.statistic, test.p_value, test.interpretation
        ),
        TestResult::Unavailable { interpretation, .. } => {
            println!("  Uniformity (KS):     unavailable ({interpretation})")
        }
    }
    match &report.goodness_of_fit {
        TestResult::Completed(test) => println!(
            "  Goodness of fit:     stat={:.4}  p={:.4}  -> {}",
            test.statistic, test.p_value, test.interpretation
        ),
        TestResult::Unavailable { interpretation, .. } => {
            println!("  Goodness of fit:     unavailable ({interpretation})")
        }
    }
    match &report.runs {
        TestResult::Completed(test) => println!(
            "  Runs test:           runs={}  z={:.4}  p={:.4}  -> {}",
            test.runs, test.statistic, test.p_value, test.interpretation
        ),
        TestResult::Unavailable { interpretation, .. } => {
            println!("  Runs test:           unavailable ({interpretation})")
        }
    }
    println!(
        "  Serial correlation:  lag={}  r={:.4}",
        report.serial_lag, report.serial_correlation
    );
}

/// Print a batched run: one statistics row per batch plus the pooled view
pub fn print_batch_summary(outcome: &BatchOutcome, method: &str, precision: usize) {
    println!("═══════════════════════════════════════════════════════════");
    println!("                  BATCH RUN: {method}");
    println!("═══════════════════════════════════════════════════════════");
    println!();
    println!(
        "Batches: {} ({} values total)",
        outcome.batches.len(),
        outcome.total_values()
    );
    println!();
    println!("  batch      mean    median   std dev       min       max");
    for (index, stats) in outcome.per_batch.iter().enumerate() {
        match stats {
            Some(stats) => println!(
                "  {index:>5}  {:>8.*}  {:>8.*}  {:>8.*}  {:>8.*}  {:>8.*}",
                precision, stats.mean, precision, stats.median, precision, stats.std_dev,
                precision, stats.min, precision, stats.max
            ),
            None => println!("  {index:>5}  (empty batch)"),
        }
    }
    println!();
    match &outcome.pooled {
        Some(stats) => {
            println!("Pooled statistics:");
            print_basic(stats, precision);
        }
        None => println!("Pooled statistics: no data"),
    }
}

/// Print a validation report
pub fn print_validation(report: &ValidationReport) {
    if report.is_valid {
        println!("Parameters valid");
    } else {
        println!("Validation failed with {} error(s):", report.errors.len());
        for error in &report.errors {
            println!("  - {error}");
        }
    }
}

/// Print a dataset summary alongside its validation result
pub fn print_dataset_summary(summary: &DatasetSummary, report: &ValidationReport) {
    println!("═══════════════════════════════════════════════════════════");
    println!("                  DATASET INSPECTION");
    println!("═══════════════════════════════════════════════════════════");
    println!();
    println!("Rows:    {}", summary.rows);
    println!("Columns: {}", summary.columns.len());
    println!();
    for column in &summary.columns {
        println!(
            "  {:<20} {:?}  missing={}  unique={}",
            column.name, column.kind, column.missing, column.unique
        );
        if let Some(stats) = &column.statistics {
            println!(
                "    mean={:.4}  std={:.4}  min={:.4}  max={:.4}",
                stats.mean, stats.std_dev, stats.min, stats.max
            );
        }
    }
    println!();
    print_validation(report);
}

fn print_basic(stats: &BasicStatistics, precision: usize) {
    println!("  Mean:       {:.*}", precision, stats.mean);
    println!("  Median:     {:.*}", precision, stats.median);
    println!("  Std dev:    {:.*}", precision, stats.std_dev);
    println!("  Variance:   {:.*}", precision, stats.variance);
    println!("  Min:        {:.*}", precision, stats.min);
    println!("  Max:        {:.*}", precision, stats.max);
    println!("  Range:      {:.*}", precision, stats.range);
    println!(
        "  Quartiles:  q1={:.*}  q3={:.*}  iqr={:.*}",
        precision, stats.q1, precision, stats.q3, precision, stats.iqr
    );
}

/// First `limit` values as a comma-separated string, with an ellipsis when
/// truncated
fn preview_values(values: &[f64], limit: usize, precision: usize) -> String {
    let shown: Vec<String> = values
        .iter()
        .take(limit)
        .map(|v| format!("{v:.precision$}"))
        .collect();
    if values.len() > limit {
        format!("{}, ... ({} more)", shown.join(", "), values.len() - limit)
    } else {
        shown.join(", ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preview_short_list() {
        assert_eq!(preview_values(&[0.5, 0.25], 10, 2), "0.50, 0.25");
    }

    #[test]
    fn test_preview_truncates() {
        let values = vec![0.1; 12];
        let preview = preview_values(&values, 10, 1);
        assert!(preview.ends_with("... (2 more)"));
    }

    #[test]
    fn test_preview_empty() {
        assert_eq!(preview_values(&[], 10, 4), "");
    }
}
