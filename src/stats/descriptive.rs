//! Summary statistics
//!
//! Population-moment conventions throughout: variance and standard deviation
//! divide by N, skewness is Fisher's third standardized moment, kurtosis is
//! reported as excess (normal distribution sits at 0). Quartiles use the
//! linear-interpolation method, so `median == percentile(50)` by
//! construction.

use serde::Serialize;
use std::cmp::Ordering;
use std::collections::HashMap;

/// Basic summary of a numeric sequence
///
/// Everything a per-batch report needs: central tendency, spread, and the
/// quartile-based position measures.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BasicStatistics {
    pub mean: f64,
    pub median: f64,
    pub std_dev: f64,
    pub variance: f64,
    pub min: f64,
    pub max: f64,
    pub range: f64,
    pub q1: f64,
    pub q3: f64,
    pub iqr: f64,
}

/// Full summary: basic statistics plus shape measures
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FullStatistics {
    /// Sample size
    pub n: usize,
    #[serde(flatten)]
    pub basic: BasicStatistics,
    /// All values tied for the highest frequency, in first-occurrence order
    pub mode: Vec<f64>,
    /// Fisher skewness; 0.0 when n < 3 or the spread is zero
    pub skewness: f64,
    /// Excess kurtosis; 0.0 when n < 4 or the spread is zero
    pub kurtosis: f64,
    /// std_dev / mean; 0.0 when the mean is zero
    pub coefficient_of_variation: f64,
}

/// Compute the basic summary, or `None` for an empty sequence
pub fn basic_statistics(values: &[f64]) -> Option<BasicStatistics> {
    if values.is_empty() {
        return None;
    }
    let n = values.len() as f64;
    let mean = values.iter().sum::<f64>() / n;
    let variance = values.iter().map(|v| (v - mean) * (v - mean)).sum::<f64>() / n;
    let std_dev = variance.sqrt();

    let mut sorted = values.to_vec();
    sorted.sort_unstable_by(|a, b| a.partial_cmp(b).unwrap_or(Ordering::Equal));
    let min = sorted[0];
    let max = sorted[sorted.len() - 1];
    let median = percentile_sorted(&sorted, 50.0);
    let q1 = percentile_sorted(&sorted, 25.0);
    let q3 = percentile_sorted(&sorted, 75.0);

    Some(BasicStatistics {
        mean,
        median,
        std_dev,
        variance,
        min,
        max,
        range: max - min,
        q1,
        q3,
        iqr: q3 - q1,
    })
}

/// Compute the full summary, or `None` for an empty sequence
pub fn full_statistics(values: &[f64]) -> Option<FullStatistics> {
    let basic = basic_statistics(values)?;
    let coefficient_of_variation = if basic.mean == 0.0 {
        0.0
    } else {
        basic.std_dev / basic.mean
    };
    Some(FullStatistics {
        n: values.len(),
        mode: mode(values),
        skewness: skewness(values, basic.mean, basic.std_dev),
        kurtosis: kurtosis(values, basic.mean, basic.std_dev),
        coefficient_of_variation,
        basic,
    })
}

/// Median of a sequence, or `None` when empty
pub fn median(values: &[f64]) -> Option<f64> {
    let mut sorted = values.to_vec();
    if sorted.is_empty() {
        return None;
    }
    sorted.sort_unstable_by(|a, b| a.partial_cmp(b).unwrap_or(Ordering::Equal));
    Some(percentile_sorted(&sorted, 50.0))
}

/// Linear-interpolation percentile over pre-sorted data
///
/// For `p` in percent: `h = (n - 1) * p / 100`, then interpolate between the
/// neighbors of `h`. Matches the NumPy/R default.
pub(crate) fn percentile_sorted(sorted: &[f64], p: f64) -> f64 {
    let n = sorted.len();
    if n == 1 {
        return sorted[0];
    }
    let h = (n - 1) as f64 * p / 100.0;
    let j = h.floor() as usize;
    let g = h - h.floor();
    if j + 1 >= n {
        sorted[n - 1]
    } else {
        (1.0 - g) * sorted[j] + g * sorted[j + 1]
    }
}

/// All values sharing the maximum frequency, in first-occurrence order
///
/// Values are compared bitwise, which is exact for generator output and
/// keeps the function total over NaN without ordering headaches.
fn mode(values: &[f64]) -> Vec<f64> {
    let mut counts: HashMap<u64, usize> = HashMap::new();
    let mut order: Vec<u64> = Vec::new();
    for &value in values {
        let key = value.to_bits();
        let entry = counts.entry(key).or_insert(0);
        if *entry == 0 {
            order.push(key);
        }
        *entry += 1;
    }
    let max_count = counts.values().copied().max().unwrap_or(0);
    order
        .into_iter()
        .filter(|key| counts[key] == max_count)
        .map(f64::from_bits)
        .collect()
}

/// Fisher's moment coefficient of skewness (population formula)
fn skewness(values: &[f64], mean: f64, std_dev: f64) -> f64 {
    let n = values.len();
    if n < 3 || std_dev == 0.0 {
        return 0.0;
    }
    let third_moment = values
        .iter()
        .map(|v| {
            let d = v - mean;
            d * d * d
        })
        .sum::<f64>()
        / n as f64;
    third_moment / (std_dev * std_dev * std_dev)
}

/// Excess kurtosis (population formula, normal = 0)
fn kurtosis(values: &[f64], mean: f64, std_dev: f64) -> f64 {
    let n = values.len();
    if n < 4 || std_dev == 0.0 {
        return 0.0;
    }
    let fourth_moment = values
        .iter()
        .map(|v| {
            let d = v - mean;
            d * d * d * d
        })
        .sum::<f64>()
        / n as f64;
    fourth_moment / (std_dev * std_dev * std_dev * std_dev) - 3.0
}
