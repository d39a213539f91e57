//! Equal-width histogram binning
//!
//! Bins span `[min, max]` of the input with the NumPy edge convention: every
//! bin is half-open except the last, which also includes the maximum. A
//! constant sequence widens its range by half a unit on each side so the
//! counts still have somewhere to land.

use serde::Serialize;

/// Default bin count for analysis reports
pub const DEFAULT_BINS: usize = 10;

/// Histogram of a numeric sequence
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Histogram {
    /// Count per bin; sums to the input length
    pub frequencies: Vec<u64>,
    /// Bin boundaries; one more entry than `frequencies`
    pub bin_edges: Vec<f64>,
    /// Midpoint of each bin
    pub bin_centers: Vec<f64>,
    /// Human-readable `low-high` label per bin, 3 decimal places
    pub bin_labels: Vec<String>,
    /// Width shared by all bins
    pub bin_width: f64,
}

/// Bin `values` into `bins` equal-width intervals
///
/// Returns `None` for an empty sequence or a zero bin count.
pub fn histogram(values: &[f64], bins: usize) -> Option<Histogram> {
    if values.is_empty() || bins == 0 {
        return None;
    }

    let mut low = values.iter().copied().fold(f64::INFINITY, f64::min);
    let mut high = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    if low == high {
        low -= 0.5;
        high += 0.5;
    }
    let span = high - low;
    let bin_width = span / bins as f64;

    let mut frequencies = vec![0u64; bins];
    for &value in values {
        let mut index = ((value - low) / span * bins as f64) as usize;
        if index >= bins {
            // The maximum closes the last bin.
            index = bins - 1;
        }
        frequencies[index] += 1;
    }

    let bin_edges: Vec<f64> = (0..=bins).map(|i| low + bin_width * i as f64).collect();
    let bin_centers: Vec<f64> = (0..bins)
        .map(|i| (bin_edges[i] + bin_edges[i + 1]) / 2.0)
        .collect();
    let bin_labels: Vec<String> = (0..bins)
        .map(|i| format!("{:.3}-{:.3}", bin_edges[i], bin_edges[i + 1]))
        .collect();

    Some(Histogram {
        frequencies,
        bin_edges,
        bin_centers,
        bin_labels,
        bin_width,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_input() {
        assert!(histogram(&[], 10).is_none());
    }

    #[test]
    fn test_zero_bins() {
        assert!(histogram(&[1.0, 2.0], 0).is_none());
    }

    #[test]
    fn test_shape_invariants() {
        let values: Vec<f64> = (0..137).map(|i| i as f64 / 137.0).collect();
        let hist = histogram(&values, 10).unwrap();
        assert_eq!(hist.frequencies.len(), 10);
        assert_eq!(hist.bin_edges.len(), 11);
        assert_eq!(hist.bin_centers.len(), 10);
        assert_eq!(hist.bin_labels.len(), 10);
        assert_eq!(hist.frequencies.iter().sum::<u64>(), 137);
    }

    #[test]
    fn test_uniform_grid_counts() {
        // 0.0 .. 9.0 into 10 bins of width 0.9: exactly one value per bin.
        let values: Vec<f64> = (0..10).map(|i| i as f64).collect();
        let hist = histogram(&values, 10).unwrap();
        assert_eq!(hist.frequencies, vec![1; 10]);
        assert!((hist.bin_width - 0.9).abs() < 1e-12);
    }

    #[test]
    fn test_maximum_lands_in_last_bin() {
        let hist = histogram(&[0.0, 0.5, 1.0], 10).unwrap();
        assert_eq!(*hist.frequencies.last().unwrap(), 1);
        assert_eq!(hist.frequencies.iter().sum::<u64>(), 3);
    }

    #[test]
    fn test_constant_sequence_widens_range() {
        let hist = histogram(&[2.0; 8], 10).unwrap();
        assert_eq!(hist.frequencies.iter().sum::<u64>(), 8);
        assert!((hist.bin_edges[0] - 1.5).abs() < 1e-12);
        assert!((hist.bin_edges[10] - 2.5).abs() < 1e-12);
    }

    #[test]
    fn test_labels_formatted_to_three_decimals() {
        let values: Vec<f64> = (0..=10).map(|i| i as f64 / 10.0).collect();
        let hist = histogram(&values, 10).unwrap();
        assert_eq!(hist.bin_labels[0], "0.000-0.100");
        assert_eq!(hist.bin_labels[9], "0.900-1.000");
    }

    #[test]
    fn test_centers_are_midpoints() {
        let hist = histogram(&[0.0, 1.0], 4).unwrap();
        assert_eq!(hist.bin_centers, vec![0.125, 0.375, 0.625, 0.875]);
    }
}
