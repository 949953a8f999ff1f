//! Summary statistics of a landing distribution

use serde::{Deserialize, Serialize};

/// Shape of a histogram of bin counts
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistogramStats {
    /// Balls counted
    pub total: u64,
    /// Mean landing bin
    pub mean: f64,
    pub std_dev: f64,
    /// Lowest index holding the largest count
    pub peak_index: usize,
    pub peak_count: u64,
}

impl HistogramStats {
    /// Compute statistics from per-bin counts. Empty histograms report zeros.
    pub fn from_counts(counts: &[u64]) -> Self {
        let total: u64 = counts.iter().sum();

        let (peak_index, peak_count) = counts
            .iter()
            .copied()
            .enumerate()
            .fold((0, 0), |best, (i, c)| if c > best.1 { (i, c) } else { best });

        if total == 0 {
            return Self {
                total,
                mean: 0.0,
                std_dev: 0.0,
                peak_index,
                peak_count,
            };
        }

        let n = total as f64;
        let mean = counts
            .iter()
            .enumerate()
            .map(|(i, &c)| i as f64 * c as f64)
            .sum::<f64>()
            / n;
        let variance = counts
            .iter()
            .enumerate()
            .map(|(i, &c)| (i as f64 - mean).powi(2) * c as f64)
            .sum::<f64>()
            / n;

        Self {
            total,
            mean,
            std_dev: variance.sqrt(),
            peak_index,
            peak_count,
        }
    }
}
