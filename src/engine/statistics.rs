// ============================================================================
// Descriptive Statistics
// Mean, median and population standard deviation in one pass plus one sort
// ============================================================================

use crate::domain::{StatSummary, VarianceFormula};
use crate::engine::order_stats::sorted_copy;

/// Computes mean, median and population standard deviation.
///
/// Uses the single-pass variance `E[x²] − E[x]²`. An empty sample yields
/// `(0.0, 0.0, 0.0)`.
///
/// # Example
/// ```
/// use data_processor::engine::calculate_stats;
///
/// let stats = calculate_stats(&[2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0]);
/// assert_eq!(stats.mean, 5.0);
/// assert_eq!(stats.median, 4.5);
/// assert_eq!(stats.std_dev, 2.0);
/// ```
pub fn calculate_stats(data: &[f64]) -> StatSummary {
    calculate_stats_with(data, VarianceFormula::SinglePass)
}

/// Computes the summary using the given variance formula
pub fn calculate_stats_with(data: &[f64], formula: VarianceFormula) -> StatSummary {
    if data.is_empty() {
        return StatSummary::empty();
    }

    let count = data.len() as f64;
    let mean = data.iter().fold(0.0, |acc, &x| acc + x) / count;

    let variance = match formula {
        VarianceFormula::SinglePass => {
            let sq_sum = data.iter().fold(0.0, |acc, &x| acc + x * x);
            sq_sum / count - mean * mean
        },
        VarianceFormula::TwoPass => {
            let ss = data.iter().fold(0.0, |acc, &x| {
                let d = x - mean;
                acc + d * d
            });
            ss / count
        },
    };

    StatSummary::new(mean, median_of_sorted(&sorted_copy(data)), clamped_sqrt(variance))
}

/// Median of an ascending, non-empty slice
fn median_of_sorted(sorted: &[f64]) -> f64 {
    let mid = sorted.len() / 2;
    if sorted.len() % 2 == 0 {
        (sorted[mid - 1] + sorted[mid]) / 2.0
    } else {
        sorted[mid]
    }
}

/// Cancellation can leave a tiny negative variance for near-constant data.
/// NaN passes through unchanged.
fn clamped_sqrt(variance: f64) -> f64 {
    if variance < 0.0 {
        0.0
    } else {
        variance.sqrt()
    }
}
