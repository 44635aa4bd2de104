// ============================================================================
// Order Statistics
// Sorted copies and the truncating-index percentile ladder
// ============================================================================

use crate::domain::{PercentileLadder, PERCENTILE_RUNGS, PERCENTILE_STEP};
use arrayvec::ArrayVec;

/// Stable ascending sort of a copy; the input is left untouched.
///
/// Ordering is `f64::total_cmp`, so NaN sorts after every other value
/// and -0.0 before 0.0.
pub fn sort_data(data: &[f64]) -> Vec<f64> {
    sorted_copy(data)
}

pub(crate) fn sorted_copy(data: &[f64]) -> Vec<f64> {
    let mut sorted = data.to_vec();
    sorted.sort_by(f64::total_cmp);
    sorted
}

/// Values at 0%, 5%, ..., 100% of the sorted sample.
///
/// Rung `p` reads index `floor(p / 100 * (len - 1))`: nearest rank by
/// truncation, no interpolation. Empty input gives an empty ladder.
///
/// # Example
/// ```
/// use data_processor::engine::calculate_percentiles;
///
/// let ladder = calculate_percentiles(&[50.0, 10.0, 40.0, 20.0, 30.0]);
/// assert_eq!(ladder.len(), 21);
/// assert_eq!(ladder.at(50), Some(30.0));
/// ```
pub fn calculate_percentiles(data: &[f64]) -> PercentileLadder {
    if data.is_empty() {
        return PercentileLadder::default();
    }

    let sorted = sorted_copy(data);
    let last = (sorted.len() - 1) as f64;

    let rungs: ArrayVec<f64, PERCENTILE_RUNGS> = (0..=100)
        .step_by(PERCENTILE_STEP as usize)
        .map(|p| {
            let idx = (p as f64 / 100.0 * last) as usize;
            sorted[idx]
        })
        .collect();

    PercentileLadder::from_rungs(rungs)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use quickcheck::quickcheck;

    #[test]
    fn test_sort_leaves_input_untouched() {
        let data = vec![3.0, -1.0, 2.0, -1.0];
        let sorted = sort_data(&data);
        assert_eq!(sorted, vec![-1.0, -1.0, 2.0, 3.0]);
        assert_eq!(data, vec![3.0, -1.0, 2.0, -1.0]);
    }

    #[test]
    fn test_nan_sorts_last() {
        let sorted = sort_data(&[f64::NAN, 1.0, -2.0]);
        assert_eq!(&sorted[..2], &[-2.0, 1.0]);
        assert!(sorted[2].is_nan());
    }

    #[test]
    fn test_empty_percentiles() {
        assert!(calculate_percentiles(&[]).is_empty());
        assert!(sort_data(&[]).is_empty());
    }

    #[test]
    fn test_truncating_index() {
        let ladder = calculate_percentiles(&[10.0, 20.0, 30.0, 40.0, 50.0]);

        assert_eq!(ladder.len(), 21);
        assert_eq!(ladder.at(0), Some(10.0));
        assert_eq!(ladder.at(100), Some(50.0));
        // floor(0.5 * 4) = 2
        assert_eq!(ladder.at(50), Some(30.0));
        // floor(0.2 * 4) = 0, floor(0.25 * 4) = 1
        assert_eq!(ladder.at(20), Some(10.0));
        assert_eq!(ladder.at(25), Some(20.0));
        // floor(0.95 * 4) = 3
        assert_eq!(ladder.at(95), Some(40.0));
    }

    #[test]
    fn test_single_value_ladder() {
        let ladder = calculate_percentiles(&[4.2]);
        assert_eq!(ladder.len(), 21);
        assert!(ladder.iter().all(|v| v == 4.2));
    }

    #[test]
    fn test_ladder_is_non_decreasing() {
        let data: Vec<f64> = (0..97).map(|i| ((i * 37) % 97) as f64).collect();
        let ladder = calculate_percentiles(&data);
        assert!(ladder.as_slice().windows(2).all(|w| w[0] <= w[1]));
        assert_eq!(ladder.min(), Some(0.0));
        assert_eq!(ladder.max(), Some(96.0));
    }

    proptest! {
        #[test]
        fn prop_sort_is_ordered_permutation(data in prop::collection::vec(-1e6f64..1e6, 1..200)) {
            let sorted = sort_data(&data);
            prop_assert_eq!(sorted.len(), data.len());
            prop_assert!(sorted.windows(2).all(|w| w[0] <= w[1]));

            let mut expected = data.clone();
            expected.sort_by(|a, b| a.partial_cmp(b).unwrap());
            prop_assert_eq!(sorted, expected);
        }

        #[test]
        fn prop_ladder_values_come_from_sample(data in prop::collection::vec(-1e3f64..1e3, 1..100)) {
            let ladder = calculate_percentiles(&data);
            prop_assert_eq!(ladder.len(), 21);
            for v in ladder.iter() {
                prop_assert!(data.contains(&v));
            }
        }
    }

    quickcheck! {
        fn qc_sort_is_idempotent(data: Vec<f64>) -> bool {
            let once = sort_data(&data);
            let twice = sort_data(&once);
            once.iter().zip(&twice).all(|(a, b)| a.to_bits() == b.to_bits())
        }
    }
}
