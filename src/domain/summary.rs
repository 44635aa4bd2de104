// ============================================================================
// Summary Value Types
// Results returned by the statistics and order-statistics operations
// ============================================================================

use arrayvec::ArrayVec;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Distance between two rungs of a [`PercentileLadder`], in percent
pub const PERCENTILE_STEP: u32 = 5;

/// Number of rungs in a full ladder (0%, 5%, ..., 100%)
pub const PERCENTILE_RUNGS: usize = (100 / PERCENTILE_STEP as usize) + 1;

/// Mean, median and population standard deviation of a sample
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct StatSummary {
    pub mean: f64,
    pub median: f64,
    pub std_dev: f64,
}

impl StatSummary {
    pub fn new(mean: f64, median: f64, std_dev: f64) -> Self {
        Self {
            mean,
            median,
            std_dev,
        }
    }

    /// Summary of an empty sample: all three fields are 0.0
    pub fn empty() -> Self {
        Self::default()
    }

    /// `[mean, median, std_dev]`
    pub fn as_array(&self) -> [f64; 3] {
        [self.mean, self.median, self.std_dev]
    }
}

impl From<StatSummary> for (f64, f64, f64) {
    fn from(s: StatSummary) -> Self {
        (s.mean, s.median, s.std_dev)
    }
}

/// Sample values at every 5% of the sorted order, lowest first.
///
/// Either empty (empty input) or exactly [`PERCENTILE_RUNGS`] long.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PercentileLadder {
    rungs: ArrayVec<f64, PERCENTILE_RUNGS>,
}

impl PercentileLadder {
    pub(crate) fn from_rungs(rungs: ArrayVec<f64, PERCENTILE_RUNGS>) -> Self {
        Self { rungs }
    }

    /// Value at `percent`, which must be a multiple of 5 in 0..=100
    pub fn at(&self, percent: u32) -> Option<f64> {
        if percent % PERCENTILE_STEP != 0 {
            return None;
        }
        self.rungs.get((percent / PERCENTILE_STEP) as usize).copied()
    }

    pub fn min(&self) -> Option<f64> {
        self.rungs.first().copied()
    }

    pub fn median(&self) -> Option<f64> {
        self.at(50)
    }

    pub fn max(&self) -> Option<f64> {
        self.rungs.last().copied()
    }

    pub fn len(&self) -> usize {
        self.rungs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rungs.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = f64> + '_ {
        self.rungs.iter().copied()
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.rungs
    }

    pub fn to_vec(&self) -> Vec<f64> {
        self.rungs.to_vec()
    }
}

/// Outcome of filtering a sample and summarizing what survived
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct FilteredSummary {
    /// Threshold the sample was filtered against (exclusive)
    pub threshold: f64,

    /// Length of the input sample
    pub original_len: usize,

    /// Number of elements strictly above the threshold
    pub filtered_len: usize,

    /// Statistics of the surviving elements, None when nothing survived
    pub stats: Option<StatSummary>,
}

impl FilteredSummary {
    /// Fraction of the input that survived, 0.0 for an empty input
    pub fn retained_fraction(&self) -> f64 {
        if self.original_len == 0 {
            0.0
        } else {
            self.filtered_len as f64 / self.original_len as f64
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ladder_of(values: &[f64]) -> PercentileLadder {
        PercentileLadder::from_rungs(values.iter().copied().collect())
    }

    #[test]
    fn test_stat_summary_conversions() {
        let s = StatSummary::new(1.0, 2.0, 3.0);
        assert_eq!(s.as_array(), [1.0, 2.0, 3.0]);

        let (mean, median, std_dev) = s.into();
        assert_eq!((mean, median, std_dev), (1.0, 2.0, 3.0));

        assert_eq!(StatSummary::empty().as_array(), [0.0, 0.0, 0.0]);
    }

    #[test]
    fn test_ladder_accessors() {
        let values: Vec<f64> = (0..PERCENTILE_RUNGS).map(|i| i as f64 * 10.0).collect();
        let ladder = ladder_of(&values);

        assert_eq!(ladder.len(), 21);
        assert_eq!(ladder.min(), Some(0.0));
        assert_eq!(ladder.max(), Some(200.0));
        assert_eq!(ladder.median(), Some(100.0));
        assert_eq!(ladder.at(25), Some(50.0));
        assert_eq!(ladder.at(7), None);
        assert_eq!(ladder.at(105), None);
    }

    #[test]
    fn test_empty_ladder() {
        let ladder = PercentileLadder::default();
        assert!(ladder.is_empty());
        assert_eq!(ladder.min(), None);
        assert_eq!(ladder.at(50), None);
        assert!(ladder.to_vec().is_empty());
    }

    #[test]
    fn test_retained_fraction() {
        let summary = FilteredSummary {
            threshold: 0.0,
            original_len: 4,
            filtered_len: 1,
            stats: None,
        };
        assert_eq!(summary.retained_fraction(), 0.25);

        let empty = FilteredSummary {
            original_len: 0,
            filtered_len: 0,
            ..summary
        };
        assert_eq!(empty.retained_fraction(), 0.0);
    }
}
