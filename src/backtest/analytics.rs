//! Gain distribution analytics and reporting

use std::fmt;

use serde::Serialize;

use super::BacktestError;

/// Number of equal-rank partitions reported for a gain distribution
pub const NUM_BUCKETS: usize = 10;

/// Decile cut points of a gain distribution.
///
/// Eleven values: the gain at each decile boundary (0th, 10th, ..., 90th
/// percentile, nearest rank below) followed by the maximum. Values are
/// truncated toward zero for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PercentileSummary {
    buckets: [i64; NUM_BUCKETS + 1],
}

impl PercentileSummary {
    /// Cut points in ascending percentile order, maximum last
    pub fn buckets(&self) -> &[i64] {
        &self.buckets
    }

    /// Worst observed gain (the 0th percentile)
    pub fn min(&self) -> i64 {
        self.buckets[0]
    }

    /// Best observed gain
    pub fn max(&self) -> i64 {
        self.buckets[NUM_BUCKETS]
    }
}

impl fmt::Display for PercentileSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, bucket) in self.buckets.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{bucket}")?;
        }
        write!(f, "]")
    }
}

/// Summarize a gain distribution as decile cut points plus the maximum.
///
/// Gains are sorted ascending; bucket `k` reports the element at index
/// `floor(k / 10 * n)`. Only the multiset of gains matters, so any input
/// ordering produces the same summary. An empty input has no distribution to
/// summarize and is reported as `NoSamples` rather than a garbage summary.
pub fn summarize(gains: &[f64]) -> Result<PercentileSummary, BacktestError> {
    if gains.is_empty() {
        return Err(BacktestError::NoSamples);
    }

    let mut sorted = gains.to_vec();
    sorted.sort_by(f64::total_cmp);

    let n = sorted.len();
    let mut buckets = [0i64; NUM_BUCKETS + 1];
    for (k, bucket) in buckets.iter_mut().take(NUM_BUCKETS).enumerate() {
        let index = (k as f64 / NUM_BUCKETS as f64 * n as f64) as usize;
        *bucket = sorted[index] as i64;
    }
    buckets[NUM_BUCKETS] = sorted[n - 1] as i64;

    Ok(PercentileSummary { buckets })
}
