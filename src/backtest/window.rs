//! Trading-day window locator

use chrono::NaiveDate;

use crate::data::PriceSeries;

/// Index of the first point dated on or after `target`.
///
/// Returns `None` when the target falls beyond the end of the series. Binary
/// search over the date-sorted series.
pub fn locate(series: &PriceSeries, target: NaiveDate) -> Option<usize> {
    let idx = series.as_slice().partition_point(|p| p.date < target);
    (idx < series.len()).then_some(idx)
}
