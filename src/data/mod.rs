//! Price series data module
//!
//! Owns the daily closing-price series and its CSV loader

mod csv;

pub use self::csv::load_series;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A single day's closing price
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PricePoint {
    /// Calendar date of the observation
    pub date: NaiveDate,
    /// Adjusted closing price, always positive
    pub close: f64,
}

/// An ordered daily price series.
///
/// Construction sorts ascending by date and drops duplicate dates, so indices
/// 0..len are in strictly increasing date order. The series is read-only after
/// construction and can be shared sequentially across strategy runs.
#[derive(Debug, Clone, PartialEq)]
pub struct PriceSeries {
    points: Vec<PricePoint>,
}

impl PriceSeries {
    /// Build a series from raw points, establishing the date ordering invariant.
    ///
    /// Points are stable-sorted by date; for duplicate dates the first record
    /// in input order wins.
    pub fn from_points(mut points: Vec<PricePoint>) -> Self {
        points.sort_by_key(|p| p.date);
        points.dedup_by_key(|p| p.date);
        Self { points }
    }

    /// Number of trading days in the series
    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Point at the given chronological index, if in bounds
    pub fn get(&self, index: usize) -> Option<&PricePoint> {
        self.points.get(index)
    }

    /// Earliest point in the series
    pub fn first(&self) -> Option<&PricePoint> {
        self.points.first()
    }

    /// Latest point in the series
    pub fn last(&self) -> Option<&PricePoint> {
        self.points.last()
    }

    pub fn as_slice(&self) -> &[PricePoint] {
        &self.points
    }

    pub fn iter(&self) -> std::slice::Iter<'_, PricePoint> {
        self.points.iter()
    }
}

impl std::ops::Index<usize> for PriceSeries {
    type Output = PricePoint;

    fn index(&self, index: usize) -> &PricePoint {
        &self.points[index]
    }
}

/// Errors raised while loading the price series
#[derive(Debug, Error)]
pub enum DataError {
    /// Input file could not be opened or read
    #[error("failed to read '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    /// CSV structure could not be parsed
    #[error("malformed CSV: {0}")]
    Csv(#[from] ::csv::Error),
    /// Header row lacks a required column
    #[error("missing required column '{0}'")]
    MissingColumn(&'static str),
    /// Row has an unparseable ISO-8601 date
    #[error("line {line}: invalid date '{value}'")]
    InvalidDate { line: usize, value: String },
    /// Row has an unparseable price
    #[error("line {line}: invalid price '{value}'")]
    InvalidPrice { line: usize, value: String },
    /// Row has a zero or negative price
    #[error("line {line}: price must be positive, got {value}")]
    NonPositivePrice { line: usize, value: f64 },
}
