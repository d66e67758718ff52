//! CSV loader for the daily price series
//!
//! Columns are located by header name, never by position. Any malformed row
//! aborts the load: a backtest over partial data is worse than no backtest.

use std::fs::File;
use std::path::Path;

use chrono::NaiveDate;

use super::{DataError, PricePoint, PriceSeries};

const DATE_COLUMN: &str = "Date";
const CLOSE_COLUMN: &str = "Adj Close";

/// Load a price series from a CSV file with `Date` and `Adj Close` columns.
///
/// Column order is free; extra columns are ignored. Dates must be ISO-8601
/// (e.g. `2020-01-15`) and prices positive decimals. The returned series is
/// sorted ascending by date with duplicate dates dropped.
pub fn load_series(path: impl AsRef<Path>) -> Result<PriceSeries, DataError> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| DataError::Io {
        path: path.display().to_string(),
        source,
    })?;

    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(file);

    let headers = reader.headers()?.clone();
    let date_idx = column_index(&headers, DATE_COLUMN)?;
    let close_idx = column_index(&headers, CLOSE_COLUMN)?;

    let mut points = Vec::new();
    for (row, record) in reader.records().enumerate() {
        // Header is line 1, first record line 2
        let line = row + 2;
        let record = record?;

        let date_field = record.get(date_idx).unwrap_or("");
        let date: NaiveDate = date_field.parse().map_err(|_| DataError::InvalidDate {
            line,
            value: date_field.to_string(),
        })?;

        let close_field = record.get(close_idx).unwrap_or("");
        let close: f64 = close_field.parse().map_err(|_| DataError::InvalidPrice {
            line,
            value: close_field.to_string(),
        })?;
        if !close.is_finite() || close <= 0.0 {
            return Err(DataError::NonPositivePrice { line, value: close });
        }

        points.push(PricePoint { date, close });
    }

    let series = PriceSeries::from_points(points);
    if let (Some(first), Some(last)) = (series.first(), series.last()) {
        tracing::info!(
            points = series.len(),
            from = %first.date,
            to = %last.date,
            "loaded price series"
        );
    }

    Ok(series)
}

fn column_index(headers: &csv::StringRecord, name: &'static str) -> Result<usize, DataError> {
    headers
        .iter()
        .position(|h| h == name)
        .ok_or(DataError::MissingColumn(name))
}
