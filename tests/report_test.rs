//! End-to-end tests over a CSV fixture file

use std::io::Write;

use chrono::Duration;
use dca_backtest::backtest::{calculate_gains, summarize, StrategyParameters};
use dca_backtest::data::{load_series, DataError};

fn fixture(contents: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}

#[test]
fn test_load_and_report_known_scenario() {
    let file = fixture(
        "Date,Open,Adj Close\n\
         2020-01-01,99.0,100\n\
         2020-01-02,101.0,110\n\
         2020-01-03,109.0,120\n\
         2020-01-04,121.0,90\n",
    );

    let series = load_series(file.path()).unwrap();
    let params = StrategyParameters::lump_sum(100.0, Duration::days(2));

    let gains = calculate_gains(&series, &params).unwrap();
    assert_eq!(gains.len(), 2);
    assert!((gains[0] - 20.0).abs() < 1e-9);
    assert!((gains[1] - (100.0 / 110.0 * 90.0 - 100.0)).abs() < 1e-9);

    let summary = summarize(&gains).unwrap();
    assert_eq!(
        summary.to_string(),
        "[-18, -18, -18, -18, -18, 20, 20, 20, 20, 20, 20]"
    );
}

#[test]
fn test_both_strategies_share_one_series() {
    let mut csv = String::from("Date,Adj Close\n");
    for day in 0..400 {
        let date = chrono::NaiveDate::from_ymd_opt(2019, 1, 1).unwrap() + Duration::days(day);
        let close = 100.0 + (day as f64 * 0.25);
        csv.push_str(&format!("{date},{close}\n"));
    }
    let file = fixture(&csv);

    let series = load_series(file.path()).unwrap();
    let hold = Duration::weeks(26);

    let lump = StrategyParameters::lump_sum(100_000.0, hold);
    let spread = StrategyParameters {
        dollars_to_invest: 100_000.0,
        num_buys: 30,
        days_between_buys: 5,
        hold_duration: hold,
    };

    let lump_gains = calculate_gains(&series, &lump).unwrap();
    let spread_gains = calculate_gains(&series, &spread).unwrap();
    assert_eq!(lump_gains.len(), spread_gains.len());
    assert!(!lump_gains.is_empty());

    // Monotone rising market: the lump sum always wins, for every start
    for (l, s) in lump_gains.iter().zip(&spread_gains) {
        assert!(l > s);
    }

    assert_eq!(summarize(&lump_gains).unwrap().buckets().len(), 11);
    assert_eq!(summarize(&spread_gains).unwrap().buckets().len(), 11);
}

#[test]
fn test_unsorted_input_is_normalized_before_simulation() {
    let file = fixture(
        "Date,Adj Close\n\
         2020-01-04,90\n\
         2020-01-01,100\n\
         2020-01-03,120\n\
         2020-01-02,110\n",
    );

    let series = load_series(file.path()).unwrap();
    let params = StrategyParameters::lump_sum(100.0, Duration::days(2));
    let gains = calculate_gains(&series, &params).unwrap();

    assert_eq!(gains.len(), 2);
    assert!((gains[0] - 20.0).abs() < 1e-9);
}

#[test]
fn test_hold_longer_than_series_reports_no_samples() {
    let file = fixture(
        "Date,Adj Close\n\
         2020-01-01,100\n\
         2020-01-02,110\n",
    );

    let series = load_series(file.path()).unwrap();
    let params = StrategyParameters::lump_sum(100.0, Duration::weeks(520));

    let gains = calculate_gains(&series, &params).unwrap();
    assert!(gains.is_empty());
    assert!(summarize(&gains).is_err());
}

#[test]
fn test_missing_column_fails_loudly() {
    let file = fixture("Date,Close\n2020-01-01,100\n");
    let err = load_series(file.path()).unwrap_err();
    assert!(matches!(err, DataError::MissingColumn("Adj Close")));
    assert!(err.to_string().contains("Adj Close"));
}
