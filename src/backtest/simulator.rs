//! Gain simulation over every historical starting point

use chrono::Duration;

use super::{locate, BacktestError};
use crate::data::PriceSeries;

/// One simulated strategy, fixed for the whole run
#[derive(Debug, Clone)]
pub struct StrategyParameters {
    /// Total principal to deploy across all tranches
    pub dollars_to_invest: f64,
    /// Number of equal tranches
    pub num_buys: usize,
    /// Index-step spacing between tranches (trading days, not calendar days)
    pub days_between_buys: usize,
    /// How long the position is held before selling
    pub hold_duration: Duration,
}

impl StrategyParameters {
    /// Lump-sum variant: the full principal in one buy at the start index
    pub fn lump_sum(dollars_to_invest: f64, hold_duration: Duration) -> Self {
        Self {
            dollars_to_invest,
            num_buys: 1,
            days_between_buys: 1,
            hold_duration,
        }
    }
}

/// Net gain per start index for the given strategy, in start order.
///
/// The sale index is located once, from the series' first date plus
/// `hold_duration`, and then advances in lockstep with the start index. The
/// holding period is therefore a fixed number of trading days for every
/// start; it matches `hold_duration` in calendar days only for the first
/// start, drifting where the trading calendar is irregular. Later starts keep
/// the same trading-day span rather than re-anchoring on their own date.
///
/// Returns an empty vec when `hold_duration` reaches past the end of the
/// series, so no start admits a full holding period. A buy schedule that
/// indexes past the last trading day is an error, not a truncated sample.
pub fn calculate_gains(
    series: &PriceSeries,
    params: &StrategyParameters,
) -> Result<Vec<f64>, BacktestError> {
    let Some(first) = series.first() else {
        return Ok(Vec::new());
    };
    let Some(mut sale) = locate(series, first.date + params.hold_duration) else {
        return Ok(Vec::new());
    };

    let per_tranche = params.dollars_to_invest / params.num_buys as f64;
    let mut gains = Vec::new();
    let mut start = 0;

    while sale < series.len() {
        let mut shares = 0.0;
        for i in 0..params.num_buys {
            let index = start + i * params.days_between_buys;
            let buy = series
                .get(index)
                .ok_or(BacktestError::BuyPastEndOfSeries {
                    index,
                    len: series.len(),
                })?;
            shares += per_tranche / buy.close;
        }

        gains.push(shares * series[sale].close - params.dollars_to_invest);
        start += 1;
        sale += 1;
    }

    Ok(gains)
}
