//! Backtesting module
//!
//! Simulates a buy schedule from every historical starting point and
//! summarizes the gain distribution

mod analytics;
mod simulator;
mod window;

pub use analytics::{summarize, PercentileSummary, NUM_BUCKETS};
pub use simulator::{calculate_gains, StrategyParameters};
pub use window::locate;

use thiserror::Error;

/// Backtest computation errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BacktestError {
    /// The buy schedule reaches past the last trading day
    #[error("buy schedule needs index {index} but the series has only {len} points")]
    BuyPastEndOfSeries { index: usize, len: usize },
    /// No start index admits a full holding period
    #[error("no complete holding periods fit within the series")]
    NoSamples,
}
