//! dca-backtest: lump-sum versus cost-averaging backtest over daily prices
//!
//! This library provides the core components for:
//! - Loading a daily closing-price series from a header-named CSV file
//! - Locating the first trading day on or after a target date
//! - Simulating a buy schedule from every historical starting point
//! - Summarizing the resulting gain distribution as decile cut points
//! - CLI wiring and structured logging
//!
//! Example usage:
//!
//! ```text
//! dca-backtest data/sp500.csv \
//!     --dollars-to-invest 100000 \
//!     --weeks-to-hold 1000 \
//!     --num-buys 52 \
//!     --days-between-buys 10
//! ```

pub mod backtest;
pub mod cli;
pub mod data;
pub mod telemetry;
