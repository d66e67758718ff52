//! Report command implementation

use anyhow::Context;
use chrono::Duration;
use clap::Args;
use std::path::PathBuf;

use crate::backtest::{calculate_gains, summarize, StrategyParameters};
use crate::data::load_series;

#[derive(Args, Debug)]
pub struct ReportArgs {
    /// Path to the CSV file with Date and Adj Close columns
    pub data: PathBuf,

    /// Principal to deploy, in whole dollars
    #[arg(long, default_value_t = 100_000, value_parser = clap::value_parser!(u64).range(1..))]
    pub dollars_to_invest: u64,

    /// Holding period length in weeks
    #[arg(long, default_value_t = 520, value_parser = clap::value_parser!(u32).range(1..))]
    pub weeks_to_hold: u32,

    /// Number of equal tranches for the cost-averaging strategy
    #[arg(long, default_value_t = 30, value_parser = clap::value_parser!(u32).range(1..))]
    pub num_buys: u32,

    /// Trading-day spacing between tranches for the cost-averaging strategy
    #[arg(long, default_value_t = 5)]
    pub days_between_buys: u32,
}

impl ReportArgs {
    /// Run both strategies over the series and print one summary line each.
    pub fn execute(&self) -> anyhow::Result<()> {
        let series = load_series(&self.data)
            .with_context(|| format!("loading price data from '{}'", self.data.display()))?;

        let dollars = self.dollars_to_invest as f64;
        let hold = Duration::weeks(i64::from(self.weeks_to_hold));

        let time_in_market = StrategyParameters::lump_sum(dollars, hold);
        let cost_averaging = StrategyParameters {
            dollars_to_invest: dollars,
            num_buys: self.num_buys as usize,
            days_between_buys: self.days_between_buys as usize,
            hold_duration: hold,
        };

        let tim_gains = calculate_gains(&series, &time_in_market)
            .context("simulating time-in-market strategy")?;
        let ca_gains = calculate_gains(&series, &cost_averaging)
            .context("simulating cost-averaging strategy")?;
        tracing::info!(
            samples = tim_gains.len(),
            "simulated both strategies over all starting points"
        );

        let tim_summary = summarize(&tim_gains)
            .context("insufficient data for the requested holding period")?;
        let ca_summary = summarize(&ca_gains)
            .context("insufficient data for the requested holding period")?;

        println!("time in market {tim_summary}");
        println!("cost averaging {ca_summary}");

        Ok(())
    }
}
