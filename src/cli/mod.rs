//! CLI interface for dca-backtest
//!
//! One-shot invocation: point it at a daily price CSV and it prints the gain
//! distribution of the lump-sum and cost-averaging strategies.

mod report;

pub use report::ReportArgs;

use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "dca-backtest")]
#[command(about = "Compare lump-sum and cost-averaging entries over historical daily prices")]
#[command(version)]
pub struct Cli {
    #[command(flatten)]
    pub report: ReportArgs,

    /// Log level (RUST_LOG overrides)
    #[arg(long, default_value = "warn")]
    pub log_level: String,
}
