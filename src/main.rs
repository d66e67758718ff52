use clap::Parser;
use dca_backtest::cli::Cli;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    dca_backtest::telemetry::init_logging(&cli.log_level)?;

    tracing::debug!(data = %cli.report.data.display(), "starting backtest report");
    cli.report.execute()
}
