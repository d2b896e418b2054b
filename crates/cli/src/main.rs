use clap::Parser;

mod commands;
mod execute;

use commands::Commands;

#[derive(Parser)]
#[command(name = "stepwise")]
#[command(about = "Run short-circuiting pipelines of fallible steps", long_about = None)]
#[command(version)]
struct Cli {
    /// Log filter directives, e.g. `debug` or `stepwise_core=trace` (overrides RUST_LOG)
    #[arg(long, global = true, value_name = "FILTER")]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

fn main() -> eyre::Result<()> {
    let cli = Cli::parse();

    stepwise_utils::tracing::init(cli.log_level.as_deref())
        .map_err(|e| eyre::eyre!("failed to initialise logging: {e}"))?;

    tracing::debug!(version = env!("CARGO_PKG_VERSION"), "stepwise starting");
    cli.command.execute()?;
    Ok(())
}
