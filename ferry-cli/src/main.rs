//! Ferry CLI
//!
//! Command-line interface for observing transfers on a Ferry runner and
//! checking directories before a transfer.

mod commands;
mod config;

use anyhow::Result;
use clap::Parser;
use commands::{Commands, handle_command};
use config::Config;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "ferry")]
#[command(about = "Ferry transfer monitor CLI", long_about = None)]
struct Cli {
    /// Runner URL
    #[arg(long, env = "FERRY_RUNNER_URL", default_value = "http://localhost:8080")]
    runner_url: String,

    #[command(subcommand)]
    command: Commands,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Diagnostics go to stderr
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "ferry_cli=warn,ferry_client=warn,ferry_monitor=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    let config = Config::new(cli.runner_url)?;

    handle_command(cli.command, &config).await
}
