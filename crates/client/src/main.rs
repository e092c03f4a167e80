//! rallycal CLI entry point.

use std::process::ExitCode;

use anyhow::Context;
use chrono::Utc;
use clap::Parser;
use rallycal_client::cli::Cli;
use rallycal_client::commands::run;
use rallycal_client::{ClientError, Config};
use rallycal_core::calendar::format::LOADING_MESSAGE;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();

    // Logs go to stderr; stdout carries command output only.
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| cli.default_log_filter().into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = Config::from_env().context("Failed to read configuration")?;
    let today = cli
        .today
        .unwrap_or_else(|| Utc::now().with_timezone(&config.timezone).date_naive());

    tracing::debug!(?config, %today, "Starting");

    if cli.command.needs_schedule() && !cli.quiet {
        eprintln!("{}", LOADING_MESSAGE);
    }

    let mut stdout = std::io::stdout();
    match run(&cli, &config, today, &mut stdout).await {
        Ok(()) => Ok(ExitCode::SUCCESS),
        Err(ClientError::LoadFailed { message, detail }) => {
            eprintln!("{}", message);
            eprintln!("  {}", detail);
            Ok(ExitCode::FAILURE)
        }
        Err(err) => Err(err.into()),
    }
}
