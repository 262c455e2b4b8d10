//! ticketbranch: issue branches synced to the remote default branch
//!
//! This binary creates a correctly named feature branch for an issue, rooted
//! at the fetched remote tip, and summarizes the commits a branch adds.

use std::process::ExitCode;

use clap::Parser;
use tracing::error;

use ticketbranch::app;
use ticketbranch::config::Config;

#[tokio::main]
async fn main() -> ExitCode {
    let config = Config::parse();

    // Logs go to stderr; stdout carries command output.
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(config.log_level().into()),
        )
        .init();

    match app::run(&config).await {
        Ok(output) => {
            print!("{output}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("{e:#}");
            ExitCode::FAILURE
        }
    }
}
