//! schematics-trigger - apply or destroy a remote Schematics workspace.
//!
//! Exchanges a cloud API key for IAM tokens and asks the workspace service
//! to run one lifecycle action, logging the raw response.

mod auth;
mod cli;
mod client;
mod config;
mod error;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use crate::cli::Cli;
use crate::config::{env, load_config};
use crate::error::Result;

#[tokio::main(flavor = "current_thread")]
async fn main() {
    // Parse CLI arguments; missing positionals exit here before any request
    let cli = Cli::parse();

    // Initialize logging
    let default_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_env(env::LOG_LEVEL)
                .unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    // Run the command
    if let Err(e) = run(cli).await {
        eprintln!("Error: {e}");
        if e.is_transport() {
            eprintln!("Nothing was retried. Run the command again once the endpoint is reachable.");
        }
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<()> {
    let config = load_config();
    cli::commands::handle_trigger(&cli.api_key, &cli.workspace_id, &cli.action, &config).await?;
    Ok(())
}
