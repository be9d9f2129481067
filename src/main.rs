//! # linkedin-connect
//!
//! Signs in, searches for profiles matching a keyword, and sends a paced
//! connection request to each one.
//!
//! ```bash
//! linkedin-connect --email me@example.com --password '...' --keyword "Rust Developer" --limit 10
//! ```
//!
//! Exit code is `0` when the run completes (even if individual requests fail or
//! nothing was found) and `1` when it cannot start or sign in.

use clap::Parser;
use linkedin_connect::clients::HttpNetworkClient;
use linkedin_connect::config::{Cli, RunConfig};
use linkedin_connect::error::{RunError, EXIT_SUCCESS};
use linkedin_connect::lifecycle::{setup_tracing, ConnectionOrchestrator};
use linkedin_connect::report::{render_banner, render_summary};
use std::process::ExitCode;
use std::sync::Arc;
use tracing::info;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli).await {
        Ok(()) => ExitCode::from(EXIT_SUCCESS),
        Err(e) => {
            eprintln!("\n❌ Error: {}", e);
            ExitCode::from(e.exit_code())
        }
    }
}

async fn run(cli: Cli) -> Result<(), RunError> {
    let config = RunConfig::from_cli(cli)?;
    setup_tracing(config.verbose, config.log_file.as_deref())?;

    print!("{}", render_banner(&config));

    let client = HttpNetworkClient::new(&config.api_url)
        .map_err(|e| RunError::Config(e.to_string()))?;
    info!(api_url = client.base_url(), "Using session gateway");

    let orchestrator = ConnectionOrchestrator::new(Arc::new(client), config);
    let summary = orchestrator.run().await?;

    if summary.total > 0 {
        print!("\n{}", render_summary(&summary));
    }
    Ok(())
}
