//! # Observability & Tracing
//!
//! [`setup_tracing`] initializes structured logging for a run.
//!
//! - **Console**: compact format on stderr without module paths (`with_target(false)`),
//!   so stdout stays free for the run report.
//! - **File** (optional): one JSON object per event, no ANSI codes, suitable for
//!   attaching to a notification or feeding into a log pipeline.
//!
//! ## Filtering
//!
//! `RUST_LOG` wins when set. Otherwise the crate logs at `info`, or `debug` with `--verbose`.
//!
//! ```bash
//! RUST_LOG=linkedin_connect=debug linkedin-connect --email me@example.com --password ...
//! ```
//!
//! ## What Gets Traced
//!
//! - Sign-in and search, with keyword and limit as fields
//! - One `profile` span per search result, carrying its position and name
//! - Per-profile outcomes (`Connection request sent`, `Skipping`, failures at `warn`)
//! - The final counts

use crate::error::RunError;
use std::fs::File;
use std::path::Path;
use std::sync::Mutex;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

pub fn setup_tracing(verbose: bool, log_file: Option<&Path>) -> Result<(), RunError> {
    let level = if verbose { "debug" } else { "info" };
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(format!("linkedin_connect={}", level)))
        .map_err(|e| RunError::Config(format!("Failed to create log filter: {}", e)))?;

    let console_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact();

    let file_layer = match log_file {
        Some(path) => {
            let file = File::create(path).map_err(|e| {
                RunError::Config(format!("Failed to create log file {}: {}", path.display(), e))
            })?;
            Some(
                fmt::layer()
                    .with_writer(Mutex::new(file))
                    .with_ansi(false)
                    .json(),
            )
        }
        None => None,
    };

    tracing_subscriber::registry()
        .with(env_filter)
        .with(console_layer)
        .with(file_layer)
        .try_init()
        .map_err(|e| RunError::Config(format!("Failed to install log subscriber: {}", e)))
}
