//! # Run Errors
//!
//! Faults that abort a run. Per-profile faults never reach this type; they are
//! counted in the [`RunSummary`](crate::domain::RunSummary) instead.

use crate::clients::ClientError;
use thiserror::Error;

pub const EXIT_SUCCESS: u8 = 0;
pub const EXIT_FATAL: u8 = 1;

/// Fatal errors for a run.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum RunError {
    /// Arguments were parsed but describe an unusable run.
    #[error("Invalid configuration: {0}")]
    Config(String),

    /// Signing in failed.
    #[error("Could not sign in: {0}")]
    Authentication(ClientError),

    /// The people search raised a fault.
    #[error("Search failed: {0}")]
    Search(ClientError),
}

impl RunError {
    /// Process exit code for this error.
    pub fn exit_code(&self) -> u8 {
        match self {
            RunError::Config(_) | RunError::Authentication(_) | RunError::Search(_) => EXIT_FATAL,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_fatal_error_exits_nonzero() {
        let errors = [
            RunError::Config("limit must be at least 1".into()),
            RunError::Authentication(ClientError::Authentication("bad password".into())),
            RunError::Search(ClientError::Transport("timed out".into())),
        ];
        for error in errors {
            assert_eq!(error.exit_code(), EXIT_FATAL, "{}", error);
        }
    }

    #[test]
    fn test_message_includes_client_fault() {
        let error = RunError::Authentication(ClientError::Authentication("challenge required".into()));
        assert_eq!(
            error.to_string(),
            "Could not sign in: Authentication failed: challenge required"
        );
    }
}
