//! Error types for the network client.

use thiserror::Error;

/// Faults raised by a [`NetworkClient`](crate::clients::NetworkClient).
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ClientError {
    /// The service refused the credentials or the session.
    #[error("Authentication failed: {0}")]
    Authentication(String),

    /// A call that needs a session was made before `authenticate` succeeded.
    #[error("Not authenticated")]
    NotAuthenticated,

    /// The service answered with a non-success status.
    #[error("Service returned {status}: {body}")]
    Status { status: u16, body: String },

    /// The request never completed (connection, TLS, timeout).
    #[error("Transport error: {0}")]
    Transport(String),

    /// The response body could not be decoded.
    #[error("Decode error: {0}")]
    Decode(String),

    /// The client was built with an unusable setting.
    #[error("Client configuration error: {0}")]
    Config(String),
}

impl From<reqwest::Error> for ClientError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_decode() {
            ClientError::Decode(e.to_string())
        } else {
            ClientError::Transport(e.to_string())
        }
    }
}
