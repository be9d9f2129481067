//! # Configuration
//!
//! Command-line parsing ([`Cli`]) and the immutable [`RunConfig`] built from it.
//! The orchestrator only ever sees a `RunConfig`.

use crate::clients::DEFAULT_API_URL;
use crate::error::RunError;
use clap::Parser;
use std::fmt;
use std::path::PathBuf;

pub const DEFAULT_KEYWORD: &str = "Software Engineer";
pub const DEFAULT_LIMIT: usize = 20;

/// The service rejects connection notes longer than this.
pub const MAX_MESSAGE_CHARS: usize = 300;

/// Note sent when no `--message` is given.
pub const DEFAULT_MESSAGE: &str = "Hi! I'm a motivated engineer looking for SDE/Full Stack/AI roles. \
I'd love to connect and learn about opportunities at your company. \
Thank you!";

#[derive(Parser, Debug)]
#[command(name = "linkedin-connect")]
#[command(version, about = "Search for profiles by keyword and send paced connection requests", long_about = None)]
pub struct Cli {
    /// Account email
    #[arg(long)]
    pub email: String,

    /// Account password
    #[arg(long)]
    pub password: String,

    /// Search keyword
    #[arg(long, default_value = DEFAULT_KEYWORD)]
    pub keyword: String,

    /// Max connection requests to send
    #[arg(long, default_value_t = DEFAULT_LIMIT)]
    pub limit: usize,

    /// Connection message (max 300 chars)
    #[arg(long)]
    pub message: Option<String>,

    /// Force a fresh session instead of reusing cached cookies
    #[arg(long = "refresh-cookies")]
    pub refresh_cookies: bool,

    /// Unfollow each profile after a successful connection request
    #[arg(long)]
    pub nofollow: bool,

    /// Base URL of the session gateway
    #[arg(long = "api-url", value_name = "URL", default_value = DEFAULT_API_URL)]
    pub api_url: String,

    /// Also write the run log to this file (JSON lines)
    #[arg(long = "log-file", value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Debug-level logging
    #[arg(short, long)]
    pub verbose: bool,
}

/// Everything a run needs, fixed before the first network call.
#[derive(Clone, PartialEq)]
pub struct RunConfig {
    pub email: String,
    pub password: String,
    pub keyword: String,
    pub limit: usize,
    /// User-supplied note; `None` means the default is sent.
    pub message: Option<String>,
    pub refresh_cookies: bool,
    pub unfollow_after_connect: bool,
    pub api_url: String,
    pub log_file: Option<PathBuf>,
    pub verbose: bool,
}

impl RunConfig {
    /// Builds a config with the documented defaults for everything but credentials.
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
            keyword: DEFAULT_KEYWORD.to_string(),
            limit: DEFAULT_LIMIT,
            message: None,
            refresh_cookies: false,
            unfollow_after_connect: false,
            api_url: DEFAULT_API_URL.to_string(),
            log_file: None,
            verbose: false,
        }
    }

    /// Converts parsed arguments, rejecting a message the service would refuse.
    pub fn from_cli(cli: Cli) -> Result<Self, RunError> {
        let config = Self {
            email: cli.email,
            password: cli.password,
            keyword: cli.keyword,
            limit: cli.limit,
            message: cli.message.filter(|m| !m.is_empty()),
            refresh_cookies: cli.refresh_cookies,
            unfollow_after_connect: cli.nofollow,
            api_url: cli.api_url,
            log_file: cli.log_file,
            verbose: cli.verbose,
        };
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), RunError> {
        if let Some(message) = &self.message {
            let chars = message.chars().count();
            if chars > MAX_MESSAGE_CHARS {
                return Err(RunError::Config(format!(
                    "message is {} characters, the limit is {}",
                    chars, MAX_MESSAGE_CHARS
                )));
            }
        }
        Ok(())
    }

    /// The note attached to every connection request in this run.
    pub fn connection_message(&self) -> &str {
        match self.message.as_deref() {
            Some(message) if !message.is_empty() => message,
            _ => DEFAULT_MESSAGE,
        }
    }
}

impl fmt::Debug for RunConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RunConfig")
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .field("keyword", &self.keyword)
            .field("limit", &self.limit)
            .field("message", &self.message)
            .field("refresh_cookies", &self.refresh_cookies)
            .field("unfollow_after_connect", &self.unfollow_after_connect)
            .field("api_url", &self.api_url)
            .field("log_file", &self.log_file)
            .field("verbose", &self.verbose)
            .finish()
    }
}
