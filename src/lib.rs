//! # linkedin-connect
//!
//! > **Search for people by keyword and send them paced connection requests.**
//!
//! A run signs in once, asks the service for profiles outside the first-degree
//! network, and walks the results in order: one connection request per profile,
//! a short deterministic pause between requests, and a summary at the end.
//!
//! ## 🗺️ Module Tour
//!
//! ### 1. The Seam ([`clients`])
//! The service is reached only through the [`NetworkClient`](clients::NetworkClient) trait.
//! - **Production**: [`HttpNetworkClient`](clients::HttpNetworkClient) speaks JSON to a session gateway.
//! - **Tests**: [`MockNetworkClient`](clients::mock::MockNetworkClient) replays scripted responses.
//!
//! ### 2. The Orchestrator ([`lifecycle`])
//! [`ConnectionOrchestrator`](lifecycle::ConnectionOrchestrator) runs the sequence and
//! owns the pacing ([`lifecycle::delay`]). Tracing is set up here too.
//!
//! ### 3. The Data ([`domain`])
//! [`Profile`](domain::Profile) in, [`RunSummary`](domain::RunSummary) out.
//!
//! ### 4. The Edges ([`config`], [`report`], [`error`])
//! Command-line parsing into an immutable [`RunConfig`](config::RunConfig), the console
//! report, and the fatal [`RunError`](error::RunError) tier.
//!
//! ## 👩‍💻 Error Tiers
//!
//! - **Fatal**: bad configuration, failed sign-in, failed search. The run stops and exits `1`.
//! - **Per profile**: a declined or faulted request is logged and counted; the run continues.
//!   Unfollow faults are logged only.
//!
//! ## 🚀 Quick Start
//!
//! ```bash
//! RUST_LOG=info linkedin-connect --email me@example.com --password '...' --nofollow
//! ```

pub mod clients;
pub mod config;
pub mod domain;
pub mod error;
pub mod lifecycle;
pub mod report;
