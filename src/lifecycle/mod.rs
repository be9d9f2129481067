//! # Run Lifecycle
//!
//! Everything that happens between parsing arguments and printing the summary.
//!
//! - [`ConnectionOrchestrator`] - signs in, searches, and sends the paced requests
//! - [`delay`] - the deterministic per-profile pause
//! - [`setup_tracing`] - console and optional file logging
//!
//! The orchestrator owns no state beyond the run's [`RunSummary`](crate::domain::RunSummary).
//! The client is injected as `Arc<dyn NetworkClient>`, so a run against
//! [`MockNetworkClient`](crate::clients::mock::MockNetworkClient) behaves exactly
//! like a run against the real service, minus the network.

pub mod delay;
pub mod orchestrator;
pub mod tracing;

pub use self::orchestrator::*;
pub use self::tracing::setup_tracing;
