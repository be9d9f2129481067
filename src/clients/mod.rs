//! Client capability for the social-networking service.
//!
//! - [`NetworkClient`] is the seam the orchestrator depends on.
//! - [`HttpNetworkClient`] is the production implementation.
//! - [`mock::MockNetworkClient`] scripts responses for tests.

pub mod error;
pub mod http_client;
pub mod mock;
pub mod network_client;

pub use error::*;
pub use http_client::*;
pub use network_client::*;
