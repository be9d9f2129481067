//! # NetworkClient Trait
//!
//! The four calls a run makes against the social-networking service. The
//! orchestrator only ever sees this trait, so the real HTTP client and the
//! test mock are interchangeable.
use crate::clients::ClientError;
use crate::domain::{Profile, SearchQuery};
use async_trait::async_trait;

/// Session-holding client for the social-networking service.
///
/// # Example
///
/// ```rust,ignore
/// let client: Arc<dyn NetworkClient> = Arc::new(HttpNetworkClient::new(DEFAULT_API_URL)?);
/// client.authenticate("me@example.com", "secret", false).await?;
/// let people = client.search_people(&SearchQuery::not_connected("Rust", 10)).await?;
/// ```
#[async_trait]
pub trait NetworkClient: Send + Sync {
    /// Signs in, reusing a cached session unless `force_refresh` is set.
    async fn authenticate(
        &self,
        email: &str,
        password: &str,
        force_refresh: bool,
    ) -> Result<(), ClientError>;

    /// Returns up to `query.limit` profiles matching the query.
    async fn search_people(&self, query: &SearchQuery) -> Result<Vec<Profile>, ClientError>;

    /// Sends a connection request carrying `message`.
    ///
    /// `Ok(false)` means the service declined without raising a fault.
    async fn add_connection(
        &self,
        public_id: &str,
        message: &str,
        profile_urn: Option<&str>,
    ) -> Result<bool, ClientError>;

    /// Stops following a profile.
    async fn unfollow_connection(&self, profile_urn: &str) -> Result<bool, ClientError>;
}
