use crate::clients::NetworkClient;
use crate::config::RunConfig;
use crate::domain::{Profile, ProfileOutcome, RunSummary, SearchQuery};
use crate::error::RunError;
use crate::lifecycle::delay::courtesy_delay;
use std::sync::Arc;
use tokio::time::{sleep, Instant};
use tracing::{debug, error, info, info_span, instrument, warn, Instrument};

/// Runs one search-and-connect pass against an injected [`NetworkClient`].
///
/// The sequence is fixed:
/// 1. **Sign in** - a fault here aborts the run with [`RunError::Authentication`].
/// 2. **Search** - people outside the first-degree network, private profiles excluded.
///    No results is not an error; the run ends with an empty summary.
/// 3. **Connect** - one request per profile, in the order returned. Per-profile
///    faults are counted, never propagated.
/// 4. **Pace** - after each request except the last, sleep for the profile's
///    [`courtesy_delay`].
///
/// # Example
///
/// ```ignore
/// let orchestrator = ConnectionOrchestrator::new(client, config);
/// let summary = orchestrator.run().await?;
/// println!("{}", render_summary(&summary));
/// ```
pub struct ConnectionOrchestrator {
    client: Arc<dyn NetworkClient>,
    config: RunConfig,
}

impl ConnectionOrchestrator {
    pub fn new(client: Arc<dyn NetworkClient>, config: RunConfig) -> Self {
        Self { client, config }
    }

    #[instrument(skip(self), fields(keyword = %self.config.keyword, limit = self.config.limit))]
    pub async fn run(&self) -> Result<RunSummary, RunError> {
        info!("Authenticating");
        self.client
            .authenticate(
                &self.config.email,
                &self.config.password,
                self.config.refresh_cookies,
            )
            .await
            .map_err(|e| {
                error!(error = %e, "Authentication failed");
                RunError::Authentication(e)
            })?;
        info!("Authentication successful");

        let message = self.config.connection_message();
        let query = SearchQuery::not_connected(&self.config.keyword, self.config.limit);
        let profiles = self.client.search_people(&query).await.map_err(|e| {
            error!(error = %e, "Search failed");
            RunError::Search(e)
        })?;
        info!(found = profiles.len(), "Search complete");

        let started = Instant::now();
        let mut summary = RunSummary::new(profiles.len());

        if profiles.is_empty() {
            warn!("No profiles found. Try different keywords.");
            return Ok(summary);
        }

        let total = profiles.len();
        for (index, profile) in profiles.iter().enumerate() {
            let position = index + 1;
            let span = info_span!("profile", position, total, name = %profile.name);

            let outcome = self.process(profile, message).instrument(span.clone()).await;
            summary.record(&outcome);

            // Skipped profiles sent nothing, so there is nothing to pace.
            if outcome.was_attempted() && position < total {
                let delay = courtesy_delay(&profile.name);
                span.in_scope(|| info!(secs = delay.as_secs(), "Waiting"));
                sleep(delay).await;
            }
        }

        summary.elapsed = started.elapsed();
        info!(
            successful = summary.successful,
            failed = summary.failed,
            skipped = summary.skipped,
            unfollowed = summary.unfollowed,
            elapsed_secs = summary.elapsed.as_secs_f64(),
            "Run complete"
        );
        Ok(summary)
    }

    async fn process(&self, profile: &Profile, message: &str) -> ProfileOutcome {
        let Some(public_id) = profile.connect_id() else {
            info!("Skipping (no public ID)");
            return ProfileOutcome::Skipped;
        };

        info!(job_title = %profile.job_title, location = %profile.location, "Sending connection request");
        match self
            .client
            .add_connection(public_id, message, profile.profile_urn())
            .await
        {
            Ok(true) => {
                info!("Connection request sent");
                let unfollowed = self.unfollow_if_requested(profile).await;
                ProfileOutcome::Connected { unfollowed }
            }
            Ok(false) => {
                warn!("Failed to send request");
                ProfileOutcome::Rejected
            }
            Err(e) => {
                warn!(error = %e, "Connection request errored");
                ProfileOutcome::Errored(e.to_string())
            }
        }
    }

    /// Best-effort: an unfollow fault is logged and otherwise ignored.
    async fn unfollow_if_requested(&self, profile: &Profile) -> bool {
        if !self.config.unfollow_after_connect {
            return false;
        }
        let Some(urn) = profile.profile_urn() else {
            debug!("No profile URN, leaving follow in place");
            return false;
        };

        match self.client.unfollow_connection(urn).await {
            Ok(true) => {
                info!("Unfollowed");
                true
            }
            Ok(false) => {
                warn!(urn = %urn, "Unfollow was not accepted");
                false
            }
            Err(e) => {
                warn!(urn = %urn, error = %e, "Unfollow failed");
                false
            }
        }
    }
}
