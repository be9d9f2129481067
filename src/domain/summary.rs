use std::time::Duration;

/// What happened to a single profile during a run.
#[derive(Debug, Clone, PartialEq)]
pub enum ProfileOutcome {
    /// The connection request was accepted by the service.
    Connected {
        /// Whether the follow-up unfollow also went through.
        unfollowed: bool,
    },
    /// The service answered, but declined the request.
    Rejected,
    /// The request raised a fault; holds the fault's message.
    Errored(String),
    /// No public identifier, so no request was sent.
    Skipped,
}

impl ProfileOutcome {
    /// True when a request was actually sent to the service.
    pub fn was_attempted(&self) -> bool {
        !matches!(self, ProfileOutcome::Skipped)
    }
}

/// Aggregate results of one run.
///
/// Created when the run starts and updated once per processed profile.
/// Every profile lands in exactly one of `successful`, `failed` or `skipped`,
/// so their sum always equals `total`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RunSummary {
    /// Profiles returned by the search.
    pub total: usize,
    pub successful: usize,
    pub failed: usize,
    pub skipped: usize,
    /// Successful unfollows (a subset of `successful`).
    pub unfollowed: usize,
    pub elapsed: Duration,
}

impl RunSummary {
    pub fn new(total: usize) -> Self {
        Self {
            total,
            ..Self::default()
        }
    }

    pub fn record(&mut self, outcome: &ProfileOutcome) {
        match outcome {
            ProfileOutcome::Connected { unfollowed } => {
                self.successful += 1;
                if *unfollowed {
                    self.unfollowed += 1;
                }
            }
            ProfileOutcome::Rejected | ProfileOutcome::Errored(_) => self.failed += 1,
            ProfileOutcome::Skipped => self.skipped += 1,
        }
    }

    /// Number of profiles for which an outcome has been recorded.
    pub fn processed(&self) -> usize {
        self.successful + self.failed + self.skipped
    }
}
