//! Courtesy delay between connection requests.
//!
//! The pause is derived from the profile name rather than a random source, so
//! the same name always waits the same number of seconds, run after run.

use sha2::{Digest, Sha256};
use std::time::Duration;

pub const MIN_DELAY_SECS: u64 = 3;
pub const MAX_DELAY_SECS: u64 = 7;

/// Seconds to wait after processing the profile called `name`, in
/// `MIN_DELAY_SECS..=MAX_DELAY_SECS`.
pub fn delay_secs(name: &str) -> u64 {
    let digest = Sha256::digest(name.as_bytes());
    let mut prefix = [0u8; 8];
    prefix.copy_from_slice(&digest[..8]);
    let spread = MAX_DELAY_SECS - MIN_DELAY_SECS + 1;
    MIN_DELAY_SECS + u64::from_be_bytes(prefix) % spread
}

pub fn courtesy_delay(name: &str) -> Duration {
    Duration::from_secs(delay_secs(name))
}
