//! Cooldown-gated fetching of a user's installations
//!
//! A lookup that comes back 404 is remembered as an attempt, and the same
//! user is not asked for again until [`COOLDOWN_MS`] has passed. Successful
//! lookups replace whatever was cached and never suppress the next fetch.

use super::{CacheEntry, Clock, UserInstallCache};
use crate::api::InstallsApi;
use crate::error::CloudResult;
use crate::install::Installation;
use tracing::debug;

/// Minimum time between repeated not-found lookups for the same user
pub const COOLDOWN_MS: i64 = 60 * 1000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchDecision {
    Fetch,
    Skip,
}

/// Result of [`get_cloud_user_data`]
#[derive(Debug, Clone, PartialEq)]
pub enum FetchOutcome {
    /// No request was made
    Skipped,
    /// The server answered with these installations
    Fetched(Vec<Installation>),
}

impl FetchOutcome {
    pub fn installs(&self) -> Option<&[Installation]> {
        match self {
            Self::Skipped => None,
            Self::Fetched(installs) => Some(installs),
        }
    }
}

/// Decide whether `entry` allows a new fetch at `now`
pub fn check(entry: Option<&CacheEntry>, now: i64) -> FetchDecision {
    match entry.and_then(CacheEntry::last_try) {
        Some(last_try) if now - last_try < COOLDOWN_MS => FetchDecision::Skip,
        _ => FetchDecision::Fetch,
    }
}

/// Fetch `user_id`'s installations unless the cooldown says otherwise.
///
/// On success the cache entry is replaced by the returned list. A 404 turns
/// the entry into an attempt marker stamped when the response arrived and
/// the error is still returned. Other errors leave the cache alone.
pub async fn get_cloud_user_data(
    api: &dyn InstallsApi,
    cache: &mut UserInstallCache,
    clock: &dyn Clock,
    user_id: &str,
) -> CloudResult<FetchOutcome> {
    if user_id.is_empty() {
        return Ok(FetchOutcome::Skipped);
    }

    if check(cache.get(user_id), clock.now_millis()) == FetchDecision::Skip {
        debug!("Skipping fetch for {}, still cooling down", user_id);
        return Ok(FetchOutcome::Skipped);
    }

    match api.get_user_installs(user_id).await {
        Ok(installs) => {
            cache.store(user_id, installs.clone());
            Ok(FetchOutcome::Fetched(installs))
        }
        Err(e) => {
            if e.is_not_found() {
                cache.record_attempt(user_id, clock.now_millis());
            }
            Err(e)
        }
    }
}
