//! Client-side cache of installations per user

pub mod clock;
pub mod throttle;

pub use clock::{Clock, ManualClock, SystemClock};
pub use throttle::{check, get_cloud_user_data, FetchDecision, FetchOutcome, COOLDOWN_MS};

use crate::install::Installation;
use std::collections::HashMap;
use tracing::debug;

/// What is known about one user's installations
#[derive(Debug, Clone, PartialEq)]
pub enum CacheEntry {
    /// Result of the last successful fetch
    Installs(Vec<Installation>),
    /// A fetch was attempted at `last_try` (epoch ms) and found nothing
    Attempted { last_try: i64 },
}

impl CacheEntry {
    pub fn installs(&self) -> &[Installation] {
        match self {
            Self::Installs(installs) => installs,
            Self::Attempted { .. } => &[],
        }
    }

    pub fn last_try(&self) -> Option<i64> {
        match self {
            Self::Installs(_) => None,
            Self::Attempted { last_try } => Some(*last_try),
        }
    }
}

/// Installations keyed by user ID.
///
/// Lives for the lifetime of the process. Entries are only ever replaced,
/// never merged.
#[derive(Debug, Default)]
pub struct UserInstallCache {
    entries: HashMap<String, CacheEntry>,
}

impl UserInstallCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, user_id: &str) -> Option<&CacheEntry> {
        self.entries.get(user_id)
    }

    /// Cached installations for `user_id`, empty when nothing is known
    pub fn installs_for(&self, user_id: &str) -> &[Installation] {
        self.get(user_id).map(CacheEntry::installs).unwrap_or(&[])
    }

    /// Replace the entry with freshly fetched installations
    pub fn store(&mut self, user_id: &str, installs: Vec<Installation>) {
        debug!("Caching {} installation(s) for {}", installs.len(), user_id);
        self.entries
            .insert(user_id.to_string(), CacheEntry::Installs(installs));
    }

    /// Replace the entry with an attempt marker
    pub fn record_attempt(&mut self, user_id: &str, last_try: i64) {
        debug!("Recording fetch attempt for {} at {}", user_id, last_try);
        self.entries
            .insert(user_id.to_string(), CacheEntry::Attempted { last_try });
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Drop everything, used on teardown
    pub fn clear(&mut self) {
        self.entries.clear();
    }
}
