//! CLI command implementations

pub mod completions;
pub mod config;
pub mod list;
pub mod lock;
pub mod restart;
pub mod show;
pub mod unlock;
pub mod watch;

pub use completions::execute as completions;
pub use config::execute as config;
pub use list::execute as list;
pub use lock::execute as lock;
pub use restart::execute as restart;
pub use show::execute as show;
pub use unlock::execute as unlock;
pub use watch::execute as watch;

use crate::api::InstallsApi;
use crate::error::{CloudError, CloudResult};
use crate::install::{find_by_id_or_name, Installation};
use crate::store::{get_cloud_user_data, Clock, FetchOutcome, SystemClock, UserInstallCache};

/// The user's installations through the throttle.
///
/// A 404 means the user has nothing provisioned and yields an empty list.
pub(crate) async fn load_user_installs(
    api: &dyn InstallsApi,
    cache: &mut UserInstallCache,
    clock: &dyn Clock,
    user_id: &str,
) -> CloudResult<Vec<Installation>> {
    match get_cloud_user_data(api, cache, clock, user_id).await {
        Ok(FetchOutcome::Fetched(installs)) => Ok(installs),
        Ok(FetchOutcome::Skipped) => Ok(cache.installs_for(user_id).to_vec()),
        Err(e) if e.is_not_found() => Ok(Vec::new()),
        Err(e) => Err(e),
    }
}

/// One-shot fetch for commands that act on a single installation
pub(crate) async fn fetch_user_installs(
    api: &dyn InstallsApi,
    user_id: &str,
) -> CloudResult<Vec<Installation>> {
    let mut cache = UserInstallCache::new();
    load_user_installs(api, &mut cache, &SystemClock, user_id).await
}

/// Resolve `key` against `installs` or fail with a not-found error
pub(crate) fn resolve<'a>(installs: &'a [Installation], key: &str) -> CloudResult<&'a Installation> {
    find_by_id_or_name(installs, key).ok_or_else(|| CloudError::InstallationNotFound(key.to_string()))
}
