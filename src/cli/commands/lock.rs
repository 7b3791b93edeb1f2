//! Lock command - protect an installation from cleanup

use super::{fetch_user_installs, resolve};
use crate::api::{HttpClient, InstallsApi};
use crate::audit::{AuditEvent, AuditLog};
use crate::cli::args::LockArgs;
use crate::config::Config;
use crate::error::{CloudError, CloudResult};
use crate::install::{can_lock, Installation};
use crate::ui::{self, TaskSpinner, UiContext};
use tracing::info;

/// Execute the lock command
pub async fn execute(args: LockArgs, config: &Config) -> CloudResult<()> {
    let ctx = UiContext::detect();
    let api = HttpClient::from_config(config)?;
    let user_id = config.user_id()?;

    let mut spinner = TaskSpinner::new(&ctx);
    spinner.start(&format!("Locking {}...", args.installation));
    let locked = match lock_installation(&api, user_id, &args.installation).await {
        Ok(install) => {
            spinner.clear();
            install
        }
        Err(e) => {
            spinner.stop_error("Could not apply deletion lock");
            return Err(e);
        }
    };

    AuditLog::new(config)
        .record(AuditEvent::DeletionLock, &locked)
        .await;

    ui::outro_success(
        &ctx,
        &format!(
            "Deletion lock has been applied to {}, your workspace will be preserved.",
            locked.name
        ),
    );
    Ok(())
}

/// Lock `key` for `user_id`, honoring the per-person lock limit
pub async fn lock_installation(
    api: &dyn InstallsApi,
    user_id: &str,
    key: &str,
) -> CloudResult<Installation> {
    let installs = fetch_user_installs(api, user_id).await?;
    let target = resolve(&installs, key)?.clone();

    if target.deletion_locked {
        return Err(CloudError::AlreadyLocked(target.name));
    }

    let plugin = api.get_plugin_configuration().await?;
    if !can_lock(&installs, plugin.deletion_locks_allowed) {
        return Err(CloudError::DeletionLockLimit {
            max: plugin.deletion_locks_allowed,
        });
    }

    api.deletion_lock_installation(&target.id).await?;
    info!("Locked installation {} ({})", target.name, target.id);
    Ok(target)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::fake::FakeApi;
    use crate::api::PluginConfiguration;
    use crate::install::fixtures::install;

    fn api_with(max: u32) -> FakeApi {
        let mut locked = install("2", "Test Installation 2");
        locked.deletion_locked = true;
        let mut api = FakeApi::with_installs(vec![install("1", "Test Installation 1"), locked]);
        api.plugin = PluginConfiguration {
            deletion_locks_allowed: max,
        };
        api
    }

    #[tokio::test]
    async fn locks_by_name() {
        let api = api_with(2);
        let locked = lock_installation(&api, "u1", "test installation 1")
            .await
            .unwrap();
        assert_eq!(locked.id, "1");
        assert_eq!(api.count("lock"), 1);
        assert!(api.calls().contains(&"lock:1".to_string()));
    }

    #[tokio::test]
    async fn refuses_past_the_limit() {
        let api = api_with(1);
        let err = lock_installation(&api, "u1", "1").await.unwrap_err();
        assert!(matches!(err, CloudError::DeletionLockLimit { max: 1 }));
        assert_eq!(api.count("lock"), 0);
    }

    #[tokio::test]
    async fn refuses_already_locked() {
        let api = api_with(5);
        let err = lock_installation(&api, "u1", "2").await.unwrap_err();
        assert!(matches!(err, CloudError::AlreadyLocked(_)));
        assert_eq!(api.count("config"), 0);
    }

    #[tokio::test]
    async fn unknown_installation() {
        let api = api_with(5);
        let err = lock_installation(&api, "u1", "nope").await.unwrap_err();
        assert!(matches!(err, CloudError::InstallationNotFound(_)));
    }
}
