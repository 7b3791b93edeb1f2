//! Restart command - bounce an installation's application servers

use super::fetch_user_installs;
use crate::api::{HttpClient, InstallsApi};
use crate::audit::{AuditEvent, AuditLog};
use crate::cli::args::RestartArgs;
use crate::config::Config;
use crate::error::{CloudError, CloudResult};
use crate::install::{find_by_name, Installation};
use crate::ui::{self, TaskSpinner, UiContext};
use tracing::info;

/// Execute the restart command
pub async fn execute(args: RestartArgs, config: &Config) -> CloudResult<()> {
    let ctx = UiContext::detect();
    let api = HttpClient::from_config(config)?;
    let user_id = config.user_id()?;

    let mut spinner = TaskSpinner::new(&ctx);
    spinner.start(&format!("Restarting {}...", args.name));
    let target = match restart_installation(&api, user_id, &args.name, args.shared).await {
        Ok(install) => {
            spinner.clear();
            install
        }
        Err(e) => {
            spinner.stop_error("Restart failed");
            return Err(e);
        }
    };

    AuditLog::new(config)
        .record(AuditEvent::Restart, &target)
        .await;

    ui::outro_success(
        &ctx,
        &format!("Installation {} restarting now.", target.name),
    );
    Ok(())
}

/// Restart the installation called `name`.
///
/// Shared installations are only considered with `include_shared`.
pub async fn restart_installation(
    api: &dyn InstallsApi,
    user_id: &str,
    name: &str,
    include_shared: bool,
) -> CloudResult<Installation> {
    let mut installs = fetch_user_installs(api, user_id).await?;
    if include_shared {
        installs.extend(api.get_shared_installs().await?);
    }

    let target = find_by_name(&installs, name)
        .cloned()
        .ok_or_else(|| CloudError::InstallationNotFound(name.to_string()))?;

    api.restart_installation(&target.name).await?;
    info!("Restart requested for {} ({})", target.name, target.id);
    Ok(target)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::fake::FakeApi;
    use crate::install::fixtures::install;

    fn api() -> FakeApi {
        let mut api = FakeApi::with_installs(vec![install("1", "mine")]);
        api.shared = vec![install("9", "team-demo")];
        api
    }

    #[tokio::test]
    async fn restarts_own_installation() {
        let api = api();
        let target = restart_installation(&api, "u1", "MINE", false).await.unwrap();
        assert_eq!(target.id, "1");
        assert!(api.calls().contains(&"restart:mine".to_string()));
        assert_eq!(api.count("shared"), 0);
    }

    #[tokio::test]
    async fn shared_needs_flag() {
        let api = api();
        let err = restart_installation(&api, "u1", "team-demo", false)
            .await
            .unwrap_err();
        assert!(matches!(err, CloudError::InstallationNotFound(_)));
        assert_eq!(api.count("restart"), 0);

        let target = restart_installation(&api, "u1", "team-demo", true)
            .await
            .unwrap();
        assert_eq!(target.id, "9");
    }
}
