//! Unlock command - return an installation to the cleanup pool

use super::{fetch_user_installs, resolve};
use crate::api::{HttpClient, InstallsApi};
use crate::audit::{AuditEvent, AuditLog};
use crate::cli::args::UnlockArgs;
use crate::config::Config;
use crate::error::{CloudError, CloudResult};
use crate::install::Installation;
use crate::ui::{self, UiContext};
use tracing::info;

const CONFIRM_PROMPT: &str = "Remove deletion lock? Doing so will add this installation back \
     into the clean up pool, meaning it can be deleted.";

/// Execute the unlock command
pub async fn execute(args: UnlockArgs, config: &Config) -> CloudResult<()> {
    let ctx = UiContext::detect().with_auto_yes(args.yes);
    let api = HttpClient::from_config(config)?;
    let user_id = config.user_id()?;

    let target = unlock_target(&api, user_id, &args.installation).await?;

    if !confirm_and_unlock(&api, &ctx, &target).await? {
        ui::outro_cancel(&ctx, "Deletion lock kept");
        if !ctx.is_interactive() {
            ui::remark(&ctx, "Pass --yes to unlock without a prompt");
        }
        return Ok(());
    }

    AuditLog::new(config)
        .record(AuditEvent::DeletionUnlock, &target)
        .await;

    ui::outro_success(
        &ctx,
        &format!(
            "Deletion lock has been removed from {}, your workspace can now be deleted.",
            target.name
        ),
    );
    Ok(())
}

/// The locked installation `key` refers to
pub async fn unlock_target(
    api: &dyn InstallsApi,
    user_id: &str,
    key: &str,
) -> CloudResult<Installation> {
    let installs = fetch_user_installs(api, user_id).await?;
    let target = resolve(&installs, key)?;

    if !target.deletion_locked {
        return Err(CloudError::NotLocked(target.name.clone()));
    }
    Ok(target.clone())
}

/// Ask before unlocking `target`; false when the user declined
pub async fn confirm_and_unlock(
    api: &dyn InstallsApi,
    ctx: &UiContext,
    target: &Installation,
) -> CloudResult<bool> {
    if !ui::confirm(ctx, CONFIRM_PROMPT, false).await? {
        return Ok(false);
    }

    api.deletion_unlock_installation(&target.id).await?;
    info!("Unlocked installation {} ({})", target.name, target.id);
    Ok(true)
}
