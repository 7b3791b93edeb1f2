//! Config command - show or edit configuration

use crate::cli::args::{ConfigAction, ConfigArgs};
use crate::config::{Config, ConfigManager, VALID_KEYS};
use crate::error::{CloudError, CloudResult};
use crate::ui::{self, UiContext};

const MASKED: &str = "********";

/// Execute the config command
pub async fn execute(args: ConfigArgs, config: &Config, manager: &ConfigManager) -> CloudResult<()> {
    match args.action {
        None | Some(ConfigAction::Show) => show_config(config)?,
        Some(ConfigAction::Path) => show_path(manager),
        Some(ConfigAction::Init { force }) => init_config(manager, force).await?,
        Some(ConfigAction::Set { key, value }) => set_value(manager, &key, &value).await?,
    }

    Ok(())
}

fn show_config(config: &Config) -> CloudResult<()> {
    println!("{}", render(config)?);
    Ok(())
}

/// TOML for display, with the token masked
fn render(config: &Config) -> CloudResult<String> {
    let mut shown = config.clone();
    if !shown.server.token.is_empty() {
        shown.server.token = MASKED.to_string();
    }
    Ok(toml::to_string_pretty(&shown)?)
}

fn show_path(manager: &ConfigManager) {
    println!("{}", manager.path().display());
}

async fn init_config(manager: &ConfigManager, force: bool) -> CloudResult<()> {
    let ctx = UiContext::detect();
    let path = manager.path();

    if path.exists() && !force {
        ui::step_warn_hint(
            &ctx,
            &format!("Config already exists at {}", path.display()),
            "Use --force to overwrite",
        );
        return Ok(());
    }

    manager.save(&Config::default()).await?;

    ui::step_ok_detail(
        &ctx,
        "Configuration initialized",
        &path.display().to_string(),
    );

    Ok(())
}

async fn set_value(manager: &ConfigManager, key: &str, value: &str) -> CloudResult<()> {
    let ctx = UiContext::detect();

    if !VALID_KEYS.contains(&key) {
        ui::step_error_detail(&ctx, "Unknown config key", key);
        ui::remark(&ctx, "Valid keys:");
        for key in VALID_KEYS {
            eprintln!("  {}", key);
        }
        return Err(CloudError::User(format!("Unknown config key: {}", key)));
    }

    manager.set_value(key, value).await?;

    let shown = if key == "server.token" { MASKED } else { value };
    ui::step_ok(&ctx, &format!("Set {} = {}", key, shown));
    Ok(())
}
