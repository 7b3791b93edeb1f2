//! List command - show installations

use super::fetch_user_installs;
use crate::api::{HttpClient, InstallsApi};
use crate::cli::args::{ListArgs, OutputFormat};
use crate::config::Config;
use crate::error::CloudResult;
use crate::install::{deletion_locked_install, Installation};
use crate::store::{Clock, SystemClock};
use crate::ui::{self, TaskSpinner, UiContext};

/// Execute the list command
pub async fn execute(args: ListArgs, config: &Config) -> CloudResult<()> {
    let ctx = UiContext::detect();
    let api = HttpClient::from_config(config)?;
    if !args.shared {
        config.user_id()?;
    }

    let mut spinner = TaskSpinner::new(&ctx);
    spinner.start("Fetching installations...");
    let installs = match collect(&api, config, args.shared).await {
        Ok(installs) => {
            spinner.clear();
            installs
        }
        Err(e) => {
            spinner.stop_error("Received a server error");
            return Err(e);
        }
    };

    if args.count {
        println!("{}", installs.len());
        return Ok(());
    }

    match args.format {
        OutputFormat::Table => {
            let title = if args.shared {
                "Shared cloud installations"
            } else {
                "Your cloud installations"
            };
            if installs.is_empty() {
                ui::print_empty(&ctx);
            } else {
                ui::print_table(&ctx, title, &installs, SystemClock.now_millis());
                if let Some(note) = lock_note(&installs) {
                    ui::step_info(&ctx, &note);
                }
            }
        }
        OutputFormat::Json => print_json(&installs)?,
        OutputFormat::Plain => print_plain(&installs),
    }

    Ok(())
}

/// The user's own installations, or the shared ones
pub(crate) async fn collect(
    api: &dyn InstallsApi,
    config: &Config,
    shared: bool,
) -> CloudResult<Vec<Installation>> {
    if shared {
        api.get_shared_installs().await
    } else {
        fetch_user_installs(api, config.user_id()?).await
    }
}

/// Which installation currently holds the deletion lock, if any
fn lock_note(installs: &[Installation]) -> Option<String> {
    deletion_locked_install(installs)
        .map(|install| format!("{} is locked against deletion", install.name))
}

fn print_json(installs: &[Installation]) -> CloudResult<()> {
    let json = serde_json::to_string_pretty(installs)?;
    println!("{}", json);
    Ok(())
}

fn print_plain(installs: &[Installation]) {
    for install in installs {
        println!("{}", install.name);
    }
}
