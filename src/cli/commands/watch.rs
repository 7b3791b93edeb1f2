//! Watch command - keep the installation list on screen
//!
//! Every tick goes through the fetch throttle with one cache shared across
//! ticks, so a user with nothing provisioned is asked for at most once per
//! cooldown window however short the refresh interval is.

use crate::api::{HttpClient, InstallsApi};
use crate::cli::args::WatchArgs;
use crate::config::Config;
use crate::error::CloudResult;
use crate::install::Installation;
use crate::store::{get_cloud_user_data, Clock, FetchOutcome, SystemClock, UserInstallCache, COOLDOWN_MS};
use crate::ui::{self, UiContext};
use console::Term;
use std::time::Duration;
use tracing::{debug, warn};

/// What one refresh produced
#[derive(Debug, Clone, PartialEq)]
pub enum WatchFrame {
    /// Fresh list from the server
    Installs(Vec<Installation>),
    /// The user has no installations; the next lookup happens after `retry_in_ms`
    NoInstalls { retry_in_ms: i64 },
    /// Any other failure, shown until the next tick
    ServerError(String),
}

/// Execute the watch command
pub async fn execute(args: WatchArgs, config: &Config) -> CloudResult<()> {
    let ctx = UiContext::detect();
    let api = HttpClient::from_config(config)?;
    let user_id = config.user_id()?.to_string();
    let secs = args.interval.unwrap_or(config.watch.interval_secs).max(1);

    let clock = SystemClock;
    let mut cache = UserInstallCache::new();
    let term = Term::stdout();
    let mut ticker = tokio::time::interval(Duration::from_secs(secs));

    let shutdown = tokio::signal::ctrl_c();
    tokio::pin!(shutdown);

    debug!("Watching installations for {} every {}s", user_id, secs);

    loop {
        tokio::select! {
            _ = ticker.tick() => {
                let frame = refresh(&api, &mut cache, &clock, &user_id).await;
                if ctx.use_fancy_output() {
                    if let Err(e) = term.clear_screen() {
                        warn!("Could not clear the terminal: {}", e);
                    }
                }
                render(&ctx, &frame, clock.now_millis(), secs);
            }
            _ = &mut shutdown => {
                ui::outro_success(&ctx, "Stopped watching");
                break;
            }
        }
    }

    Ok(())
}

/// Run one throttled lookup and describe the result
pub async fn refresh(
    api: &dyn InstallsApi,
    cache: &mut UserInstallCache,
    clock: &dyn Clock,
    user_id: &str,
) -> WatchFrame {
    match get_cloud_user_data(api, cache, clock, user_id).await {
        Ok(FetchOutcome::Fetched(installs)) => WatchFrame::Installs(installs),
        Ok(FetchOutcome::Skipped) => {
            let retry_in_ms = cache
                .get(user_id)
                .and_then(|entry| entry.last_try())
                .map(|last_try| (COOLDOWN_MS - (clock.now_millis() - last_try)).max(0))
                .unwrap_or(0);
            WatchFrame::NoInstalls { retry_in_ms }
        }
        Err(e) if e.is_not_found() => WatchFrame::NoInstalls {
            retry_in_ms: COOLDOWN_MS,
        },
        Err(e) => WatchFrame::ServerError(e.to_string()),
    }
}

fn render(ctx: &UiContext, frame: &WatchFrame, now: i64, secs: u64) {
    match frame {
        WatchFrame::Installs(installs) if installs.is_empty() => ui::print_empty(ctx),
        WatchFrame::Installs(installs) => {
            ui::print_table(ctx, "Your cloud installations", installs, now)
        }
        WatchFrame::NoInstalls { retry_in_ms } => {
            ui::print_empty(ctx);
            ui::remark(
                ctx,
                &format!("Next lookup in {}s", (retry_in_ms + 999) / 1000),
            );
        }
        WatchFrame::ServerError(message) => {
            ui::step_error_detail(ctx, "Received a server error", message)
        }
    }
    ui::remark(ctx, &format!("Refreshing every {}s, Ctrl-C to stop", secs));
}
