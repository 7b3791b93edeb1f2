//! Show command - details of one installation

use super::list::collect;
use super::resolve;
use crate::api::HttpClient;
use crate::cli::args::ShowArgs;
use crate::config::Config;
use crate::error::CloudResult;
use crate::store::{Clock, SystemClock};
use crate::ui::{self, UiContext};

/// Execute the show command
pub async fn execute(args: ShowArgs, config: &Config) -> CloudResult<()> {
    let ctx = UiContext::detect();
    let api = HttpClient::from_config(config)?;

    let mut installs = collect(&api, config, false).await?;
    if args.shared {
        installs.extend(collect(&api, config, true).await?);
    }

    let install = resolve(&installs, &args.installation)?;
    ui::print_detail(&ctx, install, SystemClock.now_millis());
    Ok(())
}
