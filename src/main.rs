//! cloudctl - cloud installations client
//!
//! CLI entry point that dispatches to subcommands.

use clap::Parser;
use cloudctl::cli::{commands, Cli, Commands};
use cloudctl::config::{Config, ConfigManager};
use cloudctl::error::CloudResult;
use cloudctl::ui;
use console::style;
use std::process::ExitCode;
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> ExitCode {
    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{} {}", style("Error:").red().bold(), e);
            if let Some(hint) = e.hint() {
                eprintln!("{} {}", style("Hint:").yellow(), hint);
            }
            ExitCode::FAILURE
        }
    }
}

async fn run() -> CloudResult<()> {
    let cli = Cli::parse();

    // Completions need neither config nor logging
    if let Commands::Completions(args) = cli.command {
        return commands::completions(args);
    }

    let config_manager = match cli.config {
        Some(ref path) => ConfigManager::with_path(path.clone()),
        None => ConfigManager::new(),
    };

    let mut config = config_manager.load().await?;
    cli.apply_overrides(&mut config);

    init_logging(cli.verbose, &config);
    ui::init_theme();
    debug!("Using config at {}", config_manager.path().display());

    match cli.command {
        Commands::List(args) => commands::list(args, &config).await,
        Commands::Show(args) => commands::show(args, &config).await,
        Commands::Lock(args) => commands::lock(args, &config).await,
        Commands::Unlock(args) => commands::unlock(args, &config).await,
        Commands::Restart(args) => commands::restart(args, &config).await,
        Commands::Watch(args) => commands::watch(args, &config).await,
        Commands::Config(args) => commands::config(args, &config, &config_manager).await,
        Commands::Completions(_) => Ok(()),
    }
}

/// 0 = warn (spinners only), 1 = info, 2+ = debug
fn init_logging(verbose: u8, config: &Config) {
    let filter = match verbose {
        0 => EnvFilter::new("cloudctl=warn"),
        1 => EnvFilter::new("cloudctl=info"),
        _ => EnvFilter::new("cloudctl=debug"),
    };

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .without_time()
        .with_writer(std::io::stderr);

    if config.general.log_format == "json" {
        builder.json().init();
    } else {
        builder.init();
    }
}
