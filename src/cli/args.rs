//! CLI argument definitions using clap derive

use crate::config::Config;
use clap::{ArgAction, Parser, Subcommand, ValueEnum};
use clap_complete::Shell;
use std::path::PathBuf;

/// cloudctl - your cloud server installations from the terminal
///
/// Lists the installations the cloud plugin provisioned for you, shows
/// their state and scheduled deletion, and locks, unlocks or restarts them.
#[derive(Parser, Debug)]
#[command(name = "cloudctl")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Increase verbosity (-v info, -vv debug)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    /// Configuration file path
    #[arg(short, long, global = true, env = "CLOUDCTL_CONFIG")]
    pub config: Option<PathBuf>,

    /// Chat server URL (overrides server.url)
    #[arg(long, global = true, env = "CLOUDCTL_SERVER")]
    pub server: Option<String>,

    /// Access token (overrides server.token)
    #[arg(long, global = true, env = "CLOUDCTL_TOKEN", hide_env_values = true)]
    pub token: Option<String>,

    /// User ID whose installations to show (overrides server.user_id)
    #[arg(long, global = true, env = "CLOUDCTL_USER")]
    pub user: Option<String>,
}

impl Cli {
    /// Layer command-line and environment overrides onto the file config
    pub fn apply_overrides(&self, config: &mut Config) {
        if let Some(ref server) = self.server {
            config.server.url = server.clone();
        }
        if let Some(ref token) = self.token {
            config.server.token = token.clone();
        }
        if let Some(ref user) = self.user {
            config.server.user_id = user.clone();
        }
    }
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List installations
    List(ListArgs),

    /// Show one installation in detail
    Show(ShowArgs),

    /// Lock an installation against deletion
    Lock(LockArgs),

    /// Remove the deletion lock from an installation
    Unlock(UnlockArgs),

    /// Restart an installation
    Restart(RestartArgs),

    /// Keep the installation list on screen, refreshing periodically
    Watch(WatchArgs),

    /// Show or edit configuration
    Config(ConfigArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Output format for list command
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable table
    #[default]
    Table,
    /// JSON output
    Json,
    /// Installation names only
    Plain,
}

/// Arguments for the list command
#[derive(Parser, Debug)]
pub struct ListArgs {
    /// List shared installations instead of your own
    #[arg(long)]
    pub shared: bool,

    /// Output format
    #[arg(short, long, default_value = "table")]
    pub format: OutputFormat,

    /// Print only the number of installations
    #[arg(long, conflicts_with = "format")]
    pub count: bool,
}

/// Arguments for the show command
#[derive(Parser, Debug)]
pub struct ShowArgs {
    /// Installation name or ID
    pub installation: String,

    /// Look among shared installations too
    #[arg(long)]
    pub shared: bool,
}

/// Arguments for the lock command
#[derive(Parser, Debug)]
pub struct LockArgs {
    /// Installation name or ID
    pub installation: String,
}

/// Arguments for the unlock command
#[derive(Parser, Debug)]
pub struct UnlockArgs {
    /// Installation name or ID
    pub installation: String,

    /// Skip the confirmation prompt
    #[arg(short, long)]
    pub yes: bool,
}

/// Arguments for the restart command
#[derive(Parser, Debug)]
pub struct RestartArgs {
    /// Installation name
    pub name: String,

    /// Allow restarting a shared installation
    #[arg(long)]
    pub shared: bool,
}

/// Arguments for the watch command
#[derive(Parser, Debug)]
pub struct WatchArgs {
    /// Seconds between refreshes (defaults to watch.interval_secs)
    #[arg(short, long, value_parser = clap::value_parser!(u64).range(1..))]
    pub interval: Option<u64>,
}

/// Arguments for the config command
#[derive(Parser, Debug)]
pub struct ConfigArgs {
    /// Subcommand for config
    #[command(subcommand)]
    pub action: Option<ConfigAction>,
}

/// Config subcommands
#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Show current configuration
    Show,

    /// Show configuration file path
    Path,

    /// Write a default configuration file
    Init {
        /// Overwrite an existing file
        #[arg(short, long)]
        force: bool,
    },

    /// Set a configuration value
    Set {
        /// Configuration key (e.g. server.url)
        key: String,

        /// Value to set
        value: String,
    },
}

/// Arguments for the completions command
#[derive(Parser, Debug)]
pub struct CompletionsArgs {
    /// Target shell
    pub shell: Shell,
}
