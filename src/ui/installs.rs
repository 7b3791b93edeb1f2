//! Terminal rendering of installation lists

use super::context::UiContext;
use super::output::{intro, key_value, remark};
use crate::countdown::{deletion_countdown, ColorToken, FontWeight, LabelStyle};
use crate::install::{BadgeTone, Installation};
use console::{style, Style};

/// Shown when a user has nothing provisioned
pub const EMPTY_MESSAGE: &str =
    "There are no installations, use the /cloud create command to add an installation.";

pub fn badge_style(tone: BadgeTone) -> Style {
    match tone {
        BadgeTone::Success => Style::new().green(),
        BadgeTone::Pending => Style::new().yellow(),
        BadgeTone::Muted => Style::new().dim(),
        BadgeTone::Danger => Style::new().red(),
    }
}

pub fn label_style(label: LabelStyle) -> Style {
    let style = match label.color {
        ColorToken::Default => Style::new(),
        ColorToken::Danger => Style::new().red(),
    };
    match label.weight {
        FontWeight::Normal => style,
        FontWeight::Bold => style.bold(),
    }
}

/// Table of installations with badges and deletion countdowns
pub fn print_table(ctx: &UiContext, title: &str, installs: &[Installation], now: i64) {
    intro(ctx, title);

    println!(
        "{:<28} {:<24} {:<44} {:<20} {:<10} {:<8} {}",
        style("NAME").bold(),
        style("STATE").bold(),
        style("URL").bold(),
        style("RELEASE").bold(),
        style("SIZE").bold(),
        style("LOCK").bold(),
        style("DELETION").bold()
    );
    println!("{}", "-".repeat(147));

    for install in installs {
        let badge = install.state.badge();
        let lock = if install.deletion_locked {
            style("locked").cyan()
        } else {
            style("-").dim()
        };
        let deletion = match deletion_countdown(install, now) {
            Some(countdown) => label_style(countdown.style())
                .apply_to(countdown.label())
                .to_string(),
            None => String::new(),
        };

        println!(
            "{:<28} {:<24} {:<44} {:<20} {:<10} {:<8} {}",
            install.name,
            badge_style(badge.tone).apply_to(badge.label),
            install.primary_url(),
            install.release().to_string(),
            install.size,
            lock,
            deletion
        );
    }

    println!();
    println!("{} installation(s)", installs.len());
}

/// Every field of one installation
pub fn print_detail(ctx: &UiContext, install: &Installation, now: i64) {
    intro(ctx, &install.name);

    let badge = install.state.badge();
    key_value(ctx, "ID", &install.id);
    key_value(
        ctx,
        "State",
        &badge_style(badge.tone).apply_to(&badge.label).to_string(),
    );
    key_value(ctx, "URL", &install.primary_url());
    key_value(ctx, "Image", &install.image);
    key_value(ctx, "Release", &install.release().to_string());
    key_value(ctx, "Database", &install.database);
    key_value(ctx, "Filestore", &install.filestore);
    key_value(ctx, "Size", &install.size);
    key_value(
        ctx,
        "Locked",
        if install.deletion_locked { "yes" } else { "no" },
    );
    if !install.installation_logs_url.is_empty() {
        key_value(ctx, "Logs", &install.installation_logs_url);
    }
    if !install.provisioner_logs_url.is_empty() {
        key_value(ctx, "Provisioner", &install.provisioner_logs_url);
    }

    if let Some(countdown) = deletion_countdown(install, now) {
        println!();
        println!(
            "  {}",
            label_style(countdown.style()).apply_to(countdown.label())
        );
    }
}

/// Message for an empty list
pub fn print_empty(ctx: &UiContext) {
    remark(ctx, EMPTY_MESSAGE);
}
