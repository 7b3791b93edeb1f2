//! Step, banner and outro lines
//!
//! With a terminal these go through cliclack's log; otherwise each line is
//! prefixed with a bracketed tag so piped output stays greppable.

use super::context::UiContext;
use console::{style, StyledObject};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Tag {
    Ok,
    Warn,
    Fail,
    Info,
}

impl Tag {
    fn plain(self) -> StyledObject<&'static str> {
        match self {
            Tag::Ok => style("[OK]").green(),
            Tag::Warn => style("[WARN]").yellow(),
            Tag::Fail => style("[FAIL]").red(),
            Tag::Info => style("[INFO]").cyan(),
        }
    }
}

fn step(ctx: &UiContext, tag: Tag, message: &str) {
    if ctx.use_fancy_output() {
        let _ = match tag {
            Tag::Ok => cliclack::log::success(message),
            Tag::Warn => cliclack::log::warning(message),
            Tag::Fail => cliclack::log::error(message),
            Tag::Info => cliclack::log::info(message),
        };
    } else if tag == Tag::Fail {
        eprintln!("  {} {}", tag.plain(), message);
    } else {
        println!("  {} {}", tag.plain(), message);
    }
}

/// `message (detail)`, with the detail dimmed on a terminal
fn detailed(ctx: &UiContext, message: &str, detail: &str) -> String {
    if ctx.use_fancy_output() {
        format!("{} ({})", message, style(detail).dim())
    } else {
        format!("{} ({})", message, detail)
    }
}

/// Title above a table or detail view
pub fn intro(ctx: &UiContext, title: &str) {
    if ctx.use_fancy_output() {
        let _ = cliclack::intro(style(title).cyan().bold());
    } else {
        println!("{}", style(title).cyan().bold());
        println!();
    }
}

/// Closing line after an action went through
pub fn outro_success(ctx: &UiContext, message: &str) {
    if ctx.use_fancy_output() {
        let _ = cliclack::outro(style(message).green().bold());
    } else {
        println!("{} {}", Tag::Ok.plain(), message);
    }
}

/// Closing line after the user backed out
pub fn outro_cancel(ctx: &UiContext, message: &str) {
    if ctx.use_fancy_output() {
        let _ = cliclack::outro_cancel(message);
    } else {
        println!("{} {}", style("[CANCELLED]").yellow(), message);
    }
}

pub fn step_ok(ctx: &UiContext, message: &str) {
    step(ctx, Tag::Ok, message);
}

pub fn step_ok_detail(ctx: &UiContext, message: &str, detail: &str) {
    step(ctx, Tag::Ok, &detailed(ctx, message, detail));
}

/// Warning with the command that resolves it
pub fn step_warn_hint(ctx: &UiContext, message: &str, hint: &str) {
    step(ctx, Tag::Warn, &detailed(ctx, message, hint));
}

/// Failure line; goes to stderr without a terminal
pub fn step_error_detail(ctx: &UiContext, message: &str, detail: &str) {
    let line = if ctx.use_fancy_output() {
        format!("{}: {}", message, style(detail).red())
    } else {
        format!("{}: {}", message, detail)
    };
    step(ctx, Tag::Fail, &line);
}

pub fn step_info(ctx: &UiContext, message: &str) {
    step(ctx, Tag::Info, message);
}

/// Untagged dim line
pub fn remark(ctx: &UiContext, message: &str) {
    if ctx.use_fancy_output() {
        let _ = cliclack::log::remark(message);
    } else {
        println!("  {}", style(message).dim());
    }
}

/// One row of the installation detail view
pub fn key_value(ctx: &UiContext, key: &str, value: &str) {
    let value = if value.is_empty() { "-" } else { value };
    if ctx.use_fancy_output() {
        println!("  {:<12} {}", style(key).dim(), value);
    } else {
        println!("  {}: {}", key, value);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detail_is_parenthesized_in_plain_mode() {
        let ctx = UiContext::non_interactive();
        assert_eq!(
            detailed(&ctx, "Configuration initialized", "/tmp/config.toml"),
            "Configuration initialized (/tmp/config.toml)"
        );
    }

    #[test]
    fn plain_tags() {
        assert_eq!(Tag::Ok.plain().force_styling(false).to_string(), "[OK]");
        assert_eq!(Tag::Fail.plain().force_styling(false).to_string(), "[FAIL]");
    }

    #[test]
    fn output_non_interactive() {
        let ctx = UiContext::non_interactive();
        intro(&ctx, "Your cloud installations");
        outro_success(&ctx, "Installation demo restarting now.");
        outro_cancel(&ctx, "Deletion lock kept");
        step_ok(&ctx, "Set server.url");
        step_info(&ctx, "demo is locked against deletion");
        step_warn_hint(&ctx, "Config already exists", "Use --force to overwrite");
        step_error_detail(&ctx, "Received a server error", "boom");
        key_value(&ctx, "Size", "");
    }
}
