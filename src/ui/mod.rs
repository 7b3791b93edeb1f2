//! UI module for consistent CLI output
//!
//! Uses `cliclack` for prompts and spinners, with automatic fallback to
//! plain output in CI/non-interactive environments.
//!
//! # Example
//!
//! ```rust,ignore
//! use cloudctl::ui::{self, UiContext, TaskSpinner};
//!
//! let ctx = UiContext::detect().with_auto_yes(args.yes);
//!
//! let mut spinner = TaskSpinner::new(&ctx);
//! spinner.start("Fetching installations...");
//! // ... call the API ...
//! spinner.clear();
//!
//! ui::print_table(&ctx, "Your cloud installations", &installs, now);
//!
//! if ui::confirm(&ctx, "Remove deletion lock?", false).await? {
//!     // ...
//! }
//! ```

mod context;
mod installs;
mod output;
mod progress;
mod prompts;
mod theme;

pub use context::UiContext;
pub use installs::{
    badge_style, label_style, print_detail, print_empty, print_table, EMPTY_MESSAGE,
};
pub use output::{
    intro, key_value, outro_cancel, outro_success, remark, step_error_detail, step_info, step_ok,
    step_ok_detail, step_warn_hint,
};
pub use progress::TaskSpinner;
pub use prompts::confirm;
pub use theme::{init_theme, CloudTheme};
