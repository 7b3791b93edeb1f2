//! Custom theme for cliclack prompts

use cliclack::ThemeState;
use console::Style;

/// Blue theme matching the chat client's sidebar
#[derive(Debug, Clone, Default)]
pub struct CloudTheme;

impl cliclack::Theme for CloudTheme {
    fn bar_color(&self, state: &ThemeState) -> Style {
        match state {
            ThemeState::Active => Style::new().blue(),
            ThemeState::Error(_) => Style::new().red(),
            ThemeState::Cancel => Style::new().dim(),
            ThemeState::Submit => Style::new().blue().dim(),
        }
    }

    fn state_symbol_color(&self, state: &ThemeState) -> Style {
        match state {
            ThemeState::Active => Style::new().blue(),
            ThemeState::Error(_) => Style::new().red(),
            ThemeState::Cancel => Style::new().yellow(),
            ThemeState::Submit => Style::new().green(),
        }
    }
}

/// Install the theme for every prompt in this process
pub fn init_theme() {
    cliclack::set_theme(CloudTheme);
}
