//! Status lines printed by the CLI on stderr.
//!
//! Every line starts with an icon so the outcome reads the same with or
//! without color. Color is only added when stderr is a terminal and
//! `NO_COLOR` is unset.

use console::Style;
use is_terminal::IsTerminal;
use owo_colors::OwoColorize;

/// Outcome shown by a status line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// A command finished: `✓`
    Done,
    /// A command could not run: `✗`
    Failed,
    /// Something worth noticing, such as an empty source tree: `⚠`
    Notice,
}

impl Status {
    pub fn icon(self) -> &'static str {
        match self {
            Self::Done => "✓",
            Self::Failed => "✗",
            Self::Notice => "⚠",
        }
    }

    fn colored_icon(self) -> String {
        match self {
            Self::Done => self.icon().green().to_string(),
            Self::Failed => self.icon().red().to_string(),
            Self::Notice => self.icon().yellow().to_string(),
        }
    }

    fn message_style(self) -> Style {
        match self {
            Self::Done => Style::new().green(),
            Self::Failed => Style::new().red().bold(),
            Self::Notice => Style::new().yellow(),
        }
    }
}

/// `message` prefixed with the icon for `status`
pub fn status_line(status: Status, message: &str) -> String {
    if colors_enabled() {
        format!(
            "{} {}",
            status.colored_icon(),
            status.message_style().apply_to(message)
        )
    } else {
        format!("{} {message}", status.icon())
    }
}

pub fn colors_enabled() -> bool {
    std::env::var_os("NO_COLOR").is_none() && std::io::stderr().is_terminal()
}
