//! Design tokens for the frontdesk CLI
//!
//! All status icons and colors are sourced from this module so the output
//! stays consistent across the menu handlers.

use crossterm::style::Stylize;

pub mod icons {
    pub const SUCCESS: &str = "✓";
    pub const ERROR: &str = "✗";
    pub const WARNING: &str = "⚠";
}

/// Green check status line
pub fn success(message: &str) -> String {
    format!("{} {}", icons::SUCCESS.green(), message)
}

/// Red cross status line
pub fn error(message: &str) -> String {
    format!("{} {}", icons::ERROR.red(), message)
}

/// Yellow warning status line
pub fn warning(message: &str) -> String {
    format!("{} {}", icons::WARNING.yellow(), message)
}
