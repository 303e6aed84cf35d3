//! Consistent styling utilities for CLI output.
//!
//! Provides color helpers using owo-colors.

use owo_colors::OwoColorize;
use std::fmt::Display;

/// Styles for different semantic elements.
pub struct Style;

impl Style {
    /// Style for the diagnostic prefix (e.g., "[cmd] usage error:")
    pub fn error<T: Display>(text: T) -> String {
        format!("{}", text.red().bold())
    }

    /// Style for command names in listings
    pub fn command<T: Display>(text: T) -> String {
        format!("{}", text.green())
    }

    /// Style for hints/help text
    pub fn hint<T: Display>(text: T) -> String {
        format!("{}", text.dimmed().italic())
    }
}

/// Returns `true` unless the user opted out via `NO_COLOR` (https://no-color.org/).
pub fn color_allowed() -> bool {
    std::env::var_os("NO_COLOR").is_none()
}
