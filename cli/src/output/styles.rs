//! Colour sheet for terminal output.

use owo_colors::Style;

/// One style per kind of terminal line. Every style is plain when colour
/// is off, so callers never branch on it.
#[derive(Default, Clone, Copy)]
pub struct Styles {
    /// Completed steps
    pub ok: Style,
    /// Non-fatal problems
    pub warn: Style,
    /// Step counters
    pub step: Style,
    /// Field labels in summaries
    pub label: Style,
    /// Summary titles
    pub title: Style,
    /// Package versions
    pub version: Style,
}

impl Styles {
    /// Build the sheet, coloured or plain.
    #[must_use]
    pub fn new(color: bool) -> Self {
        if !color {
            return Self::default();
        }
        Self {
            ok: Style::new().green(),
            warn: Style::new().yellow(),
            step: Style::new().cyan(),
            label: Style::new().dimmed(),
            title: Style::new().bold(),
            version: Style::new().magenta(),
        }
    }
}
