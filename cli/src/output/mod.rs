//! Terminal and JSON output.
//!
//! Commands never print directly: they ask `AppContext::renderer()` for a
//! `Renderer` and progress goes through `TerminalReporter`.

pub mod human;
pub mod json;
pub mod reporter;
pub mod styles;

use console::Term;
use owo_colors::OwoColorize as _;

pub use human::HumanRenderer;
pub use json::JsonRenderer;
pub use reporter::TerminalReporter;
pub use styles::Styles;

/// Width that summary labels are padded to.
const LABEL_WIDTH: usize = 9;

/// Styling and verbosity shared by every human-facing printer.
pub struct OutputContext {
    /// Stylesheet for colored output.
    pub styles: Styles,
    /// Whether to suppress non-error output.
    pub quiet: bool,
}

impl OutputContext {
    /// Colour is used only on a terminal, and never with `--no-color` or
    /// `NO_COLOR` set.
    #[must_use]
    pub fn new(no_color: bool, quiet: bool) -> Self {
        let color =
            !no_color && std::env::var_os("NO_COLOR").is_none() && Term::stdout().is_term();
        Self {
            styles: Styles::new(color),
            quiet,
        }
    }

    /// `  ✓ msg` on stdout.
    pub fn success(&self, msg: &str) {
        if !self.quiet {
            println!("  {} {msg}", "✓".style(self.styles.ok));
        }
    }

    /// `  ! msg` on stderr, so warnings never mix with results.
    pub fn warn(&self, msg: &str) {
        if !self.quiet {
            eprintln!("  {} {msg}", "!".style(self.styles.warn));
        }
    }

    /// Summary title line.
    pub fn title(&self, msg: &str) {
        if !self.quiet {
            println!("  {}", msg.style(self.styles.title));
        }
    }

    /// Aligned `label  value` line under a title.
    pub fn field(&self, label: &str, value: &str) {
        if !self.quiet {
            let padded = format!("{label:<LABEL_WIDTH$}");
            println!("    {}{value}", padded.style(self.styles.label));
        }
    }

    /// `v1.2.3`, styled as a version.
    #[must_use]
    pub fn version(&self, version: &str) -> String {
        format!("v{version}").style(self.styles.version).to_string()
    }
}

/// Output renderer selected by `--json`.
pub enum Renderer<'a> {
    Human(HumanRenderer<'a>),
    Json(JsonRenderer),
}
