//! `TerminalReporter`: the terminal side of `ProgressReporter`.

use std::cell::Cell;

use owo_colors::OwoColorize as _;

use crate::application::ports::ProgressReporter;
use crate::output::OutputContext;

/// Prints numbered steps (`  [2] publishing package...`) and delegates
/// success and warning lines to the `OutputContext`.
pub struct TerminalReporter<'a> {
    ctx: &'a OutputContext,
    steps: Cell<usize>,
}

impl<'a> TerminalReporter<'a> {
    #[must_use]
    pub fn new(ctx: &'a OutputContext) -> Self {
        Self {
            ctx,
            steps: Cell::new(0),
        }
    }

    /// Number of steps reported so far.
    #[must_use]
    pub fn steps(&self) -> usize {
        self.steps.get()
    }
}

impl ProgressReporter for TerminalReporter<'_> {
    fn step(&self, message: &str) {
        let n = self.steps.get() + 1;
        self.steps.set(n);
        if !self.ctx.quiet {
            println!("  {} {message}", format!("[{n}]").style(self.ctx.styles.step));
        }
    }

    fn success(&self, message: &str) {
        self.ctx.success(message);
    }

    fn warn(&self, message: &str) {
        self.ctx.warn(message);
    }
}
