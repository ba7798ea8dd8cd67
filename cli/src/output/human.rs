//! Human-readable terminal renderer.

use dpk_common::UserInfo;

use crate::domain::ReconcileOutcome;
use crate::output::OutputContext;

/// Renders results as human-readable terminal output using `OutputContext`.
pub struct HumanRenderer<'a> {
    ctx: &'a OutputContext,
}

impl<'a> HumanRenderer<'a> {
    /// Create a new `HumanRenderer` wrapping the given output context.
    #[must_use]
    pub fn new(ctx: &'a OutputContext) -> Self {
        Self { ctx }
    }

    /// Summarise an install run.
    pub fn render_outcome(&self, outcome: &ReconcileOutcome) {
        let app = outcome.app();
        if !self.ctx.quiet {
            println!();
        }
        match outcome {
            ReconcileOutcome::Installed { .. } => {
                self.ctx
                    .title(&format!("App installed successfully: {}", app.name));
                self.ctx.field("Version", &self.ctx.version(&app.dpk_version));
            }
            ReconcileOutcome::Updated {
                previous_version, ..
            } => {
                self.ctx
                    .title(&format!("App updated successfully: {}", app.name));
                self.ctx.field(
                    "Version",
                    &format!(
                        "{} -> {}",
                        self.ctx.version(previous_version),
                        self.ctx.version(&app.dpk_version)
                    ),
                );
            }
        }
        self.ctx.field("App ID", &app.id);
        self.ctx.field("Project", &app.project_id);
    }

    /// Show who the token belongs to.
    pub fn render_user(&self, user: &UserInfo, env: &str) {
        self.ctx.field("User", &user.email);
        self.ctx.field("Env", env);
    }

    /// Render the CLI version.
    pub fn render_version(&self, version: &str) {
        println!("dpkctl {version}");
    }
}
