//! `dpkctl whoami` — check the configured token against the platform.

use anyhow::Result;

use crate::app::AppContext;
use crate::application::ports::Identity;
use crate::application::services::session::check_session;
use crate::infra::config::Settings;
use crate::infra::platform::HttpPlatform;
use crate::output::{Renderer, TerminalReporter};

/// Run `dpkctl whoami` against the platform configured in the environment.
///
/// # Errors
///
/// Returns an error if settings are missing or the token is rejected.
pub async fn run(ctx: &AppContext) -> Result<()> {
    let settings = Settings::load(ctx.env_override)?;
    tracing::info!(env = %settings.env, base_url = %settings.base_url, "checking token");
    let platform = HttpPlatform::new(&settings)?;
    whoami(ctx, &platform, settings.env.as_str()).await
}

/// Check the token with an injected identity port and render the user.
///
/// # Errors
///
/// Returns an error if the platform rejects the token or cannot be reached.
pub async fn whoami(ctx: &AppContext, identity: &impl Identity, env: &str) -> Result<()> {
    let reporter = TerminalReporter::new(&ctx.output);
    let user = check_session(identity, &reporter).await?;
    match ctx.renderer() {
        Renderer::Human(r) => r.render_user(&user, env),
        Renderer::Json(r) => r.render_user(&user, env)?,
    }
    Ok(())
}
