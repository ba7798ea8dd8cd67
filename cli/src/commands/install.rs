//! `dpkctl install` — publish the package and install or update its app.

use std::path::PathBuf;

use anyhow::Result;
use clap::Args;

use crate::app::AppContext;
use crate::application::ports::{AppPlatform, PackageSource};
use crate::application::services::app_install::reconcile_app;
use crate::infra::config::Settings;
use crate::infra::manifest::ManifestFile;
use crate::infra::platform::HttpPlatform;
use crate::output::{Renderer, TerminalReporter};

/// Arguments for the install command.
#[derive(Args)]
pub struct InstallArgs {
    /// Project ID where the app will be installed
    #[arg(long = "project_id", visible_alias = "project-id", value_name = "ID")]
    pub project_id: String,

    /// Path to the package manifest [default: ./dataloop.json]
    #[arg(long, value_name = "PATH")]
    pub manifest: Option<PathBuf>,
}

/// Run `dpkctl install --project_id <ID>`.
///
/// Loads settings, builds the platform client and hands it to [`install`]
/// together with the manifest file, which is read once the project has
/// been resolved.
///
/// # Errors
///
/// Returns an error if settings cannot be loaded or the install run fails.
pub async fn run(ctx: &AppContext, args: &InstallArgs) -> Result<()> {
    let settings = Settings::load(ctx.env_override)?;
    let source = ManifestFile::new(args.manifest.as_deref());
    tracing::info!(
        env = %settings.env,
        base_url = %settings.base_url,
        manifest = %source.path().display(),
        "starting install"
    );
    let platform = HttpPlatform::new(&settings)?;
    install(ctx, &platform, &args.project_id, &source).await
}

/// Reconcile the app with an injected platform and render the outcome.
///
/// # Errors
///
/// Returns the `ReconcileError` of a failed run, wrapped in `anyhow`.
pub async fn install(
    ctx: &AppContext,
    platform: &impl AppPlatform,
    project_id: &str,
    source: &impl PackageSource,
) -> Result<()> {
    let reporter = TerminalReporter::new(&ctx.output);
    let outcome = reconcile_app(platform, &reporter, project_id, source).await?;
    tracing::info!(
        action = outcome.action(),
        app = %outcome.app().name,
        version = %outcome.app().dpk_version,
        "install finished"
    );
    match ctx.renderer() {
        Renderer::Human(r) => r.render_outcome(&outcome),
        Renderer::Json(r) => r.render_outcome(&outcome)?,
    }
    Ok(())
}
