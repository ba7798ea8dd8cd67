//! Application service — publish a package and install or update its app.
//!
//! Imports only from `crate::domain` and `crate::application::ports`.
//! All I/O is routed through injected port traits.
//!
//! A run walks `resolve project → read manifest → publish → look up app →
//! update | install`.
//! Publishing is never skipped, so every run produces a new registry version;
//! the app is then either rebound to it or created. Re-running after a crash
//! between publish and bind is safe: the next run binds the newest version.

use crate::application::ports::{AppPlatform, PackageSource, ProgressReporter};
use crate::domain::{
    AppLookup, PlatformError, ReconcileError, ReconcileOutcome, ReconcileStep,
    validate_project_id,
};

fn failed(step: ReconcileStep) -> impl FnOnce(PlatformError) -> ReconcileError {
    move |source| ReconcileError::Failed { step, source }
}

/// Publish the package from `source` and make sure exactly one app for it
/// exists in the project identified by `project_id`.
///
/// Steps:
/// 1. Resolve the project (nothing else happens if it does not exist)
/// 2. Read the manifest from `source`
/// 3. Publish the package, always
/// 4. Look the app up by the package's display name
/// 5. Rebind the found app to the new version, or install it when absent
///
/// # Errors
///
/// Returns `ReconcileError::ProjectNotFound` if the project does not exist,
/// `ReconcileError::Manifest` if the manifest cannot be loaded, and
/// `ReconcileError::Failed` for any other platform failure, tagged with the
/// step at which it happened. A failed lookup never falls through to install.
pub async fn reconcile_app(
    platform: &impl AppPlatform,
    reporter: &impl ProgressReporter,
    project_id: &str,
    source: &impl PackageSource,
) -> Result<ReconcileOutcome, ReconcileError> {
    let project_id = validate_project_id(project_id)?;

    // Step 1: Resolve project.
    reporter.step(&format!("getting project {project_id}..."));
    let project = platform
        .resolve_project(project_id)
        .await
        .map_err(|e| {
            if e.is_not_found() {
                ReconcileError::ProjectNotFound(project_id.to_string())
            } else {
                failed(ReconcileStep::ResolveProject)(e)
            }
        })?;
    reporter.success(&format!("project found: {}", project.name));
    tracing::debug!(project_id = %project.id, "project resolved");

    // Step 2: Read the package.
    let manifest = source.load_manifest().map_err(ReconcileError::Manifest)?;
    tracing::debug!(package = %manifest.name, "manifest loaded");

    // Step 3: Publish.
    reporter.step("publishing package...");
    let dpk = platform
        .publish_package(&project, &manifest)
        .await
        .map_err(failed(ReconcileStep::Publish))?;
    reporter.success(&format!("package published: {} v{}", dpk.display_name, dpk.version));
    tracing::debug!(dpk_id = %dpk.id, version = %dpk.version, "package published");

    // Step 4: Look up by display name.
    reporter.step("checking if app already exists...");
    match platform.find_app_by_name(&project, &dpk.display_name).await {
        AppLookup::Found(existing) => {
            // Step 5a: Rebind version.
            let previous_version = existing.dpk_version.clone();
            if previous_version == dpk.version {
                reporter.warn(&format!(
                    "app '{}' is already bound to v{}; the registry did not bump the version",
                    existing.name, dpk.version
                ));
            }
            tracing::debug!(
                app_id = %existing.id,
                from = %previous_version,
                to = %dpk.version,
                "updating app"
            );
            let app = platform
                .update_app(&existing, &dpk.version)
                .await
                .map_err(failed(ReconcileStep::Update))?;
            reporter.success(&format!("app updated: {}", app.name));
            Ok(ReconcileOutcome::Updated {
                app,
                dpk,
                previous_version,
            })
        }
        AppLookup::NotFound => {
            // Step 5b: Fresh install.
            reporter.step("installing new app...");
            let app = platform
                .install_app(&project, &dpk, &dpk.display_name)
                .await
                .map_err(failed(ReconcileStep::Install))?;
            reporter.success(&format!("app installed: {}", app.name));
            tracing::debug!(app_id = %app.id, "app installed");
            Ok(ReconcileOutcome::Installed { app, dpk })
        }
        AppLookup::Failed(source) => Err(ReconcileError::Failed {
            step: ReconcileStep::Lookup,
            source,
        }),
    }
}
