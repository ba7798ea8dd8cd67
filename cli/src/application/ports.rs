//! Port trait definitions for the Application layer.
//!
//! Ports are the interfaces (contracts) that infrastructure must fulfill.
//! This file imports only from `crate::domain` and `dpk_common`, never from
//! `crate::infra`, `crate::commands`, or `crate::output`.

use dpk_common::{AppInstance, PackageDescriptor, PackageManifest, Project, UserInfo};

use crate::domain::{AppLookup, PlatformError};

// ── Platform Port Traits ──────────────────────────────────────────────────────

/// Project lookup.
#[allow(async_fn_in_trait)]
pub trait ProjectDirectory {
    /// Fetch a project by id. Fails with `PlatformError::NotFound` if no
    /// project has that id.
    async fn resolve_project(&self, project_id: &str) -> Result<Project, PlatformError>;
}

/// App registry: package publishing.
#[allow(async_fn_in_trait)]
pub trait PackageRegistry {
    /// Publish the manifest as a new package version in the project's scope.
    async fn publish_package(
        &self,
        project: &Project,
        manifest: &PackageManifest,
    ) -> Result<PackageDescriptor, PlatformError>;
}

/// Installed-app operations inside a project.
#[allow(async_fn_in_trait)]
pub trait AppCatalog {
    /// Look up the app named `name` in `project`.
    async fn find_app_by_name(&self, project: &Project, name: &str) -> AppLookup;
    /// Rebind `app` to `dpk_version` and persist it.
    async fn update_app(
        &self,
        app: &AppInstance,
        dpk_version: &str,
    ) -> Result<AppInstance, PlatformError>;
    /// Install `dpk` into `project` as a new app called `name`.
    async fn install_app(
        &self,
        project: &Project,
        dpk: &PackageDescriptor,
        name: &str,
    ) -> Result<AppInstance, PlatformError>;
}

/// Token introspection.
#[allow(async_fn_in_trait)]
pub trait Identity {
    /// Return the user the configured token belongs to.
    async fn current_user(&self) -> Result<UserInfo, PlatformError>;
}

/// Everything an install run needs from the platform.
pub trait AppPlatform: ProjectDirectory + PackageRegistry + AppCatalog {}

/// Blanket implementation: any type implementing the three sub-traits is an `AppPlatform`.
impl<T> AppPlatform for T where T: ProjectDirectory + PackageRegistry + AppCatalog {}

// ── Package Source Port ───────────────────────────────────────────────────────

/// Where the package manifest comes from. Read only once the target project
/// is known to exist.
pub trait PackageSource {
    /// Read and validate the manifest.
    ///
    /// # Errors
    ///
    /// Returns an error if the manifest cannot be read or is invalid.
    fn load_manifest(&self) -> anyhow::Result<PackageManifest>;
}

/// An already-loaded manifest is its own source.
impl PackageSource for PackageManifest {
    fn load_manifest(&self) -> anyhow::Result<PackageManifest> {
        Ok(self.clone())
    }
}

// ── Progress Reporting Port ───────────────────────────────────────────────────

/// Abstracts progress reporting so services can emit events without
/// depending on the Presentation layer.
pub trait ProgressReporter {
    /// Emit an in-progress step message.
    fn step(&self, message: &str);
    /// Emit a success message.
    fn success(&self, message: &str);
    /// Emit a warning message.
    fn warn(&self, message: &str);
}
