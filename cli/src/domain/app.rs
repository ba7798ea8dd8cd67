//! App reconciliation domain types and pure validation functions.
//!
//! This module is intentionally free of I/O, async, and external layer imports.

use dpk_common::{AppInstance, PackageDescriptor};

use crate::domain::error::{PlatformError, ReconcileError};

/// Result of looking up an installed app by name.
///
/// `NotFound` is the only outcome that leads to a fresh install; a
/// `Failed` lookup must never be treated as absence.
#[derive(Debug)]
pub enum AppLookup {
    /// Exactly one app with the requested name exists.
    Found(AppInstance),
    /// No app with the requested name exists in the project.
    NotFound,
    /// The lookup itself failed.
    Failed(PlatformError),
}

impl AppLookup {
    /// Classify the apps a name query returned.
    ///
    /// More than one match means the one-app-per-name invariant is already
    /// broken remotely; that is reported as a failure.
    #[must_use]
    pub fn from_matches(name: &str, mut apps: Vec<AppInstance>) -> Self {
        match apps.len() {
            0 => Self::NotFound,
            1 => Self::Found(apps.remove(0)),
            count => Self::Failed(PlatformError::Ambiguous {
                name: name.to_string(),
                count,
            }),
        }
    }
}

/// What an install run did to the project.
#[derive(Debug, Clone)]
pub enum ReconcileOutcome {
    /// A new app was created for the published package.
    Installed {
        app: AppInstance,
        dpk: PackageDescriptor,
    },
    /// The existing app was rebound to the published version.
    Updated {
        app: AppInstance,
        dpk: PackageDescriptor,
        previous_version: String,
    },
}

impl ReconcileOutcome {
    /// The app as it exists after the run.
    #[must_use]
    pub fn app(&self) -> &AppInstance {
        match self {
            Self::Installed { app, .. } | Self::Updated { app, .. } => app,
        }
    }

    /// The package version published during the run.
    #[must_use]
    pub fn dpk(&self) -> &PackageDescriptor {
        match self {
            Self::Installed { dpk, .. } | Self::Updated { dpk, .. } => dpk,
        }
    }

    /// `"installed"` or `"updated"`.
    #[must_use]
    pub fn action(&self) -> &'static str {
        match self {
            Self::Installed { .. } => "installed",
            Self::Updated { .. } => "updated",
        }
    }
}

/// Validate and normalise a project id given on the command line.
///
/// Project ids are opaque; only blank input is rejected.
///
/// # Errors
///
/// Returns `ReconcileError::InvalidProjectId` if the id is empty or whitespace.
pub fn validate_project_id(id: &str) -> Result<&str, ReconcileError> {
    let id = id.trim();
    if id.is_empty() {
        return Err(ReconcileError::InvalidProjectId);
    }
    Ok(id)
}
