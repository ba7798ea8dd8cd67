//! Typed domain error enums.
//!
//! This module has zero imports from `crate::infra`, `crate::commands`,
//! `crate::application`, `tokio`, `reqwest`, `std::fs`, or `std::net`.
//! All error types implement `thiserror::Error` and convert to `anyhow::Error`
//! via the `?` operator.

use std::fmt;

use thiserror::Error;

// ── Platform errors ───────────────────────────────────────────────────────────

/// Failures reported by the remote platform, independent of transport.
#[derive(Debug, Error)]
pub enum PlatformError {
    #[error("{resource} '{id}' not found")]
    NotFound { resource: &'static str, id: String },

    #[error("token rejected by the platform (status {status}). Check DTLPY_TOKEN.")]
    Unauthorized { status: u16 },

    #[error("platform returned {status}: {message}")]
    Api { status: u16, message: String },

    #[error("cannot reach the platform: {0}")]
    Transport(String),

    #[error("unexpected platform response: {0}")]
    Decode(String),

    #[error("{count} apps named '{name}' exist in this project; remove the duplicates first")]
    Ambiguous { name: String, count: usize },
}

impl PlatformError {
    /// Returns `true` for the not-found case only.
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}

// ── Reconcile errors ──────────────────────────────────────────────────────────

/// Step of an install run, used to say where a failed run stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReconcileStep {
    ResolveProject,
    LoadManifest,
    Publish,
    Lookup,
    Update,
    Install,
}

impl fmt::Display for ReconcileStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::ResolveProject => "resolving project",
            Self::LoadManifest => "loading package manifest",
            Self::Publish => "publishing package",
            Self::Lookup => "looking up app",
            Self::Update => "updating app",
            Self::Install => "installing app",
        })
    }
}

/// Errors that end an install run.
#[derive(Debug, Error)]
pub enum ReconcileError {
    #[error("Project ID must not be empty.")]
    InvalidProjectId,

    #[error("Project with ID '{0}' not found")]
    ProjectNotFound(String),

    #[error(transparent)]
    Manifest(anyhow::Error),

    #[error("{step} failed")]
    Failed {
        step: ReconcileStep,
        #[source]
        source: PlatformError,
    },
}

impl ReconcileError {
    /// Step at which the run stopped, if it got past validation.
    #[must_use]
    pub fn step(&self) -> Option<ReconcileStep> {
        match self {
            Self::InvalidProjectId => None,
            Self::ProjectNotFound(_) => Some(ReconcileStep::ResolveProject),
            Self::Manifest(_) => Some(ReconcileStep::LoadManifest),
            Self::Failed { step, .. } => Some(*step),
        }
    }

    /// Stable machine-readable code for `--json` error output.
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            Self::InvalidProjectId => "INVALID_PROJECT_ID",
            Self::ProjectNotFound(_) => "PROJECT_NOT_FOUND",
            Self::Manifest(_) => "INVALID_MANIFEST",
            Self::Failed {
                source: PlatformError::Unauthorized { .. },
                ..
            } => "UNAUTHORIZED",
            Self::Failed { .. } => "PLATFORM_ERROR",
        }
    }
}

// ── Config errors ─────────────────────────────────────────────────────────────

/// Errors related to client settings.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("DTLPY_TOKEN is not set. Export it or add it to .env")]
    MissingToken,

    #[error("invalid DTLPY_BASE_URL '{0}': must start with http:// or https://")]
    InvalidBaseUrl(String),
}
