//! Reads the package manifest from disk.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use dpk_common::PackageManifest;
use dpk_common::manifest::MANIFEST_FILE;

use crate::application::ports::PackageSource;

/// Resolve the manifest path: the explicit one, or `dataloop.json` in the
/// working directory.
#[must_use]
pub fn manifest_path(explicit: Option<&Path>) -> PathBuf {
    explicit.map_or_else(|| PathBuf::from(MANIFEST_FILE), Path::to_path_buf)
}

/// Read and validate the package manifest at `path`.
///
/// # Errors
///
/// Returns an error if the file cannot be read, is not valid JSON, or lacks
/// a package name.
pub fn load_manifest(path: &Path) -> Result<PackageManifest> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("cannot read package manifest {}", path.display()))?;
    let manifest = PackageManifest::from_json(&content)
        .with_context(|| format!("invalid package manifest {}", path.display()))?;
    tracing::debug!(path = %path.display(), name = %manifest.name, "manifest loaded");
    Ok(manifest)
}

/// Manifest file on disk, read only when an install run asks for it.
#[derive(Debug, Clone)]
pub struct ManifestFile {
    path: PathBuf,
}

impl ManifestFile {
    /// The explicit path, or `dataloop.json` in the working directory.
    #[must_use]
    pub fn new(explicit: Option<&Path>) -> Self {
        Self {
            path: manifest_path(explicit),
        }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl PackageSource for ManifestFile {
    fn load_manifest(&self) -> Result<PackageManifest> {
        load_manifest(&self.path)
    }
}
