//! Package manifest (`dataloop.json`) — the local source a publish sends to
//! the app registry.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use thiserror::Error;

/// File name the installer looks for when no manifest path is given.
pub const MANIFEST_FILE: &str = "dataloop.json";

/// Errors raised while parsing or validating a package manifest.
#[derive(Debug, Error)]
pub enum ManifestError {
    #[error("invalid manifest JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("manifest field '{0}' must not be empty")]
    EmptyField(&'static str),
}

/// Package manifest as written by the package author.
///
/// Only the identifying fields are typed; everything else (components,
/// codebase, attributes, ...) is carried through untouched so the registry
/// sees exactly what the author wrote.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PackageManifest {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scope: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl PackageManifest {
    /// Parse and validate a manifest from its JSON text.
    pub fn from_json(text: &str) -> Result<Self, ManifestError> {
        let manifest: Self = serde_json::from_str(text)?;
        manifest.validate()?;
        Ok(manifest)
    }

    /// Reject manifests the registry would not accept.
    pub fn validate(&self) -> Result<(), ManifestError> {
        if self.name.trim().is_empty() {
            return Err(ManifestError::EmptyField("name"));
        }
        if self
            .display_name
            .as_deref()
            .is_some_and(|d| d.trim().is_empty())
        {
            return Err(ManifestError::EmptyField("displayName"));
        }
        Ok(())
    }

    /// Name the installed app will carry. Falls back to `name`.
    #[must_use]
    pub fn display_name(&self) -> &str {
        self.display_name.as_deref().unwrap_or(&self.name)
    }
}
