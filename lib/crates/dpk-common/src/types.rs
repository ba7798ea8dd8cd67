use serde::{Deserialize, Serialize};

/// A platform project. Looked up by id, never mutated by the installer.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Project {
    pub id: String,
    pub name: String,
}

/// A published package ("DPK") as returned by the app registry.
///
/// `version` is assigned by the registry on every publish.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct PackageDescriptor {
    pub id: String,
    pub name: String,
    /// Stable lookup key for the installed app.
    pub display_name: String,
    pub version: String,
}

/// An installed app: a named binding of a package version inside a project.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct AppInstance {
    pub id: String,
    pub name: String,
    pub project_id: String,
    pub dpk_name: String,
    pub dpk_version: String,
}

/// One page of an app query.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppPage {
    #[serde(default)]
    pub items: Vec<AppInstance>,
}

/// The authenticated user behind a token.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct UserInfo {
    pub id: String,
    pub email: String,
}

/// Body of `POST /apps`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InstallAppRequest<'a> {
    pub name: &'a str,
    pub project_id: &'a str,
    pub dpk_name: &'a str,
    pub dpk_version: &'a str,
}

/// Body of `PATCH /apps/{id}`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateAppRequest<'a> {
    pub dpk_version: &'a str,
}
