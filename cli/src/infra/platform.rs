//! Platform infrastructure — implements the platform ports over the REST
//! gateway using `reqwest`.

use anyhow::{Context, Result, bail};
use dpk_common::{
    AppInstance, AppPage, InstallAppRequest, PackageDescriptor, PackageManifest, Project,
    UpdateAppRequest, UserInfo,
};
use reqwest::header::{AUTHORIZATION, HeaderMap, HeaderValue};
use reqwest::{RequestBuilder, StatusCode, Url};
use serde::de::DeserializeOwned;

use crate::application::ports::{AppCatalog, Identity, PackageRegistry, ProjectDirectory};
use crate::domain::{AppLookup, PlatformError};
use crate::infra::config::Settings;

/// Longest error body echoed back to the user.
const MAX_ERROR_BODY: usize = 300;

/// Production platform client. One instance per run; cheap to clone.
#[derive(Clone)]
pub struct HttpPlatform {
    client: reqwest::Client,
    base_url: Url,
}

impl HttpPlatform {
    /// Build a client for the gateway and token in `settings`.
    ///
    /// # Errors
    ///
    /// Returns an error if the token is not a valid header value or the
    /// HTTP client cannot be built.
    pub fn new(settings: &Settings) -> Result<Self> {
        Self::with_token(&settings.base_url, settings.token())
    }

    /// Build a client for an explicit gateway URL and token.
    ///
    /// # Errors
    ///
    /// Returns an error if `base_url` is not an http(s) URL, the token is not
    /// a valid header value, or the HTTP client cannot be built.
    pub fn with_token(base_url: &str, token: &str) -> Result<Self> {
        let base_url = Url::parse(base_url)
            .with_context(|| format!("invalid gateway URL '{base_url}'"))?;
        if base_url.cannot_be_a_base() || !matches!(base_url.scheme(), "http" | "https") {
            bail!("invalid gateway URL '{base_url}': must be an http(s) URL");
        }

        let mut auth = HeaderValue::from_str(&format!("Bearer {token}"))
            .context("DTLPY_TOKEN contains characters not allowed in a header")?;
        auth.set_sensitive(true);
        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, auth);

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .user_agent(concat!("dpkctl/", env!("CARGO_PKG_VERSION")))
            .build()
            .context("failed to build HTTP client")?;

        Ok(Self { client, base_url })
    }

    /// Gateway URL with `segments` appended. Each segment is percent-encoded
    /// whole, so an id can never add path, query or fragment parts.
    fn endpoint(&self, segments: &[&str]) -> Url {
        let mut url = self.base_url.clone();
        // `with_token` only accepts base URLs, which always have segments.
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        url
    }

    /// Send `req` and decode a JSON body, mapping failures to `PlatformError`.
    ///
    /// `resource`/`id` name the thing being fetched so a 404 can say what was
    /// missing.
    async fn send<T: DeserializeOwned>(
        &self,
        req: RequestBuilder,
        resource: &'static str,
        id: &str,
    ) -> Result<T, PlatformError> {
        let resp = req
            .send()
            .await
            .map_err(|e| PlatformError::Transport(e.to_string()))?;
        let status = resp.status();
        tracing::debug!(%status, resource, id, "platform response");

        if status.is_success() {
            return resp
                .json::<T>()
                .await
                .map_err(|e| PlatformError::Decode(e.to_string()));
        }

        let body = resp.text().await.unwrap_or_default();
        Err(classify_failure(status, &body, resource, id))
    }
}

/// Map a non-2xx response to a `PlatformError`.
fn classify_failure(
    status: StatusCode,
    body: &str,
    resource: &'static str,
    id: &str,
) -> PlatformError {
    match status {
        StatusCode::NOT_FOUND => PlatformError::NotFound {
            resource,
            id: id.to_string(),
        },
        StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => PlatformError::Unauthorized {
            status: status.as_u16(),
        },
        _ => PlatformError::Api {
            status: status.as_u16(),
            message: error_message(body),
        },
    }
}

/// Pull a readable message out of an error body.
///
/// The gateway answers with `{"message": ...}` or `{"error": ...}`; anything
/// else is echoed, truncated.
fn error_message(body: &str) -> String {
    if let Ok(value) = serde_json::from_str::<serde_json::Value>(body) {
        for key in ["message", "error"] {
            if let Some(msg) = value.get(key).and_then(serde_json::Value::as_str) {
                return msg.to_string();
            }
        }
    }
    let body = body.trim();
    if body.is_empty() {
        return "empty response body".to_string();
    }
    match body.char_indices().nth(MAX_ERROR_BODY) {
        Some((cut, _)) => format!("{}…", &body[..cut]),
        None => body.to_string(),
    }
}

impl ProjectDirectory for HttpPlatform {
    async fn resolve_project(&self, project_id: &str) -> Result<Project, PlatformError> {
        let req = self.client.get(self.endpoint(&["projects", project_id]));
        self.send(req, "project", project_id).await
    }
}

impl PackageRegistry for HttpPlatform {
    async fn publish_package(
        &self,
        project: &Project,
        manifest: &PackageManifest,
    ) -> Result<PackageDescriptor, PlatformError> {
        let mut body =
            serde_json::to_value(manifest).map_err(|e| PlatformError::Decode(e.to_string()))?;
        if let Some(obj) = body.as_object_mut() {
            obj.insert(
                "context".to_string(),
                serde_json::json!({ "project": project.id }),
            );
        }
        let req = self.client.post(self.endpoint(&["app-registry"])).json(&body);
        self.send(req, "package", &manifest.name).await
    }
}

impl AppCatalog for HttpPlatform {
    async fn find_app_by_name(&self, project: &Project, name: &str) -> AppLookup {
        let req = self
            .client
            .get(self.endpoint(&["apps"]))
            .query(&[("projectId", project.id.as_str()), ("name", name)]);
        match self.send::<AppPage>(req, "app", name).await {
            // The query endpoint may match loosely; only exact names count.
            Ok(page) => {
                let exact = page.items.into_iter().filter(|a| a.name == name).collect();
                AppLookup::from_matches(name, exact)
            }
            Err(e) => AppLookup::Failed(e),
        }
    }

    async fn update_app(
        &self,
        app: &AppInstance,
        dpk_version: &str,
    ) -> Result<AppInstance, PlatformError> {
        let req = self
            .client
            .patch(self.endpoint(&["apps", app.id.as_str()]))
            .json(&UpdateAppRequest { dpk_version });
        self.send(req, "app", &app.id).await
    }

    async fn install_app(
        &self,
        project: &Project,
        dpk: &PackageDescriptor,
        name: &str,
    ) -> Result<AppInstance, PlatformError> {
        let req = self.client.post(self.endpoint(&["apps"])).json(&InstallAppRequest {
            name,
            project_id: &project.id,
            dpk_name: &dpk.name,
            dpk_version: &dpk.version,
        });
        self.send(req, "package", &dpk.name).await
    }
}

impl Identity for HttpPlatform {
    async fn current_user(&self) -> Result<UserInfo, PlatformError> {
        let req = self.client.get(self.endpoint(&["users", "me"]));
        self.send(req, "user", "me").await
    }
}
