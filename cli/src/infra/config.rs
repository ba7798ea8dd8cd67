//! Client settings loaded from `DTLPY_*` environment variables.
//!
//! A `.env` file in the working directory is read first, so the variables
//! can live next to the package manifest:
//!
//! - `DTLPY_ENV`      — `prod` (default), `rc`, `dev`, or `local`
//! - `DTLPY_TOKEN`    — bearer token (required)
//! - `DTLPY_BASE_URL` — explicit gateway URL, overrides `DTLPY_ENV`

use std::fmt;

use anyhow::{Context, Result};
use dpk_common::PlatformEnv;
use serde::Deserialize;

use crate::domain::ConfigError;

/// Environment variable prefix for all settings.
pub const ENV_PREFIX: &str = "DTLPY_";

#[derive(Debug, Default, Deserialize)]
struct RawSettings {
    env: Option<String>,
    token: Option<String>,
    base_url: Option<String>,
}

/// Resolved settings for talking to the platform.
#[derive(Clone)]
pub struct Settings {
    /// Deployment the gateway belongs to.
    pub env: PlatformEnv,
    /// Gateway base URL, no trailing slash.
    pub base_url: String,
    token: String,
}

impl fmt::Debug for Settings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Settings")
            .field("env", &self.env)
            .field("base_url", &self.base_url)
            .field("token", &"<redacted>")
            .finish()
    }
}

impl Settings {
    /// Load `.env` (if present) and read settings from the process environment.
    ///
    /// `env_override` wins over `DTLPY_ENV` but not over `DTLPY_BASE_URL`.
    ///
    /// # Errors
    ///
    /// Returns an error if `.env` exists but cannot be parsed, or if the
    /// resulting settings are invalid.
    pub fn load(env_override: Option<PlatformEnv>) -> Result<Self> {
        match dotenvy::dotenv() {
            Ok(path) => tracing::debug!(path = %path.display(), "loaded .env"),
            Err(e) if e.not_found() => {}
            Err(e) => return Err(e).context("cannot read .env"),
        }
        Self::from_vars(std::env::vars(), env_override)
    }

    /// Build settings from an explicit set of variables.
    ///
    /// # Errors
    ///
    /// Returns an error if `DTLPY_ENV` is unknown, `DTLPY_TOKEN` is missing,
    /// or `DTLPY_BASE_URL` is not an http(s) URL.
    pub fn from_vars(
        vars: impl IntoIterator<Item = (String, String)>,
        env_override: Option<PlatformEnv>,
    ) -> Result<Self> {
        let raw: RawSettings = envy::prefixed(ENV_PREFIX)
            .from_iter(vars)
            .context("cannot read DTLPY_* settings")?;

        let env = match (env_override, raw.env.as_deref()) {
            (Some(env), _) => env,
            (None, Some(name)) if !name.trim().is_empty() => name.parse::<PlatformEnv>()?,
            (None, _) => PlatformEnv::default(),
        };

        let token = raw
            .token
            .filter(|t| !t.trim().is_empty())
            .ok_or(ConfigError::MissingToken)?;

        let base_url = match raw.base_url.filter(|u| !u.trim().is_empty()) {
            Some(url) => {
                let url = url.trim();
                if !(url.starts_with("http://") || url.starts_with("https://")) {
                    return Err(ConfigError::InvalidBaseUrl(url.to_string()).into());
                }
                url.trim_end_matches('/').to_string()
            }
            None => env.gateway_url().to_string(),
        };

        Ok(Self {
            env,
            base_url,
            token: token.trim().to_string(),
        })
    }

    /// Bearer token for the `Authorization` header.
    #[must_use]
    pub fn token(&self) -> &str {
        &self.token
    }
}
