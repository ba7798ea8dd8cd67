use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Platform deployment a client talks to.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum PlatformEnv {
    #[default]
    Prod,
    Rc,
    Dev,
    Local,
}

/// Returned when an environment name does not match any deployment.
#[derive(Debug, Error)]
#[error("unknown platform environment '{0}' (expected one of: prod, rc, dev, local)")]
pub struct UnknownEnv(pub String);

impl PlatformEnv {
    /// Gateway base URL for this deployment, without a trailing slash.
    #[must_use]
    pub fn gateway_url(self) -> &'static str {
        match self {
            Self::Prod => "https://gate.dataloop.ai/api/v1",
            Self::Rc => "https://rc-gate.dataloop.ai/api/v1",
            Self::Dev => "https://dev-gate.dataloop.ai/api/v1",
            Self::Local => "https://localhost:8443/api/v1",
        }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Prod => "prod",
            Self::Rc => "rc",
            Self::Dev => "dev",
            Self::Local => "local",
        }
    }
}

impl fmt::Display for PlatformEnv {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PlatformEnv {
    type Err = UnknownEnv;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "prod" | "production" => Ok(Self::Prod),
            "rc" => Ok(Self::Rc),
            "dev" => Ok(Self::Dev),
            "local" => Ok(Self::Local),
            _ => Err(UnknownEnv(s.to_string())),
        }
    }
}
