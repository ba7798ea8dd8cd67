//! JSON output helpers.
//!
//! Every `--json` code path prints exactly one pretty-printed object to
//! stdout: a result object on success, an error object on failure.

use anyhow::{Context, Result};
use dpk_common::UserInfo;
use serde_json::json;

use crate::domain::ReconcileOutcome;

/// Format a JSON error object.
///
/// Output (pretty-printed):
/// ```json
/// {
///   "error": true,
///   "message": "...",
///   "code": "..."
/// }
/// ```
///
/// # Errors
///
/// Returns an error if JSON serialization fails.
pub fn format_error(message: &str, code: &str) -> Result<String> {
    let obj = json!({
        "error": true,
        "message": message,
        "code": code,
    });
    serde_json::to_string_pretty(&obj).context("JSON serialization failed")
}

/// Renders results as JSON documents on stdout.
pub struct JsonRenderer;

impl JsonRenderer {
    /// Build the result object for an install run.
    #[must_use]
    pub fn outcome_value(outcome: &ReconcileOutcome) -> serde_json::Value {
        let mut obj = json!({
            "action": outcome.action(),
            "app": outcome.app(),
            "dpk": outcome.dpk(),
        });
        if let ReconcileOutcome::Updated {
            previous_version, ..
        } = outcome
        {
            obj["previousVersion"] = json!(previous_version);
        }
        obj
    }

    /// Print the result of an install run.
    ///
    /// # Errors
    ///
    /// Returns an error if JSON serialization fails.
    pub fn render_outcome(&self, outcome: &ReconcileOutcome) -> Result<()> {
        let out = serde_json::to_string_pretty(&Self::outcome_value(outcome))
            .context("JSON serialization failed")?;
        println!("{out}");
        Ok(())
    }

    /// Print the authenticated user.
    ///
    /// # Errors
    ///
    /// Returns an error if JSON serialization fails.
    pub fn render_user(&self, user: &UserInfo, env: &str) -> Result<()> {
        let out = serde_json::to_string_pretty(&json!({ "user": user, "env": env }))
            .context("JSON serialization failed")?;
        println!("{out}");
        Ok(())
    }

    /// Print the CLI version.
    pub fn render_version(&self, version: &str) {
        println!("{}", json!({ "version": version }));
    }
}
