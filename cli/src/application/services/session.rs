//! Application service — confirm which user the configured token belongs to.

use dpk_common::UserInfo;

use crate::application::ports::{Identity, ProgressReporter};
use crate::domain::PlatformError;

/// Ask the platform who the token belongs to.
///
/// # Errors
///
/// Returns `PlatformError::Unauthorized` if the token is rejected, or any
/// other platform failure unchanged.
pub async fn check_session(
    identity: &impl Identity,
    reporter: &impl ProgressReporter,
) -> Result<UserInfo, PlatformError> {
    reporter.step("checking token...");
    let user = identity.current_user().await?;
    reporter.success(&format!("logged in as {}", user.email));
    Ok(user)
}
