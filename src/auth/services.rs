use tracing::{error, info, warn};

use crate::auth::{
    dto::{LoginRequest, LoginResult},
    error::AuthError,
    repo::CredentialStore,
};

/// Checks a username/password pair against the store.
///
/// A mismatch is a normal `Rejected` result; only store failures are errors,
/// so an outage is never reported to the caller as bad credentials.
pub async fn login(
    store: &dyn CredentialStore,
    request: &LoginRequest,
) -> Result<LoginResult, AuthError> {
    match store
        .find_by_credentials(&request.username, &request.password)
        .await
    {
        Ok(Some(user)) => {
            info!(user_id = user.id, username = %user.username, "user logged in");
            Ok(LoginResult::authenticated(user.id, user.username))
        }
        Ok(None) => {
            warn!(username = %request.username, "login rejected");
            Ok(LoginResult::rejected())
        }
        Err(e) => {
            error!(error = %format!("{e:#}"), "credential lookup failed");
            Err(AuthError::Infrastructure(e))
        }
    }
}
