use axum::http::HeaderMap;
use tracing::{debug, error};

use backend_application::AppState;
use backend_domain::AuthenticatedUser;

use crate::error::HttpError;

/// Resolves the caller through the configured authenticator. Anything short
/// of a verified token is a 401.
pub async fn authenticate(
    state: &AppState,
    headers: &HeaderMap,
) -> Result<AuthenticatedUser, HttpError> {
    let Some(token) = extract_bearer(headers) else {
        debug!("request without bearer token");
        return Err(HttpError::Unauthorized);
    };
    match state.authenticator.authenticate(&token).await {
        Ok(Some(user)) => Ok(user),
        Ok(None) => Err(HttpError::Unauthorized),
        Err(err) => {
            error!("authenticator failed: {}", err);
            Err(HttpError::Internal(err.to_string()))
        }
    }
}

fn extract_bearer(headers: &HeaderMap) -> Option<String> {
    let value = headers.get("Authorization")?.to_str().ok()?.trim();
    let prefix = "Bearer ";
    if !value.starts_with(prefix) {
        return None;
    }
    let token = value[prefix.len()..].trim();
    if token.is_empty() {
        return None;
    }
    Some(token.to_string())
}
