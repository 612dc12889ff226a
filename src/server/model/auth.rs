//! Request extractors for caller identity.
//!
//! Authentication happens upstream; the reverse proxy injects the verified
//! identity as `x-user-id` / `x-user-name` headers. Maintenance endpoints
//! are instead guarded by a shared secret in `x-maintenance-secret`.

use axum::{extract::FromRequestParts, http::request::Parts};

use crate::server::{error::auth::AuthError, model::app::AppState};

static USER_ID_HEADER: &str = "x-user-id";
static USER_NAME_HEADER: &str = "x-user-name";
static MAINTENANCE_SECRET_HEADER: &str = "x-maintenance-secret";

/// The verified caller identity, rejected with 401 when absent or malformed.
#[derive(Debug, Clone)]
pub struct AuthenticatedUser {
    pub id: i32,
    pub name: String,
}

impl<S> FromRequestParts<S> for AuthenticatedUser
where
    S: Send + Sync,
{
    type Rejection = AuthError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let id = parts
            .headers
            .get(USER_ID_HEADER)
            .and_then(|value| value.to_str().ok())
            .ok_or(AuthError::MissingIdentity)?;
        let id: i32 = id.parse().map_err(|_| AuthError::InvalidIdentity)?;

        let name = parts
            .headers
            .get(USER_NAME_HEADER)
            .and_then(|value| value.to_str().ok())
            .unwrap_or_default()
            .to_string();

        Ok(Self { id, name })
    }
}

/// Marker extractor for maintenance endpoints; the request must carry the
/// configured maintenance secret.
pub struct MaintenanceAuth;

impl FromRequestParts<AppState> for MaintenanceAuth {
    type Rejection = AuthError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let secret = parts
            .headers
            .get(MAINTENANCE_SECRET_HEADER)
            .and_then(|value| value.to_str().ok())
            .ok_or(AuthError::InvalidMaintenanceSecret)?;

        if secret != state.maintenance_secret {
            return Err(AuthError::InvalidMaintenanceSecret);
        }

        Ok(Self)
    }
}
