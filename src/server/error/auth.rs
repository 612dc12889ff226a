use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

/// Identity and maintenance-trigger failures. Credential handling itself
/// lives upstream in the identity provider; the server only reads the
/// identity headers it injects.
#[derive(Error, Debug)]
pub enum AuthError {
    #[error("Missing authenticated user identity")]
    MissingIdentity,
    #[error("Malformed authenticated user identity")]
    InvalidIdentity,
    #[error("Invalid maintenance secret")]
    InvalidMaintenanceSecret,
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        (
            StatusCode::UNAUTHORIZED,
            Json(ErrorDto {
                error: self.to_string(),
            }),
        )
            .into_response()
    }
}
