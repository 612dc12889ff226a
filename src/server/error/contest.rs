use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

/// Contest membership precondition errors, surfaced to the caller as
/// distinct named reasons and never retried automatically.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ContestError {
    #[error("Contest not found")]
    NotFound,
    #[error("Contest is full")]
    Full,
    #[error("Contest has ended")]
    Ended,
    #[error("You have already joined this contest")]
    AlreadyJoined,
    #[error("Team not found")]
    TeamNotFound,
    #[error("Not authorized to use this team")]
    TeamNotOwned,
    #[error("Team is not for this contest's match")]
    TeamMatchMismatch,
}

impl IntoResponse for ContestError {
    fn into_response(self) -> Response {
        let status = match self {
            ContestError::NotFound | ContestError::TeamNotFound => StatusCode::NOT_FOUND,
            ContestError::Full | ContestError::Ended | ContestError::AlreadyJoined => {
                StatusCode::CONFLICT
            }
            ContestError::TeamNotOwned => StatusCode::FORBIDDEN,
            ContestError::TeamMatchMismatch => StatusCode::BAD_REQUEST,
        };

        (
            status,
            Json(ErrorDto {
                error: self.to_string(),
            }),
        )
            .into_response()
    }
}
