use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

/// Team composition and ownership errors. Validation failures are surfaced
/// to the caller verbatim and never retried automatically.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum TeamError {
    #[error("A team must select exactly 11 players, got {0}")]
    WrongPlayerCount(usize),
    #[error("A team cannot select the same player more than once")]
    DuplicatePlayer,
    #[error("Captain must be one of the selected players")]
    CaptainNotInTeam,
    #[error("Vice-captain must be one of the selected players")]
    ViceCaptainNotInTeam,
    #[error("Captain and vice-captain must be different players")]
    CaptainIsViceCaptain,
    #[error("Team not found")]
    NotFound,
    #[error("Not authorized to access this team")]
    NotOwner,
}

impl IntoResponse for TeamError {
    fn into_response(self) -> Response {
        let status = match self {
            TeamError::NotFound => StatusCode::NOT_FOUND,
            TeamError::NotOwner => StatusCode::FORBIDDEN,
            _ => StatusCode::BAD_REQUEST,
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
