use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

/// Match data feed failures. Recoverable during sync passes (the affected
/// match is skipped and retried next pass); surfaced generically when a
/// request-path call hits them.
#[derive(Error, Debug)]
pub enum FeedError {
    #[error("Match feed request failed: {0}")]
    RequestFailed(#[from] reqwest::Error),
    #[error("Match feed returned HTTP {0}")]
    Status(u16),
    #[error("Match feed rejected the request: {0}")]
    Api(String),
}

impl IntoResponse for FeedError {
    fn into_response(self) -> Response {
        tracing::error!("{}", self);

        (
            StatusCode::SERVICE_UNAVAILABLE,
            Json(ErrorDto {
                error: "Match data is temporarily unavailable, try again".to_string(),
            }),
        )
            .into_response()
    }
}
