//! Error types for the Crease server application.
//!
//! This module provides specialized error types per domain (team validation,
//! contest membership, feed access, configuration, authentication), all
//! aggregated into a single [`Error`] with `thiserror` and mapped onto HTTP
//! responses via `IntoResponse`.

pub mod auth;
pub mod config;
pub mod contest;
pub mod feed;
pub mod team;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::{
    model::api::ErrorDto,
    server::error::{
        auth::AuthError, config::ConfigError, contest::ContestError, feed::FeedError,
        team::TeamError,
    },
};

/// Main error type for the Crease server application.
///
/// Aggregates all domain-specific error types and external library errors
/// into a single unified error type, with `#[from]` conversions so the `?`
/// operator works across layers. The `IntoResponse` implementation maps each
/// error to the HTTP response the API contract specifies: validation and
/// precondition failures are specific 4xx reasons, everything transient or
/// internal is a generic body that leaks no detail.
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration error (missing or invalid environment variables).
    #[error(transparent)]
    ConfigError(#[from] ConfigError),
    /// Authenticated-identity or maintenance-secret error.
    #[error(transparent)]
    AuthError(#[from] AuthError),
    /// Team composition or ownership error.
    #[error(transparent)]
    TeamError(#[from] TeamError),
    /// Contest membership precondition error.
    #[error(transparent)]
    ContestError(#[from] ContestError),
    /// Match data feed error (unreachable, timed out, malformed payload).
    #[error(transparent)]
    FeedError(#[from] FeedError),
    /// A synchronization pass was requested while another is still running.
    #[error("A synchronization pass is already running")]
    SyncInProgress,
    /// Database error (query failures, connection issues, constraint violations).
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),
    /// Cron scheduler error (job registration, scheduler startup).
    #[error(transparent)]
    SchedulerError(#[from] tokio_cron_scheduler::JobSchedulerError),
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        match self {
            Self::ConfigError(err) => err.into_response(),
            Self::AuthError(err) => err.into_response(),
            Self::TeamError(err) => err.into_response(),
            Self::ContestError(err) => err.into_response(),
            Self::FeedError(err) => err.into_response(),
            Self::SyncInProgress => (
                StatusCode::CONFLICT,
                Json(ErrorDto {
                    error: Self::SyncInProgress.to_string(),
                }),
            )
                .into_response(),
            err => InternalServerError(err).into_response(),
        }
    }
}

/// Wrapper type for converting any displayable error into a 500 Internal
/// Server Error response.
///
/// Logs the full error message for debugging, but returns a generic error
/// body to the client so internal detail never leaks.
pub struct InternalServerError<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorDto {
                error: "Internal server error".to_string(),
            }),
        )
            .into_response()
    }
}
