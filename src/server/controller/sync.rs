//! Maintenance endpoints, guarded by the shared maintenance secret.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{ErrorDto, MessageDto},
        stat::PlayerStatBatchDto,
    },
    server::{
        error::Error,
        model::{app::AppState, auth::MaintenanceAuth, sync::SyncReport},
        service::{scoring::ScoringService, sync::SyncService},
    },
};

pub static SYNC_TAG: &str = "sync";

/// Run one synchronization pass now instead of waiting for the cron job.
#[utoipa::path(
    post,
    path = "/api/sync",
    tag = SYNC_TAG,
    responses(
        (status = 200, description = "Pass summary", body = SyncReport),
        (status = 401, description = "Missing or invalid maintenance secret", body = ErrorDto),
        (status = 409, description = "A pass is already running", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    )
)]
pub async fn run_sync_pass(
    State(state): State<AppState>,
    _auth: MaintenanceAuth,
) -> Result<impl IntoResponse, Error> {
    let report = SyncService::new(&state.db, &state.feed)
        .run_guarded(&state.sync_guard)
        .await?;

    Ok((StatusCode::OK, Json(report)))
}

/// Re-run scoring and ranking for one contest, e.g. after a failed
/// settlement or a late stats correction.
#[utoipa::path(
    post,
    path = "/api/sync/contests/{contest_id}/settle",
    tag = SYNC_TAG,
    params(
        ("contest_id" = i32, Path, description = "Contest ID")
    ),
    responses(
        (status = 200, description = "Settlement summary", body = MessageDto),
        (status = 401, description = "Missing or invalid maintenance secret", body = ErrorDto),
        (status = 404, description = "Contest not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    )
)]
pub async fn settle_contest(
    State(state): State<AppState>,
    _auth: MaintenanceAuth,
    Path(contest_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let scored = ScoringService::new(&state.db).settle_contest(contest_id).await?;

    Ok((
        StatusCode::OK,
        Json(MessageDto {
            message: format!("Settled {scored} entries"),
        }),
    ))
}

/// Ingest a batch of raw player stat lines; existing lines for the same
/// player and match are overwritten.
#[utoipa::path(
    post,
    path = "/api/stats",
    tag = SYNC_TAG,
    request_body = PlayerStatBatchDto,
    responses(
        (status = 200, description = "Ingestion summary", body = MessageDto),
        (status = 401, description = "Missing or invalid maintenance secret", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    )
)]
pub async fn ingest_stats(
    State(state): State<AppState>,
    _auth: MaintenanceAuth,
    Json(batch): Json<PlayerStatBatchDto>,
) -> Result<impl IntoResponse, Error> {
    let ingested = ScoringService::new(&state.db)
        .ingest_stats(&batch.stats)
        .await?;

    Ok((
        StatusCode::OK,
        Json(MessageDto {
            message: format!("Ingested {ingested} stat lines"),
        }),
    ))
}
