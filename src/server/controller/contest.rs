use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Deserialize;
use utoipa::IntoParams;

use crate::{
    model::{
        api::ErrorDto,
        contest::{ContestDto, CreateContestDto, JoinContestDto, JoinedDto, LeaderboardEntryDto},
    },
    server::{
        error::Error,
        model::{app::AppState, auth::AuthenticatedUser},
        service::contest::ContestService,
    },
};

pub static CONTEST_TAG: &str = "contest";

#[derive(Deserialize, IntoParams)]
pub struct ContestFilterParams {
    /// Restrict the listing to contests of one match.
    pub match_id: Option<String>,
}

/// List contests, optionally filtered by match.
#[utoipa::path(
    get,
    path = "/api/contests",
    tag = CONTEST_TAG,
    params(ContestFilterParams),
    responses(
        (status = 200, description = "Contests, newest first", body = Vec<ContestDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    )
)]
pub async fn list_contests(
    State(state): State<AppState>,
    Query(params): Query<ContestFilterParams>,
) -> Result<impl IntoResponse, Error> {
    let contests = ContestService::new(&state.db)
        .list_contests(params.match_id.as_deref())
        .await?;
    let contests: Vec<ContestDto> = contests.into_iter().map(ContestDto::from).collect();

    Ok((StatusCode::OK, Json(contests)))
}

/// Create a contest for a match.
#[utoipa::path(
    post,
    path = "/api/contests",
    tag = CONTEST_TAG,
    request_body = CreateContestDto,
    responses(
        (status = 201, description = "Contest created", body = ContestDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    )
)]
pub async fn create_contest(
    State(state): State<AppState>,
    _user: AuthenticatedUser,
    Json(contest): Json<CreateContestDto>,
) -> Result<impl IntoResponse, Error> {
    let contest = ContestService::new(&state.db).create_contest(&contest).await?;

    Ok((StatusCode::CREATED, Json(ContestDto::from(contest))))
}

/// Fetch one contest.
#[utoipa::path(
    get,
    path = "/api/contests/{contest_id}",
    tag = CONTEST_TAG,
    params(
        ("contest_id" = i32, Path, description = "Contest ID")
    ),
    responses(
        (status = 200, description = "Contest", body = ContestDto),
        (status = 404, description = "Contest not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    )
)]
pub async fn get_contest(
    State(state): State<AppState>,
    Path(contest_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let contest = ContestService::new(&state.db).get_contest(contest_id).await?;

    Ok((StatusCode::OK, Json(ContestDto::from(contest))))
}

/// Join a contest with one of the caller's teams.
#[utoipa::path(
    post,
    path = "/api/contests/{contest_id}/join",
    tag = CONTEST_TAG,
    params(
        ("contest_id" = i32, Path, description = "Contest ID")
    ),
    request_body = JoinContestDto,
    responses(
        (status = 201, description = "Entry created", body = JoinedDto),
        (status = 400, description = "Team is for another match", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Team belongs to another user", body = ErrorDto),
        (status = 404, description = "Contest or team not found", body = ErrorDto),
        (status = 409, description = "Contest full, ended, or already joined", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    )
)]
pub async fn join_contest(
    State(state): State<AppState>,
    user: AuthenticatedUser,
    Path(contest_id): Path<i32>,
    Json(join): Json<JoinContestDto>,
) -> Result<impl IntoResponse, Error> {
    ContestService::new(&state.db)
        .join_contest(user.id, contest_id, join.team_id)
        .await?;

    Ok((StatusCode::CREATED, Json(JoinedDto { joined: true })))
}

/// Whether the caller already holds an entry in a contest.
#[utoipa::path(
    get,
    path = "/api/contests/{contest_id}/joined",
    tag = CONTEST_TAG,
    params(
        ("contest_id" = i32, Path, description = "Contest ID")
    ),
    responses(
        (status = 200, description = "Membership flag", body = JoinedDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    )
)]
pub async fn has_joined(
    State(state): State<AppState>,
    user: AuthenticatedUser,
    Path(contest_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let joined = ContestService::new(&state.db)
        .has_joined(user.id, contest_id)
        .await?;

    Ok((StatusCode::OK, Json(JoinedDto { joined })))
}

/// The contest leaderboard in scoring order.
#[utoipa::path(
    get,
    path = "/api/contests/{contest_id}/leaderboard",
    tag = CONTEST_TAG,
    params(
        ("contest_id" = i32, Path, description = "Contest ID")
    ),
    responses(
        (status = 200, description = "Leaderboard rows, best first", body = Vec<LeaderboardEntryDto>),
        (status = 404, description = "Contest not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    )
)]
pub async fn get_leaderboard(
    State(state): State<AppState>,
    Path(contest_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let rows = ContestService::new(&state.db).leaderboard(contest_id).await?;

    Ok((StatusCode::OK, Json(rows)))
}
