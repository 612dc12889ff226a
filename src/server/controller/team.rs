use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{ErrorDto, MessageDto},
        team::{CreateTeamDto, TeamDetailDto, TeamDto, TeamPlayerDto},
    },
    server::{
        error::Error,
        model::{app::AppState, auth::AuthenticatedUser},
        service::team::TeamService,
    },
};

pub static TEAM_TAG: &str = "team";

/// Create a fantasy team for a match.
#[utoipa::path(
    post,
    path = "/api/teams",
    tag = TEAM_TAG,
    request_body = CreateTeamDto,
    responses(
        (status = 201, description = "Team created", body = TeamDto),
        (status = 400, description = "Team composition is invalid", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    )
)]
pub async fn create_team(
    State(state): State<AppState>,
    user: AuthenticatedUser,
    Json(draft): Json<CreateTeamDto>,
) -> Result<impl IntoResponse, Error> {
    let team = TeamService::new(&state.db)
        .create_team(user.id, &draft)
        .await?;

    Ok((StatusCode::CREATED, Json(TeamDto::from(team))))
}

/// List the caller's teams, newest first.
#[utoipa::path(
    get,
    path = "/api/teams",
    tag = TEAM_TAG,
    responses(
        (status = 200, description = "Teams owned by the caller", body = Vec<TeamDto>),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    )
)]
pub async fn my_teams(
    State(state): State<AppState>,
    user: AuthenticatedUser,
) -> Result<impl IntoResponse, Error> {
    let teams = TeamService::new(&state.db).user_teams(user.id).await?;
    let teams: Vec<TeamDto> = teams.into_iter().map(TeamDto::from).collect();

    Ok((StatusCode::OK, Json(teams)))
}

/// Fetch one of the caller's teams with its players.
#[utoipa::path(
    get,
    path = "/api/teams/{team_id}",
    tag = TEAM_TAG,
    params(
        ("team_id" = i32, Path, description = "Team ID")
    ),
    responses(
        (status = 200, description = "Team with its player selections", body = TeamDetailDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Team belongs to another user", body = ErrorDto),
        (status = 404, description = "Team not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    )
)]
pub async fn get_team(
    State(state): State<AppState>,
    user: AuthenticatedUser,
    Path(team_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let (team, players) = TeamService::new(&state.db)
        .get_team_detail(user.id, team_id)
        .await?;

    let detail = TeamDetailDto {
        team: TeamDto::from(team),
        players: players.into_iter().map(TeamPlayerDto::from).collect(),
    };

    Ok((StatusCode::OK, Json(detail)))
}

/// Delete one of the caller's teams along with its players.
#[utoipa::path(
    delete,
    path = "/api/teams/{team_id}",
    tag = TEAM_TAG,
    params(
        ("team_id" = i32, Path, description = "Team ID")
    ),
    responses(
        (status = 200, description = "Team deleted", body = MessageDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Team belongs to another user", body = ErrorDto),
        (status = 404, description = "Team not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    )
)]
pub async fn delete_team(
    State(state): State<AppState>,
    user: AuthenticatedUser,
    Path(team_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    TeamService::new(&state.db)
        .delete_team(user.id, team_id)
        .await?;

    Ok((
        StatusCode::OK,
        Json(MessageDto {
            message: "Team deleted".to_string(),
        }),
    ))
}
