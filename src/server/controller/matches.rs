use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        matches::{MatchBoardDto, MatchDto, SquadDto, SquadPlayerDto},
    },
    server::{
        error::Error,
        feed::model::{FeedMatch, FeedSquad, MatchPhase},
        model::app::AppState,
    },
};

pub static MATCH_TAG: &str = "match";

/// The feed's current matches categorized by phase.
#[utoipa::path(
    get,
    path = "/api/matches",
    tag = MATCH_TAG,
    responses(
        (status = 200, description = "Matches grouped into live, upcoming, and completed", body = MatchBoardDto),
        (status = 503, description = "Match feed unavailable", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    )
)]
pub async fn list_matches(State(state): State<AppState>) -> Result<impl IntoResponse, Error> {
    let matches = state.feed.matches().await?;

    let mut board = MatchBoardDto {
        live: Vec::new(),
        upcoming: Vec::new(),
        completed: Vec::new(),
    };
    for feed_match in matches {
        let phase = feed_match.ms;
        let dto = match_dto(feed_match);
        match phase {
            MatchPhase::Live => board.live.push(dto),
            MatchPhase::Fixture => board.upcoming.push(dto),
            MatchPhase::Result => board.completed.push(dto),
            MatchPhase::Unknown => {}
        }
    }

    Ok((StatusCode::OK, Json(board)))
}

/// Both squads of one match, passed through from the feed.
#[utoipa::path(
    get,
    path = "/api/matches/{match_id}/squad",
    tag = MATCH_TAG,
    params(
        ("match_id" = String, Path, description = "Feed match ID")
    ),
    responses(
        (status = 200, description = "Squads for the match", body = Vec<SquadDto>),
        (status = 503, description = "Match feed unavailable", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    )
)]
pub async fn get_match_squad(
    State(state): State<AppState>,
    Path(match_id): Path<String>,
) -> Result<impl IntoResponse, Error> {
    let squads = state.feed.match_squads(&match_id).await?;
    let squads: Vec<SquadDto> = squads.into_iter().map(squad_dto).collect();

    Ok((StatusCode::OK, Json(squads)))
}

fn match_dto(feed_match: FeedMatch) -> MatchDto {
    MatchDto {
        id: feed_match.id,
        home: feed_match.t1,
        away: feed_match.t2,
        home_score: feed_match.t1s,
        away_score: feed_match.t2s,
        series: feed_match.series,
        match_type: feed_match.match_type,
        start_time: feed_match.start_time,
        status: feed_match.status,
    }
}

fn squad_dto(squad: FeedSquad) -> SquadDto {
    SquadDto {
        team_name: squad.team_name,
        players: squad
            .players
            .into_iter()
            .map(|player| SquadPlayerDto {
                id: player.id,
                name: player.name,
                role: player.role,
            })
            .collect(),
    }
}
