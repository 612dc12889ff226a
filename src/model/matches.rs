use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Match summary passed through from the external feed.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct MatchDto {
    pub id: String,
    pub home: String,
    pub away: String,
    pub home_score: Option<String>,
    pub away_score: Option<String>,
    pub series: Option<String>,
    pub match_type: Option<String>,
    pub start_time: String,
    pub status: Option<String>,
}

/// Feed matches categorized by phase, the shape match pages consume.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct MatchBoardDto {
    pub live: Vec<MatchDto>,
    pub upcoming: Vec<MatchDto>,
    pub completed: Vec<MatchDto>,
}

/// One squad member as reported by the feed.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct SquadPlayerDto {
    pub id: String,
    pub name: String,
    pub role: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct SquadDto {
    pub team_name: String,
    pub players: Vec<SquadPlayerDto>,
}
