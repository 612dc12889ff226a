use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use entity::contest::ContestStatus;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ContestDto {
    pub id: i32,
    pub match_id: String,
    pub name: String,
    pub description: Option<String>,
    pub max_entries: i32,
    pub current_entries: i32,
    pub status: String,
}

/// Request body for explicit contest creation.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CreateContestDto {
    pub match_id: String,
    pub name: String,
    pub description: Option<String>,
    pub max_entries: i32,
}

/// Request body for joining a contest with one of the caller's teams.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct JoinContestDto {
    pub team_id: i32,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct JoinedDto {
    pub joined: bool,
}

/// One ranked row of a contest leaderboard.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct LeaderboardEntryDto {
    pub entry_id: i32,
    pub user_id: i32,
    pub team_id: i32,
    pub team_name: Option<String>,
    #[schema(value_type = String)]
    pub points: Decimal,
    pub rank_position: Option<i32>,
}

pub fn status_label(status: ContestStatus) -> &'static str {
    match status {
        ContestStatus::Upcoming => "upcoming",
        ContestStatus::Live => "live",
        ContestStatus::Completed => "completed",
    }
}

impl From<entity::contest::Model> for ContestDto {
    fn from(contest: entity::contest::Model) -> Self {
        Self {
            id: contest.id,
            match_id: contest.match_id,
            name: contest.name,
            description: contest.description,
            max_entries: contest.max_entries,
            current_entries: contest.current_entries,
            status: status_label(contest.status).to_string(),
        }
    }
}
