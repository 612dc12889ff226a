use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// One player selection submitted as part of a team.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct TeamPlayerDto {
    pub player_id: String,
    pub player_name: String,
    pub player_role: Option<String>,
    pub squad_name: Option<String>,
}

/// Request body for creating a fantasy team: exactly 11 players plus
/// captain and vice-captain picks from among them.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CreateTeamDto {
    pub match_id: String,
    pub name: String,
    pub captain_id: String,
    pub vice_captain_id: String,
    pub players: Vec<TeamPlayerDto>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct TeamDto {
    pub id: i32,
    pub user_id: i32,
    pub match_id: String,
    pub name: String,
    pub captain_id: String,
    pub vice_captain_id: String,
    pub created_at: NaiveDateTime,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct TeamDetailDto {
    pub team: TeamDto,
    pub players: Vec<TeamPlayerDto>,
}

impl From<entity::fantasy_team::Model> for TeamDto {
    fn from(team: entity::fantasy_team::Model) -> Self {
        Self {
            id: team.id,
            user_id: team.user_id,
            match_id: team.match_id,
            name: team.name,
            captain_id: team.captain_id,
            vice_captain_id: team.vice_captain_id,
            created_at: team.created_at,
        }
    }
}

impl From<entity::team_player::Model> for TeamPlayerDto {
    fn from(player: entity::team_player::Model) -> Self {
        Self {
            player_id: player.player_id,
            player_name: player.player_name,
            player_role: player.player_role,
            squad_name: player.squad_name,
        }
    }
}
