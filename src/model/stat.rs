use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Raw performance figures for one player in one match, as ingested from
/// the stats maintenance endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct PlayerStatDto {
    pub match_id: String,
    pub player_id: String,
    pub player_name: String,
    #[serde(default)]
    pub runs: i32,
    #[serde(default)]
    pub wickets: i32,
    #[serde(default)]
    pub catches: i32,
    #[serde(default)]
    pub stumpings: i32,
    #[serde(default)]
    pub run_outs: i32,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct PlayerStatBatchDto {
    pub stats: Vec<PlayerStatDto>,
}
