use sea_orm::entity::prelude::*;

/// Raw per-player performance figures for one match, upserted as stat data
/// becomes available. Unique per (match_id, player_id).
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "player_match_stat")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub match_id: String,
    pub player_id: String,
    pub player_name: String,
    pub runs: i32,
    pub wickets: i32,
    pub catches: i32,
    pub stumpings: i32,
    pub run_outs: i32,
    #[sea_orm(column_type = "Decimal(Some((10, 2)))")]
    pub total_points: Decimal,
    pub updated_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
