use sea_orm::entity::prelude::*;

/// One of the 11 selections belonging to a fantasy team. Owned entirely by
/// the parent team and deleted with it.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "team_player")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub team_id: i32,
    pub player_id: String,
    pub player_name: String,
    pub player_role: Option<String>,
    pub squad_name: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::fantasy_team::Entity",
        from = "Column::TeamId",
        to = "super::fantasy_team::Column::Id",
        on_delete = "Cascade"
    )]
    FantasyTeam,
}

impl Related<super::fantasy_team::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::FantasyTeam.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
