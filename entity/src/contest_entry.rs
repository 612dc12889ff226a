use sea_orm::entity::prelude::*;

/// One user's participation in one contest. The (contest_id, user_id)
/// pair is unique at the storage level.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "contest_entry")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub contest_id: i32,
    pub user_id: i32,
    pub team_id: i32,
    #[sea_orm(column_type = "Decimal(Some((10, 2)))")]
    pub points: Decimal,
    pub rank_position: Option<i32>,
    pub created_at: DateTime,
    pub updated_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::contest::Entity",
        from = "Column::ContestId",
        to = "super::contest::Column::Id"
    )]
    Contest,
    #[sea_orm(
        belongs_to = "super::fantasy_team::Entity",
        from = "Column::TeamId",
        to = "super::fantasy_team::Column::Id"
    )]
    FantasyTeam,
}

impl Related<super::contest::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Contest.def()
    }
}

impl Related<super::fantasy_team::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::FantasyTeam.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
