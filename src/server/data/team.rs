use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    ModelTrait, QueryFilter, QueryOrder, TransactionTrait,
};

use crate::model::team::CreateTeamDto;

pub struct TeamRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> TeamRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Persists a team and its player rows in one transaction so a partially
    /// written team is never visible.
    pub async fn create(
        &self,
        user_id: i32,
        draft: &CreateTeamDto,
    ) -> Result<entity::fantasy_team::Model, DbErr> {
        let txn = self.db.begin().await?;

        let team = entity::fantasy_team::ActiveModel {
            user_id: ActiveValue::Set(user_id),
            match_id: ActiveValue::Set(draft.match_id.clone()),
            name: ActiveValue::Set(draft.name.clone()),
            captain_id: ActiveValue::Set(draft.captain_id.clone()),
            vice_captain_id: ActiveValue::Set(draft.vice_captain_id.clone()),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        };
        let team = team.insert(&txn).await?;

        for player in &draft.players {
            let player = entity::team_player::ActiveModel {
                team_id: ActiveValue::Set(team.id),
                player_id: ActiveValue::Set(player.player_id.clone()),
                player_name: ActiveValue::Set(player.player_name.clone()),
                player_role: ActiveValue::Set(player.player_role.clone()),
                squad_name: ActiveValue::Set(player.squad_name.clone()),
                ..Default::default()
            };
            player.insert(&txn).await?;
        }

        txn.commit().await?;

        Ok(team)
    }

    pub async fn get_by_id(
        &self,
        team_id: i32,
    ) -> Result<Option<entity::fantasy_team::Model>, DbErr> {
        entity::prelude::FantasyTeam::find_by_id(team_id)
            .one(self.db)
            .await
    }

    pub async fn get_players(
        &self,
        team_id: i32,
    ) -> Result<Vec<entity::team_player::Model>, DbErr> {
        entity::prelude::TeamPlayer::find()
            .filter(entity::team_player::Column::TeamId.eq(team_id))
            .order_by_asc(entity::team_player::Column::Id)
            .all(self.db)
            .await
    }

    pub async fn get_by_user(
        &self,
        user_id: i32,
    ) -> Result<Vec<entity::fantasy_team::Model>, DbErr> {
        entity::prelude::FantasyTeam::find()
            .filter(entity::fantasy_team::Column::UserId.eq(user_id))
            .order_by_desc(entity::fantasy_team::Column::CreatedAt)
            .all(self.db)
            .await
    }

    /// Deletes a team and its player rows; player rows go first so the
    /// delete also works on backends without cascading enabled.
    pub async fn delete(&self, team: entity::fantasy_team::Model) -> Result<(), DbErr> {
        let txn = self.db.begin().await?;

        entity::prelude::TeamPlayer::delete_many()
            .filter(entity::team_player::Column::TeamId.eq(team.id))
            .exec(&txn)
            .await?;
        team.delete(&txn).await?;

        txn.commit().await?;

        Ok(())
    }
}
