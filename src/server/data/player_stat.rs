use chrono::Utc;
use rust_decimal::Decimal;
use sea_orm::{
    sea_query::OnConflict, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder,
};

use crate::model::stat::PlayerStatDto;

pub struct PlayerStatRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> PlayerStatRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts or replaces the stat line for one player in one match, keyed
    /// on the (match_id, player_id) unique index. Re-ingesting overwrites the
    /// previous figures rather than accumulating.
    pub async fn upsert(
        &self,
        stat: &PlayerStatDto,
        total_points: Decimal,
    ) -> Result<entity::player_match_stat::Model, DbErr> {
        let row = entity::player_match_stat::ActiveModel {
            match_id: ActiveValue::Set(stat.match_id.clone()),
            player_id: ActiveValue::Set(stat.player_id.clone()),
            player_name: ActiveValue::Set(stat.player_name.clone()),
            runs: ActiveValue::Set(stat.runs),
            wickets: ActiveValue::Set(stat.wickets),
            catches: ActiveValue::Set(stat.catches),
            stumpings: ActiveValue::Set(stat.stumpings),
            run_outs: ActiveValue::Set(stat.run_outs),
            total_points: ActiveValue::Set(total_points),
            updated_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        };

        entity::prelude::PlayerMatchStat::insert(row)
            .on_conflict(
                OnConflict::columns([
                    entity::player_match_stat::Column::MatchId,
                    entity::player_match_stat::Column::PlayerId,
                ])
                .update_columns([
                    entity::player_match_stat::Column::PlayerName,
                    entity::player_match_stat::Column::Runs,
                    entity::player_match_stat::Column::Wickets,
                    entity::player_match_stat::Column::Catches,
                    entity::player_match_stat::Column::Stumpings,
                    entity::player_match_stat::Column::RunOuts,
                    entity::player_match_stat::Column::TotalPoints,
                    entity::player_match_stat::Column::UpdatedAt,
                ])
                .to_owned(),
            )
            .exec(self.db)
            .await?;

        self.get(&stat.match_id, &stat.player_id)
            .await?
            .ok_or_else(|| DbErr::RecordNotFound("player_match_stat after upsert".to_string()))
    }

    pub async fn get(
        &self,
        match_id: &str,
        player_id: &str,
    ) -> Result<Option<entity::player_match_stat::Model>, DbErr> {
        entity::prelude::PlayerMatchStat::find()
            .filter(entity::player_match_stat::Column::MatchId.eq(match_id))
            .filter(entity::player_match_stat::Column::PlayerId.eq(player_id))
            .one(self.db)
            .await
    }

    pub async fn get_by_match(
        &self,
        match_id: &str,
    ) -> Result<Vec<entity::player_match_stat::Model>, DbErr> {
        entity::prelude::PlayerMatchStat::find()
            .filter(entity::player_match_stat::Column::MatchId.eq(match_id))
            .order_by_asc(entity::player_match_stat::Column::PlayerId)
            .all(self.db)
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crease_test_utils::prelude::*;

    fn stat(player_id: &str, runs: i32) -> PlayerStatDto {
        PlayerStatDto {
            match_id: "match-1".to_string(),
            player_id: player_id.to_string(),
            player_name: format!("Player {player_id}"),
            runs,
            wickets: 0,
            catches: 1,
            stumpings: 0,
            run_outs: 0,
        }
    }

    mod upsert_tests {
        use super::*;

        /// Expect a fresh stat line to be inserted with its computed points.
        #[tokio::test]
        async fn inserts_new_stat_line() {
            let setup = TestBuilder::new()
                .with_contest_tables()
                .build()
                .await
                .unwrap();
            let repo = PlayerStatRepository::new(&setup.db);

            let row = repo.upsert(&stat("p1", 42), Decimal::from(50)).await.unwrap();

            assert_eq!(row.runs, 42);
            assert_eq!(row.total_points, Decimal::from(50));
        }

        /// Expect re-ingesting the same player to overwrite, not duplicate.
        #[tokio::test]
        async fn overwrites_existing_stat_line() {
            let setup = TestBuilder::new()
                .with_contest_tables()
                .build()
                .await
                .unwrap();
            let repo = PlayerStatRepository::new(&setup.db);
            repo.upsert(&stat("p1", 42), Decimal::from(50)).await.unwrap();

            let row = repo.upsert(&stat("p1", 90), Decimal::from(98)).await.unwrap();

            assert_eq!(row.runs, 90);
            let all = repo.get_by_match("match-1").await.unwrap();
            assert_eq!(all.len(), 1);
        }
    }
}
