use chrono::Utc;
use rust_decimal::Decimal;
use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr,
    EntityTrait, PaginatorTrait, QueryFilter, QueryOrder,
};

pub struct EntryRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> EntryRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a new entry at zero points. The (contest_id, user_id) unique
    /// index makes a duplicate join surface as a constraint violation.
    pub async fn create(
        &self,
        contest_id: i32,
        user_id: i32,
        team_id: i32,
    ) -> Result<entity::contest_entry::Model, DbErr> {
        let now = Utc::now().naive_utc();
        let entry = entity::contest_entry::ActiveModel {
            contest_id: ActiveValue::Set(contest_id),
            user_id: ActiveValue::Set(user_id),
            team_id: ActiveValue::Set(team_id),
            points: ActiveValue::Set(Decimal::ZERO),
            rank_position: ActiveValue::Set(None),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        };

        entry.insert(self.db).await
    }

    pub async fn has_joined(&self, contest_id: i32, user_id: i32) -> Result<bool, DbErr> {
        let count = entity::prelude::ContestEntry::find()
            .filter(entity::contest_entry::Column::ContestId.eq(contest_id))
            .filter(entity::contest_entry::Column::UserId.eq(user_id))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Entries of one contest in scoring order: points descending, then
    /// earliest join, then lowest id. This ordering is what ranking assigns
    /// positions from, so it must stay deterministic.
    pub async fn get_by_contest_scored_order(
        &self,
        contest_id: i32,
    ) -> Result<Vec<entity::contest_entry::Model>, DbErr> {
        entity::prelude::ContestEntry::find()
            .filter(entity::contest_entry::Column::ContestId.eq(contest_id))
            .order_by_desc(entity::contest_entry::Column::Points)
            .order_by_asc(entity::contest_entry::Column::CreatedAt)
            .order_by_asc(entity::contest_entry::Column::Id)
            .all(self.db)
            .await
    }

    pub async fn update_points(&self, entry_id: i32, points: Decimal) -> Result<(), DbErr> {
        entity::prelude::ContestEntry::update_many()
            .col_expr(entity::contest_entry::Column::Points, Expr::value(points))
            .col_expr(
                entity::contest_entry::Column::UpdatedAt,
                Expr::value(Utc::now().naive_utc()),
            )
            .filter(entity::contest_entry::Column::Id.eq(entry_id))
            .exec(self.db)
            .await?;

        Ok(())
    }

    pub async fn update_rank(&self, entry_id: i32, rank_position: i32) -> Result<(), DbErr> {
        entity::prelude::ContestEntry::update_many()
            .col_expr(
                entity::contest_entry::Column::RankPosition,
                Expr::value(Some(rank_position)),
            )
            .col_expr(
                entity::contest_entry::Column::UpdatedAt,
                Expr::value(Utc::now().naive_utc()),
            )
            .filter(entity::contest_entry::Column::Id.eq(entry_id))
            .exec(self.db)
            .await?;

        Ok(())
    }
}
