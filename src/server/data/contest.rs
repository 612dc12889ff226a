use chrono::Utc;
use sea_orm::{
    sea_query::{Expr, ExprTrait},
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};

use entity::contest::ContestStatus;

use crate::model::contest::CreateContestDto;

pub struct ContestRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ContestRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(
        &self,
        contest: &CreateContestDto,
    ) -> Result<entity::contest::Model, DbErr> {
        let now = Utc::now().naive_utc();
        let contest = entity::contest::ActiveModel {
            match_id: ActiveValue::Set(contest.match_id.clone()),
            name: ActiveValue::Set(contest.name.clone()),
            description: ActiveValue::Set(contest.description.clone()),
            max_entries: ActiveValue::Set(contest.max_entries),
            current_entries: ActiveValue::Set(0),
            status: ActiveValue::Set(ContestStatus::Upcoming),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        };

        contest.insert(self.db).await
    }

    pub async fn get_by_id(
        &self,
        contest_id: i32,
    ) -> Result<Option<entity::contest::Model>, DbErr> {
        entity::prelude::Contest::find_by_id(contest_id)
            .one(self.db)
            .await
    }

    /// Lists contests, optionally narrowed to one match, newest first.
    pub async fn get_all(
        &self,
        match_id: Option<&str>,
    ) -> Result<Vec<entity::contest::Model>, DbErr> {
        let mut query = entity::prelude::Contest::find();
        if let Some(match_id) = match_id {
            query = query.filter(entity::contest::Column::MatchId.eq(match_id));
        }

        query
            .order_by_desc(entity::contest::Column::CreatedAt)
            .order_by_desc(entity::contest::Column::Id)
            .all(self.db)
            .await
    }

    /// Contests that have not reached completed, the synchronizer's working set.
    pub async fn get_unfinished(&self) -> Result<Vec<entity::contest::Model>, DbErr> {
        entity::prelude::Contest::find()
            .filter(entity::contest::Column::Status.ne(ContestStatus::Completed))
            .order_by_asc(entity::contest::Column::Id)
            .all(self.db)
            .await
    }

    pub async fn exists_for_match(&self, match_id: &str) -> Result<bool, DbErr> {
        let count = entity::prelude::Contest::find()
            .filter(entity::contest::Column::MatchId.eq(match_id))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Atomically reserves one entry slot: increments `current_entries` only
    /// while it is below capacity. Returns false when the contest was full
    /// (or missing), with no change applied.
    pub async fn try_reserve_entry_slot(&self, contest_id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Contest::update_many()
            .col_expr(
                entity::contest::Column::CurrentEntries,
                Expr::col(entity::contest::Column::CurrentEntries).add(1),
            )
            .col_expr(
                entity::contest::Column::UpdatedAt,
                Expr::value(Utc::now().naive_utc()),
            )
            .filter(entity::contest::Column::Id.eq(contest_id))
            .filter(
                Expr::col(entity::contest::Column::CurrentEntries)
                    .lt(Expr::col(entity::contest::Column::MaxEntries)),
            )
            .exec(self.db)
            .await?;

        Ok(result.rows_affected == 1)
    }

    /// Returns a reserved slot after a failed entry insert.
    pub async fn release_entry_slot(&self, contest_id: i32) -> Result<(), DbErr> {
        entity::prelude::Contest::update_many()
            .col_expr(
                entity::contest::Column::CurrentEntries,
                Expr::col(entity::contest::Column::CurrentEntries).sub(1),
            )
            .col_expr(
                entity::contest::Column::UpdatedAt,
                Expr::value(Utc::now().naive_utc()),
            )
            .filter(entity::contest::Column::Id.eq(contest_id))
            .filter(Expr::col(entity::contest::Column::CurrentEntries).gt(0))
            .exec(self.db)
            .await?;

        Ok(())
    }

    /// Conditionally advances a contest's status: the update applies only if
    /// the row still holds `from`, so concurrent passes cannot double-apply
    /// or rewind a transition. Returns whether this call won the update.
    pub async fn advance_status(
        &self,
        contest_id: i32,
        from: ContestStatus,
        to: ContestStatus,
    ) -> Result<bool, DbErr> {
        let result = entity::prelude::Contest::update_many()
            .col_expr(entity::contest::Column::Status, Expr::value(to))
            .col_expr(
                entity::contest::Column::UpdatedAt,
                Expr::value(Utc::now().naive_utc()),
            )
            .filter(entity::contest::Column::Id.eq(contest_id))
            .filter(entity::contest::Column::Status.eq(from))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected == 1)
    }
}
