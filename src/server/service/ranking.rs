use sea_orm::DatabaseConnection;

use crate::server::{data::entry::EntryRepository, error::Error};

pub struct RankingService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> RankingService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Recomputes rank positions 1..n for every entry of a contest from the
    /// deterministic scoring order (points descending, ties broken by
    /// earliest join, then lowest id). Running it twice on unchanged points
    /// yields identical positions.
    pub async fn rank_contest(
        &self,
        contest_id: i32,
    ) -> Result<Vec<entity::contest_entry::Model>, Error> {
        let repository = EntryRepository::new(self.db);
        let entries = repository.get_by_contest_scored_order(contest_id).await?;

        let mut ranked = Vec::with_capacity(entries.len());
        for (index, entry) in entries.into_iter().enumerate() {
            let rank_position = (index + 1) as i32;
            repository.update_rank(entry.id, rank_position).await?;
            ranked.push(entity::contest_entry::Model {
                rank_position: Some(rank_position),
                ..entry
            });
        }

        Ok(ranked)
    }
}
