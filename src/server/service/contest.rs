use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, SqlErr};

use entity::contest::ContestStatus;

use crate::{
    model::contest::{CreateContestDto, LeaderboardEntryDto},
    server::{
        data::{contest::ContestRepository, entry::EntryRepository, team::TeamRepository},
        error::{contest::ContestError, Error},
    },
};

pub struct ContestService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ContestService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create_contest(
        &self,
        contest: &CreateContestDto,
    ) -> Result<entity::contest::Model, Error> {
        let repository = ContestRepository::new(self.db);

        Ok(repository.create(contest).await?)
    }

    pub async fn get_contest(&self, contest_id: i32) -> Result<entity::contest::Model, Error> {
        let repository = ContestRepository::new(self.db);

        Ok(repository
            .get_by_id(contest_id)
            .await?
            .ok_or(ContestError::NotFound)?)
    }

    pub async fn list_contests(
        &self,
        match_id: Option<&str>,
    ) -> Result<Vec<entity::contest::Model>, Error> {
        let repository = ContestRepository::new(self.db);

        Ok(repository.get_all(match_id).await?)
    }

    pub async fn has_joined(&self, user_id: i32, contest_id: i32) -> Result<bool, Error> {
        let repository = EntryRepository::new(self.db);

        Ok(repository.has_joined(contest_id, user_id).await?)
    }

    /// Joins a contest with one of the caller's teams.
    ///
    /// Preconditions are checked in a fixed order so the caller always gets
    /// the same reason for the same state: contest exists, has room, has not
    /// ended, team exists, is owned by the caller, is built for the contest's
    /// match, and the caller is not already in. The capacity check is then
    /// re-applied atomically at reservation time, so two racing joins for the
    /// last slot cannot both succeed.
    pub async fn join_contest(
        &self,
        user_id: i32,
        contest_id: i32,
        team_id: i32,
    ) -> Result<entity::contest_entry::Model, Error> {
        let contests = ContestRepository::new(self.db);
        let entries = EntryRepository::new(self.db);
        let teams = TeamRepository::new(self.db);

        let contest = contests
            .get_by_id(contest_id)
            .await?
            .ok_or(ContestError::NotFound)?;
        if contest.current_entries >= contest.max_entries {
            return Err(ContestError::Full.into());
        }
        if contest.status == ContestStatus::Completed {
            return Err(ContestError::Ended.into());
        }

        let team = teams
            .get_by_id(team_id)
            .await?
            .ok_or(ContestError::TeamNotFound)?;
        if team.user_id != user_id {
            return Err(ContestError::TeamNotOwned.into());
        }
        if team.match_id != contest.match_id {
            return Err(ContestError::TeamMatchMismatch.into());
        }

        if entries.has_joined(contest_id, user_id).await? {
            return Err(ContestError::AlreadyJoined.into());
        }

        // The precondition read above can go stale under concurrency; the
        // conditional increment is the authoritative capacity check.
        if !contests.try_reserve_entry_slot(contest_id).await? {
            return Err(ContestError::Full.into());
        }

        match entries.create(contest_id, user_id, team_id).await {
            Ok(entry) => {
                tracing::info!(
                    "User {} joined contest {} with team {}",
                    user_id,
                    contest_id,
                    team_id
                );

                Ok(entry)
            }
            Err(err) => {
                // Undo the reservation so the failed join does not leak a slot.
                contests.release_entry_slot(contest_id).await?;

                if matches!(err.sql_err(), Some(SqlErr::UniqueConstraintViolation(_))) {
                    Err(ContestError::AlreadyJoined.into())
                } else {
                    Err(err.into())
                }
            }
        }
    }

    /// Builds the leaderboard for one contest: entries in scoring order with
    /// their stored rank positions and team names.
    pub async fn leaderboard(&self, contest_id: i32) -> Result<Vec<LeaderboardEntryDto>, Error> {
        let contests = ContestRepository::new(self.db);
        let entries = EntryRepository::new(self.db);

        contests
            .get_by_id(contest_id)
            .await?
            .ok_or(ContestError::NotFound)?;

        let ordered = entries.get_by_contest_scored_order(contest_id).await?;

        let team_ids: Vec<i32> = ordered.iter().map(|entry| entry.team_id).collect();
        let teams = entity::prelude::FantasyTeam::find()
            .filter(entity::fantasy_team::Column::Id.is_in(team_ids))
            .all(self.db)
            .await?;

        let rows = ordered
            .into_iter()
            .map(|entry| {
                let team_name = teams
                    .iter()
                    .find(|team| team.id == entry.team_id)
                    .map(|team| team.name.clone());

                LeaderboardEntryDto {
                    entry_id: entry.id,
                    user_id: entry.user_id,
                    team_id: entry.team_id,
                    team_name,
                    points: entry.points,
                    rank_position: entry.rank_position,
                }
            })
            .collect();

        Ok(rows)
    }
}
