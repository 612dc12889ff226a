//! Fantasy scoring: per-player base points, role multipliers, and contest
//! settlement.

pub mod table;

use std::collections::HashMap;

use rust_decimal::Decimal;
use sea_orm::DatabaseConnection;

use crate::server::{
    data::{
        contest::ContestRepository, entry::EntryRepository, player_stat::PlayerStatRepository,
        team::TeamRepository,
    },
    error::{contest::ContestError, Error},
    service::{ranking::RankingService, scoring::table::ScoringTable},
};

fn captain_multiplier() -> Decimal {
    Decimal::TWO
}

fn vice_captain_multiplier() -> Decimal {
    Decimal::new(15, 1)
}

/// One player's contribution to a team total.
#[derive(Debug, Clone)]
pub struct PlayerScore {
    pub player_id: String,
    pub player_name: String,
    pub base_points: Decimal,
    pub multiplier: Decimal,
    pub points: Decimal,
}

pub struct ScoringService<'a> {
    db: &'a DatabaseConnection,
    table: ScoringTable,
}

impl<'a> ScoringService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self {
            db,
            table: ScoringTable::default(),
        }
    }

    pub fn with_table(db: &'a DatabaseConnection, table: ScoringTable) -> Self {
        Self { db, table }
    }

    /// Computes a team's fantasy total from the stored stat lines of its
    /// match. Players with no stat line contribute zero; the captain's base
    /// points are doubled and the vice-captain's multiplied by 1.5.
    pub async fn compute_team_points(
        &self,
        team: &entity::fantasy_team::Model,
    ) -> Result<(Decimal, Vec<PlayerScore>), Error> {
        let teams = TeamRepository::new(self.db);
        let stats = PlayerStatRepository::new(self.db);

        let players = teams.get_players(team.id).await?;
        let stat_lines: HashMap<String, entity::player_match_stat::Model> = stats
            .get_by_match(&team.match_id)
            .await?
            .into_iter()
            .map(|stat| (stat.player_id.clone(), stat))
            .collect();

        let mut total = Decimal::ZERO;
        let mut breakdown = Vec::with_capacity(players.len());
        for player in players {
            let base_points = stat_lines
                .get(&player.player_id)
                .map(|stat| self.table.base_points(stat))
                .unwrap_or(Decimal::ZERO);

            let multiplier = if player.player_id == team.captain_id {
                captain_multiplier()
            } else if player.player_id == team.vice_captain_id {
                vice_captain_multiplier()
            } else {
                Decimal::ONE
            };

            let points = base_points * multiplier;
            total += points;
            breakdown.push(PlayerScore {
                player_id: player.player_id,
                player_name: player.player_name,
                base_points,
                multiplier,
                points,
            });
        }

        Ok((total, breakdown))
    }

    /// Upserts a batch of raw stat lines, recomputing each line's cached
    /// base-point total from the scoring table.
    pub async fn ingest_stats(
        &self,
        stats: &[crate::model::stat::PlayerStatDto],
    ) -> Result<usize, Error> {
        let repository = PlayerStatRepository::new(self.db);

        for stat in stats {
            let total = self.table.base_points_raw(
                stat.runs,
                stat.wickets,
                stat.catches,
                stat.stumpings,
                stat.run_outs,
            );
            repository.upsert(stat, total).await?;
        }

        Ok(stats.len())
    }

    /// Scores every entry of a contest and re-ranks the leaderboard. Safe to
    /// repeat; scores are recomputed from the stat lines each time.
    pub async fn settle_contest(&self, contest_id: i32) -> Result<usize, Error> {
        let contests = ContestRepository::new(self.db);
        let entries = EntryRepository::new(self.db);
        let teams = TeamRepository::new(self.db);

        contests
            .get_by_id(contest_id)
            .await?
            .ok_or(ContestError::NotFound)?;

        let contest_entries = entries.get_by_contest_scored_order(contest_id).await?;
        let scored = contest_entries.len();
        for entry in contest_entries {
            let team = teams
                .get_by_id(entry.team_id)
                .await?
                .ok_or(ContestError::TeamNotFound)?;
            let (total, _) = self.compute_team_points(&team).await?;
            entries.update_points(entry.id, total).await?;
        }

        RankingService::new(self.db).rank_contest(contest_id).await?;

        tracing::info!("Settled contest {} with {} entries", contest_id, scored);

        Ok(scored)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crease_test_utils::prelude::*;
    use entity::contest::ContestStatus;

    mod compute_team_points_tests {
        use super::*;

        /// Expect captain base points doubled and vice-captain's at 1.5x.
        #[tokio::test]
        async fn applies_role_multipliers() {
            let setup = TestBuilder::new()
                .with_contest_tables()
                .build()
                .await
                .unwrap();
            let team = setup.teams().insert(1, "match-1").await.unwrap();
            // captain p1: 30 runs, vice p2: 20 runs, p3: 10 runs
            setup.stats().insert("match-1", "p1", 30, 0, 0, 0, 0).await.unwrap();
            setup.stats().insert("match-1", "p2", 20, 0, 0, 0, 0).await.unwrap();
            setup.stats().insert("match-1", "p3", 10, 0, 0, 0, 0).await.unwrap();

            let service = ScoringService::new(&setup.db);
            let (total, breakdown) = service.compute_team_points(&team).await.unwrap();

            // 30*2 + 20*1.5 + 10
            assert_eq!(total, Decimal::from(100));
            assert_eq!(breakdown.len(), 11);
            let captain = breakdown.iter().find(|p| p.player_id == "p1").unwrap();
            assert_eq!(captain.points, Decimal::from(60));
        }

        /// Expect players without a stat line to contribute exactly zero.
        #[tokio::test]
        async fn missing_stat_lines_score_zero() {
            let setup = TestBuilder::new()
                .with_contest_tables()
                .build()
                .await
                .unwrap();
            let team = setup.teams().insert(1, "match-1").await.unwrap();
            setup.stats().insert("match-1", "p3", 10, 0, 0, 0, 0).await.unwrap();

            let service = ScoringService::new(&setup.db);
            let (total, breakdown) = service.compute_team_points(&team).await.unwrap();

            assert_eq!(total, Decimal::from(10));
            let unscored = breakdown.iter().find(|p| p.player_id == "p4").unwrap();
            assert_eq!(unscored.points, Decimal::ZERO);
        }

        /// Expect a non-default weight table to drive the computed totals.
        #[tokio::test]
        async fn honors_custom_scoring_table() {
            let setup = TestBuilder::new()
                .with_contest_tables()
                .build()
                .await
                .unwrap();
            let team = setup.teams().insert(1, "match-1").await.unwrap();
            // p3: 10 runs and 1 wicket, weighted 2 and 30 below
            setup.stats().insert("match-1", "p3", 10, 1, 0, 0, 0).await.unwrap();

            let table = ScoringTable {
                run: Decimal::TWO,
                wicket: Decimal::from(30),
                ..ScoringTable::default()
            };
            let service = ScoringService::with_table(&setup.db, table);
            let (total, breakdown) = service.compute_team_points(&team).await.unwrap();

            // 10*2 + 1*30
            assert_eq!(total, Decimal::from(50));
            let scorer = breakdown.iter().find(|p| p.player_id == "p3").unwrap();
            assert_eq!(scorer.base_points, Decimal::from(50));
        }

        /// Expect an all-missing match to produce a zero total, not an error.
        #[tokio::test]
        async fn scores_zero_without_any_stats() {
            let setup = TestBuilder::new()
                .with_contest_tables()
                .build()
                .await
                .unwrap();
            let team = setup.teams().insert(1, "match-1").await.unwrap();

            let service = ScoringService::new(&setup.db);
            let (total, _) = service.compute_team_points(&team).await.unwrap();

            assert_eq!(total, Decimal::ZERO);
        }
    }

    mod settle_contest_tests {
        use super::*;

        /// Expect every entry scored and ranked after settlement.
        #[tokio::test]
        async fn scores_and_ranks_all_entries() {
            let setup = TestBuilder::new()
                .with_contest_tables()
                .build()
                .await
                .unwrap();
            let contest = setup
                .contests()
                .insert("match-1", ContestStatus::Completed, 10)
                .await
                .unwrap();
            // user 2's captain p3 scores, user 1's does not
            let team_a = setup.teams().insert(1, "match-1").await.unwrap();
            let ids = factory::default_player_ids();
            let ids: Vec<&str> = ids.iter().map(String::as_str).collect();
            let team_b = setup
                .teams()
                .insert_with(2, "match-1", "p3", "p4", &ids)
                .await
                .unwrap();
            setup.entries().insert(contest.id, 1, team_a.id).await.unwrap();
            setup.entries().insert(contest.id, 2, team_b.id).await.unwrap();
            setup.stats().insert("match-1", "p3", 50, 0, 0, 0, 0).await.unwrap();

            let service = ScoringService::new(&setup.db);
            let scored = service.settle_contest(contest.id).await.unwrap();

            assert_eq!(scored, 2);
            let entries = crate::server::data::entry::EntryRepository::new(&setup.db)
                .get_by_contest_scored_order(contest.id)
                .await
                .unwrap();
            assert_eq!(entries[0].user_id, 2);
            assert_eq!(entries[0].points, Decimal::from(100));
            assert_eq!(entries[0].rank_position, Some(1));
            assert_eq!(entries[1].user_id, 1);
            assert_eq!(entries[1].points, Decimal::from(50));
            assert_eq!(entries[1].rank_position, Some(2));
        }
    }
}
