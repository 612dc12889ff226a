//! Domain fixtures: feed payload builders and database row factories.

use chrono::{NaiveDateTime, Utc};
use rust_decimal::Decimal;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection};

use crate::{error::TestError, setup::TestSetup};

/// Builds one match object in the feed's wire shape. `phase` is the feed's
/// `ms` tag: "fixture", "live", "result", or anything else for an
/// unrecognized status.
pub fn feed_match(match_id: &str, phase: &str) -> serde_json::Value {
    serde_json::json!({
        "id": match_id,
        "t1": "India",
        "t2": "Australia",
        "t1s": "182/4 (20)",
        "t2s": "",
        "ms": phase,
        "dateTimeGMT": "2026-01-12T09:00:00",
        "series": "Test Series 2026",
        "matchType": "t20",
        "status": "Match scheduled",
    })
}

/// Builds a squad list in the feed's wire shape for two sides of 11.
pub fn feed_squads(player_ids: &[&str]) -> serde_json::Value {
    let players: Vec<serde_json::Value> = player_ids
        .iter()
        .map(|id| {
            serde_json::json!({
                "id": id,
                "name": format!("Player {id}"),
                "role": "Batsman",
            })
        })
        .collect();

    serde_json::json!([
        { "teamName": "India", "players": players },
        { "teamName": "Australia", "players": [] },
    ])
}

/// Player ids used by the default team fixture, captain first.
pub fn default_player_ids() -> Vec<String> {
    (1..=11).map(|n| format!("p{n}")).collect()
}

pub struct ContestFixtures<'a> {
    db: &'a DatabaseConnection,
}

impl ContestFixtures<'_> {
    pub async fn insert(
        &self,
        match_id: &str,
        status: entity::contest::ContestStatus,
        max_entries: i32,
    ) -> Result<entity::contest::Model, TestError> {
        let now = Utc::now().naive_utc();
        let contest = entity::contest::ActiveModel {
            match_id: ActiveValue::Set(match_id.to_string()),
            name: ActiveValue::Set("Mega Contest".to_string()),
            description: ActiveValue::Set(None),
            max_entries: ActiveValue::Set(max_entries),
            current_entries: ActiveValue::Set(0),
            status: ActiveValue::Set(status),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        };

        Ok(contest.insert(self.db).await?)
    }
}

pub struct TeamFixtures<'a> {
    db: &'a DatabaseConnection,
}

impl TeamFixtures<'_> {
    /// Inserts a valid 11-player team (p1..p11, captain p1, vice-captain p2).
    pub async fn insert(
        &self,
        user_id: i32,
        match_id: &str,
    ) -> Result<entity::fantasy_team::Model, TestError> {
        let ids = default_player_ids();
        let ids: Vec<&str> = ids.iter().map(String::as_str).collect();
        self.insert_with(user_id, match_id, "p1", "p2", &ids).await
    }

    pub async fn insert_with(
        &self,
        user_id: i32,
        match_id: &str,
        captain_id: &str,
        vice_captain_id: &str,
        player_ids: &[&str],
    ) -> Result<entity::fantasy_team::Model, TestError> {
        let team = entity::fantasy_team::ActiveModel {
            user_id: ActiveValue::Set(user_id),
            match_id: ActiveValue::Set(match_id.to_string()),
            name: ActiveValue::Set(format!("Team {user_id}")),
            captain_id: ActiveValue::Set(captain_id.to_string()),
            vice_captain_id: ActiveValue::Set(vice_captain_id.to_string()),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        };
        let team = team.insert(self.db).await?;

        for player_id in player_ids {
            let player = entity::team_player::ActiveModel {
                team_id: ActiveValue::Set(team.id),
                player_id: ActiveValue::Set(player_id.to_string()),
                player_name: ActiveValue::Set(format!("Player {player_id}")),
                player_role: ActiveValue::Set(Some("Batsman".to_string())),
                squad_name: ActiveValue::Set(Some("India".to_string())),
                ..Default::default()
            };
            player.insert(self.db).await?;
        }

        Ok(team)
    }
}

pub struct EntryFixtures<'a> {
    db: &'a DatabaseConnection,
}

impl EntryFixtures<'_> {
    pub async fn insert(
        &self,
        contest_id: i32,
        user_id: i32,
        team_id: i32,
    ) -> Result<entity::contest_entry::Model, TestError> {
        self.insert_at(contest_id, user_id, team_id, Decimal::ZERO, Utc::now().naive_utc())
            .await
    }

    /// Inserts an entry with explicit points and creation time; ranking
    /// tie-break tests need to control join order.
    pub async fn insert_at(
        &self,
        contest_id: i32,
        user_id: i32,
        team_id: i32,
        points: Decimal,
        created_at: NaiveDateTime,
    ) -> Result<entity::contest_entry::Model, TestError> {
        let entry = entity::contest_entry::ActiveModel {
            contest_id: ActiveValue::Set(contest_id),
            user_id: ActiveValue::Set(user_id),
            team_id: ActiveValue::Set(team_id),
            points: ActiveValue::Set(points),
            rank_position: ActiveValue::Set(None),
            created_at: ActiveValue::Set(created_at),
            updated_at: ActiveValue::Set(created_at),
            ..Default::default()
        };

        Ok(entry.insert(self.db).await?)
    }
}

pub struct StatFixtures<'a> {
    db: &'a DatabaseConnection,
}

impl StatFixtures<'_> {
    #[allow(clippy::too_many_arguments)]
    pub async fn insert(
        &self,
        match_id: &str,
        player_id: &str,
        runs: i32,
        wickets: i32,
        catches: i32,
        stumpings: i32,
        run_outs: i32,
    ) -> Result<entity::player_match_stat::Model, TestError> {
        let stat = entity::player_match_stat::ActiveModel {
            match_id: ActiveValue::Set(match_id.to_string()),
            player_id: ActiveValue::Set(player_id.to_string()),
            player_name: ActiveValue::Set(format!("Player {player_id}")),
            runs: ActiveValue::Set(runs),
            wickets: ActiveValue::Set(wickets),
            catches: ActiveValue::Set(catches),
            stumpings: ActiveValue::Set(stumpings),
            run_outs: ActiveValue::Set(run_outs),
            total_points: ActiveValue::Set(Decimal::ZERO),
            updated_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        };

        Ok(stat.insert(self.db).await?)
    }
}

impl TestSetup {
    pub fn contests(&self) -> ContestFixtures<'_> {
        ContestFixtures { db: &self.db }
    }

    pub fn teams(&self) -> TeamFixtures<'_> {
        TeamFixtures { db: &self.db }
    }

    pub fn entries(&self) -> EntryFixtures<'_> {
        EntryFixtures { db: &self.db }
    }

    pub fn stats(&self) -> StatFixtures<'_> {
        StatFixtures { db: &self.db }
    }
}
