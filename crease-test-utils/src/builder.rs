//! Declarative builder for test environments.
//!
//! Chains database table creation with mock feed endpoint registration, all
//! executed during the final `build()` call.

use sea_orm::{
    sea_query::{Index, IndexCreateStatement, TableCreateStatement},
    Schema,
};

use crate::{error::TestError, fixtures::mockito as feed_mock, setup::TestSetup};

/// Builder for declarative test initialization.
pub struct TestBuilder {
    include_contest_tables: bool,

    // Mock feed endpoints: (payload, expected request count)
    matches_endpoints: Vec<(serde_json::Value, usize)>,
    matches_error_endpoints: Vec<(usize, usize)>, // (http status, expected requests)
    squad_endpoints: Vec<(String, serde_json::Value, usize)>,
}

impl TestBuilder {
    pub fn new() -> Self {
        Self {
            include_contest_tables: false,
            matches_endpoints: Vec::new(),
            matches_error_endpoints: Vec::new(),
            squad_endpoints: Vec::new(),
        }
    }

    /// Add every contest-engine table (teams, players, contests, entries,
    /// stats) plus the composite unique indexes the invariants rely on.
    pub fn with_contest_tables(mut self) -> Self {
        self.include_contest_tables = true;
        self
    }

    /// Mock the feed's match list endpoint with a successful envelope
    /// containing `matches`, expected to be hit `expected_requests` times.
    pub fn with_matches_endpoint(
        mut self,
        matches: Vec<serde_json::Value>,
        expected_requests: usize,
    ) -> Self {
        self.matches_endpoints
            .push((serde_json::Value::Array(matches), expected_requests));
        self
    }

    /// Mock the feed's match list endpoint returning the given HTTP status
    /// with no usable body.
    pub fn with_matches_endpoint_error(mut self, status: usize, expected_requests: usize) -> Self {
        self.matches_error_endpoints.push((status, expected_requests));
        self
    }

    /// Mock the feed's squad endpoint for one match id.
    pub fn with_squad_endpoint(
        mut self,
        match_id: &str,
        squads: serde_json::Value,
        expected_requests: usize,
    ) -> Self {
        self.squad_endpoints
            .push((match_id.to_string(), squads, expected_requests));
        self
    }

    pub async fn build(self) -> Result<TestSetup, TestError> {
        let mut setup = TestSetup::new().await?;

        let mut tables: Vec<TableCreateStatement> = Vec::new();
        if self.include_contest_tables {
            let schema = Schema::new(sea_orm::DbBackend::Sqlite);
            tables.extend([
                schema.create_table_from_entity(entity::prelude::FantasyTeam),
                schema.create_table_from_entity(entity::prelude::TeamPlayer),
                schema.create_table_from_entity(entity::prelude::Contest),
                schema.create_table_from_entity(entity::prelude::ContestEntry),
                schema.create_table_from_entity(entity::prelude::PlayerMatchStat),
            ]);
        }
        setup.with_tables(tables).await?;

        if self.include_contest_tables {
            setup.with_indexes(contest_unique_indexes()).await?;
        }

        for (payload, expected) in self.matches_endpoints {
            let mock = feed_mock::mock_matches_endpoint(&mut setup.server, payload, expected).await;
            setup.mocks.push(mock);
        }

        for (status, expected) in self.matches_error_endpoints {
            let mock =
                feed_mock::mock_matches_endpoint_error(&mut setup.server, status, expected).await;
            setup.mocks.push(mock);
        }

        for (match_id, payload, expected) in self.squad_endpoints {
            let mock =
                feed_mock::mock_squad_endpoint(&mut setup.server, &match_id, payload, expected)
                    .await;
            setup.mocks.push(mock);
        }

        Ok(setup)
    }
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Composite unique indexes matching the production migrations.
fn contest_unique_indexes() -> Vec<IndexCreateStatement> {
    vec![
        Index::create()
            .name("uq_contest_entry_contest_id_user_id")
            .table(entity::contest_entry::Entity)
            .col(entity::contest_entry::Column::ContestId)
            .col(entity::contest_entry::Column::UserId)
            .unique()
            .to_owned(),
        Index::create()
            .name("uq_player_match_stat_match_id_player_id")
            .table(entity::player_match_stat::Entity)
            .col(entity::player_match_stat::Column::MatchId)
            .col(entity::player_match_stat::Column::PlayerId)
            .unique()
            .to_owned(),
    ]
}
