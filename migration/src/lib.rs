pub use sea_orm_migration::prelude::*;

mod m20260112_000001_fantasy_team;
mod m20260112_000002_team_player;
mod m20260112_000003_contest;
mod m20260112_000004_contest_entry;
mod m20260112_000005_player_match_stat;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260112_000001_fantasy_team::Migration),
            Box::new(m20260112_000002_team_player::Migration),
            Box::new(m20260112_000003_contest::Migration),
            Box::new(m20260112_000004_contest_entry::Migration),
            Box::new(m20260112_000005_player_match_stat::Migration),
        ]
    }
}
