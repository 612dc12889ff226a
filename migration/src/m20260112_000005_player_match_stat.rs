use sea_orm_migration::{prelude::*, schema::*};

static UQ_PLAYER_MATCH_STAT_MATCH_PLAYER: &str = "uq_player_match_stat_match_id_player_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(PlayerMatchStat::Table)
                    .if_not_exists()
                    .col(pk_auto(PlayerMatchStat::Id))
                    .col(string(PlayerMatchStat::MatchId))
                    .col(string(PlayerMatchStat::PlayerId))
                    .col(string(PlayerMatchStat::PlayerName))
                    .col(
                        ColumnDef::new(PlayerMatchStat::Runs)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(PlayerMatchStat::Wickets)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(PlayerMatchStat::Catches)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(PlayerMatchStat::Stumpings)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(PlayerMatchStat::RunOuts)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(PlayerMatchStat::TotalPoints)
                            .decimal_len(10, 2)
                            .not_null()
                            .default(0),
                    )
                    .col(timestamp(PlayerMatchStat::UpdatedAt))
                    .to_owned(),
            )
            .await?;

        // Upsert target for stat ingestion
        manager
            .create_index(
                Index::create()
                    .name(UQ_PLAYER_MATCH_STAT_MATCH_PLAYER)
                    .table(PlayerMatchStat::Table)
                    .col(PlayerMatchStat::MatchId)
                    .col(PlayerMatchStat::PlayerId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name(UQ_PLAYER_MATCH_STAT_MATCH_PLAYER)
                    .table(PlayerMatchStat::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(PlayerMatchStat::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum PlayerMatchStat {
    Table,
    Id,
    MatchId,
    PlayerId,
    PlayerName,
    Runs,
    Wickets,
    Catches,
    Stumpings,
    RunOuts,
    TotalPoints,
    UpdatedAt,
}
