use sea_orm_migration::{prelude::*, schema::*};

use crate::m20260112_000001_fantasy_team::FantasyTeam;

static IDX_TEAM_PLAYER_TEAM_ID: &str = "idx_team_player_team_id";
static FK_TEAM_PLAYER_TEAM_ID: &str = "fk_team_player_team_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(TeamPlayer::Table)
                    .if_not_exists()
                    .col(pk_auto(TeamPlayer::Id))
                    .col(integer(TeamPlayer::TeamId))
                    .col(string(TeamPlayer::PlayerId))
                    .col(string(TeamPlayer::PlayerName))
                    .col(string_null(TeamPlayer::PlayerRole))
                    .col(string_null(TeamPlayer::SquadName))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_TEAM_PLAYER_TEAM_ID)
                    .table(TeamPlayer::Table)
                    .col(TeamPlayer::TeamId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_TEAM_PLAYER_TEAM_ID)
                    .from_tbl(TeamPlayer::Table)
                    .from_col(TeamPlayer::TeamId)
                    .to_tbl(FantasyTeam::Table)
                    .to_col(FantasyTeam::Id)
                    .on_delete(ForeignKeyAction::Cascade)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_TEAM_PLAYER_TEAM_ID)
                    .table(TeamPlayer::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_TEAM_PLAYER_TEAM_ID)
                    .table(TeamPlayer::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(TeamPlayer::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum TeamPlayer {
    Table,
    Id,
    TeamId,
    PlayerId,
    PlayerName,
    PlayerRole,
    SquadName,
}
