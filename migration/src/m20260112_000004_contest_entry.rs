use sea_orm_migration::{prelude::*, schema::*};

use crate::{m20260112_000001_fantasy_team::FantasyTeam, m20260112_000003_contest::Contest};

static UQ_CONTEST_ENTRY_CONTEST_USER: &str = "uq_contest_entry_contest_id_user_id";
static IDX_CONTEST_ENTRY_USER_ID: &str = "idx_contest_entry_user_id";
static FK_CONTEST_ENTRY_CONTEST_ID: &str = "fk_contest_entry_contest_id";
static FK_CONTEST_ENTRY_TEAM_ID: &str = "fk_contest_entry_team_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ContestEntry::Table)
                    .if_not_exists()
                    .col(pk_auto(ContestEntry::Id))
                    .col(integer(ContestEntry::ContestId))
                    .col(integer(ContestEntry::UserId))
                    .col(integer(ContestEntry::TeamId))
                    .col(
                        ColumnDef::new(ContestEntry::Points)
                            .decimal_len(10, 2)
                            .not_null()
                            .default(0),
                    )
                    .col(integer_null(ContestEntry::RankPosition))
                    .col(timestamp(ContestEntry::CreatedAt))
                    .col(timestamp(ContestEntry::UpdatedAt))
                    .to_owned(),
            )
            .await?;

        // One entry per user per contest; the store is the final authority
        manager
            .create_index(
                Index::create()
                    .name(UQ_CONTEST_ENTRY_CONTEST_USER)
                    .table(ContestEntry::Table)
                    .col(ContestEntry::ContestId)
                    .col(ContestEntry::UserId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_CONTEST_ENTRY_USER_ID)
                    .table(ContestEntry::Table)
                    .col(ContestEntry::UserId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_CONTEST_ENTRY_CONTEST_ID)
                    .from_tbl(ContestEntry::Table)
                    .from_col(ContestEntry::ContestId)
                    .to_tbl(Contest::Table)
                    .to_col(Contest::Id)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_CONTEST_ENTRY_TEAM_ID)
                    .from_tbl(ContestEntry::Table)
                    .from_col(ContestEntry::TeamId)
                    .to_tbl(FantasyTeam::Table)
                    .to_col(FantasyTeam::Id)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_CONTEST_ENTRY_TEAM_ID)
                    .table(ContestEntry::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_CONTEST_ENTRY_CONTEST_ID)
                    .table(ContestEntry::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_CONTEST_ENTRY_USER_ID)
                    .table(ContestEntry::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(UQ_CONTEST_ENTRY_CONTEST_USER)
                    .table(ContestEntry::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(ContestEntry::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum ContestEntry {
    Table,
    Id,
    ContestId,
    UserId,
    TeamId,
    Points,
    RankPosition,
    CreatedAt,
    UpdatedAt,
}
