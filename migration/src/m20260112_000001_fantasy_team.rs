use sea_orm_migration::{prelude::*, schema::*};

static IDX_FANTASY_TEAM_USER_ID: &str = "idx_fantasy_team_user_id";
static IDX_FANTASY_TEAM_MATCH_ID: &str = "idx_fantasy_team_match_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(FantasyTeam::Table)
                    .if_not_exists()
                    .col(pk_auto(FantasyTeam::Id))
                    .col(integer(FantasyTeam::UserId))
                    .col(string(FantasyTeam::MatchId))
                    .col(string(FantasyTeam::Name))
                    .col(string(FantasyTeam::CaptainId))
                    .col(string(FantasyTeam::ViceCaptainId))
                    .col(timestamp(FantasyTeam::CreatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_FANTASY_TEAM_USER_ID)
                    .table(FantasyTeam::Table)
                    .col(FantasyTeam::UserId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_FANTASY_TEAM_MATCH_ID)
                    .table(FantasyTeam::Table)
                    .col(FantasyTeam::MatchId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name(IDX_FANTASY_TEAM_MATCH_ID)
                    .table(FantasyTeam::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_FANTASY_TEAM_USER_ID)
                    .table(FantasyTeam::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(FantasyTeam::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum FantasyTeam {
    Table,
    Id,
    UserId,
    MatchId,
    Name,
    CaptainId,
    ViceCaptainId,
    CreatedAt,
}
