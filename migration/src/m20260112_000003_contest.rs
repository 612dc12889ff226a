use sea_orm_migration::{prelude::*, schema::*};

static IDX_CONTEST_MATCH_ID: &str = "idx_contest_match_id";
static IDX_CONTEST_STATUS: &str = "idx_contest_status";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Contest::Table)
                    .if_not_exists()
                    .col(pk_auto(Contest::Id))
                    .col(string(Contest::MatchId))
                    .col(string(Contest::Name))
                    .col(text_null(Contest::Description))
                    .col(integer(Contest::MaxEntries))
                    .col(
                        ColumnDef::new(Contest::CurrentEntries)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(Contest::Status)
                            .string_len(16)
                            .not_null()
                            .default("upcoming"),
                    )
                    .col(timestamp(Contest::CreatedAt))
                    .col(timestamp(Contest::UpdatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_CONTEST_MATCH_ID)
                    .table(Contest::Table)
                    .col(Contest::MatchId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_CONTEST_STATUS)
                    .table(Contest::Table)
                    .col(Contest::Status)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name(IDX_CONTEST_STATUS)
                    .table(Contest::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_CONTEST_MATCH_ID)
                    .table(Contest::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Contest::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Contest {
    Table,
    Id,
    MatchId,
    Name,
    Description,
    MaxEntries,
    CurrentEntries,
    Status,
    CreatedAt,
    UpdatedAt,
}
