use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Blocks::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Blocks::Id).integer().not_null().auto_increment().primary_key())
                    .col(ColumnDef::new(Blocks::Hash).string().not_null())
                    .col(ColumnDef::new(Blocks::Sequence).integer().not_null())
                    .col(ColumnDef::new(Blocks::PreviousBlockHash).string().not_null())
                    .col(ColumnDef::new(Blocks::Main).boolean().not_null().default(false))
                    .col(ColumnDef::new(Blocks::Difficulty).decimal().not_null())
                    .col(ColumnDef::new(Blocks::Work).decimal().not_null().default(0))
                    .col(ColumnDef::new(Blocks::Timestamp).timestamp_with_time_zone().not_null())
                    .col(ColumnDef::new(Blocks::Graffiti).string().not_null().default(""))
                    .col(ColumnDef::new(Blocks::Size).integer().not_null().default(0))
                    .col(ColumnDef::new(Blocks::TransactionsCount).integer().not_null().default(0))
                    .col(ColumnDef::new(Blocks::CreatedAt).timestamp_with_time_zone().not_null().default(Expr::current_timestamp()))
                    .col(ColumnDef::new(Blocks::UpdatedAt).timestamp_with_time_zone().not_null().default(Expr::current_timestamp()))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_blocks_hash")
                    .table(Blocks::Table)
                    .col(Blocks::Hash)
                    .unique()
                    .if_not_exists()
                    .to_owned(),
            )
            .await?;

        // Head and find-by-sequence lookups filter on both
        manager
            .create_index(
                Index::create()
                    .name("idx_blocks_sequence_main")
                    .table(Blocks::Table)
                    .col(Blocks::Sequence)
                    .col(Blocks::Main)
                    .if_not_exists()
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Blocks::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Blocks {
    Table,
    Id,
    Hash,
    Sequence,
    PreviousBlockHash,
    Main,
    Difficulty,
    Work,
    Timestamp,
    Graffiti,
    Size,
    TransactionsCount,
    CreatedAt,
    UpdatedAt,
}
