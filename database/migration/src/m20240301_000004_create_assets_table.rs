use sea_orm_migration::prelude::*;

use super::m20240301_000002_create_transactions_table::Transactions;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Assets::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Assets::Id).integer().not_null().auto_increment().primary_key())
                    .col(ColumnDef::new(Assets::Identifier).string().not_null())
                    .col(ColumnDef::new(Assets::Name).string().not_null())
                    .col(ColumnDef::new(Assets::Metadata).string().not_null().default(""))
                    .col(ColumnDef::new(Assets::Owner).string().not_null())
                    // Unbounded NUMERIC: supply is the running sum of every active mint and burn
                    .col(ColumnDef::new(Assets::Supply).decimal().not_null().default(0))
                    .col(ColumnDef::new(Assets::CreatedTransactionId).integer().not_null())
                    .col(ColumnDef::new(Assets::CreatedAt).timestamp_with_time_zone().not_null().default(Expr::current_timestamp()))
                    .col(ColumnDef::new(Assets::UpdatedAt).timestamp_with_time_zone().not_null().default(Expr::current_timestamp()))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_assets_created_transaction_id")
                            .from(Assets::Table, Assets::CreatedTransactionId)
                            .to(Transactions::Table, Transactions::Id),
                    )
                    .to_owned(),
            )
            .await?;

        // Upserts resolve conflicts on this index
        manager
            .create_index(
                Index::create()
                    .name("idx_assets_identifier")
                    .table(Assets::Table)
                    .col(Assets::Identifier)
                    .unique()
                    .if_not_exists()
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_assets_name")
                    .table(Assets::Table)
                    .col(Assets::Name)
                    .if_not_exists()
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Assets::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Assets {
    Table,
    Id,
    Identifier,
    Name,
    Metadata,
    Owner,
    Supply,
    CreatedTransactionId,
    CreatedAt,
    UpdatedAt,
}
