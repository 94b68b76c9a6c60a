use sea_orm_migration::prelude::*;

use super::m20240301_000002_create_transactions_table::Transactions;
use super::m20240301_000004_create_assets_table::Assets;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(AssetDescriptions::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(AssetDescriptions::Id).integer().not_null().auto_increment().primary_key())
                    .col(ColumnDef::new(AssetDescriptions::Type).string_len(8).not_null()) // MINT or BURN
                    .col(ColumnDef::new(AssetDescriptions::Value).decimal().not_null())
                    .col(ColumnDef::new(AssetDescriptions::AssetId).integer().not_null())
                    .col(ColumnDef::new(AssetDescriptions::TransactionId).integer().not_null())
                    .col(ColumnDef::new(AssetDescriptions::CreatedAt).timestamp_with_time_zone().not_null().default(Expr::current_timestamp()))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_asset_descriptions_asset_id")
                            .from(AssetDescriptions::Table, AssetDescriptions::AssetId)
                            .to(Assets::Table, Assets::Id),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_asset_descriptions_transaction_id")
                            .from(AssetDescriptions::Table, AssetDescriptions::TransactionId)
                            .to(Transactions::Table, Transactions::Id),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_asset_descriptions_transaction_id")
                    .table(AssetDescriptions::Table)
                    .col(AssetDescriptions::TransactionId)
                    .if_not_exists()
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_asset_descriptions_asset_id")
                    .table(AssetDescriptions::Table)
                    .col(AssetDescriptions::AssetId)
                    .if_not_exists()
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(AssetDescriptions::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum AssetDescriptions {
    Table,
    Id,
    Type,
    Value,
    AssetId,
    TransactionId,
    CreatedAt,
}
