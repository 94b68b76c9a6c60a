use sea_orm_migration::prelude::*;

use super::m20240301_000001_create_blocks_table::Blocks;
use super::m20240301_000002_create_transactions_table::Transactions;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(BlocksTransactions::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(BlocksTransactions::BlockId).integer().not_null())
                    .col(ColumnDef::new(BlocksTransactions::TransactionId).integer().not_null())
                    .col(ColumnDef::new(BlocksTransactions::Index).integer().not_null())
                    .primary_key(
                        Index::create()
                            .col(BlocksTransactions::BlockId)
                            .col(BlocksTransactions::TransactionId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_blocks_transactions_block_id")
                            .from(BlocksTransactions::Table, BlocksTransactions::BlockId)
                            .to(Blocks::Table, Blocks::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_blocks_transactions_transaction_id")
                            .from(BlocksTransactions::Table, BlocksTransactions::TransactionId)
                            .to(Transactions::Table, Transactions::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_blocks_transactions_transaction_id")
                    .table(BlocksTransactions::Table)
                    .col(BlocksTransactions::TransactionId)
                    .if_not_exists()
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(BlocksTransactions::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum BlocksTransactions {
    Table,
    BlockId,
    TransactionId,
    Index,
}
