use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Transactions::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Transactions::Id).integer().not_null().auto_increment().primary_key())
                    .col(ColumnDef::new(Transactions::Hash).string().not_null())
                    .col(ColumnDef::new(Transactions::Fee).big_integer().not_null())
                    .col(ColumnDef::new(Transactions::Size).integer().not_null())
                    .col(ColumnDef::new(Transactions::Notes).json_binary().not_null().default("[]"))
                    .col(ColumnDef::new(Transactions::Spends).json_binary().not_null().default("[]"))
                    .col(ColumnDef::new(Transactions::CreatedAt).timestamp_with_time_zone().not_null().default(Expr::current_timestamp()))
                    .col(ColumnDef::new(Transactions::UpdatedAt).timestamp_with_time_zone().not_null().default(Expr::current_timestamp()))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_transactions_hash")
                    .table(Transactions::Table)
                    .col(Transactions::Hash)
                    .unique()
                    .if_not_exists()
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Transactions::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Transactions {
    Table,
    Id,
    Hash,
    Fee,
    Size,
    Notes,
    Spends,
    CreatedAt,
    UpdatedAt,
}
