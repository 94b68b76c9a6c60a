pub use sea_orm_migration::prelude::*;

mod m20240301_000001_create_blocks_table;
mod m20240301_000002_create_transactions_table;
mod m20240301_000003_create_blocks_transactions_table;
mod m20240301_000004_create_assets_table;
mod m20240301_000005_create_asset_descriptions_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20240301_000001_create_blocks_table::Migration),
            Box::new(m20240301_000002_create_transactions_table::Migration),
            Box::new(m20240301_000003_create_blocks_transactions_table::Migration),
            Box::new(m20240301_000004_create_assets_table::Migration),
            Box::new(m20240301_000005_create_asset_descriptions_table::Migration),
        ]
    }
}
