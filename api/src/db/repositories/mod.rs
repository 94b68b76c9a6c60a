// Database repository management

pub mod asset;
pub mod asset_description_repository;
pub mod block_repository;
pub mod transaction_repository;

pub use asset::AssetRepository;
pub use asset_description_repository::AssetDescriptionRepository;
pub use block_repository::BlockRepository;
pub use transaction_repository::TransactionRepository;

use std::sync::Arc;

use sea_orm::DatabaseConnection;

/// Container for all database repositories
#[derive(Debug, Clone)]
pub struct Repositories {
    /// Shared pool handle, used by services that open their own transactions
    pub conn: Arc<DatabaseConnection>,
    pub asset: AssetRepository,
    pub asset_description: AssetDescriptionRepository,
    pub block: BlockRepository,
    pub transaction: TransactionRepository,
}

impl Repositories {
    /// Creates a new repositories container with database connection
    pub fn new(conn: Arc<DatabaseConnection>) -> Self {
        Repositories {
            asset: AssetRepository::new(conn.clone()),
            asset_description: AssetDescriptionRepository::new(conn.clone()),
            block: BlockRepository::new(conn.clone()),
            transaction: TransactionRepository::new(conn.clone()),
            conn,
        }
    }
}
