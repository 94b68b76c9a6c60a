// Database Module
// Connection pooling, repositories and the asset ledger unit of work

pub mod error;
pub mod ledger;
pub mod pool;
pub mod repositories;

pub use error::DbError;
pub use ledger::{LedgerStore, LedgerUnit, NewAsset, SeaOrmLedger};
pub use pool::DbPool;
pub use repositories::Repositories;
