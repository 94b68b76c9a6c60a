// Database connection pooling management

use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use std::sync::Arc;
use std::time::Duration;

use crate::config::ApiConfig;
use crate::db::error::DbError;
use crate::db::repositories::Repositories;

/// Database connection pool for managing Sea-ORM connections
pub struct DbPool {
    pool: Arc<DatabaseConnection>,
}

impl DbPool {
    /// Creates a new database connection pool from API configuration
    pub async fn new(config: &ApiConfig) -> Result<Self, DbError> {
        // Block uploads hold a connection for a whole block's worth of upserts,
        // so acquisition waits longer than a plain read would need.
        let acquire_timeout_secs: u64 = 15;
        let idle_timeout_secs: u64 = 300;
        let max_lifetime_secs: u64 = 1800;
        let connect_timeout_secs: u64 = 10;

        let conn_opts = ConnectOptions::new(config.database.url.clone())
            .max_connections(config.database.max_connections)
            .min_connections(config.database.min_connections)
            .connect_timeout(Duration::from_secs(connect_timeout_secs))
            .idle_timeout(Duration::from_secs(idle_timeout_secs))
            .acquire_timeout(Duration::from_secs(acquire_timeout_secs))
            .max_lifetime(Duration::from_secs(max_lifetime_secs))
            .sqlx_logging(false)
            .to_owned();

        Database::connect(conn_opts)
            .await
            .map(|pool| DbPool {
                pool: Arc::new(pool),
            })
            .map_err(|e| DbError::ConnectionError(e.to_string()))
    }

    /// Shared handle for components that outlive a single request
    pub fn shared_connection(&self) -> Arc<DatabaseConnection> {
        Arc::clone(&self.pool)
    }

    /// Creates repository instances for database operations
    pub fn repositories(&self) -> Repositories {
        Repositories::new(self.shared_connection())
    }
}
