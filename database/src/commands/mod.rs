pub mod create;
pub mod migrate;

use thiserror::Error;

/// Errors surfaced by the management commands
#[derive(Debug, Error)]
pub enum CommandError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Database error: {0}")]
    Database(#[from] sea_orm::DbErr),

    #[error("Failed to run psql: {0}")]
    Psql(#[from] std::io::Error),

    #[error("psql reported an error: {0}")]
    PsqlFailed(String),
}
