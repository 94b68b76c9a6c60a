use migration::{Migrator, MigratorTrait};
use sea_orm::{Database, DatabaseConnection};
use tracing::{error, info};

use super::CommandError;
use crate::config::DatabaseConfig;

async fn connect() -> Result<DatabaseConnection, CommandError> {
    let config = DatabaseConfig::from_env()?;

    info!("Connecting to database {} on {}:{}", config.name, config.host, config.port);

    Database::connect(&config.url).await.map_err(|e| {
        error!("Failed to connect to database: {}", e);
        CommandError::Database(e)
    })
}

/// Execute the migrate command
pub async fn execute(steps: Option<u32>) -> Result<(), CommandError> {
    let connection = connect().await?;

    let all_migrations = Migrator::get_migration_files();
    info!("Found {} migration files", all_migrations.len());
    for m in &all_migrations {
        info!("Migration file: {}", m.name());
    }

    match steps {
        Some(n) => info!("Running {} migrations", n),
        None => info!("Running all pending migrations"),
    }

    if let Err(e) = Migrator::up(&connection, steps).await {
        error!("Failed to run migrations: {:?}", e);
        return Err(e.into());
    }

    info!("Migrations applied");
    Ok(())
}

/// Drop every table and re-run all migrations
pub async fn reset() -> Result<(), CommandError> {
    let connection = connect().await?;

    info!("Resetting database");
    Migrator::fresh(&connection).await?;
    info!("Database reset complete");

    Ok(())
}

/// Log the applied and pending migrations
pub async fn status() -> Result<(), CommandError> {
    let connection = connect().await?;

    let applied = Migrator::get_applied_migrations(&connection).await?;
    let pending = Migrator::get_pending_migrations(&connection).await?;

    for m in &applied {
        info!("applied  {}", m.name());
    }
    for m in &pending {
        info!("pending  {}", m.name());
    }
    info!("{} applied, {} pending", applied.len(), pending.len());

    Ok(())
}
