use std::process::Command;
use tracing::{error, info};

use super::CommandError;
use crate::config::DatabaseConfig;

/// Execute the create command
pub async fn execute(name: Option<String>) -> Result<(), CommandError> {
    let config = DatabaseConfig::from_env()?;
    let db_name = name.unwrap_or(config.name.clone());

    info!("Creating database: {}", db_name);

    // Connect to the maintenance database; the target may not exist yet
    let conn_string = format!(
        "postgresql://{}:{}@{}:{}/postgres",
        config.user, config.password, config.host, config.port
    );

    let check_output = Command::new("psql")
        .arg(&conn_string)
        .arg("-t")
        .arg("-c")
        .arg(format!(
            "SELECT 1 FROM pg_database WHERE datname = '{}'",
            db_name
        ))
        .output()?;

    if String::from_utf8_lossy(&check_output.stdout).trim() == "1" {
        info!("Database '{}' already exists", db_name);
        return Ok(());
    }

    let create_output = Command::new("psql")
        .arg(&conn_string)
        .arg("-c")
        .arg(format!("CREATE DATABASE \"{}\"", db_name))
        .output()?;

    if create_output.status.success() {
        info!("Database '{}' created successfully", db_name);
        Ok(())
    } else {
        let error_msg = String::from_utf8_lossy(&create_output.stderr).to_string();
        error!("Failed to create database: {}", error_msg);
        Err(CommandError::PsqlFailed(error_msg))
    }
}
