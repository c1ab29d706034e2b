use crate::{DbError, Result};

use std::panic::Location;
use std::path::Path;
use std::time::Duration;

use error_location::ErrorLocation;
use sqlx::sqlite::{
    SqliteConnectOptions, SqliteJournalMode, SqlitePool, SqlitePoolOptions, SqliteSynchronous,
};

/// Open the central database (service providers, apartments, central managers,
/// services) and bring its schema up to date.
pub async fn connect_central(path: &Path, max_connections: u32) -> Result<SqlitePool> {
    if let Some(parent) = path.parent() {
        tokio::fs::create_dir_all(parent)
            .await
            .map_err(|e| DbError::Initialization {
                message: format!("Failed to create database directory: {}", e),
                location: ErrorLocation::from(Location::caller()),
            })?;
    }

    let pool = SqlitePoolOptions::new()
        .max_connections(max_connections)
        .connect_with(
            SqliteConnectOptions::new()
                .filename(path)
                .create_if_missing(true)
                .foreign_keys(true)
                .journal_mode(SqliteJournalMode::Wal)
                .synchronous(SqliteSynchronous::Normal)
                .busy_timeout(Duration::from_secs(5)),
        )
        .await?;

    migrate_central(&pool).await?;

    Ok(pool)
}

pub async fn migrate_central(pool: &SqlitePool) -> Result<()> {
    sqlx::migrate!("./migrations/central")
        .run(pool)
        .await
        .map_err(|e| DbError::Migration {
            message: format!("Central migration failed: {}", e),
            location: ErrorLocation::from(Location::caller()),
        })
}

pub async fn migrate_tenant(pool: &SqlitePool) -> Result<()> {
    sqlx::migrate!("./migrations/tenant")
        .run(pool)
        .await
        .map_err(|e| DbError::Migration {
            message: format!("Tenant migration failed: {}", e),
            location: ErrorLocation::from(Location::caller()),
        })
}
