use crate::connection::central::migrate_tenant;
use crate::{DbError, ManagerRepository, ResidentRepository, Result};

use am_core::{Apartment, CoreResult, TenantDirectory, TenantStores};

use std::collections::HashMap;
use std::panic::Location;
use std::path::PathBuf;
use std::sync::Arc;

use async_trait::async_trait;
use error_location::ErrorLocation;
use log::{debug, info};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use tokio::sync::RwLock;

/// Lazily opens one SQLite database per apartment and caches its pool.
pub struct TenantConnectionManager {
    pools: Arc<RwLock<HashMap<String, SqlitePool>>>,
    base_path: PathBuf,
    max_connections: u32,
}

impl TenantConnectionManager {
    pub fn new(base_path: impl Into<PathBuf>) -> Self {
        Self::with_max_connections(base_path, 5)
    }

    pub fn with_max_connections(base_path: impl Into<PathBuf>, max_connections: u32) -> Self {
        Self {
            pools: Arc::new(RwLock::new(HashMap::new())),
            base_path: base_path.into(),
            max_connections,
        }
    }

    pub async fn get_pool(&self, apartment_name: &str) -> Result<SqlitePool> {
        Self::validate_apartment_name(apartment_name)?;

        // Fast path: Check if pool already exists (read lock)
        {
            let pools = self.pools.read().await;
            if let Some(pool) = pools.get(apartment_name) {
                return Ok(pool.clone());
            }
        }

        // Slow path: Need to create pool (write lock for entire operation)
        let mut pools = self.pools.write().await;

        // Double-check: Another task might have created it while we waited for write lock
        if let Some(pool) = pools.get(apartment_name) {
            return Ok(pool.clone());
        }

        let pool = self.create_pool(apartment_name).await?;
        pools.insert(apartment_name.to_string(), pool.clone());

        Ok(pool)
    }

    /// Number of tenant pools opened so far.
    pub async fn open_count(&self) -> usize {
        self.pools.read().await.len()
    }

    /// Close every cached pool. Called once at shutdown.
    pub async fn close_all(&self) {
        let mut pools = self.pools.write().await;
        for (apartment_name, pool) in pools.drain() {
            debug!("Closing tenant database: {}", apartment_name);
            pool.close().await;
        }
    }

    async fn create_pool(&self, apartment_name: &str) -> Result<SqlitePool> {
        let db_path = self.get_database_path(apartment_name);

        if let Some(parent) = db_path.parent() {
            tokio::fs::create_dir_all(parent)
                .await
                .map_err(|e| DbError::Initialization {
                    message: format!("Failed to create tenant directory: {}", e),
                    location: ErrorLocation::from(Location::caller()),
                })?;
        }

        let options = SqliteConnectOptions::new()
            .filename(&db_path)
            .create_if_missing(true)
            .foreign_keys(true);

        let pool = SqlitePoolOptions::new()
            .max_connections(self.max_connections)
            .connect_with(options)
            .await?;

        migrate_tenant(&pool).await?;

        info!(
            "Opened tenant database for {} at {}",
            apartment_name,
            db_path.display()
        );

        Ok(pool)
    }

    fn get_database_path(&self, apartment_name: &str) -> PathBuf {
        self.base_path.join(apartment_name).join("main.db")
    }

    /// Apartment names become directory names, so they must stay inside `base_path`.
    #[track_caller]
    pub(crate) fn validate_apartment_name(apartment_name: &str) -> Result<()> {
        match Apartment::invalid_name_reason(apartment_name) {
            Some(reason) => Err(DbError::InvalidTenantName {
                apartment_name: apartment_name.to_string(),
                message: reason.to_string(),
                location: ErrorLocation::from(Location::caller()),
            }),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl TenantDirectory for TenantConnectionManager {
    async fn tenant_stores(&self, apartment_name: &str) -> CoreResult<TenantStores> {
        let pool = self.get_pool(apartment_name).await?;

        Ok(TenantStores {
            residents: Box::new(ResidentRepository::new(pool.clone())),
            managers: Box::new(ManagerRepository::tenant(pool)),
        })
    }
}
