use crate::Result as DbErrorResult;
use crate::TenantConnectionManager;

use am_core::{Apartment, CoreResult, TenantRegistry};

use async_trait::async_trait;
use sqlx::SqlitePool;

/// The central tenant registry.
pub struct ApartmentRepository {
    pool: SqlitePool,
}

impl ApartmentRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Register an apartment. Refuses names that cannot be a tenant directory.
    pub async fn create(&self, apartment: &Apartment) -> DbErrorResult<()> {
        TenantConnectionManager::validate_apartment_name(&apartment.apartment_name)?;

        sqlx::query("INSERT INTO apartments (id, apartment_name, created_at) VALUES (?, ?, ?)")
            .bind(apartment.id.to_string())
            .bind(&apartment.apartment_name)
            .bind(apartment.created_at.timestamp())
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    /// Apartment names only, in registration order.
    pub async fn find_all_names(&self) -> DbErrorResult<Vec<String>> {
        let names: Vec<String> =
            sqlx::query_scalar("SELECT apartment_name FROM apartments ORDER BY rowid ASC")
                .fetch_all(&self.pool)
                .await?;

        Ok(names)
    }
}

#[async_trait]
impl TenantRegistry for ApartmentRepository {
    async fn list_apartment_names(&self) -> CoreResult<Vec<String>> {
        Ok(self.find_all_names().await?)
    }
}
