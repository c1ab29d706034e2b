use crate::Result as DbErrorResult;
use crate::repositories::identity_row;

use am_core::{CoreResult, Identity, IdentityScope, IdentityStore, Role};

use async_trait::async_trait;
use sqlx::SqlitePool;

/// Managers live either inside a tenant database or in the central one.
/// Both tables share a schema.
pub struct ManagerRepository {
    pool: SqlitePool,
    table: &'static str,
    scope: IdentityScope,
}

impl ManagerRepository {
    /// Managers of one apartment.
    pub fn tenant(pool: SqlitePool) -> Self {
        Self {
            pool,
            table: "managers",
            scope: IdentityScope::TenantManagers,
        }
    }

    /// Managers not bound to any apartment.
    pub fn central(pool: SqlitePool) -> Self {
        Self {
            pool,
            table: "central_managers",
            scope: IdentityScope::CentralManagers,
        }
    }

    pub async fn create(&self, manager: &Identity) -> DbErrorResult<()> {
        identity_row::insert_with_status(&self.pool, self.table, manager).await
    }

    pub async fn find_by_email(&self, email: &str) -> DbErrorResult<Option<Identity>> {
        identity_row::find_with_status(&self.pool, self.table, email)
            .await?
            .map(|row| row.into_identity(self.table, Role::Manager))
            .transpose()
    }
}

#[async_trait]
impl IdentityStore for ManagerRepository {
    fn scope(&self) -> IdentityScope {
        self.scope
    }

    async fn find_by_email(&self, email: &str) -> CoreResult<Option<Identity>> {
        Ok(ManagerRepository::find_by_email(self, email).await?)
    }
}
