use crate::Result as DbErrorResult;
use crate::repositories::identity_row;

use am_core::{CoreResult, Identity, IdentityScope, IdentityStore, Role};

use async_trait::async_trait;
use sqlx::SqlitePool;

const TABLE: &str = "residents";

/// Residents of one apartment, stored in that apartment's database.
pub struct ResidentRepository {
    pool: SqlitePool,
}

impl ResidentRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, resident: &Identity) -> DbErrorResult<()> {
        identity_row::insert_with_status(&self.pool, TABLE, resident).await
    }

    pub async fn find_by_email(&self, email: &str) -> DbErrorResult<Option<Identity>> {
        identity_row::find_with_status(&self.pool, TABLE, email)
            .await?
            .map(|row| row.into_identity(TABLE, Role::Resident))
            .transpose()
    }
}

#[async_trait]
impl IdentityStore for ResidentRepository {
    fn scope(&self) -> IdentityScope {
        IdentityScope::TenantResidents
    }

    async fn find_by_email(&self, email: &str) -> CoreResult<Option<Identity>> {
        Ok(ResidentRepository::find_by_email(self, email).await?)
    }
}
