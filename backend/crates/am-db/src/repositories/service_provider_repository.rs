use crate::Result as DbErrorResult;
use crate::repositories::identity_row::IdentityRow;

use am_core::{CoreResult, Identity, IdentityScope, IdentityStore, Role};

use async_trait::async_trait;
use chrono::Utc;
use sqlx::SqlitePool;
use uuid::Uuid;

const TABLE: &str = "service_providers";

/// Service providers are central; they carry no registration status.
pub struct ServiceProviderRepository {
    pool: SqlitePool,
}

impl ServiceProviderRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, provider: &Identity) -> DbErrorResult<()> {
        sqlx::query(
            r#"
              INSERT INTO service_providers (id, name, email, password_hash, phone, created_at)
              VALUES (?, ?, ?, ?, ?, ?)
              "#,
        )
        .bind(provider.id.to_string())
        .bind(&provider.name)
        .bind(&provider.email)
        .bind(&provider.password_hash)
        .bind(&provider.phone)
        .bind(Utc::now().timestamp())
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    pub async fn find_by_id(&self, id: Uuid) -> DbErrorResult<Option<Identity>> {
        let row = sqlx::query_as::<_, IdentityRow>(
            r#"
              SELECT id, name, email, password_hash, phone, NULL AS status
              FROM service_providers
              WHERE id = ?
              "#,
        )
        .bind(id.to_string())
        .fetch_optional(&self.pool)
        .await?;

        row.map(|r| r.into_identity(TABLE, Role::ServiceProvider))
            .transpose()
    }

    pub async fn find_by_email(&self, email: &str) -> DbErrorResult<Option<Identity>> {
        let row = sqlx::query_as::<_, IdentityRow>(
            r#"
              SELECT id, name, email, password_hash, phone, NULL AS status
              FROM service_providers
              WHERE email = ?
              "#,
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await?;

        row.map(|r| r.into_identity(TABLE, Role::ServiceProvider))
            .transpose()
    }
}

#[async_trait]
impl IdentityStore for ServiceProviderRepository {
    fn scope(&self) -> IdentityScope {
        IdentityScope::CentralServiceProviders
    }

    async fn find_by_email(&self, email: &str) -> CoreResult<Option<Identity>> {
        Ok(ServiceProviderRepository::find_by_email(self, email).await?)
    }
}
