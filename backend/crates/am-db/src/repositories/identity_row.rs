//! Row shape shared by every identity table.

use crate::{DbError, Result as DbErrorResult};

use am_core::{Identity, RegistrationStatus, Role};

use std::panic::Location;
use std::str::FromStr;

use chrono::Utc;
use error_location::ErrorLocation;
use sqlx::{FromRow, SqlitePool};
use uuid::Uuid;

#[derive(Debug, FromRow)]
pub struct IdentityRow {
    pub id: String,
    pub name: String,
    pub email: String,
    pub password_hash: String,
    pub phone: Option<String>,
    pub status: Option<String>,
}

impl IdentityRow {
    #[track_caller]
    pub fn into_identity(self, table: &'static str, role: Role) -> DbErrorResult<Identity> {
        let id = Uuid::parse_str(&self.id).map_err(|e| DbError::MalformedRow {
            table,
            message: format!("invalid id '{}': {}", self.id, e),
            location: ErrorLocation::from(Location::caller()),
        })?;

        let status = self
            .status
            .as_deref()
            .map(RegistrationStatus::from_str)
            .transpose()
            .map_err(|e| DbError::MalformedRow {
                table,
                message: e.to_string(),
                location: ErrorLocation::from(Location::caller()),
            })?;

        Ok(Identity {
            id,
            name: self.name,
            email: self.email,
            password_hash: self.password_hash,
            phone: self.phone,
            role,
            status,
            apartment_complex_name: None,
        })
    }
}

/// Look up one row by email in a table that has a `status` column.
pub(crate) async fn find_with_status(
    pool: &SqlitePool,
    table: &'static str,
    email: &str,
) -> DbErrorResult<Option<IdentityRow>> {
    let sql = format!(
        "SELECT id, name, email, password_hash, phone, status FROM {table} WHERE email = ?"
    );

    let row = sqlx::query_as::<_, IdentityRow>(&sql)
        .bind(email)
        .fetch_optional(pool)
        .await?;

    Ok(row)
}

pub(crate) async fn insert_with_status(
    pool: &SqlitePool,
    table: &'static str,
    identity: &Identity,
) -> DbErrorResult<()> {
    let sql = format!(
        "INSERT INTO {table} (id, name, email, password_hash, phone, status, created_at) \
         VALUES (?, ?, ?, ?, ?, ?, ?)"
    );

    sqlx::query(&sql)
        .bind(identity.id.to_string())
        .bind(&identity.name)
        .bind(&identity.email)
        .bind(&identity.password_hash)
        .bind(&identity.phone)
        .bind(identity.status.unwrap_or_default().as_str())
        .bind(Utc::now().timestamp())
        .execute(pool)
        .await?;

    Ok(())
}

