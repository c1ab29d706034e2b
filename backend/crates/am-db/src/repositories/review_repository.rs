use crate::{DbError, Result as DbErrorResult};

use am_core::{Review, Role};

use std::panic::Location;
use std::str::FromStr;

use chrono::DateTime;
use error_location::ErrorLocation;
use sqlx::{FromRow, SqlitePool};
use uuid::Uuid;

const TABLE: &str = "service_reviews";

#[derive(Debug, FromRow)]
struct ReviewRow {
    id: String,
    service_id: String,
    user_id: String,
    user_role: String,
    name: String,
    rating: i64,
    comment: String,
    created_at: i64,
}

impl ReviewRow {
    #[track_caller]
    fn into_review(self) -> DbErrorResult<Review> {
        let malformed = |message: String| DbError::MalformedRow {
            table: TABLE,
            message,
            location: ErrorLocation::from(Location::caller()),
        };

        Ok(Review {
            id: Uuid::parse_str(&self.id).map_err(|e| malformed(e.to_string()))?,
            service_id: Uuid::parse_str(&self.service_id).map_err(|e| malformed(e.to_string()))?,
            user_id: Uuid::parse_str(&self.user_id).map_err(|e| malformed(e.to_string()))?,
            user_role: Role::from_str(&self.user_role).map_err(|e| malformed(e.to_string()))?,
            name: self.name,
            rating: u8::try_from(self.rating).map_err(|e| malformed(e.to_string()))?,
            comment: self.comment,
            created_at: DateTime::from_timestamp(self.created_at, 0)
                .ok_or_else(|| malformed(format!("invalid timestamp {}", self.created_at)))?,
        })
    }
}

pub struct ReviewRepository {
    pool: SqlitePool,
}

impl ReviewRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, review: &Review) -> DbErrorResult<()> {
        sqlx::query(
            r#"
              INSERT INTO service_reviews (
                  id, service_id, user_id, user_role, name, rating, comment, created_at
              ) VALUES (?, ?, ?, ?, ?, ?, ?, ?)
              "#,
        )
        .bind(review.id.to_string())
        .bind(review.service_id.to_string())
        .bind(review.user_id.to_string())
        .bind(review.user_role.as_str())
        .bind(&review.name)
        .bind(i64::from(review.rating))
        .bind(&review.comment)
        .bind(review.created_at.timestamp())
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    pub async fn find_by_service(&self, service_id: Uuid) -> DbErrorResult<Vec<Review>> {
        let rows = sqlx::query_as::<_, ReviewRow>(
            r#"
              SELECT id, service_id, user_id, user_role, name, rating, comment, created_at
              FROM service_reviews
              WHERE service_id = ?
              ORDER BY created_at ASC, rowid ASC
              "#,
        )
        .bind(service_id.to_string())
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter().map(ReviewRow::into_review).collect()
    }
}
