use crate::{DbError, ReviewRepository, Result as DbErrorResult};

use am_core::{GeoPoint, Service};

use std::panic::Location;

use chrono::DateTime;
use error_location::ErrorLocation;
use sqlx::{FromRow, SqlitePool};
use uuid::Uuid;

const TABLE: &str = "services";

/// Meters per degree of latitude, used for the SQL pre-filter.
const METERS_PER_DEGREE_LATITUDE: f64 = 111_320.0;

#[derive(Debug, FromRow)]
struct ServiceRow {
    id: String,
    title: String,
    description: String,
    images: String,
    longitude: f64,
    latitude: f64,
    address: String,
    available_hours: String,
    service_provider_id: String,
    service_provider_name: String,
    created_at: i64,
    updated_at: i64,
}

impl ServiceRow {
    #[track_caller]
    fn into_service(self) -> DbErrorResult<Service> {
        let malformed = |message: String| DbError::MalformedRow {
            table: TABLE,
            message,
            location: ErrorLocation::from(Location::caller()),
        };

        Ok(Service {
            id: Uuid::parse_str(&self.id).map_err(|e| malformed(e.to_string()))?,
            title: self.title,
            description: self.description,
            images: serde_json::from_str(&self.images).map_err(|e| malformed(e.to_string()))?,
            location: GeoPoint {
                longitude: self.longitude,
                latitude: self.latitude,
                address: self.address,
            },
            available_hours: self.available_hours,
            service_provider_id: Uuid::parse_str(&self.service_provider_id)
                .map_err(|e| malformed(e.to_string()))?,
            service_provider_name: self.service_provider_name,
            reviews: Vec::new(),
            created_at: DateTime::from_timestamp(self.created_at, 0)
                .ok_or_else(|| malformed(format!("invalid timestamp {}", self.created_at)))?,
            updated_at: DateTime::from_timestamp(self.updated_at, 0)
                .ok_or_else(|| malformed(format!("invalid timestamp {}", self.updated_at)))?,
        })
    }
}

pub struct ServiceRepository {
    pool: SqlitePool,
}

impl ServiceRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, service: &Service) -> DbErrorResult<()> {
        let images = Self::encode_images(&service.images)?;

        sqlx::query(
            r#"
              INSERT INTO services (
                  id, title, description, images,
                  longitude, latitude, address, available_hours,
                  service_provider_id, service_provider_name,
                  created_at, updated_at
              ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
              "#,
        )
        .bind(service.id.to_string())
        .bind(&service.title)
        .bind(&service.description)
        .bind(images)
        .bind(service.location.longitude)
        .bind(service.location.latitude)
        .bind(&service.location.address)
        .bind(&service.available_hours)
        .bind(service.service_provider_id.to_string())
        .bind(&service.service_provider_name)
        .bind(service.created_at.timestamp())
        .bind(service.updated_at.timestamp())
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    /// Find a service with its reviews.
    pub async fn find_by_id(&self, id: Uuid) -> DbErrorResult<Option<Service>> {
        let row = sqlx::query_as::<_, ServiceRow>(
            r#"
              SELECT id, title, description, images,
                     longitude, latitude, address, available_hours,
                     service_provider_id, service_provider_name,
                     created_at, updated_at
              FROM services
              WHERE id = ?
              "#,
        )
        .bind(id.to_string())
        .fetch_optional(&self.pool)
        .await?;

        match row {
            Some(row) => {
                let mut service = row.into_service()?;
                service.reviews = ReviewRepository::new(self.pool.clone())
                    .find_by_service(service.id)
                    .await?;
                Ok(Some(service))
            }
            None => Ok(None),
        }
    }

    /// Services within `radius_meters` of a point, nearest first, with reviews.
    pub async fn find_near(
        &self,
        longitude: f64,
        latitude: f64,
        radius_meters: f64,
    ) -> DbErrorResult<Vec<Service>> {
        // Latitude band pre-filter; exact distance is checked below.
        let band = radius_meters / METERS_PER_DEGREE_LATITUDE;

        let rows = sqlx::query_as::<_, ServiceRow>(
            r#"
              SELECT id, title, description, images,
                     longitude, latitude, address, available_hours,
                     service_provider_id, service_provider_name,
                     created_at, updated_at
              FROM services
              WHERE latitude BETWEEN ? AND ?
              "#,
        )
        .bind(latitude - band)
        .bind(latitude + band)
        .fetch_all(&self.pool)
        .await?;

        let mut nearby = Vec::new();
        for row in rows {
            let service = row.into_service()?;
            let distance = service.location.distance_meters(longitude, latitude);
            if distance <= radius_meters {
                nearby.push((distance, service));
            }
        }
        nearby.sort_by(|a, b| a.0.total_cmp(&b.0));

        let reviews = ReviewRepository::new(self.pool.clone());
        let mut services = Vec::with_capacity(nearby.len());
        for (_, mut service) in nearby {
            service.reviews = reviews.find_by_service(service.id).await?;
            services.push(service);
        }

        Ok(services)
    }

    pub async fn update(&self, service: &Service) -> DbErrorResult<()> {
        let images = Self::encode_images(&service.images)?;

        sqlx::query(
            r#"
              UPDATE services
              SET title = ?, description = ?, images = ?,
                  longitude = ?, latitude = ?, address = ?,
                  available_hours = ?, updated_at = ?
              WHERE id = ?
              "#,
        )
        .bind(&service.title)
        .bind(&service.description)
        .bind(images)
        .bind(service.location.longitude)
        .bind(service.location.latitude)
        .bind(&service.location.address)
        .bind(&service.available_hours)
        .bind(service.updated_at.timestamp())
        .bind(service.id.to_string())
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    /// Delete a service and its reviews. Returns `true` when the service existed.
    pub async fn delete(&self, id: Uuid) -> DbErrorResult<bool> {
        let id_str = id.to_string();
        let mut tx = self.pool.begin().await?;

        sqlx::query("DELETE FROM service_reviews WHERE service_id = ?")
            .bind(&id_str)
            .execute(&mut *tx)
            .await?;

        let result = sqlx::query("DELETE FROM services WHERE id = ?")
            .bind(&id_str)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;

        Ok(result.rows_affected() > 0)
    }

    #[track_caller]
    fn encode_images(images: &[String]) -> DbErrorResult<String> {
        serde_json::to_string(images).map_err(|e| DbError::MalformedRow {
            table: TABLE,
            message: format!("cannot encode images: {}", e),
            location: ErrorLocation::from(Location::caller()),
        })
    }
}
