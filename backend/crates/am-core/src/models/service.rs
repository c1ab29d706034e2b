use crate::{GeoPoint, Review};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A service offered by a central service provider.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Service {
    pub id: Uuid,

    pub title: String,
    pub description: String,
    pub images: Vec<String>,
    pub location: GeoPoint,
    pub available_hours: String,

    pub service_provider_id: Uuid,
    pub service_provider_name: String,

    #[serde(default)]
    pub reviews: Vec<Review>,

    // Audit
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Service {
    pub fn new(
        title: String,
        description: String,
        images: Vec<String>,
        location: GeoPoint,
        available_hours: String,
        service_provider_id: Uuid,
        service_provider_name: String,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            title,
            description,
            images,
            location,
            available_hours,
            service_provider_id,
            service_provider_name,
            reviews: Vec::new(),
            created_at: now,
            updated_at: now,
        }
    }

    pub fn is_owned_by(&self, service_provider_id: Uuid) -> bool {
        self.service_provider_id == service_provider_id
    }

    pub fn average_rating(&self) -> Option<f64> {
        if self.reviews.is_empty() {
            return None;
        }
        let total: u32 = self.reviews.iter().map(|r| u32::from(r.rating)).sum();
        Some(f64::from(total) / self.reviews.len() as f64)
    }
}
