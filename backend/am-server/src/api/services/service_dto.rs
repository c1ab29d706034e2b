use crate::ReviewDto;

use am_core::{GeoPoint, Service};

use serde::Serialize;

/// GeoJSON point with address
#[derive(Debug, Serialize)]
pub struct GeoPointDto {
    #[serde(rename = "type")]
    pub kind: &'static str,
    /// `[longitude, latitude]`
    pub coordinates: [f64; 2],
    pub address: String,
}

impl From<GeoPoint> for GeoPointDto {
    fn from(p: GeoPoint) -> Self {
        Self {
            kind: "Point",
            coordinates: [p.longitude, p.latitude],
            address: p.address,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceDto {
    pub id: String,
    pub title: String,
    pub description: String,
    pub images: Vec<String>,
    pub location: GeoPointDto,
    pub available_hours: String,
    pub service_provider: String,
    pub service_provider_name: String,
    pub reviews: Vec<ReviewDto>,
    pub average_rating: Option<f64>,
    pub created_at: String,
    pub updated_at: String,
}

impl From<Service> for ServiceDto {
    fn from(s: Service) -> Self {
        let average_rating = s.average_rating();
        Self {
            id: s.id.to_string(),
            title: s.title,
            description: s.description,
            images: s.images,
            location: s.location.into(),
            available_hours: s.available_hours,
            service_provider: s.service_provider_id.to_string(),
            service_provider_name: s.service_provider_name,
            reviews: s.reviews.into_iter().map(ReviewDto::from).collect(),
            average_rating,
            created_at: s.created_at.to_rfc3339(),
            updated_at: s.updated_at.to_rfc3339(),
        }
    }
}
