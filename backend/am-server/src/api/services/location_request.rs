use crate::ApiError;

use am_core::GeoPoint;

use serde::Deserialize;

/// `[longitude, latitude]`, either as a JSON array or as a JSON-encoded
/// string (the form multipart clients send).
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum Coordinates {
    List(Vec<f64>),
    Encoded(String),
}

#[derive(Debug, Clone, Deserialize)]
pub struct LocationRequest {
    pub coordinates: Coordinates,

    #[serde(default)]
    pub address: Option<String>,
}

impl LocationRequest {
    /// Resolve to a point. A blank address falls back to `fallback_address`,
    /// and without one to the default address.
    #[track_caller]
    pub fn into_geo_point(self, fallback_address: Option<String>) -> Result<GeoPoint, ApiError> {
        let coordinates = match self.coordinates {
            Coordinates::List(values) => values,
            Coordinates::Encoded(text) => serde_json::from_str::<Vec<f64>>(&text).map_err(|_| {
                ApiError::validation(
                    "location.coordinates must be [longitude, latitude]",
                    "location.coordinates",
                )
            })?,
        };

        let address = self
            .address
            .filter(|a| !a.trim().is_empty())
            .or(fallback_address);

        Ok(GeoPoint::from_coordinates(&coordinates, address)?)
    }
}
