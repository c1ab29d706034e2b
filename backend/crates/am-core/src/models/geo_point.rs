use crate::{CoreError, CoreResult};

use std::panic::Location;

use error_location::ErrorLocation;
use serde::{Deserialize, Serialize};

const EARTH_RADIUS_METERS: f64 = 6_371_008.8;

pub const DEFAULT_ADDRESS: &str = "Unknown Location";

/// A point on the globe with a human-readable address.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GeoPoint {
    pub longitude: f64,
    pub latitude: f64,
    pub address: String,
}

impl GeoPoint {
    #[track_caller]
    pub fn new(longitude: f64, latitude: f64, address: Option<String>) -> CoreResult<Self> {
        if !longitude.is_finite() || !(-180.0..=180.0).contains(&longitude) {
            return Err(CoreError::Validation {
                message: format!("longitude must be between -180 and 180, got {longitude}"),
                field: Some("location.coordinates".into()),
                location: ErrorLocation::from(Location::caller()),
            });
        }
        if !latitude.is_finite() || !(-90.0..=90.0).contains(&latitude) {
            return Err(CoreError::Validation {
                message: format!("latitude must be between -90 and 90, got {latitude}"),
                field: Some("location.coordinates".into()),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        let address = address
            .map(|a| a.trim().to_string())
            .filter(|a| !a.is_empty())
            .unwrap_or_else(|| DEFAULT_ADDRESS.to_string());

        Ok(Self {
            longitude,
            latitude,
            address,
        })
    }

    /// Build from GeoJSON-ordered `[longitude, latitude]` coordinates.
    #[track_caller]
    pub fn from_coordinates(coordinates: &[f64], address: Option<String>) -> CoreResult<Self> {
        match coordinates {
            [longitude, latitude] => Self::new(*longitude, *latitude, address),
            _ => Err(CoreError::Validation {
                message: format!(
                    "coordinates must be [longitude, latitude], got {} values",
                    coordinates.len()
                ),
                field: Some("location.coordinates".into()),
                location: ErrorLocation::from(Location::caller()),
            }),
        }
    }

    /// Great-circle distance in meters (haversine).
    pub fn distance_meters(&self, longitude: f64, latitude: f64) -> f64 {
        let lat1 = self.latitude.to_radians();
        let lat2 = latitude.to_radians();
        let d_lat = (latitude - self.latitude).to_radians();
        let d_lng = (longitude - self.longitude).to_radians();

        let a = (d_lat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (d_lng / 2.0).sin().powi(2);
        2.0 * EARTH_RADIUS_METERS * a.sqrt().asin()
    }
}
