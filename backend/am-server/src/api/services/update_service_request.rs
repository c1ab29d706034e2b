use crate::{LocationRequest, ServiceDto};

use serde::{Deserialize, Serialize};

/// Partial update. Absent or empty fields keep their current value;
/// a non-empty `images` list replaces the existing images.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateServiceRequest {
    #[serde(default)]
    pub title: Option<String>,

    #[serde(default)]
    pub description: Option<String>,

    #[serde(default)]
    pub location: Option<LocationRequest>,

    #[serde(default)]
    pub available_hours: Option<String>,

    #[serde(default)]
    pub images: Option<Vec<String>>,
}

#[derive(Debug, Serialize)]
pub struct UpdateServiceResponse {
    pub message: String,
    pub service: ServiceDto,
}
