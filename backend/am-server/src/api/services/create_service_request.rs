use crate::LocationRequest;

use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateServiceRequest {
    #[serde(default)]
    pub title: Option<String>,

    #[serde(default)]
    pub description: Option<String>,

    pub location: LocationRequest,

    #[serde(default)]
    pub available_hours: Option<String>,

    /// Already-uploaded image URLs
    #[serde(default)]
    pub images: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct CreateServiceResponse {
    pub message: String,
    pub images: Vec<String>,
}
