use serde::Deserialize;

/// GET /api/service query. Kept as strings so that missing and malformed
/// values produce the API's own messages.
#[derive(Debug, Default, Deserialize)]
pub struct NearQuery {
    #[serde(default)]
    pub latitude: Option<String>,

    #[serde(default)]
    pub longitude: Option<String>,
}
