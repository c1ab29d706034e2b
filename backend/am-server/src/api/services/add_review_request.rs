use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct AddReviewRequest {
    #[serde(default)]
    pub rating: Option<i64>,

    #[serde(default)]
    pub comment: Option<String>,

    /// Reviewer role; defaults to the role in the session token
    #[serde(default)]
    pub role: Option<String>,
}
