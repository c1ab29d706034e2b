use am_core::{Review, Role};

use serde::Serialize;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewDto {
    pub id: String,
    pub user_id: String,
    pub user_model: Role,
    pub name: String,
    pub rating: u8,
    pub comment: String,
    /// RFC 3339
    pub date: String,
}

impl From<Review> for ReviewDto {
    fn from(r: Review) -> Self {
        Self {
            id: r.id.to_string(),
            user_id: r.user_id.to_string(),
            user_model: r.user_role,
            name: r.name,
            rating: r.rating,
            comment: r.comment,
            date: r.created_at.to_rfc3339(),
        }
    }
}
