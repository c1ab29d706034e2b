use crate::{CoreError, CoreResult, Role};

use std::panic::Location;

use chrono::{DateTime, Utc};
use error_location::ErrorLocation;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub const MIN_RATING: u8 = 1;
pub const MAX_RATING: u8 = 5;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Review {
    pub id: Uuid,
    pub service_id: Uuid,

    pub user_id: Uuid,
    pub user_role: Role,
    pub name: String,

    pub rating: u8,
    pub comment: String,

    pub created_at: DateTime<Utc>,
}

impl Review {
    #[track_caller]
    pub fn new(
        service_id: Uuid,
        user_id: Uuid,
        user_role: Role,
        name: String,
        rating: u8,
        comment: String,
    ) -> CoreResult<Self> {
        if !(MIN_RATING..=MAX_RATING).contains(&rating) {
            return Err(CoreError::Validation {
                message: format!("rating must be between {MIN_RATING} and {MAX_RATING}, got {rating}"),
                field: Some("rating".into()),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        Ok(Self {
            id: Uuid::new_v4(),
            service_id,
            user_id,
            user_role,
            name,
            rating,
            comment,
            created_at: Utc::now(),
        })
    }
}
