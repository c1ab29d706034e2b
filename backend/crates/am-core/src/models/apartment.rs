use crate::{CoreError, CoreResult};

use std::panic::Location;

use chrono::{DateTime, Utc};
use error_location::ErrorLocation;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A tenant: one apartment complex with its own database.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Apartment {
    pub id: Uuid,
    pub apartment_name: String,
    pub created_at: DateTime<Utc>,
}

impl Apartment {
    #[track_caller]
    pub fn new(apartment_name: impl Into<String>) -> CoreResult<Self> {
        let apartment_name = apartment_name.into();
        Self::validate_name(&apartment_name)?;

        Ok(Self {
            id: Uuid::new_v4(),
            apartment_name,
            created_at: Utc::now(),
        })
    }

    /// Apartment names become directory names under the tenants dir.
    /// Returns why `apartment_name` cannot be one, if it cannot.
    pub fn invalid_name_reason(apartment_name: &str) -> Option<&'static str> {
        if apartment_name.trim().is_empty() {
            Some("name cannot be empty")
        } else if apartment_name.contains(['/', '\\', '\0']) {
            Some("name cannot contain path separators")
        } else if apartment_name == "." || apartment_name.contains("..") {
            Some("name cannot contain '..'")
        } else {
            None
        }
    }

    #[track_caller]
    pub fn validate_name(apartment_name: &str) -> CoreResult<()> {
        match Self::invalid_name_reason(apartment_name) {
            Some(reason) => Err(CoreError::Validation {
                message: format!("Invalid apartment name '{apartment_name}': {reason}"),
                field: Some("apartment_name".into()),
                location: ErrorLocation::from(Location::caller()),
            }),
            None => Ok(()),
        }
    }
}
