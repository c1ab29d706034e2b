use crate::{AuthError, Result as AuthErrorResult};

use am_core::{Identity, RegistrationStatus, Role};

use std::panic::Location;

use error_location::ErrorLocation;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

const MAX_APARTMENT_NAME_LEN: usize = 128;

/// Session token payload.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SessionClaims {
    /// Identity id
    pub id: Uuid,
    pub role: Role,
    /// Apartment the identity logged in through, `null` for central identities
    pub apartment_complex_name: Option<String>,
    pub status: Option<RegistrationStatus>,
    pub phone: Option<String>,
    /// Issued at timestamp (Unix)
    pub iat: i64,
    /// Expiration timestamp (Unix)
    pub exp: i64,
}

impl SessionClaims {
    pub fn for_identity(identity: &Identity, issued_at: i64, ttl_secs: i64) -> Self {
        Self {
            id: identity.id,
            role: identity.role,
            apartment_complex_name: identity.apartment_complex_name.clone(),
            status: identity.status,
            phone: identity.phone.clone(),
            iat: issued_at,
            exp: issued_at.saturating_add(ttl_secs),
        }
    }

    /// Validate claims after signature verification.
    #[track_caller]
    pub fn validate(&self) -> AuthErrorResult<()> {
        if let Some(apartment) = &self.apartment_complex_name {
            if apartment.is_empty() {
                return Err(AuthError::InvalidClaim {
                    claim: "apartmentComplexName".to_string(),
                    message: "apartmentComplexName cannot be empty".to_string(),
                    location: ErrorLocation::from(Location::caller()),
                });
            }
            if apartment.len() > MAX_APARTMENT_NAME_LEN {
                return Err(AuthError::InvalidClaim {
                    claim: "apartmentComplexName".to_string(),
                    message: "apartmentComplexName exceeds maximum length".to_string(),
                    location: ErrorLocation::from(Location::caller()),
                });
            }
        }

        // Tokens are only ever issued past the status gate.
        if self.role.requires_approval() && self.status != Some(RegistrationStatus::Approved) {
            return Err(AuthError::InvalidClaim {
                claim: "status".to_string(),
                message: format!("{} token without approved status", self.role),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        if self.exp <= self.iat {
            return Err(AuthError::InvalidClaim {
                claim: "exp".to_string(),
                message: "exp must be after iat".to_string(),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        Ok(())
    }
}
