use am_auth::PublicIdentity;
use am_core::{RegistrationStatus, Role};

use serde::Serialize;

/// Public view of a logged-in identity
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserDto {
    pub id: String,
    pub name: String,
    pub email: String,
    pub apartment_complex_name: Option<String>,
    pub role: Role,
    pub status: Option<RegistrationStatus>,
    pub phone: Option<String>,
}

impl From<PublicIdentity> for UserDto {
    fn from(identity: PublicIdentity) -> Self {
        Self {
            id: identity.id.to_string(),
            name: identity.name,
            email: identity.email,
            apartment_complex_name: identity.apartment_complex_name,
            role: identity.role,
            status: identity.status,
            phone: identity.phone,
        }
    }
}
