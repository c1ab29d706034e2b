use crate::{RegistrationStatus, Role};

use uuid::Uuid;

/// A principal able to authenticate: a service provider, resident or manager.
///
/// Not `Serialize`: the password hash must never reach a response
/// body. HTTP handlers project it into their own DTOs.
#[derive(Debug, Clone, PartialEq)]
pub struct Identity {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub password_hash: String,
    pub phone: Option<String>,
    pub role: Role,
    /// `None` for service providers, which have no approval workflow.
    pub status: Option<RegistrationStatus>,
    /// Apartment the identity was resolved in. `None` for central identities.
    pub apartment_complex_name: Option<String>,
}

impl Identity {
    /// Stamp the originating apartment onto a tenant-scoped identity.
    pub fn in_apartment(mut self, apartment_name: impl Into<String>) -> Self {
        self.apartment_complex_name = Some(apartment_name.into());
        self
    }

    pub fn is_approved(&self) -> bool {
        self.status == Some(RegistrationStatus::Approved)
    }

    /// True when the status gate blocks this identity from completing login.
    pub fn is_blocked_by_status(&self) -> bool {
        self.role.requires_approval() && !self.is_approved()
    }
}
