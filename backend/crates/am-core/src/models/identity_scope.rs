use std::fmt;

/// The places an email is searched, in resolution order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IdentityScope {
    CentralServiceProviders,
    TenantResidents,
    TenantManagers,
    CentralManagers,
}

impl IdentityScope {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::CentralServiceProviders => "central_service_providers",
            Self::TenantResidents => "tenant_residents",
            Self::TenantManagers => "tenant_managers",
            Self::CentralManagers => "central_managers",
        }
    }
}

impl fmt::Display for IdentityScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
