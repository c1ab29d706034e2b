use crate::{CoreError, CoreResult};

use std::fmt;
use std::panic::Location;
use std::str::FromStr;

use error_location::ErrorLocation;
use serde::{Deserialize, Serialize};

/// Role an identity authenticates as.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Role {
    ServiceProvider,
    Resident,
    Manager,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ServiceProvider => "ServiceProvider",
            Self::Resident => "Resident",
            Self::Manager => "Manager",
        }
    }

    /// Residents and managers must be approved before they can log in.
    pub fn requires_approval(&self) -> bool {
        matches!(self, Self::Resident | Self::Manager)
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = CoreError;

    #[track_caller]
    fn from_str(s: &str) -> CoreResult<Self> {
        match s.trim().to_lowercase().as_str() {
            "serviceprovider" | "service_provider" | "service-provider" => {
                Ok(Self::ServiceProvider)
            }
            "resident" => Ok(Self::Resident),
            "manager" => Ok(Self::Manager),
            _ => Err(CoreError::InvalidRole {
                value: s.to_string(),
                location: ErrorLocation::from(Location::caller()),
            }),
        }
    }
}
