pub mod error;
pub mod models;
pub mod repository;

pub use error::{CoreError, Result as CoreResult};
pub use models::apartment::Apartment;
pub use models::geo_point::GeoPoint;
pub use models::identity::Identity;
pub use models::identity_scope::IdentityScope;
pub use models::registration_status::RegistrationStatus;
pub use models::review::Review;
pub use models::role::Role;
pub use models::service::Service;
pub use repository::{IdentityStore, TenantDirectory, TenantRegistry, TenantStores};

#[cfg(test)]
mod tests;
