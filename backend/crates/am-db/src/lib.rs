pub mod connection;
pub mod error;
pub mod repositories;

pub use connection::central::{connect_central, migrate_central, migrate_tenant};
pub use connection::tenant_connection_manager::TenantConnectionManager;
pub use error::{DbError, Result};
pub use repositories::apartment_repository::ApartmentRepository;
pub use repositories::manager_repository::ManagerRepository;
pub use repositories::resident_repository::ResidentRepository;
pub use repositories::review_repository::ReviewRepository;
pub use repositories::service_provider_repository::ServiceProviderRepository;
pub use repositories::service_repository::ServiceRepository;
