//! Capabilities the identity resolver needs from storage.
//!
//! The database crate implements these against SQLite; tests implement them
//! in memory.

use crate::{CoreResult, Identity, IdentityScope};

use async_trait::async_trait;

/// One searchable set of identities (e.g. a tenant's residents).
#[async_trait]
pub trait IdentityStore: Send + Sync {
    /// Scope this store searches, used for logging.
    fn scope(&self) -> IdentityScope;

    /// Find the identity registered under `email` in this store.
    async fn find_by_email(&self, email: &str) -> CoreResult<Option<Identity>>;
}

/// Central list of known tenants.
#[async_trait]
pub trait TenantRegistry: Send + Sync {
    /// All apartment names, in the order they are scanned during login.
    async fn list_apartment_names(&self) -> CoreResult<Vec<String>>;
}

/// The identity stores that live inside one tenant database.
pub struct TenantStores {
    pub residents: Box<dyn IdentityStore>,
    pub managers: Box<dyn IdentityStore>,
}

/// Opens (or reuses) the database belonging to a tenant.
#[async_trait]
pub trait TenantDirectory: Send + Sync {
    async fn tenant_stores(&self, apartment_name: &str) -> CoreResult<TenantStores>;
}
