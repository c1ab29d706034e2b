//! Cross-database identity lookup.
//!
//! An email is searched in a fixed order and the first match wins:
//!
//! 1. central service providers
//! 2. every registered apartment, in registry order: its residents, then its managers
//! 3. central managers
//!
//! Tenant databases are opened on demand through the [`TenantDirectory`]. The scan
//! is sequential and any store failure aborts it; a failing tenant is never skipped.

use crate::Result as AuthErrorResult;

use am_core::{Identity, IdentityStore, TenantDirectory, TenantRegistry};

use std::sync::Arc;

use log::debug;

pub struct IdentityResolver {
    service_providers: Arc<dyn IdentityStore>,
    registry: Arc<dyn TenantRegistry>,
    directory: Arc<dyn TenantDirectory>,
    central_managers: Arc<dyn IdentityStore>,
}

impl IdentityResolver {
    pub fn new(
        service_providers: Arc<dyn IdentityStore>,
        registry: Arc<dyn TenantRegistry>,
        directory: Arc<dyn TenantDirectory>,
        central_managers: Arc<dyn IdentityStore>,
    ) -> Self {
        Self {
            service_providers,
            registry,
            directory,
            central_managers,
        }
    }

    /// Resolve `email` to the first matching identity, or `None`.
    pub async fn resolve(&self, email: &str) -> AuthErrorResult<Option<Identity>> {
        if let Some(identity) = Self::search(self.service_providers.as_ref(), email).await? {
            return Ok(Some(identity));
        }

        if let Some(identity) = self.scan_tenants(email).await? {
            return Ok(Some(identity));
        }

        Self::search(self.central_managers.as_ref(), email).await
    }

    async fn scan_tenants(&self, email: &str) -> AuthErrorResult<Option<Identity>> {
        let apartments = self.registry.list_apartment_names().await?;
        debug!("Scanning {} apartment(s) for login", apartments.len());

        for apartment in apartments {
            debug!("Searching apartment '{apartment}'");
            let stores = self.directory.tenant_stores(&apartment).await?;

            for store in [&stores.residents, &stores.managers] {
                if let Some(identity) = Self::search(store.as_ref(), email).await? {
                    return Ok(Some(identity.in_apartment(apartment)));
                }
            }
        }

        Ok(None)
    }

    async fn search(store: &dyn IdentityStore, email: &str) -> AuthErrorResult<Option<Identity>> {
        let found = store.find_by_email(email).await?;
        if found.is_some() {
            debug!("Identity matched in {}", store.scope());
        }
        Ok(found)
    }
}
