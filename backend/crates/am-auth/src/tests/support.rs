use am_core::{
    CoreError, CoreResult, Identity, IdentityScope, IdentityStore, RegistrationStatus, Role,
    TenantDirectory, TenantRegistry, TenantStores,
};

use std::collections::HashMap;
use std::panic::Location;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use error_location::ErrorLocation;
use uuid::Uuid;

pub const TEST_SECRET: &[u8] = b"test-secret-key-at-least-32-bytes";

pub fn identity(email: &str, role: Role, status: Option<RegistrationStatus>) -> Identity {
    Identity {
        id: Uuid::new_v4(),
        name: format!("{role} {email}"),
        email: email.to_string(),
        password_hash: "malformed-test-hash".to_string(),
        phone: Some("555-0100".to_string()),
        role,
        status,
        apartment_complex_name: None,
    }
}

pub fn with_password(mut identity: Identity, password: &str) -> Identity {
    identity.password_hash = crate::hash_password(password).unwrap();
    identity
}

fn storage_error(message: &str) -> CoreError {
    CoreError::Storage {
        message: message.to_string(),
        location: ErrorLocation::from(Location::caller()),
    }
}

/// In-memory identity store that counts lookups.
pub struct MemoryStore {
    scope: IdentityScope,
    identities: Vec<Identity>,
    calls: Arc<AtomicUsize>,
    failing: bool,
}

impl MemoryStore {
    pub fn new(scope: IdentityScope, identities: Vec<Identity>) -> Self {
        Self {
            scope,
            identities,
            calls: Arc::new(AtomicUsize::new(0)),
            failing: false,
        }
    }

    pub fn failing(scope: IdentityScope) -> Self {
        Self {
            failing: true,
            ..Self::new(scope, Vec::new())
        }
    }

    pub fn calls(&self) -> Arc<AtomicUsize> {
        Arc::clone(&self.calls)
    }
}

#[async_trait]
impl IdentityStore for MemoryStore {
    fn scope(&self) -> IdentityScope {
        self.scope
    }

    async fn find_by_email(&self, email: &str) -> CoreResult<Option<Identity>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.failing {
            return Err(storage_error("store unavailable"));
        }
        Ok(self.identities.iter().find(|i| i.email == email).cloned())
    }
}

pub struct MemoryRegistry {
    names: Vec<String>,
    calls: Arc<AtomicUsize>,
    failing: bool,
}

impl MemoryRegistry {
    pub fn new(names: &[&str]) -> Self {
        Self {
            names: names.iter().map(|n| n.to_string()).collect(),
            calls: Arc::new(AtomicUsize::new(0)),
            failing: false,
        }
    }

    pub fn failing() -> Self {
        Self {
            failing: true,
            ..Self::new(&[])
        }
    }

    pub fn calls(&self) -> Arc<AtomicUsize> {
        Arc::clone(&self.calls)
    }
}

#[async_trait]
impl TenantRegistry for MemoryRegistry {
    async fn list_apartment_names(&self) -> CoreResult<Vec<String>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.failing {
            return Err(storage_error("registry unavailable"));
        }
        Ok(self.names.clone())
    }
}

/// Tenants keyed by apartment name: (residents, managers).
#[derive(Default)]
pub struct MemoryDirectory {
    tenants: HashMap<String, (Vec<Identity>, Vec<Identity>)>,
    failing_tenant: Option<String>,
    opened: Arc<Mutex<Vec<String>>>,
}

impl MemoryDirectory {
    pub fn with_tenant(
        mut self,
        apartment: &str,
        residents: Vec<Identity>,
        managers: Vec<Identity>,
    ) -> Self {
        self.tenants
            .insert(apartment.to_string(), (residents, managers));
        self
    }

    pub fn with_failing_tenant(mut self, apartment: &str) -> Self {
        self.failing_tenant = Some(apartment.to_string());
        self
    }

    pub fn opened(&self) -> Arc<Mutex<Vec<String>>> {
        Arc::clone(&self.opened)
    }
}

#[async_trait]
impl TenantDirectory for MemoryDirectory {
    async fn tenant_stores(&self, apartment_name: &str) -> CoreResult<TenantStores> {
        self.opened.lock().unwrap().push(apartment_name.to_string());

        if self.failing_tenant.as_deref() == Some(apartment_name) {
            return Ok(TenantStores {
                residents: Box::new(MemoryStore::failing(IdentityScope::TenantResidents)),
                managers: Box::new(MemoryStore::failing(IdentityScope::TenantManagers)),
            });
        }

        let (residents, managers) = self
            .tenants
            .get(apartment_name)
            .cloned()
            .unwrap_or_default();

        Ok(TenantStores {
            residents: Box::new(MemoryStore::new(IdentityScope::TenantResidents, residents)),
            managers: Box::new(MemoryStore::new(IdentityScope::TenantManagers, managers)),
        })
    }
}
