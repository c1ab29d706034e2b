use am_auth::{IdentityResolver, LoginService, TokenIssuer};
use am_config::ServicesConfig;
use am_core::TenantDirectory;
use am_db::{
    ApartmentRepository, ManagerRepository, ServiceProviderRepository, TenantConnectionManager,
};

use std::sync::Arc;

use log::info;
use sqlx::SqlitePool;

/// Shared state handed to every handler.
///
/// Created once at startup; [`AppState::close`] releases every pool at shutdown.
#[derive(Clone)]
pub struct AppState {
    pub central_pool: SqlitePool,
    pub tenants: Arc<TenantConnectionManager>,
    pub login: Arc<LoginService>,
    pub tokens: Arc<TokenIssuer>,
    pub services: ServicesConfig,
}

impl AppState {
    pub fn new(
        central_pool: SqlitePool,
        tenants: Arc<TenantConnectionManager>,
        tokens: Arc<TokenIssuer>,
        services: ServicesConfig,
    ) -> Self {
        let directory: Arc<dyn TenantDirectory> = tenants.clone();
        let resolver = IdentityResolver::new(
            Arc::new(ServiceProviderRepository::new(central_pool.clone())),
            Arc::new(ApartmentRepository::new(central_pool.clone())),
            directory,
            Arc::new(ManagerRepository::central(central_pool.clone())),
        );

        Self {
            login: Arc::new(LoginService::new(resolver, Arc::clone(&tokens))),
            central_pool,
            tenants,
            tokens,
            services,
        }
    }

    pub async fn close(&self) {
        let open = self.tenants.open_count().await;
        self.tenants.close_all().await;
        self.central_pool.close().await;
        info!("Closed central database and {open} tenant database(s)");
    }
}
