#![allow(dead_code)]

//! Test infrastructure for am-server API tests

use am_auth::{TokenIssuer, hash_password};
use am_config::ServicesConfig;
use am_core::{Apartment, GeoPoint, Identity, RegistrationStatus, Role, Service};
use am_db::{
    ApartmentRepository, ManagerRepository, ResidentRepository, ServiceProviderRepository,
    ServiceRepository, TenantConnectionManager,
};
use am_server::{AppState, build_router};

use std::sync::Arc;

use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode},
};
use http_body_util::BodyExt;
use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use tempfile::TempDir;
use tower::ServiceExt;
use uuid::Uuid;

pub const TEST_SECRET: &[u8] = b"test-secret-key-at-least-32-bytes";

/// App state backed by an in-memory central database and tenant databases
/// under a temp directory. Keep the `TempDir` alive for the whole test.
pub struct TestApp {
    pub state: AppState,
    pub tenants_dir: TempDir,
}

impl TestApp {
    pub async fn new() -> Self {
        let central_pool = create_central_pool().await;
        let tenants_dir = TempDir::new().expect("Failed to create temp dir");
        let tenants = Arc::new(TenantConnectionManager::new(tenants_dir.path()));
        let tokens = Arc::new(TokenIssuer::with_hs256(
            TEST_SECRET,
            TokenIssuer::DEFAULT_TTL,
        ));

        Self {
            state: AppState::new(central_pool, tenants, tokens, ServicesConfig::default()),
            tenants_dir,
        }
    }

    pub fn router(&self) -> Router {
        build_router(self.state.clone())
    }

    pub fn token_for(&self, identity: &Identity) -> String {
        self.state.tokens.issue(identity).expect("Failed to issue token")
    }

    // -------------------------------------------------------------------------
    // Seeding
    // -------------------------------------------------------------------------

    pub async fn add_apartment(&self, name: &str) {
        ApartmentRepository::new(self.state.central_pool.clone())
            .create(&Apartment::new(name).expect("valid apartment name"))
            .await
            .expect("Failed to create apartment");
    }

    pub async fn add_service_provider(&self, email: &str, password: &str) -> Identity {
        let provider = identity(email, password, Role::ServiceProvider, None);
        ServiceProviderRepository::new(self.state.central_pool.clone())
            .create(&provider)
            .await
            .expect("Failed to create service provider");
        provider
    }

    pub async fn add_central_manager(
        &self,
        email: &str,
        password: &str,
        status: RegistrationStatus,
    ) -> Identity {
        let manager = identity(email, password, Role::Manager, Some(status));
        ManagerRepository::central(self.state.central_pool.clone())
            .create(&manager)
            .await
            .expect("Failed to create central manager");
        manager
    }

    pub async fn add_resident(
        &self,
        apartment: &str,
        email: &str,
        password: &str,
        status: RegistrationStatus,
    ) -> Identity {
        let pool = self.tenant_pool(apartment).await;
        let resident = identity(email, password, Role::Resident, Some(status));
        ResidentRepository::new(pool)
            .create(&resident)
            .await
            .expect("Failed to create resident");
        resident
    }

    pub async fn add_tenant_manager(
        &self,
        apartment: &str,
        email: &str,
        password: &str,
        status: RegistrationStatus,
    ) -> Identity {
        let pool = self.tenant_pool(apartment).await;
        let manager = identity(email, password, Role::Manager, Some(status));
        ManagerRepository::tenant(pool)
            .create(&manager)
            .await
            .expect("Failed to create tenant manager");
        manager
    }

    pub async fn add_service(&self, provider: &Identity, longitude: f64, latitude: f64) -> Service {
        let service = Service::new(
            "Plumbing".to_string(),
            "Leaks and clogs".to_string(),
            vec!["https://cdn.example.com/pipe.jpg".to_string()],
            GeoPoint::new(longitude, latitude, None).expect("valid point"),
            "9-5".to_string(),
            provider.id,
            provider.name.clone(),
        );
        ServiceRepository::new(self.state.central_pool.clone())
            .create(&service)
            .await
            .expect("Failed to create service");
        service
    }

    async fn tenant_pool(&self, apartment: &str) -> SqlitePool {
        self.state
            .tenants
            .get_pool(apartment)
            .await
            .expect("Failed to open tenant database")
    }
}

/// Central database in memory. One connection, so every query sees the same database.
pub async fn create_central_pool() -> SqlitePool {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect_with(
            SqliteConnectOptions::new()
                .in_memory(true)
                .foreign_keys(true),
        )
        .await
        .expect("Failed to create test database");

    am_db::migrate_central(&pool)
        .await
        .expect("Failed to run migrations");

    pool
}

pub fn identity(
    email: &str,
    password: &str,
    role: Role,
    status: Option<RegistrationStatus>,
) -> Identity {
    Identity {
        id: Uuid::new_v4(),
        name: format!("Test {role}"),
        email: email.to_string(),
        password_hash: hash_password(password).expect("Failed to hash password"),
        phone: Some("555-0100".to_string()),
        role,
        status,
        apartment_complex_name: None,
    }
}

// -----------------------------------------------------------------------------
// Requests
// -----------------------------------------------------------------------------

pub fn json_request(method: &str, uri: &str, token: Option<&str>, body: serde_json::Value) -> Request<Body> {
    let mut builder = Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json");
    if let Some(token) = token {
        builder = builder.header("authorization", format!("Bearer {token}"));
    }
    builder.body(Body::from(body.to_string())).unwrap()
}

pub fn empty_request(method: &str, uri: &str, token: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header("authorization", format!("Bearer {token}"));
    }
    builder.body(Body::empty()).unwrap()
}

/// Send a request and decode the JSON body (`Null` when the body is not JSON).
pub async fn send(app: Router, request: Request<Body>) -> (StatusCode, serde_json::Value) {
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let body = response.into_body().collect().await.unwrap().to_bytes();
    let json = serde_json::from_slice(&body).unwrap_or(serde_json::Value::Null);
    (status, json)
}
