use crate::{
    AppState, add_review, create_service, delete_service, get_service, health, list_services,
    login, update_service,
};

use axum::{
    Router,
    routing::{get, post},
};
use tower_http::cors::{Any, CorsLayer};

/// Build the application router with all endpoints
pub fn build_router(state: AppState) -> Router {
    Router::new()
        // Health
        .route("/", get(health::root))
        .route("/api/health", get(health::health_check))
        // Auth
        .route("/api/auth/login", post(login))
        // Service marketplace
        .route("/api/service", post(create_service).get(list_services))
        .route(
            "/api/service/{id}",
            get(get_service).put(update_service).delete(delete_service),
        )
        .route("/api/service/{id}/reviews", post(add_review))
        .with_state(state)
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
}
