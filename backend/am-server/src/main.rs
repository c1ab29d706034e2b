use am_auth::TokenIssuer;
use am_config::Config;
use am_db::{TenantConnectionManager, connect_central};
use am_server::{AppState, ServerError, build_router, logger};

use std::error::Error;
use std::path::PathBuf;
use std::sync::Arc;

use log::{error, info};
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    // .env is optional
    dotenvy::dotenv().ok();

    // Load and validate configuration
    let config = Config::load()?;
    config.validate()?;

    let log_file_path: Option<PathBuf> = match config.logging.file {
        Some(ref filename) => {
            let log_dir = Config::config_dir()?.join(&config.logging.dir);
            std::fs::create_dir_all(&log_dir)?;
            Some(log_dir.join(filename))
        }
        None => None,
    };

    // Initialize logger (before any other logging)
    logger::initialize(config.logging.level, log_file_path, config.logging.colored)?;

    info!("Starting am-server v{}", env!("CARGO_PKG_VERSION"));
    config.log_summary();

    // Central database
    let central_path = config.central_database_path()?;
    info!("Connecting to central database: {}", central_path.display());
    let central_pool = connect_central(&central_path, config.database.max_connections)
        .await
        .map_err(ServerError::from)?;
    info!("Central database ready");

    // Tenant databases open lazily on first login against them
    let tenants_dir = config.tenants_dir()?;
    info!("Tenant databases under {}", tenants_dir.display());
    let tenants = Arc::new(TenantConnectionManager::with_max_connections(
        tenants_dir,
        config.database.max_connections,
    ));

    let secret = config
        .auth
        .jwt_secret
        .as_deref()
        .ok_or(ServerError::MissingJwtSecret)?;
    let tokens = Arc::new(TokenIssuer::with_hs256(secret.as_bytes(), config.token_ttl()));

    let state = AppState::new(central_pool, tenants, tokens, config.services.clone());
    let app = build_router(state.clone());

    let listener = TcpListener::bind(config.bind_addr()).await?;
    info!("Server listening on {}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    state.close().await;
    info!("Graceful shutdown complete");

    Ok(())
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("Received SIGINT (Ctrl+C), initiating graceful shutdown"),
        Err(e) => {
            error!("Failed to listen for SIGINT: {}", e);
            std::future::pending::<()>().await;
        }
    }
}
