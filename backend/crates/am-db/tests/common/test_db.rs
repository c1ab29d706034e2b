use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};

/// Creates an in-memory SQLite pool with the central migrations run
pub async fn create_central_pool() -> SqlitePool {
    let pool = create_memory_pool().await;
    am_db::migrate_central(&pool)
        .await
        .expect("Failed to run central migrations");
    pool
}

/// Creates an in-memory SQLite pool with the tenant migrations run
pub async fn create_tenant_pool() -> SqlitePool {
    let pool = create_memory_pool().await;
    am_db::migrate_tenant(&pool)
        .await
        .expect("Failed to run tenant migrations");
    pool
}

async fn create_memory_pool() -> SqlitePool {
    let options = SqliteConnectOptions::new()
        .filename(":memory:")
        .create_if_missing(true)
        .foreign_keys(true);

    SqlitePoolOptions::new()
        .max_connections(1) // In-memory needs single connection
        .connect_with(options)
        .await
        .expect("Failed to create test pool")
}
