use thiserror::Error;

/// Startup failures of the server binary.
#[derive(Error, Debug)]
pub enum ServerError {
    #[error("Config error: {0}")]
    Config(#[from] am_config::ConfigError),

    #[error("Database error: {0}")]
    Database(#[from] am_db::DbError),

    #[error("auth.jwt_secret is not set")]
    MissingJwtSecret,

    #[error("Failed to open log file {path}: {source}")]
    LogFile {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to initialize logger: {message}")]
    Logger { message: String },
}

pub type Result<T> = std::result::Result<T, ServerError>;
