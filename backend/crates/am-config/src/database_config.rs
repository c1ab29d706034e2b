use crate::{
    ConfigError, ConfigErrorResult, DEFAULT_CENTRAL_DATABASE, DEFAULT_DB_MAX_CONNECTIONS,
    DEFAULT_TENANTS_DIRECTORY, MAX_DB_MAX_CONNECTIONS, MIN_DB_MAX_CONNECTIONS,
};

use std::path::Path;

use serde::Deserialize;

/// Locations of the central database and the per-apartment databases.
///
/// Both paths are relative to the config directory.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct DatabaseConfig {
    pub central_path: String,
    /// Each apartment gets `<tenants_dir>/<apartment_name>/main.db`
    pub tenants_dir: String,
    /// Pool size for each database
    pub max_connections: u32,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            central_path: String::from(DEFAULT_CENTRAL_DATABASE),
            tenants_dir: String::from(DEFAULT_TENANTS_DIRECTORY),
            max_connections: DEFAULT_DB_MAX_CONNECTIONS,
        }
    }
}

impl DatabaseConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        for (name, value) in [
            ("database.central_path", &self.central_path),
            ("database.tenants_dir", &self.tenants_dir),
        ] {
            if value.trim().is_empty() {
                return Err(ConfigError::database(format!("{name} cannot be empty")));
            }
            if Path::new(value).is_absolute() || value.contains("..") {
                return Err(ConfigError::database(format!(
                    "{name} must be relative and cannot contain '..'"
                )));
            }
        }

        if !(MIN_DB_MAX_CONNECTIONS..=MAX_DB_MAX_CONNECTIONS).contains(&self.max_connections) {
            return Err(ConfigError::database(format!(
                "database.max_connections must be {}-{}, got {}",
                MIN_DB_MAX_CONNECTIONS, MAX_DB_MAX_CONNECTIONS, self.max_connections
            )));
        }

        Ok(())
    }
}
