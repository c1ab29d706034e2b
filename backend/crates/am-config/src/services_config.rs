use crate::{ConfigError, ConfigErrorResult, DEFAULT_MAX_IMAGES, DEFAULT_SEARCH_RADIUS_METERS};

use serde::Deserialize;

/// Service marketplace limits.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServicesConfig {
    /// Radius of the nearby-services search
    pub search_radius_meters: f64,
    /// Maximum image URLs per service
    pub max_images: usize,
}

impl Default for ServicesConfig {
    fn default() -> Self {
        Self {
            search_radius_meters: DEFAULT_SEARCH_RADIUS_METERS,
            max_images: DEFAULT_MAX_IMAGES,
        }
    }
}

impl ServicesConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if !self.search_radius_meters.is_finite() || self.search_radius_meters <= 0.0 {
            return Err(ConfigError::services(format!(
                "services.search_radius_meters must be > 0, got {}",
                self.search_radius_meters
            )));
        }

        if self.max_images == 0 {
            return Err(ConfigError::services("services.max_images must be > 0"));
        }

        Ok(())
    }
}
