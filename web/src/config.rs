use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

pub const DEFAULT_BUSINESS_NAME: &str = "Keyway Lock & Door";
pub const DEFAULT_PHONE: &str = "+18005550199";
pub const DEFAULT_CATALOG_PATH: &str = "data/locations.json";

/// Site-wide settings, read from the environment (and `.env` on the server).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SiteConfig {
    pub business_name: String,
    pub default_phone: String,
    pub catalog_path: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            business_name: DEFAULT_BUSINESS_NAME.to_string(),
            default_phone: DEFAULT_PHONE.to_string(),
            catalog_path: DEFAULT_CATALOG_PATH.to_string(),
        }
    }
}

impl SiteConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from any key lookup. Unset keys take defaults; a key
    /// that is set to an empty default phone is rejected.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        let config = Self {
            business_name: lookup("KEYWAY_BUSINESS_NAME").unwrap_or(defaults.business_name),
            default_phone: lookup("KEYWAY_DEFAULT_PHONE").unwrap_or(defaults.default_phone),
            catalog_path: lookup("KEYWAY_CATALOG_PATH").unwrap_or(defaults.catalog_path),
        };

        if config.default_phone.trim().is_empty() {
            return Err(ConfigError::EmptyValue("KEYWAY_DEFAULT_PHONE"));
        }
        if config.catalog_path.trim().is_empty() {
            return Err(ConfigError::EmptyValue("KEYWAY_CATALOG_PATH"));
        }
        Ok(config)
    }
}
