use std::path::Path;
use std::sync::OnceLock;

use shared_types::LocationDataset;

use crate::config::SiteConfig;
use crate::error::ConfigError;

static CATALOG: OnceLock<LocationDataset> = OnceLock::new();
static SITE_CONFIG: OnceLock<SiteConfig> = OnceLock::new();

/// Reads the catalog feed and reports invariant violations. A flawed catalog
/// is still served; only unreadable or malformed files fail.
pub fn load_catalog(path: impl AsRef<Path>) -> Result<LocationDataset, ConfigError> {
    let path = path.as_ref();
    let dataset = LocationDataset::from_path(path)?;
    for issue in dataset.validate() {
        tracing::warn!(catalog = %path.display(), "{issue}");
    }
    tracing::info!(
        catalog = %path.display(),
        locations = dataset.len(),
        "location catalog loaded"
    );
    Ok(dataset)
}

pub fn init_catalog(config: SiteConfig) -> Result<(), ConfigError> {
    let dataset = load_catalog(&config.catalog_path)?;
    CATALOG
        .set(dataset)
        .map_err(|_| ConfigError::CatalogAlreadyLoaded)?;
    SITE_CONFIG
        .set(config)
        .map_err(|_| ConfigError::CatalogAlreadyLoaded)?;
    Ok(())
}

pub fn get_catalog() -> Result<&'static LocationDataset, ConfigError> {
    CATALOG.get().ok_or(ConfigError::CatalogNotLoaded)
}

pub fn get_site_config() -> Result<&'static SiteConfig, ConfigError> {
    SITE_CONFIG.get().ok_or(ConfigError::CatalogNotLoaded)
}
