use leptos::prelude::*;
use leptos::server;
use serde::{Deserialize, Serialize};
use shared_types::{AreaIdentity, Location, LocationDataset};

use crate::config::SiteConfig;
use crate::error::GeoError;
use crate::geo::{GeoResolver, HierarchicalPath};

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct AreaLink {
    pub slug: String,
    pub name: String,
    pub state: String,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct LocationSummary {
    pub id: String,
    pub name: String,
    pub phone: Option<String>,
    pub areas: Vec<AreaLink>,
}

impl From<&Location> for LocationSummary {
    fn from(location: &Location) -> Self {
        Self {
            id: location.id.clone(),
            name: location.name.clone(),
            phone: location.phone.clone(),
            areas: location
                .service_areas
                .iter()
                .map(|area| AreaLink {
                    slug: area.slug.clone(),
                    name: area.name.clone(),
                    state: area.state.clone(),
                })
                .collect(),
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct HubPage {
    pub business_name: String,
    pub default_phone: String,
    pub locations: Vec<LocationSummary>,
}

/// Everything an area landing page needs to render its header and call
/// buttons. `location` is present when a catalog location serves the area.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct AreaPage {
    pub business_name: String,
    pub default_phone: String,
    pub identity: AreaIdentity,
    pub location: Option<LocationSummary>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub enum ServiceAreaLookup {
    Found(AreaPage),
    /// The detail route was reached without a slug.
    MissingIdentifier,
}

pub fn build_hub_page(dataset: &LocationDataset, config: &SiteConfig) -> HubPage {
    HubPage {
        business_name: config.business_name.clone(),
        default_phone: config.default_phone.clone(),
        locations: dataset.list_all().iter().map(LocationSummary::from).collect(),
    }
}

pub fn build_area_page(
    dataset: &LocationDataset,
    config: &SiteConfig,
    identity: AreaIdentity,
) -> AreaPage {
    // slug owner first; location ids may repeat in a flawed catalog
    let location = dataset
        .find_locations_containing_slug(&identity.slug)
        .first()
        .copied()
        .or_else(|| {
            identity
                .owner_location_id
                .as_deref()
                .and_then(|id| dataset.find_location_by_id(id))
        })
        .map(LocationSummary::from);

    AreaPage {
        business_name: config.business_name.clone(),
        default_phone: config.default_phone.clone(),
        identity,
        location,
    }
}

pub fn lookup_service_area(
    dataset: &LocationDataset,
    config: &SiteConfig,
    slug: Option<&str>,
) -> ServiceAreaLookup {
    match GeoResolver::new(dataset).resolve_area_slug(slug) {
        Ok(identity) => ServiceAreaLookup::Found(build_area_page(dataset, config, identity)),
        Err(GeoError::MissingAreaIdentifier) => ServiceAreaLookup::MissingIdentifier,
    }
}

#[server]
pub async fn fetch_locations() -> Result<HubPage, ServerFnError> {
    let catalog = crate::catalog::get_catalog().map_err(|e| ServerFnError::new(e.to_string()))?;
    let config =
        crate::catalog::get_site_config().map_err(|e| ServerFnError::new(e.to_string()))?;
    Ok(build_hub_page(catalog, config))
}

#[server]
pub async fn fetch_area_page(
    state: String,
    city: String,
    neighborhood: String,
) -> Result<AreaPage, ServerFnError> {
    let catalog = crate::catalog::get_catalog().map_err(|e| ServerFnError::new(e.to_string()))?;
    let config =
        crate::catalog::get_site_config().map_err(|e| ServerFnError::new(e.to_string()))?;

    let path = HierarchicalPath {
        state,
        city,
        neighborhood,
    };
    let identity = GeoResolver::new(catalog).resolve_hierarchical(&path);
    Ok(build_area_page(catalog, config, identity))
}

#[server]
pub async fn fetch_service_area_page(
    slug: Option<String>,
) -> Result<ServiceAreaLookup, ServerFnError> {
    let catalog = crate::catalog::get_catalog().map_err(|e| ServerFnError::new(e.to_string()))?;
    let config =
        crate::catalog::get_site_config().map_err(|e| ServerFnError::new(e.to_string()))?;
    Ok(lookup_service_area(catalog, config, slug.as_deref()))
}
