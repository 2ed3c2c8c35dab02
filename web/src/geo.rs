use shared_types::slug::{city_slug, title_case};
use shared_types::{AreaIdentity, LocationDataset};

use crate::error::GeoError;

/// Path segments of a `/locations/:state/:city[/:neighborhood]` page.
/// Absent segments are empty strings.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HierarchicalPath {
    pub state: String,
    pub city: String,
    pub neighborhood: String,
}

impl HierarchicalPath {
    pub fn new(state: Option<&str>, city: Option<&str>, neighborhood: Option<&str>) -> Self {
        Self {
            state: state.unwrap_or_default().to_string(),
            city: city.unwrap_or_default().to_string(),
            neighborhood: neighborhood.unwrap_or_default().to_string(),
        }
    }
}

/// Maps navigation path segments to an [`AreaIdentity`] against a catalog.
///
/// Holds no state beyond the borrowed catalog, so identical inputs always
/// resolve to identical identities.
#[derive(Debug, Clone, Copy)]
pub struct GeoResolver<'a> {
    dataset: &'a LocationDataset,
}

impl<'a> GeoResolver<'a> {
    pub fn new(dataset: &'a LocationDataset) -> Self {
        Self { dataset }
    }

    /// State/city/neighborhood landing page.
    ///
    /// The slug is built from the segments alone, so areas that no location
    /// serves yet still resolve. Malformed state codes are passed through.
    pub fn resolve_hierarchical(&self, path: &HierarchicalPath) -> AreaIdentity {
        let slug = city_slug(&path.city, &path.state);

        let mut parts = Vec::with_capacity(3);
        if !path.neighborhood.trim().is_empty() {
            parts.push(title_case(&path.neighborhood));
        }
        parts.push(title_case(&path.city));
        parts.push(path.state.to_uppercase());

        AreaIdentity {
            owner_location_id: self.owner_of(&slug),
            display_name: parts.join(", "),
            slug,
        }
    }

    /// Service-area detail page addressed by a single slug.
    pub fn resolve_area_slug(&self, slug: Option<&str>) -> Result<AreaIdentity, GeoError> {
        let slug = slug
            .filter(|s| !s.trim().is_empty())
            .ok_or(GeoError::MissingAreaIdentifier)?;

        Ok(AreaIdentity {
            slug: slug.to_string(),
            display_name: title_case(slug),
            owner_location_id: self.owner_of(slug),
        })
    }

    fn owner_of(&self, slug: &str) -> Option<String> {
        let owners = self.dataset.find_locations_containing_slug(slug);
        if owners.len() > 1 {
            tracing::warn!(
                slug,
                owners = ?owners.iter().map(|l| l.id.as_str()).collect::<Vec<_>>(),
                "ambiguous service-area slug ownership, using first match"
            );
        }
        owners.first().map(|location| location.id.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared_types::{GeoPoint, Location, ServiceArea};

    fn dataset() -> LocationDataset {
        let area = |slug: &str| ServiceArea {
            slug: slug.to_string(),
            name: title_case(slug),
            state: "NJ".to_string(),
            center: None,
        };
        let location = |id: &str, areas: Vec<ServiceArea>| Location {
            id: id.to_string(),
            name: title_case(id),
            geo: GeoPoint {
                lat: 40.7,
                lng: -74.0,
            },
            phone: None,
            service_areas: areas,
        };
        LocationDataset::new(vec![
            location(
                "jersey-city-hub",
                vec![area("jersey-city-nj"), area("journal-square-nj")],
            ),
            location("bayonne-hub", vec![area("bayonne-nj"), area("shared-nj")]),
            location("hoboken-hub", vec![area("shared-nj")]),
        ])
    }

    #[test]
    fn hierarchical_without_neighborhood() {
        let dataset = dataset();
        let identity = GeoResolver::new(&dataset).resolve_hierarchical(&HierarchicalPath::new(
            Some("nj"),
            Some("jersey-city"),
            Some(""),
        ));
        assert_eq!(identity.slug, "jersey-city-nj");
        assert_eq!(identity.display_name, "Jersey City, NJ");
        assert_eq!(identity.owner_location_id.as_deref(), Some("jersey-city-hub"));
    }

    #[test]
    fn hierarchical_with_neighborhood() {
        let dataset = dataset();
        let identity = GeoResolver::new(&dataset).resolve_hierarchical(&HierarchicalPath::new(
            Some("nj"),
            Some("jersey-city"),
            Some("journal-square"),
        ));
        assert_eq!(identity.slug, "jersey-city-nj");
        assert_eq!(identity.display_name, "Journal Square, Jersey City, NJ");
    }

    #[test]
    fn hierarchical_tolerates_synthetic_and_malformed_segments() {
        let dataset = dataset();
        let resolver = GeoResolver::new(&dataset);

        let identity = resolver.resolve_hierarchical(&HierarchicalPath::new(
            Some("new-jersey"),
            Some("secaucus"),
            None,
        ));
        assert_eq!(identity.slug, "secaucus-new-jersey");
        assert_eq!(identity.display_name, "Secaucus, NEW-JERSEY");
        assert_eq!(identity.owner_location_id, None);

        let empty = resolver.resolve_hierarchical(&HierarchicalPath::default());
        assert_eq!(empty.slug, "-");
        assert_eq!(empty.owner_location_id, None);
    }

    #[test]
    fn blank_neighborhood_is_left_out_of_display_name() {
        let dataset = dataset();
        let identity = GeoResolver::new(&dataset).resolve_hierarchical(&HierarchicalPath::new(
            Some("nj"),
            Some("jersey-city"),
            Some("  "),
        ));
        assert_eq!(identity.display_name, "Jersey City, NJ");
    }

    #[test]
    fn area_slug_resolves_owner() {
        let dataset = dataset();
        let identity = GeoResolver::new(&dataset)
            .resolve_area_slug(Some("journal-square-nj"))
            .unwrap();
        assert_eq!(identity.slug, "journal-square-nj");
        assert_eq!(identity.display_name, "Journal Square Nj");
        assert_eq!(identity.owner_location_id.as_deref(), Some("jersey-city-hub"));
    }

    #[test]
    fn area_slug_without_owner_is_not_an_error() {
        let dataset = dataset();
        let identity = GeoResolver::new(&dataset)
            .resolve_area_slug(Some("weehawken-nj"))
            .unwrap();
        assert_eq!(identity.owner_location_id, None);
    }

    #[test]
    fn missing_area_slug_is_distinct() {
        let dataset = dataset();
        let resolver = GeoResolver::new(&dataset);
        assert_eq!(
            resolver.resolve_area_slug(Some("")),
            Err(GeoError::MissingAreaIdentifier)
        );
        assert_eq!(
            resolver.resolve_area_slug(Some("   ")),
            Err(GeoError::MissingAreaIdentifier)
        );
        assert_eq!(
            resolver.resolve_area_slug(None),
            Err(GeoError::MissingAreaIdentifier)
        );
    }

    #[test]
    fn ambiguous_slug_picks_first_owner() {
        let dataset = dataset();
        let identity = GeoResolver::new(&dataset)
            .resolve_area_slug(Some("shared-nj"))
            .unwrap();
        assert_eq!(identity.owner_location_id.as_deref(), Some("bayonne-hub"));
    }

    #[test]
    fn resolution_is_idempotent() {
        let dataset = dataset();
        let resolver = GeoResolver::new(&dataset);
        let path = HierarchicalPath::new(Some("nj"), Some("jersey-city"), Some("journal-square"));
        assert_eq!(
            resolver.resolve_hierarchical(&path),
            resolver.resolve_hierarchical(&path)
        );
        assert_eq!(
            resolver.resolve_area_slug(Some("shared-nj")),
            resolver.resolve_area_slug(Some("shared-nj"))
        );
    }
}
