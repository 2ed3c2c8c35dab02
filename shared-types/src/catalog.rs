use std::collections::{HashMap, HashSet};
use std::fmt;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::slug::is_canonical;
use crate::{Location, ServiceArea};

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to read catalog '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("malformed catalog JSON: {0}")]
    Parse(#[from] serde_json::Error),
}

/// On-disk shape of the catalog feed.
#[derive(Debug, Serialize, Deserialize, Clone, Default)]
pub struct CatalogFile {
    pub locations: Vec<Location>,
}

/// Problems found by [`LocationDataset::validate`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogIssue {
    DuplicateLocationId {
        id: String,
    },
    /// More than one service area carries this slug. `location_ids` lists every
    /// owner in catalog order, repeated when one location holds it twice.
    AmbiguousSlugOwnership {
        slug: String,
        location_ids: Vec<String>,
    },
    EmptySlug {
        location_id: String,
        area_name: String,
    },
    NonCanonicalSlug {
        location_id: String,
        slug: String,
    },
}

impl fmt::Display for CatalogIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DuplicateLocationId { id } => write!(f, "duplicate location id '{id}'"),
            Self::AmbiguousSlugOwnership { slug, location_ids } => write!(
                f,
                "service-area slug '{slug}' is owned more than once: {}",
                location_ids.join(", ")
            ),
            Self::EmptySlug {
                location_id,
                area_name,
            } => write!(
                f,
                "service area '{area_name}' of location '{location_id}' has no slug"
            ),
            Self::NonCanonicalSlug { location_id, slug } => write!(
                f,
                "slug '{slug}' of location '{location_id}' is not canonical"
            ),
        }
    }
}

/// Immutable, in-memory catalog of locations and their service areas.
///
/// Built once when the site boots and passed explicitly to resolvers.
#[derive(Debug, Clone, Default)]
pub struct LocationDataset {
    locations: Vec<Location>,
    by_id: HashMap<String, usize>,
    by_slug: HashMap<String, Vec<usize>>,
}

impl LocationDataset {
    pub fn new(locations: Vec<Location>) -> Self {
        let mut by_id = HashMap::new();
        let mut by_slug: HashMap<String, Vec<usize>> = HashMap::new();

        for (idx, location) in locations.iter().enumerate() {
            // first id wins; duplicates surface through validate()
            by_id.entry(location.id.clone()).or_insert(idx);

            let mut seen = HashSet::new();
            for area in &location.service_areas {
                if seen.insert(area.slug.as_str()) {
                    by_slug.entry(area.slug.clone()).or_default().push(idx);
                }
            }
        }

        Self {
            locations,
            by_id,
            by_slug,
        }
    }

    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let file: CatalogFile = serde_json::from_str(json)?;
        Ok(Self::new(file.locations))
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_json(&json)
    }

    pub fn find_location_by_id(&self, id: &str) -> Option<&Location> {
        self.by_id.get(id).map(|&idx| &self.locations[idx])
    }

    /// Every location with a service area carrying `slug`, in catalog order.
    /// A well-formed catalog yields at most one.
    pub fn find_locations_containing_slug(&self, slug: &str) -> Vec<&Location> {
        self.by_slug
            .get(slug)
            .map(|indices| indices.iter().map(|&idx| &self.locations[idx]).collect())
            .unwrap_or_default()
    }

    pub fn find_service_area(&self, slug: &str) -> Option<(&Location, &ServiceArea)> {
        self.find_locations_containing_slug(slug)
            .into_iter()
            .find_map(|location| {
                location
                    .service_areas
                    .iter()
                    .find(|area| area.slug == slug)
                    .map(|area| (location, area))
            })
    }

    pub fn list_all(&self) -> &[Location] {
        &self.locations
    }

    pub fn len(&self) -> usize {
        self.locations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.locations.is_empty()
    }

    pub fn into_catalog_file(self) -> CatalogFile {
        CatalogFile {
            locations: self.locations,
        }
    }

    /// Checks the id and slug uniqueness invariants plus slug shape.
    /// Issues are reported in catalog order.
    pub fn validate(&self) -> Vec<CatalogIssue> {
        let mut issues = Vec::new();

        let mut seen_ids = HashSet::new();
        for location in &self.locations {
            if !seen_ids.insert(location.id.as_str()) {
                issues.push(CatalogIssue::DuplicateLocationId {
                    id: location.id.clone(),
                });
            }
        }

        let mut owners: Vec<(&str, Vec<String>)> = Vec::new();
        for location in &self.locations {
            for area in &location.service_areas {
                if area.slug.is_empty() {
                    issues.push(CatalogIssue::EmptySlug {
                        location_id: location.id.clone(),
                        area_name: area.name.clone(),
                    });
                    continue;
                }
                if !is_canonical(&area.slug) {
                    issues.push(CatalogIssue::NonCanonicalSlug {
                        location_id: location.id.clone(),
                        slug: area.slug.clone(),
                    });
                }
                match owners.iter_mut().find(|(slug, _)| *slug == area.slug) {
                    Some((_, ids)) => ids.push(location.id.clone()),
                    None => owners.push((area.slug.as_str(), vec![location.id.clone()])),
                }
            }
        }

        issues.extend(
            owners
                .into_iter()
                .filter(|(_, ids)| ids.len() > 1)
                .map(|(slug, location_ids)| CatalogIssue::AmbiguousSlugOwnership {
                    slug: slug.to_string(),
                    location_ids,
                }),
        );

        issues
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::GeoPoint;

    fn area(slug: &str, name: &str) -> ServiceArea {
        ServiceArea {
            slug: slug.to_string(),
            name: name.to_string(),
            state: "NJ".to_string(),
            center: None,
        }
    }

    fn location(id: &str, areas: Vec<ServiceArea>) -> Location {
        Location {
            id: id.to_string(),
            name: id.to_uppercase(),
            geo: GeoPoint {
                lat: 40.72,
                lng: -74.07,
            },
            phone: None,
            service_areas: areas,
        }
    }

    fn sample() -> LocationDataset {
        LocationDataset::new(vec![
            location(
                "jersey-city",
                vec![
                    area("journal-square-nj", "Journal Square"),
                    area("the-heights-nj", "The Heights"),
                ],
            ),
            location("hoboken", vec![area("hoboken-nj", "Hoboken")]),
            location("newark", vec![]),
        ])
    }

    #[test]
    fn lookups_by_id_and_slug() {
        let dataset = sample();
        assert_eq!(
            dataset.find_location_by_id("hoboken").map(|l| l.name.as_str()),
            Some("HOBOKEN")
        );
        assert!(dataset.find_location_by_id("trenton").is_none());

        let owners = dataset.find_locations_containing_slug("the-heights-nj");
        assert_eq!(owners.len(), 1);
        assert_eq!(owners[0].id, "jersey-city");
        assert!(dataset.find_locations_containing_slug("unknown").is_empty());
    }

    #[test]
    fn list_all_keeps_catalog_order() {
        let ids: Vec<_> = sample().list_all().iter().map(|l| l.id.clone()).collect();
        assert_eq!(ids, ["jersey-city", "hoboken", "newark"]);
    }

    #[test]
    fn duplicate_slug_returns_every_owner_in_order() {
        let dataset = LocationDataset::new(vec![
            location("b", vec![area("shared-nj", "Shared")]),
            location("a", vec![area("shared-nj", "Shared")]),
        ]);
        let owners: Vec<_> = dataset
            .find_locations_containing_slug("shared-nj")
            .into_iter()
            .map(|l| l.id.as_str())
            .collect();
        assert_eq!(owners, ["b", "a"]);

        let (owner, _) = dataset.find_service_area("shared-nj").unwrap();
        assert_eq!(owner.id, "b");

        assert_eq!(
            dataset.validate(),
            vec![CatalogIssue::AmbiguousSlugOwnership {
                slug: "shared-nj".to_string(),
                location_ids: vec!["b".to_string(), "a".to_string()],
            }]
        );
    }

    #[test]
    fn validate_reports_ids_and_slug_shape() {
        let dataset = LocationDataset::new(vec![
            location("hub", vec![area("", "Nameless"), area("Bad Slug", "Bad")]),
            location("hub", vec![]),
        ]);
        let issues = dataset.validate();
        assert!(issues.contains(&CatalogIssue::DuplicateLocationId {
            id: "hub".to_string()
        }));
        assert!(issues.contains(&CatalogIssue::EmptySlug {
            location_id: "hub".to_string(),
            area_name: "Nameless".to_string(),
        }));
        assert!(issues.contains(&CatalogIssue::NonCanonicalSlug {
            location_id: "hub".to_string(),
            slug: "Bad Slug".to_string(),
        }));
        assert_eq!(dataset.find_location_by_id("hub").unwrap().service_areas.len(), 2);
    }

    #[test]
    fn clean_catalog_has_no_issues() {
        assert!(sample().validate().is_empty());
    }

    #[test]
    fn parses_camel_case_feed() {
        let json = r#"{
            "locations": [{
                "id": "jc",
                "name": "Jersey City",
                "geo": {"lat": 40.72, "lng": -74.07},
                "phone": "+12015550100",
                "serviceAreas": [
                    {"slug": "journal-square-nj", "name": "Journal Square", "state": "NJ",
                     "center": {"lat": 40.73, "lng": -74.06}}
                ]
            }]
        }"#;
        let dataset = LocationDataset::from_json(json).unwrap();
        let (location, area) = dataset.find_service_area("journal-square-nj").unwrap();
        assert_eq!(location.phone.as_deref(), Some("+12015550100"));
        assert_eq!(area.center.map(|c| c.lat), Some(40.73));
    }

    #[test]
    fn malformed_feed_is_a_parse_error() {
        assert!(matches!(
            LocationDataset::from_json("{\"locations\": 3}"),
            Err(CatalogError::Parse(_))
        ));
    }
}
