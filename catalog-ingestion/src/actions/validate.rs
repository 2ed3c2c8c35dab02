use std::path::Path;

use anyhow::bail;
use shared_types::{CatalogIssue, LocationDataset};

use crate::repository::read_catalog;

/// Slugs at least this similar are probably the same area typed twice.
const NEAR_DUPLICATE_THRESHOLD: f64 = 0.97;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Error,
    Warning,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Finding {
    pub severity: Severity,
    pub message: String,
}

fn severity_of(issue: &CatalogIssue) -> Severity {
    match issue {
        CatalogIssue::NonCanonicalSlug { .. } => Severity::Warning,
        CatalogIssue::DuplicateLocationId { .. }
        | CatalogIssue::AmbiguousSlugOwnership { .. }
        | CatalogIssue::EmptySlug { .. } => Severity::Error,
    }
}

/// Pairs of distinct slugs whose Jaro-Winkler similarity meets `threshold`.
pub fn near_duplicate_slugs(dataset: &LocationDataset, threshold: f64) -> Vec<(String, String)> {
    let mut slugs: Vec<&str> = dataset
        .list_all()
        .iter()
        .flat_map(|location| location.service_areas.iter())
        .map(|area| area.slug.as_str())
        .filter(|slug| !slug.is_empty())
        .collect();
    slugs.sort_unstable();
    slugs.dedup();

    let mut pairs = Vec::new();
    for (i, a) in slugs.iter().enumerate() {
        for b in &slugs[i + 1..] {
            if strsim::jaro_winkler(a, b) >= threshold {
                pairs.push((a.to_string(), b.to_string()));
            }
        }
    }
    pairs
}

pub fn review(dataset: &LocationDataset) -> Vec<Finding> {
    let mut findings: Vec<Finding> = dataset
        .validate()
        .iter()
        .map(|issue| Finding {
            severity: severity_of(issue),
            message: issue.to_string(),
        })
        .collect();

    findings.extend(
        near_duplicate_slugs(dataset, NEAR_DUPLICATE_THRESHOLD)
            .into_iter()
            .map(|(a, b)| Finding {
                severity: Severity::Warning,
                message: format!("slugs '{a}' and '{b}' are nearly identical"),
            }),
    );

    findings
}

pub fn run(catalog_path: &Path) -> anyhow::Result<()> {
    let dataset = LocationDataset::new(read_catalog(catalog_path)?.locations);
    let area_count: usize = dataset
        .list_all()
        .iter()
        .map(|location| location.service_areas.len())
        .sum();
    println!(
        "Validating {}: {} locations, {} service areas",
        catalog_path.display(),
        dataset.len(),
        area_count
    );

    let findings = review(&dataset);
    for finding in &findings {
        match finding.severity {
            Severity::Error => eprintln!("error: {}", finding.message),
            Severity::Warning => println!("warning: {}", finding.message),
        }
    }

    let errors = findings
        .iter()
        .filter(|f| f.severity == Severity::Error)
        .count();
    if errors > 0 {
        bail!("{errors} catalog error(s) found");
    }
    println!("Catalog OK ({} warnings)", findings.len());
    Ok(())
}
