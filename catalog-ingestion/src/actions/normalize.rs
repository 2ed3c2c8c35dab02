use std::path::Path;

use shared_types::catalog::CatalogFile;
use shared_types::slug::{city_slug, is_canonical, slugify};
use shared_types::LocationDataset;

use crate::repository::{read_catalog, write_catalog};

/// Fills blank service-area slugs from name and state, and re-slugifies
/// hand-typed ones. Returns how many slugs changed.
pub fn normalize_slugs(catalog: &mut CatalogFile) -> usize {
    let mut changed = 0;
    for area in catalog
        .locations
        .iter_mut()
        .flat_map(|location| location.service_areas.iter_mut())
    {
        let normalized = if area.slug.trim().is_empty() {
            city_slug(&area.name, &area.state)
        } else if !is_canonical(&area.slug) {
            repair_slug(&area.slug, &area.name, &area.state)
        } else {
            continue;
        };
        println!("  {:?} -> {}", area.slug, normalized);
        area.slug = normalized;
        changed += 1;
    }
    changed
}

/// Re-slugifies a hand-typed slug into the `<area>-<state>` shape that
/// blank slugs are filled with.
fn repair_slug(slug: &str, name: &str, state: &str) -> String {
    let repaired = slugify(slug);
    if repaired.is_empty() {
        return city_slug(name, state);
    }
    let suffix = format!("-{}", state.to_lowercase());
    if state.is_empty() || repaired.ends_with(&suffix) {
        repaired
    } else {
        repaired + &suffix
    }
}

pub fn run(catalog_path: &Path, output_path: &Path) -> anyhow::Result<()> {
    let mut catalog = read_catalog(catalog_path)?;
    let changed = normalize_slugs(&mut catalog);
    println!("Normalized {changed} slug(s)");

    let remaining = LocationDataset::new(catalog.locations.clone()).validate();
    for issue in &remaining {
        println!("warning: {issue}");
    }

    write_catalog(output_path, &catalog)?;
    println!("Wrote {}", output_path.display());
    Ok(())
}
