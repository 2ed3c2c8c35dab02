use std::{fs, path::Path};

use anyhow::Context;
use shared_types::catalog::CatalogFile;

pub fn read_catalog(path: &Path) -> anyhow::Result<CatalogFile> {
    let json = fs::read_to_string(path)
        .with_context(|| format!("reading catalog {}", path.display()))?;
    serde_json::from_str(&json).with_context(|| format!("parsing catalog {}", path.display()))
}

pub fn write_catalog(path: &Path, catalog: &CatalogFile) -> anyhow::Result<()> {
    let mut json = serde_json::to_string_pretty(catalog)?;
    json.push('\n');
    fs::write(path, json).with_context(|| format!("writing catalog {}", path.display()))
}
