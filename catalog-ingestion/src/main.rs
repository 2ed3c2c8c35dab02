use std::{env, path::PathBuf};

use anyhow::{bail, Context};
use dotenv::dotenv;

pub mod actions;
pub mod repository;

enum IngestAction {
    Validate,
    Normalize,
}

impl IngestAction {
    fn new(action: &str) -> anyhow::Result<Self> {
        match action {
            "VALIDATE" => Ok(Self::Validate),
            "NORMALIZE" => Ok(Self::Normalize),
            other => bail!("Invalid action '{other}', expected VALIDATE or NORMALIZE"),
        }
    }
}

fn main() -> anyhow::Result<()> {
    dotenv().ok();
    let action = env::var("ACTION").context("ACTION to be set")?;
    let catalog_path = PathBuf::from(
        env::var("CATALOG_PATH").unwrap_or_else(|_| "data/locations.json".to_string()),
    );

    match IngestAction::new(&action)? {
        IngestAction::Validate => actions::validate::run(&catalog_path),
        IngestAction::Normalize => {
            let output_path = env::var("OUTPUT_PATH")
                .map(PathBuf::from)
                .unwrap_or_else(|_| catalog_path.clone());
            actions::normalize::run(&catalog_path, &output_path)
        }
    }
}
