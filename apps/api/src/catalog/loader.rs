use std::path::Path;

use anyhow::{Context, Result};
use serde::de::DeserializeOwned;
use tracing::{info, warn};

use crate::advisor::policy::EnginePolicy;
use crate::catalog::{defaults, Catalog};

/// Loads the catalog from `path`, or the built-in data when no path is set.
/// A file without a `quiz` section keeps the built-in questions.
pub fn load_catalog(path: Option<&Path>) -> Result<Catalog> {
    let Some(path) = path else {
        let catalog = defaults::builtin_catalog();
        info!("Using built-in catalog ({} careers)", catalog.len());
        return Ok(catalog);
    };

    let mut catalog: Catalog = read_json(path)?;
    if catalog.quiz.is_empty() {
        catalog.quiz = defaults::builtin_quiz();
    }
    for career in catalog.careers.iter().filter(|c| c.skills_required.total() == 0) {
        warn!("Career {} declares no required skills; its skill match is always 0", career.id);
    }
    info!(
        "Loaded catalog from {} ({} careers, {} market signals)",
        path.display(),
        catalog.len(),
        catalog.market.len()
    );
    Ok(catalog)
}

/// Loads the engine policy from `path`, or the default policy when no path is set.
pub fn load_policy(path: Option<&Path>) -> Result<EnginePolicy> {
    match path {
        Some(path) => {
            let policy = read_json(path)?;
            info!("Loaded engine policy from {}", path.display());
            Ok(policy)
        }
        None => Ok(EnginePolicy::default()),
    }
}

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    serde_json::from_str(&raw).with_context(|| format!("Invalid JSON in {}", path.display()))
}
