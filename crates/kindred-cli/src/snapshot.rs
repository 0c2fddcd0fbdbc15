//! Loading family snapshots from disk.

use crate::error::{CliError, Result};
use kindred_domain::FamilySnapshot;
use std::fs;
use std::path::Path;
use tracing::debug;

/// Load a snapshot from a `.json` or `.toml` file.
pub fn load_snapshot(path: &Path) -> Result<FamilySnapshot> {
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(str::to_lowercase)
        .unwrap_or_default();

    let contents = fs::read_to_string(path)?;
    let snapshot: FamilySnapshot = match extension.as_str() {
        "json" => serde_json::from_str(&contents)?,
        "toml" => toml::from_str(&contents)?,
        other => {
            return Err(CliError::InvalidInput(format!(
                "Unsupported snapshot format '{}': expected .json or .toml",
                other
            )))
        }
    };

    debug!(
        path = %path.display(),
        people = snapshot.people.len(),
        relationships = snapshot.relationships.len(),
        "Loaded family snapshot"
    );
    Ok(snapshot)
}
