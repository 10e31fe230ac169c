//! Capability probing against a service's package manifest.

use std::fs;
use std::path::Path;
use tracing::debug;

/// Check whether a service declares an optional capability in the
/// `scripts` table of its package.json.
///
/// Fails closed: a missing, unreadable, or malformed manifest means the
/// capability is absent. A broken manifest must never turn into a
/// verification failure of its own.
pub fn has_capability(project_dir: &Path, capability_key: &str) -> bool {
    let manifest_path = project_dir.join("package.json");

    let raw = match fs::read_to_string(&manifest_path) {
        Ok(raw) => raw,
        Err(err) => {
            debug!("could not read {}: {err}", manifest_path.display());
            return false;
        }
    };

    let manifest: serde_json::Value = match serde_json::from_str(&raw) {
        Ok(value) => value,
        Err(err) => {
            debug!("could not parse {}: {err}", manifest_path.display());
            return false;
        }
    };

    manifest
        .get("scripts")
        .and_then(|scripts| scripts.as_object())
        .is_some_and(|scripts| scripts.contains_key(capability_key))
}
