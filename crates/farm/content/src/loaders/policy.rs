//! Policy loader.

use std::path::Path;

use farm_core::Policy;

use crate::loaders::{LoadResult, read_file};

/// Loader for [`Policy`] files.
///
/// The format is picked from the extension: `.ron` is read as RON, anything
/// else as TOML. Missing fields take their defaults.
pub struct PolicyLoader;

impl PolicyLoader {
    /// Load a policy from a file.
    pub fn load(path: &Path) -> LoadResult<Policy> {
        let content = read_file(path)?;
        let policy = match path.extension().and_then(|ext| ext.to_str()) {
            Some("ron") => Self::from_ron_str(&content)?,
            _ => Self::from_toml_str(&content)?,
        };

        tracing::debug!(
            "loaded policy from {} ({} waypoints, {} battle lists)",
            path.display(),
            policy.route.waypoints.len(),
            policy.battle_lists.len()
        );
        Ok(policy)
    }

    pub fn from_toml_str(content: &str) -> LoadResult<Policy> {
        toml::from_str(content).map_err(|e| anyhow::anyhow!("Failed to parse policy TOML: {}", e))
    }

    pub fn from_ron_str(content: &str) -> LoadResult<Policy> {
        ron::from_str(content).map_err(|e| anyhow::anyhow!("Failed to parse policy RON: {}", e))
    }
}
