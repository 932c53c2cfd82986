//! Content factory for locating and loading policy files.

use std::path::{Path, PathBuf};

use farm_core::Policy;

use crate::FileConfigStore;
use crate::loaders::{LoadResult, PolicyLoader};

/// Content factory that loads policy content from a data directory.
///
/// # Directory Structure
///
/// ```text
/// data_dir/
/// └── policy.toml
/// ```
pub struct ContentFactory {
    data_dir: PathBuf,
}

impl ContentFactory {
    pub const POLICY_FILE: &'static str = "policy.toml";

    /// Creates a new content factory pointing to a data directory.
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    /// Path of the policy file inside the data directory.
    pub fn policy_path(&self) -> PathBuf {
        self.data_dir.join(Self::POLICY_FILE)
    }

    /// Load the policy from `policy.toml`.
    pub fn load_policy(&self) -> LoadResult<Policy> {
        PolicyLoader::load(&self.policy_path())
    }

    /// Open a reloadable config store backed by `policy.toml`.
    pub fn config_store(&self) -> LoadResult<FileConfigStore> {
        FileConfigStore::open(self.policy_path())
    }

    /// Returns the data directory path.
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }
}
