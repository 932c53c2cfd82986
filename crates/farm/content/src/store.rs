//! File-backed policy store.

use std::path::{Path, PathBuf};
use std::sync::{Arc, RwLock};

use farm_core::{ConfigStore, Policy};

use crate::loaders::{LoadResult, PolicyLoader};

/// Serves the last successfully loaded policy from a file.
///
/// The file is read once on [`FileConfigStore::open`] and again only on
/// [`FileConfigStore::reload`]. A failed reload keeps the previous policy.
pub struct FileConfigStore {
    path: PathBuf,
    current: RwLock<Arc<Policy>>,
}

impl FileConfigStore {
    /// Loads the policy at `path`. Fails if the first load fails.
    pub fn open(path: impl Into<PathBuf>) -> LoadResult<Self> {
        let path = path.into();
        let policy = PolicyLoader::load(&path)?;
        Ok(Self {
            path,
            current: RwLock::new(Arc::new(policy)),
        })
    }

    /// Re-reads the file. On error the previous policy stays in effect.
    pub fn reload(&self) -> LoadResult<()> {
        match PolicyLoader::load(&self.path) {
            Ok(policy) => {
                let mut current = self
                    .current
                    .write()
                    .unwrap_or_else(|poisoned| poisoned.into_inner());
                *current = Arc::new(policy);
                tracing::info!("reloaded policy from {}", self.path.display());
                Ok(())
            }
            Err(err) => {
                tracing::warn!("keeping previous policy: {}", err);
                Err(err)
            }
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ConfigStore for FileConfigStore {
    fn policy(&self) -> Arc<Policy> {
        let current = self
            .current
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        Arc::clone(&current)
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn reload_picks_up_changes_and_keeps_last_good() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(file, "detection_distance = 12.0").unwrap();

        let store = FileConfigStore::open(file.path()).unwrap();
        assert_eq!(store.policy().detection_distance, 12.0);

        std::fs::write(file.path(), "detection_distance = 21.0\n").unwrap();
        // Not picked up until reload.
        assert_eq!(store.policy().detection_distance, 12.0);
        store.reload().unwrap();
        assert_eq!(store.policy().detection_distance, 21.0);

        std::fs::write(file.path(), "detection_distance = [").unwrap();
        assert!(store.reload().is_err());
        assert_eq!(store.policy().detection_distance, 21.0);
    }

    #[test]
    fn open_fails_for_missing_file() {
        assert!(FileConfigStore::open("/definitely/not/here/policy.toml").is_err());
    }
}
