//! File-backed storage area.
//!
//! Each key is kept as `<data_dir>/<key>.json`. Writes go through a
//! temporary file and a rename, so a crash mid-write never leaves a torn
//! blob behind.

use std::path::{Path, PathBuf};

use super::StorageArea;
use crate::config::EvregConfig;
use crate::error::{EvregError, EvregResult};

pub struct FileStorage {
    dir: PathBuf,
}

impl FileStorage {
    /// Storage area rooted at an explicit directory.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        FileStorage { dir: dir.into() }
    }

    /// Open the storage area at the configured data directory, creating it
    /// if needed.
    pub fn open() -> EvregResult<Self> {
        let config = EvregConfig::load()?;
        let dir = config.data_path();
        std::fs::create_dir_all(&dir)
            .map_err(|e| EvregError::Storage(format!("Could not create {}: {e}", dir.display())))?;
        Ok(FileStorage { dir })
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn key_path(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }
}

impl StorageArea for FileStorage {
    fn read(&self, key: &str) -> EvregResult<Option<String>> {
        let path = self.key_path(key);
        if !path.exists() {
            return Ok(None);
        }
        std::fs::read_to_string(&path)
            .map(Some)
            .map_err(|e| EvregError::Storage(format!("Could not read {}: {e}", path.display())))
    }

    fn write(&self, key: &str, value: &str) -> EvregResult<()> {
        let path = self.key_path(key);
        let temp = self.dir.join(format!("{key}.json.tmp"));

        std::fs::write(&temp, value)
            .map_err(|e| EvregError::Storage(format!("Could not write {}: {e}", temp.display())))?;
        std::fs::rename(&temp, &path)
            .map_err(|e| EvregError::Storage(format!("Could not write {}: {e}", path.display())))?;
        Ok(())
    }
}
