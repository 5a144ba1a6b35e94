//! File-backed save storage
//!
//! One save slot, stored as `save.json` inside the configured directory.
//! The directory is created lazily on the first write.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::debug;

use crate::application::ports::outbound::SaveStoragePort;

const SAVE_FILE_NAME: &str = "save.json";

pub struct FileSaveStorage {
    path: PathBuf,
}

impl FileSaveStorage {
    pub fn new(save_dir: impl AsRef<Path>) -> Self {
        Self {
            path: save_dir.as_ref().join(SAVE_FILE_NAME),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl SaveStoragePort for FileSaveStorage {
    fn read(&self) -> Result<Option<String>> {
        if !self.path.exists() {
            return Ok(None);
        }
        let contents = fs::read_to_string(&self.path)
            .with_context(|| format!("failed to read {}", self.path.display()))?;
        Ok(Some(contents))
    }

    fn write(&self, contents: &str) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("failed to create {}", parent.display()))?;
        }
        fs::write(&self.path, contents)
            .with_context(|| format!("failed to write {}", self.path.display()))?;
        debug!(path = %self.path.display(), "save written");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_missing_file_is_none() {
        let dir = tempfile::tempdir().unwrap();
        let storage = FileSaveStorage::new(dir.path());
        assert_eq!(storage.read().unwrap(), None);
    }

    #[test]
    fn test_write_creates_directory_and_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let storage = FileSaveStorage::new(dir.path().join("nested"));
        storage.write("{\"hp\":30}").unwrap();
        assert_eq!(storage.read().unwrap().as_deref(), Some("{\"hp\":30}"));
    }

    #[test]
    fn test_write_overwrites_previous_slot() {
        let dir = tempfile::tempdir().unwrap();
        let storage = FileSaveStorage::new(dir.path());
        storage.write("first").unwrap();
        storage.write("second").unwrap();
        assert_eq!(storage.read().unwrap().as_deref(), Some("second"));
    }
}
