//! External database tables
//!
//! Each table may have a `{table}.json` file in the configured database
//! directory holding an array of records. External records are merged
//! after the built-ins; a missing or unreadable file leaves the built-ins
//! alone rather than failing startup.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use crate::application::ports::outbound::DatabaseSourcePort;
use crate::domain::entities::GameData;
use crate::domain::repository::{Record, Repository};

pub struct DatabaseDirectory {
    dir: PathBuf,
}

impl DatabaseDirectory {
    pub fn new(dir: impl AsRef<Path>) -> Self {
        Self {
            dir: dir.as_ref().to_path_buf(),
        }
    }
}

impl DatabaseSourcePort for DatabaseDirectory {
    fn read_table(&self, table: &str) -> Result<Option<String>> {
        let path = self.dir.join(format!("{table}.json"));
        if !path.exists() {
            return Ok(None);
        }
        let contents = fs::read_to_string(&path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        Ok(Some(contents))
    }
}

/// Merge every external table over the built-ins. Per-table failures are
/// logged and skipped; the built-in records always survive.
pub fn merge_from_source(source: &dyn DatabaseSourcePort, data: &mut GameData) {
    merge_table(source, "items", &mut data.items);
    merge_table(source, "skills", &mut data.skills);
    merge_table(source, "enemies", &mut data.enemies);
    merge_table(source, "events", &mut data.events);
}

fn merge_table<T>(source: &dyn DatabaseSourcePort, table: &str, repository: &mut Repository<T>)
where
    T: Record + DeserializeOwned,
{
    let contents = match source.read_table(table) {
        Ok(Some(contents)) => contents,
        Ok(None) => return,
        Err(error) => {
            warn!(table, %error, "external table unreadable, keeping built-ins");
            return;
        }
    };
    match serde_json::from_str::<Vec<T>>(&contents) {
        Ok(records) => {
            debug!(table, count = records.len(), "external records merged");
            repository.merge(records);
        }
        Err(error) => {
            warn!(table, %error, "external table malformed, keeping built-ins");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_table_is_none() {
        let dir = tempfile::tempdir().unwrap();
        let source = DatabaseDirectory::new(dir.path());
        assert!(source.read_table("items").unwrap().is_none());
    }

    #[test]
    fn test_external_enemies_merge_after_builtins() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(
            dir.path().join("enemies.json"),
            r#"[{"id":"Dragon","name":"Dragon","spriteId":"Dragon","hp":60,"attack":9,"experience":50}]"#,
        )
        .unwrap();
        let source = DatabaseDirectory::new(dir.path());

        let mut data = GameData::with_builtins();
        merge_from_source(&source, &mut data);
        assert_eq!(data.enemies.len(), 7);
        assert_eq!(data.enemies.get("Dragon").unwrap().hp, 60);
        // Built-ins stay authoritative for duplicate ids.
        assert_eq!(data.enemies.get("Slime").unwrap().hp, 15);
    }

    #[test]
    fn test_malformed_table_keeps_builtins() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("skills.json"), "not json").unwrap();
        let source = DatabaseDirectory::new(dir.path());

        let mut data = GameData::with_builtins();
        merge_from_source(&source, &mut data);
        assert_eq!(data.skills.len(), 6);
    }

    #[test]
    fn test_duplicate_external_id_is_shadowed() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(
            dir.path().join("items.json"),
            r#"[{"id":"Potion","name":"Mega Potion","kind":"Consumable","effect":"HealHp","value":99}]"#,
        )
        .unwrap();
        let source = DatabaseDirectory::new(dir.path());

        let mut data = GameData::with_builtins();
        merge_from_source(&source, &mut data);
        assert_eq!(data.items.len(), 6);
        assert_eq!(data.items.get("Potion").unwrap().value, 20);
    }
}
