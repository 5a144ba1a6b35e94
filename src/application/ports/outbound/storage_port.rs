//! Persistence ports - Interfaces for the storage collaborator
//!
//! The core defines the save and database schemas but never touches file
//! discovery itself; infrastructure implements these traits over whatever
//! storage the host provides.

use anyhow::Result;

/// Text read/write for the single save slot.
pub trait SaveStoragePort {
    /// Returns `Ok(None)` when no save exists yet.
    fn read(&self) -> Result<Option<String>>;

    fn write(&self, contents: &str) -> Result<()>;
}

/// Optional per-table text for external database records merged over the
/// built-ins ("items", "skills", "enemies", "events").
pub trait DatabaseSourcePort {
    /// Returns `Ok(None)` when the table has no external file.
    fn read_table(&self, table: &str) -> Result<Option<String>>;
}
