//! Application configuration

use std::env;
use std::path::PathBuf;

/// Application configuration loaded from environment
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Directory holding the save slot
    pub save_dir: PathBuf,
    /// Directory holding optional external database tables
    pub database_dir: PathBuf,
}

impl AppConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        Self {
            save_dir: env::var("TILEQUEST_SAVE_DIR")
                .unwrap_or_else(|_| "save".to_string())
                .into(),
            database_dir: env::var("TILEQUEST_DATABASE_DIR")
                .unwrap_or_else(|_| "database".to_string())
                .into(),
        }
    }
}
