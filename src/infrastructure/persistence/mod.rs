//! Persistence adapters - File-backed save slot and external data tables

pub mod database_loader;
pub mod save_file;

pub use database_loader::{merge_from_source, DatabaseDirectory};
pub use save_file::FileSaveStorage;
