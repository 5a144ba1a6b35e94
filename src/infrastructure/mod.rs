//! Infrastructure layer - External adapters and implementations
//!
//! This layer contains:
//! - Persistence: file-backed save storage and external database tables
//! - Config: Application configuration

pub mod config;
pub mod persistence;
