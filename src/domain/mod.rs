//! Domain layer - Core simulation state with no external dependencies
//!
//! This layer contains:
//! - Value Objects: map ids, tile coordinates, tile kinds
//! - Entities: tile maps, data records, battle session, save snapshot
//! - Repository: the generic id-keyed static data table
//! - Map data: embedded grid text for the built-in world

pub mod entities;
pub mod map_data;
pub mod repository;
pub mod value_objects;
