//! Tilequest Engine - Simulation core for a 16-bit style tile RPG
//!
//! The engine covers:
//! - Tile maps parsed from character grids, with doors and spawn points
//! - A world graph with discrete movement and map transitions
//! - Random encounters and a timed turn-based battle engine
//! - Static data tables (items, skills, enemies, events) with external merge
//! - A single-slot JSON save store
//!
//! Rendering, input, and audio are host concerns; the engine exposes pure
//! state and outcome values for a host loop to drive.

pub mod application;
pub mod domain;
pub mod infrastructure;
