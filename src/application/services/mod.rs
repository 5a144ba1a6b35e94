//! Application services - Simulation logic over the domain model

pub mod battle_service;
pub mod encounter_service;
pub mod save_service;
pub mod world_service;

pub use battle_service::BattleEngine;
pub use encounter_service::EncounterController;
pub use save_service::SaveStore;
pub use world_service::{StepOutcome, WorldError, WorldGraph, WorldService};
