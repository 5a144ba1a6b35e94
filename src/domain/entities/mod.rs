//! Domain entities - Core simulation objects with identity

mod battle;
mod records;
mod save_state;
mod tile_map;

pub use battle::{BattleCommand, BattleOutcome, BattleSession, BattleState};
pub use records::{
    builtin_enemies, builtin_events, builtin_items, builtin_skills, EnemyRecord, EventRecord,
    GameData, ItemKind, ItemRecord, SkillRecord, SkillTarget, DEFAULT_ENEMY_ID,
};
pub use save_state::SaveState;
pub use tile_map::{MapError, TileMap};
