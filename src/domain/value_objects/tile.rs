//! Tile semantics - walkability, doors, and encounter flags
//!
//! Tiles carry only semantic fields. Visual asset resolution is delegated
//! to the rendering collaborator through an opaque lookup key.

use crate::domain::value_objects::MapId;

/// Semantic kind of a single map tile.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TileKind {
    /// Walkable ground.
    Floor,
    /// Impassable terrain or boundary.
    Wall,
    /// Transition to another map at the given spawn index.
    Door { target: MapId, spawn_index: usize },
    /// Walkable ground that may trigger a random battle.
    Encounter,
    /// Building decor; not walkable.
    House,
    /// Tile occupied by an NPC; walkable for collision purposes.
    Npc,
}

impl TileKind {
    /// True for Floor, Door, Encounter, and Npc. Wall and House block.
    pub fn is_walkable(&self) -> bool {
        matches!(
            self,
            TileKind::Floor | TileKind::Door { .. } | TileKind::Encounter | TileKind::Npc
        )
    }

    /// Opaque key the rendering collaborator resolves to a texture.
    /// The per-map tileset prefix stays on the renderer's side.
    pub fn visual_key(&self) -> &'static str {
        match self {
            TileKind::Floor => "floor",
            TileKind::Wall => "wall",
            TileKind::Door { .. } => "door",
            TileKind::Encounter => "floor",
            TileKind::House => "house",
            TileKind::Npc => "floor",
        }
    }
}
