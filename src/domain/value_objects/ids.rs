//! Strongly-typed identifiers and coordinates for the world model

use serde::{Deserialize, Serialize};

/// Identifies a playable area for map transitions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MapId {
    Town,
    Field,
    Cave,
    Dungeon,
    House1,
    House2,
    House3,
    WorldMap,
}

impl MapId {
    /// Every registered map, in registry order.
    pub const ALL: [MapId; 8] = [
        MapId::Town,
        MapId::Field,
        MapId::Cave,
        MapId::Dungeon,
        MapId::House1,
        MapId::House2,
        MapId::House3,
        MapId::WorldMap,
    ];

    /// Stable name used in save files and external data.
    pub fn name(&self) -> &'static str {
        match self {
            MapId::Town => "Town",
            MapId::Field => "Field",
            MapId::Cave => "Cave",
            MapId::Dungeon => "Dungeon",
            MapId::House1 => "House1",
            MapId::House2 => "House2",
            MapId::House3 => "House3",
            MapId::WorldMap => "WorldMap",
        }
    }

    /// Parse a map name as written to a save file.
    pub fn from_name(name: &str) -> Option<MapId> {
        MapId::ALL.iter().copied().find(|id| id.name() == name)
    }

    /// Parse with the permissive fallback used for save data: unknown
    /// names resolve to Town.
    pub fn from_name_or_town(name: &str) -> MapId {
        MapId::from_name(name).unwrap_or(MapId::Town)
    }
}

impl std::fmt::Display for MapId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// A tile coordinate on a map grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// A discrete movement intent from the input collaborator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Tile-space delta for one step.
    pub fn delta(&self) -> (i32, i32) {
        match self {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_map_id_name_round_trip() {
        for id in MapId::ALL {
            assert_eq!(MapId::from_name(id.name()), Some(id));
        }
    }

    #[test]
    fn test_unknown_map_name_falls_back_to_town() {
        assert_eq!(MapId::from_name("Swamp"), None);
        assert_eq!(MapId::from_name_or_town("Swamp"), MapId::Town);
        assert_eq!(MapId::from_name_or_town(""), MapId::Town);
        assert_eq!(MapId::from_name_or_town("Cave"), MapId::Cave);
    }

    #[test]
    fn test_direction_deltas() {
        assert_eq!(Direction::Up.delta(), (0, -1));
        assert_eq!(Direction::Down.delta(), (0, 1));
        assert_eq!(Direction::Left.delta(), (-1, 0));
        assert_eq!(Direction::Right.delta(), (1, 0));
    }
}
