//! Tile map entity - a parsed rectangular grid of tiles
//!
//! Map grid format: one character per tile, rows separated by `\n`, all
//! rows equal length. `.` floor, `#` wall, `P` spawn point, `E` encounter
//! floor, `H` house decor, `N` NPC, `1`-`9` doors whose target depends on
//! the map the digit appears on (see [`door_for_digit`]).

use crate::domain::value_objects::{MapId, Point, TileKind};

/// Parse failure for a single map grid. The world registry wraps this with
/// the offending map's name at validation time.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum MapError {
    #[error("empty map data")]
    EmptyGrid,
    #[error("line {line} length mismatch: expected {expected}, got {got}")]
    RaggedRow {
        /// 1-based row number, matching the source grid text.
        line: usize,
        expected: usize,
        got: usize,
    },
}

/// One playable area: immutable tile grid, ordered spawn points, and NPC
/// coordinates. All queries are pure.
#[derive(Debug, Clone)]
pub struct TileMap {
    id: MapId,
    width: usize,
    height: usize,
    tiles: Vec<TileKind>,
    spawns: Vec<Point>,
    npcs: Vec<Point>,
}

impl TileMap {
    /// Parse a grid for the given map. Fails if the grid is empty or any
    /// row's length differs from the first row's.
    pub fn parse(id: MapId, grid: &str) -> Result<TileMap, MapError> {
        let lines: Vec<&str> = grid.lines().collect();
        if lines.is_empty() || grid.is_empty() {
            return Err(MapError::EmptyGrid);
        }
        // Width is measured in characters, not bytes; a cell is one char.
        let width = lines[0].chars().count();
        if width == 0 {
            return Err(MapError::EmptyGrid);
        }

        let height = lines.len();
        let mut tiles = Vec::with_capacity(width * height);
        let mut spawns = Vec::new();
        let mut npcs = Vec::new();

        for (y, line) in lines.iter().enumerate() {
            let got = line.chars().count();
            if got != width {
                return Err(MapError::RaggedRow {
                    line: y + 1,
                    expected: width,
                    got,
                });
            }
            for (x, c) in line.chars().enumerate() {
                let at = Point::new(x as i32, y as i32);
                let kind = match c {
                    '#' => TileKind::Wall,
                    'H' => TileKind::House,
                    'E' => TileKind::Encounter,
                    'N' => {
                        npcs.push(at);
                        TileKind::Npc
                    }
                    'P' => {
                        spawns.push(at);
                        TileKind::Floor
                    }
                    '1'..='9' => match door_for_digit(id, c) {
                        Some((target, spawn_index, registers_spawn)) => {
                            if registers_spawn {
                                spawns.push(at);
                            }
                            TileKind::Door {
                                target,
                                spawn_index,
                            }
                        }
                        // Digits with no mapping on this map decode to floor,
                        // like any other unrecognized character.
                        None => TileKind::Floor,
                    },
                    _ => TileKind::Floor,
                };
                tiles.push(kind);
            }
        }

        Ok(TileMap {
            id,
            width,
            height,
            tiles,
            spawns,
            npcs,
        })
    }

    pub fn id(&self) -> MapId {
        self.id
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Tile at (x, y). Out-of-bounds coordinates, including negative ones,
    /// return a synthetic Wall so boundary collision needs no edge checks.
    pub fn tile_at(&self, x: i32, y: i32) -> TileKind {
        if x < 0 || y < 0 || x as usize >= self.width || y as usize >= self.height {
            return TileKind::Wall;
        }
        self.tiles[y as usize * self.width + x as usize]
    }

    pub fn can_walk(&self, x: i32, y: i32) -> bool {
        self.tile_at(x, y).is_walkable()
    }

    pub fn door_at(&self, x: i32, y: i32) -> Option<(MapId, usize)> {
        match self.tile_at(x, y) {
            TileKind::Door {
                target,
                spawn_index,
            } => Some((target, spawn_index)),
            _ => None,
        }
    }

    pub fn is_encounter(&self, x: i32, y: i32) -> bool {
        self.tile_at(x, y) == TileKind::Encounter
    }

    /// Spawn point by index, in grid scan order. An out-of-range index
    /// returns the fixed fallback (1, 1) rather than failing; malformed
    /// save data must not crash a map load.
    pub fn spawn(&self, index: usize) -> Point {
        self.spawns.get(index).copied().unwrap_or(Point::new(1, 1))
    }

    /// Spawn points in grid scan order.
    pub fn spawns(&self) -> &[Point] {
        &self.spawns
    }

    /// NPC coordinates in grid scan order.
    pub fn npc_positions(&self) -> &[Point] {
        &self.npcs
    }
}

/// Door decode table. A digit's (target, spawn index) depends on the map it
/// appears on; the bool marks digits that also register a spawn point at
/// their own coordinate (house and world-map doors double as re-entry
/// spawns on the map that hosts them).
fn door_for_digit(id: MapId, c: char) -> Option<(MapId, usize, bool)> {
    match c {
        '1' => Some((MapId::Cave, 0, false)),
        '2' => {
            let target = if id == MapId::Dungeon {
                MapId::Field
            } else {
                MapId::Town
            };
            let spawn_index = if id == MapId::WorldMap { 4 } else { 0 };
            Some((target, spawn_index, false))
        }
        '3' => match id {
            MapId::WorldMap => Some((MapId::Field, 0, false)),
            MapId::Field => Some((MapId::Dungeon, 0, false)),
            _ => Some((MapId::House1, 0, true)),
        },
        '4' => Some((MapId::House2, 0, true)),
        '5' => Some((MapId::House3, 0, true)),
        '6' => Some((MapId::Town, 1, false)),
        '7' => Some((MapId::Town, 2, false)),
        '8' => Some((MapId::Town, 3, false)),
        '9' => Some((MapId::WorldMap, 0, true)),
        _ => None,
    }
}
