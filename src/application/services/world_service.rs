//! World graph and movement - map registry, transitions, encounter hook
//!
//! The graph owns the parsed maps; the service layers a cursor over it
//! (active map plus player tile) and resolves one discrete step at a time,
//! handing the caller a [`StepOutcome`] to act on.

use std::collections::hash_map::Entry;
use std::collections::HashMap;

use rand::Rng;
use tracing::{debug, info};

use crate::application::services::encounter_service::EncounterController;
use crate::domain::entities::{EnemyRecord, MapError, TileMap};
use crate::domain::map_data;
use crate::domain::repository::Repository;
use crate::domain::value_objects::{Direction, MapId, Point, TileKind};

#[derive(Debug, thiserror::Error)]
pub enum WorldError {
    #[error("map {map}: {source}")]
    InvalidMap {
        map: MapId,
        #[source]
        source: MapError,
    },
}

/// Registry of every playable map, parsed from the embedded grids on first
/// use and cached thereafter.
#[derive(Debug, Default)]
pub struct WorldGraph {
    cache: HashMap<MapId, TileMap>,
}

impl WorldGraph {
    pub fn with_builtin_maps() -> Self {
        Self::default()
    }

    /// Parse every registered grid up front. Called once at startup so a
    /// malformed grid aborts the run instead of surfacing mid-transition.
    pub fn validate_all(&mut self) -> Result<(), WorldError> {
        for id in MapId::ALL {
            self.map(id)?;
        }
        info!(maps = MapId::ALL.len(), "world data validated");
        Ok(())
    }

    /// Parsed map for `id`, parse-or-cached.
    pub fn map(&mut self, id: MapId) -> Result<&TileMap, WorldError> {
        match self.cache.entry(id) {
            Entry::Occupied(entry) => Ok(entry.into_mut()),
            Entry::Vacant(entry) => {
                let parsed = TileMap::parse(id, map_data::grid(id))
                    .map_err(|source| WorldError::InvalidMap { map: id, source })?;
                Ok(entry.insert(parsed))
            }
        }
    }

    /// Spawn point `index` on `id`, with the out-of-range fallback applied
    /// by the map itself.
    pub fn spawn_point(&mut self, id: MapId, index: usize) -> Result<Point, WorldError> {
        Ok(self.map(id)?.spawn(index))
    }
}

/// Result of one attempted step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StepOutcome {
    /// Target tile is not walkable; the player did not move.
    Blocked,
    Moved(Point),
    /// The player stepped through a door onto another map.
    Transitioned { map: MapId, at: Point },
    /// The player moved onto an encounter tile and a battle triggered.
    Encounter { enemy_id: String, at: Point },
}

/// Movement cursor over the world graph.
#[derive(Debug)]
pub struct WorldService {
    graph: WorldGraph,
    current_map: MapId,
    player: Point,
}

impl WorldService {
    /// Start at the primary spawn of `map`.
    pub fn new(mut graph: WorldGraph, map: MapId) -> Result<Self, WorldError> {
        let player = graph.spawn_point(map, 0)?;
        Ok(Self {
            graph,
            current_map: map,
            player,
        })
    }

    pub fn current_map(&self) -> MapId {
        self.current_map
    }

    pub fn position(&self) -> Point {
        self.player
    }

    pub fn active_map(&mut self) -> Result<&TileMap, WorldError> {
        self.graph.map(self.current_map)
    }

    /// Move through a door: land on the target map's given spawn point.
    pub fn enter(&mut self, map: MapId, spawn_index: usize) -> Result<Point, WorldError> {
        let at = self.graph.spawn_point(map, spawn_index)?;
        debug!(%map, spawn_index, x = at.x, y = at.y, "map transition");
        self.current_map = map;
        self.player = at;
        Ok(at)
    }

    /// Restore a saved position verbatim, bypassing spawn points.
    pub fn place(&mut self, map: MapId, at: Point) -> Result<(), WorldError> {
        self.graph.map(map)?;
        self.current_map = map;
        self.player = at;
        Ok(())
    }

    /// Attempt one step. Walkability and doors come from the map; the
    /// encounter draw uses the supplied generator so the caller controls
    /// determinism.
    pub fn step<R: Rng>(
        &mut self,
        direction: Direction,
        rng: &mut R,
        enemies: &Repository<EnemyRecord>,
    ) -> Result<StepOutcome, WorldError> {
        let (dx, dy) = direction.delta();
        let target = Point::new(self.player.x + dx, self.player.y + dy);

        // Copy the tile out before mutating the cursor; `map` borrows the
        // graph mutably.
        let tile = self.graph.map(self.current_map)?.tile_at(target.x, target.y);
        if !tile.is_walkable() {
            return Ok(StepOutcome::Blocked);
        }
        if let TileKind::Door { target: map, spawn_index } = tile {
            let at = self.enter(map, spawn_index)?;
            return Ok(StepOutcome::Transitioned { map, at });
        }

        self.player = target;
        // Plain floor never touches the generator; the draw happens only
        // on encounter tiles so the random stream stays replayable.
        if tile == TileKind::Encounter {
            let roll = rng.gen_range(0..100);
            if let Some(enemy_id) = EncounterController::maybe_encounter(true, roll, rng, enemies) {
                return Ok(StepOutcome::Encounter {
                    enemy_id,
                    at: target,
                });
            }
        }
        Ok(StepOutcome::Moved(target))
    }
}
