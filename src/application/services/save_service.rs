//! Save store - the single save slot and its clamping rules
//!
//! The store owns the live [`SaveState`] and is the only writer to it.
//! Stat updates clamp on the way in so a snapshot on disk is always
//! internally consistent; loading never applies a partial snapshot.

use anyhow::Context;
use tracing::{debug, warn};

use crate::application::ports::outbound::SaveStoragePort;
use crate::domain::entities::SaveState;
use crate::domain::value_objects::MapId;

/// Starting position for a fresh game.
pub const NEW_GAME_MAP: MapId = MapId::Town;
pub const NEW_GAME_X: i32 = 4;
pub const NEW_GAME_Y: i32 = 7;

pub struct SaveStore {
    state: SaveState,
    storage: Box<dyn SaveStoragePort>,
}

impl SaveStore {
    pub fn new(storage: Box<dyn SaveStoragePort>) -> Self {
        let mut store = Self {
            state: SaveState::default(),
            storage,
        };
        store.reset_to_new_game();
        store
    }

    pub fn current(&self) -> &SaveState {
        &self.state
    }

    /// Fresh-game snapshot: Town at (4, 7), full starting resources,
    /// zero playtime.
    pub fn reset_to_new_game(&mut self) {
        self.state = SaveState {
            map_id: NEW_GAME_MAP.name().to_string(),
            tile_x: NEW_GAME_X,
            tile_y: NEW_GAME_Y,
            ..SaveState::default()
        };
    }

    pub fn update_position(&mut self, map: MapId, x: i32, y: i32) {
        self.state.map_id = map.name().to_string();
        self.state.tile_x = x;
        self.state.tile_y = y;
    }

    /// Record hit points. Current is clamped against the max as given,
    /// then the stored max is floored at 1; a zero max therefore stores
    /// hp 0, not hp 1.
    pub fn update_hp(&mut self, hp: i32, max_hp: i32) {
        self.state.hp = hp.min(max_hp).max(0);
        self.state.max_hp = max_hp.max(1);
    }

    /// Record magic points. Same order as hit points, with the stored max
    /// floored at 0.
    pub fn update_mp(&mut self, mp: i32, max_mp: i32) {
        self.state.mp = mp.min(max_mp).max(0);
        self.state.max_mp = max_mp.max(0);
    }

    pub fn add_time_played(&mut self, seconds: f64) {
        self.state.seconds_played += seconds;
    }

    /// Write the snapshot. The timestamp is stamped here and nowhere else.
    pub fn save(&mut self) -> anyhow::Result<()> {
        self.state.timestamp = chrono::Utc::now().to_rfc3339();
        let json = serde_json::to_string_pretty(&self.state)
            .context("failed to serialize save state")?;
        self.storage
            .write(&json)
            .context("failed to write save file")?;
        debug!(map = %self.state.map_id, "session saved");
        Ok(())
    }

    /// Read the snapshot back. Returns false, leaving the current state
    /// untouched, when no save exists or the stored text is unreadable.
    pub fn load(&mut self) -> bool {
        let contents = match self.storage.read() {
            Ok(Some(contents)) => contents,
            Ok(None) => return false,
            Err(error) => {
                warn!(%error, "save file unreadable");
                return false;
            }
        };
        match serde_json::from_str::<SaveState>(&contents) {
            Ok(state) => {
                debug!(map = %state.map_id, "session restored");
                self.state = state;
                true
            }
            Err(error) => {
                warn!(%error, "save file corrupt, ignoring");
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    /// In-memory storage double for exercising the store without disk.
    #[derive(Default)]
    struct MemoryStorage {
        contents: Rc<RefCell<Option<String>>>,
    }

    impl SaveStoragePort for MemoryStorage {
        fn read(&self) -> anyhow::Result<Option<String>> {
            Ok(self.contents.borrow().clone())
        }

        fn write(&self, contents: &str) -> anyhow::Result<()> {
            *self.contents.borrow_mut() = Some(contents.to_string());
            Ok(())
        }
    }

    fn store_with_shared_buffer() -> (SaveStore, Rc<RefCell<Option<String>>>) {
        let buffer = Rc::new(RefCell::new(None));
        let storage = MemoryStorage {
            contents: Rc::clone(&buffer),
        };
        (SaveStore::new(Box::new(storage)), buffer)
    }

    #[test]
    fn test_new_game_snapshot() {
        let (store, _) = store_with_shared_buffer();
        let state = store.current();
        assert_eq!(state.map(), MapId::Town);
        assert_eq!((state.tile_x, state.tile_y), (4, 7));
        assert_eq!((state.hp, state.max_hp), (30, 30));
        assert_eq!((state.mp, state.max_mp), (20, 20));
        assert_eq!(state.seconds_played, 0.0);
        assert!(state.timestamp.is_empty());
    }

    #[test]
    fn test_save_then_load_round_trip() {
        let (mut store, buffer) = store_with_shared_buffer();
        store.update_position(MapId::Cave, 7, 4);
        store.update_hp(12, 30);
        store.update_mp(5, 20);
        store.add_time_played(90.5);
        store.save().unwrap();
        assert!(buffer.borrow().is_some());

        store.reset_to_new_game();
        assert!(store.load());
        let state = store.current();
        assert_eq!(state.map(), MapId::Cave);
        assert_eq!((state.tile_x, state.tile_y), (7, 4));
        assert_eq!(state.hp, 12);
        assert_eq!(state.mp, 5);
        assert_eq!(state.seconds_played, 90.5);
        assert!(!state.timestamp.is_empty());
    }

    #[test]
    fn test_load_without_save_returns_false() {
        let (mut store, _) = store_with_shared_buffer();
        store.update_hp(1, 30);
        assert!(!store.load());
        // State untouched on a missing save.
        assert_eq!(store.current().hp, 1);
    }

    #[test]
    fn test_corrupt_save_is_ignored_without_partial_apply() {
        let (mut store, buffer) = store_with_shared_buffer();
        *buffer.borrow_mut() = Some("{not json".to_string());
        store.update_position(MapId::Field, 2, 3);
        assert!(!store.load());
        assert_eq!(store.current().map(), MapId::Field);
        assert_eq!(store.current().tile_x, 2);
    }

    #[test]
    fn test_hp_clamping() {
        let (mut store, _) = store_with_shared_buffer();
        store.update_hp(-5, 30);
        assert_eq!(store.current().hp, 0);
        store.update_hp(50, 30);
        assert_eq!(store.current().hp, 30);
        // The raw max caps the current value before the max itself is
        // floored: a dead-at-zero-max snapshot stays dead.
        store.update_hp(10, 0);
        assert_eq!(store.current().max_hp, 1);
        assert_eq!(store.current().hp, 0);
        store.update_hp(10, -4);
        assert_eq!(store.current().max_hp, 1);
        assert_eq!(store.current().hp, 0);
    }

    #[test]
    fn test_mp_clamping() {
        let (mut store, _) = store_with_shared_buffer();
        store.update_mp(-3, 20);
        assert_eq!(store.current().mp, 0);
        store.update_mp(99, 20);
        assert_eq!(store.current().mp, 20);
        store.update_mp(5, -10);
        assert_eq!(store.current().max_mp, 0);
        assert_eq!(store.current().mp, 0);
    }

    #[test]
    fn test_timestamp_is_rfc3339_at_save_time() {
        let (mut store, buffer) = store_with_shared_buffer();
        store.save().unwrap();
        let json = buffer.borrow().clone().unwrap();
        let state: SaveState = serde_json::from_str(&json).unwrap();
        assert!(chrono::DateTime::parse_from_rfc3339(&state.timestamp).is_ok());
    }
}
