//! Save snapshot entity - the persisted session state
//!
//! The JSON field names are the save-file schema; changing them breaks
//! existing saves.

use serde::{Deserialize, Serialize};

use crate::domain::value_objects::MapId;

/// One session snapshot: active map, tile position, resources, playtime.
/// A single mutable instance lives in the save store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SaveState {
    /// Map name as a string so an unknown name degrades to Town on read
    /// instead of rejecting the whole snapshot.
    pub map_id: String,
    pub tile_x: i32,
    pub tile_y: i32,
    pub hp: i32,
    pub max_hp: i32,
    pub mp: i32,
    pub max_mp: i32,
    pub seconds_played: f64,
    /// ISO-8601, set only at save time; empty until the first save.
    pub timestamp: String,
}

impl Default for SaveState {
    fn default() -> Self {
        Self {
            map_id: MapId::Town.name().to_string(),
            tile_x: 0,
            tile_y: 0,
            hp: 30,
            max_hp: 30,
            mp: 20,
            max_mp: 20,
            seconds_played: 0.0,
            timestamp: String::new(),
        }
    }
}

impl SaveState {
    /// Active map, with the permissive Town fallback for malformed data.
    pub fn map(&self) -> MapId {
        MapId::from_name_or_town(&self.map_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_schema_field_names() {
        let json = serde_json::to_string(&SaveState::default()).unwrap();
        for field in [
            "\"mapId\"",
            "\"tileX\"",
            "\"tileY\"",
            "\"hp\"",
            "\"maxHp\"",
            "\"mp\"",
            "\"maxMp\"",
            "\"secondsPlayed\"",
            "\"timestamp\"",
        ] {
            assert!(json.contains(field), "missing {field} in {json}");
        }
    }

    #[test]
    fn test_unknown_map_name_degrades_to_town() {
        let state = SaveState {
            map_id: "Atlantis".to_string(),
            ..SaveState::default()
        };
        assert_eq!(state.map(), MapId::Town);
    }

    #[test]
    fn test_missing_fields_take_defaults() {
        let state: SaveState = serde_json::from_str(r#"{"mapId":"Cave"}"#).unwrap();
        assert_eq!(state.map(), MapId::Cave);
        assert_eq!(state.hp, 30);
        assert_eq!(state.max_mp, 20);
        assert_eq!(state.seconds_played, 0.0);
    }
}
