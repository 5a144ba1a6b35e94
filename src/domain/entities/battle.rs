//! Battle session entity - the ephemeral state of one combat encounter
//!
//! One session exists per battle; it is created when an encounter fires and
//! destroyed once a terminal state's display timer elapses. The transition
//! logic lives in the battle service.

use crate::domain::entities::records::EnemyRecord;

/// Turn state of a battle. Victory and Defeat are terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BattleState {
    PlayerTurn,
    EnemyTurn,
    Victory,
    Defeat,
}

/// Player intent during PlayerTurn.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BattleCommand {
    Attack,
    Magic(String),
    Defend,
    Run,
}

/// Terminal report handed back to the caller so the save store can pick up
/// the player's remaining resources.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BattleOutcome {
    pub won: bool,
    pub hp: i32,
    pub max_hp: i32,
    pub mp: i32,
    pub max_mp: i32,
}

/// Mutable state of one battle. A single owned instance is passed by
/// reference to whichever component needs to read or mutate it.
#[derive(Debug, Clone)]
pub struct BattleSession {
    pub player_hp: i32,
    pub player_max_hp: i32,
    pub player_mp: i32,
    pub player_max_mp: i32,
    pub enemy_hp: i32,
    pub enemy_max_hp: i32,
    pub enemy_attack: i32,
    pub enemy_name: String,
    /// Opaque sprite reference for the rendering collaborator.
    pub enemy_sprite: String,
    pub defending: bool,
    pub state: BattleState,
    /// Countdown driving the enemy turn delay and the terminal display
    /// delays. A cosmetic state-machine timer, not an I/O wait.
    pub timer: f32,
    /// Most recent battle message for the presentation layer.
    pub message: String,
}

impl BattleSession {
    pub fn new(hp: i32, max_hp: i32, mp: i32, max_mp: i32, enemy: &EnemyRecord) -> Self {
        Self {
            player_hp: hp,
            player_max_hp: max_hp,
            player_mp: mp,
            player_max_mp: max_mp,
            enemy_hp: enemy.hp,
            enemy_max_hp: enemy.hp,
            enemy_attack: enemy.attack,
            enemy_name: enemy.name.clone(),
            enemy_sprite: enemy.sprite_id.clone(),
            defending: false,
            state: BattleState::PlayerTurn,
            timer: 0.0,
            message: format!("{} approaches!", enemy.name),
        }
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self.state, BattleState::Victory | BattleState::Defeat)
    }
}
