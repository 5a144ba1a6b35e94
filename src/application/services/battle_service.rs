//! Battle engine - turn resolution for one combat encounter
//!
//! The engine owns at most one session at a time. Player commands resolve
//! immediately; the enemy turn and the terminal screens are held behind
//! short display timers that the host drains by calling `tick` with its
//! frame delta.

use tracing::debug;

use crate::domain::entities::{
    BattleCommand, BattleOutcome, BattleSession, BattleState, EnemyRecord, SkillRecord,
    SkillTarget,
};
use crate::domain::repository::Repository;

/// Fixed damage of the basic attack command.
pub const PLAYER_ATTACK: i32 = 5;
/// Incoming damage reduction while defending.
pub const DEFEND_REDUCTION: i32 = 2;

/// Seconds before the enemy turn resolves.
pub const ENEMY_TURN_DELAY: f32 = 1.2;
/// Seconds the victory message stays up before the outcome is reported.
pub const VICTORY_DELAY: f32 = 1.2;
/// Seconds the flee message stays up. Running always succeeds.
pub const RUN_DELAY: f32 = 0.8;
/// Seconds the defeat message stays up before the outcome is reported.
pub const DEFEAT_DELAY: f32 = 1.5;

/// Drives battle sessions from start to a terminal outcome.
#[derive(Debug, Default)]
pub struct BattleEngine {
    session: Option<BattleSession>,
}

impl BattleEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Begin a battle against `enemy` with the player's current resources.
    /// Replaces any session already in flight.
    pub fn start(&mut self, hp: i32, max_hp: i32, mp: i32, max_mp: i32, enemy: &EnemyRecord) {
        debug!(enemy = %enemy.id, enemy_hp = enemy.hp, "battle started");
        self.session = Some(BattleSession::new(hp, max_hp, mp, max_mp, enemy));
    }

    pub fn in_battle(&self) -> bool {
        self.session.is_some()
    }

    pub fn session(&self) -> Option<&BattleSession> {
        self.session.as_ref()
    }

    /// Apply a player command. Ignored outside of the player's turn, so the
    /// host can forward input unconditionally.
    pub fn execute(&mut self, command: BattleCommand, skills: &Repository<SkillRecord>) {
        let Some(session) = self.session.as_mut() else {
            return;
        };
        if session.state != BattleState::PlayerTurn {
            return;
        }
        match command {
            BattleCommand::Attack => {
                session.enemy_hp = (session.enemy_hp - PLAYER_ATTACK).max(0);
                session.message = format!("Dealt {PLAYER_ATTACK} damage!");
                Self::after_player_action(session);
            }
            BattleCommand::Magic(skill_id) => {
                let Some(skill) = skills.get(&skill_id) else {
                    return;
                };
                if session.player_mp < skill.mp_cost {
                    session.message = "Not enough MP!".to_string();
                    return;
                }
                session.player_mp -= skill.mp_cost;
                match skill.target {
                    SkillTarget::User => {
                        let healed = (session.player_hp + skill.power).min(session.player_max_hp)
                            - session.player_hp;
                        session.player_hp += healed;
                        session.message = format!("Recovered {healed} HP!");
                        session.state = BattleState::EnemyTurn;
                        session.timer = ENEMY_TURN_DELAY;
                    }
                    SkillTarget::Enemy | SkillTarget::AllEnemies => {
                        session.enemy_hp = (session.enemy_hp - skill.power).max(0);
                        session.message = format!("Dealt {} damage!", skill.power);
                        Self::after_player_action(session);
                    }
                }
            }
            BattleCommand::Defend => {
                session.defending = true;
                session.message = "Defending...".to_string();
                session.state = BattleState::EnemyTurn;
                session.timer = ENEMY_TURN_DELAY;
            }
            BattleCommand::Run => {
                session.message = "Fled!".to_string();
                session.state = BattleState::Victory;
                session.timer = RUN_DELAY;
            }
        }
    }

    /// Advance display timers. Resolves the enemy turn when its delay
    /// elapses and reports the outcome once a terminal delay elapses, at
    /// which point the session is dropped.
    pub fn tick(&mut self, dt: f32) -> Option<BattleOutcome> {
        let session = self.session.as_mut()?;
        if session.state == BattleState::PlayerTurn {
            return None;
        }
        session.timer -= dt;
        if session.timer > 0.0 {
            return None;
        }
        match session.state {
            BattleState::EnemyTurn => {
                let reduction = if session.defending { DEFEND_REDUCTION } else { 0 };
                let damage = (session.enemy_attack - reduction).max(1);
                session.player_hp = (session.player_hp - damage).max(0);
                session.defending = false;
                session.message = format!("{} hit for {damage}!", session.enemy_name);
                if session.player_hp <= 0 {
                    session.state = BattleState::Defeat;
                    session.timer = DEFEAT_DELAY;
                    session.message = "You were defeated...".to_string();
                } else {
                    session.state = BattleState::PlayerTurn;
                }
                None
            }
            BattleState::Victory | BattleState::Defeat => {
                let won = session.state == BattleState::Victory;
                let outcome = BattleOutcome {
                    won,
                    hp: session.player_hp,
                    max_hp: session.player_max_hp,
                    mp: session.player_mp,
                    max_mp: session.player_max_mp,
                };
                debug!(won, hp = outcome.hp, mp = outcome.mp, "battle finished");
                self.session = None;
                Some(outcome)
            }
            BattleState::PlayerTurn => None,
        }
    }

    fn after_player_action(session: &mut BattleSession) {
        if session.enemy_hp <= 0 {
            session.state = BattleState::Victory;
            session.timer = VICTORY_DELAY;
            session.message = "Victory!".to_string();
        } else {
            session.state = BattleState::EnemyTurn;
            session.timer = ENEMY_TURN_DELAY;
        }
    }
}
