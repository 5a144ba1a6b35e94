//! Static database records - items, skills, enemies, events
//!
//! Each table ships with a built-in list and can be extended by merging
//! externally supplied JSON records over it. Unknown fields in external
//! records are ignored; missing optional fields take the documented
//! defaults.

use serde::{Deserialize, Serialize};

use crate::domain::repository::{Record, Repository};

/// Item definition (consumable, key item, equipment).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ItemRecord {
    pub id: String,
    pub name: String,
    pub kind: ItemKind,
    /// Effect key interpreted by the host (HealHp, HealMp, ...).
    pub effect: String,
    pub value: i32,
}

impl Default for ItemRecord {
    fn default() -> Self {
        Self {
            id: String::new(),
            name: String::new(),
            kind: ItemKind::Consumable,
            effect: String::new(),
            value: 0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ItemKind {
    Consumable,
    Key,
    Equipment,
}

/// Skill/spell available from the battle magic menu.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SkillRecord {
    pub id: String,
    pub name: String,
    pub mp_cost: i32,
    pub power: i32,
    pub target: SkillTarget,
}

impl Default for SkillRecord {
    fn default() -> Self {
        Self {
            id: String::new(),
            name: String::new(),
            mp_cost: 0,
            power: 0,
            target: SkillTarget::Enemy,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SkillTarget {
    Enemy,
    #[serde(rename = "Self")]
    User,
    AllEnemies,
}

/// Enemy definition for battle (stats plus an opaque sprite reference).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EnemyRecord {
    pub id: String,
    pub name: String,
    pub sprite_id: String,
    pub hp: i32,
    pub attack: i32,
    pub experience: i32,
}

impl Default for EnemyRecord {
    fn default() -> Self {
        Self {
            id: String::new(),
            name: String::new(),
            sprite_id: String::new(),
            hp: 1,
            attack: 1,
            experience: 0,
        }
    }
}

/// Event definition (dialogue, story trigger).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EventRecord {
    pub id: String,
    /// Trigger key: Talk, StepOn, ...
    pub trigger: String,
    pub text: String,
    pub portrait_id: String,
    pub next_event_id: String,
}

impl Record for ItemRecord {
    fn id(&self) -> &str {
        &self.id
    }
}

impl Record for SkillRecord {
    fn id(&self) -> &str {
        &self.id
    }
}

impl Record for EnemyRecord {
    fn id(&self) -> &str {
        &self.id
    }
}

impl Record for EventRecord {
    fn id(&self) -> &str {
        &self.id
    }
}

/// Id the enemy table falls back to on unknown lookups and when an empty
/// table has to produce an encounter anyway.
pub const DEFAULT_ENEMY_ID: &str = "Slime";

/// The four static data tables, seeded with built-ins and passed by
/// reference into the world and battle services.
#[derive(Debug)]
pub struct GameData {
    pub items: Repository<ItemRecord>,
    pub skills: Repository<SkillRecord>,
    pub enemies: Repository<EnemyRecord>,
    pub events: Repository<EventRecord>,
}

impl GameData {
    pub fn with_builtins() -> Self {
        Self {
            items: Repository::seeded(builtin_items()),
            skills: Repository::seeded(builtin_skills()),
            enemies: Repository::seeded_with_fallback(builtin_enemies(), DEFAULT_ENEMY_ID),
            events: Repository::seeded(builtin_events()),
        }
    }
}

fn item(id: &str, name: &str, kind: ItemKind, effect: &str, value: i32) -> ItemRecord {
    ItemRecord {
        id: id.to_string(),
        name: name.to_string(),
        kind,
        effect: effect.to_string(),
        value,
    }
}

pub fn builtin_items() -> Vec<ItemRecord> {
    vec![
        item("Potion", "Potion", ItemKind::Consumable, "HealHp", 20),
        item("Ether", "Ether", ItemKind::Consumable, "HealMp", 15),
        item("Key", "Dungeon Key", ItemKind::Key, "OpenDoor", 0),
        item("Antidote", "Antidote", ItemKind::Consumable, "CurePoison", 10),
        item(
            "PhoenixDown",
            "Phoenix Down",
            ItemKind::Consumable,
            "Revive",
            50,
        ),
    ]
}

fn skill(id: &str, mp_cost: i32, power: i32, target: SkillTarget) -> SkillRecord {
    SkillRecord {
        id: id.to_string(),
        name: id.to_string(),
        mp_cost,
        power,
        target,
    }
}

pub fn builtin_skills() -> Vec<SkillRecord> {
    vec![
        skill("Fire", 4, 10, SkillTarget::Enemy),
        skill("Ice", 4, 10, SkillTarget::Enemy),
        skill("Heal", 6, 15, SkillTarget::User),
        skill("Thunder", 8, 18, SkillTarget::Enemy),
        skill("Cure", 5, 20, SkillTarget::User),
        skill("Blizzard", 10, 22, SkillTarget::Enemy),
    ]
}

fn enemy(id: &str, hp: i32, attack: i32, experience: i32) -> EnemyRecord {
    EnemyRecord {
        id: id.to_string(),
        name: id.to_string(),
        sprite_id: id.to_string(),
        hp,
        attack,
        experience,
    }
}

pub fn builtin_enemies() -> Vec<EnemyRecord> {
    vec![
        enemy("Slime", 15, 3, 5),
        enemy("Bat", 10, 4, 6),
        enemy("Skeleton", 22, 5, 10),
        enemy("Goblin", 18, 4, 8),
        enemy("Orc", 28, 6, 14),
        enemy("Ghost", 12, 5, 12),
    ]
}

fn event(id: &str, trigger: &str, text: &str) -> EventRecord {
    EventRecord {
        id: id.to_string(),
        trigger: trigger.to_string(),
        text: text.to_string(),
        portrait_id: String::new(),
        next_event_id: String::new(),
    }
}

pub fn builtin_events() -> Vec<EventRecord> {
    vec![
        event("town_greeting", "Talk", "Welcome to town!"),
        event("cave_warning", "StepOn", "The cave looks dark..."),
        event(
            "field_welcome",
            "StepOn",
            "Open fields. Watch out for monsters!",
        ),
        event(
            "dungeon_door",
            "Talk",
            "The door is locked. You need a key.",
        ),
    ]
}
