// src/combat/src/enemy.rs

use serde::{Deserialize, Serialize};

use crate::character::Character;
use crate::notify::title_case;

fn full() -> f64 {
    1.0
}

/// Template an enemy is stamped from.
///
/// Many enemies may share a profile; each instance owns its own health and
/// mana after [`EnemyProfile::instantiate`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnemyProfile {
    pub name: String,
    pub max_hp: i64,
    pub max_mana: i64,
    pub attack_damage: i64,
    pub xp_value: u64,
    /// Share of `max_hp` the enemy spawns with.
    #[serde(default = "full")]
    pub initial_hp_fraction: f64,
    /// Share of `max_mana` the enemy spawns with.
    #[serde(default = "full")]
    pub initial_mana_fraction: f64,
}

impl EnemyProfile {
    pub fn new(
        name: impl Into<String>,
        max_hp: i64,
        max_mana: i64,
        attack_damage: i64,
        xp_value: u64,
    ) -> Self {
        Self {
            name: name.into(),
            max_hp,
            max_mana,
            attack_damage,
            xp_value,
            initial_hp_fraction: 1.0,
            initial_mana_fraction: 1.0,
        }
    }

    pub fn with_initial_hp_fraction(mut self, fraction: f64) -> Self {
        self.initial_hp_fraction = fraction;
        self
    }

    pub fn with_initial_mana_fraction(mut self, fraction: f64) -> Self {
        self.initial_mana_fraction = fraction;
        self
    }

    /// `floor(max_hp * initial_hp_fraction)`
    pub fn initial_hp(&self) -> i64 {
        scaled(self.max_hp, self.initial_hp_fraction)
    }

    /// `floor(max_mana * initial_mana_fraction)`
    pub fn initial_mana(&self) -> i64 {
        scaled(self.max_mana, self.initial_mana_fraction)
    }

    /// Builds a fresh, independent enemy from this profile.
    pub fn instantiate(&self) -> Enemy {
        Enemy {
            character: Character::with_current(
                self.name.clone(),
                self.initial_hp(),
                self.max_hp,
                self.initial_mana(),
                self.max_mana,
            ),
            attack_damage: self.attack_damage,
            xp_value: self.xp_value,
        }
    }
}

fn scaled(max: i64, fraction: f64) -> i64 {
    (max as f64 * fraction).floor() as i64
}

/// A hostile combatant living in a room.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Enemy {
    character: Character,
    attack_damage: i64,
    xp_value: u64,
}

impl Enemy {
    pub fn name(&self) -> &str {
        self.character.name()
    }

    /// Name as shown in room messages, e.g. `Goblin`.
    pub fn display_name(&self) -> String {
        title_case(self.character.name())
    }

    pub fn character(&self) -> &Character {
        &self.character
    }

    pub fn character_mut(&mut self) -> &mut Character {
        &mut self.character
    }

    pub fn attack_damage(&self) -> i64 {
        self.attack_damage
    }

    /// Experience granted to whoever lands the killing blow.
    pub fn xp_value(&self) -> u64 {
        self.xp_value
    }

    pub fn is_dead(&self) -> bool {
        self.character.is_dead()
    }
}
