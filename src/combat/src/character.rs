// src/combat/src/character.rs

use error::GameError;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::notify::Notifier;

/// Health, mana and life state shared by every combatant.
///
/// Current health is signed: a heavy blow can leave it below zero and that
/// value stays visible to callers. Mana is never allowed below zero; spending
/// more than is available is refused instead of clamped.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Character {
    name: String,
    hp: i64,
    max_hp: i64,
    mana: i64,
    max_mana: i64,
    dead: bool,
}

impl Character {
    /// Creates a character at full health and mana.
    pub fn new(name: impl Into<String>, max_hp: i64, max_mana: i64) -> Self {
        Self::with_current(name, max_hp, max_hp, max_mana, max_mana)
    }

    /// Creates a character whose pools start below their maxima.
    pub fn with_current(
        name: impl Into<String>,
        hp: i64,
        max_hp: i64,
        mana: i64,
        max_mana: i64,
    ) -> Self {
        Self {
            name: name.into(),
            hp,
            max_hp,
            mana,
            max_mana,
            dead: false,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn hp(&self) -> i64 {
        self.hp
    }

    pub fn max_hp(&self) -> i64 {
        self.max_hp
    }

    pub fn mana(&self) -> i64 {
        self.mana
    }

    pub fn max_mana(&self) -> i64 {
        self.max_mana
    }

    pub fn is_dead(&self) -> bool {
        self.dead
    }

    /// Subtracts `amount` from current health.
    ///
    /// Returns `true` when this blow is the one that kills: health is at or
    /// below zero and the character was not already dead. The caller is
    /// responsible for crediting the kill and then calling [`Character::die`].
    pub fn take_damage<N>(&mut self, amount: i64, out: &mut N) -> bool
    where
        N: Notifier + ?Sized,
    {
        let amount = amount.max(0);
        self.hp = self.hp.saturating_sub(amount);
        out.display_message(&format!("The {} takes {} damage.", self.name, amount));
        debug!(name = %self.name, amount, hp = self.hp, "damage taken");

        self.hp <= 0 && !self.dead
    }

    /// Marks the character as dead. Health is left where the killing blow put it.
    pub fn die(&mut self) {
        self.dead = true;
    }

    /// Adds health, never past the maximum. Returns the amount actually restored.
    pub fn restore_health<N>(&mut self, amount: i64, source: &str, out: &mut N) -> i64
    where
        N: Notifier + ?Sized,
    {
        let gained = clamp_gain(self.hp, amount, self.max_hp);
        out.display_message(&format!("The {source} gains {gained} health."));
        self.hp += gained;
        gained
    }

    /// Adds mana, never past the maximum. Returns the amount actually restored.
    pub fn restore_mana<N>(&mut self, amount: i64, source: &str, out: &mut N) -> i64
    where
        N: Notifier + ?Sized,
    {
        let gained = clamp_gain(self.mana, amount, self.max_mana);
        out.display_message(&format!("The {source} gains {gained} mana."));
        self.mana += gained;
        gained
    }

    /// Removes mana. Fails without side effects when `amount` exceeds the
    /// current pool; callers are expected to check affordability first.
    pub fn spend_mana<N>(&mut self, amount: i64, source: &str, out: &mut N) -> Result<(), GameError>
    where
        N: Notifier + ?Sized,
    {
        let amount = amount.max(0);
        if !self.can_afford(amount) {
            return Err(GameError::InsufficientMana {
                name: self.name.clone(),
                requested: amount,
                available: self.mana,
            });
        }
        out.display_message(&format!("The {source} loses {amount} mana."));
        self.mana -= amount;
        Ok(())
    }

    /// Whether `amount` mana could be spent right now.
    pub fn can_afford(&self, amount: i64) -> bool {
        amount <= self.mana
    }

    /// Sets new maxima and refills both pools to them.
    pub fn refill_to(&mut self, max_hp: i64, max_mana: i64) {
        self.max_hp = max_hp;
        self.hp = max_hp;
        self.max_mana = max_mana;
        self.mana = max_mana;
    }
}

// Gain that takes `current` up to at most `max`. Never negative.
fn clamp_gain(current: i64, amount: i64, max: i64) -> i64 {
    let amount = amount.max(0);
    if current.saturating_add(amount) > max {
        (max - current).max(0)
    } else {
        amount
    }
}
