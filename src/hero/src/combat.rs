// src/hero/src/combat.rs

use combat::{Character, Combat, Enemy, GameRng, Notifier, Strike};
use tracing::debug;

use crate::player::Player;

/// Anything that can trade blows, tagged by what it is.
///
/// Only the player variant progresses: kill credit, experience and level-ups
/// are applied when the attacker is a [`Fighter::Player`] and the victim a
/// [`Fighter::Enemy`], and nowhere else.
#[derive(Debug)]
pub enum Fighter<'a> {
    Player(&'a mut Player),
    Enemy(&'a mut Enemy),
}

impl Fighter<'_> {
    pub fn name(&self) -> &str {
        self.character().name()
    }

    pub fn character(&self) -> &Character {
        match self {
            Fighter::Player(player) => player.character(),
            Fighter::Enemy(enemy) => enemy.character(),
        }
    }

    fn character_mut(&mut self) -> &mut Character {
        match self {
            Fighter::Player(player) => player.character_mut(),
            Fighter::Enemy(enemy) => enemy.character_mut(),
        }
    }

    pub fn attack_damage(&self) -> i64 {
        match self {
            Fighter::Player(player) => player.attack_damage(),
            Fighter::Enemy(enemy) => enemy.attack_damage(),
        }
    }

    pub fn is_dead(&self) -> bool {
        self.character().is_dead()
    }

    /// Attacks `target` once: announces the attack, rolls damage with ±25%
    /// variance and resolves it on the target.
    pub fn attack<N>(&mut self, target: &mut Fighter<'_>, rng: &mut GameRng, out: &mut N) -> Strike
    where
        N: Notifier + ?Sized,
    {
        out.display_message(&format!("The {} attacks the {}.", self.name(), target.name()));
        let damage = Combat::roll_damage(self.attack_damage(), rng);
        debug!(attacker = self.name(), defender = target.name(), damage, "attack");

        let slain = target.take_damage(damage, self, rng, out);
        Strike { damage, slain }
    }

    /// Applies `amount` damage dealt by `source`. On the killing blow the
    /// source is credited first, then this fighter dies. Returns whether this
    /// blow killed.
    pub fn take_damage<N>(
        &mut self,
        amount: i64,
        source: &mut Fighter<'_>,
        rng: &mut GameRng,
        out: &mut N,
    ) -> bool
    where
        N: Notifier + ?Sized,
    {
        if !self.character_mut().take_damage(amount, out) {
            return false;
        }
        source.register_kill(self, rng, out);
        self.die(out);
        true
    }

    /// Kill credit. A no-op unless a player killed an enemy.
    pub fn register_kill<N>(&mut self, victim: &Fighter<'_>, rng: &mut GameRng, out: &mut N)
    where
        N: Notifier + ?Sized,
    {
        if let (Fighter::Player(player), Fighter::Enemy(enemy)) = (self, victim) {
            player.register_kill(enemy, rng, out);
        }
    }

    fn die<N>(&mut self, out: &mut N)
    where
        N: Notifier + ?Sized,
    {
        match self {
            Fighter::Player(player) => player.die(out),
            Fighter::Enemy(enemy) => enemy.character_mut().die(),
        }
    }
}
