// src/hero/src/player.rs

use combat::{Character, Enemy, GameRng, Notifier};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::attributes::{Attribute, Attributes};
use crate::class::{Class, Portrait};

/// Name the player goes by in combat messages.
pub const PLAYER_NAME: &str = "player";
/// Experience needed to reach level 2.
pub const STARTING_XP_TO_LEVEL: u64 = 10;

/// The player character.
///
/// Health, mana and attack are derived from attributes: `max_hp` is ten times
/// constitution, `max_mana` ten times wisdom and attack damage twice strength.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Player {
    character: Character,
    class: Class,
    attributes: Attributes,
    level: u64,
    experience: u64,
    experience_to_next_level: u64,
    portrait: Option<Portrait>,
}

impl Player {
    pub fn new(class: Class) -> Self {
        let attributes = class.base_attributes();
        let character = Character::new(
            PLAYER_NAME,
            max_hp_for(&attributes),
            max_mana_for(&attributes),
        );
        Self {
            character,
            class,
            attributes,
            level: 1,
            experience: 0,
            experience_to_next_level: STARTING_XP_TO_LEVEL,
            portrait: None,
        }
    }

    pub fn character(&self) -> &Character {
        &self.character
    }

    pub fn character_mut(&mut self) -> &mut Character {
        &mut self.character
    }

    pub fn class(&self) -> Class {
        self.class
    }

    pub fn attribute(&self, attr: Attribute) -> i64 {
        self.attributes.get(attr)
    }

    pub fn attributes(&self) -> &Attributes {
        &self.attributes
    }

    /// Always computed from current strength.
    pub fn attack_damage(&self) -> i64 {
        self.attributes.get(Attribute::Strength).saturating_mul(2)
    }

    pub fn level(&self) -> u64 {
        self.level
    }

    pub fn experience(&self) -> u64 {
        self.experience
    }

    pub fn experience_to_next_level(&self) -> u64 {
        self.experience_to_next_level
    }

    pub fn portrait(&self) -> Option<Portrait> {
        self.portrait
    }

    pub fn set_portrait(&mut self, portrait: Portrait) {
        self.portrait = Some(portrait);
    }

    pub fn is_dead(&self) -> bool {
        self.character.is_dead()
    }

    /// Credits a kill: announces it and awards the enemy's experience.
    pub fn register_kill<N>(&mut self, enemy: &Enemy, rng: &mut GameRng, out: &mut N)
    where
        N: Notifier + ?Sized,
    {
        out.display_message(&format!("The {} was killed.", enemy.display_name()));
        self.gain_xp(enemy.xp_value(), rng, out);
    }

    /// Adds experience. Crossing the threshold levels up once, no matter how
    /// far past it the new total lands.
    pub fn gain_xp<N>(&mut self, amount: u64, rng: &mut GameRng, out: &mut N)
    where
        N: Notifier + ?Sized,
    {
        self.experience = self.experience.saturating_add(amount);
        out.display_message(&format!("You gain {amount}xp."));
        debug!(amount, total = self.experience, "experience gained");

        if self.experience >= self.experience_to_next_level {
            self.level_up(rng, out);
        }
    }

    /// Grows every attribute by 15-35% (rounded half up), refills health and
    /// mana to the new maxima and raises the next threshold by a quarter.
    /// Stats stop at the integer ceiling instead of wrapping.
    pub fn level_up<N>(&mut self, rng: &mut GameRng, out: &mut N)
    where
        N: Notifier + ?Sized,
    {
        let next_level = self.level.saturating_add(1);
        out.display_message(&format!("You have reached level {next_level}!"));

        for attr in Attribute::all() {
            let increase = growth(self.attributes.get(attr), rng.growth_rate());
            out.display_message(&format!("{attr} was increased by {increase}"));
            self.attributes.increase(attr, increase);
        }

        self.character
            .refill_to(max_hp_for(&self.attributes), max_mana_for(&self.attributes));
        self.experience_to_next_level = self
            .experience_to_next_level
            .saturating_add(self.experience_to_next_level / 4);
        self.level = next_level;
        self.experience = 0;

        out.display_message("");
        info!(level = self.level, next = self.experience_to_next_level, "level up");
    }

    /// Marks the player dead. There is no revival; the session decides what
    /// happens next.
    pub fn die<N>(&mut self, out: &mut N)
    where
        N: Notifier + ?Sized,
    {
        self.character.die();
        out.display_message("The player has fallen.");
        info!(level = self.level, "player defeated");
    }
}

fn max_hp_for(attributes: &Attributes) -> i64 {
    attributes.get(Attribute::Constitution).saturating_mul(10)
}

fn max_mana_for(attributes: &Attributes) -> i64 {
    attributes.get(Attribute::Wisdom).saturating_mul(10)
}

/// `floor(value * rate + 0.5)`
fn growth(value: i64, rate: f64) -> i64 {
    (value as f64 * rate + 0.5).floor() as i64
}

#[cfg(test)]
mod tests {
    use super::*;
    use combat::{EnemyProfile, Silent, Transcript};
    use proptest::prelude::*;

    #[test]
    fn test_new_mage() {
        let mage = Player::new(Class::Mage);
        assert_eq!(mage.attribute(Attribute::Strength), 10);
        assert_eq!(mage.attribute(Attribute::Intelligence), 12);
        assert_eq!(mage.attribute(Attribute::Wisdom), 15);
        assert_eq!(mage.attribute(Attribute::Constitution), 10);
        assert_eq!(mage.character().max_hp(), 100);
        assert_eq!(mage.character().hp(), 100);
        assert_eq!(mage.character().max_mana(), 150);
        assert_eq!(mage.attack_damage(), 20);
        assert_eq!(mage.level(), 1);
        assert_eq!(mage.experience(), 0);
        assert_eq!(mage.experience_to_next_level(), 10);
        assert_eq!(mage.portrait(), None);
    }

    #[test]
    fn test_growth_rounds_half_up() {
        assert_eq!(growth(10, 0.15), 2);
        assert_eq!(growth(10, 0.35), 4);
        assert_eq!(growth(10, 0.24), 2);
        assert_eq!(growth(10, 0.25), 3);
        assert_eq!(growth(1, 0.15), 0);
    }

    #[test]
    fn test_gain_xp_below_threshold() {
        let mut player = Player::new(Class::Rogue);
        let mut rng = GameRng::new(1);
        let mut log = Transcript::new();

        player.gain_xp(5, &mut rng, &mut log);
        assert_eq!(player.experience(), 5);
        assert_eq!(player.level(), 1);
        assert_eq!(log.messages, vec!["You gain 5xp.".to_string()]);
    }

    #[test]
    fn test_level_up_once_even_with_surplus() {
        let mut player = Player::new(Class::Mage);
        let mut rng = GameRng::new(7);
        let mut log = Transcript::new();
        player.character_mut().take_damage(40, &mut Silent);

        player.gain_xp(100, &mut rng, &mut log);

        assert_eq!(player.level(), 2);
        assert_eq!(player.experience(), 0);
        assert_eq!(player.experience_to_next_level(), 12);

        let str_now = player.attribute(Attribute::Strength);
        assert!((12..=14).contains(&str_now), "strength {str_now}");
        let con = player.attribute(Attribute::Constitution);
        assert_eq!(player.character().max_hp(), con * 10);
        assert_eq!(player.character().hp(), player.character().max_hp());
        assert_eq!(player.character().mana(), player.attribute(Attribute::Wisdom) * 10);
        assert_eq!(player.attack_damage(), str_now * 2);

        assert_eq!(log.messages[0], "You gain 100xp.");
        assert_eq!(log.messages[1], "You have reached level 2!");
        assert!(log.messages[2].starts_with("Strength was increased by "));
        assert!(log.messages[5].starts_with("Constitution was increased by "));
        assert_eq!(log.last(), Some(""));
    }

    #[test]
    fn test_threshold_progression() {
        let mut player = Player::new(Class::Fighter);
        let mut rng = GameRng::new(3);
        let thresholds: Vec<u64> = (0..4)
            .map(|_| {
                let needed = player.experience_to_next_level();
                player.gain_xp(needed, &mut rng, &mut Silent);
                player.experience_to_next_level()
            })
            .collect();
        assert_eq!(thresholds, vec![12, 15, 18, 22]);
        assert_eq!(player.level(), 5);
    }

    #[test]
    fn test_register_kill_awards_xp() {
        let mut player = Player::new(Class::Fighter);
        let goblin = EnemyProfile::new("goblin", 100, 100, 20, 5).instantiate();
        let mut rng = GameRng::new(9);
        let mut log = Transcript::new();

        player.register_kill(&goblin, &mut rng, &mut log);
        assert_eq!(player.experience(), 5);
        assert_eq!(log.messages[0], "The Goblin was killed.");
        assert_eq!(log.messages[1], "You gain 5xp.");
    }

    #[test]
    fn test_die_does_not_revive() {
        let mut player = Player::new(Class::Mage);
        player.character_mut().take_damage(150, &mut Silent);
        let mut log = Transcript::new();
        player.die(&mut log);

        assert!(player.is_dead());
        assert_eq!(player.character().hp(), -50);
        assert!(log.mentions("has fallen"));
    }

    #[test]
    fn test_huge_gains_saturate() {
        let mut player = Player::new(Class::Fighter);
        let mut rng = GameRng::new(11);

        for _ in 0..400 {
            let level = player.level();
            player.gain_xp(u64::MAX, &mut rng, &mut Silent);
            assert_eq!(player.level(), level + 1);
        }

        assert_eq!(player.level(), 401);
        assert_eq!(player.attribute(Attribute::Constitution), i64::MAX);
        assert_eq!(player.character().max_hp(), i64::MAX);
        assert_eq!(player.character().max_mana(), i64::MAX);
        assert_eq!(player.attack_damage(), i64::MAX);
        assert_eq!(player.experience_to_next_level(), u64::MAX);
    }

    fn xp_gain() -> impl Strategy<Value = u64> {
        prop_oneof![
            4 => 0u64..40,
            1 => Just(u64::MAX),
            1 => (u64::MAX / 2)..=u64::MAX,
        ]
    }

    proptest! {
        #[test]
        fn prop_progression_is_monotonic(
            seed in any::<u64>(),
            gains in proptest::collection::vec(xp_gain(), 1..300),
        ) {
            let mut player = Player::new(Class::Rogue);
            let mut rng = GameRng::new(seed);

            for amount in gains {
                let before_level = player.level();
                let before_threshold = player.experience_to_next_level();
                let before_attrs = *player.attributes();
                let before_xp = player.experience();

                player.gain_xp(amount, &mut rng, &mut Silent);

                prop_assert!(player.level() >= before_level);
                prop_assert!(player.experience_to_next_level() >= before_threshold);
                for attr in Attribute::all() {
                    prop_assert!(player.attribute(attr) >= before_attrs.get(attr));
                }
                let leveled = player.level() > before_level;
                prop_assert_eq!(leveled, before_xp.saturating_add(amount) >= before_threshold);
                if leveled {
                    prop_assert_eq!(player.experience(), 0);
                    prop_assert_eq!(player.level(), before_level + 1);
                } else {
                    prop_assert_eq!(player.experience(), before_xp.saturating_add(amount));
                }
            }
        }
    }
}
