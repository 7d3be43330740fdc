// src/combat/src/lib.rs

pub mod character;
pub mod enemy;
pub mod notify;
pub mod rng;

pub use crate::character::Character;
pub use crate::enemy::{Enemy, EnemyProfile};
pub use crate::notify::{Backdrop, Notifier, Silent, Transcript, title_case};
pub use crate::rng::GameRng;

/// Damage arithmetic shared by every attacker.
pub struct Combat;

impl Combat {
    /// Applies the ±25% attack variance to `base` and keeps the integer part.
    pub fn roll_damage(base: i64, rng: &mut GameRng) -> i64 {
        Self::scale_damage(base, rng.damage_variance())
    }

    /// `base * variance`, truncated toward zero.
    pub fn scale_damage(base: i64, variance: f64) -> i64 {
        (base as f64 * variance) as i64
    }
}

/// Result of a single attack.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Strike {
    /// Damage actually dealt to the target.
    pub damage: i64,
    /// The target died to this strike.
    pub slain: bool,
}
