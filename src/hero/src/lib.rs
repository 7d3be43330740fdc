// src/hero/src/lib.rs

//! The player side of the game: attribute and class catalog, the player
//! character with its progression, and the tagged combatant used to resolve
//! attacks between the player and enemies.

pub mod attributes;
pub mod class;
mod combat;
mod player;

pub use self::{
    attributes::{Attribute, Attributes},
    class::{Class, Portrait},
    combat::Fighter,
    player::{PLAYER_NAME, Player, STARTING_XP_TO_LEVEL},
};
