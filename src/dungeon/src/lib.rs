// src/dungeon/src/lib.rs

//! Floors and rooms: the grid the player walks, who lives in each room and
//! what is hidden there.

pub mod direction;
pub mod level;
pub mod populate;
pub mod room;

pub use crate::direction::{Direction, Location};
pub use crate::level::{FloorLayout, MAX_FLOOR};
pub use crate::populate::{EmptyPopulation, RoomPopulator, StarterPopulation, goblin_profile};
pub use crate::room::{Discovery, Hidden, Room};
