// src/error/src/lib.rs

//! Game error handling.
//!
//! Failures the core reports to its direct caller. Invalid player input is
//! never an error: the phase machine ignores it. What ends up here is either a
//! broken precondition (spending mana that is not there) or a structural
//! violation (addressing a cell outside the floor).

use thiserror::Error;

/// Errors that can occur while driving the game model.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    /// A character tried to spend more mana than it currently holds.
    #[error("{name} attempted to spend {requested} mana when only {available} was available")]
    InsufficientMana {
        name: String,
        requested: i64,
        available: i64,
    },

    /// A location lies outside the floor grid.
    #[error("Location ({x}, {y}) is out of bounds")]
    OutOfBounds { x: i32, y: i32 },

    /// A location is inside the floor grid but holds no room.
    #[error("No room at ({x}, {y})")]
    NoRoom { x: i32, y: i32 },

    /// A floor number past the deepest floor that can be generated.
    #[error("Floor {floor} is deeper than the deepest floor ({max})")]
    FloorTooDeep { floor: u32, max: u32 },

    /// The session configuration cannot produce a playable game.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

impl GameError {
    /// True for the "outside the map" family of failures.
    pub fn is_out_of_bounds(&self) -> bool {
        matches!(self, GameError::OutOfBounds { .. })
    }
}

/// Converts a game error into a short message suitable for the player.
pub fn describe(error: &GameError) -> String {
    match error {
        GameError::InsufficientMana { .. } => "Not enough mana.".to_string(),
        GameError::OutOfBounds { .. } | GameError::NoRoom { .. } => {
            "There is nothing in that direction.".to_string()
        }
        GameError::FloorTooDeep { max, .. } => format!("The dungeon only goes {max} floors deep."),
        GameError::InvalidConfig(reason) => format!("The game could not be configured: {reason}"),
    }
}
