// src/dungeon/src/direction.rs

use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter, EnumString};

use error::GameError;

/// A compass direction on the floor grid. North is +y, east is +x.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, EnumIter, EnumString, Display,
)]
#[strum(serialize_all = "title_case", ascii_case_insensitive)]
pub enum Direction {
    North,
    East,
    South,
    West,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::North,
        Direction::East,
        Direction::South,
        Direction::West,
    ];

    /// Change in `(x, y)` from travelling one cell this way.
    pub fn offset(&self) -> (i32, i32) {
        match self {
            Direction::North => (0, 1),
            Direction::East => (1, 0),
            Direction::South => (0, -1),
            Direction::West => (-1, 0),
        }
    }

    pub fn opposite(&self) -> Direction {
        match self {
            Direction::North => Direction::South,
            Direction::East => Direction::West,
            Direction::South => Direction::North,
            Direction::West => Direction::East,
        }
    }
}

/// A cell coordinate on a floor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Location {
    pub x: i32,
    pub y: i32,
}

impl Location {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// The neighbouring cell in `dir`. Coordinates that cannot be represented
    /// are reported as out of bounds.
    pub fn step(&self, dir: Direction) -> Result<Location, GameError> {
        let (dx, dy) = dir.offset();
        match (self.x.checked_add(dx), self.y.checked_add(dy)) {
            (Some(x), Some(y)) => Ok(Location { x, y }),
            _ => Err(GameError::OutOfBounds {
                x: self.x,
                y: self.y,
            }),
        }
    }
}
