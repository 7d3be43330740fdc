//! Session configuration.

use dungeon::{Location, MAX_FLOOR};
use error::GameError;
use serde::{Deserialize, Serialize};

/// Settings fixed for the lifetime of a [`crate::Game`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Floor generated when a class is chosen. The floor is `starting_floor + 3`
    /// rooms on a side.
    pub starting_floor: u32,
    pub start_x: i32,
    pub start_y: i32,
    /// Fixed RNG seed; `None` draws one at random.
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            starting_floor: 1,
            start_x: 2,
            start_y: 0,
            seed: None,
        }
    }
}

impl GameConfig {
    /// Parses and validates a JSON document. Missing fields take their
    /// defaults.
    pub fn from_json(text: &str) -> Result<Self, GameError> {
        let config: GameConfig = serde_json::from_str(text)
            .map_err(|e| GameError::InvalidConfig(format!("malformed config: {e}")))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), GameError> {
        if self.starting_floor == 0 {
            return Err(GameError::InvalidConfig(
                "starting floor must be at least 1".to_string(),
            ));
        }
        if self.starting_floor > MAX_FLOOR {
            return Err(GameError::InvalidConfig(format!(
                "starting floor {} is deeper than floor {MAX_FLOOR}",
                self.starting_floor
            )));
        }
        let size = i64::from(self.starting_floor) + 3;
        let inside = |v: i32| (0..size).contains(&i64::from(v));
        if !inside(self.start_x) || !inside(self.start_y) {
            return Err(GameError::InvalidConfig(format!(
                "start ({}, {}) is outside floor {} ({size}x{size})",
                self.start_x, self.start_y, self.starting_floor
            )));
        }
        Ok(())
    }

    pub fn start_location(&self) -> Location {
        Location::new(self.start_x, self.start_y)
    }
}
