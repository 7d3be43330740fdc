// src/dungeon/src/level.rs

use combat::{Backdrop, Notifier};
use error::GameError;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::direction::{Direction, Location};
use crate::populate::{RoomPopulator, StarterPopulation};
use crate::room::Room;

/// Deepest floor that can be generated. Floor `n` holds `(n + 3)^2` rooms.
pub const MAX_FLOOR: u32 = 100;

/// Which shared edge array a door lives in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Edge {
    /// Between `(x, y)` and `(x, y + 1)`.
    North,
    /// Between `(x, y)` and `(x + 1, y)`.
    East,
}

/// A square floor of rooms, `floor + 3` cells on a side.
///
/// Rooms are indexed `[x][y]` with `(0, 0)` in the south-west corner. A door
/// between two neighbouring rooms is stored once, on the lower of the two
/// cells: north/south doors in `north_locked`, east/west doors in
/// `east_locked`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FloorLayout {
    floor: u32,
    size: usize,
    rooms: Vec<Vec<Option<Room>>>,
    north_locked: Vec<Vec<bool>>,
    east_locked: Vec<Vec<bool>>,
    player: Location,
}

impl FloorLayout {
    /// Generates floor `floor` with the starter population. Nothing has been
    /// discovered yet and the player stands at `(0, 0)` without having
    /// entered it.
    pub fn generate(floor: u32) -> Self {
        Self::generate_with(floor, &mut StarterPopulation::default())
    }

    /// Generates a fully connected floor, letting `populator` fill each room.
    /// Floors past [`MAX_FLOOR`] are generated as [`MAX_FLOOR`].
    pub fn generate_with<P>(floor: u32, populator: &mut P) -> Self
    where
        P: RoomPopulator + ?Sized,
    {
        if floor > MAX_FLOOR {
            warn!(floor, max = MAX_FLOOR, "floor clamped to the deepest floor");
        }
        let floor = floor.min(MAX_FLOOR);
        let size = floor as usize + 3;
        let mut rooms = Vec::with_capacity(size);
        for x in 0..size {
            let mut column = Vec::with_capacity(size);
            for y in 0..size {
                let mut room = Room::new();
                populator.populate(Location::new(x as i32, y as i32), &mut room);
                column.push(Some(room));
            }
            rooms.push(column);
        }
        debug!(floor, size, "floor generated");

        Self {
            floor,
            size,
            rooms,
            north_locked: vec![vec![false; size - 1]; size],
            east_locked: vec![vec![false; size]; size - 1],
            player: Location::new(0, 0),
        }
    }

    /// Generates a floor and places the player at `start`.
    pub fn new<P, N>(
        floor: u32,
        start: Location,
        populator: &mut P,
        out: &mut N,
    ) -> Result<Self, GameError>
    where
        P: RoomPopulator + ?Sized,
        N: Notifier + ?Sized,
    {
        if floor > MAX_FLOOR {
            return Err(GameError::FloorTooDeep {
                floor,
                max: MAX_FLOOR,
            });
        }
        let mut layout = Self::generate_with(floor, populator);
        layout.place_player(start, out)?;
        Ok(layout)
    }

    pub fn floor_number(&self) -> u32 {
        self.floor
    }

    /// Cells on a side.
    pub fn size(&self) -> usize {
        self.size
    }

    pub fn player_location(&self) -> Location {
        self.player
    }

    pub fn in_bounds(&self, location: Location) -> bool {
        let max = self.size as i64;
        (0..max).contains(&i64::from(location.x)) && (0..max).contains(&i64::from(location.y))
    }

    /// `location` moved one cell in `dir`, if that stays on the floor.
    pub fn offset(&self, dir: Direction, location: Location) -> Result<Location, GameError> {
        let target = location.step(dir)?;
        if !self.in_bounds(target) {
            return Err(GameError::OutOfBounds {
                x: target.x,
                y: target.y,
            });
        }
        Ok(target)
    }

    pub fn room_at(&self, location: Location) -> Result<&Room, GameError> {
        let (x, y) = self.index(location)?;
        self.rooms[x][y]
            .as_ref()
            .ok_or(GameError::NoRoom { x: location.x, y: location.y })
    }

    pub fn room_at_mut(&mut self, location: Location) -> Result<&mut Room, GameError> {
        let (x, y) = self.index(location)?;
        self.rooms[x][y]
            .as_mut()
            .ok_or(GameError::NoRoom { x: location.x, y: location.y })
    }

    /// The room the player is standing in.
    pub fn room(&self) -> Option<&Room> {
        self.room_at(self.player).ok()
    }

    pub fn room_mut(&mut self) -> Option<&mut Room> {
        self.room_at_mut(self.player).ok()
    }

    /// Takes a room off the floor, leaving a gap.
    pub fn remove_room(&mut self, location: Location) -> Result<Room, GameError> {
        let (x, y) = self.index(location)?;
        self.rooms[x][y]
            .take()
            .ok_or(GameError::NoRoom { x: location.x, y: location.y })
    }

    fn neighbour(&self, dir: Direction, location: Location) -> Option<&Room> {
        let target = self.offset(dir, location).ok()?;
        self.room_at(target).ok()
    }

    /// Whether there is a room one step from `location` in `dir`.
    pub fn room_exists(&self, dir: Direction, location: Location) -> bool {
        self.neighbour(dir, location).is_some()
    }

    pub fn room_discovered(&self, dir: Direction, location: Location) -> bool {
        self.neighbour(dir, location)
            .is_some_and(Room::has_been_discovered)
    }

    pub fn room_entered(&self, dir: Direction, location: Location) -> bool {
        self.neighbour(dir, location)
            .is_some_and(Room::has_been_entered)
    }

    /// Whether the door from `location` towards `dir` is locked. Any query
    /// that does not name a door between two rooms is simply unlocked.
    pub fn door_locked(&self, dir: Direction, location: Location) -> bool {
        match self.edge(dir, location) {
            Ok((Edge::North, x, y)) => self.north_locked[x][y],
            Ok((Edge::East, x, y)) => self.east_locked[x][y],
            Err(_) => false,
        }
    }

    pub fn set_door_locked(
        &mut self,
        dir: Direction,
        location: Location,
        locked: bool,
    ) -> Result<(), GameError> {
        match self.edge(dir, location)? {
            (Edge::North, x, y) => self.north_locked[x][y] = locked,
            (Edge::East, x, y) => self.east_locked[x][y] = locked,
        }
        Ok(())
    }

    /// Moves the player one room in `dir`. Returns whether the player moved;
    /// the edge of the floor, a gap or a locked door all stop them.
    pub fn move_player<N>(&mut self, dir: Direction, out: &mut N) -> bool
    where
        N: Notifier + ?Sized,
    {
        let from = self.player;
        let target = match self.offset(dir, from) {
            Ok(target) => target,
            Err(err) => {
                debug!(%dir, %err, "move rejected");
                return false;
            }
        };
        if self.door_locked(dir, from) {
            debug!(%dir, "door locked");
            return false;
        }
        if self.room_at(target).is_err() {
            debug!(%dir, "no room");
            return false;
        }

        out.display_message(&format!("Moved {dir}."));
        self.set_player_location(target, out)
    }

    /// Puts the player in the room at `location`. Returns false, leaving the
    /// player where they were, if there is no room there.
    pub fn set_player_location<N>(&mut self, location: Location, out: &mut N) -> bool
    where
        N: Notifier + ?Sized,
    {
        match self.place_player(location, out) {
            Ok(()) => true,
            Err(err) => {
                debug!(%err, "player not placed");
                false
            }
        }
    }

    fn place_player<N>(&mut self, location: Location, out: &mut N) -> Result<(), GameError>
    where
        N: Notifier + ?Sized,
    {
        self.room_at(location)?;
        self.player = location;

        out.set_background_image(Backdrop::Room);
        out.clear_foreground();

        if let Some(message) = self.room_at(location)?.encounter_message() {
            out.display_message(&message);
        }

        for dir in Direction::ALL {
            if let Ok(next) = self.offset(dir, location) {
                if let Ok(room) = self.room_at_mut(next) {
                    room.discover();
                }
            }
        }
        self.room_at_mut(location)?.enter();
        debug!(x = location.x, y = location.y, "player placed");
        Ok(())
    }

    /// True while the player's room still holds a living enemy.
    pub fn in_combat(&self) -> bool {
        self.room().is_some_and(Room::has_live_enemies)
    }

    /// Redraws the player's surroundings on a newly attached sink.
    pub fn attach<N>(&self, out: &mut N)
    where
        N: Notifier + ?Sized,
    {
        out.set_background_image(Backdrop::Room);
        out.clear_foreground();
    }

    fn index(&self, location: Location) -> Result<(usize, usize), GameError> {
        if !self.in_bounds(location) {
            return Err(GameError::OutOfBounds {
                x: location.x,
                y: location.y,
            });
        }
        Ok((location.x as usize, location.y as usize))
    }

    // Resolves the door between `location` and its neighbour in `dir` to the
    // array slot holding it. Both rooms have to exist.
    fn edge(&self, dir: Direction, location: Location) -> Result<(Edge, usize, usize), GameError> {
        let target = self.offset(dir, location)?;
        self.room_at(location)?;
        self.room_at(target)?;

        let lower = match dir {
            Direction::North | Direction::East => location,
            Direction::South | Direction::West => target,
        };
        let (x, y) = self.index(lower)?;
        let edge = match dir {
            Direction::North | Direction::South => Edge::North,
            Direction::East | Direction::West => Edge::East,
        };
        Ok((edge, x, y))
    }
}
