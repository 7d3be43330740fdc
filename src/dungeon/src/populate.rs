// src/dungeon/src/populate.rs

use combat::EnemyProfile;

use crate::direction::Location;
use crate::room::{Hidden, Room};

/// Decides what a freshly generated room contains.
pub trait RoomPopulator {
    fn populate(&mut self, location: Location, room: &mut Room);
}

/// The basic goblin every starter room is stocked with.
pub fn goblin_profile() -> EnemyProfile {
    EnemyProfile::new("goblin", 100, 100, 20, 5)
}

/// One goblin in plain sight and one more waiting to be found.
#[derive(Debug, Clone, PartialEq)]
pub struct StarterPopulation {
    profile: EnemyProfile,
}

impl StarterPopulation {
    pub fn new(profile: EnemyProfile) -> Self {
        Self { profile }
    }
}

impl Default for StarterPopulation {
    fn default() -> Self {
        Self::new(goblin_profile())
    }
}

impl RoomPopulator for StarterPopulation {
    fn populate(&mut self, _location: Location, room: &mut Room) {
        room.add_enemy(self.profile.instantiate());
        room.hide_entity(Hidden::Enemy(self.profile.instantiate()));
    }
}

/// Leaves every room empty.
#[derive(Debug, Clone, Copy, Default)]
pub struct EmptyPopulation;

impl RoomPopulator for EmptyPopulation {
    fn populate(&mut self, _location: Location, _room: &mut Room) {}
}
