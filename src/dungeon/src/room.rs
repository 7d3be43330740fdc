// src/dungeon/src/room.rs

use combat::{Enemy, Notifier, title_case};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Something tucked away in a room until it is searched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Hidden {
    /// Joins the fight when found.
    Enemy(Enemy),
    /// Inert scenery; only worth a mention.
    Object { name: String },
}

/// A record of what a search turned up.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Discovery {
    pub name: String,
    pub hostile: bool,
}

/// One cell of a floor.
///
/// The discovered, entered and searched flags only ever go from false to true.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Room {
    discovered: bool,
    entered: bool,
    searched: bool,
    enemies: Vec<Enemy>,
    hidden: Vec<Hidden>,
    found: Vec<Discovery>,
}

impl Room {
    /// An empty, unexplored room.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_enemy(&mut self, enemy: Enemy) {
        self.enemies.push(enemy);
    }

    pub fn add_enemies(&mut self, enemies: impl IntoIterator<Item = Enemy>) {
        self.enemies.extend(enemies);
    }

    /// Hides something that will only turn up when the room is searched.
    pub fn hide_entity(&mut self, entity: Hidden) {
        self.hidden.push(entity);
    }

    /// Living enemies, in the order they arrived. Dead ones are dropped first.
    pub fn enemies_mut(&mut self) -> &mut Vec<Enemy> {
        self.enemies.retain(|enemy| !enemy.is_dead());
        &mut self.enemies
    }

    /// Living enemies, in the order they arrived.
    pub fn live_enemies(&self) -> impl Iterator<Item = &Enemy> + '_ {
        self.enemies.iter().filter(|enemy| !enemy.is_dead())
    }

    pub fn has_live_enemies(&self) -> bool {
        self.live_enemies().next().is_some()
    }

    /// Marks the room as entered, which also discovers it.
    pub fn enter(&mut self) {
        self.entered = true;
        self.discover();
    }

    pub fn has_been_entered(&self) -> bool {
        self.entered
    }

    pub fn discover(&mut self) {
        self.discovered = true;
    }

    pub fn has_been_discovered(&self) -> bool {
        self.discovered
    }

    pub fn has_been_searched(&self) -> bool {
        self.searched
    }

    /// Searches the room.
    ///
    /// Hidden enemies join the room's fight and hidden objects are noted.
    /// Everything ever found is returned, so repeating a search reports the
    /// same discoveries without bringing anyone back into the fight twice.
    pub fn search<N>(&mut self, out: &mut N) -> &[Discovery]
    where
        N: Notifier + ?Sized,
    {
        self.searched = true;

        if self.hidden.is_empty() {
            if self.found.is_empty() {
                out.display_message("Nothing was found.");
            } else {
                out.display_message("Nothing else was found.");
            }
            return &self.found;
        }

        for entity in std::mem::take(&mut self.hidden) {
            match entity {
                Hidden::Enemy(enemy) => {
                    let name = enemy.display_name();
                    out.display_message(&format!("A {name} attacked!"));
                    self.found.push(Discovery { name, hostile: true });
                    self.enemies.push(enemy);
                }
                Hidden::Object { name } => {
                    let name = title_case(&name);
                    out.display_message(&format!("Found a {name}."));
                    self.found.push(Discovery {
                        name,
                        hostile: false,
                    });
                }
            }
        }
        debug!(found = self.found.len(), enemies = self.enemies.len(), "room searched");
        &self.found
    }

    /// `Encountered a Goblin, a Rat and a Goblin.`, or `None` for an empty room.
    pub fn encounter_message(&self) -> Option<String> {
        let names: Vec<String> = self.live_enemies().map(Enemy::display_name).collect();
        if names.is_empty() {
            return None;
        }
        Some(format!("Encountered {}.", join_with_and(&names)))
    }
}

// "a A", "a A and a B", "a A, a B and a C"
fn join_with_and(names: &[String]) -> String {
    let mut message = String::new();
    for (i, name) in names.iter().enumerate() {
        if i > 0 {
            message.push_str(if i == names.len() - 1 { " and " } else { ", " });
        }
        message.push_str("a ");
        message.push_str(name);
    }
    message
}

#[cfg(test)]
mod tests {
    use super::*;
    use combat::{EnemyProfile, Silent, Transcript};
    use pretty_assertions::assert_eq;

    fn goblin() -> Enemy {
        EnemyProfile::new("goblin", 100, 100, 20, 5).instantiate()
    }

    #[test]
    fn test_flags_are_monotonic() {
        let mut room = Room::new();
        assert!(!room.has_been_discovered());
        room.enter();
        assert!(room.has_been_entered());
        assert!(room.has_been_discovered());
        room.discover();
        assert!(room.has_been_entered());
    }

    #[test]
    fn test_dead_enemies_are_pruned() {
        let mut room = Room::new();
        room.add_enemies([goblin(), goblin()]);
        room.enemies_mut()[0].character_mut().die();

        assert_eq!(room.live_enemies().count(), 1);
        assert_eq!(room.enemies_mut().len(), 1);
        room.enemies_mut()[0].character_mut().die();
        assert!(!room.has_live_enemies());
        assert!(room.enemies_mut().is_empty());
    }

    #[test]
    fn test_search_empty_room() {
        let mut room = Room::new();
        let mut log = Transcript::new();
        assert!(room.search(&mut log).is_empty());
        assert!(room.has_been_searched());
        assert_eq!(log.messages, vec!["Nothing was found.".to_string()]);
    }

    #[test]
    fn test_search_reveals_hidden_enemy_once() {
        let mut room = Room::new();
        room.add_enemy(goblin());
        room.hide_entity(Hidden::Enemy(goblin()));
        room.hide_entity(Hidden::Object {
            name: "cracked urn".into(),
        });
        let mut log = Transcript::new();

        let first = room.search(&mut log).to_vec();
        assert_eq!(first, vec![
            Discovery { name: "Goblin".into(), hostile: true },
            Discovery { name: "Cracked Urn".into(), hostile: false },
        ]);
        assert_eq!(room.live_enemies().count(), 2);
        assert_eq!(log.messages, vec![
            "A Goblin attacked!".to_string(),
            "Found a Cracked Urn.".to_string(),
        ]);

        let second = room.search(&mut log).to_vec();
        assert_eq!(second, first);
        assert_eq!(room.live_enemies().count(), 2);
        assert_eq!(log.last(), Some("Nothing else was found."));
    }

    #[test]
    fn test_encounter_message() {
        let mut room = Room::new();
        assert_eq!(room.encounter_message(), None);

        room.add_enemy(goblin());
        assert_eq!(room.encounter_message().as_deref(), Some("Encountered a Goblin."));

        room.add_enemy(EnemyProfile::new("rat", 5, 0, 1, 1).instantiate());
        assert_eq!(
            room.encounter_message().as_deref(),
            Some("Encountered a Goblin and a Rat.")
        );

        room.add_enemy(goblin());
        assert_eq!(
            room.encounter_message().as_deref(),
            Some("Encountered a Goblin, a Rat and a Goblin.")
        );

        room.search(&mut Silent);
        assert_eq!(room.live_enemies().count(), 3);
    }
}
