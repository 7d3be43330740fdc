#![allow(dead_code)]

//! Shared fixtures for the session tests: a presenter that records every call
//! it receives and a few room populators with predictable enemies.

use std::cell::RefCell;
use std::rc::Rc;

use combat::{Backdrop, EnemyProfile, Notifier};
use dungeon::{FloorLayout, Hidden, Location, Room, RoomPopulator};
use floor_crawler::{Game, GameConfig, PanelLayout, Presenter};
use hero::{Class, Player};

/// One presenter call, flattened to plain data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    Message(String),
    Background(Backdrop),
    ClearForeground,
    Buttons(Vec<String>),
    ButtonEnabled(String, bool),
    ButtonsEnabled(bool),
    Layout(PanelLayout),
    Player { class: Class, hp: i64, level: u64 },
    Floor { player: Location },
    Flush,
}

/// Handle on everything a [`Recorder`] has seen.
#[derive(Clone, Default)]
pub struct CallLog(Rc<RefCell<Vec<Call>>>);

impl CallLog {
    pub fn calls(&self) -> Vec<Call> {
        self.0.borrow().clone()
    }

    pub fn clear(&self) {
        self.0.borrow_mut().clear();
    }

    pub fn is_empty(&self) -> bool {
        self.0.borrow().is_empty()
    }

    pub fn messages(&self) -> Vec<String> {
        self.0
            .borrow()
            .iter()
            .filter_map(|call| match call {
                Call::Message(text) => Some(text.clone()),
                _ => None,
            })
            .collect()
    }

    pub fn count_messages(&self, needle: &str) -> usize {
        self.messages().iter().filter(|m| m.contains(needle)).count()
    }

    /// The button row as a presenter would currently show it.
    pub fn buttons(&self) -> Vec<(String, bool)> {
        let mut row: Vec<(String, bool)> = Vec::new();
        for call in self.0.borrow().iter() {
            match call {
                Call::Buttons(labels) => {
                    row = labels.iter().map(|l| (l.clone(), true)).collect();
                }
                Call::ButtonEnabled(label, enabled) => {
                    for (name, state) in &mut row {
                        if name == label {
                            *state = *enabled;
                        }
                    }
                }
                Call::ButtonsEnabled(enabled) => {
                    for (_, state) in &mut row {
                        *state = *enabled;
                    }
                }
                _ => {}
            }
        }
        row
    }

    pub fn enabled_buttons(&self) -> Vec<String> {
        self.buttons()
            .into_iter()
            .filter(|(_, enabled)| *enabled)
            .map(|(label, _)| label)
            .collect()
    }

    pub fn last_layout(&self) -> Option<PanelLayout> {
        self.0.borrow().iter().rev().find_map(|call| match call {
            Call::Layout(layout) => Some(*layout),
            _ => None,
        })
    }
}

pub struct Recorder {
    log: CallLog,
}

impl Recorder {
    pub fn new() -> (Self, CallLog) {
        let log = CallLog::default();
        (Self { log: log.clone() }, log)
    }

    fn push(&mut self, call: Call) {
        self.log.0.borrow_mut().push(call);
    }
}

impl Notifier for Recorder {
    fn display_message(&mut self, text: &str) {
        self.push(Call::Message(text.to_string()));
    }

    fn set_background_image(&mut self, image: Backdrop) {
        self.push(Call::Background(image));
    }

    fn clear_foreground(&mut self) {
        self.push(Call::ClearForeground);
    }
}

impl Presenter for Recorder {
    fn set_buttons(&mut self, labels: &[&str]) {
        self.push(Call::Buttons(labels.iter().map(|l| l.to_string()).collect()));
    }

    fn set_button_enabled(&mut self, label: &str, enabled: bool) {
        self.push(Call::ButtonEnabled(label.to_string(), enabled));
    }

    fn set_buttons_enabled(&mut self, enabled: bool) {
        self.push(Call::ButtonsEnabled(enabled));
    }

    fn set_layout(&mut self, layout: PanelLayout) {
        self.push(Call::Layout(layout));
    }

    fn set_player(&mut self, player: &Player) {
        self.push(Call::Player {
            class: player.class(),
            hp: player.character().hp(),
            level: player.level(),
        });
    }

    fn set_floor_layout(&mut self, layout: &FloorLayout) {
        self.push(Call::Floor {
            player: layout.player_location(),
        });
    }

    fn flush(&mut self) {
        self.push(Call::Flush);
    }
}

/// Stocks every room with one visible and one hidden copy of `profile`.
pub struct Pairs(pub EnemyProfile);

impl RoomPopulator for Pairs {
    fn populate(&mut self, _location: Location, room: &mut Room) {
        room.add_enemy(self.0.instantiate());
        room.hide_entity(Hidden::Enemy(self.0.instantiate()));
    }
}

/// Goblins that die to any single player blow and barely scratch back.
pub fn feeble_goblin() -> EnemyProfile {
    EnemyProfile::new("goblin", 100, 100, 1, 5).with_initial_hp_fraction(0.1)
}

/// Kills any starting class with one hit and shrugs off anything back.
pub fn ogre() -> EnemyProfile {
    EnemyProfile::new("ogre", 10_000, 0, 1_000, 50)
}

/// A seeded session with a recorder attached. Nothing has started yet.
pub fn recorded_game(seed: u64) -> (Game, CallLog) {
    let mut game = Game::with_config(GameConfig {
        seed: Some(seed),
        ..GameConfig::default()
    })
    .expect("default config is valid");
    let (recorder, log) = Recorder::new();
    game.attach_presenter(Box::new(recorder));
    log.clear();
    (game, log)
}

/// A seeded session past class selection on the starter floor, with the
/// log cleared.
pub fn started_game(seed: u64, class: Class) -> (Game, CallLog) {
    let (mut game, log) = recorded_game(seed);
    game.start_new_game();
    game.accept_button_press(&class.to_string());
    log.clear();
    (game, log)
}

/// Like [`started_game`], with every room stocked by `populator`.
pub fn started_game_with(
    seed: u64,
    class: Class,
    populator: impl RoomPopulator + 'static,
) -> (Game, CallLog) {
    let (mut game, log) = recorded_game(seed);
    game.set_populator(populator);
    game.start_new_game();
    game.accept_button_press(&class.to_string());
    log.clear();
    (game, log)
}

/// Live enemies in the player's current room.
pub fn live_enemies(game: &Game) -> usize {
    game.layout()
        .and_then(FloorLayout::room)
        .map_or(0, |room| room.live_enemies().count())
}
