//! Phase machine driving a play session.
//!
//! A [`Game`] owns the player, the current floor, the RNG and an optional
//! presenter. Input arrives as button labels through
//! [`Game::accept_button_press`]; labels that do not mean anything in the
//! current phase are ignored without touching any state.

use combat::{Backdrop, GameRng, Silent};
use dungeon::{Direction, FloorLayout, Room, RoomPopulator, StarterPopulation};
use error::GameError;
use hero::{Class, Fighter, Player};
use strum::IntoEnumIterator;
use tracing::{debug, info, warn};

use crate::config::GameConfig;
use crate::input::Button;
use crate::renderer::{PanelLayout, Presenter};

/// Top-level modes gating which buttons do anything.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GamePhase {
    /// Nothing has started yet. Every input is ignored.
    Inactive,
    /// Waiting for a class name.
    SelectingClass,
    /// Free to move between rooms or search the current one.
    Exploring,
    /// Living enemies share the player's room.
    Combat,
    /// The player has fallen. Only a new game leaves this phase.
    Defeated,
}

/// Movement buttons in the order they are laid out.
const MOVEMENT_BUTTONS: [&str; 5] = ["North", "West", "Search", "East", "South"];
const COMBAT_BUTTONS: [&str; 2] = ["Attack", "Flee"];

pub struct Game {
    phase: GamePhase,
    config: GameConfig,
    rng: GameRng,
    populator: Box<dyn RoomPopulator>,
    player: Option<Player>,
    layout: Option<FloorLayout>,
    presenter: Option<Box<dyn Presenter>>,
}

impl Default for Game {
    fn default() -> Self {
        Self::build(GameConfig::default())
    }
}

impl Game {
    /// An inactive session with the default configuration and no presenter.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: GameConfig) -> Result<Self, GameError> {
        config.validate()?;
        Ok(Self::build(config))
    }

    fn build(config: GameConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => GameRng::new(seed),
            None => GameRng::from_entropy(),
        };
        info!(seed = rng.seed(), "session created");
        Self {
            phase: GamePhase::Inactive,
            config,
            rng,
            populator: Box::new(StarterPopulation::default()),
            player: None,
            layout: None,
            presenter: None,
        }
    }

    /// Replaces the policy that stocks rooms on every floor generated from
    /// now on.
    pub fn set_populator(&mut self, populator: impl RoomPopulator + 'static) {
        self.populator = Box::new(populator);
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    pub fn player(&self) -> Option<&Player> {
        self.player.as_ref()
    }

    pub fn layout(&self) -> Option<&FloorLayout> {
        self.layout.as_ref()
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn seed(&self) -> u64 {
        self.rng.seed()
    }

    /// Hooks up a presenter and brings it up to date with the session.
    pub fn attach_presenter(&mut self, presenter: Box<dyn Presenter>) {
        self.presenter = Some(presenter);
        self.with_presenter(|game, out| {
            if let Some(layout) = &game.layout {
                layout.attach(out);
            }
            game.show_phase_controls(out);
            game.refresh(out);
        });
    }

    /// Back to silent mode. Returns the presenter that was attached, if any.
    pub fn detach_presenter(&mut self) -> Option<Box<dyn Presenter>> {
        self.presenter.take()
    }

    /// Drops any session in progress and asks for a class.
    pub fn start_new_game(&mut self) {
        self.player = None;
        self.layout = None;
        self.phase = GamePhase::SelectingClass;
        info!("new game");
        self.with_presenter(|game, out| {
            game.show_class_selection(out);
            out.flush();
        });
    }

    /// Handles one pressed button.
    pub fn accept_button_press(&mut self, label: &str) {
        let Some(button) = Button::parse(label) else {
            debug!(label, "unknown button ignored");
            return;
        };
        self.with_presenter(|game, out| {
            if game.handle(button, out) {
                game.refresh(out);
            }
        });
    }

    fn with_presenter<T>(&mut self, f: impl FnOnce(&mut Self, &mut dyn Presenter) -> T) -> T {
        let mut presenter = self.presenter.take();
        let result = match presenter.as_deref_mut() {
            Some(out) => f(self, out),
            None => f(self, &mut Silent),
        };
        self.presenter = presenter;
        result
    }

    // Returns whether the button meant anything in the current phase.
    fn handle(&mut self, button: Button, out: &mut dyn Presenter) -> bool {
        match (self.phase, button) {
            (GamePhase::SelectingClass, Button::Choose(class)) => self.choose_class(class, out),
            (GamePhase::Exploring, Button::Search) => self.search(out),
            (GamePhase::Exploring, Button::Go(dir)) => self.go(dir, out),
            (GamePhase::Combat, Button::Flee) => self.flee(out),
            (GamePhase::Combat, Button::Attack) => self.attack(out),
            (phase, button) => {
                debug!(?phase, %button, "button ignored in this phase");
                false
            }
        }
    }

    fn choose_class(&mut self, class: Class, out: &mut dyn Presenter) -> bool {
        let mut player = Player::new(class);
        player.set_portrait(class.portrait());
        out.display_message(&format!("Player class is now {class}"));
        out.set_player(&player);

        let layout = match FloorLayout::new(
            self.config.starting_floor,
            self.config.start_location(),
            &mut *self.populator,
            out,
        ) {
            Ok(layout) => layout,
            Err(err) => {
                warn!(%err, "could not place the player on the starting floor");
                return false;
            }
        };
        out.set_floor_layout(&layout);
        layout.attach(out);
        info!(%class, floor = layout.floor_number(), "class chosen");

        self.player = Some(player);
        self.layout = Some(layout);
        self.enter_combat_or_explore(out);
        true
    }

    fn search(&mut self, out: &mut dyn Presenter) -> bool {
        let Some(room) = self.layout.as_mut().and_then(FloorLayout::room_mut) else {
            return false;
        };
        room.search(out);
        self.enter_combat_or_explore(out);
        true
    }

    fn go(&mut self, dir: Direction, out: &mut dyn Presenter) -> bool {
        let Some(layout) = self.layout.as_mut() else {
            return false;
        };
        layout.move_player(dir, out);
        self.enter_combat_or_explore(out);
        true
    }

    // Every living enemy gets a free swing, then the player is out of the
    // fight. Fleeing never attacks.
    fn flee(&mut self, out: &mut dyn Presenter) -> bool {
        let (Some(player), Some(room)) = (
            self.player.as_mut(),
            self.layout.as_mut().and_then(FloorLayout::room_mut),
        ) else {
            return false;
        };
        if retaliate(player, room, &mut self.rng, out) {
            self.defeat(out);
            return true;
        }
        self.set_phase(GamePhase::Exploring);
        self.show_movement_controls(out);
        true
    }

    // The player hits the first enemy in the room. If anyone is left
    // standing, each survivor hits back once.
    fn attack(&mut self, out: &mut dyn Presenter) -> bool {
        let (Some(player), Some(room)) = (
            self.player.as_mut(),
            self.layout.as_mut().and_then(FloorLayout::room_mut),
        ) else {
            return false;
        };
        if let Some(target) = room.enemies_mut().first_mut() {
            Fighter::Player(&mut *player).attack(&mut Fighter::Enemy(target), &mut self.rng, out);
        }
        if !room.has_live_enemies() {
            self.set_phase(GamePhase::Exploring);
            self.show_movement_controls(out);
            return true;
        }
        if retaliate(player, room, &mut self.rng, out) {
            self.defeat(out);
        }
        true
    }

    fn defeat(&mut self, out: &mut dyn Presenter) {
        self.set_phase(GamePhase::Defeated);
        out.set_buttons_enabled(false);
    }

    fn enter_combat_or_explore(&mut self, out: &mut dyn Presenter) {
        if self.layout.as_ref().is_some_and(FloorLayout::in_combat) {
            self.set_phase(GamePhase::Combat);
            show_combat_controls(out);
        } else {
            self.set_phase(GamePhase::Exploring);
            self.show_movement_controls(out);
        }
    }

    fn set_phase(&mut self, phase: GamePhase) {
        if self.phase != phase {
            info!(from = ?self.phase, to = ?phase, "phase change");
            self.phase = phase;
        }
    }

    fn show_class_selection(&self, out: &mut dyn Presenter) {
        out.display_message("Select a class.");
        out.set_layout(PanelLayout::Simple);
        out.set_background_image(Backdrop::Field);
        let labels: Vec<String> = Class::iter().map(|class| class.to_string()).collect();
        let labels: Vec<&str> = labels.iter().map(String::as_str).collect();
        out.set_buttons(&labels);
        out.set_buttons_enabled(true);
    }

    fn show_movement_controls(&self, out: &mut dyn Presenter) {
        out.set_layout(PanelLayout::Full);
        out.set_buttons(&MOVEMENT_BUTTONS);
        let Some(layout) = &self.layout else {
            return;
        };
        let here = layout.player_location();
        for dir in Direction::ALL {
            if !layout.room_exists(dir, here) {
                out.set_button_enabled(&dir.to_string(), false);
            }
        }
        let searched = layout.room().is_some_and(Room::has_been_searched);
        out.set_button_enabled("Search", !searched);
    }

    fn show_phase_controls(&self, out: &mut dyn Presenter) {
        match self.phase {
            GamePhase::Inactive => {}
            GamePhase::SelectingClass => self.show_class_selection(out),
            GamePhase::Exploring => self.show_movement_controls(out),
            GamePhase::Combat => show_combat_controls(out),
            GamePhase::Defeated => {
                show_combat_controls(out);
                out.set_buttons_enabled(false);
            }
        }
    }

    fn refresh(&self, out: &mut dyn Presenter) {
        if let Some(player) = &self.player {
            out.set_player(player);
        }
        if let Some(layout) = &self.layout {
            out.set_floor_layout(layout);
        }
        out.flush();
    }
}

fn show_combat_controls(out: &mut dyn Presenter) {
    out.set_layout(PanelLayout::Full);
    out.set_buttons(&COMBAT_BUTTONS);
}

// One strike from each living enemy, in order. Stops as soon as the player
// falls and reports whether they did.
fn retaliate(player: &mut Player, room: &mut Room, rng: &mut GameRng, out: &mut dyn Presenter) -> bool {
    for enemy in room.enemies_mut().iter_mut() {
        Fighter::Enemy(enemy).attack(&mut Fighter::Player(&mut *player), rng, out);
        if player.is_dead() {
            return true;
        }
    }
    false
}
