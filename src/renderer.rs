//! The presentation contract and a plain-text console implementation.

use std::io::Write;

use combat::{Backdrop, Notifier, Silent, Transcript};
use dungeon::{FloorLayout, Location};
use hero::Player;
use tracing::warn;

/// Which panels the presenter should show.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum PanelLayout {
    /// Main view, message log and buttons only.
    #[default]
    Simple,
    /// Adds player stats and the floor map.
    Full,
}

/// Everything the game can ask of its front end.
///
/// The game pushes state in and never reads anything back. Implementations
/// are free to ignore any call.
pub trait Presenter: Notifier {
    /// Replaces the button row. New buttons start enabled.
    fn set_buttons(&mut self, labels: &[&str]);

    fn set_button_enabled(&mut self, label: &str, enabled: bool);

    fn set_buttons_enabled(&mut self, enabled: bool);

    fn set_layout(&mut self, layout: PanelLayout);

    fn set_player(&mut self, player: &Player);

    fn set_floor_layout(&mut self, layout: &FloorLayout);

    /// Called once an input has been fully handled.
    fn flush(&mut self) {}
}

impl Presenter for Silent {
    fn set_buttons(&mut self, _labels: &[&str]) {}

    fn set_button_enabled(&mut self, _label: &str, _enabled: bool) {}

    fn set_buttons_enabled(&mut self, _enabled: bool) {}

    fn set_layout(&mut self, _layout: PanelLayout) {}

    fn set_player(&mut self, _player: &Player) {}

    fn set_floor_layout(&mut self, _layout: &FloorLayout) {}
}

/// A transcript only keeps the message log.
impl Presenter for Transcript {
    fn set_buttons(&mut self, _labels: &[&str]) {}

    fn set_button_enabled(&mut self, _label: &str, _enabled: bool) {}

    fn set_buttons_enabled(&mut self, _enabled: bool) {}

    fn set_layout(&mut self, _layout: PanelLayout) {}

    fn set_player(&mut self, _player: &Player) {}

    fn set_floor_layout(&mut self, _layout: &FloorLayout) {}
}

/// Prints messages as they arrive and, after every input, the player's
/// stats, a map of the floor and the current buttons.
pub struct ConsoleRenderer<W: Write> {
    out: W,
    layout: PanelLayout,
    backdrop: Option<Backdrop>,
    buttons: Vec<(String, bool)>,
    status: Option<String>,
    map: Vec<String>,
}

impl<W: Write> ConsoleRenderer<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            layout: PanelLayout::default(),
            backdrop: None,
            buttons: Vec::new(),
            status: None,
            map: Vec::new(),
        }
    }

    pub fn backdrop(&self) -> Option<Backdrop> {
        self.backdrop
    }

    /// `[Attack] [Flee]`, with disabled buttons shown as `-Search-`.
    pub fn button_row(&self) -> String {
        self.buttons
            .iter()
            .map(|(label, enabled)| {
                if *enabled {
                    format!("[{label}]")
                } else {
                    format!("-{label}-")
                }
            })
            .collect::<Vec<_>>()
            .join(" ")
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn write_line(&mut self, line: &str) {
        if let Err(e) = writeln!(self.out, "{line}") {
            warn!("Failed to write to console: {e}");
        }
    }
}

// `@` player, `.` entered, `?` discovered, blank otherwise. North is up.
fn draw_map(layout: &FloorLayout) -> Vec<String> {
    let size = layout.size() as i32;
    (0..size)
        .rev()
        .map(|y| {
            (0..size)
                .map(|x| {
                    let loc = Location::new(x, y);
                    match layout.room_at(loc) {
                        _ if loc == layout.player_location() => '@',
                        Ok(room) if room.has_been_entered() => '.',
                        Ok(room) if room.has_been_discovered() => '?',
                        _ => ' ',
                    }
                })
                .collect()
        })
        .collect()
}

impl<W: Write> Notifier for ConsoleRenderer<W> {
    fn display_message(&mut self, text: &str) {
        self.write_line(text);
    }

    fn set_background_image(&mut self, image: Backdrop) {
        self.backdrop = Some(image);
    }

    fn clear_foreground(&mut self) {}
}

impl<W: Write> Presenter for ConsoleRenderer<W> {
    fn set_buttons(&mut self, labels: &[&str]) {
        self.buttons = labels.iter().map(|l| (l.to_string(), true)).collect();
    }

    fn set_button_enabled(&mut self, label: &str, enabled: bool) {
        for (name, state) in &mut self.buttons {
            if name == label {
                *state = enabled;
            }
        }
    }

    fn set_buttons_enabled(&mut self, enabled: bool) {
        for (_, state) in &mut self.buttons {
            *state = enabled;
        }
    }

    fn set_layout(&mut self, layout: PanelLayout) {
        self.layout = layout;
    }

    fn set_player(&mut self, player: &Player) {
        let c = player.character();
        self.status = Some(format!(
            "{} Lv {}  HP {}/{}  MP {}/{}  XP {}/{}",
            player.class(),
            player.level(),
            c.hp(),
            c.max_hp(),
            c.mana(),
            c.max_mana(),
            player.experience(),
            player.experience_to_next_level(),
        ));
    }

    fn set_floor_layout(&mut self, layout: &FloorLayout) {
        self.map = draw_map(layout);
    }

    fn flush(&mut self) {
        if self.layout == PanelLayout::Full {
            if let Some(status) = self.status.clone() {
                self.write_line(&status);
            }
            for row in self.map.clone() {
                self.write_line(&format!("|{row}|"));
            }
        }
        let row = self.button_row();
        self.write_line(&row);
    }
}
