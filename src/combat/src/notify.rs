// src/combat/src/notify.rs

//! Outbound notifications from the model.
//!
//! Model code never holds on to a presenter. Every operation that has
//! something to say takes the sink as an argument, so swapping or dropping
//! the presenter is just a matter of passing something else next time.

use serde::{Deserialize, Serialize};

/// Backdrops the model can ask the presenter to show.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Backdrop {
    /// Inside a dungeon room.
    Room,
    /// The open field shown while choosing a class.
    Field,
}

/// The part of the presentation contract the model writes to.
pub trait Notifier {
    /// Appends a line to the message log.
    fn display_message(&mut self, text: &str);

    fn set_background_image(&mut self, image: Backdrop);

    /// Removes any characters or images drawn over the backdrop.
    fn clear_foreground(&mut self);
}

/// A sink that drops everything. Used when no presenter is attached.
#[derive(Debug, Clone, Copy, Default)]
pub struct Silent;

impl Notifier for Silent {
    fn display_message(&mut self, _text: &str) {}

    fn set_background_image(&mut self, _image: Backdrop) {}

    fn clear_foreground(&mut self) {}
}

/// A sink that keeps the message log in memory.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Transcript {
    pub messages: Vec<String>,
    pub backdrop: Option<Backdrop>,
    pub foreground_clears: usize,
}

impl Transcript {
    pub fn new() -> Self {
        Self::default()
    }

    /// True if any logged line contains `needle`.
    pub fn mentions(&self, needle: &str) -> bool {
        self.messages.iter().any(|m| m.contains(needle))
    }

    pub fn last(&self) -> Option<&str> {
        self.messages.last().map(String::as_str)
    }
}

impl Notifier for Transcript {
    fn display_message(&mut self, text: &str) {
        self.messages.push(text.to_string());
    }

    fn set_background_image(&mut self, image: Backdrop) {
        self.backdrop = Some(image);
    }

    fn clear_foreground(&mut self) {
        self.foreground_clears += 1;
    }
}

/// Upper-cases the first letter of every word and lower-cases the rest.
pub fn title_case(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut capitalise = true;
    for ch in input.chars() {
        if capitalise {
            out.extend(ch.to_uppercase());
            capitalise = false;
        } else {
            out.extend(ch.to_lowercase());
        }
        if ch == ' ' {
            capitalise = true;
        }
    }
    out
}
