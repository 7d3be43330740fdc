//! Button labels and the line-based input source used by the console driver.

use std::fmt;
use std::io::BufRead;
use std::str::FromStr;

use anyhow::Context;
use dungeon::Direction;
use hero::Class;

/// Every button the game ever shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Button {
    Go(Direction),
    Search,
    Attack,
    Flee,
    Choose(Class),
}

impl Button {
    /// Reads a pressed label, ignoring case and surrounding whitespace.
    /// Unknown labels give `None`.
    pub fn parse(label: &str) -> Option<Button> {
        let label = label.trim();
        if label.eq_ignore_ascii_case("search") {
            return Some(Button::Search);
        }
        if label.eq_ignore_ascii_case("attack") {
            return Some(Button::Attack);
        }
        if label.eq_ignore_ascii_case("flee") {
            return Some(Button::Flee);
        }
        if let Ok(dir) = Direction::from_str(label) {
            return Some(Button::Go(dir));
        }
        Class::from_str(label).ok().map(Button::Choose)
    }
}

impl FromStr for Button {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Button::parse(s).ok_or_else(|| format!("unknown button: {s:?}"))
    }
}

impl fmt::Display for Button {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Button::Go(dir) => write!(f, "{dir}"),
            Button::Search => f.write_str("Search"),
            Button::Attack => f.write_str("Attack"),
            Button::Flee => f.write_str("Flee"),
            Button::Choose(class) => write!(f, "{class}"),
        }
    }
}

/// Trait for input sources
pub trait InputSource {
    /// The next pressed label, or `None` once input is exhausted.
    fn next_label(&mut self) -> anyhow::Result<Option<String>>;
}

/// Reads one label per line. Blank lines are skipped.
pub struct LineInput<R> {
    reader: R,
}

impl<R: BufRead> LineInput<R> {
    pub fn new(reader: R) -> Self {
        Self { reader }
    }
}

impl<R: BufRead> InputSource for LineInput<R> {
    fn next_label(&mut self) -> anyhow::Result<Option<String>> {
        loop {
            let mut line = String::new();
            let read = self
                .reader
                .read_line(&mut line)
                .context("Failed to read input line")?;
            if read == 0 {
                return Ok(None);
            }
            let label = line.trim();
            if !label.is_empty() {
                return Ok(Some(label.to_string()));
            }
        }
    }
}
