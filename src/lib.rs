//! A turn-based dungeon crawler played one button press at a time.
//!
//! The model lives in the workspace crates (`combat`, `hero`, `dungeon`,
//! `error`). This crate wires them into a session: the phase machine, the
//! presentation contract, button parsing and configuration.

pub mod config;
pub mod input;
pub mod renderer;
pub mod turn_system;

pub use crate::config::GameConfig;
pub use crate::input::{Button, InputSource, LineInput};
pub use crate::renderer::{ConsoleRenderer, PanelLayout, Presenter};
pub use crate::turn_system::{Game, GamePhase};
