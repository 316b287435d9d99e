//! Gopher Jump - terminal side-scrolling jumping game.
//!
//! The game core (`game`) is a pure per-tick state machine; the terminal
//! front end (`ui`, `input`) and driver in `main.rs` sit on top of it.

pub mod cli;
pub mod core;
pub mod game;
pub mod input;
pub mod ui;
pub mod utils;

pub use crate::core::{Tuning, TICK_INTERVAL_MS};
pub use crate::game::{advance, GameMode, GopherJumpGame, Obstacle};
