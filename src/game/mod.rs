//! Gopher Jump: jump over scrolling ebifry to keep the run going.

pub mod animation;
pub mod logic;
pub mod types;

pub use animation::SpriteAnimation;
pub use logic::advance;
pub use types::{GameMode, GopherJumpGame, Ground, Obstacle};
