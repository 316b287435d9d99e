//! Shared constants, runtime configuration and the tick clock.

pub mod clock;
pub mod config;
pub mod constants;

pub use clock::FixedStep;
pub use config::{HighScorePolicy, Tuning};
pub use constants::*;
