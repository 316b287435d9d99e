//! Physics and spawn tuning.
//!
//! Defaults reproduce the stock Gopher Jump constants. A JSON file may
//! override any subset of fields; omitted fields keep their default.

use super::constants::*;
use serde::{Deserialize, Serialize};
use std::io;
use std::path::Path;

/// How the high score is updated when a round ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HighScorePolicy {
    /// High score is overwritten with the score of the round that just ended.
    #[default]
    LastRound,
    /// High score keeps the best score seen this session.
    Best,
}

/// Tunable gameplay constants.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    /// Horizontal scroll speed in world units per tick (obstacles and ground).
    pub speed: i32,
    /// Upward impulse applied when a jump starts.
    pub jump_power: f64,
    /// Velocity added every airborne tick, after the position update.
    pub gravity: f64,
    /// Ground tick modulus a spawn must land on.
    pub spawn_interval: u64,
    /// Ground ticks that must pass since the previous spawn (exclusive).
    pub min_spawn_distance: u64,
    /// A spawn roll succeeds with probability 1 / `spawn_chance_denominator`.
    pub spawn_chance_denominator: u32,
    pub high_score_policy: HighScorePolicy,
    /// Snap the gopher back to its resting height on landing.
    pub clamp_landing: bool,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            speed: SPEED,
            jump_power: JUMPING_POWER,
            gravity: GRAVITY,
            spawn_interval: SPAWN_INTERVAL,
            min_spawn_distance: MIN_SPAWN_DISTANCE,
            spawn_chance_denominator: SPAWN_CHANCE_DENOMINATOR,
            high_score_policy: HighScorePolicy::default(),
            clamp_landing: false,
        }
    }
}

impl Tuning {
    /// Defaults with the behaviour fixes applied: landing clamp and best-score tracking.
    pub fn corrected() -> Self {
        Self {
            high_score_policy: HighScorePolicy::Best,
            clamp_landing: true,
            ..Default::default()
        }
    }

    /// Check the values the tick loop divides by or draws ranges from.
    pub fn validate(&self) -> Result<(), String> {
        if self.speed <= 0 || self.speed > MAX_SPEED {
            return Err(format!(
                "speed must be in 1..={}, got {}",
                MAX_SPEED, self.speed
            ));
        }
        if self.jump_power.is_nan() || self.jump_power <= 0.0 {
            return Err(format!(
                "jump_power must be positive, got {}",
                self.jump_power
            ));
        }
        if self.gravity.is_nan() || self.gravity <= 0.0 {
            return Err(format!(
                "gravity must be positive, got {}",
                self.gravity
            ));
        }
        if self.spawn_interval == 0 {
            return Err("spawn_interval must be at least 1".to_string());
        }
        if self.spawn_chance_denominator == 0 {
            return Err("spawn_chance_denominator must be at least 1".to_string());
        }
        Ok(())
    }

    /// Parse and validate a tuning from JSON text.
    pub fn from_json(json: &str) -> io::Result<Self> {
        let tuning: Tuning = serde_json::from_str(json)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
        tuning
            .validate()
            .map_err(|msg| io::Error::new(io::ErrorKind::InvalidData, msg))?;
        Ok(tuning)
    }
}

/// Load a tuning file, returning defaults if the file does not exist.
pub fn load_tuning(path: &Path) -> io::Result<Tuning> {
    match std::fs::read_to_string(path) {
        Ok(json) => Tuning::from_json(&json),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(Tuning::default()),
        Err(e) => Err(e),
    }
}
