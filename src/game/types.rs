//! Gopher Jump data structures.
//!
//! A side-scrolling runner: the gopher stays at a fixed column while
//! ebifry obstacles scroll towards it, and the player jumps over them.

use super::animation::SpriteAnimation;
use crate::core::constants::*;
use crate::core::config::Tuning;

/// Coarse game state governing which update rules apply.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GameMode {
    #[default]
    Title,
    Playing,
    GameOver,
}

impl GameMode {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Title => "Title",
            Self::Playing => "Playing",
            Self::GameOver => "Game Over",
        }
    }
}

/// One slot of the obstacle pool.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Obstacle {
    /// Horizontal offset in obstacle world units, growing as it scrolls.
    pub x: i32,
    pub y: f64,
    pub visible: bool,
}

impl Obstacle {
    pub fn advance(&mut self, speed: i32) {
        self.x += speed;
    }

    /// Reuse this slot for a fresh obstacle at the left edge of the ground.
    pub fn show(&mut self) {
        self.x = 0;
        self.y = GROUND_Y;
        self.visible = true;
    }

    pub fn hide(&mut self) {
        self.visible = false;
    }

    pub fn is_out_of_screen(&self) -> bool {
        self.x > OBSTACLE_OUT_OF_SCREEN_X
    }

    /// True while the obstacle overlaps the gopher's column.
    pub fn in_hit_window(&self) -> bool {
        self.x > HIT_WINDOW_MIN_X && self.x < HIT_WINDOW_MAX_X
    }
}

/// Scrolling ground strip.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ground {
    /// Ticks elapsed this round; drives spawn gating.
    pub tick_count: u64,
    /// Scroll offset, kept within one tile width below zero.
    pub x: i32,
    pub y: i32,
}

impl Default for Ground {
    fn default() -> Self {
        Self {
            tick_count: 0,
            x: 0,
            y: GROUND_Y as i32 - GROUND_SPRITE_OFFSET,
        }
    }
}

impl Ground {
    pub fn scroll(&mut self, speed: i32) {
        self.x += speed;
        if self.x > -GROUND_WIDTH {
            self.x -= GROUND_WIDTH;
        }
    }
}

/// Main game state.
#[derive(Debug, Clone)]
pub struct GopherJumpGame {
    pub mode: GameMode,

    // -- Scoring --
    /// Ticks played this round.
    pub tick_count: u64,
    pub score: u64,
    /// Survives `reset`; only the process lifetime bounds it.
    pub high_score: u64,

    // -- Gopher state --
    /// Fixed horizontal position in gopher world units.
    pub player_x: i32,
    /// Top of the gopher sprite; lower values are higher on screen.
    pub player_y: f64,
    /// Vertical velocity (negative = upward).
    pub velocity: f64,
    pub is_jumping: bool,

    // -- World --
    pub ground: Ground,
    /// `ground.tick_count` at the most recent spawn.
    pub last_obstacle_spawn_tick: u64,
    pub obstacles: [Obstacle; MAX_OBSTACLE_COUNT],

    pub animation: SpriteAnimation,
    pub tuning: Tuning,
}

impl Default for GopherJumpGame {
    fn default() -> Self {
        Self::new(Tuning::default())
    }
}

impl GopherJumpGame {
    /// Height the gopher rests at when standing on the ground.
    pub const REST_Y: f64 = GROUND_Y - GOPHER_HEIGHT;

    /// Create a game on the title screen with a freshly reset round.
    pub fn new(tuning: Tuning) -> Self {
        let mut game = Self {
            mode: GameMode::Title,
            tick_count: 0,
            score: 0,
            high_score: 0,
            player_x: BASE_X,
            player_y: Self::REST_Y,
            velocity: 0.0,
            is_jumping: false,
            ground: Ground::default(),
            last_obstacle_spawn_tick: 0,
            obstacles: [Obstacle::default(); MAX_OBSTACLE_COUNT],
            animation: SpriteAnimation::default(),
            tuning,
        };
        game.reset();
        game
    }

    /// Reinitialise the round. `high_score`, `mode` and `tuning` are kept.
    pub fn reset(&mut self) {
        self.tick_count = 0;
        self.score = 0;
        self.player_x = BASE_X;
        self.player_y = Self::REST_Y;
        self.velocity = 0.0;
        self.is_jumping = false;
        self.ground = Ground::default();
        self.last_obstacle_spawn_tick = 0;
        self.obstacles = [Obstacle::default(); MAX_OBSTACLE_COUNT];
        self.animation = SpriteAnimation::default();
    }

    /// True when the gopher stands at its resting height.
    pub fn is_grounded(&self) -> bool {
        (self.player_y - Self::REST_Y).abs() <= GROUNDED_TOLERANCE
    }

    /// Top of the gopher sprite in screen pixels.
    pub fn player_screen_y(&self) -> f64 {
        self.player_y * GOPHER_SCALE
    }

    pub fn visible_obstacles(&self) -> impl Iterator<Item = &Obstacle> {
        self.obstacles.iter().filter(|o| o.visible)
    }
}
