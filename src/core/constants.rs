// Tick and timing
pub const TICK_INTERVAL_MS: u64 = 16; // ~60 FPS, one `advance` per tick
pub const MAX_FRAME_DT_MS: u64 = 100;
pub const INPUT_POLL_MS: u64 = 4;

// Logical screen (the play field is scaled from these into terminal cells)
pub const SCREEN_WIDTH: i32 = 1000;
pub const SCREEN_HEIGHT: i32 = 600;

// Player
pub const BASE_X: i32 = 190;
pub const GOPHER_HEIGHT: f64 = 25.0;
pub const GOPHER_WIDTH: i32 = 50;
/// Gopher sprite is drawn at 4x, so world y maps to screen y * 4.
pub const GOPHER_SCALE: f64 = 4.0;

// Ground
pub const GROUND_Y: f64 = 110.0;
pub const GROUND_WIDTH: i32 = 50;
pub const GROUND_SPRITE_OFFSET: i32 = 30;

// Physics defaults (overridable through `Tuning`)
pub const SPEED: i32 = 12;
pub const JUMPING_POWER: f64 = 8.5;
pub const GRAVITY: f64 = 0.5;
/// Fastest tuning speed: the ground wrap keeps up and obstacles cannot
/// step over the hit window.
pub const MAX_SPEED: i32 = GROUND_WIDTH;

// Obstacle ("ebifry") spawning
pub const MAX_OBSTACLE_COUNT: usize = 3;
pub const SPAWN_INTERVAL: u64 = 10;
pub const MIN_SPAWN_DISTANCE: u64 = 50;
pub const SPAWN_CHANCE_DENOMINATOR: u32 = 10;
pub const OBSTACLE_OUT_OF_SCREEN_X: i32 = 3000;
/// Obstacles are drawn at 0.35x, so world x maps to screen x * 0.35.
pub const OBSTACLE_SCALE: f64 = 0.35;

// Collision window in obstacle world units (exclusive bounds)
pub const HIT_WINDOW_MIN_X: i32 = 2000;
pub const HIT_WINDOW_MAX_X: i32 = 2200;
pub const GROUNDED_TOLERANCE: f64 = 0.01;

// Scoring
pub const TICKS_PER_POINT: u64 = 5;

// Gopher sprite sheet: frames are read right-to-left from GOPHER_FRAME_OX
pub const GOPHER_FRAME_OX: i32 = 324;
pub const GOPHER_FRAME_WIDTH: i32 = 12;
pub const GOPHER_FRAME_HEIGHT: i32 = 14;
pub const GOPHER_FRAME_COUNT: u64 = 27;
pub const GOPHER_SHEET_MIN_X: i32 = 96;

// Ground tile sheet: frames are read left-to-right from TILE_FRAME_OX
pub const TILE_FRAME_OX: i32 = 0;
pub const TILE_FRAME_WIDTH: i32 = 32;
pub const TILE_FRAME_COUNT: u64 = 27;
pub const TILE_SHEET_MAX_X: i32 = 32;

/// Ticks each animation frame is held for.
pub const ANIMATION_TICKS_PER_FRAME: u64 = 5;
