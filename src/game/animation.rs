//! Sprite animation frame selection.
//!
//! Animation runs on its own counters so that wrapping a sprite sheet never
//! touches the round's tick count or score.

use crate::core::constants::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SpriteAnimation {
    pub gopher_tick: u64,
    pub ground_tick: u64,
}

impl SpriteAnimation {
    /// Advance both counters by one tick, wrapping each one before its
    /// frame would leave the usable part of its sheet.
    pub fn tick(&mut self) {
        self.gopher_tick += 1;
        if gopher_source_x(self.gopher_frame()) <= GOPHER_SHEET_MIN_X {
            self.gopher_tick = 0;
        }

        self.ground_tick += 1;
        if tile_source_x(self.ground_frame()) > TILE_SHEET_MAX_X {
            self.ground_tick = 0;
        }
    }

    pub fn gopher_frame(&self) -> u64 {
        (self.gopher_tick / ANIMATION_TICKS_PER_FRAME) % GOPHER_FRAME_COUNT
    }

    pub fn ground_frame(&self) -> u64 {
        (self.ground_tick / ANIMATION_TICKS_PER_FRAME) % TILE_FRAME_COUNT
    }

    /// Left edge of the current gopher frame on the sprite sheet.
    pub fn gopher_source_x(&self) -> i32 {
        gopher_source_x(self.gopher_frame())
    }

    pub fn ground_source_x(&self) -> i32 {
        tile_source_x(self.ground_frame())
    }
}

/// Gopher frames are laid out right-to-left.
fn gopher_source_x(frame: u64) -> i32 {
    GOPHER_FRAME_OX - frame as i32 * GOPHER_FRAME_WIDTH
}

fn tile_source_x(frame: u64) -> i32 {
    TILE_FRAME_OX + frame as i32 * TILE_FRAME_WIDTH
}

/// Number of gopher frames the animation cycles through.
pub fn gopher_cycle_len() -> u64 {
    ((GOPHER_FRAME_OX - GOPHER_SHEET_MIN_X) / GOPHER_FRAME_WIDTH) as u64
}
