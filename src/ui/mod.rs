pub mod game_common;
pub mod jump_scene;

use crate::game::GopherJumpGame;
use ratatui::Frame;

/// Main UI drawing function.
pub fn draw_ui(frame: &mut Frame, game: &GopherJumpGame, debug: bool) {
    let size = frame.size();
    jump_scene::render_jump_scene(frame, size, game, debug);
}
