//! Gopher Jump scene rendering.
//!
//! World coordinates are first converted to the 1000x600 game screen
//! space (gopher drawn at 4x, obstacles at 0.35x) and then scaled into the
//! terminal cell grid.

use super::game_common::{
    create_game_layout, render_center_banner, render_info_panel_frame, render_status_bar, Cell,
    CellBuffer,
};
use crate::core::constants::*;
use crate::game::{GameMode, GopherJumpGame};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

const GROUND_TILES: [char; 2] = ['▓', '▒'];
const GROUND_FG: Color = Color::Rgb(120, 90, 60);
const GROUND_BG: Color = Color::Rgb(60, 45, 30);
const GOPHER_COLOR: Color = Color::LightCyan;
const EBIFRY_COLOR: Color = Color::Rgb(230, 140, 60);

/// Render the whole Gopher Jump screen.
pub fn render_jump_scene(frame: &mut Frame, area: Rect, game: &GopherJumpGame, debug: bool) {
    let layout = create_game_layout(frame, area, " Gopher Jump ", Color::LightCyan, 10, 24);

    render_play_field(frame, layout.content, game);

    match game.mode {
        GameMode::Title => render_center_banner(
            frame,
            layout.content,
            "PRESS SPACE KEY",
            Color::Green,
            None,
        ),
        GameMode::GameOver => render_center_banner(
            frame,
            layout.content,
            "GAME OVER",
            Color::Red,
            Some("To play again, press the space key."),
        ),
        GameMode::Playing => {}
    }

    render_status_bar_content(frame, layout.status_bar, game);
    render_info_panel(frame, layout.info_panel, game, debug);
}

/// Column for a horizontal screen-space position.
pub fn screen_x_to_col(screen_x: f64, width: usize) -> i32 {
    (screen_x / SCREEN_WIDTH as f64 * width as f64).floor() as i32
}

/// Row for a vertical screen-space position.
pub fn screen_y_to_row(screen_y: f64, height: usize) -> i32 {
    (screen_y / SCREEN_HEIGHT as f64 * height as f64).floor() as i32
}

/// Screen-space line the gopher's feet rest on.
fn ground_screen_y() -> f64 {
    (GopherJumpGame::REST_Y + GOPHER_FRAME_HEIGHT as f64) * GOPHER_SCALE
}

/// Build the play field cell buffer. Split out from rendering for tests.
pub fn build_play_field(game: &GopherJumpGame, width: usize, height: usize) -> CellBuffer {
    let mut buffer = CellBuffer::new(width, height);
    let ground_row = screen_y_to_row(ground_screen_y(), height).min(height as i32 - 1);

    // ── Ground ──
    let tile_phase = game.animation.ground_frame() as i32;
    for row in ground_row..height as i32 {
        for col in 0..width as i32 {
            let px = col as f64 * SCREEN_WIDTH as f64 / width as f64;
            let tile = ((px - game.ground.x as f64) / GROUND_WIDTH as f64).floor() as i32;
            let ch = GROUND_TILES[(tile + tile_phase).rem_euclid(2) as usize];
            buffer.set(
                col,
                row,
                Cell {
                    ch,
                    fg: GROUND_FG,
                    bg: GROUND_BG,
                },
            );
        }
    }

    // ── Ebifry ──
    let ebifry_cols = ((width as f64 / 40.0).ceil() as i32).max(1);
    for obstacle in game.visible_obstacles() {
        let col = screen_x_to_col(obstacle.x as f64 * OBSTACLE_SCALE, width);
        for dx in 0..ebifry_cols {
            buffer.set(
                col + dx,
                ground_row - 1,
                Cell {
                    ch: if dx == 0 { '<' } else { '#' },
                    fg: EBIFRY_COLOR,
                    bg: Color::Reset,
                },
            );
            buffer.set(
                col + dx,
                ground_row - 2,
                Cell {
                    ch: '^',
                    fg: EBIFRY_COLOR,
                    bg: Color::Reset,
                },
            );
        }
    }

    // ── Gopher ──
    let gopher_col = screen_x_to_col(game.player_x as f64 * GOPHER_SCALE, width);
    let gopher_cols = ((GOPHER_FRAME_WIDTH as f64 * GOPHER_SCALE / SCREEN_WIDTH as f64
        * width as f64)
        .ceil() as i32)
        .max(2);
    let feet_screen_y = (game.player_y + GOPHER_FRAME_HEIGHT as f64) * GOPHER_SCALE;
    let feet_row = (screen_y_to_row(feet_screen_y, height) - 1).min(height as i32 - 1);
    let stride = game.animation.gopher_frame() % 2 == 0;
    for dx in 0..gopher_cols {
        let body = if dx == 0 { '(' } else if dx == gopher_cols - 1 { ')' } else { '█' };
        buffer.set(
            gopher_col + dx,
            feet_row - 1,
            Cell {
                ch: body,
                fg: GOPHER_COLOR,
                bg: Color::Reset,
            },
        );
        let legs = if game.is_jumping {
            '^'
        } else if (dx % 2 == 0) == stride {
            '/'
        } else {
            '\\'
        };
        buffer.set(
            gopher_col + dx,
            feet_row,
            Cell {
                ch: legs,
                fg: GOPHER_COLOR,
                bg: Color::Reset,
            },
        );
    }

    // ── Score (top-right) ──
    let score_text = format!("Score: {}", game.score);
    let start = width as i32 - score_text.chars().count() as i32 - 1;
    buffer.put_str(start, 0, &score_text, Color::White);

    buffer
}

fn render_play_field(frame: &mut Frame, area: Rect, game: &GopherJumpGame) {
    if area.height < 4 || area.width < 10 {
        return;
    }
    let buffer = build_play_field(game, area.width as usize, area.height as usize);
    buffer.render(frame, area);
}

fn render_status_bar_content(frame: &mut Frame, area: Rect, game: &GopherJumpGame) {
    match game.mode {
        GameMode::Title => render_status_bar(
            frame,
            area,
            "Ready",
            Color::Green,
            &[("[Space]", "Start"), ("[Esc]", "Quit")],
        ),
        GameMode::Playing => render_status_bar(
            frame,
            area,
            "Run!",
            Color::LightCyan,
            &[("[Space/Up]", "Jump"), ("[Esc]", "Quit")],
        ),
        GameMode::GameOver => render_status_bar(
            frame,
            area,
            "Game Over",
            Color::Red,
            &[("[Space]", "Retry"), ("[Esc]", "Quit")],
        ),
    }
}

fn render_info_panel(frame: &mut Frame, area: Rect, game: &GopherJumpGame, debug: bool) {
    let inner = render_info_panel_frame(frame, area);

    let mut lines: Vec<Line> = vec![
        Line::from(vec![
            Span::styled("Mode: ", Style::default().fg(Color::DarkGray)),
            Span::styled(game.mode.name(), Style::default().fg(Color::LightCyan)),
        ]),
        Line::from(vec![
            Span::styled("Score: ", Style::default().fg(Color::DarkGray)),
            Span::styled(
                game.score.to_string(),
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(vec![
            Span::styled("High score: ", Style::default().fg(Color::DarkGray)),
            Span::styled(game.high_score.to_string(), Style::default().fg(Color::Yellow)),
        ]),
        Line::from(""),
        Line::from(Span::styled(
            "Legend:",
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(vec![
            Span::styled(" (█) ", Style::default().fg(GOPHER_COLOR)),
            Span::styled("Gopher", Style::default().fg(Color::DarkGray)),
        ]),
        Line::from(vec![
            Span::styled(" <#  ", Style::default().fg(EBIFRY_COLOR)),
            Span::styled("Ebifry", Style::default().fg(Color::DarkGray)),
        ]),
    ];

    if debug {
        lines.push(Line::from(""));
        lines.extend(debug_lines(game).into_iter().map(|text| {
            Line::from(Span::styled(text, Style::default().fg(Color::DarkGray)))
        }));
    }

    frame.render_widget(Paragraph::new(lines), inner);
}

/// Positions readout shown with `--debug`.
pub fn debug_lines(game: &GopherJumpGame) -> Vec<String> {
    let mut lines = vec![
        format!("groundY: {}", GROUND_Y),
        format!("gopher: {}x{}", GOPHER_WIDTH, GOPHER_HEIGHT),
        format!("x: {}, y: {:.1}", game.player_x, game.player_y),
        format!("vy: {:.1} tick: {}", game.velocity, game.ground.tick_count),
    ];
    for (i, obstacle) in game.obstacles.iter().enumerate() {
        lines.push(format!(
            "ebifry{} x:{} y:{:.0}{}",
            i + 1,
            obstacle.x,
            obstacle.y,
            if obstacle.visible { "" } else { " -" }
        ));
    }
    lines
}
