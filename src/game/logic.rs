//! Gopher Jump game logic: mode transitions, jump physics, obstacle pool,
//! collision detection.

use super::types::*;
use crate::core::config::HighScorePolicy;
use crate::core::constants::TICKS_PER_POINT;
use rand::Rng;

/// Advance the game by one tick.
///
/// `confirm_pressed` is the edge-triggered jump/confirm signal for this tick.
/// The RNG is only consulted for spawn rolls, after both spawn gates pass.
pub fn advance<R: Rng + ?Sized>(game: &mut GopherJumpGame, confirm_pressed: bool, rng: &mut R) {
    match game.mode {
        GameMode::Title => {
            if confirm_pressed {
                set_mode(game, GameMode::Playing);
            }
        }
        GameMode::GameOver => {
            if confirm_pressed {
                game.reset();
                set_mode(game, GameMode::Playing);
            }
        }
        GameMode::Playing => step_playing(game, confirm_pressed, rng),
    }
}

/// Single playing tick. Order matters: the collision test sees the
/// positions produced by this tick's physics and scrolling.
fn step_playing<R: Rng + ?Sized>(game: &mut GopherJumpGame, confirm_pressed: bool, rng: &mut R) {
    // 1. Score
    game.tick_count += 1;
    game.score = game.tick_count / TICKS_PER_POINT;

    // 2. Ground clock
    game.ground.tick_count += 1;

    // 3. Jump impulse (no double jump)
    if !game.is_jumping && confirm_pressed {
        game.is_jumping = true;
        game.velocity = -game.tuning.jump_power;
    }

    // 4. Move, then accelerate
    if game.is_jumping {
        game.player_y += game.velocity;
        game.velocity += game.tuning.gravity;
    }

    // 5. Landing
    if game.player_y >= GopherJumpGame::REST_Y {
        game.is_jumping = false;
        if game.tuning.clamp_landing {
            game.player_y = GopherJumpGame::REST_Y;
        }
    }

    // 6. Obstacle pool
    update_obstacles(game, rng);

    // 7. Ground scroll
    let speed = game.tuning.speed;
    game.ground.scroll(speed);

    // 8. Collision
    if check_collision(game) {
        end_round(game);
    }

    // 9. Render-only animation state
    game.animation.tick();
}

/// Move visible obstacles and try to spawn into the first eligible hidden slot.
fn update_obstacles<R: Rng + ?Sized>(game: &mut GopherJumpGame, rng: &mut R) {
    let speed = game.tuning.speed;
    let ground_tick = game.ground.tick_count;

    for index in 0..game.obstacles.len() {
        let obstacle = &mut game.obstacles[index];
        if obstacle.visible {
            obstacle.advance(speed);
            if obstacle.is_out_of_screen() {
                obstacle.hide();
            }
        } else if spawn_gate_open(game, ground_tick) && roll_spawn(game, rng) {
            game.last_obstacle_spawn_tick = ground_tick;
            game.obstacles[index].show();
            log::debug!("obstacle spawned in slot {} at ground tick {}", index, ground_tick);
            break;
        }
    }
}

/// Minimum spacing since the last spawn and the tick cadence both hold.
pub fn spawn_gate_open(game: &GopherJumpGame, ground_tick: u64) -> bool {
    ground_tick.saturating_sub(game.last_obstacle_spawn_tick) > game.tuning.min_spawn_distance
        && ground_tick % game.tuning.spawn_interval == 0
}

fn roll_spawn<R: Rng + ?Sized>(game: &GopherJumpGame, rng: &mut R) -> bool {
    rng.gen_range(0..game.tuning.spawn_chance_denominator) == 0
}

/// Any visible obstacle inside the hit window while the gopher is on the ground.
pub fn check_collision(game: &GopherJumpGame) -> bool {
    game.is_grounded() && game.visible_obstacles().any(|o| o.in_hit_window())
}

fn end_round(game: &mut GopherJumpGame) {
    game.high_score = match game.tuning.high_score_policy {
        HighScorePolicy::LastRound => game.score,
        HighScorePolicy::Best => game.high_score.max(game.score),
    };
    log::info!(
        "round over: score {} (high score {})",
        game.score,
        game.high_score
    );
    set_mode(game, GameMode::GameOver);
}

fn set_mode(game: &mut GopherJumpGame, mode: GameMode) {
    log::debug!("mode {} -> {}", game.mode.name(), mode.name());
    game.mode = mode;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::Tuning;
    use crate::core::constants::*;
    use rand::rngs::mock::StepRng;
    use rand::RngCore;

    /// RNG whose every `gen_range(0..n)` draw is 0, so every gated roll spawns.
    fn always_spawn() -> StepRng {
        StepRng::new(0, 0)
    }

    /// RNG whose `gen_range(0..10)` draws are always 2, so no roll spawns.
    fn never_spawn() -> StepRng {
        StepRng::new(0x4000_0000, 0)
    }

    /// Raw draws that `gen_range(0..10)` maps to 0 and to 2.
    const DRAW_HIT: u32 = 0;
    const DRAW_MISS: u32 = 0x4000_0000;

    /// Replays a fixed list of draws (cycling) and counts how many were taken.
    struct ScriptedRng {
        draws: Vec<u32>,
        taken: usize,
    }

    impl ScriptedRng {
        fn new(draws: &[u32]) -> Self {
            Self {
                draws: draws.to_vec(),
                taken: 0,
            }
        }
    }

    impl RngCore for ScriptedRng {
        fn next_u32(&mut self) -> u32 {
            let draw = self.draws[self.taken % self.draws.len()];
            self.taken += 1;
            draw
        }

        fn next_u64(&mut self) -> u64 {
            self.next_u32() as u64
        }

        fn fill_bytes(&mut self, dest: &mut [u8]) {
            for chunk in dest.chunks_mut(4) {
                let bytes = self.next_u32().to_le_bytes();
                chunk.copy_from_slice(&bytes[..chunk.len()]);
            }
        }

        fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand::Error> {
            self.fill_bytes(dest);
            Ok(())
        }
    }

    fn playing_game() -> GopherJumpGame {
        let mut game = GopherJumpGame::default();
        game.mode = GameMode::Playing;
        game
    }

    // ── Mode transitions ──

    #[test]
    fn test_title_waits_for_confirm() {
        let mut game = GopherJumpGame::default();
        let mut rng = never_spawn();
        for _ in 0..10 {
            advance(&mut game, false, &mut rng);
        }
        assert_eq!(game.mode, GameMode::Title);
        assert_eq!(game.tick_count, 0);

        advance(&mut game, true, &mut rng);
        assert_eq!(game.mode, GameMode::Playing);
        // The starting press does not also jump
        assert!(!game.is_jumping);
        assert_eq!(game.tick_count, 0);
    }

    #[test]
    fn test_title_start_does_not_reset() {
        let mut game = GopherJumpGame::default();
        game.tick_count = 7;
        advance(&mut game, true, &mut never_spawn());
        assert_eq!(game.mode, GameMode::Playing);
        assert_eq!(game.tick_count, 7);
    }

    #[test]
    fn test_game_over_restart_resets() {
        let mut game = playing_game();
        game.mode = GameMode::GameOver;
        game.tick_count = 400;
        game.score = 80;
        game.high_score = 80;
        game.obstacles[0].show();
        game.player_y = 20.0;

        advance(&mut game, false, &mut never_spawn());
        assert_eq!(game.mode, GameMode::GameOver);
        assert_eq!(game.tick_count, 400);

        advance(&mut game, true, &mut never_spawn());
        assert_eq!(game.mode, GameMode::Playing);
        assert_eq!(game.tick_count, 0);
        assert_eq!(game.score, 0);
        assert_eq!(game.high_score, 80);
        assert!(game.obstacles.iter().all(|o| !o.visible));
        assert!((game.player_y - GopherJumpGame::REST_Y).abs() < f64::EPSILON);
    }

    // ── Scoring ──

    #[test]
    fn test_score_is_tick_count_over_five() {
        let mut game = playing_game();
        let mut rng = never_spawn();
        for _ in 0..137 {
            advance(&mut game, false, &mut rng);
            assert_eq!(game.score, game.tick_count / 5);
        }
        assert_eq!(game.tick_count, 137);
        assert_eq!(game.score, 27);
    }

    #[test]
    fn test_score_does_not_wrap_with_animation() {
        let mut game = playing_game();
        let mut rng = never_spawn();
        for _ in 0..200 {
            advance(&mut game, false, &mut rng);
        }
        assert_eq!(game.score, 40);
        assert!(game.animation.gopher_tick < 95);
    }

    // ── Physics ──

    #[test]
    fn test_jump_impulse() {
        let mut game = playing_game();
        advance(&mut game, true, &mut never_spawn());
        assert!(game.is_jumping);
        // Moved by the impulse, then gravity applied once
        assert!((game.player_y - (85.0 - 8.5)).abs() < f64::EPSILON);
        assert!((game.velocity - (-8.0)).abs() < f64::EPSILON);
    }

    #[test]
    fn test_gravity_accumulates_after_move() {
        let mut game = playing_game();
        let mut rng = never_spawn();
        advance(&mut game, true, &mut rng);

        let mut prev_velocity = game.velocity;
        let mut prev_y = game.player_y;
        while game.is_jumping {
            advance(&mut game, false, &mut rng);
            // Position used the velocity from before this tick's gravity
            assert!((game.player_y - (prev_y + prev_velocity)).abs() < f64::EPSILON);
            assert!((game.velocity - (prev_velocity + 0.5)).abs() < f64::EPSILON);
            prev_velocity = game.velocity;
            prev_y = game.player_y;
        }
    }

    #[test]
    fn test_jump_arc_lands_on_rest_height() {
        let mut game = playing_game();
        let mut rng = never_spawn();
        advance(&mut game, true, &mut rng);
        let mut airborne_ticks = 1;
        let mut apex = game.player_y;
        while game.is_jumping {
            advance(&mut game, false, &mut rng);
            apex = apex.min(game.player_y);
            airborne_ticks += 1;
        }
        assert_eq!(airborne_ticks, 35);
        assert!((apex - 8.5).abs() < f64::EPSILON);
        assert!((game.player_y - GopherJumpGame::REST_Y).abs() < f64::EPSILON);
        assert!(game.is_grounded());
    }

    #[test]
    fn test_no_double_jump() {
        let mut game = playing_game();
        let mut rng = never_spawn();
        advance(&mut game, true, &mut rng);
        advance(&mut game, false, &mut rng);
        let velocity = game.velocity;
        advance(&mut game, true, &mut rng);
        assert!((game.velocity - (velocity + 0.5)).abs() < f64::EPSILON);
    }

    #[test]
    fn test_landing_without_clamp_keeps_overshoot() {
        let mut tuning = Tuning::default();
        tuning.jump_power = 8.3;
        let mut game = GopherJumpGame::new(tuning);
        game.mode = GameMode::Playing;
        let mut rng = never_spawn();
        advance(&mut game, true, &mut rng);
        while game.is_jumping {
            advance(&mut game, false, &mut rng);
        }
        assert!(game.player_y > GopherJumpGame::REST_Y);
        assert!(!game.is_grounded());
    }

    #[test]
    fn test_landing_with_clamp_snaps_to_ground() {
        let mut tuning = Tuning::corrected();
        tuning.jump_power = 8.3;
        let mut game = GopherJumpGame::new(tuning);
        game.mode = GameMode::Playing;
        let mut rng = never_spawn();
        advance(&mut game, true, &mut rng);
        while game.is_jumping {
            advance(&mut game, false, &mut rng);
        }
        assert!((game.player_y - GopherJumpGame::REST_Y).abs() < f64::EPSILON);
        assert!(game.is_grounded());
    }

    // ── Obstacles ──

    #[test]
    fn test_spawn_gate() {
        let mut game = playing_game();
        assert!(!spawn_gate_open(&game, 50));
        assert!(!spawn_gate_open(&game, 51));
        assert!(spawn_gate_open(&game, 60));
        game.last_obstacle_spawn_tick = 60;
        assert!(!spawn_gate_open(&game, 110));
        assert!(spawn_gate_open(&game, 120));
    }

    #[test]
    fn test_first_spawn_on_first_open_gate() {
        let mut game = playing_game();
        let mut rng = always_spawn();
        for tick in 1..=60 {
            advance(&mut game, false, &mut rng);
            let visible = game.visible_obstacles().count();
            if tick < 60 {
                assert_eq!(visible, 0, "spawned early at tick {}", tick);
            }
        }
        assert!(game.obstacles[0].visible);
        assert!(!game.obstacles[1].visible);
        assert_eq!(game.obstacles[0].x, 0);
        assert_eq!(game.last_obstacle_spawn_tick, 60);
    }

    #[test]
    fn test_failed_roll_does_not_spawn() {
        let mut game = playing_game();
        let mut rng = never_spawn();
        for _ in 0..300 {
            advance(&mut game, false, &mut rng);
        }
        assert_eq!(game.visible_obstacles().count(), 0);
        assert_eq!(game.last_obstacle_spawn_tick, 0);
    }

    #[test]
    fn test_one_spawn_per_tick_in_pool_order() {
        let mut game = playing_game();
        let mut rng = always_spawn();
        for _ in 0..120 {
            advance(&mut game, false, &mut rng);
        }
        assert!(game.obstacles[0].visible);
        assert!(game.obstacles[1].visible);
        assert!(!game.obstacles[2].visible);
        assert_eq!(game.obstacles[0].x, 60 * SPEED);
        assert_eq!(game.obstacles[1].x, 0);
    }

    #[test]
    fn test_failed_roll_falls_through_to_next_hidden_slot() {
        let mut game = playing_game();
        let mut rng = ScriptedRng::new(&[DRAW_MISS, DRAW_HIT]);
        for _ in 0..59 {
            advance(&mut game, false, &mut rng);
        }
        assert_eq!(rng.taken, 0);

        // Tick 60 opens the gate: slot 0 misses, slot 1 rolls again and hits
        advance(&mut game, false, &mut rng);
        assert_eq!(rng.taken, 2);
        let visible: Vec<bool> = game.obstacles.iter().map(|o| o.visible).collect();
        assert_eq!(visible, vec![false, true, false]);
        assert_eq!(game.last_obstacle_spawn_tick, 60);
    }

    #[test]
    fn test_gated_tick_rolls_once_per_hidden_slot() {
        let mut game = playing_game();
        let mut rng = ScriptedRng::new(&[DRAW_MISS]);
        for _ in 0..60 {
            advance(&mut game, false, &mut rng);
        }
        assert_eq!(rng.taken, MAX_OBSTACLE_COUNT);
        assert_eq!(game.visible_obstacles().count(), 0);

        // A visible slot only moves, so one fewer roll on the next gated tick
        game.obstacles[0].show();
        for _ in 0..10 {
            advance(&mut game, false, &mut rng);
        }
        assert_eq!(rng.taken, MAX_OBSTACLE_COUNT + 2);
    }

    #[test]
    fn test_obstacle_hides_past_screen_edge() {
        let mut game = playing_game();
        game.obstacles[2].show();
        game.obstacles[2].x = 2988;
        game.player_y = 20.0;
        game.is_jumping = true;
        game.velocity = 0.0;
        game.tuning.gravity = 0.0;

        advance(&mut game, false, &mut never_spawn());
        assert_eq!(game.obstacles[2].x, 3000);
        assert!(game.obstacles[2].visible);

        advance(&mut game, false, &mut never_spawn());
        assert_eq!(game.obstacles[2].x, 3012);
        assert!(!game.obstacles[2].visible);
    }

    // ── Collision ──

    #[test]
    fn test_collision_when_grounded_in_window() {
        let mut game = playing_game();
        game.obstacles[0].show();
        game.obstacles[0].x = 2000;
        game.tick_count = 49;

        advance(&mut game, false, &mut never_spawn());
        assert_eq!(game.obstacles[0].x, 2012);
        assert_eq!(game.mode, GameMode::GameOver);
        assert_eq!(game.score, 10);
        assert_eq!(game.high_score, 10);
    }

    #[test]
    fn test_no_collision_while_airborne() {
        let mut game = playing_game();
        game.obstacles[0].show();
        game.obstacles[0].x = 2000;
        advance(&mut game, true, &mut never_spawn());
        assert!(game.is_jumping);
        assert_eq!(game.mode, GameMode::Playing);
    }

    #[test]
    fn test_hidden_obstacle_never_collides() {
        let mut game = playing_game();
        game.obstacles[0].x = 2100;
        assert!(!check_collision(&game));
        game.obstacles[0].visible = true;
        assert!(check_collision(&game));
    }

    #[test]
    fn test_score_frozen_after_game_over() {
        let mut game = playing_game();
        game.obstacles[0].show();
        game.obstacles[0].x = 2100;
        advance(&mut game, false, &mut never_spawn());
        assert_eq!(game.mode, GameMode::GameOver);
        let (tick, score) = (game.tick_count, game.score);
        for _ in 0..20 {
            advance(&mut game, false, &mut never_spawn());
        }
        assert_eq!(game.tick_count, tick);
        assert_eq!(game.score, score);
    }

    // ── High score policy ──

    #[test]
    fn test_last_round_policy_overwrites() {
        let mut game = playing_game();
        game.high_score = 99;
        game.score = 3;
        end_round(&mut game);
        assert_eq!(game.high_score, 3);
    }

    #[test]
    fn test_best_policy_keeps_max() {
        let mut game = GopherJumpGame::new(Tuning::corrected());
        game.mode = GameMode::Playing;
        game.high_score = 99;
        game.score = 3;
        end_round(&mut game);
        assert_eq!(game.high_score, 99);

        game.score = 120;
        end_round(&mut game);
        assert_eq!(game.high_score, 120);
    }
}
