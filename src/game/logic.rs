//! Game logic: input dispatch, the fixed-tick simulation step, collision
//! detection, and scoring.

use super::types::{FlappyGame, GameEvent, Phase};
use crate::constants::*;
use rand::Rng;

/// UI-agnostic input actions.
///
/// `Primary` is deliberately phase-dependent: it starts a waiting game and
/// flaps a running one (same key, both meanings).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlappyInput {
    /// Space/Up/Enter: start the game, or jump while running.
    Primary,
    /// Cycle Day -> Night -> Neon.
    CycleTheme,
    /// Cycle Classic -> Blue -> Red -> Neon.
    CycleSkin,
    /// Restart after a crash. No-op in any other phase.
    Restart,
}

/// Dispatch a player action against the current phase.
///
/// The whole transition table lives in this one match so it stays auditable:
/// every (phase, input) pair is spelled out.
pub fn process_input(game: &mut FlappyGame, input: FlappyInput) -> Option<GameEvent> {
    match (game.phase, input) {
        (Phase::NotStarted, FlappyInput::Primary) => {
            game.phase = Phase::Running;
            // Renderer animates this back up to 1 over the next ticks
            game.fade_opacity = 0.0;
            None
        }
        (Phase::Running, FlappyInput::Primary) => {
            game.bird.jump();
            Some(GameEvent::Jumped)
        }
        (Phase::GameOver, FlappyInput::Primary) => None,

        (Phase::GameOver, FlappyInput::Restart) => {
            game.reset();
            None
        }
        (_, FlappyInput::Restart) => None,

        // Preferences cycle in every phase
        (_, FlappyInput::CycleTheme) => {
            game.theme = game.theme.next();
            None
        }
        (_, FlappyInput::CycleSkin) => {
            game.skin = game.skin.next();
            None
        }
    }
}

/// Advance the simulation. Called from the main loop with wall-clock time.
///
/// `dt_ms` is milliseconds since the last call, stepped internally in fixed
/// `TICK_INTERVAL_MS` slices (~60 FPS). Returns the events produced by all
/// slices, in order, for the sound layer.
pub fn tick_game<R: Rng>(game: &mut FlappyGame, dt_ms: u64, rng: &mut R) -> Vec<GameEvent> {
    let mut events = Vec::new();

    if game.phase != Phase::Running {
        return events;
    }

    // Clamp dt to 100ms max to prevent physics explosion after pause/lag
    let dt_ms = dt_ms.min(100);
    game.accumulated_time_ms += dt_ms;

    while game.accumulated_time_ms >= TICK_INTERVAL_MS {
        game.accumulated_time_ms -= TICK_INTERVAL_MS;
        step(game, rng, &mut events);

        if game.phase != Phase::Running {
            break;
        }
    }

    events
}

/// Single fixed tick. Order matters and is part of the contract:
/// bird -> pipes -> particles -> cosmetics -> collision -> scoring.
fn step<R: Rng>(game: &mut FlappyGame, rng: &mut R, events: &mut Vec<GameEvent>) {
    game.tick_count += 1;

    // 1. Bird physics
    game.bird.update();

    // 2. Pipe spawning, motion, removal (order of survivors preserved)
    game.spawn_counter += 1;
    if game.spawn_counter >= PIPE_SPAWN_INTERVAL {
        game.spawn_pipe(rng);
        game.spawn_counter = 0;
    }
    for pipe in &mut game.pipes {
        pipe.update();
    }
    game.pipes.retain(|pipe| !pipe.is_offscreen());

    // 3. Particles: integrate, then prune the dead
    for particle in &mut game.particles {
        particle.update();
    }
    game.particles.retain(|particle| particle.is_alive());

    // 4. Cosmetic accumulators
    game.background_offset += BACKGROUND_SCROLL_STEP;
    if game.fade_opacity < 1.0 {
        game.fade_opacity = (game.fade_opacity + FADE_IN_STEP).min(1.0);
    }
    game.shake.update(rng);

    // 5. Collision: first hit ends the tick
    if check_collisions(game) {
        enter_game_over(game, rng, events);
        return;
    }

    // 6. Scoring
    check_scoring(game, rng, events);
}

/// True if the bird left the vertical bounds or hit any pipe section.
///
/// Pipes are checked in spawn order but any hit is terminal, so the result
/// is order-independent.
fn check_collisions(game: &FlappyGame) -> bool {
    let bird = &game.bird;

    if bird.y <= 0.0 || bird.y + BIRD_HEIGHT >= FIELD_HEIGHT {
        return true;
    }

    for pipe in &game.pipes {
        let top_hit = bird.intersects(pipe.x, 0.0, PIPE_WIDTH, pipe.top_height);
        let bottom_hit = bird.intersects(
            pipe.x,
            pipe.bottom_y(),
            PIPE_WIDTH,
            FIELD_HEIGHT - pipe.bottom_y(),
        );
        if top_hit || bottom_hit {
            return true;
        }
    }

    false
}

/// Mark newly-passed pipes, bump the score, and fire the per-pipe effects.
/// The `scored` flag makes this idempotent across ticks.
fn check_scoring<R: Rng>(game: &mut FlappyGame, rng: &mut R, events: &mut Vec<GameEvent>) {
    let bird_x = game.bird.x;
    let mut burst_centers = Vec::new();

    for pipe in &mut game.pipes {
        if !pipe.scored && pipe.x + PIPE_WIDTH < bird_x {
            pipe.scored = true;
            burst_centers.push(pipe.gap_center());
        }
    }

    for (x, y) in burst_centers {
        game.score += 1;
        game.spawn_score_burst(x, y, rng);
        game.shake
            .pulse(SCORE_SHAKE_TICKS, SCORE_SHAKE_AMPLITUDE, rng);
        events.push(GameEvent::Scored);
    }
}

/// Freeze the simulation and fire the crash effects.
fn enter_game_over<R: Rng>(game: &mut FlappyGame, rng: &mut R, events: &mut Vec<GameEvent>) {
    game.phase = Phase::GameOver;
    game.shake
        .pulse(GAME_OVER_SHAKE_TICKS, GAME_OVER_SHAKE_AMPLITUDE, rng);

    let (cx, cy) = (
        game.bird.x + BIRD_WIDTH / 2.0,
        game.bird.y + BIRD_HEIGHT / 2.0,
    );
    game.spawn_collision_burst(cx, cy, rng);
    events.push(GameEvent::GameOver);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::types::Pipe;
    use crate::theme::{BirdSkin, Theme};

    /// A game that has already been started via the primary action.
    fn started_game() -> FlappyGame {
        let mut game = FlappyGame::new();
        process_input(&mut game, FlappyInput::Primary);
        game
    }

    /// Run exactly one physics tick.
    fn one_tick(game: &mut FlappyGame) -> Vec<GameEvent> {
        let mut rng = rand::thread_rng();
        tick_game(game, TICK_INTERVAL_MS, &mut rng)
    }

    #[test]
    fn test_primary_starts_game_without_jump() {
        let mut game = FlappyGame::new();
        let event = process_input(&mut game, FlappyInput::Primary);
        assert_eq!(game.phase, Phase::Running);
        assert!(event.is_none());
        assert!((game.bird.velocity - 0.0).abs() < f64::EPSILON);
        assert!((game.fade_opacity - 0.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_primary_jumps_while_running() {
        let mut game = started_game();
        let event = process_input(&mut game, FlappyInput::Primary);
        assert_eq!(event, Some(GameEvent::Jumped));
        assert!((game.bird.velocity - JUMP_FORCE).abs() < f64::EPSILON);
    }

    #[test]
    fn test_primary_ignored_when_game_over() {
        let mut game = started_game();
        game.phase = Phase::GameOver;
        let event = process_input(&mut game, FlappyInput::Primary);
        assert!(event.is_none());
        assert_eq!(game.phase, Phase::GameOver);
        assert!((game.bird.velocity - 0.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_restart_only_from_game_over() {
        let mut game = started_game();
        game.score = 5;
        process_input(&mut game, FlappyInput::Restart);
        assert_eq!(game.phase, Phase::Running);
        assert_eq!(game.score, 5);

        game.phase = Phase::GameOver;
        process_input(&mut game, FlappyInput::Restart);
        assert_eq!(game.phase, Phase::NotStarted);
        assert_eq!(game.score, 0);
        assert!(game.pipes.is_empty());
        assert!(game.particles.is_empty());
    }

    #[test]
    fn test_theme_and_skin_cycle_in_any_phase() {
        let mut game = FlappyGame::new();
        process_input(&mut game, FlappyInput::CycleTheme);
        assert_eq!(game.theme, Theme::Night);

        game.phase = Phase::GameOver;
        process_input(&mut game, FlappyInput::CycleSkin);
        assert_eq!(game.skin, BirdSkin::Blue);
    }

    #[test]
    fn test_tick_noop_unless_running() {
        let mut game = FlappyGame::new();
        let y_before = game.bird.y;
        let events = one_tick(&mut game);
        assert!(events.is_empty());
        assert!((game.bird.y - y_before).abs() < f64::EPSILON);

        game.phase = Phase::GameOver;
        let events = one_tick(&mut game);
        assert!(events.is_empty());
        assert!((game.bird.y - y_before).abs() < f64::EPSILON);
    }

    #[test]
    fn test_gravity_pulls_bird_down() {
        let mut game = started_game();
        let y_before = game.bird.y;
        one_tick(&mut game);
        assert!(game.bird.y > y_before);
    }

    #[test]
    fn test_velocity_never_exceeds_max() {
        let mut game = started_game();
        for _ in 0..50 {
            one_tick(&mut game);
            assert!(game.bird.velocity <= MAX_VELOCITY);
            if game.phase != Phase::Running {
                break;
            }
        }
    }

    #[test]
    fn test_pipe_spawn_cadence() {
        let mut game = started_game();
        // Hover the bird mid-field so the run survives long enough
        for _ in 0..PIPE_SPAWN_INTERVAL {
            if game.bird.velocity > 0.0 && game.bird.y > 250.0 {
                game.bird.jump();
            }
            one_tick(&mut game);
        }
        assert_eq!(game.phase, Phase::Running, "bird should still be alive");
        assert_eq!(game.pipes.len(), 1);
        assert_eq!(game.spawn_counter, 0);
    }

    #[test]
    fn test_floor_collision_ends_game_with_burst() {
        let mut game = started_game();
        game.bird.y = FIELD_HEIGHT - BIRD_HEIGHT - 1.0;
        game.bird.velocity = MAX_VELOCITY;

        let events = one_tick(&mut game);

        assert_eq!(game.phase, Phase::GameOver);
        assert!(events.contains(&GameEvent::GameOver));
        assert_eq!(game.particles.len(), COLLISION_BURST_COUNT);
        assert!(game.shake.is_active());
    }

    #[test]
    fn test_ceiling_collision_ends_game() {
        let mut game = started_game();
        game.bird.y = 1.0;
        game.bird.velocity = -10.0;

        one_tick(&mut game);

        assert_eq!(game.phase, Phase::GameOver);
    }

    #[test]
    fn test_pipe_collision_ends_game() {
        let mut game = started_game();
        // Pipe directly on the bird with the gap far below
        game.pipes
            .push(Pipe::new(game.bird.x, 400.0, PIPE_GAP));
        // Bird at y=200 is inside the top section (0..400)
        one_tick(&mut game);
        assert_eq!(game.phase, Phase::GameOver);
    }

    #[test]
    fn test_no_collision_inside_gap() {
        let mut game = started_game();
        // Gap spans 100..250; bird at y=200 (height 25) sits inside it
        game.pipes.push(Pipe::new(game.bird.x, 100.0, PIPE_GAP));
        game.bird.velocity = 0.0;

        one_tick(&mut game);
        assert_eq!(game.phase, Phase::Running);
    }

    #[test]
    fn test_scoring_increments_once() {
        let mut game = started_game();
        // Unscored pipe already behind the bird
        game.pipes
            .push(Pipe::new(game.bird.x - PIPE_WIDTH - 10.0, 100.0, PIPE_GAP));

        let events = one_tick(&mut game);
        assert_eq!(game.score, 1);
        assert!(game.pipes[0].scored);
        assert_eq!(
            events.iter().filter(|e| **e == GameEvent::Scored).count(),
            1
        );
        assert_eq!(game.particles.len(), SCORE_BURST_COUNT);
        assert!(game.shake.is_active());

        // Re-running the check on the scored pipe must not double-count
        one_tick(&mut game);
        assert_eq!(game.score, 1);
    }

    #[test]
    fn test_fade_approaches_one_while_running() {
        let mut game = started_game();
        assert!((game.fade_opacity - 0.0).abs() < f64::EPSILON);
        // Stay airborne for a few ticks
        game.bird.jump();
        for _ in 0..5 {
            one_tick(&mut game);
        }
        assert!(game.fade_opacity > 0.0);
        assert!(game.fade_opacity <= 1.0);
    }

    #[test]
    fn test_dt_clamped() {
        let mut game = started_game();
        let mut rng = rand::thread_rng();

        // A huge dt must be clamped to 100ms, i.e. at most 6 physics ticks
        tick_game(&mut game, 60_000, &mut rng);
        assert!(game.tick_count <= 6);
    }

    #[test]
    fn test_entities_frozen_after_game_over() {
        let mut game = started_game();
        game.bird.y = FIELD_HEIGHT - BIRD_HEIGHT - 1.0;
        game.bird.velocity = MAX_VELOCITY;
        one_tick(&mut game);
        assert_eq!(game.phase, Phase::GameOver);

        let bird_y = game.bird.y;
        let particle_count = game.particles.len();
        one_tick(&mut game);
        assert!((game.bird.y - bird_y).abs() < f64::EPSILON);
        assert_eq!(game.particles.len(), particle_count);
    }
}
