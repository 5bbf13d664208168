//! Flappy Bird data structures.
//!
//! A real-time arcade game where the player guides a bird through pipe gaps.
//! All positions are in virtual field coordinates (see `constants`); the
//! renderer owns the mapping to terminal cells.

use crate::constants::*;
use crate::theme::{BirdSkin, Theme};
use rand::Rng;
use std::f64::consts::TAU;

/// Coarse game state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Waiting for the player to press the primary key. Physics paused.
    NotStarted,
    Running,
    /// Simulation frozen until restart.
    GameOver,
}

/// Discrete trigger points for the external sound layer.
///
/// The simulation emits these; it never plays anything itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    Jumped,
    Scored,
    GameOver,
}

/// The player-controlled bird.
#[derive(Debug, Clone)]
pub struct Bird {
    pub x: f64,
    pub y: f64,
    /// Vertical velocity in field units/tick (positive = downward).
    pub velocity: f64,
    /// Wing animation phase, advances every tick (cosmetic).
    pub wing_phase: f64,
    /// Tilt in degrees derived from velocity, clamped (cosmetic).
    pub rotation: f64,
    /// True while the flap animation plays.
    pub flapping: bool,
    /// Ticks remaining on the flap animation.
    pub flap_timer: u32,
}

impl Bird {
    pub fn new() -> Self {
        Self {
            x: BIRD_START_X,
            y: BIRD_START_Y,
            velocity: 0.0,
            wing_phase: 0.0,
            rotation: 0.0,
            flapping: false,
            flap_timer: 0,
        }
    }

    /// Advance one physics tick: gravity, terminal-velocity clamp, position,
    /// then the cosmetic animation values.
    ///
    /// The velocity clamp keeps the per-tick fall distance small relative to
    /// the pipe gap so the discrete collision check cannot tunnel through it.
    pub fn update(&mut self) {
        self.velocity += GRAVITY;
        if self.velocity > MAX_VELOCITY {
            self.velocity = MAX_VELOCITY;
        }
        self.y += self.velocity;

        self.wing_phase += WING_PHASE_STEP;
        self.rotation = (self.velocity * 2.0).clamp(-MAX_ROTATION_DEG, MAX_ROTATION_DEG);

        if self.flapping {
            self.flap_timer = self.flap_timer.saturating_sub(1);
            if self.flap_timer == 0 {
                self.flapping = false;
            }
        }
    }

    /// Jump: velocity is set to the impulse outright, not added to it.
    pub fn jump(&mut self) {
        self.velocity = JUMP_FORCE;
        self.flapping = true;
        self.flap_timer = FLAP_ANIM_TICKS;
    }

    /// Axis-aligned overlap test against a rectangle in field coordinates.
    pub fn intersects(&self, rx: f64, ry: f64, rw: f64, rh: f64) -> bool {
        self.x < rx + rw && self.x + BIRD_WIDTH > rx && self.y < ry + rh && self.y + BIRD_HEIGHT > ry
    }
}

impl Default for Bird {
    fn default() -> Self {
        Self::new()
    }
}

/// A pipe pair: a top section, a gap, and a bottom section reaching the floor.
#[derive(Debug, Clone)]
pub struct Pipe {
    /// Left edge, decreases every tick.
    pub x: f64,
    pub top_height: f64,
    pub gap: f64,
    /// Set once the bird has passed; guards against double-counting.
    pub scored: bool,
}

impl Pipe {
    pub fn new(x: f64, top_height: f64, gap: f64) -> Self {
        Self {
            x,
            top_height,
            gap,
            scored: false,
        }
    }

    pub fn update(&mut self) {
        self.x -= PIPE_SPEED;
    }

    /// Top edge of the bottom section. Fixed for the pipe's whole life.
    pub fn bottom_y(&self) -> f64 {
        self.top_height + self.gap
    }

    /// True once the right edge has scrolled past the left edge of the field.
    pub fn is_offscreen(&self) -> bool {
        self.x + PIPE_WIDTH < 0.0
    }

    /// Midpoint of the gap, where score bursts spawn.
    pub fn gap_center(&self) -> (f64, f64) {
        (self.x + PIPE_WIDTH, self.top_height + self.gap / 2.0)
    }
}

/// A transient visual effect point.
#[derive(Debug, Clone)]
pub struct Particle {
    pub x: f64,
    pub y: f64,
    pub vx: f64,
    pub vy: f64,
    pub color: (u8, u8, u8),
    pub size: f64,
    /// Remaining lifetime in ticks. Alive iff > 0.
    pub life: f64,
    pub max_life: f64,
    pub rotation: f64,
    pub rotation_speed: f64,
}

impl Particle {
    /// Create a particle. Rotation speed is drawn from the shared RNG so
    /// runs stay reproducible under a fixed seed.
    pub fn new<R: Rng>(
        x: f64,
        y: f64,
        vx: f64,
        vy: f64,
        color: (u8, u8, u8),
        size: f64,
        life: f64,
        rng: &mut R,
    ) -> Self {
        Self {
            x,
            y,
            vx,
            vy,
            color,
            size,
            life,
            max_life: life,
            rotation: 0.0,
            rotation_speed: rng.gen_range(-5.0..5.0),
        }
    }

    pub fn update(&mut self) {
        self.x += self.vx;
        self.y += self.vy;
        self.vy += PARTICLE_GRAVITY;
        self.life -= 1.0;
        self.rotation += self.rotation_speed;
    }

    pub fn is_alive(&self) -> bool {
        self.life > 0.0
    }

    /// Remaining life as a 0..1 fraction, for renderer alpha.
    pub fn life_ratio(&self) -> f64 {
        (self.life / self.max_life).clamp(0.0, 1.0)
    }
}

/// Transient positional offset applied at render time.
///
/// The offset is re-rolled once per simulation tick while the timer runs
/// (never per render pass), so the jitter is part of the deterministic
/// simulation state.
#[derive(Debug, Clone)]
pub struct ScreenShake {
    pub timer: u32,
    pub amplitude: f64,
    pub offset_x: f64,
    pub offset_y: f64,
}

impl ScreenShake {
    pub fn new() -> Self {
        Self {
            timer: 0,
            amplitude: 0.0,
            offset_x: 0.0,
            offset_y: 0.0,
        }
    }

    /// Start (or restart) a shake pulse with an immediate first offset, so a
    /// pulse fired on game-over stays visible while the simulation is frozen.
    pub fn pulse<R: Rng>(&mut self, ticks: u32, amplitude: f64, rng: &mut R) {
        self.timer = ticks;
        self.amplitude = amplitude;
        self.roll_offset(rng);
    }

    /// Advance one tick: count down and re-roll the offset, zeroing
    /// everything when the pulse expires.
    pub fn update<R: Rng>(&mut self, rng: &mut R) {
        if self.timer == 0 {
            return;
        }
        self.timer -= 1;
        if self.timer == 0 {
            self.amplitude = 0.0;
            self.offset_x = 0.0;
            self.offset_y = 0.0;
        } else {
            self.roll_offset(rng);
        }
    }

    pub fn is_active(&self) -> bool {
        self.timer > 0 && self.amplitude > 0.0
    }

    fn roll_offset<R: Rng>(&mut self, rng: &mut R) {
        if self.amplitude > 0.0 {
            self.offset_x = rng.gen_range(-self.amplitude..self.amplitude);
            self.offset_y = rng.gen_range(-self.amplitude..self.amplitude);
        }
    }
}

impl Default for ScreenShake {
    fn default() -> Self {
        Self::new()
    }
}

/// Main game state: one bird, the live pipes (spawn order), the live
/// particles (unordered), and the cross-cutting transient effects.
#[derive(Debug, Clone)]
pub struct FlappyGame {
    pub phase: Phase,
    pub bird: Bird,
    pub pipes: Vec<Pipe>,
    pub particles: Vec<Particle>,
    pub score: u32,

    /// Ticks since the last pipe spawn.
    pub spawn_counter: u32,
    /// Total physics ticks elapsed while running.
    pub tick_count: u64,
    /// Sub-tick time accumulator (milliseconds).
    pub accumulated_time_ms: u64,

    // Transient effects, consumed by the renderer
    /// Global fade-in opacity (0..1), reset to 0 on start.
    pub fade_opacity: f64,
    /// Background scroll offset (cosmetic).
    pub background_offset: f64,
    pub shake: ScreenShake,

    // Player preferences; survive restarts
    pub theme: Theme,
    pub skin: BirdSkin,
}

impl FlappyGame {
    pub fn new() -> Self {
        Self {
            phase: Phase::NotStarted,
            bird: Bird::new(),
            pipes: Vec::new(),
            particles: Vec::new(),
            score: 0,

            spawn_counter: 0,
            tick_count: 0,
            accumulated_time_ms: 0,

            fade_opacity: 1.0,
            background_offset: 0.0,
            shake: ScreenShake::new(),

            theme: Theme::Day,
            skin: BirdSkin::Classic,
        }
    }

    /// Full reset back to the pre-running state. Theme and skin are player
    /// preferences, not run state, so they carry over.
    pub fn reset(&mut self) {
        let theme = self.theme;
        let skin = self.skin;
        *self = Self::new();
        self.theme = theme;
        self.skin = skin;
    }

    /// Spawn a pipe at the right edge with a randomized top height.
    ///
    /// The range is clamped so both sections keep positive height even if
    /// the gap is configured close to the field height.
    pub fn spawn_pipe<R: Rng>(&mut self, rng: &mut R) {
        let max_top = (FIELD_HEIGHT - PIPE_GAP - PIPE_MARGIN).max(PIPE_MARGIN + 1.0);
        let top_height = rng.gen_range(PIPE_MARGIN..max_top);
        self.pipes.push(Pipe::new(FIELD_WIDTH, top_height, PIPE_GAP));
    }

    /// Gold ring of particles radiating from a scored pipe's gap midpoint:
    /// fixed count at equal angular spacing, randomized speed.
    pub fn spawn_score_burst<R: Rng>(&mut self, x: f64, y: f64, rng: &mut R) {
        for i in 0..SCORE_BURST_COUNT {
            let angle = i as f64 * TAU / SCORE_BURST_COUNT as f64;
            let speed = rng.gen_range(2.0..5.0);
            let vx = angle.cos() * speed;
            let vy = angle.sin() * speed;
            self.particles
                .push(Particle::new(x, y, vx, vy, (255, 215, 0), 4.0, 30.0, rng));
        }
    }

    /// Red-orange explosion centered on the bird when a run ends: fully
    /// randomized angles, speeds, and red channels.
    pub fn spawn_collision_burst<R: Rng>(&mut self, x: f64, y: f64, rng: &mut R) {
        for _ in 0..COLLISION_BURST_COUNT {
            let angle = rng.gen_range(0.0..TAU);
            let speed = rng.gen_range(1.0..5.0);
            let vx = angle.cos() * speed;
            let vy = angle.sin() * speed;
            let color = (rng.gen_range(200..=255), rng.gen_range(0..100), 0);
            self.particles
                .push(Particle::new(x, y, vx, vy, color, 6.0, 40.0, rng));
        }
    }
}

impl Default for FlappyGame {
    fn default() -> Self {
        Self::new()
    }
}
