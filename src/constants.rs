// Game timing constants
pub const TICK_INTERVAL_MS: u64 = 16; // ~60 FPS physics tick

// Virtual play field. The simulation runs in these coordinates; the
// renderer scales them to whatever cell grid the terminal provides.
pub const FIELD_WIDTH: f64 = 800.0;
pub const FIELD_HEIGHT: f64 = 600.0;

// Bird physics (per 16ms tick)
pub const GRAVITY: f64 = 0.8;
pub const JUMP_FORCE: f64 = -12.0;
pub const MAX_VELOCITY: f64 = 15.0;
pub const BIRD_WIDTH: f64 = 30.0;
pub const BIRD_HEIGHT: f64 = 25.0;
pub const BIRD_START_X: f64 = 100.0;
pub const BIRD_START_Y: f64 = 200.0;

// Bird animation (cosmetic, consumed only by the renderer)
pub const WING_PHASE_STEP: f64 = 0.3;
pub const FLAP_ANIM_TICKS: u32 = 10;
pub const MAX_ROTATION_DEG: f64 = 30.0;

// Pipes
pub const PIPE_SPEED: f64 = 3.0;
pub const PIPE_WIDTH: f64 = 60.0;
pub const PIPE_GAP: f64 = 150.0;
pub const PIPE_SPAWN_INTERVAL: u32 = 150; // ticks between spawns
/// Minimum height reserved for each pipe section when randomizing the gap
/// position. Keeps both sections visible on screen.
pub const PIPE_MARGIN: f64 = 100.0;

// Particles
pub const PARTICLE_GRAVITY: f64 = 0.2;
pub const SCORE_BURST_COUNT: usize = 8;
pub const COLLISION_BURST_COUNT: usize = 15;

// Cosmetic accumulators
pub const FADE_IN_STEP: f64 = 0.05;
pub const BACKGROUND_SCROLL_STEP: f64 = 0.5;

// Screen shake pulses (duration in ticks, amplitude in field units)
pub const SCORE_SHAKE_TICKS: u32 = 6;
pub const SCORE_SHAKE_AMPLITUDE: f64 = 10.0;
pub const GAME_OVER_SHAKE_TICKS: u32 = 10;
pub const GAME_OVER_SHAKE_AMPLITUDE: f64 = 20.0;
