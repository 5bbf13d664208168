//! The Flappy Bird simulation core: entities, the fixed-tick state machine,
//! collision detection, and scoring.

pub mod logic;
pub mod types;

// These re-exports form the `game` module's public surface (consumed by
// `lib.rs`). When the same module is compiled into the binary via `main.rs`,
// which imports directly from `logic`/`types`, they register as unused and
// trip the crate-wide `unused_imports = "deny"` lint — allow them here.
#[allow(unused_imports)]
pub use logic::{process_input, tick_game, FlappyInput};
#[allow(unused_imports)]
pub use types::{Bird, FlappyGame, GameEvent, Particle, Phase, Pipe, ScreenShake};
