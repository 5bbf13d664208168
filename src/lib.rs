//! Flappy - Terminal Flappy Bird Arcade Game Library
//!
//! This module exposes the simulation core for testing and external use.

// Allow dead code in library - some items are only used by the binary
#![allow(dead_code)]

pub mod build_info;
pub mod constants;
pub mod game;
pub mod sound;
pub mod theme;

// UI module is not exposed as it's tightly coupled to the terminal
mod ui;

pub use constants::TICK_INTERVAL_MS;
pub use game::{process_input, tick_game, FlappyGame, FlappyInput, GameEvent, Phase};
