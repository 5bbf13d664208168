//! Terminal rendering. Reads simulation state; never mutates it.

pub mod game_common;
pub mod game_scene;

use crate::game::types::FlappyGame;
use ratatui::Frame;

/// Draw the full UI for one frame.
pub fn draw_ui(frame: &mut Frame, game: &FlappyGame) {
    game_scene::render_game(frame, frame.size(), game);
}
