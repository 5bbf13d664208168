//! Best-effort audio cues for game events.
//!
//! A bare terminal only offers the BEL character, so every event maps to a
//! bell ring. Writes are fire-and-forget: a failed or ignored bell must
//! never affect the simulation.

use crate::game::types::GameEvent;
use std::io::{self, Write};

pub struct SoundPlayer {
    enabled: bool,
}

impl SoundPlayer {
    pub fn new() -> Self {
        Self { enabled: true }
    }

    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// React to a simulation event. Failures are swallowed.
    pub fn handle_event(&self, event: GameEvent) {
        if !self.enabled {
            return;
        }
        match event {
            GameEvent::Jumped | GameEvent::Scored | GameEvent::GameOver => {
                let mut out = io::stdout();
                let _ = out.write_all(b"\x07");
                let _ = out.flush();
            }
        }
    }
}

impl Default for SoundPlayer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_enabled_by_default() {
        let player = SoundPlayer::new();
        assert!(player.is_enabled());
    }

    #[test]
    fn test_mute_toggle() {
        let mut player = SoundPlayer::new();
        player.set_enabled(false);
        assert!(!player.is_enabled());
        // Muted handling is a no-op and must not panic
        player.handle_event(GameEvent::Scored);
    }
}
