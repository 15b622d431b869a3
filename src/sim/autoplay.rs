//! Idle/demo mode - a bot that plays the game
//!
//! Waits a fixed number of ticks after each landing, then clicks the
//! current color if there is somewhere to hop to.

use super::color::PaletteColor;
use super::input::nearest_platform_above;
use super::state::{GamePhase, GameState};

/// Demo player with a human-ish reaction delay
#[derive(Debug, Clone)]
pub struct Autoplay {
    /// Ticks to wait in `Ready` before clicking
    pub reaction_ticks: u32,
    waited: u32,
}

impl Default for Autoplay {
    fn default() -> Self {
        Self::new(20)
    }
}

impl Autoplay {
    pub fn new(reaction_ticks: u32) -> Self {
        Self {
            reaction_ticks,
            waited: 0,
        }
    }

    /// Call once per tick. Returns the color to click, if any.
    pub fn next_click(&mut self, state: &GameState) -> Option<PaletteColor> {
        if state.phase() != GamePhase::Ready {
            self.waited = 0;
            return None;
        }

        if self.waited < self.reaction_ticks {
            self.waited += 1;
            return None;
        }

        nearest_platform_above(&state.player, &state.platforms)?;
        self.waited = 0;
        Some(state.current_color)
    }
}
