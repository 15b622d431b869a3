//! Fixed timestep game loop
//!
//! The front-end calls `advance` once per display frame with the elapsed
//! wall time; the loop runs however many 60 Hz ticks fit. Each `start`
//! bumps a generation counter so frame callbacks scheduled for an older
//! session can tell they are stale and stop rescheduling themselves.

use crate::sim::{ClickOutcome, GameState, PaletteColor, check_color, tick};

/// Longest frame we will catch up on (seconds)
const MAX_FRAME_DT: f32 = 0.1;

/// Drives one session at a fixed tick rate
#[derive(Debug, Default)]
pub struct GameLoop {
    state: Option<GameState>,
    accumulator: f32,
    generation: u64,
    running: bool,
}

impl GameLoop {
    pub fn new() -> Self {
        Self::default()
    }

    /// Install a new session, cancelling whatever was running.
    /// Returns the generation token for the new session.
    pub fn start(&mut self, state: GameState) -> u64 {
        if self.running {
            log::debug!("Cancelling session generation {}", self.generation);
        }
        self.generation += 1;
        self.accumulator = 0.0;
        self.running = true;
        self.state = Some(state);
        self.generation
    }

    /// Stop ticking. The last session stays readable for the game-over screen.
    pub fn stop(&mut self) {
        self.running = false;
        self.accumulator = 0.0;
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Whether a callback holding `generation` should keep going
    pub fn is_current(&self, generation: u64) -> bool {
        self.running && generation == self.generation
    }

    pub fn state(&self) -> Option<&GameState> {
        self.state.as_ref()
    }

    pub fn state_mut(&mut self) -> Option<&mut GameState> {
        self.state.as_mut()
    }

    /// Run the ticks owed for `frame_dt` seconds of wall time.
    /// Returns how many ticks ran.
    pub fn advance(&mut self, frame_dt: f32) -> u32 {
        if !self.running || !frame_dt.is_finite() {
            return 0;
        }
        let Some(state) = self.state.as_mut() else {
            return 0;
        };

        let sim_dt = state.config.sim_dt();
        let max_substeps = state.config.max_substeps;
        self.accumulator += frame_dt.clamp(0.0, MAX_FRAME_DT);

        let mut substeps = 0;
        let mut over = false;
        while self.accumulator >= sim_dt && substeps < max_substeps {
            tick(state);
            self.accumulator -= sim_dt;
            substeps += 1;

            if state.is_over() {
                over = true;
                break;
            }
        }

        if over {
            self.stop();
        }
        substeps
    }

    /// Forward a color click to the running session
    pub fn click(&mut self, color: PaletteColor) -> ClickOutcome {
        if !self.running {
            return ClickOutcome::Inactive;
        }
        let Some(state) = self.state.as_mut() else {
            return ClickOutcome::Inactive;
        };

        let outcome = check_color(state, color);
        let over = state.is_over();
        if over {
            self.stop();
        }
        outcome
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GameConfig;
    use crate::consts::SIM_DT;
    use crate::sim::GamePhase;
    use proptest::prelude::*;

    fn new_state(seed: u64) -> GameState {
        GameState::new(seed, GameConfig::default(), 400.0, 600.0).unwrap()
    }

    #[test]
    fn test_idle_loop_does_nothing() {
        let mut game = GameLoop::new();
        assert_eq!(game.advance(1.0), 0);
        assert!(game.state().is_none());
        assert_eq!(game.click(PaletteColor::Red), ClickOutcome::Inactive);
    }

    #[test]
    fn test_advance_runs_whole_ticks() {
        let mut game = GameLoop::new();
        game.start(new_state(1));

        assert_eq!(game.advance(SIM_DT * 0.5), 0);
        assert_eq!(game.advance(SIM_DT * 0.75), 1);
        assert_eq!(game.advance(SIM_DT * 3.5), 3);
        assert_eq!(game.state().unwrap().time_ticks, 4);
    }

    #[test]
    fn test_long_frame_is_clamped() {
        let mut game = GameLoop::new();
        game.start(new_state(2));
        // A 5 second stall only pays back about 0.1 s
        let ticks = game.advance(5.0);
        assert!((5..=6).contains(&ticks));
    }

    #[test]
    fn test_bad_frame_time_ignored() {
        let mut game = GameLoop::new();
        game.start(new_state(2));
        assert_eq!(game.advance(f32::NAN), 0);
        assert_eq!(game.advance(f32::INFINITY), 0);
        // Accumulator is still usable afterwards
        assert_eq!(game.advance(SIM_DT * 1.5), 1);
    }

    #[test]
    fn test_restart_cancels_previous() {
        let mut game = GameLoop::new();
        let first = game.start(new_state(3));
        game.advance(SIM_DT * 10.5);
        let second = game.start(new_state(4));

        assert_ne!(first, second);
        assert!(!game.is_current(first));
        assert!(game.is_current(second));
        assert_eq!(game.state().unwrap().time_ticks, 0);
        // Leftover time from the old session doesn't leak into the new one
        assert_eq!(game.advance(SIM_DT * 0.5), 0);
    }

    #[test]
    fn test_wrong_click_stops_loop() {
        let mut game = GameLoop::new();
        let generation = game.start(new_state(5));
        let current = game.state().unwrap().current_color;
        let wrong = PaletteColor::ALL.into_iter().find(|&c| c != current).unwrap();

        assert_eq!(game.click(wrong), ClickOutcome::WrongColor);
        assert!(!game.is_running());
        assert!(!game.is_current(generation));
        assert_eq!(game.advance(1.0), 0);

        let state = game.state().unwrap();
        assert_eq!(state.phase(), GamePhase::GameOver);
        assert_eq!(state.final_score(), Some(0));
    }

    #[test]
    fn test_fall_stops_loop() {
        let mut game = GameLoop::new();
        game.start(new_state(6));
        for p in &mut game.state_mut().unwrap().platforms {
            p.pos.x = -1000.0;
        }
        for _ in 0..200 {
            game.advance(SIM_DT * 1.5);
        }
        assert!(!game.is_running());
        assert!(game.state().unwrap().is_over());
    }

    proptest! {
        #[test]
        fn prop_start_twice_fully_resets(seed in any::<u64>(), clicks in 0usize..8, ticks in 0usize..300) {
            let mut game = GameLoop::new();
            game.start(new_state(seed));
            for _ in 0..clicks {
                let color = game.state().unwrap().current_color;
                game.click(color);
                game.advance(SIM_DT * 1.5);
            }
            for _ in 0..ticks {
                game.advance(SIM_DT * 1.5);
            }

            game.start(new_state(seed.wrapping_add(1)));
            game.start(new_state(seed.wrapping_add(2)));

            let state = game.state().unwrap();
            prop_assert_eq!(state.score, 0);
            prop_assert_eq!(state.speed, 2.0);
            prop_assert_eq!(state.platforms.len(), 5);
            prop_assert!(state.particles.is_empty());
            prop_assert!(!state.is_over());
            prop_assert!(game.is_running());
        }
    }
}
