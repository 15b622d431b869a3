//! Color Hop - A single-screen color matching arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (physics, landing, scoring, particles)
//! - `game_loop`: Fixed timestep driver with start/stop/cancel lifecycle
//! - `renderer`: Per-frame draw list and the canvas backend that replays it
//! - `config`: Data-driven game tuning

pub mod config;
pub mod error;
pub mod game_loop;
pub mod renderer;
pub mod sim;

pub use config::GameConfig;
pub use error::{ConfigError, GameError};
pub use game_loop::GameLoop;

/// Game configuration constants
pub mod consts {
    /// Simulation rate (ticks per second)
    pub const TICK_HZ: f32 = 60.0;
    /// Fixed simulation timestep (~16.67 ms)
    pub const SIM_DT: f32 = 1.0 / TICK_HZ;
    /// Maximum substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;

    /// Default canvas size (native runs have no DOM to measure)
    pub const DEFAULT_CANVAS_WIDTH: f32 = 400.0;
    pub const DEFAULT_CANVAS_HEIGHT: f32 = 600.0;

    /// Player defaults
    pub const PLAYER_SIZE: f32 = 30.0;
    pub const JUMP_STRENGTH: f32 = -10.0;
    /// Downward acceleration per tick
    pub const GRAVITY: f32 = 0.4;

    /// Platform defaults
    pub const PLATFORM_COUNT: usize = 5;
    pub const PLATFORM_WIDTH: f32 = 80.0;
    pub const PLATFORM_HEIGHT: f32 = 10.0;
    pub const PLATFORM_SPACING: f32 = 120.0;
    /// Horizontal keep-out on both sides of the canvas
    pub const PLATFORM_MARGIN: f32 = 100.0;
    /// Platform the player starts on
    pub const START_PLATFORM: usize = 2;

    /// Scroll speed (pixels per tick)
    pub const BASE_SPEED: f32 = 2.0;
    pub const SPEED_STEP: f32 = 0.1;
    pub const POINTS_PER_SPEED_STEP: u32 = 5;

    /// Particle bursts
    pub const BURST_SIZE: usize = 20;
    pub const PARTICLE_LIFE: u32 = 30;
    pub const PARTICLE_MAX_SPEED: f32 = 2.0;
    pub const PARTICLE_MIN_RADIUS: f32 = 1.0;
    pub const PARTICLE_MAX_RADIUS: f32 = 4.0;

    /// HUD layout
    pub const INDICATOR_X: f32 = 30.0;
    pub const INDICATOR_Y: f32 = 30.0;
    pub const INDICATOR_RADIUS: f32 = 20.0;
    pub const SCORE_X: f32 = 10.0;
    pub const SCORE_Y: f32 = 70.0;
    pub const SCORE_FONT: &str = "bold 20px Arial";
}

/// Uniform sample in `[lo, hi)`, collapsing to `lo` when the range is empty
#[inline]
pub fn random_in<R: rand::Rng + ?Sized>(rng: &mut R, lo: f32, hi: f32) -> f32 {
    if hi > lo {
        rng.random_range(lo..hi)
    } else {
        lo
    }
}
