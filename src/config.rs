//! Game tuning
//!
//! Every gameplay number lives here so a run can be rebalanced from a JSON
//! file without a rebuild. Missing fields fall back to `consts`.

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::ConfigError;

/// Tunable game parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    // === Loop ===
    /// Simulation ticks per second
    pub tick_hz: f32,
    /// Cap on ticks run for one frame
    pub max_substeps: u32,

    // === Player ===
    pub player_size: f32,
    pub jump_strength: f32,
    /// Added to vertical velocity every tick
    pub gravity: f32,

    // === Platforms ===
    pub platform_count: usize,
    pub platform_width: f32,
    pub platform_height: f32,
    /// Vertical gap between platforms at session start
    pub platform_spacing: f32,
    pub platform_margin: f32,
    /// Index of the platform the player starts on
    pub start_platform: usize,

    // === Difficulty ===
    pub base_speed: f32,
    pub speed_step: f32,
    pub points_per_speed_step: u32,

    // === Particles ===
    pub burst_size: usize,
    pub particle_life: u32,
    pub particle_max_speed: f32,
    pub particle_min_radius: f32,
    pub particle_max_radius: f32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            tick_hz: TICK_HZ,
            max_substeps: MAX_SUBSTEPS,

            player_size: PLAYER_SIZE,
            jump_strength: JUMP_STRENGTH,
            gravity: GRAVITY,

            platform_count: PLATFORM_COUNT,
            platform_width: PLATFORM_WIDTH,
            platform_height: PLATFORM_HEIGHT,
            platform_spacing: PLATFORM_SPACING,
            platform_margin: PLATFORM_MARGIN,
            start_platform: START_PLATFORM,

            base_speed: BASE_SPEED,
            speed_step: SPEED_STEP,
            points_per_speed_step: POINTS_PER_SPEED_STEP,

            burst_size: BURST_SIZE,
            particle_life: PARTICLE_LIFE,
            particle_max_speed: PARTICLE_MAX_SPEED,
            particle_min_radius: PARTICLE_MIN_RADIUS,
            particle_max_radius: PARTICLE_MAX_RADIUS,
        }
    }
}

impl GameConfig {
    /// Parse and validate a config from JSON
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Load a config file (native only)
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load(path: impl AsRef<std::path::Path>) -> Result<Self, ConfigError> {
        let json = std::fs::read_to_string(path.as_ref())?;
        let config = Self::from_json(&json)?;
        log::info!("Loaded config from {}", path.as_ref().display());
        Ok(config)
    }

    /// Load a config file, falling back to defaults on any failure
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load_or_default(path: Option<&str>) -> Self {
        match path {
            Some(path) => Self::load(path).unwrap_or_else(|e| {
                log::warn!("{}, using default config", e);
                Self::default()
            }),
            None => Self::default(),
        }
    }

    /// Check the values a session depends on
    pub fn validate(&self) -> Result<(), ConfigError> {
        let invalid = |msg: &str| Err(ConfigError::Invalid(msg.to_string()));

        if !(self.tick_hz > 0.0) {
            return invalid("tick_hz must be > 0");
        }
        if self.max_substeps == 0 {
            return invalid("max_substeps must be >= 1");
        }
        if !(self.player_size > 0.0) {
            return invalid("player_size must be > 0");
        }
        if !(self.platform_width > 0.0 && self.platform_height > 0.0) {
            return invalid("platform size must be > 0");
        }
        if self.platform_margin < 0.0 {
            return invalid("platform_margin must be >= 0");
        }
        if self.start_platform >= self.platform_count {
            return invalid("start_platform must index an existing platform");
        }
        if self.points_per_speed_step == 0 {
            return invalid("points_per_speed_step must be >= 1");
        }
        if self.particle_life == 0 {
            return invalid("particle_life must be >= 1");
        }
        if self.particle_min_radius > self.particle_max_radius {
            return invalid("particle_min_radius must not exceed particle_max_radius");
        }
        Ok(())
    }

    /// Seconds per simulation tick
    pub fn sim_dt(&self) -> f32 {
        1.0 / self.tick_hz
    }

    /// Narrowest canvas that still leaves room for a platform between margins
    pub fn min_canvas_width(&self) -> f32 {
        2.0 * self.platform_margin + self.platform_width
    }
}
