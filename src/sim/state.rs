//! Game state and core simulation types
//!
//! A `GameState` is one session. Starting a game builds a fresh one; nothing
//! carries over between sessions.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::collision::Rect;
use super::color::PaletteColor;
use crate::config::GameConfig;
use crate::error::GameError;
use crate::random_in;

/// Where the session is in its lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Accepting color clicks
    Ready,
    /// Just hopped to a new platform, clicks ignored until the next landing
    Jumping,
    /// Session ended; only a new session leaves this phase
    GameOver,
}

/// Why a session ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameOverCause {
    WrongColor {
        clicked: PaletteColor,
        expected: PaletteColor,
    },
    /// Player dropped below the bottom of the canvas
    Fell,
}

/// Things that happened during a tick or click, for the front-end
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    Scored { score: u32 },
    SpeedUp { speed: f32 },
    /// Player came to rest after a hop
    Landed { platform: usize },
    PlatformRecycled { index: usize },
    GameOver { cause: GameOverCause, score: u32 },
}

/// The player's square
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    /// Top-left corner
    pub pos: Vec2,
    pub size: Vec2,
    /// Vertical velocity (pixels per tick, positive is down)
    pub vy: f32,
    pub jump_strength: f32,
    pub is_jumping: bool,
}

impl Player {
    pub fn new(size: f32, jump_strength: f32) -> Self {
        Self {
            pos: Vec2::ZERO,
            size: Vec2::splat(size),
            vy: 0.0,
            jump_strength,
            is_jumping: false,
        }
    }

    pub fn rect(&self) -> Rect {
        Rect::new(self.pos, self.size)
    }

    pub fn center(&self) -> Vec2 {
        self.pos + self.size / 2.0
    }

    /// Place the player centered horizontally on top of a platform
    pub fn stand_on(&mut self, platform: &Platform) {
        self.pos.x = platform.pos.x + platform.size.x / 2.0 - self.size.x / 2.0;
        self.pos.y = platform.pos.y - self.size.y;
    }
}

/// A horizontal ledge scrolling down the screen
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Platform {
    /// Top-left corner
    pub pos: Vec2,
    pub size: Vec2,
}

impl Platform {
    /// New platform at height `y` with x drawn from
    /// `[margin, canvas_width - margin - platform_width]`
    pub fn random(rng: &mut Pcg32, config: &GameConfig, canvas_width: f32, y: f32) -> Self {
        let lo = config.platform_margin;
        let hi = canvas_width - config.platform_margin - config.platform_width;
        Self {
            pos: Vec2::new(random_in(rng, lo, hi), y),
            size: Vec2::new(config.platform_width, config.platform_height),
        }
    }

    pub fn rect(&self) -> Rect {
        Rect::new(self.pos, self.size)
    }
}

/// A short-lived spark from a successful match
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Particle {
    pub pos: Vec2,
    pub vel: Vec2,
    pub radius: f32,
    pub color: PaletteColor,
    /// Ticks remaining
    pub life: u32,
}

impl Particle {
    /// Opacity for a linear fade-out over `max_life` ticks
    pub fn alpha(&self, max_life: u32) -> f32 {
        (self.life as f32 / max_life.max(1) as f32).clamp(0.0, 1.0)
    }
}

/// Complete session state (deterministic for a given seed and input stream)
#[derive(Debug, Clone)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    pub(crate) rng: Pcg32,
    pub config: GameConfig,
    /// Canvas size in pixels
    pub width: f32,
    pub height: f32,
    pub player: Player,
    /// Fixed-size, order matters for landing and hop target ties
    pub platforms: Vec<Platform>,
    pub particles: Vec<Particle>,
    /// Color the player must click next
    pub current_color: PaletteColor,
    pub score: u32,
    /// Platform scroll speed (pixels per tick)
    pub speed: f32,
    /// Simulation tick counter
    pub time_ticks: u64,
    /// Set once the session ends
    pub game_over: Option<GameOverCause>,
    /// Events since the last drain
    pub events: Vec<GameEvent>,
}

impl GameState {
    /// Start a new session on a `width` x `height` canvas
    pub fn new(seed: u64, config: GameConfig, width: f32, height: f32) -> Result<Self, GameError> {
        config.validate()?;

        let min_width = config.min_canvas_width();
        if !(width >= min_width && height > 0.0) {
            return Err(GameError::CanvasTooSmall {
                width,
                height,
                min_width,
            });
        }

        let mut rng = Pcg32::seed_from_u64(seed);

        let platforms: Vec<Platform> = (0..config.platform_count)
            .map(|i| Platform::random(&mut rng, &config, width, i as f32 * config.platform_spacing))
            .collect();

        let mut player = Player::new(config.player_size, config.jump_strength);
        player.stand_on(&platforms[config.start_platform]);

        let current_color = PaletteColor::random(&mut rng);
        let speed = config.base_speed;

        log::info!(
            "New session: seed={} canvas={}x{} color={}",
            seed,
            width,
            height,
            current_color
        );

        Ok(Self {
            seed,
            rng,
            config,
            width,
            height,
            player,
            platforms,
            particles: Vec::new(),
            current_color,
            score: 0,
            speed,
            time_ticks: 0,
            game_over: None,
            events: Vec::new(),
        })
    }

    pub fn phase(&self) -> GamePhase {
        if self.game_over.is_some() {
            GamePhase::GameOver
        } else if self.player.is_jumping {
            GamePhase::Jumping
        } else {
            GamePhase::Ready
        }
    }

    pub fn is_over(&self) -> bool {
        self.game_over.is_some()
    }

    /// Score to show on the game-over screen
    pub fn final_score(&self) -> Option<u32> {
        self.game_over.map(|_| self.score)
    }

    /// End the session. Only the first cause sticks.
    pub fn end(&mut self, cause: GameOverCause) {
        if self.game_over.is_some() {
            return;
        }
        log::info!("Game over ({:?}), final score {}", cause, self.score);
        self.game_over = Some(cause);
        self.events.push(GameEvent::GameOver {
            cause,
            score: self.score,
        });
    }

    /// Track a new canvas size. Takes effect for later recycling and the fall check.
    pub fn resize(&mut self, width: f32, height: f32) {
        if width < self.config.min_canvas_width() {
            log::warn!(
                "Canvas width {} is below {}, platforms will pin to the margin",
                width,
                self.config.min_canvas_width()
            );
        }
        self.width = width;
        self.height = height;
    }

    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn new_state(seed: u64) -> GameState {
        GameState::new(seed, GameConfig::default(), 400.0, 600.0).unwrap()
    }

    #[test]
    fn test_new_session_layout() {
        let state = new_state(12345);
        assert_eq!(state.platforms.len(), 5);
        for (i, p) in state.platforms.iter().enumerate() {
            assert_eq!(p.pos.y, i as f32 * 120.0);
            assert!(p.pos.x >= 100.0 && p.pos.x <= 400.0 - 100.0 - 80.0);
            assert_eq!(p.size, Vec2::new(80.0, 10.0));
        }

        // Centered on top of platform 2
        let start = state.platforms[2];
        assert_eq!(state.player.pos.y, start.pos.y - 30.0);
        assert!((state.player.center().x - (start.pos.x + 40.0)).abs() < 1e-4);
        assert_eq!(state.player.vy, 0.0);
        assert!(!state.player.is_jumping);

        assert_eq!(state.score, 0);
        assert_eq!(state.speed, 2.0);
        assert_eq!(state.phase(), GamePhase::Ready);
        assert!(state.particles.is_empty());
        assert_eq!(state.final_score(), None);
    }

    #[test]
    fn test_same_seed_same_session() {
        let a = new_state(99999);
        let b = new_state(99999);
        assert_eq!(a.platforms, b.platforms);
        assert_eq!(a.current_color, b.current_color);
        assert_eq!(a.player.pos, b.player.pos);
    }

    #[test]
    fn test_canvas_too_small() {
        let err = GameState::new(1, GameConfig::default(), 279.0, 600.0).unwrap_err();
        assert!(matches!(err, GameError::CanvasTooSmall { min_width, .. } if min_width == 280.0));
        assert!(GameState::new(1, GameConfig::default(), 400.0, 0.0).is_err());
        // Exactly the minimum pins every platform to the margin
        let state = GameState::new(1, GameConfig::default(), 280.0, 600.0).unwrap();
        assert!(state.platforms.iter().all(|p| p.pos.x == 100.0));
    }

    #[test]
    fn test_end_keeps_first_cause() {
        let mut state = new_state(3);
        state.end(GameOverCause::Fell);
        state.end(GameOverCause::WrongColor {
            clicked: PaletteColor::Red,
            expected: PaletteColor::Blue,
        });
        assert_eq!(state.game_over, Some(GameOverCause::Fell));
        assert_eq!(state.phase(), GamePhase::GameOver);
        assert_eq!(state.final_score(), Some(0));
        assert_eq!(state.drain_events().len(), 1);
        assert!(state.events.is_empty());
    }

    #[test]
    fn test_particle_alpha() {
        let p = Particle {
            pos: Vec2::ZERO,
            vel: Vec2::ZERO,
            radius: 2.0,
            color: PaletteColor::Red,
            life: 15,
        };
        assert!((p.alpha(30) - 0.5).abs() < 1e-6);
    }
}
