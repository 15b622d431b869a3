//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - Seeded RNG only
//! - Stable iteration order (platforms keep their slots)
//! - No rendering or platform dependencies

pub mod autoplay;
pub mod collision;
pub mod color;
pub mod input;
pub mod particles;
pub mod state;
pub mod tick;

pub use autoplay::Autoplay;
pub use collision::{Rect, lands_on, snap};
pub use color::{PaletteColor, ParseColorError};
pub use input::{ClickOutcome, check_color, nearest_platform_above};
pub use particles::{spawn_burst, update_particles};
pub use state::{GameEvent, GameOverCause, GamePhase, GameState, Particle, Platform, Player};
pub use tick::{resolve_landing, scroll_platforms, tick};
