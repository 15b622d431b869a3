//! Axis-aligned collision checks
//!
//! The only collision in the game is the player landing on a platform from
//! above. No side or ceiling hits exist.

use glam::Vec2;

use super::state::{Platform, Player};

/// Axis-aligned rectangle (screen coordinates, y grows downward)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub min: Vec2,
    pub size: Vec2,
}

impl Rect {
    pub fn new(min: Vec2, size: Vec2) -> Self {
        Self { min, size }
    }

    pub fn left(&self) -> f32 {
        self.min.x
    }

    pub fn right(&self) -> f32 {
        self.min.x + self.size.x
    }

    pub fn top(&self) -> f32 {
        self.min.y
    }

    pub fn bottom(&self) -> f32 {
        self.min.y + self.size.y
    }

    /// Open-interval overlap on the x axis (touching edges don't count)
    pub fn overlaps_x(&self, other: &Rect) -> bool {
        self.left() < other.right() && self.right() > other.left()
    }
}

/// Whether the player should come to rest on this platform
///
/// The player's bottom edge must sit in `[top, top + height)`, the horizontal
/// extents must overlap, and the player must not be moving up.
pub fn lands_on(player: &Player, platform: &Platform) -> bool {
    let body = player.rect();
    let ledge = platform.rect();
    let feet = body.bottom();

    feet >= ledge.top() && feet < ledge.bottom() && body.overlaps_x(&ledge) && player.vy >= 0.0
}

/// Clamp the player on top of the platform and stop vertical motion
pub fn snap(player: &mut Player, platform: &Platform) {
    player.pos.y = platform.pos.y - player.size.y;
    player.vy = 0.0;
    player.is_jumping = false;
}
