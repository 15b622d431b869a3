//! Fixed timestep simulation tick
//!
//! Advances one session by exactly one tick. All rates are per tick, so
//! there is no `dt` parameter.

use super::collision::{lands_on, snap};
use super::particles::update_particles;
use super::state::{GameEvent, GameOverCause, GameState, Platform};

/// Advance the game state by one fixed timestep
pub fn tick(state: &mut GameState) {
    if state.is_over() {
        return;
    }

    state.time_ticks += 1;

    integrate_player(state);
    scroll_platforms(state);
    resolve_landing(state);
    update_particles(&mut state.particles);

    if state.player.pos.y > state.height {
        state.end(GameOverCause::Fell);
    }
}

/// Explicit Euler: position first, then velocity
fn integrate_player(state: &mut GameState) {
    let player = &mut state.player;
    player.pos.y += player.vy;
    player.vy += state.config.gravity;
}

/// Move platforms down by the scroll speed, replacing any that left the
/// bottom of the canvas with a fresh one at the top
pub fn scroll_platforms(state: &mut GameState) {
    let old = std::mem::take(&mut state.platforms);
    let mut scrolled = Vec::with_capacity(old.len());

    for (index, mut platform) in old.into_iter().enumerate() {
        platform.pos.y += state.speed;
        if platform.pos.y > state.height {
            platform = Platform::random(&mut state.rng, &state.config, state.width, 0.0);
            log::debug!("Recycled platform {} to x={:.1}", index, platform.pos.x);
            state.events.push(GameEvent::PlatformRecycled { index });
        }
        scrolled.push(platform);
    }

    state.platforms = scrolled;
}

/// Snap the player onto any platform it is falling into
///
/// Platforms are checked in order against the already-snapped player, so if
/// two overlap the last match wins.
pub fn resolve_landing(state: &mut GameState) {
    let was_jumping = state.player.is_jumping;
    let mut landed_on = None;

    for (index, platform) in state.platforms.iter().enumerate() {
        if lands_on(&state.player, platform) {
            snap(&mut state.player, platform);
            landed_on = Some(index);
        }
    }

    if let Some(platform) = landed_on {
        if was_jumping {
            state.events.push(GameEvent::Landed { platform });
        }
    }
}
