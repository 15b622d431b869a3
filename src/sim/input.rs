//! Color button handling
//!
//! A click with the right color hops the player to the nearest platform
//! above. A wrong color ends the session on the spot.

use super::color::PaletteColor;
use super::particles::spawn_burst;
use super::state::{GameEvent, GameOverCause, GameState, Platform, Player};

/// What a click did to the session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickOutcome {
    /// Correct color: scored and hopped
    Scored,
    /// Correct color mid-hop: dropped without effect
    Ignored,
    /// Wrong color: session over
    WrongColor,
    /// Session already over
    Inactive,
}

/// Handle a click on one of the palette buttons
pub fn check_color(state: &mut GameState, clicked: PaletteColor) -> ClickOutcome {
    if state.is_over() {
        return ClickOutcome::Inactive;
    }

    if clicked != state.current_color {
        state.end(GameOverCause::WrongColor {
            clicked,
            expected: state.current_color,
        });
        return ClickOutcome::WrongColor;
    }

    if state.player.is_jumping {
        return ClickOutcome::Ignored;
    }

    // Burst comes out of where the player was, not where it lands
    let burst_center = state.player.center();

    if let Some(index) = nearest_platform_above(&state.player, &state.platforms) {
        let target = state.platforms[index];
        state.player.stand_on(&target);
        state.player.is_jumping = true;
    }

    state.score += 1;
    state.events.push(GameEvent::Scored { score: state.score });
    state.current_color = PaletteColor::random(&mut state.rng);

    if state.score % state.config.points_per_speed_step == 0 {
        state.speed += state.config.speed_step;
        log::info!("Speed up to {:.1} at score {}", state.speed, state.score);
        state.events.push(GameEvent::SpeedUp { speed: state.speed });
    }

    spawn_burst(
        &mut state.particles,
        &mut state.rng,
        &state.config,
        burst_center,
        clicked,
    );

    ClickOutcome::Scored
}

/// Index of the closest platform whose top is above the player's top edge
///
/// Distance is `|dx| + |dy|` between top-left corners. Ties keep the first
/// platform in list order.
pub fn nearest_platform_above(player: &Player, platforms: &[Platform]) -> Option<usize> {
    let mut best: Option<(usize, f32)> = None;

    for (index, platform) in platforms.iter().enumerate() {
        if platform.pos.y >= player.pos.y {
            continue;
        }
        let distance =
            (platform.pos.x - player.pos.x).abs() + (platform.pos.y - player.pos.y).abs();
        if best.is_none_or(|(_, d)| distance < d) {
            best = Some((index, distance));
        }
    }

    best.map(|(index, _)| index)
}
