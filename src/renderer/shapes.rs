//! Draw list generation
//!
//! Turns a `GameState` into an ordered list of 2D primitives. Order is paint
//! order: background, platforms, player, color indicator, score, particles.

use glam::Vec2;

use crate::consts::*;
use crate::sim::GameState;

/// Colors for game elements
pub mod colors {
    pub const BACKGROUND: &str = "#333";
    pub const PLATFORM: &str = "#666";
    pub const SCORE_TEXT: &str = "white";
}

/// One 2D drawing primitive
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCmd {
    /// Wipe the whole canvas
    Clear { size: Vec2 },
    FillRect {
        min: Vec2,
        size: Vec2,
        color: &'static str,
    },
    FillCircle {
        center: Vec2,
        radius: f32,
        color: &'static str,
        alpha: f32,
    },
    Text {
        text: String,
        pos: Vec2,
        font: &'static str,
        color: &'static str,
    },
}

/// Build the draw list for the current frame
pub fn frame(state: &GameState) -> Vec<DrawCmd> {
    let canvas = Vec2::new(state.width, state.height);
    let mut cmds = Vec::with_capacity(5 + state.platforms.len() + state.particles.len());

    cmds.push(DrawCmd::Clear { size: canvas });
    cmds.push(DrawCmd::FillRect {
        min: Vec2::ZERO,
        size: canvas,
        color: colors::BACKGROUND,
    });

    cmds.extend(state.platforms.iter().map(|p| DrawCmd::FillRect {
        min: p.pos,
        size: p.size,
        color: colors::PLATFORM,
    }));

    let color = state.current_color.hex();
    cmds.push(DrawCmd::FillRect {
        min: state.player.pos,
        size: state.player.size,
        color,
    });
    cmds.push(DrawCmd::FillCircle {
        center: Vec2::new(INDICATOR_X, INDICATOR_Y),
        radius: INDICATOR_RADIUS,
        color,
        alpha: 1.0,
    });

    cmds.push(DrawCmd::Text {
        text: format!("Score: {}", state.score),
        pos: Vec2::new(SCORE_X, SCORE_Y),
        font: SCORE_FONT,
        color: colors::SCORE_TEXT,
    });

    let max_life = state.config.particle_life;
    cmds.extend(state.particles.iter().map(|p| DrawCmd::FillCircle {
        center: p.pos,
        radius: p.radius,
        color: p.color.hex(),
        alpha: p.alpha(max_life),
    }));

    cmds
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GameConfig;
    use crate::sim::{check_color, tick};

    #[test]
    fn test_paint_order() {
        let mut state = GameState::new(31, GameConfig::default(), 400.0, 600.0).unwrap();
        let color = state.current_color;
        check_color(&mut state, color);
        tick(&mut state);

        let cmds = frame(&state);
        assert_eq!(cmds.len(), 2 + 5 + 1 + 1 + 1 + 20);
        assert!(matches!(cmds[0], DrawCmd::Clear { .. }));
        assert!(matches!(cmds[1], DrawCmd::FillRect { color: colors::BACKGROUND, .. }));
        for cmd in &cmds[2..7] {
            assert!(matches!(cmd, DrawCmd::FillRect { color: colors::PLATFORM, .. }));
        }
        assert_eq!(
            cmds[7],
            DrawCmd::FillRect {
                min: state.player.pos,
                size: Vec2::splat(30.0),
                color: state.current_color.hex(),
            }
        );
        assert!(matches!(cmds[8], DrawCmd::FillCircle { radius, alpha, .. } if radius == 20.0 && alpha == 1.0));
        assert!(matches!(&cmds[9], DrawCmd::Text { text, .. } if text == "Score: 1"));
        for cmd in &cmds[10..] {
            match cmd {
                DrawCmd::FillCircle { color: c, alpha, .. } => {
                    assert_eq!(*c, color.hex());
                    assert!((alpha - 29.0 / 30.0).abs() < 1e-6);
                }
                other => panic!("expected particle, got {:?}", other),
            }
        }
    }

    #[test]
    fn test_no_particles_no_circles_after_score() {
        let state = GameState::new(32, GameConfig::default(), 400.0, 600.0).unwrap();
        let cmds = frame(&state);
        assert_eq!(cmds.len(), 10);
        assert!(matches!(cmds.last(), Some(DrawCmd::Text { .. })));
    }
}
