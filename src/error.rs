//! Error types
//!
//! Losing a round is not an error; it is `GamePhase::GameOver`. These cover
//! the cases where a session or config cannot be built at all.

/// Errors from starting a session
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum GameError {
    #[error("canvas {width}x{height} is too small (need width >= {min_width} and a positive height)")]
    CanvasTooSmall {
        width: f32,
        height: f32,
        min_width: f32,
    },
    #[error("invalid config: {0}")]
    Config(String),
}

/// Errors from loading or validating a `GameConfig`
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid config: {0}")]
    Invalid(String),
}

impl From<ConfigError> for GameError {
    fn from(err: ConfigError) -> Self {
        GameError::Config(err.to_string())
    }
}
