//! The fixed 4-color palette

use std::fmt;
use std::str::FromStr;

use rand::Rng;
use serde::{Deserialize, Serialize};

/// One of the colors the player can be (and can click)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PaletteColor {
    Red,
    Green,
    Blue,
    Brown,
}

/// A string that doesn't name a palette color
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("not a palette color: {0:?}")]
pub struct ParseColorError(pub String);

impl PaletteColor {
    /// Palette in button order
    pub const ALL: [PaletteColor; 4] = [
        PaletteColor::Red,
        PaletteColor::Green,
        PaletteColor::Blue,
        PaletteColor::Brown,
    ];

    /// CSS hex code
    pub fn hex(&self) -> &'static str {
        match self {
            PaletteColor::Red => "#DD2E44",
            PaletteColor::Green => "#32CD32",
            PaletteColor::Blue => "#4169E1",
            PaletteColor::Brown => "#D2691E",
        }
    }

    /// Uniform pick over the whole palette
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self::ALL[rng.random_range(0..Self::ALL.len())]
    }
}

impl fmt::Display for PaletteColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.hex())
    }
}

impl FromStr for PaletteColor {
    type Err = ParseColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Self::ALL
            .into_iter()
            .find(|c| c.hex().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| ParseColorError(s.to_string()))
    }
}
