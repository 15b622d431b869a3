//! 2D rendering module
//!
//! `shapes` builds a backend-agnostic draw list each frame; `canvas` replays
//! it onto an HTML canvas in the browser.

#[cfg(target_arch = "wasm32")]
pub mod canvas;
pub mod shapes;

pub use shapes::{DrawCmd, frame};
