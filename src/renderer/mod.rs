//! Rendering module
//!
//! `shapes` turns a `GameState` into a flat list of draw primitives; on
//! wasm32, `canvas` plays that list onto a 2D canvas context.

#[cfg(target_arch = "wasm32")]
pub mod canvas;
pub mod shapes;

#[cfg(target_arch = "wasm32")]
pub use canvas::CanvasRenderer;
pub use shapes::{Shape, build_frame, spawn_color};

/// Colors for game elements
pub mod colors {
    pub const BACKGROUND: &str = "#0a0a0a";
    pub const GRID_LINE: &str = "#1a1a1a";
    pub const TARGET: &str = "#00ff88";
    /// Decoys on easy; medium and hard reuse TARGET
    pub const DECOY: &str = "#5c7cfa";
    pub const SNAKE_HEAD: &str = "#e94560";
    pub const SNAKE_BODY: &str = "#c73e54";
    pub const SNAKE_LETTER: &str = "#ffffff";
    pub const GAME_OVER_FLASH: &str = "rgba(233, 69, 96, 0.5)";
}

/// Fonts for letters
pub mod fonts {
    pub const SPAWN: &str = "bold 16px Courier New";
    pub const SNAKE: &str = "bold 14px Courier New";
}
