//! Pascal Snake - A letter-collecting Snake variant
//!
//! Core modules:
//! - `sim`: Deterministic simulation (movement, collisions, spawns, bonuses)
//! - `session`: Game lifecycle, score bookkeeping and tick scheduling
//! - `renderer`: Frame building and Canvas 2D drawing
//! - `platform`: Tick timer and input mapping
//! - `persistence`: Scalar slots in LocalStorage (or memory)
//! - `hud`: Score display and bonus overlay timing

pub mod autopilot;
pub mod hud;
pub mod persistence;
pub mod platform;
pub mod renderer;
pub mod scores;
pub mod session;
pub mod settings;
pub mod sim;

pub use scores::ScoreBoard;
pub use session::Session;
pub use settings::{Difficulty, Settings};

use glam::IVec2;

/// Game configuration constants
pub mod consts {
    /// Grid is GRID_SIZE x GRID_SIZE cells
    pub const GRID_SIZE: i32 = 20;
    /// Pixel size of one cell on the canvas
    pub const CELL_SIZE: u32 = 20;
    /// Canvas edge length in pixels
    pub const CANVAS_SIZE: u32 = GRID_SIZE as u32 * CELL_SIZE;

    /// Milliseconds between simulation ticks
    pub const TICK_INTERVAL_MS: u32 = 150;
    /// Longest frame gap fed to the tick timer (tab switches, debugger pauses)
    pub const MAX_FRAME_GAP_MS: u32 = 1000;

    /// The repeating word the snake spells
    pub const PATTERN: &str = "pascal_";
    /// Letter the head starts with and the one a reset cursor asks for
    pub const HEAD_LETTER: char = 'P';
    /// Cursor position after the head letter
    pub const START_CURSOR: usize = 1;

    /// Points for any collected letter (target or decoy)
    pub const LETTER_POINTS: u64 = 100;
    /// First completed "Pascal"
    pub const SMALL_BONUS_POINTS: u64 = 500;
    /// Each further "_pascal"
    pub const LARGE_BONUS_POINTS: u64 = 1000;
    /// How long the bonus overlay stays up
    pub const BONUS_DISPLAY_MS: f64 = 1500.0;

    /// Decoy spawns alongside each target
    pub const DECOY_COUNT: usize = 4;
    /// Random draws per spawn before giving up on it
    pub const SPAWN_ATTEMPTS: u32 = 100;
}

/// Cell at the center of the grid
#[inline]
pub fn grid_center() -> IVec2 {
    IVec2::splat(consts::GRID_SIZE / 2)
}

/// True if the cell lies on the grid
#[inline]
pub fn in_bounds(cell: IVec2) -> bool {
    (0..consts::GRID_SIZE).contains(&cell.x) && (0..consts::GRID_SIZE).contains(&cell.y)
}
