//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One tick = one cell of movement
//! - Randomness only through an injected `RandomSource`
//! - No rendering, timing or platform dependencies

pub mod collision;
pub mod pattern;
pub mod spawn;
pub mod state;
pub mod tick;

pub use collision::{hits_body, hits_wall};
pub use pattern::{BonusEvent, BonusKind, count_pascals, evaluate_bonus};
pub use spawn::{RandomSource, regenerate_spawns};
pub use state::{
    Direction, GameEvent, GameOverCause, GamePhase, GameState, LetterSpawn, Segment,
    target_letter_for,
};
pub use tick::tick;
