//! Collision checks for the snake's next head cell

use glam::IVec2;

use super::state::Segment;
use crate::in_bounds;

/// True if the cell is off the grid
#[inline]
pub fn hits_wall(cell: IVec2) -> bool {
    !in_bounds(cell)
}

/// True if the cell overlaps the body
///
/// The tail is never counted: it normally vacates its cell on the same
/// tick. When the tick also collects a letter the tail stays put, and a
/// head moving onto it is still let through.
pub fn hits_body(snake: &[Segment], cell: IVec2) -> bool {
    let body = &snake[..snake.len().saturating_sub(1)];
    body.iter().any(|s| s.cell == cell)
}
