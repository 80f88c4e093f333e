//! Frame building for the 2D canvas

use super::{colors, fonts};
use crate::consts::{CANVAS_SIZE, CELL_SIZE, GRID_SIZE};
use crate::settings::Difficulty;
use crate::sim::{GamePhase, GameState};

/// One draw primitive, in canvas pixels
#[derive(Debug, Clone, PartialEq)]
pub enum Shape {
    /// Fill the whole canvas
    Clear { color: &'static str },
    Line {
        from: (f64, f64),
        to: (f64, f64),
        color: &'static str,
    },
    Rect {
        x: f64,
        y: f64,
        size: f64,
        color: &'static str,
    },
    /// A centered letter, optionally glowing
    Glyph {
        letter: char,
        x: f64,
        y: f64,
        font: &'static str,
        color: &'static str,
        glow: Option<&'static str>,
    },
    /// Translucent wash over everything drawn so far
    Overlay { color: &'static str },
}

/// Color for a spawn: only easy tells target and decoys apart
pub fn spawn_color(difficulty: Difficulty, is_target: bool) -> &'static str {
    if is_target || !difficulty.highlights_target() {
        colors::TARGET
    } else {
        colors::DECOY
    }
}

/// Pixel center of a grid cell
fn cell_center(x: i32, y: i32) -> (f64, f64) {
    let cell = CELL_SIZE as f64;
    (x as f64 * cell + cell / 2.0, y as f64 * cell + cell / 2.0)
}

/// Build everything needed to draw one frame
pub fn build_frame(state: &GameState) -> Vec<Shape> {
    let cell = CELL_SIZE as f64;
    let size = CANVAS_SIZE as f64;
    let mut shapes = Vec::with_capacity(
        2 + 2 * (GRID_SIZE as usize + 1) + state.spawns.len() + 2 * state.snake.len(),
    );

    shapes.push(Shape::Clear {
        color: colors::BACKGROUND,
    });

    // Grid lines (subtle)
    for i in 0..=GRID_SIZE {
        let p = i as f64 * cell;
        shapes.push(Shape::Line {
            from: (p, 0.0),
            to: (p, size),
            color: colors::GRID_LINE,
        });
        shapes.push(Shape::Line {
            from: (0.0, p),
            to: (size, p),
            color: colors::GRID_LINE,
        });
    }

    for spawn in &state.spawns {
        let (x, y) = cell_center(spawn.cell.x, spawn.cell.y);
        let color = spawn_color(state.difficulty, spawn.is_target);
        shapes.push(Shape::Glyph {
            letter: spawn.letter,
            x,
            y,
            font: fonts::SPAWN,
            color,
            glow: Some(color),
        });
    }

    for (index, segment) in state.snake.iter().enumerate() {
        // 1px inset so segments read as separate tiles
        shapes.push(Shape::Rect {
            x: segment.cell.x as f64 * cell + 1.0,
            y: segment.cell.y as f64 * cell + 1.0,
            size: cell - 2.0,
            color: if index == 0 {
                colors::SNAKE_HEAD
            } else {
                colors::SNAKE_BODY
            },
        });
        let (x, y) = cell_center(segment.cell.x, segment.cell.y);
        shapes.push(Shape::Glyph {
            letter: segment.letter,
            x,
            y,
            font: fonts::SNAKE,
            color: colors::SNAKE_LETTER,
            glow: None,
        });
    }

    if state.phase == GamePhase::GameOver {
        shapes.push(Shape::Overlay {
            color: colors::GAME_OVER_FLASH,
        });
    }

    shapes
}
