//! Demo autopilot
//!
//! Picks a direction each tick: the first step of a shortest path to the
//! target letter that avoids walls, the body and every decoy. With no path,
//! it falls back to whichever safe neighbor has the most open space around
//! it. Used by the native demo and long-run tests.

use std::collections::VecDeque;

use glam::IVec2;

use crate::consts::GRID_SIZE;
use crate::in_bounds;
use crate::sim::{Direction, GameState};

/// Cells the head must not enter next tick: the body minus the tail, and decoys
fn blocked(state: &GameState) -> Vec<bool> {
    let size = GRID_SIZE as usize;
    let mut grid = vec![false; size * size];
    let body = &state.snake[..state.snake.len() - 1];
    for segment in body {
        grid[index(segment.cell)] = true;
    }
    for spawn in state.spawns.iter().filter(|s| !s.is_target) {
        grid[index(spawn.cell)] = true;
    }
    grid
}

fn index(cell: IVec2) -> usize {
    (cell.y * GRID_SIZE + cell.x) as usize
}

/// Directions the head can take without dying this tick (reversal excluded)
fn safe_moves(state: &GameState, grid: &[bool]) -> Vec<Direction> {
    Direction::ALL
        .into_iter()
        .filter(|&d| d != state.direction.opposite())
        .filter(|d| {
            let next = state.head() + d.delta();
            in_bounds(next) && !grid[index(next)]
        })
        .collect()
}

/// Choose the next direction, or `None` if every move is fatal
pub fn choose_direction(state: &GameState) -> Option<Direction> {
    let grid = blocked(state);
    let moves = safe_moves(state, &grid);
    if moves.is_empty() {
        return None;
    }

    if let Some(target) = state.target() {
        if let Some(dir) = first_step_towards(state.head(), target.cell, &moves, &grid) {
            return Some(dir);
        }
    }

    // No route: keep as much room as possible
    moves
        .into_iter()
        .max_by_key(|d| reachable_area(state.head() + d.delta(), &grid))
}

/// Breadth-first search seeded with each allowed first move
fn first_step_towards(
    head: IVec2,
    goal: IVec2,
    moves: &[Direction],
    grid: &[bool],
) -> Option<Direction> {
    let mut seen = grid.to_vec();
    seen[index(head)] = true;
    let mut queue = VecDeque::new();
    for &dir in moves {
        let cell = head + dir.delta();
        if cell == goal {
            return Some(dir);
        }
        seen[index(cell)] = true;
        queue.push_back((cell, dir));
    }

    while let Some((cell, first)) = queue.pop_front() {
        for d in Direction::ALL {
            let next = cell + d.delta();
            if !in_bounds(next) || seen[index(next)] {
                continue;
            }
            if next == goal {
                return Some(first);
            }
            seen[index(next)] = true;
            queue.push_back((next, first));
        }
    }
    None
}

/// Open cells reachable from `start`
fn reachable_area(start: IVec2, grid: &[bool]) -> usize {
    let mut seen = grid.to_vec();
    let mut queue = VecDeque::from([start]);
    seen[index(start)] = true;
    let mut count = 0;
    while let Some(cell) = queue.pop_front() {
        count += 1;
        for d in Direction::ALL {
            let next = cell + d.delta();
            if in_bounds(next) && !seen[index(next)] {
                seen[index(next)] = true;
                queue.push_back(next);
            }
        }
    }
    count
}
