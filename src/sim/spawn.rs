//! Letter spawn placement
//!
//! Each regeneration places one target and `DECOY_COUNT` decoys on empty
//! cells. Cells are drawn uniformly at random and re-drawn on collision, up
//! to `SPAWN_ATTEMPTS` draws per spawn.

use glam::IVec2;
use rand::{Rng, RngCore};

use super::state::{GameState, LetterSpawn};
use crate::consts::{DECOY_COUNT, GRID_SIZE, SPAWN_ATTEMPTS};

/// Source of uniform random indices
///
/// Every `rand` generator is one; tests can script exact draws.
pub trait RandomSource {
    /// Uniform index in `0..upper` (`upper` > 0)
    fn pick(&mut self, upper: usize) -> usize;
}

impl<R: RngCore + ?Sized> RandomSource for R {
    fn pick(&mut self, upper: usize) -> usize {
        self.random_range(0..upper)
    }
}

/// Replace the spawn set for the state's current cursor and difficulty
pub fn regenerate_spawns<R: RandomSource + ?Sized>(state: &mut GameState, rng: &mut R) {
    state.spawns.clear();

    let target = state.target_letter();
    match find_empty_cell(state, rng) {
        Some(cell) => state.spawns.push(LetterSpawn {
            cell,
            letter: target,
            is_target: true,
        }),
        None => log::debug!("No free cell for target {:?}", target),
    }

    let pool: Vec<char> = state
        .difficulty
        .decoy_pool()
        .into_iter()
        .filter(|c| !c.eq_ignore_ascii_case(&target))
        .collect();

    for _ in 0..DECOY_COUNT {
        let Some(cell) = find_empty_cell(state, rng) else {
            log::debug!("No free cell for decoy");
            continue;
        };
        let letter = pool[rng.pick(pool.len())];
        state.spawns.push(LetterSpawn {
            cell,
            letter,
            is_target: false,
        });
    }

    log::debug!(
        "Spawned target {:?} with {} decoys",
        target,
        state.spawns.iter().filter(|s| !s.is_target).count()
    );
}

/// Draw random cells until one is free of snake and spawns
fn find_empty_cell<R: RandomSource + ?Sized>(state: &GameState, rng: &mut R) -> Option<IVec2> {
    let size = GRID_SIZE as usize;
    for _ in 0..SPAWN_ATTEMPTS {
        let cell = IVec2::new(rng.pick(size) as i32, rng.pick(size) as i32);
        if !state.is_occupied(cell) {
            return Some(cell);
        }
    }
    None
}
