//! Fixed timestep simulation tick
//!
//! One call moves the snake one cell.

use glam::IVec2;

use super::collision::{hits_body, hits_wall};
use super::pattern::evaluate_bonus;
use super::spawn::{RandomSource, regenerate_spawns};
use super::state::{GameEvent, GameOverCause, GamePhase, GameState, Segment, pattern_len};
use crate::consts::LETTER_POINTS;

/// Advance the game by one step
///
/// Does nothing unless the game is running. A wall or self collision ends
/// the game and leaves the board exactly as it was before the step.
pub fn tick<R: RandomSource + ?Sized>(state: &mut GameState, rng: &mut R) {
    if state.phase != GamePhase::Running {
        return;
    }

    state.time_ticks += 1;

    // Commit the queued direction
    state.direction = state.pending_direction;
    let new_head = state.head() + state.direction.delta();

    if hits_wall(new_head) {
        game_over(state, GameOverCause::Wall);
        return;
    }

    if hits_body(&state.snake, new_head) {
        game_over(state, GameOverCause::SelfCollision);
        return;
    }

    let collected = state.spawn_at(new_head).map(|i| state.spawns[i]);

    advance_body(&mut state.snake, new_head, collected.map(|s| s.letter));

    let Some(spawn) = collected else {
        return;
    };

    state.score += LETTER_POINTS;
    state.events.push(GameEvent::LetterCollected {
        letter: spawn.letter,
        target: spawn.is_target,
    });

    if spawn.is_target {
        state.cursor = (state.cursor + 1) % pattern_len();
        if let Some(bonus) = evaluate_bonus(state) {
            state.events.push(GameEvent::Bonus(bonus));
        }
    } else {
        state.cursor = 0;
    }

    log::debug!(
        "Collected {:?} ({}), score {}, snake {:?}",
        spawn.letter,
        if spawn.is_target { "target" } else { "decoy" },
        state.score,
        state.letters()
    );

    regenerate_spawns(state, rng);
}

/// Shift every segment into the cell ahead of it and put the head on
/// `new_head`. Letters stay with their segments. With `grow`, a new tail
/// carrying that letter is left on the old tail cell.
fn advance_body(snake: &mut Vec<Segment>, new_head: IVec2, grow: Option<char>) {
    let old_tail = snake[snake.len() - 1].cell;

    for i in (1..snake.len()).rev() {
        snake[i].cell = snake[i - 1].cell;
    }
    snake[0].cell = new_head;

    if let Some(letter) = grow {
        snake.push(Segment {
            cell: old_tail,
            letter,
        });
    }
}

fn game_over(state: &mut GameState, cause: GameOverCause) {
    log::info!(
        "Game over ({:?}) after {} ticks, score {}",
        cause,
        state.time_ticks,
        state.score
    );
    state.phase = GamePhase::GameOver;
    state.events.push(GameEvent::GameOver(cause));
}
