//! Pattern matching and bonus tiers
//!
//! The snake's letters, read head first, are matched against the pattern:
//! one leading "pascal" followed by any number of "_pascal". Matching is
//! case-insensitive so the restarting 'P' after a separator still counts.

use serde::{Deserialize, Serialize};

use super::state::GameState;
use crate::consts::{LARGE_BONUS_POINTS, PATTERN, SMALL_BONUS_POINTS};

/// Bonus tier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BonusKind {
    /// First completed word
    Small,
    /// Every word after the first
    Large,
}

/// A bonus awarded on a tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BonusEvent {
    pub kind: BonusKind,
    pub points: u64,
    /// Repeat count after this bonus
    pub repeat_count: u32,
}

impl BonusEvent {
    /// Overlay caption
    pub fn text(&self) -> &'static str {
        match self.kind {
            BonusKind::Small => "Pascal!",
            BonusKind::Large => "Snaaaaaaaake!",
        }
    }

    /// Whether the overlay shows the mascot image
    pub fn shows_image(&self) -> bool {
        self.kind == BonusKind::Small
    }
}

/// Word without its separator ("pascal")
fn word() -> &'static [u8] {
    &PATTERN.as_bytes()[..PATTERN.len() - 1]
}

fn separator() -> u8 {
    PATTERN.as_bytes()[PATTERN.len() - 1]
}

/// Count complete pattern repetitions at the start of `letters`
pub fn count_pascals(letters: &str) -> u32 {
    let bytes = letters.as_bytes();
    let word = word();

    if bytes.len() < word.len() || !bytes[..word.len()].eq_ignore_ascii_case(word) {
        return 0;
    }

    let mut count = 1;
    let mut pos = word.len();
    let step = word.len() + 1;

    while pos + step <= bytes.len() {
        let chunk = &bytes[pos..pos + step];
        if chunk[0].eq_ignore_ascii_case(&separator()) && chunk[1..].eq_ignore_ascii_case(word) {
            count += 1;
            pos += step;
        } else {
            break;
        }
    }

    count
}

/// Credit a bonus if the snake now spells more words than already credited
pub fn evaluate_bonus(state: &mut GameState) -> Option<BonusEvent> {
    let count = count_pascals(&state.letters());
    if count <= state.repeat_count {
        return None;
    }

    let (kind, points) = if count == 1 {
        (BonusKind::Small, SMALL_BONUS_POINTS)
    } else {
        (BonusKind::Large, LARGE_BONUS_POINTS)
    };

    state.score += points;
    state.repeat_count = count;
    log::debug!("Bonus {:?}: +{} (repeat count {})", kind, points, count);

    Some(BonusEvent {
        kind,
        points,
        repeat_count: count,
    })
}
