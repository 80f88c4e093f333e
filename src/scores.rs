//! Best/last score bookkeeping
//!
//! Persisted to two scalar slots; the current score lives in `GameState`.

use serde::{Deserialize, Serialize};

use crate::persistence::{self, Storage, keys};

/// Scores that outlive a single game
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreBoard {
    /// Highest score ever finished with
    pub best: u64,
    /// Score of the most recent game that scored anything
    pub last: u64,
}

impl ScoreBoard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a finished game's score
    ///
    /// A zero score leaves the board untouched. Returns true if the score
    /// set a new best.
    pub fn record(&mut self, score: u64) -> bool {
        if score == 0 {
            return false;
        }
        self.last = score;
        if score > self.best {
            self.best = score;
            return true;
        }
        false
    }

    /// Check if a score would beat the current best
    pub fn is_new_best(&self, score: u64) -> bool {
        score > self.best
    }

    /// Load scores, treating missing or bad slots as zero
    pub fn load(storage: &dyn Storage) -> Self {
        let scores = Self {
            best: persistence::read_u64(storage, keys::BEST_SCORE).unwrap_or(0),
            last: persistence::read_u64(storage, keys::LAST_SCORE).unwrap_or(0),
        };
        log::info!("Loaded scores (best: {}, last: {})", scores.best, scores.last);
        scores
    }

    pub fn save(&self, storage: &mut dyn Storage) {
        let last_ok = persistence::write_slot(storage, keys::LAST_SCORE, &self.last.to_string());
        let best_ok = persistence::write_slot(storage, keys::BEST_SCORE, &self.best.to_string());
        if last_ok && best_ok {
            log::info!("Scores saved (best: {}, last: {})", self.best, self.last);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::persistence::MemoryStorage;

    #[test]
    fn test_zero_score_is_not_recorded() {
        let mut board = ScoreBoard { best: 300, last: 200 };
        assert!(!board.record(0));
        assert_eq!(board, ScoreBoard { best: 300, last: 200 });
    }

    #[test]
    fn test_record_updates_last_and_best() {
        let mut board = ScoreBoard::new();
        assert!(board.record(700));
        assert_eq!(board, ScoreBoard { best: 700, last: 700 });

        assert!(!board.record(200));
        assert_eq!(board, ScoreBoard { best: 700, last: 200 });

        assert!(!board.record(700));
        assert!(board.record(701));
        assert_eq!(board.best, 701);
    }

    #[test]
    fn test_is_new_best() {
        let board = ScoreBoard { best: 1200, last: 0 };
        assert!(!board.is_new_best(1200));
        assert!(board.is_new_best(1300));
    }

    #[test]
    fn test_load_defaults_to_zero() {
        let storage = MemoryStorage::new();
        assert_eq!(ScoreBoard::load(&storage), ScoreBoard::new());
    }

    #[test]
    fn test_save_writes_both_slots() {
        let mut storage = MemoryStorage::new();
        let board = ScoreBoard {
            best: 2600,
            last: 900,
        };
        board.save(&mut storage);
        assert_eq!(storage.get_raw(keys::BEST_SCORE), Some("2600"));
        assert_eq!(storage.get_raw(keys::LAST_SCORE), Some("900"));
        assert_eq!(ScoreBoard::load(&storage), board);
    }
}
