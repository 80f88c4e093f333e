//! Game settings and preferences
//!
//! Persisted separately from scores as a single scalar slot.

use serde::{Deserialize, Serialize};

use crate::consts::PATTERN;
use crate::persistence::{self, Storage, keys};

/// Difficulty levels
///
/// Controls where decoy letters come from and whether the renderer colors
/// the target differently from the decoys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    #[default]
    Easy,
    Medium,
    Hard,
}

/// Every letter a decoy may carry on easy and medium
const ALPHABET_POOL: &str = "abcdefghijklmnopqrstuvwxyz_";

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];

    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "easy" => Some(Difficulty::Easy),
            "medium" | "med" => Some(Difficulty::Medium),
            "hard" => Some(Difficulty::Hard),
            _ => None,
        }
    }

    /// Display name for the difficulty selector
    pub fn label(&self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
        }
    }

    /// Characters decoys are drawn from (before excluding the target)
    ///
    /// Hard mode uses only letters that occur in the pattern, so every decoy
    /// looks like a plausible next letter.
    pub fn decoy_pool(&self) -> Vec<char> {
        match self {
            Difficulty::Hard => {
                let mut pool: Vec<char> = Vec::with_capacity(PATTERN.len());
                for c in PATTERN.chars() {
                    if !pool.contains(&c) {
                        pool.push(c);
                    }
                }
                pool
            }
            Difficulty::Easy | Difficulty::Medium => ALPHABET_POOL.chars().collect(),
        }
    }

    /// Whether the target is drawn in a different color from the decoys
    pub fn highlights_target(&self) -> bool {
        matches!(self, Difficulty::Easy)
    }
}

/// Game settings/preferences
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    pub difficulty: Difficulty,
}

impl Settings {
    /// Load settings, falling back to defaults for a missing or bad slot
    pub fn load(storage: &dyn Storage) -> Self {
        match persistence::read_slot(storage, keys::DIFFICULTY) {
            Some(raw) => match Difficulty::from_str(&raw) {
                Some(difficulty) => {
                    log::info!("Loaded settings (difficulty: {})", difficulty.as_str());
                    Self { difficulty }
                }
                None => {
                    log::warn!("Ignoring unknown difficulty {:?}", raw);
                    Self::default()
                }
            },
            None => {
                log::info!("Using default settings");
                Self::default()
            }
        }
    }

    pub fn save(&self, storage: &mut dyn Storage) {
        if persistence::write_slot(storage, keys::DIFFICULTY, self.difficulty.as_str()) {
            log::info!("Settings saved");
        }
    }
}
