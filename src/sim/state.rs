//! Game state and core simulation types
//!
//! Everything a tick reads or writes lives in `GameState`.

use glam::IVec2;
use serde::{Deserialize, Serialize};

use super::pattern::BonusEvent;
use super::spawn::{RandomSource, regenerate_spawns};
use crate::consts::*;
use crate::grid_center;
use crate::settings::Difficulty;

/// Current phase of the game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Nothing played yet this session
    Ready,
    /// Ticking
    Running,
    /// Stopped by the player
    Stopped,
    /// Ran into a wall or itself
    GameOver,
}

/// Cardinal direction of travel (y grows downward)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// Unit step for this direction
    pub fn delta(&self) -> IVec2 {
        match self {
            Direction::Up => IVec2::new(0, -1),
            Direction::Down => IVec2::new(0, 1),
            Direction::Left => IVec2::new(-1, 0),
            Direction::Right => IVec2::new(1, 0),
        }
    }

    pub fn opposite(&self) -> Self {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }
}

/// One body cell and the letter riding on it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Segment {
    pub cell: IVec2,
    pub letter: char,
}

/// A letter waiting on the grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LetterSpawn {
    pub cell: IVec2,
    pub letter: char,
    /// The letter that continues the pattern (as opposed to a decoy)
    pub is_target: bool,
}

/// What ended a game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameOverCause {
    Wall,
    SelfCollision,
}

/// One-shot notifications for the shell (HUD, flash, logging)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    LetterCollected { letter: char, target: bool },
    Bonus(BonusEvent),
    GameOver(GameOverCause),
}

/// Complete state of one game
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    /// Decoy sourcing for this game (fixed while running)
    pub difficulty: Difficulty,
    pub phase: GamePhase,
    /// Body segments, head first
    pub snake: Vec<Segment>,
    /// Active spawns: at most one target plus decoys
    pub spawns: Vec<LetterSpawn>,
    /// Direction applied on the last tick
    pub direction: Direction,
    /// Direction to apply on the next tick
    pub pending_direction: Direction,
    /// Index into `PATTERN` of the letter to collect next
    pub cursor: usize,
    /// Completed pattern repetitions credited so far
    pub repeat_count: u32,
    pub score: u64,
    /// Ticks simulated this game
    pub time_ticks: u64,
    /// Pending notifications, drained by the session
    #[serde(skip)]
    pub events: Vec<GameEvent>,
}

impl GameState {
    /// A fresh board: single 'P' head at the center, heading right, no spawns
    pub fn new(difficulty: Difficulty) -> Self {
        Self {
            difficulty,
            phase: GamePhase::Ready,
            snake: vec![Segment {
                cell: grid_center(),
                letter: HEAD_LETTER,
            }],
            spawns: Vec::new(),
            direction: Direction::Right,
            pending_direction: Direction::Right,
            cursor: START_CURSOR,
            repeat_count: 0,
            score: 0,
            time_ticks: 0,
            events: Vec::new(),
        }
    }

    /// Reset to a new running game with a fresh spawn set
    pub fn start<R: RandomSource + ?Sized>(difficulty: Difficulty, rng: &mut R) -> Self {
        let mut state = Self::new(difficulty);
        state.phase = GamePhase::Running;
        regenerate_spawns(&mut state, rng);
        state
    }

    pub fn is_running(&self) -> bool {
        self.phase == GamePhase::Running
    }

    pub fn head(&self) -> IVec2 {
        self.snake[0].cell
    }

    pub fn tail(&self) -> IVec2 {
        self.snake[self.snake.len() - 1].cell
    }

    /// Snake letters, head first
    pub fn letters(&self) -> String {
        self.snake.iter().map(|s| s.letter).collect()
    }

    pub fn on_snake(&self, cell: IVec2) -> bool {
        self.snake.iter().any(|s| s.cell == cell)
    }

    /// Index of the spawn sitting on `cell`, if any
    pub fn spawn_at(&self, cell: IVec2) -> Option<usize> {
        self.spawns.iter().position(|s| s.cell == cell)
    }

    /// True if a segment or a spawn occupies the cell
    pub fn is_occupied(&self, cell: IVec2) -> bool {
        self.on_snake(cell) || self.spawn_at(cell).is_some()
    }

    pub fn target(&self) -> Option<&LetterSpawn> {
        self.spawns.iter().find(|s| s.is_target)
    }

    /// Letter the current cursor asks for: 'P' after a reset, otherwise the
    /// lowercase pattern letter
    pub fn target_letter(&self) -> char {
        target_letter_for(self.cursor)
    }

    /// Queue a direction for the next tick
    ///
    /// Reversals are checked against the direction committed on the last
    /// tick, so two quick presses cannot fold the snake onto itself. Returns
    /// false if the direction was dropped.
    pub fn steer(&mut self, dir: Direction) -> bool {
        if dir == self.direction.opposite() {
            return false;
        }
        self.pending_direction = dir;
        true
    }

    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }
}

/// Pattern length in letters
pub fn pattern_len() -> usize {
    PATTERN.len()
}

/// Letter wanted at a cursor position
pub fn target_letter_for(cursor: usize) -> char {
    if cursor % pattern_len() == 0 {
        HEAD_LETTER
    } else {
        PATTERN.as_bytes()[cursor % pattern_len()] as char
    }
}
