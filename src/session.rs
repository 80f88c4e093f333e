//! Game session: lifecycle, scores, settings and tick scheduling
//!
//! The session owns the current `GameState` and everything that outlives
//! it. Shells (browser loop, native demo, tests) only talk to the session:
//! they feed elapsed time and input in, and read state and events out.

use rand::SeedableRng;
use rand_pcg::Pcg32;

use crate::persistence::Storage;
use crate::platform::{Command, TickTimer};
use crate::scores::ScoreBoard;
use crate::settings::{Difficulty, Settings};
use crate::sim::{Direction, GameEvent, GamePhase, GameState, tick};

pub struct Session<S: Storage> {
    state: GameState,
    scores: ScoreBoard,
    settings: Settings,
    storage: S,
    timer: TickTimer,
    rng: Pcg32,
    events: Vec<GameEvent>,
}

impl<S: Storage> Session<S> {
    /// Load persisted scores and settings and show an idle board
    pub fn new(storage: S, seed: u64) -> Self {
        let scores = ScoreBoard::load(&storage);
        let settings = Settings::load(&storage);
        Self {
            state: GameState::new(settings.difficulty),
            scores,
            settings,
            storage,
            timer: TickTimer::default(),
            rng: Pcg32::seed_from_u64(seed),
            events: Vec::new(),
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn scores(&self) -> &ScoreBoard {
        &self.scores
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn difficulty(&self) -> Difficulty {
        self.settings.difficulty
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    pub fn is_running(&self) -> bool {
        self.state.is_running()
    }

    /// Fresh game: centered 'P', heading right, new spawns, ticking
    pub fn start_game(&mut self) {
        self.state = GameState::start(self.settings.difficulty, &mut self.rng);
        self.timer.reset();
        log::info!("Game started ({})", self.settings.difficulty.as_str());
    }

    /// Halt ticking and bank the score
    ///
    /// Does nothing unless a game is running. A collision banks its own
    /// score when it ends the game.
    pub fn stop_game(&mut self) {
        if self.state.phase != GamePhase::Running {
            return;
        }
        self.state.phase = GamePhase::Stopped;
        self.timer.reset();
        self.bank_score();
    }

    pub fn toggle(&mut self) {
        if self.is_running() {
            self.stop_game();
        } else {
            self.start_game();
        }
    }

    /// Queue a turn; ignored while no game is running
    pub fn set_direction(&mut self, dir: Direction) -> bool {
        if !self.is_running() {
            return false;
        }
        self.state.steer(dir)
    }

    /// Change and persist the difficulty; refused while a game is running
    pub fn set_difficulty(&mut self, difficulty: Difficulty) -> bool {
        if self.is_running() {
            log::debug!("Difficulty locked while running");
            return false;
        }
        if self.settings.difficulty != difficulty {
            self.settings.difficulty = difficulty;
            self.settings.save(&mut self.storage);
            // The idle board reflects the new choice right away
            self.state.difficulty = difficulty;
        }
        true
    }

    pub fn apply(&mut self, command: Command) {
        match command {
            Command::Steer(dir) => {
                self.set_direction(dir);
            }
            Command::Toggle => self.toggle(),
        }
    }

    /// Feed elapsed milliseconds; runs every due tick. Returns ticks run.
    pub fn advance(&mut self, elapsed_ms: f64) -> u32 {
        if !self.is_running() {
            return 0;
        }
        let due = self.timer.advance(elapsed_ms);
        self.run_ticks(due)
    }

    /// Feed an absolute frame timestamp (requestAnimationFrame time)
    pub fn frame(&mut self, now_ms: f64) -> u32 {
        if !self.is_running() {
            return 0;
        }
        let due = self.timer.frame(now_ms);
        self.run_ticks(due)
    }

    /// Run exactly one tick, ignoring the timer
    pub fn step(&mut self) -> bool {
        self.run_ticks(1) == 1
    }

    /// Take the events produced since the last call
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    fn run_ticks(&mut self, due: u32) -> u32 {
        let mut ran = 0;
        for _ in 0..due {
            if !self.is_running() {
                break;
            }
            tick(&mut self.state, &mut self.rng);
            ran += 1;
            self.events.extend(self.state.drain_events());

            if self.state.phase == GamePhase::GameOver {
                self.timer.reset();
                self.bank_score();
            }
        }
        ran
    }

    fn bank_score(&mut self) {
        let score = self.state.score;
        if score == 0 {
            log::info!("Game ended with no score");
            return;
        }
        if self.scores.record(score) {
            log::info!("New best score: {}", score);
        }
        self.scores.save(&mut self.storage);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::persistence::{MemoryStorage, StorageError, keys};
    use glam::IVec2;

    fn session() -> Session<MemoryStorage> {
        Session::new(MemoryStorage::new(), 1234)
    }

    /// Memory storage that counts slot writes
    #[derive(Default)]
    struct CountingStorage {
        inner: MemoryStorage,
        writes: usize,
    }

    impl Storage for CountingStorage {
        fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
            self.inner.get(key)
        }

        fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
            self.writes += 1;
            self.inner.set(key, value)
        }
    }

    /// Running game with a score, heading straight for the right wall
    fn crash_into_wall<S: Storage>(session: &mut Session<S>, score: u64) {
        session.start_game();
        session.state.score = score;
        session.state.spawns.clear();
        // Nine free cells to the right wall; the tenth step leaves the grid
        for _ in 0..10 {
            session.step();
        }
    }

    #[test]
    fn test_new_session_loads_persisted_values() {
        let mut storage = MemoryStorage::new();
        storage.insert(keys::BEST_SCORE, "4200");
        storage.insert(keys::LAST_SCORE, "800");
        storage.insert(keys::DIFFICULTY, "hard");
        let session = Session::new(storage, 1);
        assert_eq!(session.scores(), &ScoreBoard { best: 4200, last: 800 });
        assert_eq!(session.difficulty(), Difficulty::Hard);
        assert!(!session.is_running());
        assert_eq!(session.state().phase, GamePhase::Ready);
    }

    #[test]
    fn test_start_game_resets_board() {
        let mut session = session();
        session.start_game();
        let state = session.state();
        assert!(state.is_running());
        assert_eq!(state.letters(), "P");
        assert_eq!(state.head(), IVec2::new(10, 10));
        assert_eq!(state.cursor, 1);
        assert_eq!(state.target().map(|s| s.letter), Some('a'));
        assert_eq!(state.spawns.len(), 5);
    }

    #[test]
    fn test_advance_runs_due_ticks() {
        let mut session = session();
        session.start_game();
        assert_eq!(session.advance(149.0), 0);
        assert_eq!(session.advance(1.0), 1);
        assert_eq!(session.state().time_ticks, 1);
        assert_eq!(session.advance(300.0), 2);
    }

    #[test]
    fn test_advance_does_nothing_when_idle() {
        let mut session = session();
        assert_eq!(session.advance(1000.0), 0);
        assert_eq!(session.state().time_ticks, 0);
    }

    #[test]
    fn test_direction_ignored_when_not_running() {
        let mut session = session();
        assert!(!session.set_direction(Direction::Up));
        session.start_game();
        assert!(session.set_direction(Direction::Up));
        assert_eq!(session.state().pending_direction, Direction::Up);
    }

    #[test]
    fn test_reversal_leaves_pending_unchanged() {
        let mut session = session();
        session.start_game();
        assert!(!session.set_direction(Direction::Left));
        assert_eq!(session.state().pending_direction, Direction::Right);
    }

    #[test]
    fn test_difficulty_locked_while_running() {
        let mut session = session();
        session.start_game();
        assert!(!session.set_difficulty(Difficulty::Hard));
        assert_eq!(session.difficulty(), Difficulty::Easy);

        session.stop_game();
        assert!(session.set_difficulty(Difficulty::Hard));
        assert_eq!(session.difficulty(), Difficulty::Hard);
        assert_eq!(session.storage().get_raw(keys::DIFFICULTY), Some("hard"));

        session.start_game();
        assert_eq!(session.state().difficulty, Difficulty::Hard);
    }

    #[test]
    fn test_stop_without_score_saves_nothing() {
        let mut session = session();
        session.start_game();
        session.stop_game();
        assert_eq!(session.state().phase, GamePhase::Stopped);
        assert_eq!(session.scores(), &ScoreBoard::new());
        assert!(session.storage().get_raw(keys::LAST_SCORE).is_none());
    }

    #[test]
    fn test_wall_crash_banks_score() {
        let mut session = session();
        crash_into_wall(&mut session, 700);
        assert!(!session.step());
        assert_eq!(session.state().phase, GamePhase::GameOver);
        assert_eq!(session.scores(), &ScoreBoard { best: 700, last: 700 });
        assert_eq!(session.storage().get_raw(keys::BEST_SCORE), Some("700"));
        assert_eq!(session.storage().get_raw(keys::LAST_SCORE), Some("700"));
        assert!(
            session
                .drain_events()
                .iter()
                .any(|e| matches!(e, GameEvent::GameOver(_)))
        );
    }

    #[test]
    fn test_game_over_banks_exactly_once() {
        let mut session = Session::new(CountingStorage::default(), 1234);
        crash_into_wall(&mut session, 1100);
        assert_eq!(session.state().phase, GamePhase::GameOver);
        // Last and best slots, written once
        assert_eq!(session.storage().writes, 2);

        session.stop_game();
        session.stop_game();
        session.advance(1000.0);
        assert_eq!(session.storage().writes, 2);
        assert_eq!(session.scores(), &ScoreBoard { best: 1100, last: 1100 });
    }

    #[test]
    fn test_manual_stop_banks_once() {
        let mut session = Session::new(CountingStorage::default(), 1234);
        session.start_game();
        session.state.score = 300;
        session.stop_game();
        assert_eq!(session.storage().writes, 2);
        session.stop_game();
        assert_eq!(session.storage().writes, 2);
        assert_eq!(session.scores().last, 300);
    }

    #[test]
    fn test_toggle_starts_and_stops() {
        let mut session = session();
        session.apply(Command::Toggle);
        assert!(session.is_running());
        session.apply(Command::Toggle);
        assert_eq!(session.state().phase, GamePhase::Stopped);
        session.apply(Command::Toggle);
        assert!(session.is_running());
        assert_eq!(session.state().time_ticks, 0);
    }
}
