//! Pascal Snake entry point
//!
//! Handles platform-specific initialization and runs the game loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{Document, Element, HtmlCanvasElement, HtmlSelectElement, KeyboardEvent};

    use pascal_snake::Difficulty;
    use pascal_snake::Session;
    use pascal_snake::hud::{Hud, ScoreDisplay, start_button_label};
    use pascal_snake::persistence::{LocalStorage, MemoryStorage, Storage};
    use pascal_snake::platform::input::swallows_default;
    use pascal_snake::platform::{command_for_key, direction_from_label};
    use pascal_snake::renderer::CanvasRenderer;

    type Store = Box<dyn Storage>;

    /// Game instance holding all state
    struct Game {
        session: Session<Store>,
        renderer: CanvasRenderer,
        hud: Hud,
        // Last values pushed to the DOM
        shown_scores: Option<ScoreDisplay>,
        shown_running: Option<bool>,
    }

    impl Game {
        fn new(session: Session<Store>, renderer: CanvasRenderer) -> Self {
            Self {
                session,
                renderer,
                hud: Hud::new(),
                shown_scores: None,
                shown_running: None,
            }
        }

        /// Run due ticks and route events to the HUD
        fn update(&mut self, time: f64) {
            self.session.frame(time);
            let events = self.session.drain_events();
            self.hud.handle_events(&events, time);
            self.hud.update(time);
        }

        fn render(&self) {
            self.renderer.render(self.session.state());
        }

        /// Copy HUD state into the DOM, touching only what changed
        fn update_hud(&mut self, document: &Document) {
            let scores = ScoreDisplay::from_session(&self.session);
            if self.shown_scores != Some(scores) {
                set_text(document, "current-score", &scores.current.to_string());
                set_text(document, "best-score", &scores.best.to_string());
                set_text(document, "last-score", &scores.last.to_string());
                self.shown_scores = Some(scores);
            }

            let running = self.session.is_running();
            if self.shown_running != Some(running) {
                set_text(document, "start-btn", start_button_label(running));
                if let Some(select) = difficulty_select(document) {
                    select.set_disabled(running);
                    select.set_value(self.session.difficulty().as_str());
                }
                self.shown_running = Some(running);
            }

            let bonus = self.hud.bonus();
            set_hidden(document, "bonus-overlay", bonus.is_none());
            set_hidden(
                document,
                "bonus-image",
                !bonus.is_some_and(|b| b.show_image),
            );
            if let Some(bonus) = bonus {
                set_text(document, "bonus-text", bonus.text);
            }
        }
    }

    fn set_text(document: &Document, id: &str, text: &str) {
        if let Some(el) = document.get_element_by_id(id) {
            if el.text_content().as_deref() != Some(text) {
                el.set_text_content(Some(text));
            }
        }
    }

    fn set_hidden(document: &Document, id: &str, hidden: bool) {
        if let Some(el) = document.get_element_by_id(id) {
            if let Err(e) = el.class_list().toggle_with_force("hidden", hidden) {
                log::warn!("Failed to toggle #{}: {:?}", id, e);
            }
        }
    }

    fn difficulty_select(document: &Document) -> Option<HtmlSelectElement> {
        document
            .get_element_by_id("difficulty")?
            .dyn_into::<HtmlSelectElement>()
            .ok()
    }

    /// LocalStorage when the browser allows it, memory otherwise
    fn open_storage() -> Store {
        match LocalStorage::open() {
            Ok(storage) => Box::new(storage),
            Err(e) => {
                log::warn!("{}; scores will not persist", e);
                Box::new(MemoryStorage::new())
            }
        }
    }

    pub fn run() {
        console_error_panic_hook::set_once();
        if let Err(e) = console_log::init_with_level(log::Level::Info) {
            web_sys::console::error_1(&format!("Failed to init logger: {}", e).into());
        }

        log::info!("Pascal Snake starting...");

        let Some(document) = web_sys::window().and_then(|w| w.document()) else {
            log::error!("No document; nothing to attach to");
            return;
        };

        let Some(canvas) = document
            .get_element_by_id("game-canvas")
            .and_then(|el| el.dyn_into::<HtmlCanvasElement>().ok())
        else {
            log::error!("#game-canvas missing or not a canvas");
            return;
        };

        let Some(renderer) = CanvasRenderer::new(&canvas) else {
            log::error!("Canvas 2D context unavailable");
            return;
        };

        let seed = js_sys::Date::now() as u64;
        let session = Session::new(open_storage(), seed);
        log::info!(
            "Session ready (seed {}, difficulty {})",
            seed,
            session.difficulty().as_str()
        );

        let game = Rc::new(RefCell::new(Game::new(session, renderer)));
        {
            let mut g = game.borrow_mut();
            g.render();
            g.update_hud(&document);
        }

        setup_keyboard(&document, game.clone());
        setup_direction_buttons(&document, game.clone());
        setup_start_button(&document, game.clone());
        setup_difficulty_select(&document, game.clone());

        request_animation_frame(game);

        log::info!("Pascal Snake running!");
    }

    fn setup_keyboard(document: &Document, game: Rc<RefCell<Game>>) {
        let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
            let key = event.key();
            if swallows_default(&key) {
                event.prevent_default();
            }
            if let Some(command) = command_for_key(&key) {
                game.borrow_mut().session.apply(command);
            }
        });
        let _ = document.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    /// On-screen d-pad: every `.d-btn` carries its direction in `data-direction`
    fn setup_direction_buttons(document: &Document, game: Rc<RefCell<Game>>) {
        let Ok(buttons) = document.query_selector_all(".d-btn") else {
            return;
        };
        for i in 0..buttons.length() {
            let Some(button) = buttons.get(i).and_then(|n| n.dyn_into::<Element>().ok()) else {
                continue;
            };
            let Some(dir) = button
                .get_attribute("data-direction")
                .as_deref()
                .and_then(direction_from_label)
            else {
                log::warn!("d-pad button without a valid data-direction");
                continue;
            };

            for event_name in ["click", "touchstart"] {
                let game = game.clone();
                let closure = Closure::<dyn FnMut(_)>::new(move |event: web_sys::Event| {
                    // Keep touchstart from also firing a synthetic click
                    event.prevent_default();
                    game.borrow_mut().session.set_direction(dir);
                });
                let _ = button
                    .add_event_listener_with_callback(event_name, closure.as_ref().unchecked_ref());
                closure.forget();
            }
        }
    }

    fn setup_start_button(document: &Document, game: Rc<RefCell<Game>>) {
        if let Some(btn) = document.get_element_by_id("start-btn") {
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::MouseEvent| {
                game.borrow_mut().session.toggle();
            });
            let _ = btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn setup_difficulty_select(document: &Document, game: Rc<RefCell<Game>>) {
        let Some(select) = difficulty_select(document) else {
            return;
        };
        select.set_value(game.borrow().session.difficulty().as_str());

        let target = select.clone();
        let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::Event| {
            let mut g = game.borrow_mut();
            let accepted = Difficulty::from_str(&target.value())
                .is_some_and(|d| g.session.set_difficulty(d));
            if accepted {
                g.render();
            } else {
                target.set_value(g.session.difficulty().as_str());
            }
        });
        let _ = select.add_event_listener_with_callback("change", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn request_animation_frame(game: Rc<RefCell<Game>>) {
        let Some(window) = web_sys::window() else {
            return;
        };
        let closure = Closure::once(move |time: f64| {
            game_loop(game, time);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn game_loop(game: Rc<RefCell<Game>>, time: f64) {
        {
            let mut g = game.borrow_mut();
            g.update(time);
            g.render();
            if let Some(document) = web_sys::window().and_then(|w| w.document()) {
                g.update_hud(&document);
            }
        }

        request_animation_frame(game);
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() {
    wasm_game::run();
}

#[cfg(not(target_arch = "wasm32"))]
mod demo {
    //! Headless autopilot run for native builds

    use clap::Parser;
    use serde::Serialize;

    use pascal_snake::autopilot::choose_direction;
    use pascal_snake::persistence::MemoryStorage;
    use pascal_snake::sim::{GameEvent, GameOverCause};
    use pascal_snake::{Difficulty, Session};

    /// Headless autopilot run; prints a JSON summary
    #[derive(Debug, Clone, Copy, Parser)]
    #[command(name = "pascal-snake", version, about)]
    pub struct DemoConfig {
        /// Seed for spawn placement
        #[arg(long, env = "PASCAL_SNAKE_SEED", default_value_t = 42)]
        pub seed: u64,
        /// Stop after this many ticks
        #[arg(long = "ticks", env = "PASCAL_SNAKE_TICKS", default_value_t = 2000)]
        pub max_ticks: u32,
        /// easy, medium or hard
        #[arg(
            long,
            env = "PASCAL_SNAKE_DIFFICULTY",
            default_value = "easy",
            value_parser = parse_difficulty
        )]
        pub difficulty: Difficulty,
    }

    fn parse_difficulty(s: &str) -> Result<Difficulty, String> {
        Difficulty::from_str(s.trim())
            .ok_or_else(|| format!("unknown difficulty `{}` (expected easy, medium or hard)", s))
    }

    #[derive(Debug, Serialize)]
    pub struct RunSummary {
        pub seed: u64,
        pub difficulty: Difficulty,
        pub ticks: u32,
        pub score: u64,
        pub letters: String,
        pub words: u32,
        pub bonuses: u32,
        pub ended_by: Option<GameOverCause>,
        pub best: u64,
        pub last: u64,
    }

    pub fn run(config: DemoConfig) -> RunSummary {
        log::info!(
            "Autopilot on {} (seed {}, up to {} ticks)",
            config.difficulty.label(),
            config.seed,
            config.max_ticks
        );
        let mut session = Session::new(MemoryStorage::new(), config.seed);
        session.set_difficulty(config.difficulty);
        session.start_game();

        let mut ticks = 0;
        let mut bonuses = 0;
        let mut ended_by = None;
        while ticks < config.max_ticks && session.is_running() {
            if let Some(dir) = choose_direction(session.state()) {
                session.set_direction(dir);
            }
            session.step();
            ticks += 1;
            for event in session.drain_events() {
                match event {
                    GameEvent::Bonus(bonus) => {
                        bonuses += 1;
                        log::info!("tick {}: {} (+{})", ticks, bonus.text(), bonus.points);
                    }
                    GameEvent::GameOver(cause) => ended_by = Some(cause),
                    GameEvent::LetterCollected { .. } => {}
                }
            }
        }

        let score = session.state().score;
        let letters = session.state().letters();
        let words = session.state().repeat_count;
        session.stop_game();

        RunSummary {
            seed: config.seed,
            difficulty: config.difficulty,
            ticks,
            score,
            letters,
            words,
            bonuses,
            ended_by,
            best: session.scores().best,
            last: session.scores().last,
        }
    }

    #[cfg(test)]
    mod tests {
        use super::*;

        #[test]
        fn test_flags_parse() {
            let config = DemoConfig::try_parse_from([
                "pascal-snake",
                "--seed",
                "7",
                "--ticks",
                "50",
                "--difficulty",
                "hard",
            ])
            .expect("valid flags");
            assert_eq!(config.seed, 7);
            assert_eq!(config.max_ticks, 50);
            assert_eq!(config.difficulty, Difficulty::Hard);
        }

        #[test]
        fn test_unknown_difficulty_is_rejected() {
            let result = DemoConfig::try_parse_from(["pascal-snake", "--difficulty", "nightmare"]);
            assert!(result.is_err());
        }

        #[test]
        fn test_summary_matches_session() {
            let config = DemoConfig {
                seed: 3,
                max_ticks: 40,
                difficulty: Difficulty::Medium,
            };
            let summary = run(config);
            assert!(summary.ticks <= 40);
            assert_eq!(summary.difficulty, Difficulty::Medium);
            // One point-bearing letter per segment behind the head
            assert!(summary.score >= (summary.letters.len() as u64 - 1) * 100);
            if summary.score > 0 {
                assert_eq!(summary.last, summary.score);
                assert_eq!(summary.best, summary.score);
            }
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("Pascal Snake (native) starting...");
    log::info!("Native mode runs the autopilot demo - serve the wasm build for the playable game");

    let config = <demo::DemoConfig as clap::Parser>::parse();
    let summary = demo::run(config);
    match serde_json::to_string_pretty(&summary) {
        Ok(json) => println!("{}", json),
        Err(e) => log::error!("Failed to serialize run summary: {}", e),
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}
