//! HUD state: score readouts, start button label and the bonus overlay
//!
//! Pure data; the browser shell copies it into the DOM each frame.

use crate::consts::BONUS_DISPLAY_MS;
use crate::persistence::Storage;
use crate::session::Session;
use crate::sim::{BonusEvent, GameEvent};

/// Values shown in the score panel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoreDisplay {
    pub current: u64,
    pub best: u64,
    pub last: u64,
}

impl ScoreDisplay {
    pub fn from_session<S: Storage>(session: &Session<S>) -> Self {
        Self {
            current: session.state().score,
            best: session.scores().best,
            last: session.scores().last,
        }
    }
}

/// Label for the start/stop button
pub fn start_button_label(running: bool) -> &'static str {
    if running { "Stop" } else { "Start" }
}

/// A bonus caption on screen
#[derive(Debug, Clone, PartialEq)]
pub struct BonusOverlay {
    pub text: &'static str,
    pub show_image: bool,
    /// Timestamp (ms) the overlay went up
    pub shown_at: f64,
}

#[derive(Debug, Clone, Default)]
pub struct Hud {
    bonus: Option<BonusOverlay>,
}

impl Hud {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn bonus(&self) -> Option<&BonusOverlay> {
        self.bonus.as_ref()
    }

    /// Put a bonus up, replacing any overlay still showing
    pub fn show_bonus(&mut self, bonus: &BonusEvent, now_ms: f64) {
        self.bonus = Some(BonusOverlay {
            text: bonus.text(),
            show_image: bonus.shows_image(),
            shown_at: now_ms,
        });
    }

    /// React to drained session events
    pub fn handle_events(&mut self, events: &[GameEvent], now_ms: f64) {
        for event in events {
            if let GameEvent::Bonus(bonus) = event {
                self.show_bonus(bonus, now_ms);
            }
        }
    }

    /// Expire the overlay. Returns true if it was just hidden.
    pub fn update(&mut self, now_ms: f64) -> bool {
        match &self.bonus {
            Some(overlay) if now_ms - overlay.shown_at >= BONUS_DISPLAY_MS => {
                self.bonus = None;
                true
            }
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::BonusKind;

    fn small() -> BonusEvent {
        BonusEvent {
            kind: BonusKind::Small,
            points: 500,
            repeat_count: 1,
        }
    }

    #[test]
    fn test_overlay_expires_after_display_time() {
        let mut hud = Hud::new();
        hud.handle_events(&[GameEvent::Bonus(small())], 1000.0);
        let overlay = hud.bonus().expect("overlay");
        assert_eq!(overlay.text, "Pascal!");
        assert!(overlay.show_image);

        assert!(!hud.update(2499.0));
        assert!(hud.bonus().is_some());
        assert!(hud.update(2500.0));
        assert!(hud.bonus().is_none());
        assert!(!hud.update(9000.0));
    }

    #[test]
    fn test_new_bonus_restarts_timer() {
        let mut hud = Hud::new();
        hud.show_bonus(&small(), 0.0);
        let large = BonusEvent {
            kind: BonusKind::Large,
            points: 1000,
            repeat_count: 2,
        };
        hud.show_bonus(&large, 1000.0);
        assert!(!hud.update(2000.0));
        let overlay = hud.bonus().expect("overlay");
        assert_eq!(overlay.text, "Snaaaaaaaake!");
        assert!(!overlay.show_image);
    }

    #[test]
    fn test_button_label() {
        assert_eq!(start_button_label(true), "Stop");
        assert_eq!(start_button_label(false), "Start");
    }
}
