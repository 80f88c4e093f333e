//! Input mapping
//!
//! Browser key names and d-pad `data-direction` labels map onto a small
//! command set. Anything unrecognized maps to `None` and is ignored.

use crate::sim::Direction;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Steer(Direction),
    /// Start when stopped, stop when running
    Toggle,
}

/// Map a `KeyboardEvent.key` value
pub fn command_for_key(key: &str) -> Option<Command> {
    match key {
        "ArrowUp" => Some(Command::Steer(Direction::Up)),
        "ArrowDown" => Some(Command::Steer(Direction::Down)),
        "ArrowLeft" => Some(Command::Steer(Direction::Left)),
        "ArrowRight" => Some(Command::Steer(Direction::Right)),
        " " | "Space" | "Spacebar" => Some(Command::Toggle),
        _ => None,
    }
}

/// Map a d-pad button label
pub fn direction_from_label(label: &str) -> Option<Direction> {
    match label {
        "up" => Some(Direction::Up),
        "down" => Some(Direction::Down),
        "left" => Some(Direction::Left),
        "right" => Some(Direction::Right),
        _ => None,
    }
}

/// Keys whose browser default (scrolling) should be suppressed
pub fn swallows_default(key: &str) -> bool {
    command_for_key(key).is_some()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_arrow_keys() {
        assert_eq!(
            command_for_key("ArrowUp"),
            Some(Command::Steer(Direction::Up))
        );
        assert_eq!(
            command_for_key("ArrowLeft"),
            Some(Command::Steer(Direction::Left))
        );
    }

    #[test]
    fn test_space_toggles() {
        assert_eq!(command_for_key(" "), Some(Command::Toggle));
        assert_eq!(command_for_key("Space"), Some(Command::Toggle));
    }

    #[test]
    fn test_unknown_keys_ignored() {
        assert_eq!(command_for_key("w"), None);
        assert_eq!(command_for_key("Enter"), None);
        assert!(!swallows_default("Tab"));
        assert!(swallows_default("ArrowDown"));
    }

    #[test]
    fn test_dpad_labels() {
        assert_eq!(direction_from_label("right"), Some(Direction::Right));
        assert_eq!(direction_from_label("diagonal"), None);
    }
}
