//! Keyboard input bookkeeping
//!
//! Key-down/key-up events arrive asynchronously from the browser; this keeps
//! the set of held logical keys and samples it once per frame into a
//! [`TickInput`]. Keys that map to nothing are ignored.

use std::collections::HashSet;

use crate::sim::TickInput;

/// Inputs the simulation understands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LogicalKey {
    TurnLeft,
    TurnRight,
    Thrust,
    Fire,
}

impl LogicalKey {
    /// Map a `KeyboardEvent.key` value
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "ArrowLeft" | "Left" => Some(LogicalKey::TurnLeft),
            "ArrowRight" | "Right" => Some(LogicalKey::TurnRight),
            "ArrowUp" | "Up" => Some(LogicalKey::Thrust),
            " " | "Spacebar" => Some(LogicalKey::Fire),
            _ => None,
        }
    }

    /// Map a legacy `KeyboardEvent.keyCode` value
    pub fn from_key_code(code: u32) -> Option<Self> {
        match code {
            37 => Some(LogicalKey::TurnLeft),
            39 => Some(LogicalKey::TurnRight),
            38 => Some(LogicalKey::Thrust),
            32 => Some(LogicalKey::Fire),
            _ => None,
        }
    }

    /// Map a keyboard event, falling back to `keyCode` for browsers that
    /// report an unrecognised `key`
    pub fn from_event(key: &str, key_code: u32) -> Option<Self> {
        Self::from_key(key).or_else(|| Self::from_key_code(key_code))
    }
}

/// Currently held logical keys
#[derive(Debug, Clone, Default)]
pub struct KeyState {
    held: HashSet<LogicalKey>,
}

impl KeyState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a key-down. Returns true if the key is one the game uses.
    pub fn key_down(&mut self, key: &str, key_code: u32) -> bool {
        match LogicalKey::from_event(key, key_code) {
            Some(k) => {
                self.held.insert(k);
                true
            }
            None => false,
        }
    }

    /// Record a key-up. Returns true if the key is one the game uses.
    pub fn key_up(&mut self, key: &str, key_code: u32) -> bool {
        match LogicalKey::from_event(key, key_code) {
            Some(k) => {
                self.held.remove(&k);
                true
            }
            None => false,
        }
    }

    /// Drop every held key (window lost focus, key-ups will never arrive)
    pub fn release_all(&mut self) {
        self.held.clear();
    }

    pub fn is_held(&self, key: LogicalKey) -> bool {
        self.held.contains(&key)
    }

    /// Snapshot held keys for one simulation frame
    pub fn sample(&self) -> TickInput {
        TickInput {
            left: self.is_held(LogicalKey::TurnLeft),
            right: self.is_held(LogicalKey::TurnRight),
            thrust: self.is_held(LogicalKey::Thrust),
            fire: self.is_held(LogicalKey::Fire),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_mapping() {
        assert_eq!(LogicalKey::from_key("ArrowLeft"), Some(LogicalKey::TurnLeft));
        assert_eq!(LogicalKey::from_key(" "), Some(LogicalKey::Fire));
        assert_eq!(LogicalKey::from_key("a"), None);

        assert_eq!(LogicalKey::from_key_code(37), Some(LogicalKey::TurnLeft));
        assert_eq!(LogicalKey::from_key_code(39), Some(LogicalKey::TurnRight));
        assert_eq!(LogicalKey::from_key_code(38), Some(LogicalKey::Thrust));
        assert_eq!(LogicalKey::from_key_code(32), Some(LogicalKey::Fire));
        assert_eq!(LogicalKey::from_key_code(40), None);
    }

    #[test]
    fn test_key_code_fallback() {
        // Named key wins when recognised
        assert_eq!(LogicalKey::from_event("ArrowUp", 0), Some(LogicalKey::Thrust));
        // Otherwise the legacy code decides
        assert_eq!(LogicalKey::from_event("Unidentified", 37), Some(LogicalKey::TurnLeft));
        assert_eq!(LogicalKey::from_event("", 32), Some(LogicalKey::Fire));
        assert_eq!(LogicalKey::from_event("Unidentified", 65), None);

        let mut keys = KeyState::new();
        assert!(keys.key_down("Unidentified", 39));
        assert!(keys.is_held(LogicalKey::TurnRight));
        assert!(keys.key_up("Unidentified", 39));
        assert!(!keys.is_held(LogicalKey::TurnRight));
    }

    #[test]
    fn test_held_keys_sample() {
        let mut keys = KeyState::new();
        assert_eq!(keys.sample(), TickInput::default());

        assert!(keys.key_down("ArrowUp", 38));
        assert!(keys.key_down(" ", 32));
        let input = keys.sample();
        assert!(input.thrust && input.fire);
        assert!(!input.left && !input.right);

        assert!(keys.key_up(" ", 32));
        assert!(!keys.sample().fire);
        assert!(keys.sample().thrust);
    }

    #[test]
    fn test_unknown_keys_ignored() {
        let mut keys = KeyState::new();
        assert!(!keys.key_down("Escape", 27));
        assert!(!keys.key_up("q", 81));
        assert_eq!(keys.sample(), TickInput::default());
    }

    #[test]
    fn test_repeat_keydown_is_idempotent() {
        let mut keys = KeyState::new();
        keys.key_down("ArrowLeft", 37);
        keys.key_down("ArrowLeft", 37);
        keys.key_up("ArrowLeft", 37);
        assert!(!keys.is_held(LogicalKey::TurnLeft));
    }

    #[test]
    fn test_release_all() {
        let mut keys = KeyState::new();
        keys.key_down(" ", 32);
        keys.key_down("ArrowRight", 39);
        keys.release_all();
        assert_eq!(keys.sample(), TickInput::default());
    }
}
