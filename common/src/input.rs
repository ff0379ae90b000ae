//! Keyboard movement flags.
//!
//! Key events set and clear four independent flags; the last event for a
//! flag wins. Codes that are not bound to a movement key are ignored here and
//! never reach the controllers.

use serde::{Deserialize, Serialize};
use std::sync::{Arc, Mutex, PoisonError};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MovementKey {
    Forward,
    Backward,
    Left,
    Right,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    Down,
    Up,
}

/// A discrete key transition, identified by the key code name (e.g. `"ArrowUp"`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyEvent {
    pub code: String,
    pub action: KeyAction,
}

impl KeyEvent {
    pub fn down(code: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            action: KeyAction::Down,
        }
    }

    pub fn up(code: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            action: KeyAction::Up,
        }
    }
}

/// Key codes bound to each movement flag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct KeyBindings {
    pub forward: Vec<String>,
    pub backward: Vec<String>,
    pub left: Vec<String>,
    pub right: Vec<String>,
}

impl Default for KeyBindings {
    fn default() -> Self {
        Self {
            forward: vec!["ArrowUp".to_string()],
            backward: vec!["ArrowDown".to_string()],
            left: vec!["ArrowLeft".to_string()],
            right: vec!["ArrowRight".to_string()],
        }
    }
}

impl KeyBindings {
    pub fn resolve(&self, code: &str) -> Option<MovementKey> {
        let bound = |codes: &[String]| codes.iter().any(|candidate| candidate == code);

        if bound(&self.forward) {
            Some(MovementKey::Forward)
        } else if bound(&self.backward) {
            Some(MovementKey::Backward)
        } else if bound(&self.left) {
            Some(MovementKey::Left)
        } else if bound(&self.right) {
            Some(MovementKey::Right)
        } else {
            None
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct InputState {
    pub forward: bool,
    pub backward: bool,
    pub left: bool,
    pub right: bool,
}

impl InputState {
    pub fn set(&mut self, key: MovementKey, pressed: bool) {
        match key {
            MovementKey::Forward => self.forward = pressed,
            MovementKey::Backward => self.backward = pressed,
            MovementKey::Left => self.left = pressed,
            MovementKey::Right => self.right = pressed,
        }
    }

    /// Applies a key event. Returns `false` for codes with no binding.
    pub fn apply(&mut self, event: &KeyEvent, bindings: &KeyBindings) -> bool {
        let Some(key) = bindings.resolve(&event.code) else {
            return false;
        };
        self.set(key, event.action == KeyAction::Down);
        true
    }

    /// Turning alone is not movement.
    pub fn is_moving(&self) -> bool {
        self.forward || self.backward
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

/// One [`InputState`] shared between the event source and the frame tick.
///
/// The whole state sits behind a single lock so a reader never observes a
/// partially applied update.
#[derive(Debug, Clone, Default)]
pub struct SharedInputState(Arc<Mutex<InputState>>);

impl SharedInputState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn snapshot(&self) -> InputState {
        *self.0.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn update<R>(&self, f: impl FnOnce(&mut InputState) -> R) -> R {
        let mut state = self.0.lock().unwrap_or_else(PoisonError::into_inner);
        f(&mut state)
    }
}
