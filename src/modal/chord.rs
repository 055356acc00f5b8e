//! Leader-key chords (`Space` then one key).

use std::time::{Duration, Instant};

use super::key::{Key, LEADER};
use super::mode::{Mode, Transition};
use super::pending::PendingOperation;

#[derive(Debug, Clone)]
pub struct ChordRecognizer {
    timeout: Duration,
}

impl ChordRecognizer {
    pub fn new(timeout: Duration) -> Self {
        Self { timeout }
    }

    /// The leader only means something inside the editor views.
    pub fn is_active_in(&self, mode: Mode) -> bool {
        matches!(mode, Mode::Editor | Mode::Explorer | Mode::Finder)
    }

    pub fn starts(&self, key: Key, mode: Mode) -> bool {
        key == LEADER && self.is_active_in(mode)
    }

    pub fn open(&self, now: Instant) -> PendingOperation {
        PendingOperation::AwaitingChordKey {
            deadline: now + self.timeout,
        }
    }

    pub fn resolve(&self, key: Key) -> Option<Transition> {
        match key {
            Key::Char('e') => Some(Transition::ToggleExplorer),
            Key::Char('/') => Some(Transition::ToggleFinder),
            _ => None,
        }
    }
}
