//! `:`-prefixed one-key commands.

use std::time::{Duration, Instant};

use super::key::{Key, COMMAND_PREFIX};
use super::mode::{Mode, Transition};
use super::pending::PendingOperation;

#[derive(Debug, Clone)]
pub struct CommandLineHandler {
    timeout: Duration,
}

impl CommandLineHandler {
    pub fn new(timeout: Duration) -> Self {
        Self { timeout }
    }

    pub fn is_active_in(&self, mode: Mode) -> bool {
        matches!(
            mode,
            Mode::Dashboard | Mode::Editor | Mode::Explorer | Mode::Finder
        )
    }

    pub fn starts(&self, key: Key, mode: Mode) -> bool {
        key == COMMAND_PREFIX && self.is_active_in(mode)
    }

    pub fn open(&self, now: Instant) -> PendingOperation {
        PendingOperation::AwaitingColonKey {
            deadline: now + self.timeout,
        }
    }

    /// Only `q` is a command; where it leads depends on the current mode.
    pub fn resolve(&self, key: Key) -> Option<Transition> {
        match key {
            Key::Char('q') => Some(Transition::QuitCommand),
            _ => None,
        }
    }
}
