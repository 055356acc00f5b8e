//! Single event intake for the simulated terminal.

use std::time::{Duration, Instant};

use crate::{dlog, dlog_debug, dlog_trace};

use super::chord::ChordRecognizer;
use super::command_line::CommandLineHandler;
use super::key::{Key, KeyInput};
use super::mode::{Mode, ModeStateMachine, Transition};
use super::pending::{PendingKind, PendingOperation};
use super::startup::StartupCommandMatcher;

/// Owns the mode, the one pending-operation slot and the three recognizers.
///
/// Every key goes through [`DemoTerminal::handle_key`]; every periodic tick
/// may call [`DemoTerminal::expire`]. Nothing here blocks or fails.
#[derive(Debug)]
pub struct DemoTerminal {
    machine: ModeStateMachine,
    pending: PendingOperation,
    chord: ChordRecognizer,
    command_line: CommandLineHandler,
    startup: StartupCommandMatcher,
}

impl DemoTerminal {
    pub fn new<I, S>(chord_timeout: Duration, command_timeout: Duration, launch_commands: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            machine: ModeStateMachine::new(),
            pending: PendingOperation::None,
            chord: ChordRecognizer::new(chord_timeout),
            command_line: CommandLineHandler::new(command_timeout),
            startup: StartupCommandMatcher::new(launch_commands),
        }
    }

    pub fn from_config(config: &crate::config::Config) -> Self {
        Self::new(
            config.chord_timeout(),
            config.command_timeout(),
            &config.launch_commands,
        )
    }

    pub fn mode(&self) -> Mode {
        self.machine.mode()
    }

    pub fn pending(&self) -> PendingOperation {
        self.pending
    }

    pub fn pending_kind(&self) -> Option<PendingKind> {
        self.pending.kind()
    }

    pub fn input(&self) -> &str {
        self.startup.buffer().as_str()
    }

    pub fn launch_commands(&self) -> &[String] {
        self.startup.commands()
    }

    /// Drop a pending operation whose deadline has passed.
    ///
    /// Returns true when something was dropped.
    pub fn expire(&mut self, now: Instant) -> bool {
        if self.pending.is_expired(now) {
            dlog_debug!("Pending {:?} expired", self.pending.kind());
            self.pending = PendingOperation::None;
            return true;
        }
        false
    }

    /// Feed one key. Returns the new mode when a transition happened.
    pub fn handle_key(&mut self, input: KeyInput, now: Instant) -> Option<Mode> {
        dlog_trace!(
            "handle_key key={:?} modified={} mode={:?} pending={:?}",
            input.key.identifier(),
            input.modified,
            self.mode(),
            self.pending.kind()
        );

        if input.modified {
            return None;
        }

        let mode = self.mode();
        if mode.accepts_launch_line() {
            self.pending = PendingOperation::None;
            return self.edit_launch_line(input.key);
        }

        self.expire(now);

        // Latest wins: a leader or prefix replaces whatever was pending.
        if self.chord.starts(input.key, mode) {
            self.pending = self.chord.open(now);
            return None;
        }
        if self.command_line.starts(input.key, mode) {
            self.pending = self.command_line.open(now);
            return None;
        }

        let transition = match self.pending.take() {
            PendingOperation::AwaitingChordKey { .. } => self.chord.resolve(input.key),
            PendingOperation::AwaitingColonKey { .. } => self.command_line.resolve(input.key),
            PendingOperation::None => match (mode, input.key) {
                (Mode::Dashboard, Key::Char('i')) => Some(Transition::Insert),
                _ => None,
            },
        };

        match transition {
            Some(t) => self.apply(t),
            None => {
                dlog_debug!("Ignored key {:?} in {:?}", input.key.identifier(), mode);
                None
            }
        }
    }

    /// Convenience for replaying DOM-style identifiers.
    pub fn handle_id(&mut self, id: &str, now: Instant) -> Option<Mode> {
        self.handle_key(KeyInput::id(id), now)
    }

    /// Replace the launch line and submit it in one step.
    pub fn submit_line(&mut self, line: &str) -> Option<Mode> {
        if !self.mode().accepts_launch_line() {
            return None;
        }
        self.startup.buffer_mut().set(line);
        self.submit()
    }

    fn edit_launch_line(&mut self, key: Key) -> Option<Mode> {
        match key {
            Key::Char(c) if !c.is_control() => {
                self.startup.buffer_mut().push(c);
                None
            }
            Key::Backspace => {
                self.startup.buffer_mut().pop();
                None
            }
            Key::Enter => self.submit(),
            _ => None,
        }
    }

    fn submit(&mut self) -> Option<Mode> {
        match self.startup.submit() {
            Some(t) => self.apply(t),
            None => {
                dlog_debug!("Launch line {:?} not recognized", self.input());
                None
            }
        }
    }

    fn apply(&mut self, transition: Transition) -> Option<Mode> {
        let from = self.mode();
        let to = self.machine.apply(transition);
        if to == from {
            return None;
        }
        dlog!("Mode {:?} -> {:?} via {:?}", from, to, transition);
        Some(to)
    }
}
