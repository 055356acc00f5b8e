//! Model for the TEA pattern.
//!
//! The Model is pure application state: no channels, no runtime handles.

use std::sync::Arc;

use crate::blink::CursorBlink;
use crate::clock::Clock;
use crate::config::Config;
use crate::modal::DemoTerminal;
use crate::navbar::CommandPalette;
use crate::panels::Panels;
use crate::render::{next_version, RenderState};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationLevel {
    Error,
    Info,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub level: NotificationLevel,
    pub message: String,
}

impl Notification {
    pub fn info(message: impl Into<String>) -> Self {
        Self {
            level: NotificationLevel::Info,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            level: NotificationLevel::Error,
            message: message.into(),
        }
    }
}

pub struct Model {
    pub terminal: DemoTerminal,
    pub blink: CursorBlink,

    /// Open search palette; keys go here instead of the terminal while set.
    pub palette: Option<CommandPalette>,
    pub notification: Option<Notification>,

    // Set when state changes and a render is needed
    pub dirty: bool,

    pub panels: Arc<Panels>,
    pub clock: Arc<dyn Clock>,
}

impl Model {
    pub fn new(config: &Config, panels: Arc<Panels>, clock: Arc<dyn Clock>) -> Self {
        let started = clock.now();
        Self {
            terminal: DemoTerminal::from_config(config),
            blink: CursorBlink::new(config.blink_interval(), started),
            palette: None,
            notification: None,
            dirty: true,
            panels,
            clock,
        }
    }

    /// Immutable snapshot for the render thread.
    pub fn snapshot(&self) -> RenderState {
        RenderState {
            version: next_version(),
            mode: self.terminal.mode(),
            pending: self.terminal.pending_kind(),
            input: self.terminal.input().to_string(),
            cursor_visible: self.blink.visible(),
            launch_commands: self.terminal.launch_commands().to_vec(),
            palette: self.palette.clone(),
            notification: self.notification.clone(),
            panels: self.panels.clone(),
        }
    }
}
