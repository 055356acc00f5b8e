//! Crate-local key representation consumed by the modal core.
//!
//! Identifiers follow DOM `KeyboardEvent.key` spelling (`"i"`, `" "`,
//! `"Escape"`), which is also what shows up in the log.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Char(char),
    Escape,
    Enter,
    Backspace,
    Other,
}

pub const LEADER: Key = Key::Char(' ');
pub const COMMAND_PREFIX: Key = Key::Char(':');

impl Key {
    pub fn from_identifier(id: &str) -> Self {
        match id {
            "Escape" | "Esc" => Key::Escape,
            "Enter" => Key::Enter,
            "Backspace" => Key::Backspace,
            _ => {
                let mut chars = id.chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) => Key::Char(c),
                    _ => Key::Other,
                }
            }
        }
    }

    pub fn identifier(&self) -> String {
        match self {
            Key::Char(c) => c.to_string(),
            Key::Escape => "Escape".to_string(),
            Key::Enter => "Enter".to_string(),
            Key::Backspace => "Backspace".to_string(),
            Key::Other => "Unidentified".to_string(),
        }
    }
}

/// A key plus whether a ctrl/alt/super/meta modifier was held.
///
/// Modified keys belong to the surrounding UI (palette shortcuts and the
/// like) and are never interpreted by the mode logic.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyInput {
    pub key: Key,
    pub modified: bool,
}

impl KeyInput {
    pub fn plain(key: Key) -> Self {
        Self {
            key,
            modified: false,
        }
    }

    pub fn modified(key: Key) -> Self {
        Self {
            key,
            modified: true,
        }
    }

    pub fn id(id: &str) -> Self {
        Self::plain(Key::from_identifier(id))
    }

    /// Convert a crossterm event. Release events yield `None`.
    pub fn from_crossterm(event: &KeyEvent) -> Option<Self> {
        if event.kind == KeyEventKind::Release {
            return None;
        }
        let key = match event.code {
            KeyCode::Char(c) => Key::Char(c),
            KeyCode::Esc => Key::Escape,
            KeyCode::Enter => Key::Enter,
            KeyCode::Backspace => Key::Backspace,
            _ => Key::Other,
        };
        let modified = event.modifiers.intersects(
            KeyModifiers::CONTROL | KeyModifiers::ALT | KeyModifiers::SUPER | KeyModifiers::META,
        );
        Some(Self { key, modified })
    }
}
