//! Update function for the TEA pattern.
//!
//! Takes the model and a message, mutates the model (setting `dirty` when a
//! redraw is needed) and returns the commands to execute. No I/O happens
//! here; time comes from the model's clock.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::modal::KeyInput;
use crate::navbar::CommandPalette;
use crate::{dlog_debug, dlog_trace, dlog_warn};

use super::command::Command;
use super::message::Message;
use super::model::{Model, Notification};

fn set_error(model: &mut Model, message: String) {
    dlog_warn!("UI Error: {}", message);
    model.notification = Some(Notification::error(message));
    model.dirty = true;
}

fn has_modifier(key: &KeyEvent) -> bool {
    key.modifiers.intersects(
        KeyModifiers::CONTROL | KeyModifiers::ALT | KeyModifiers::SUPER | KeyModifiers::META,
    )
}

fn is_shortcut(key: &KeyEvent, c: char) -> bool {
    key.code == KeyCode::Char(c)
        && key
            .modifiers
            .intersects(KeyModifiers::CONTROL | KeyModifiers::SUPER | KeyModifiers::META)
}

pub fn update(model: &mut Model, msg: Message) -> Vec<Command> {
    let mut cmds = Vec::new();

    match msg {
        Message::Key(key) => {
            if key.kind == KeyEventKind::Release {
                return cmds;
            }
            model.notification = None;
            model.dirty = true;

            if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
                cmds.push(Command::Quit);
            } else if let Some(palette) = model.palette.as_mut() {
                if let Some(cmd) = update_palette(palette, key) {
                    cmds.push(cmd);
                    model.palette = None;
                } else if key.code == KeyCode::Esc {
                    model.palette = None;
                }
            } else if is_shortcut(&key, 'k') {
                dlog_debug!("Palette opened");
                model.palette = Some(CommandPalette::new());
            } else if is_shortcut(&key, 'e') {
                // Reserved by the surrounding page; swallowed.
            } else if let Some(input) = KeyInput::from_crossterm(&key) {
                let now = model.clock.now();
                model.terminal.handle_key(input, now);
            }
        }

        Message::Resize(_, _) => {
            model.dirty = true;
        }

        Message::Tick => {
            let now = model.clock.now();
            let toggles = model.blink.advance_to(now);
            if toggles > 0 {
                dlog_trace!("Cursor blink toggled {}x", toggles);
                // The cursor is only drawn next to the launch prompt.
                if model.terminal.mode().accepts_launch_line() {
                    model.dirty = true;
                }
            }
            if model.terminal.expire(now) {
                model.dirty = true;
            }
        }

        Message::LinkOpened(url) => {
            dlog_debug!("Message::LinkOpened url={}", url);
            model.notification = Some(Notification::info(format!("Opened {}", url)));
            model.dirty = true;
        }

        Message::LinkOpenFailed { url, error } => {
            set_error(model, format!("Could not open {}: {}", url, error));
        }
    }

    cmds
}

/// Route a key to the open palette. Returns a command when an entry was
/// chosen.
fn update_palette(palette: &mut CommandPalette, key: KeyEvent) -> Option<Command> {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    match key.code {
        KeyCode::Enter => palette.selected_item().map(|item| {
            dlog_debug!("Palette chose {}", item.label);
            Command::OpenLink {
                url: item.url.to_string(),
            }
        }),
        KeyCode::Down => {
            palette.select_next();
            None
        }
        KeyCode::Up => {
            palette.select_prev();
            None
        }
        KeyCode::Char('n') if ctrl => {
            palette.select_next();
            None
        }
        KeyCode::Char('p') if ctrl => {
            palette.select_prev();
            None
        }
        KeyCode::Backspace => {
            palette.pop();
            None
        }
        KeyCode::Char(c) if !has_modifier(&key) => {
            palette.push(c);
            None
        }
        _ => None,
    }
}
