//! Messages for the TEA pattern.
//!
//! Messages come from the terminal (keys, resizes), from the clock actor,
//! or from command completion callbacks.

use crossterm::event::KeyEvent;

#[derive(Debug)]
pub enum Message {
    // Terminal events
    Key(KeyEvent),
    Resize(u16, u16),

    // From the clock actor
    Tick,

    // Command completion callbacks
    LinkOpened(String),
    LinkOpenFailed { url: String, error: String },
}
