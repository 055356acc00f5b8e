//! Shared helpers for the integration tests.

use std::sync::Arc;
use std::time::{Duration, Instant};

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use fkvim_demo::clock::ManualClock;
use fkvim_demo::config::Config;
use fkvim_demo::modal::{DemoTerminal, Mode};
use fkvim_demo::panels::Panels;
use fkvim_demo::tea::{update, Command, Message, Model};

pub const TIMEOUT: Duration = Duration::from_millis(1000);

pub fn terminal() -> DemoTerminal {
    DemoTerminal::new(TIMEOUT, TIMEOUT, ["fkvim", "nvim", "neovim"])
}

/// A terminal already past the welcome prompt.
pub fn terminal_in(mode: Mode, now: Instant) -> DemoTerminal {
    let mut t = terminal();
    t.submit_line("fkvim");
    match mode {
        Mode::Dashboard => {}
        Mode::Editor => {
            t.handle_id("i", now);
        }
        Mode::Explorer => {
            t.handle_id("i", now);
            t.handle_id(" ", now);
            t.handle_id("e", now);
        }
        Mode::Finder => {
            t.handle_id("i", now);
            t.handle_id(" ", now);
            t.handle_id("/", now);
        }
        Mode::Quit => {
            t.handle_id(":", now);
            t.handle_id("q", now);
        }
        Mode::Welcome => panic!("use terminal() for the welcome prompt"),
    }
    assert_eq!(t.mode(), mode);
    t
}

pub fn model() -> (Model, Arc<ManualClock>) {
    let clock = Arc::new(ManualClock::new());
    let model = Model::new(&Config::default(), Arc::new(Panels::default()), clock.clone());
    (model, clock)
}

pub fn press(model: &mut Model, code: KeyCode) -> Vec<Command> {
    update(model, Message::Key(KeyEvent::new(code, KeyModifiers::NONE)))
}

pub fn press_with(model: &mut Model, code: KeyCode, modifiers: KeyModifiers) -> Vec<Command> {
    update(model, Message::Key(KeyEvent::new(code, modifiers)))
}

pub fn type_str(model: &mut Model, s: &str) {
    for c in s.chars() {
        press(model, KeyCode::Char(c));
    }
}
