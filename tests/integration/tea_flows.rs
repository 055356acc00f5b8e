//! End-to-end flows through the TEA `update` function.

use crossterm::event::{KeyCode, KeyModifiers};

use fkvim_demo::modal::{Mode, PendingKind};
use fkvim_demo::navbar::REPO_URL;
use fkvim_demo::tea::{update, Command, Message};

use super::fixtures::{model, press, press_with, type_str};

#[test]
fn test_full_session_walkthrough() {
    let (mut model, clock) = model();

    type_str(&mut model, " Neovim ");
    press(&mut model, KeyCode::Enter);
    assert_eq!(model.terminal.mode(), Mode::Dashboard);
    assert_eq!(model.terminal.input(), "");

    press(&mut model, KeyCode::Char('i'));
    assert_eq!(model.terminal.mode(), Mode::Editor);

    press(&mut model, KeyCode::Char(' '));
    clock.advance_ms(250);
    press(&mut model, KeyCode::Char('/'));
    assert_eq!(model.terminal.mode(), Mode::Finder);

    press(&mut model, KeyCode::Char(':'));
    clock.advance_ms(250);
    press(&mut model, KeyCode::Char('q'));
    assert_eq!(model.terminal.mode(), Mode::Editor);

    press(&mut model, KeyCode::Char(':'));
    press(&mut model, KeyCode::Char('q'));
    assert_eq!(model.terminal.mode(), Mode::Quit);

    type_str(&mut model, "fkvim");
    press(&mut model, KeyCode::Enter);
    assert_eq!(model.terminal.mode(), Mode::Dashboard);
}

#[test]
fn test_snapshot_shows_pending_indicator_until_tick_expires_it() {
    let (mut model, clock) = model();
    type_str(&mut model, "nvim");
    press(&mut model, KeyCode::Enter);
    press(&mut model, KeyCode::Char('i'));

    press(&mut model, KeyCode::Char(' '));
    assert_eq!(model.snapshot().pending, Some(PendingKind::Chord));

    clock.advance_ms(1000);
    update(&mut model, Message::Tick);
    assert_eq!(model.snapshot().pending, Some(PendingKind::Chord));

    clock.advance_ms(1);
    update(&mut model, Message::Tick);
    assert_eq!(model.snapshot().pending, None);

    press(&mut model, KeyCode::Char('e'));
    assert_eq!(model.terminal.mode(), Mode::Editor);
}

#[test]
fn test_blink_toggles_twice_in_1060ms_whatever_the_mode() {
    let (mut model, clock) = model();
    type_str(&mut model, "fkvim");
    press(&mut model, KeyCode::Enter);
    press(&mut model, KeyCode::Char('i'));

    let mut toggles = 0;
    let mut last = model.blink.visible();
    for _ in 0..(1060 / 20) {
        clock.advance_ms(20);
        update(&mut model, Message::Tick);
        if model.blink.visible() != last {
            toggles += 1;
            last = model.blink.visible();
        }
    }
    assert_eq!(toggles, 2);
    assert!(model.blink.visible());
}

#[test]
fn test_shortcuts_never_reach_the_core() {
    let (mut model, _clock) = model();
    press_with(&mut model, KeyCode::Char('e'), KeyModifiers::CONTROL);
    press_with(&mut model, KeyCode::Char('x'), KeyModifiers::ALT);
    assert_eq!(model.terminal.input(), "");

    press_with(&mut model, KeyCode::Char('k'), KeyModifiers::SUPER);
    assert!(model.palette.is_some());
    type_str(&mut model, "git");
    let cmds = press(&mut model, KeyCode::Enter);
    assert_eq!(
        cmds,
        vec![Command::OpenLink {
            url: REPO_URL.to_string()
        }]
    );
    assert_eq!(model.terminal.mode(), Mode::Welcome);
    assert_eq!(model.terminal.input(), "");
}

#[test]
fn test_link_opened_notification() {
    let (mut model, _clock) = model();
    update(
        &mut model,
        Message::LinkOpened("https://fkvim.netlify.app/".to_string()),
    );
    let state = model.snapshot();
    assert!(state
        .notification
        .is_some_and(|n| n.message.contains("fkvim.netlify.app")));
}
