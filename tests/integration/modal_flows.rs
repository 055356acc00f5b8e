//! Mode transitions through the public `DemoTerminal` API.

use std::time::{Duration, Instant};

use fkvim_demo::modal::{Key, KeyInput, Mode, PendingKind};

use super::fixtures::{terminal, terminal_in};

fn ms(n: u64) -> Duration {
    Duration::from_millis(n)
}

#[test]
fn test_explorer_toggles_from_editor_and_back() {
    let t0 = Instant::now();
    let mut t = terminal_in(Mode::Editor, t0);

    t.handle_id(" ", t0);
    assert_eq!(t.handle_id("e", t0 + ms(400)), Some(Mode::Explorer));

    t.handle_id(" ", t0 + ms(500));
    assert_eq!(t.handle_id("e", t0 + ms(900)), Some(Mode::Editor));
}

#[test]
fn test_dashboard_reaches_explorer_through_editor() {
    let t0 = Instant::now();
    let mut t = terminal_in(Mode::Dashboard, t0);

    // The leader has no meaning on the dashboard.
    t.handle_id(" ", t0);
    assert_eq!(t.pending_kind(), None);
    assert_eq!(t.handle_id("e", t0), None);
    assert_eq!(t.mode(), Mode::Dashboard);

    t.handle_id("i", t0);
    t.handle_id(" ", t0);
    assert_eq!(t.handle_id("e", t0 + ms(10)), Some(Mode::Explorer));
}

#[test]
fn test_finder_toggle() {
    let t0 = Instant::now();
    let mut t = terminal_in(Mode::Editor, t0);

    t.handle_id(" ", t0);
    assert_eq!(t.handle_id("/", t0 + ms(100)), Some(Mode::Finder));
    t.handle_id(" ", t0 + ms(200));
    assert_eq!(t.handle_id("/", t0 + ms(300)), Some(Mode::Editor));
}

#[test]
fn test_colon_q_destination_depends_on_mode() {
    let t0 = Instant::now();
    for (from, to) in [
        (Mode::Dashboard, Mode::Quit),
        (Mode::Editor, Mode::Quit),
        (Mode::Explorer, Mode::Editor),
        (Mode::Finder, Mode::Editor),
    ] {
        let mut t = terminal_in(from, t0);
        t.handle_id(":", t0);
        assert_eq!(t.pending_kind(), Some(PendingKind::Colon));
        assert_eq!(t.handle_id("q", t0 + ms(999)), Some(to), "from {:?}", from);
        assert_eq!(t.pending_kind(), None);
    }
}

#[test]
fn test_launch_line_is_normalized_and_cleared() {
    let mut t = terminal();
    let now = Instant::now();
    for c in "  FKvim ".chars() {
        t.handle_key(KeyInput::plain(Key::Char(c)), now);
    }
    assert_eq!(t.handle_id("Enter", now), Some(Mode::Dashboard));
    assert_eq!(t.input(), "");
}

#[test]
fn test_unknown_launch_line_is_kept() {
    let mut t = terminal();
    let now = Instant::now();
    for c in "vim".chars() {
        t.handle_key(KeyInput::plain(Key::Char(c)), now);
    }
    assert_eq!(t.handle_id("Enter", now), None);
    assert_eq!(t.mode(), Mode::Welcome);
    assert_eq!(t.input(), "vim");

    // The user can correct the line and try again.
    t.handle_id("Backspace", now);
    t.handle_id("Backspace", now);
    t.handle_id("Backspace", now);
    for c in "nvim".chars() {
        t.handle_key(KeyInput::plain(Key::Char(c)), now);
    }
    assert_eq!(t.handle_id("Enter", now), Some(Mode::Dashboard));
}

#[test]
fn test_quit_prompt_relaunches() {
    let now = Instant::now();
    let mut t = terminal_in(Mode::Quit, now);
    assert_eq!(t.submit_line("NEOVIM"), Some(Mode::Dashboard));
}

#[test]
fn test_late_follow_up_is_ignored() {
    let t0 = Instant::now();

    let mut t = terminal_in(Mode::Editor, t0);
    t.handle_id(" ", t0);
    assert_eq!(t.handle_id("e", t0 + ms(1001)), None);
    assert_eq!(t.mode(), Mode::Editor);
    assert_eq!(t.pending_kind(), None);

    let mut t = terminal_in(Mode::Editor, t0);
    t.handle_id(":", t0);
    assert_eq!(t.handle_id("q", t0 + ms(1500)), None);
    assert_eq!(t.mode(), Mode::Editor);
}

#[test]
fn test_follow_up_on_deadline_is_accepted() {
    let t0 = Instant::now();
    let mut t = terminal_in(Mode::Editor, t0);
    t.handle_id(" ", t0);
    assert_eq!(t.handle_id("e", t0 + ms(1000)), Some(Mode::Explorer));
}

#[test]
fn test_expire_clears_pending_without_transition() {
    let t0 = Instant::now();
    let mut t = terminal_in(Mode::Finder, t0);
    t.handle_id(":", t0);

    assert!(!t.expire(t0 + ms(1000)));
    assert!(t.expire(t0 + ms(1001)));
    assert_eq!(t.pending_kind(), None);
    assert_eq!(t.mode(), Mode::Finder);
}

#[test]
fn test_latest_pending_wins() {
    let t0 = Instant::now();

    // Leader then colon: the colon sequence owns the slot.
    let mut t = terminal_in(Mode::Editor, t0);
    t.handle_id(" ", t0);
    t.handle_id(":", t0 + ms(100));
    assert_eq!(t.pending_kind(), Some(PendingKind::Colon));
    assert_eq!(t.handle_id("e", t0 + ms(200)), None);
    assert_eq!(t.mode(), Mode::Editor);

    // Colon then leader: the chord owns the slot.
    let mut t = terminal_in(Mode::Editor, t0);
    t.handle_id(":", t0);
    t.handle_id(" ", t0 + ms(100));
    assert_eq!(t.handle_id("q", t0 + ms(200)), None);
    assert_eq!(t.mode(), Mode::Editor);
}

#[test]
fn test_repeated_leader_restarts_deadline() {
    let t0 = Instant::now();
    let mut t = terminal_in(Mode::Editor, t0);
    t.handle_id(" ", t0);
    t.handle_id(" ", t0 + ms(900));
    assert_eq!(t.handle_id("e", t0 + ms(1800)), Some(Mode::Explorer));
}

#[test]
fn test_unmatched_follow_up_consumes_pending() {
    let t0 = Instant::now();
    let mut t = terminal_in(Mode::Editor, t0);
    t.handle_id(" ", t0);
    assert_eq!(t.handle_id("x", t0 + ms(10)), None);
    assert_eq!(t.handle_id("e", t0 + ms(20)), None);
    assert_eq!(t.mode(), Mode::Editor);
}

#[test]
fn test_modified_keys_leave_pending_alone() {
    let t0 = Instant::now();
    let mut t = terminal_in(Mode::Editor, t0);
    t.handle_id(" ", t0);
    assert_eq!(t.handle_key(KeyInput::modified(Key::Char('e')), t0), None);
    assert_eq!(t.pending_kind(), Some(PendingKind::Chord));
    assert_eq!(t.handle_id("e", t0 + ms(50)), Some(Mode::Explorer));
}

#[test]
fn test_escape_changes_nothing() {
    let now = Instant::now();
    for mode in [Mode::Dashboard, Mode::Editor, Mode::Explorer, Mode::Finder] {
        let mut t = terminal_in(mode, now);
        assert_eq!(t.handle_id("Escape", now), None);
        assert_eq!(t.mode(), mode);
    }
}

#[test]
fn test_no_mode_is_stuck() {
    let now = Instant::now();
    for mode in [
        Mode::Dashboard,
        Mode::Editor,
        Mode::Explorer,
        Mode::Finder,
        Mode::Quit,
    ] {
        let mut t = terminal_in(mode, now);
        let left = if mode.accepts_launch_line() {
            t.submit_line("fkvim")
        } else if mode == Mode::Dashboard {
            t.handle_id("i", now)
        } else {
            t.handle_id(":", now);
            t.handle_id("q", now)
        };
        assert!(left.is_some_and(|m| m != mode), "stuck in {:?}", mode);
    }
}
