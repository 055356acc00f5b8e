//! Configuration files and panel overrides read from disk.

use std::fs;
use std::time::{Duration, Instant};

use tempfile::TempDir;

use fkvim_demo::config::Config;
use fkvim_demo::modal::{DemoTerminal, Mode};
use fkvim_demo::panels::Panels;
use fkvim_demo::Error;

#[test]
fn test_custom_timeouts_and_commands_drive_the_core() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(
        &path,
        r#"
chord_timeout_ms = 250
command_timeout_ms = 2000
launch_commands = ["vi", "FKvim"]
"#,
    )
    .unwrap();

    let config = Config::load_from(&path).unwrap();
    assert_eq!(config.chord_timeout(), Duration::from_millis(250));
    assert_eq!(config.blink_interval_ms, 530, "unset keys keep defaults");

    let mut t = DemoTerminal::from_config(&config);
    assert_eq!(t.submit_line("nvim"), None);
    assert_eq!(t.submit_line("  VI "), Some(Mode::Dashboard));

    let t0 = Instant::now();
    t.handle_id("i", t0);
    t.handle_id(" ", t0);
    assert_eq!(t.handle_id("e", t0 + Duration::from_millis(300)), None);

    t.handle_id(":", t0);
    assert_eq!(
        t.handle_id("q", t0 + Duration::from_millis(1500)),
        Some(Mode::Quit)
    );
}

#[test]
fn test_missing_file_uses_defaults() {
    let dir = TempDir::new().unwrap();
    let config = Config::load_from(&dir.path().join("absent.toml")).unwrap();
    assert_eq!(config, Config::default());
}

#[test]
fn test_invalid_values_are_rejected() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(&path, "tick_interval_ms = 0\n").unwrap();
    assert!(matches!(Config::load_from(&path), Err(Error::Validation(_))));

    fs::write(&path, "chord_timeout_ms = \"soon\"\n").unwrap();
    assert!(matches!(Config::load_from(&path), Err(Error::TomlParse(_))));
}

#[test]
fn test_panel_overrides_replace_only_present_files() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("editor.ans"), "\x1b[32mcustom editor\x1b[0m").unwrap();

    let panels = Panels::load(Some(dir.path())).unwrap();
    let defaults = Panels::default();
    assert_eq!(panels.art(Mode::Editor), Some("\x1b[32mcustom editor\x1b[0m"));
    assert_eq!(panels.art(Mode::Finder), defaults.art(Mode::Finder));
    assert_eq!(panels.art(Mode::Welcome), None);
}

#[test]
fn test_missing_panels_dir_is_an_error() {
    let dir = TempDir::new().unwrap();
    let missing = dir.path().join("nope");
    match Panels::load(Some(&missing)) {
        Err(Error::Panels { path, .. }) => assert_eq!(path, missing),
        other => panic!("expected panels error, got {:?}", other.map(|_| ())),
    }
}
