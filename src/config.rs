use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::{dlog_debug, Error, Result};

pub const DEFAULT_CHORD_TIMEOUT_MS: u64 = 1000;
pub const DEFAULT_COMMAND_TIMEOUT_MS: u64 = 1000;
pub const DEFAULT_BLINK_INTERVAL_MS: u64 = 530;
pub const DEFAULT_TICK_INTERVAL_MS: u64 = 50;

fn default_chord_timeout_ms() -> u64 {
    DEFAULT_CHORD_TIMEOUT_MS
}

fn default_command_timeout_ms() -> u64 {
    DEFAULT_COMMAND_TIMEOUT_MS
}

fn default_blink_interval_ms() -> u64 {
    DEFAULT_BLINK_INTERVAL_MS
}

fn default_tick_interval_ms() -> u64 {
    DEFAULT_TICK_INTERVAL_MS
}

fn default_launch_commands() -> Vec<String> {
    ["fkvim", "nvim", "neovim"]
        .into_iter()
        .map(String::from)
        .collect()
}

#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct Config {
    #[serde(default = "default_chord_timeout_ms")]
    pub chord_timeout_ms: u64,
    #[serde(default = "default_command_timeout_ms")]
    pub command_timeout_ms: u64,
    #[serde(default = "default_blink_interval_ms")]
    pub blink_interval_ms: u64,
    #[serde(default = "default_tick_interval_ms")]
    pub tick_interval_ms: u64,
    #[serde(default = "default_launch_commands")]
    pub launch_commands: Vec<String>,
    pub panels_dir: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            chord_timeout_ms: DEFAULT_CHORD_TIMEOUT_MS,
            command_timeout_ms: DEFAULT_COMMAND_TIMEOUT_MS,
            blink_interval_ms: DEFAULT_BLINK_INTERVAL_MS,
            tick_interval_ms: DEFAULT_TICK_INTERVAL_MS,
            launch_commands: default_launch_commands(),
            panels_dir: None,
        }
    }
}

impl Config {
    pub fn demo_dir() -> Result<PathBuf> {
        Ok(dirs::home_dir().ok_or(Error::NoHomeDir)?.join(".fkvim-demo"))
    }

    pub fn config_path() -> Result<PathBuf> {
        Ok(Self::demo_dir()?.join("config.toml"))
    }

    pub fn chord_timeout(&self) -> Duration {
        Duration::from_millis(self.chord_timeout_ms)
    }

    pub fn command_timeout(&self) -> Duration {
        Duration::from_millis(self.command_timeout_ms)
    }

    pub fn blink_interval(&self) -> Duration {
        Duration::from_millis(self.blink_interval_ms)
    }

    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_interval_ms)
    }

    pub fn panels_path(&self) -> Option<PathBuf> {
        self.panels_dir.as_deref().map(expand_tilde)
    }

    /// Load from the default location, falling back to defaults when absent.
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        dlog_debug!("Config::load_from path={}", path.display());
        if !path.exists() {
            dlog_debug!("Config file not found, using defaults");
            return Ok(Self::default());
        }
        let config: Self = toml::from_str(&fs::read_to_string(path)?)?;
        config.validate()?;
        dlog_debug!(
            "Config loaded: chord={}ms command={}ms blink={}ms commands={:?} panels={:?}",
            config.chord_timeout_ms,
            config.command_timeout_ms,
            config.blink_interval_ms,
            config.launch_commands,
            config.panels_dir
        );
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        let durations = [
            ("chord_timeout_ms", self.chord_timeout_ms),
            ("command_timeout_ms", self.command_timeout_ms),
            ("blink_interval_ms", self.blink_interval_ms),
            ("tick_interval_ms", self.tick_interval_ms),
        ];
        for (name, value) in durations {
            if value == 0 {
                return Err(Error::Validation(format!("{name} must be > 0")));
            }
        }
        if self.launch_commands.iter().all(|c| c.trim().is_empty()) {
            return Err(Error::Validation(
                "launch_commands must name at least one command".to_string(),
            ));
        }
        Ok(())
    }
}

fn expand_tilde(path: &str) -> PathBuf {
    if let Some(rest) = path.strip_prefix("~/") {
        if let Some(home) = dirs::home_dir() {
            return home.join(rest);
        }
    }
    PathBuf::from(path)
}
