use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;

use crate::modal::{Mode, PendingKind};
use crate::navbar::CommandPalette;
use crate::panels::Panels;
use crate::tea::Notification;

/// Render thread frame budget (60 fps).
pub const FRAME_DURATION: Duration = Duration::from_micros(16_666);

static VERSION_COUNTER: AtomicU64 = AtomicU64::new(1);

pub fn next_version() -> u64 {
    VERSION_COUNTER.fetch_add(1, Ordering::Relaxed)
}

/// Immutable snapshot handed from the logic thread to the render thread.
#[derive(Debug, Clone)]
pub struct RenderState {
    pub version: u64,
    pub mode: Mode,
    /// Shown as a which-key style indicator while a follow-up is awaited.
    pub pending: Option<PendingKind>,
    pub input: String,
    pub cursor_visible: bool,
    pub launch_commands: Vec<String>,
    pub palette: Option<CommandPalette>,
    pub notification: Option<Notification>,
    pub panels: Arc<Panels>,
}

impl Default for RenderState {
    fn default() -> Self {
        Self {
            version: 0,
            mode: Mode::Welcome,
            pending: None,
            input: String::new(),
            cursor_visible: true,
            launch_commands: Vec::new(),
            palette: None,
            notification: None,
            panels: Arc::new(Panels::default()),
        }
    }
}
