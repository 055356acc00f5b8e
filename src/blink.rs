//! Cursor blink state for the startup prompt.
//!
//! The blink runs for the whole lifetime of the UI regardless of mode; the
//! renderer decides whether the cursor is visible at all.

use std::time::{Duration, Instant};

/// Shortest toggle period; a zero interval would never catch up.
const MIN_INTERVAL: Duration = Duration::from_millis(1);

#[derive(Debug, Clone)]
pub struct CursorBlink {
    visible: bool,
    interval: Duration,
    next_toggle: Instant,
}

impl CursorBlink {
    pub fn new(interval: Duration, started: Instant) -> Self {
        let interval = interval.max(MIN_INTERVAL);
        Self {
            visible: true,
            interval,
            next_toggle: started + interval,
        }
    }

    pub fn visible(&self) -> bool {
        self.visible
    }

    /// Apply every toggle boundary up to and including `now`.
    ///
    /// Returns the number of toggles applied, so a late tick catches up
    /// instead of drifting.
    pub fn advance_to(&mut self, now: Instant) -> u32 {
        let mut toggles = 0;
        while now >= self.next_toggle {
            self.visible = !self.visible;
            self.next_toggle += self.interval;
            toggles += 1;
        }
        toggles
    }
}
