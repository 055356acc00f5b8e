//! Periodic tick source.
//!
//! Ticks carry no timestamp: the update function reads the model's clock,
//! so the same code path serves the real clock and a manual test clock.

use std::time::Duration;

use tokio::sync::mpsc;
use tokio::time::MissedTickBehavior;
use tokio_util::sync::CancellationToken;

use crate::dlog_debug;
use crate::tea::Message;

use super::ActorHandle;

/// Emits `Message::Tick` every `interval` until cancelled.
pub struct ClockActor {
    msg_tx: mpsc::UnboundedSender<Message>,
    interval: Duration,
}

impl ClockActor {
    pub fn new(msg_tx: mpsc::UnboundedSender<Message>, interval: Duration) -> Self {
        Self { msg_tx, interval }
    }

    pub fn spawn(self) -> ActorHandle {
        let cancel = CancellationToken::new();
        let cancel_clone = cancel.clone();

        dlog_debug!("ClockActor::spawn interval={:?}", self.interval);

        tokio::spawn(async move {
            let mut interval = tokio::time::interval(self.interval);
            // A stalled logic thread should get one catch-up tick, not a burst.
            interval.set_missed_tick_behavior(MissedTickBehavior::Delay);

            loop {
                tokio::select! {
                    _ = cancel_clone.cancelled() => {
                        dlog_debug!("ClockActor cancelled");
                        break;
                    }
                    _ = interval.tick() => {
                        if self.msg_tx.send(Message::Tick).is_err() {
                            dlog_debug!("ClockActor: message channel closed");
                            break;
                        }
                    }
                }
            }
        });

        ActorHandle::new(cancel)
    }
}
