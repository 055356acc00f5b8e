//! Background tasks feeding the logic thread.
//!
//! Each actor is an independent tokio task that talks to the logic thread
//! only through `Message`s. Keyboard input is read directly by the logic
//! thread, not through an actor.

pub mod clock;

use tokio_util::sync::CancellationToken;

pub use clock::ClockActor;

/// Handle to a running actor, used for graceful shutdown.
pub struct ActorHandle {
    cancel: CancellationToken,
}

impl ActorHandle {
    pub fn new(cancel: CancellationToken) -> Self {
        Self { cancel }
    }

    /// Signal the actor to stop; it drops its sender on the way out.
    pub fn shutdown(&self) {
        self.cancel.cancel();
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancel.is_cancelled()
    }
}
