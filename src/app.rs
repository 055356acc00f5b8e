use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use crossbeam_channel::Sender;
use crossterm::event::{Event, EventStream};
use futures::StreamExt;
use tokio::runtime::Builder;
use tokio::sync::mpsc;

use crate::actors::{ActorHandle, ClockActor};
use crate::clock::Clock;
use crate::config::Config;
use crate::panels::Panels;
use crate::render::RenderState;
use crate::tea::{update, Command, Message, Model};
use crate::{dlog, dlog_debug, dlog_warn, Error, Result};

/// How often the loop re-checks the shutdown flag when idle.
const SHUTDOWN_POLL: Duration = Duration::from_millis(100);

/// Owns the model and processes every event strictly in arrival order.
pub struct LogicThread;

impl LogicThread {
    pub fn run(
        config: Config,
        panels: Arc<Panels>,
        clock: Arc<dyn Clock>,
        state_tx: Sender<RenderState>,
        shutdown: Arc<AtomicBool>,
    ) -> Result<()> {
        // Single worker: events are handled one at a time on this thread.
        Builder::new_current_thread()
            .enable_all()
            .build()?
            .block_on(Self::run_async(config, panels, clock, state_tx, shutdown))
    }

    async fn run_async(
        config: Config,
        panels: Arc<Panels>,
        clock: Arc<dyn Clock>,
        state_tx: Sender<RenderState>,
        shutdown: Arc<AtomicBool>,
    ) -> Result<()> {
        dlog_debug!(
            "LogicThread::run_async chord={:?} command={:?} blink={:?} tick={:?}",
            config.chord_timeout(),
            config.command_timeout(),
            config.blink_interval(),
            config.tick_interval()
        );
        let mut model = Model::new(&config, panels, clock);

        let (msg_tx, mut msg_rx) = mpsc::unbounded_channel::<Message>();
        let actors = vec![ClockActor::new(msg_tx.clone(), config.tick_interval()).spawn()];
        let mut events = EventStream::new();

        loop {
            if shutdown.load(Ordering::Relaxed) {
                break;
            }

            if model.dirty {
                send_state(&state_tx, &mut model);
            }

            let msg = tokio::select! {
                // Keyboard input first when both are ready.
                biased;
                event = events.next() => match event {
                    Some(Ok(Event::Key(key))) => Message::Key(key),
                    Some(Ok(Event::Resize(w, h))) => Message::Resize(w, h),
                    Some(Ok(_)) => continue,
                    Some(Err(e)) => {
                        dlog_warn!("Terminal event error: {}", e);
                        continue;
                    }
                    None => {
                        dlog_warn!("Terminal event stream ended");
                        break;
                    }
                },
                Some(msg) = msg_rx.recv() => msg,
                _ = tokio::time::sleep(SHUTDOWN_POLL) => continue,
            };

            if process(&mut model, msg, &msg_tx) {
                shutdown.store(true, Ordering::Relaxed);
                break;
            }
        }

        shutdown_actors(&actors);
        dlog!("Logic thread stopped in {:?}", model.terminal.mode());
        Ok(())
    }
}

/// Run one message through `update` and execute its commands.
///
/// Returns true when the application should quit.
pub fn process(model: &mut Model, msg: Message, msg_tx: &mpsc::UnboundedSender<Message>) -> bool {
    for cmd in update(model, msg) {
        if execute_command(cmd, msg_tx) {
            return true;
        }
    }
    false
}

fn execute_command(cmd: Command, msg_tx: &mpsc::UnboundedSender<Message>) -> bool {
    match cmd {
        Command::OpenLink { url } => {
            dlog_debug!("Command::OpenLink url={}", url);
            let tx = msg_tx.clone();
            tokio::spawn(async move {
                let target = url.clone();
                let result = tokio::task::spawn_blocking(move || open::that(&target))
                    .await
                    .map_err(|e| Error::TaskJoin(e.to_string()))
                    .and_then(|r| r.map_err(Error::from));
                let msg = match result {
                    Ok(()) => Message::LinkOpened(url),
                    Err(e) => {
                        dlog_warn!("OpenLink failed: {} - {}", url, e);
                        Message::LinkOpenFailed {
                            url,
                            error: e.to_string(),
                        }
                    }
                };
                let _ = tx.send(msg);
            });
        }

        Command::Quit => {
            dlog_debug!("Command::Quit");
            return true;
        }
    }

    false
}

/// Hand a snapshot to the render thread without blocking.
///
/// When the slot is still occupied the model stays dirty and the next
/// message retries.
fn send_state(state_tx: &Sender<RenderState>, model: &mut Model) {
    if state_tx.try_send(model.snapshot()).is_ok() {
        model.dirty = false;
    }
}

fn shutdown_actors(actors: &[ActorHandle]) {
    dlog_debug!("Shutting down {} actors", actors.len());
    for actor in actors {
        actor.shutdown();
    }
}
