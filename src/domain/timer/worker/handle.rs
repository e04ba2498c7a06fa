use tokio::sync::mpsc::Sender;
use tokio::sync::oneshot::{self, Sender as OneshotSender};
use tokio::sync::watch::Receiver;
use tokio::sync::Mutex;
use tokio::task::JoinHandle;

use crate::domain::entity::{TimerMode, TimerSnapshot};

/// Actions that a [`WorkerRoutine`] runs.
///
/// [`WorkerRoutine`]: crate::domain::timer::worker::routine::WorkerRoutine
#[derive(Debug)]
pub enum Command {
    Toggle,
    Reset,
    SelectMode {
        mode: TimerMode,
    },
    ToggleMute,
    Query {
        responder: OneshotSender<TimerSnapshot>,
    },
    Stop,
}

/// Handle that controls a [`WorkerRoutine`].
///
/// [`WorkerRoutine`]: crate::domain::timer::worker::routine::WorkerRoutine
#[derive(Debug)]
pub struct WorkerHandle {
    requester: Sender<Command>,
    updates: Receiver<TimerSnapshot>,
    routine: Mutex<Option<JoinHandle<()>>>,
}

impl WorkerHandle {
    /// Creates a new [`WorkerHandle`].
    pub fn new(
        requester: Sender<Command>,
        updates: Receiver<TimerSnapshot>,
        routine: JoinHandle<()>,
    ) -> Self {
        Self {
            requester,
            updates,
            routine: Mutex::new(Some(routine)),
        }
    }

    /// Send [`Command::Toggle`] to the background worker and start or pause
    /// the countdown.
    pub async fn toggle(&self) {
        self.send(Command::Toggle).await;
    }

    /// Send [`Command::Reset`] to the background worker and refill the
    /// countdown of the current mode.
    pub async fn reset(&self) {
        self.send(Command::Reset).await;
    }

    /// Send [`Command::SelectMode`] to the background worker and switch to
    /// `mode`.
    pub async fn select_mode(&self, mode: TimerMode) {
        self.send(Command::SelectMode { mode }).await;
    }

    /// Send [`Command::ToggleMute`] to the background worker.
    pub async fn toggle_mute(&self) {
        self.send(Command::ToggleMute).await;
    }

    /// Send [`Command::Query`] to the background worker to get the current
    /// state. Once the worker has stopped, the last published state is
    /// returned instead.
    pub async fn query(&self) -> TimerSnapshot {
        let (responder, receiver) = oneshot::channel();
        if self.send(Command::Query { responder }).await {
            if let Ok(res) = receiver.await {
                return res;
            }
        }
        *self.updates.borrow()
    }

    /// Get a receiver of every state published by the background worker.
    pub fn watch(&self) -> Receiver<TimerSnapshot> {
        let mut updates = self.updates.clone();
        updates.mark_unchanged();
        updates
    }

    /// Send [`Command::Stop`] to the background worker and wait until it has
    /// released its resources. Calling it more than once is harmless.
    pub async fn shutdown(&self) {
        let Some(routine) = self.routine.lock().await.take() else {
            return;
        };

        // Fails only if the routine has already died; the join below reports it.
        let _ = self.requester.send(Command::Stop).await;

        if let Err(err) = routine.await {
            tracing::error!(%err, "Worker terminated abnormally");
        }
    }

    /// Returns `false` if the worker has already stopped and the command is
    /// dropped.
    async fn send(&self, command: Command) -> bool {
        match self.requester.send(command).await {
            Ok(_) => true,
            Err(err) => {
                tracing::warn!(command = ?err.0, "Worker is stopped, command dropped");
                false
            }
        }
    }
}
