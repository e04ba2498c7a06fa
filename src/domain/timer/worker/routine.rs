use std::sync::Arc;

use tokio::sync::mpsc::Receiver;
use tokio::sync::watch::Sender;
use tokio::task::JoinHandle;

use crate::domain::entity::{ModeDurations, TimerSnapshot, TimerState};
use crate::domain::timer::outbound::{AlarmHandle, AlarmPort};
use crate::domain::timer::worker::handle::Command;
use crate::domain::timer::worker::state::WorkerState;
use crate::tracing_report;

/// A type that stores configurations required by [`WorkerRoutine`]
/// initialization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkerConfig {
    pub durations: ModeDurations,
    pub muted: bool,
}

impl WorkerConfig {
    /// Build the initial [`TimerState`].
    pub fn initial_state(&self) -> TimerState {
        let mut timer = TimerState::new(self.durations);
        if self.muted {
            timer.toggle_mute();
        }
        timer
    }
}

/// A [`WorkerContext`] stores all objects relavent to the [`WorkerRoutine`]
/// and the business logic.
pub struct WorkerContext {
    pub timer: TimerState,
    pub commands: Receiver<Command>,
    pub updates: Sender<TimerSnapshot>,
    pub alarm: Arc<dyn AlarmPort>,
    pub sound: Option<AlarmHandle>,
}

impl WorkerContext {
    /// Publish the current state to every watcher.
    pub fn publish(&self) {
        self.updates.send_replace(self.timer.snapshot());
    }

    /// Start playing the alarm without waiting for it. Failures are only
    /// logged.
    pub fn sound_alarm(&self) {
        let Some(sound) = self.sound.clone() else {
            tracing::debug!("No alarm loaded, skip playing");
            return;
        };

        let alarm = Arc::clone(&self.alarm);
        tokio::spawn(async move {
            if let Err(err) = alarm.play(&sound).await {
                tracing_report!(err);
            }
        });
    }
}

/// A type responsible for the timer's main business logic. A [`WorkerRoutine`]
/// runs on background, receiving [`Command`]s from [`WorkerHandle`].
///
/// [`WorkerHandle`]: crate::domain::timer::worker::WorkerHandle
pub struct WorkerRoutine {
    context: WorkerContext,
    state: WorkerState,
}

impl WorkerRoutine {
    /// Spawn a running [`WorkerRoutine`] on background.
    pub fn spawn(context: WorkerContext) -> JoinHandle<()> {
        tokio::spawn(async {
            let mut worker = Self {
                context,
                state: WorkerState::new(),
            };
            worker.run().await;
        })
    }

    /// Main part of its business logic.
    #[tracing::instrument(name = "worker", skip(self))]
    async fn run(&mut self) {
        while !self.state.is_stopped() {
            self.state.run(&mut self.context).await;
        }

        if let Some(sound) = self.context.sound.take() {
            self.context.alarm.unload(sound).await;
        }

        tracing::info!("Worker stopped");
    }
}
