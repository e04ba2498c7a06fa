use tokio::sync::watch::Receiver;

use crate::domain::entity::{format_time, ModeColor, TimerMode, TimerSnapshot};

/// A public port for starting or pausing the countdown.
#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait TogglePort: Send + Sync + 'static {
    /// Do the start/pause operation.
    async fn toggle(&self);
}

/// A public port for restarting the countdown of the current mode.
#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait ResetPort: Send + Sync + 'static {
    /// Do the reset operation.
    async fn reset(&self);
}

/// A public port for switching to another mode.
#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait SelectModePort: Send + Sync + 'static {
    /// Do the mode selection.
    async fn select_mode(&self, mode: TimerMode);
}

/// A public port for muting or unmuting the alarm.
#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait MutePort: Send + Sync + 'static {
    /// Do the mute toggling operation.
    async fn toggle_mute(&self);
}

/// A public port for querying the current state.
#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait QueryPort: Send + Sync + 'static {
    /// Do the query operation.
    async fn query(&self) -> QueryResponse;
}

/// A public port for observing every state change.
#[cfg_attr(test, mockall::automock)]
pub trait WatchPort: Send + Sync + 'static {
    /// Subscribe to state changes. The receiver starts with the latest state
    /// marked as seen.
    fn watch(&self) -> Receiver<TimerSnapshot>;
}

/// A public port for tearing the timer down.
#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait ShutdownPort: Send + Sync + 'static {
    /// Stop the countdown and release the alarm. Waits until the timer has
    /// shut down.
    async fn shutdown(&self);
}

/// Everything shown to the user about the timer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryResponse {
    pub mode: TimerMode,
    pub color: ModeColor,
    /// Remaining time formatted as `MM:SS`.
    pub clock: String,
    pub running: bool,
    pub muted: bool,
    /// Sessions completed in the current set.
    pub filled: u64,
    /// Completed sets.
    pub sets: u64,
    /// Completed sessions in total.
    pub completed: u64,
}

impl From<TimerSnapshot> for QueryResponse {
    fn from(value: TimerSnapshot) -> Self {
        Self {
            mode: value.mode,
            color: value.mode.color(),
            clock: format_time(value.remaining),
            running: value.running,
            muted: value.muted,
            filled: value.sessions.filled(),
            sets: value.sessions.sets(),
            completed: value.sessions.completed(),
        }
    }
}
