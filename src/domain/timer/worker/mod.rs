mod countdown;
mod handle;
mod routine;
mod state;

pub use handle::WorkerHandle;

use std::sync::Arc;

use snafu::prelude::*;

use crate::domain::entity::{ModeDurations, TimerMode};
use crate::domain::repository::alarm::{AlarmRepository, GetAlarmAssetError};
use crate::domain::repository::duration::{DurationRepository, GetDurationError};
use crate::domain::timer::outbound::{AlarmHandle, AlarmPort};
use crate::tracing_report;

use routine::{WorkerConfig, WorkerContext, WorkerRoutine};

/// Load the configuration, prepare the alarm and spawn the background worker.
///
/// A failure of loading the alarm itself is not fatal: the worker then runs
/// silently.
///
/// # Errors
///
/// This function will return an error if the repositories can't provide a
/// valid configuration.
pub async fn spawn(
    duration_repository: Arc<dyn DurationRepository>,
    alarm_repository: Arc<dyn AlarmRepository>,
    alarm: Arc<dyn AlarmPort>,
    muted: bool,
) -> Result<WorkerHandle, SpawnWorkerError> {
    let durations = load_durations(duration_repository).await?;
    let config = WorkerConfig { durations, muted };
    let sound = load_sound(alarm_repository, Arc::clone(&alarm)).await?;

    let (requester, commands) = tokio::sync::mpsc::channel(1);
    let timer = config.initial_state();
    let (updates, watcher) = tokio::sync::watch::channel(timer.snapshot());

    let handle = WorkerRoutine::spawn(WorkerContext {
        timer,
        commands,
        updates,
        alarm,
        sound,
    });

    Ok(WorkerHandle::new(requester, watcher, handle))
}

async fn load_durations(
    duration_repository: Arc<dyn DurationRepository>,
) -> Result<ModeDurations, SpawnWorkerError> {
    let focus = duration_repository
        .focus_duration()
        .await
        .context(DurationConfigSnafu {
            key: TimerMode::Focus,
        })?;
    let short_break = duration_repository
        .short_break_duration()
        .await
        .context(DurationConfigSnafu {
            key: TimerMode::ShortBreak,
        })?;
    let long_break = duration_repository
        .long_break_duration()
        .await
        .context(DurationConfigSnafu {
            key: TimerMode::LongBreak,
        })?;

    Ok(ModeDurations {
        focus,
        short_break,
        long_break,
    })
}

async fn load_sound(
    alarm_repository: Arc<dyn AlarmRepository>,
    alarm: Arc<dyn AlarmPort>,
) -> Result<Option<AlarmHandle>, SpawnWorkerError> {
    let asset = alarm_repository
        .alarm_asset()
        .await
        .context(AlarmConfigSnafu)?;

    match alarm.load(&asset).await {
        Ok(handle) => {
            tracing::debug!(asset = %asset.display(), "Alarm loaded");
            Ok(Some(handle))
        }
        Err(err) => {
            tracing_report!(err);
            Ok(None)
        }
    }
}

/// An error for spawning the background worker.
#[derive(Debug, Snafu)]
#[non_exhaustive]
pub enum SpawnWorkerError {
    #[snafu(display("Could not load duration configuration for {key:?} from repository"))]
    DurationConfig {
        key: TimerMode,
        source: GetDurationError,
    },
    #[snafu(display("Could not load alarm configuration from repository"))]
    AlarmConfig { source: GetAlarmAssetError },
}
