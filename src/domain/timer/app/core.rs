use std::sync::Arc;

use snafu::prelude::*;

use crate::domain::repository::{AlarmRepository, DurationRepository};
use crate::domain::timer::app::service::{
    MuteService, QueryService, ResetService, SelectModeService, ShutdownService, ToggleService,
    WatchService,
};
use crate::domain::timer::inbound::{
    MutePort, QueryPort, ResetPort, SelectModePort, ShutdownPort, TogglePort, WatchPort,
};
use crate::domain::timer::outbound::AlarmPort;
use crate::domain::timer::worker::{self, SpawnWorkerError};

/// Entrance to the domain logic, providing ports for external adapters.
pub struct ApplicationCore {
    pub toggle: Arc<dyn TogglePort>,
    pub reset: Arc<dyn ResetPort>,
    pub select_mode: Arc<dyn SelectModePort>,
    pub mute: Arc<dyn MutePort>,
    pub query: Arc<dyn QueryPort>,
    pub watch: Arc<dyn WatchPort>,
    pub shutdown: Arc<dyn ShutdownPort>,
}

impl ApplicationCore {
    /// Initialize the application by injecting external repositories and
    /// adapters. The timer starts idle in focus mode, optionally muted.
    ///
    /// # Errors
    ///
    /// This function will return an error if initialization failed.
    pub async fn setup(
        alarm_port: Arc<dyn AlarmPort>,
        duration_repository: Arc<dyn DurationRepository>,
        alarm_repository: Arc<dyn AlarmRepository>,
        muted: bool,
    ) -> Result<ApplicationCore, SetupApplicationCoreError> {
        let worker = worker::spawn(duration_repository, alarm_repository, alarm_port, muted)
            .await
            .context(WorkerSnafu)?;
        let worker = Arc::new(worker);

        let app = ApplicationCore {
            toggle: Arc::new(ToggleService::new(Arc::clone(&worker))),
            reset: Arc::new(ResetService::new(Arc::clone(&worker))),
            select_mode: Arc::new(SelectModeService::new(Arc::clone(&worker))),
            mute: Arc::new(MuteService::new(Arc::clone(&worker))),
            query: Arc::new(QueryService::new(Arc::clone(&worker))),
            watch: Arc::new(WatchService::new(Arc::clone(&worker))),
            shutdown: Arc::new(ShutdownService::new(worker)),
        };

        Ok(app)
    }
}

/// An error for initializing the application.
#[derive(Debug, Snafu)]
#[non_exhaustive]
pub enum SetupApplicationCoreError {
    #[snafu(display("Could not spawn a background worker"))]
    Worker { source: SpawnWorkerError },
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::path::{Path, PathBuf};

    use tokio::time::Duration;

    use crate::domain::entity::{ModeColor, ModeDuration, TimerMode};
    use crate::domain::repository::alarm::MockAlarmRepository;
    use crate::domain::repository::duration::MockDurationRepository;
    use crate::domain::timer::outbound::{AlarmError, AlarmHandle};

    struct SilentAlarm;

    #[async_trait::async_trait]
    impl AlarmPort for SilentAlarm {
        async fn load(&self, asset: &Path) -> Result<AlarmHandle, AlarmError> {
            Ok(AlarmHandle::new(asset.to_path_buf()))
        }

        async fn play(&self, _handle: &AlarmHandle) -> Result<(), AlarmError> {
            Ok(())
        }

        async fn unload(&self, _handle: AlarmHandle) {}
    }

    async fn new_core() -> ApplicationCore {
        let mut durations = MockDurationRepository::new();
        durations
            .expect_focus_duration()
            .returning(|| Ok(ModeDuration::try_new(1500).unwrap()));
        durations
            .expect_short_break_duration()
            .returning(|| Ok(ModeDuration::try_new(300).unwrap()));
        durations
            .expect_long_break_duration()
            .returning(|| Ok(ModeDuration::try_new(900).unwrap()));

        let mut assets = MockAlarmRepository::new();
        assets
            .expect_alarm_asset()
            .returning(|| Ok(PathBuf::from("alarm.oga")));

        ApplicationCore::setup(
            Arc::new(SilentAlarm),
            Arc::new(durations),
            Arc::new(assets),
            false,
        )
        .await
        .unwrap()
    }

    #[tokio::test(start_paused = true)]
    async fn application_core_ports() {
        let core = new_core().await;

        let response = core.query.query().await;
        assert_eq!(response.mode, TimerMode::Focus);
        assert_eq!(response.color, ModeColor::Red);
        assert_eq!(response.clock, "25:00");
        assert!(!response.running);

        core.toggle.toggle().await;
        tokio::time::sleep(Duration::from_millis(1490 * 1000 + 500)).await;
        let response = core.query.query().await;
        assert_eq!(response.clock, "00:10");
        assert!(response.running);

        core.select_mode.select_mode(TimerMode::ShortBreak).await;
        let response = core.query.query().await;
        assert_eq!(response.mode, TimerMode::ShortBreak);
        assert_eq!(response.clock, "05:00");
        assert!(!response.running);

        tokio::time::sleep(Duration::from_secs(20)).await;
        let response = core.query.query().await;
        assert_eq!(response.clock, "05:00");
        assert_eq!(response.completed, 0);

        core.mute.toggle_mute().await;
        core.reset.reset().await;
        let response = core.query.query().await;
        assert!(response.muted);
        assert_eq!(response.clock, "05:00");

        core.shutdown.shutdown().await;
    }
}
