use std::path::Path;

use notify_rust::Notification;
use snafu::prelude::*;

use crate::domain::timer::outbound::{AlarmError, AlarmHandle, AlarmPort, AssetMissingSnafu};

/// An [`AlarmPort`] implementation which shows a desktop notification. The
/// asset's file stem is passed as the freedesktop sound name, so the
/// notification server plays the matching themed sound.
#[derive(Debug, Clone)]
pub struct NotificationAlarm {
    app_name: String,
}

impl NotificationAlarm {
    pub fn new(app_name: String) -> Self {
        Self { app_name }
    }

    fn sound_name(asset: &Path) -> Option<&str> {
        asset.file_stem().and_then(|stem| stem.to_str())
    }
}

#[async_trait::async_trait]
impl AlarmPort for NotificationAlarm {
    async fn load(&self, asset: &Path) -> Result<AlarmHandle, AlarmError> {
        ensure!(
            Self::sound_name(asset).is_some(),
            AssetMissingSnafu { path: asset }
        );
        Ok(AlarmHandle::new(asset.to_path_buf()))
    }

    async fn play(&self, handle: &AlarmHandle) -> Result<(), AlarmError> {
        let mut notification = Notification::new();
        notification.appname(&self.app_name);
        notification.summary("Time's up");
        notification.body("The countdown has finished.");

        if let Some(sound) = Self::sound_name(handle.asset()) {
            notification.sound_name(sound);
        }

        let _ = whatever!(
            notification.show_async().await,
            "Could not show notification",
        );

        Ok(())
    }

    async fn unload(&self, _handle: AlarmHandle) {}
}
