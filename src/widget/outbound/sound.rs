use std::io::ErrorKind;
use std::path::Path;
use std::process::Stdio;

use snafu::prelude::*;
use tokio::process::Command;

use crate::domain::timer::outbound::{AlarmError, AlarmHandle, AlarmPort, AssetMissingSnafu};

/// Player used when the configuration names none.
pub const DEFAULT_PLAYER: &str = "paplay";

/// An [`AlarmPort`] implementation which plays the asset with an external
/// audio player program.
#[derive(Debug, Clone)]
pub struct SoundAlarm {
    player: String,
}

impl SoundAlarm {
    /// Creates a new [`SoundAlarm`] which plays assets with `player`.
    pub fn new(player: String) -> Self {
        Self { player }
    }
}

impl Default for SoundAlarm {
    fn default() -> Self {
        Self::new(DEFAULT_PLAYER.to_owned())
    }
}

#[async_trait::async_trait]
impl AlarmPort for SoundAlarm {
    async fn load(&self, asset: &Path) -> Result<AlarmHandle, AlarmError> {
        let metadata = match tokio::fs::metadata(asset).await {
            Ok(metadata) => metadata,
            Err(err) if err.kind() == ErrorKind::NotFound => {
                return AssetMissingSnafu { path: asset }.fail();
            }
            Err(err) => {
                return Err(err).whatever_context(format!("Could not inspect {}", asset.display()));
            }
        };

        ensure!(metadata.is_file(), AssetMissingSnafu { path: asset });
        Ok(AlarmHandle::new(asset.to_path_buf()))
    }

    async fn play(&self, handle: &AlarmHandle) -> Result<(), AlarmError> {
        let mut child = whatever!(
            Command::new(&self.player)
                .arg(handle.asset())
                .stdin(Stdio::null())
                .stdout(Stdio::null())
                .stderr(Stdio::null())
                .spawn(),
            "Could not start audio player {}",
            self.player
        );

        let player = self.player.clone();
        tokio::spawn(async move {
            match child.wait().await {
                Ok(status) if !status.success() => {
                    tracing::warn!(%player, %status, "Audio player exited abnormally");
                }
                Ok(_) => {}
                Err(err) => tracing::warn!(%player, %err, "Could not wait for audio player"),
            }
        });

        Ok(())
    }

    async fn unload(&self, handle: AlarmHandle) {
        tracing::debug!(asset = %handle.asset().display(), "Alarm unloaded");
    }
}
