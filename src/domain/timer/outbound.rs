use std::error::Error as StdError;
use std::path::{Path, PathBuf};

use snafu::prelude::*;

/// A public port for sounding the alarm when a countdown completes.
#[async_trait::async_trait]
pub trait AlarmPort: Send + Sync + 'static {
    /// Prepare the sound asset for playing.
    ///
    /// # Errors
    ///
    /// This function will return an error if the asset can't be used.
    async fn load(&self, asset: &Path) -> Result<AlarmHandle, AlarmError>;

    /// Start playing a loaded asset. Implementations must not wait for the
    /// playback to finish.
    ///
    /// # Errors
    ///
    /// This function will return an error if the playback can't be started.
    async fn play(&self, handle: &AlarmHandle) -> Result<(), AlarmError>;

    /// Release a loaded asset.
    async fn unload(&self, handle: AlarmHandle);
}

/// A loaded alarm sound.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlarmHandle {
    asset: PathBuf,
}

impl AlarmHandle {
    /// Creates a new [`AlarmHandle`].
    pub fn new(asset: PathBuf) -> Self {
        Self { asset }
    }

    /// Returns the path of the loaded asset.
    pub fn asset(&self) -> &Path {
        &self.asset
    }
}

/// An error type of the alarm operations.
#[derive(Debug, Snafu)]
#[non_exhaustive]
#[snafu(visibility(pub))]
pub enum AlarmError {
    #[snafu(display("Could not find alarm asset {}", path.display()))]
    AssetMissing { path: PathBuf },
    #[snafu(whatever, display("Could not sound the alarm: {message}"))]
    Unknown {
        message: String,
        #[snafu(source(from(Box<dyn StdError>, Some)))]
        source: Option<Box<dyn StdError>>,
    },
}
