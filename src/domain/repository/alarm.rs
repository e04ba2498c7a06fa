use std::error::Error as StdError;
use std::path::PathBuf;

use snafu::prelude::*;

/// An abstract interface for locating the alarm sound asset.
#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait AlarmRepository: Send + Sync + 'static {
    /// Get the path of the sound played when a countdown completes.
    ///
    /// # Errors
    ///
    /// This function will return an error if the path is not configured
    /// properly.
    async fn alarm_asset(&self) -> Result<PathBuf, GetAlarmAssetError>;
}

/// An error type of accessing the repository of alarm assets.
#[derive(Debug, Snafu)]
#[non_exhaustive]
#[snafu(visibility(pub))]
pub enum GetAlarmAssetError {
    #[snafu(display("Alarm asset path must be non-empty"))]
    #[non_exhaustive]
    Empty,
    #[snafu(whatever, display("Load alarm asset failed: {message}"))]
    #[non_exhaustive]
    Unknown {
        message: String,
        #[snafu(source(from(Box<dyn StdError>, Some)))]
        source: Option<Box<dyn StdError>>,
    },
}
