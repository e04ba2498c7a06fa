use std::path::PathBuf;
use std::sync::Arc;

use snafu::prelude::*;

use crate::domain::repository::alarm::{EmptySnafu, GetAlarmAssetError};
use crate::domain::repository::AlarmRepository;
use crate::widget::config::Configuration;

/// An [`AlarmRepository`] implementation which reads configuration files.
pub struct AlarmConfiguration {
    config: Arc<Configuration>,
}

impl AlarmConfiguration {
    /// Creates a new [`AlarmConfiguration`].
    pub fn new(config: Arc<Configuration>) -> Self {
        Self { config }
    }
}

#[async_trait::async_trait]
impl AlarmRepository for AlarmConfiguration {
    async fn alarm_asset(&self) -> Result<PathBuf, GetAlarmAssetError> {
        let asset = &self.config.alarm.asset;
        ensure!(!asset.as_os_str().is_empty(), EmptySnafu);
        Ok(asset.clone())
    }
}
