use std::sync::Arc;

use snafu::prelude::*;

use crate::domain::entity::ModeDuration;
use crate::domain::repository::duration::{GetDurationError, InvalidSnafu};
use crate::domain::repository::DurationRepository;
use crate::widget::config::Configuration;

/// A [`DurationRepository`] implementation which reads configuration files.
pub struct DurationConfiguration {
    config: Arc<Configuration>,
}

impl DurationConfiguration {
    /// Creates a new [`DurationConfiguration`].
    pub fn new(config: Arc<Configuration>) -> Self {
        Self { config }
    }
}

#[async_trait::async_trait]
impl DurationRepository for DurationConfiguration {
    async fn focus_duration(&self) -> Result<ModeDuration, GetDurationError> {
        ModeDuration::try_new(self.config.duration.focus).context(InvalidSnafu)
    }

    async fn short_break_duration(&self) -> Result<ModeDuration, GetDurationError> {
        ModeDuration::try_new(self.config.duration.short_break).context(InvalidSnafu)
    }

    async fn long_break_duration(&self) -> Result<ModeDuration, GetDurationError> {
        ModeDuration::try_new(self.config.duration.long_break).context(InvalidSnafu)
    }
}
