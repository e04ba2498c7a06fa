use std::error::Error as StdError;

use snafu::prelude::*;

use crate::domain::entity::duration::{ModeDuration, TryNewModeDurationError};

/// An abstract interface for accessing duration data.
#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait DurationRepository: Send + Sync + 'static {
    /// Get duration of the [`Focus`] mode.
    ///
    /// [`Focus`]: crate::domain::entity::TimerMode::Focus
    ///
    /// # Errors
    ///
    /// This function will return an error if failed to get the duration.
    async fn focus_duration(&self) -> Result<ModeDuration, GetDurationError>;

    /// Get duration of the [`ShortBreak`] mode.
    ///
    /// [`ShortBreak`]: crate::domain::entity::TimerMode::ShortBreak
    ///
    /// # Errors
    ///
    /// This function will return an error if failed to get the duration.
    async fn short_break_duration(&self) -> Result<ModeDuration, GetDurationError>;

    /// Get duration of the [`LongBreak`] mode.
    ///
    /// [`LongBreak`]: crate::domain::entity::TimerMode::LongBreak
    ///
    /// # Errors
    ///
    /// This function will return an error if failed to get the duration.
    async fn long_break_duration(&self) -> Result<ModeDuration, GetDurationError>;
}

/// An error type of accessing the repository of [`ModeDuration`]s.
#[derive(Debug, Snafu)]
#[non_exhaustive]
#[snafu(visibility(pub))]
pub enum GetDurationError {
    #[snafu(display("Could not create an invalid duration"))]
    #[non_exhaustive]
    Invalid { source: TryNewModeDurationError },
    #[snafu(whatever, display("Load duration failed: {message}"))]
    #[non_exhaustive]
    Unknown {
        message: String,
        #[snafu(source(from(Box<dyn StdError>, Some)))]
        source: Option<Box<dyn StdError>>,
    },
}
