use snafu::prelude::*;

use crate::domain::entity::TimerMode;

/// The duration of one mode, in whole seconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct ModeDuration(u64);

impl ModeDuration {
    /// Try to create a [`ModeDuration`] from a u64 integer.
    ///
    /// # Errors
    ///
    /// This function will return an error if the integer is zero.
    pub fn try_new(seconds: u64) -> Result<Self, TryNewModeDurationError> {
        ensure!(seconds > 0, ZeroSnafu);
        Ok(Self(seconds))
    }

    /// Returns the number of seconds of this [`ModeDuration`].
    pub fn seconds(self) -> u64 {
        self.0
    }
}

impl TryFrom<u64> for ModeDuration {
    type Error = TryNewModeDurationError;

    fn try_from(value: u64) -> Result<Self, Self::Error> {
        Self::try_new(value)
    }
}

/// An error type of creating a [`ModeDuration`].
#[derive(Debug, Clone, Snafu, PartialEq, Eq)]
#[non_exhaustive]
pub enum TryNewModeDurationError {
    #[snafu(display("Duration must be greater than zero"))]
    #[non_exhaustive]
    Zero,
}

/// Durations of every [`TimerMode`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ModeDurations {
    pub focus: ModeDuration,
    pub short_break: ModeDuration,
    pub long_break: ModeDuration,
}

impl ModeDurations {
    /// Get the duration corresponding to mode.
    pub fn duration(&self, mode: TimerMode) -> ModeDuration {
        match mode {
            TimerMode::Focus => self.focus,
            TimerMode::ShortBreak => self.short_break,
            TimerMode::LongBreak => self.long_break,
        }
    }
}

impl Default for ModeDurations {
    /// 25 minutes of focus, 5 minutes of short break and 15 minutes of long
    /// break.
    fn default() -> Self {
        Self {
            focus: ModeDuration(25 * 60),
            short_break: ModeDuration(5 * 60),
            long_break: ModeDuration(15 * 60),
        }
    }
}
