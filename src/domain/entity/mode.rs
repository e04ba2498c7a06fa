use std::fmt::{Display, Formatter, Result as FmtResult};

/// The phase the timer is currently counting down.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TimerMode {
    Focus,
    ShortBreak,
    LongBreak,
}

impl TimerMode {
    /// All modes in the order they are offered for selection.
    pub const ALL: [TimerMode; 3] = [Self::Focus, Self::ShortBreak, Self::LongBreak];

    /// Get the [`TimerMode`] a freshly created timer starts with.
    pub fn initial() -> Self {
        Self::Focus
    }

    /// Get the color used when displaying this mode.
    pub fn color(self) -> ModeColor {
        match self {
            Self::Focus => ModeColor::Red,
            Self::ShortBreak => ModeColor::Green,
            Self::LongBreak => ModeColor::Blue,
        }
    }
}

impl Display for TimerMode {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            Self::Focus => f.pad("Focus"),
            Self::ShortBreak => f.pad("Short"),
            Self::LongBreak => f.pad("Long"),
        }
    }
}

/// Static display color of a [`TimerMode`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModeColor {
    Red,
    Green,
    Blue,
}
