use crate::domain::entity::{ModeDurations, SessionCount, TimerMode};

/// The timer's state machine. It owns the current mode, the remaining time,
/// the running and mute flags and the completed session counter.
///
/// Every mode change stops the timer and refills the remaining time with the
/// new mode's duration, so `remaining` never exceeds the current mode's
/// duration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimerState {
    durations: ModeDurations,
    mode: TimerMode,
    remaining: u64,
    running: bool,
    sessions: SessionCount,
    muted: bool,
}

impl TimerState {
    /// Creates a new [`TimerState`], idle in the initial mode.
    pub fn new(durations: ModeDurations) -> Self {
        let mode = TimerMode::initial();
        Self {
            durations,
            mode,
            remaining: durations.duration(mode).seconds(),
            running: false,
            sessions: SessionCount::default(),
            muted: false,
        }
    }

    pub fn mode(&self) -> TimerMode {
        self.mode
    }

    pub fn remaining(&self) -> u64 {
        self.remaining
    }

    /// Full duration of the current mode in seconds.
    pub fn total(&self) -> u64 {
        self.durations.duration(self.mode).seconds()
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn is_muted(&self) -> bool {
        self.muted
    }

    pub fn sessions(&self) -> SessionCount {
        self.sessions
    }

    /// Start the countdown if it is paused, pause it otherwise.
    pub fn toggle(&mut self) {
        self.running = !self.running;
    }

    /// Stop the countdown and refill the remaining time of the current mode.
    pub fn reset(&mut self) {
        self.running = false;
        self.remaining = self.total();
    }

    /// Switch to `mode`, discarding the progress of the current countdown.
    /// Selecting the active mode resets it.
    pub fn select_mode(&mut self, mode: TimerMode) {
        self.mode = mode;
        self.reset();
    }

    /// Mute or unmute the alarm.
    pub fn toggle_mute(&mut self) {
        self.muted = !self.muted;
    }

    /// Advance the countdown by one second. Returns the [`Completion`] if the
    /// countdown has reached zero while running.
    pub fn tick(&mut self) -> Option<Completion> {
        if !self.running {
            return None;
        }

        self.remaining = self.remaining.saturating_sub(1);

        if self.remaining == 0 {
            Some(self.complete())
        } else {
            None
        }
    }

    fn complete(&mut self) -> Completion {
        let finished = self.mode;
        let next = match finished {
            TimerMode::Focus => {
                self.sessions.increment();
                if self.sessions.is_set_complete() {
                    TimerMode::LongBreak
                } else {
                    TimerMode::ShortBreak
                }
            }
            TimerMode::ShortBreak | TimerMode::LongBreak => TimerMode::Focus,
        };

        self.select_mode(next);

        Completion {
            finished,
            next,
            alarm: !self.muted,
        }
    }

    /// Take a copy of the observable part of this state.
    pub fn snapshot(&self) -> TimerSnapshot {
        TimerSnapshot {
            mode: self.mode,
            remaining: self.remaining,
            total: self.total(),
            running: self.running,
            muted: self.muted,
            sessions: self.sessions,
        }
    }
}

/// Outcome of a countdown reaching zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Completion {
    /// The mode whose countdown has finished.
    pub finished: TimerMode,
    /// The mode the timer has switched to.
    pub next: TimerMode,
    /// Whether the alarm should sound.
    pub alarm: bool,
}

/// A point-in-time copy of a [`TimerState`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimerSnapshot {
    pub mode: TimerMode,
    pub remaining: u64,
    pub total: u64,
    pub running: bool,
    pub muted: bool,
    pub sessions: SessionCount,
}
