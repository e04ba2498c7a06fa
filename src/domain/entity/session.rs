/// Number of focus sessions that make up one set. A long break follows every
/// completed set.
pub const SESSIONS_PER_SET: u64 = 4;

/// Counter of completed focus sessions.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord)]
pub struct SessionCount(u64);

impl SessionCount {
    /// Creates a new [`SessionCount`] starting at `completed`.
    #[cfg(test)]
    pub fn new(completed: u64) -> Self {
        Self(completed)
    }

    /// Returns the total number of completed sessions.
    pub fn completed(self) -> u64 {
        self.0
    }

    /// Count one more completed session.
    pub fn increment(&mut self) {
        self.0 += 1;
    }

    /// Sessions completed in the current, unfinished set.
    pub fn filled(self) -> u64 {
        self.0 % SESSIONS_PER_SET
    }

    /// Number of fully completed sets.
    pub fn sets(self) -> u64 {
        self.0 / SESSIONS_PER_SET
    }

    /// Returns `true` if the last completed session closed a set.
    pub fn is_set_complete(self) -> bool {
        self.0 > 0 && self.filled() == 0
    }
}
