use std::pin::Pin;

use tokio::time::{Duration, Instant, Sleep};

/// Interval between two ticks.
pub const TICK_PERIOD: Duration = Duration::from_secs(1);

/// The single pending tick of a running countdown. Each tick is scheduled
/// relative to the moment it is armed, not to an absolute deadline. Dropping a
/// [`Countdown`] cancels the pending tick.
#[derive(Debug)]
pub struct Countdown {
    sleep: Pin<Box<Sleep>>,
}

impl Countdown {
    /// Arm a tick that fires one [`TICK_PERIOD`] from now.
    pub fn schedule() -> Self {
        Self {
            sleep: Box::pin(tokio::time::sleep(TICK_PERIOD)),
        }
    }

    /// Returns the instant the pending tick fires at.
    #[cfg(test)]
    pub fn deadline(&self) -> Instant {
        self.sleep.deadline()
    }

    /// Wait until the pending tick fires. Cancel safe.
    pub async fn elapsed(&mut self) {
        self.sleep.as_mut().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn countdown_elapsed() {
        let start = Instant::now();
        let mut countdown = Countdown::schedule();
        assert_eq!(countdown.deadline(), start + TICK_PERIOD);
        countdown.elapsed().await;
        assert_eq!(Instant::now(), start + TICK_PERIOD);
    }

    #[tokio::test(start_paused = true)]
    async fn countdown_is_relative() {
        tokio::time::sleep(Duration::from_millis(300)).await;
        let now = Instant::now();
        let countdown = Countdown::schedule();
        assert_eq!(countdown.deadline(), now + TICK_PERIOD);
    }
}
