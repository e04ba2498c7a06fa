pub mod clock;
pub mod duration;
pub mod mode;
pub mod session;
pub mod state;

pub use clock::format_time;
pub use duration::{ModeDuration, ModeDurations};
pub use mode::{ModeColor, TimerMode};
pub use session::{SessionCount, SESSIONS_PER_SET};
pub use state::{Completion, TimerSnapshot, TimerState};
