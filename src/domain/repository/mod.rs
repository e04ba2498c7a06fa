pub mod alarm;
pub mod duration;

pub use alarm::{AlarmRepository, GetAlarmAssetError};
pub use duration::{DurationRepository, GetDurationError};
