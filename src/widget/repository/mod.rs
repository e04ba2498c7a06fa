mod alarm;
mod duration;

pub use alarm::AlarmConfiguration;
pub use duration::DurationConfiguration;
