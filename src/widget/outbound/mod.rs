mod notification;
mod sound;

pub use notification::NotificationAlarm;
pub use sound::{SoundAlarm, DEFAULT_PLAYER};
