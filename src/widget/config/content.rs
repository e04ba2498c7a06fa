use std::path::PathBuf;

use serde::Deserialize;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Configuration {
    pub duration: DurationSection,
    pub alarm: AlarmSection,
}

/// Duration of each mode in seconds.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct DurationSection {
    pub focus: u64,
    pub short_break: u64,
    pub long_break: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct AlarmSection {
    #[serde(default)]
    pub backend: AlarmBackend,
    pub asset: PathBuf,
    pub player: Option<String>,
}

/// How the alarm is sounded.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AlarmBackend {
    /// Play the asset with an external audio player.
    #[default]
    Sound,
    /// Show a desktop notification carrying the asset as its sound.
    Notification,
}
