//! Game settings and preferences
//!
//! Loaded once at startup from `settings.json` in the working directory.
//! A missing or malformed file falls back to defaults; the file is never
//! written back.

use serde::{Deserialize, Serialize};

/// Game settings/preferences
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Synchronize presentation with the display refresh rate
    pub vsync: bool,
    /// Master volume (0.0 - 1.0)
    pub master_volume: f32,
    /// Music volume (0.0 - 1.0)
    pub music_volume: f32,
    /// Silence all audio regardless of volume levels
    pub muted: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            vsync: true,
            master_volume: 0.8,
            music_volume: 0.7,
            muted: false,
        }
    }
}

impl Settings {
    /// Settings file looked up in the working directory
    const SETTINGS_FILE: &'static str = "settings.json";

    /// Music volume after applying master and mute
    pub fn effective_music_volume(&self) -> f32 {
        if self.muted {
            0.0
        } else {
            self.master_volume * self.music_volume
        }
    }

    /// Load settings, falling back to defaults when absent or unreadable
    pub fn load() -> Self {
        match std::fs::read_to_string(Self::SETTINGS_FILE) {
            Ok(json) => Self::from_json(&json),
            Err(_) => {
                log::info!("No settings file, using defaults");
                Self::default()
            }
        }
    }

    fn from_json(json: &str) -> Self {
        match serde_json::from_str(json) {
            Ok(settings) => {
                log::info!("Loaded settings from {}", Self::SETTINGS_FILE);
                settings
            }
            Err(err) => {
                log::warn!("Ignoring malformed settings file: {err}");
                Self::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = Settings::default();
        assert!(settings.vsync);
        assert_eq!(settings.master_volume, 0.8);
        assert_eq!(settings.music_volume, 0.7);
        assert!(!settings.muted);
    }

    #[test]
    fn test_effective_music_volume() {
        let mut settings = Settings::default();
        assert!((settings.effective_music_volume() - 0.56).abs() < 1e-6);
        settings.muted = true;
        assert_eq!(settings.effective_music_volume(), 0.0);
    }

    #[test]
    fn test_parses_full_file() {
        let json = r#"{"vsync":false,"master_volume":0.5,"music_volume":1.0,"muted":true}"#;
        let settings = Settings::from_json(json);
        assert!(!settings.vsync);
        assert_eq!(settings.master_volume, 0.5);
        assert_eq!(settings.music_volume, 1.0);
        assert!(settings.muted);
    }

    #[test]
    fn test_malformed_json_falls_back_to_defaults() {
        let settings = Settings::from_json("not json at all");
        assert_eq!(settings.master_volume, Settings::default().master_volume);
        assert_eq!(settings.music_volume, Settings::default().music_volume);
    }
}
