//! Game settings and preferences
//!
//! Stored as a JSON file next to the game. Missing fields take their defaults.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::SettingsError;

/// Gameplay tuning knobs
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    /// Ball speed on both axes after a serve
    pub starting_speed: i32,
    /// Paddle movement per tick
    pub paddle_speed: f32,
    /// Points needed to win
    pub win_score: u32,
    /// Paddle hits between speed-ups
    pub speed_up_interval: u32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            starting_speed: STARTING_SPEED,
            paddle_speed: PADDLE_SPEED,
            win_score: WIN_SCORE,
            speed_up_interval: SPEED_UP_INTERVAL,
        }
    }
}

/// Game settings/preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // === Audio ===
    /// Master volume (0.0 - 1.0)
    pub master_volume: f32,
    /// Sound effects volume (0.0 - 1.0)
    pub sfx_volume: f32,
    /// Silence all sound effects
    pub muted: bool,

    // === Gameplay ===
    pub tuning: Tuning,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            master_volume: 0.8,
            sfx_volume: 1.0,
            muted: false,
            tuning: Tuning::default(),
        }
    }
}

impl Settings {
    /// Parse settings from a JSON string
    pub fn from_json(json: &str) -> Result<Self, SettingsError> {
        let mut settings: Settings = serde_json::from_str(json)?;
        settings.master_volume = settings.master_volume.clamp(0.0, 1.0);
        settings.sfx_volume = settings.sfx_volume.clamp(0.0, 1.0);
        Ok(settings)
    }

    /// Load settings from a JSON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, SettingsError> {
        let json = fs::read_to_string(path.as_ref())?;
        let settings = Self::from_json(&json)?;
        log::info!("Loaded settings from {}", path.as_ref().display());
        Ok(settings)
    }

    /// Load settings, falling back to defaults on any error
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        match Self::load(path.as_ref()) {
            Ok(settings) => settings,
            Err(e) => {
                log::warn!(
                    "Using default settings ({}): {}",
                    path.as_ref().display(),
                    e
                );
                Self::default()
            }
        }
    }

    /// Save settings as pretty-printed JSON
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), SettingsError> {
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path.as_ref(), json)?;
        log::info!("Settings saved to {}", path.as_ref().display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_constants() {
        let settings = Settings::default();
        assert_eq!(settings.tuning.starting_speed, 7);
        assert_eq!(settings.tuning.paddle_speed, 9.0);
        assert_eq!(settings.tuning.win_score, 7);
        assert_eq!(settings.tuning.speed_up_interval, 5);
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let settings = Settings::from_json(r#"{ "muted": true, "tuning": { "win_score": 3 } }"#)
            .expect("valid json");
        assert!(settings.muted);
        assert_eq!(settings.tuning.win_score, 3);
        assert_eq!(settings.tuning.starting_speed, STARTING_SPEED);
        assert_eq!(settings.master_volume, 0.8);
    }

    #[test]
    fn test_volumes_are_clamped() {
        let settings =
            Settings::from_json(r#"{ "master_volume": 3.0, "sfx_volume": -1.0 }"#).expect("valid");
        assert_eq!(settings.master_volume, 1.0);
        assert_eq!(settings.sfx_volume, 0.0);
    }

    #[test]
    fn test_malformed_json_is_an_error() {
        let err = Settings::from_json("{ not json").unwrap_err();
        assert!(matches!(err, SettingsError::Serialization(_)));
    }

    #[test]
    fn test_missing_file_falls_back_to_default() {
        let settings = Settings::load_or_default("/definitely/not/here/settings.json");
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn test_save_then_load() {
        let path = std::env::temp_dir().join(format!("amazing_pong_{}.json", std::process::id()));
        let mut settings = Settings::default();
        settings.sfx_volume = 0.25;
        settings.tuning.paddle_speed = 12.0;

        settings.save(&path).expect("save");
        let loaded = Settings::load(&path).expect("load");
        let _ = fs::remove_file(&path);

        assert_eq!(loaded, settings);
    }
}
