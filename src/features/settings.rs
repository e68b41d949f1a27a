//! Application settings persistence
//!
//! Handles saving and loading user preferences. Only display and
//! accessibility preferences are stored; the choices made while walking
//! through the screen flow live in memory only.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::i18n::Language;

/// Application settings
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    /// Display and interface settings
    #[serde(default)]
    pub display: DisplaySettings,
    /// Accessibility preferences from the login screen dialog
    #[serde(default)]
    pub accessibility: AccessibilityPreferences,
}

/// Display and interface settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplaySettings {
    /// Dark mode enabled
    pub dark_mode: bool,
    /// Application language code
    pub language: String,
}

/// Presentation preferences that apply to every screen
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccessibilityPreferences {
    /// Stronger colors and borders
    #[serde(default)]
    pub high_contrast: bool,
    /// Scale all text up
    #[serde(default)]
    pub large_text: bool,
    /// Skip screen transition animations
    #[serde(default)]
    pub reduced_motion: bool,
}

/// One of the three accessibility toggles
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Preference {
    HighContrast,
    LargeText,
    ReducedMotion,
}

impl AccessibilityPreferences {
    pub fn get(&self, preference: Preference) -> bool {
        match preference {
            Preference::HighContrast => self.high_contrast,
            Preference::LargeText => self.large_text,
            Preference::ReducedMotion => self.reduced_motion,
        }
    }

    pub fn set(&mut self, preference: Preference, enabled: bool) {
        match preference {
            Preference::HighContrast => self.high_contrast = enabled,
            Preference::LargeText => self.large_text = enabled,
            Preference::ReducedMotion => self.reduced_motion = enabled,
        }
    }
}

impl Default for DisplaySettings {
    fn default() -> Self {
        Self {
            dark_mode: false,
            language: Language::default().code().to_string(),
        }
    }
}

impl DisplaySettings {
    /// Stored language, falling back to the default for unknown codes
    pub fn language(&self) -> Language {
        Language::from_code(&self.language).unwrap_or_default()
    }
}

impl Settings {
    /// Get the settings file path
    pub fn file_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("com", "afeka", "Vision")
            .map(|dirs| dirs.config_dir().join("settings.json"))
    }

    /// Load settings from file, or return defaults if not found
    pub fn load() -> Self {
        Self::file_path()
            .and_then(|path| match Self::load_from_file(&path) {
                Ok(settings) => Some(settings),
                Err(e) => {
                    tracing::debug!("Using default settings ({}): {}", path.display(), e);
                    None
                }
            })
            .unwrap_or_default()
    }

    /// Load settings from a specific file
    pub fn load_from_file(path: &Path) -> Result<Self, SettingsError> {
        let content =
            std::fs::read_to_string(path).map_err(|e| SettingsError::Io(e.to_string()))?;
        serde_json::from_str(&content).map_err(|e| SettingsError::Parse(e.to_string()))
    }

    /// Save settings to the default file
    pub fn save(&self) -> Result<(), SettingsError> {
        if let Some(path) = Self::file_path() {
            self.save_to_file(&path)
        } else {
            Err(SettingsError::Io(
                "Could not determine config directory".to_string(),
            ))
        }
    }

    /// Save settings to a specific file
    ///
    /// Written to a sibling temp file and renamed over `path`, so a reader
    /// sees either the old or the new contents, never a partial write.
    pub fn save_to_file(&self, path: &Path) -> Result<(), SettingsError> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| SettingsError::Io(e.to_string()))?;
        }

        let content =
            serde_json::to_string_pretty(self).map_err(|e| SettingsError::Parse(e.to_string()))?;
        let staging = path.with_extension("json.tmp");
        std::fs::write(&staging, content).map_err(|e| SettingsError::Io(e.to_string()))?;
        std::fs::rename(&staging, path).map_err(|e| SettingsError::Io(e.to_string()))?;
        Ok(())
    }
}

/// Errors that can occur with settings
#[derive(Debug, Clone)]
pub enum SettingsError {
    Io(String),
    Parse(String),
}

impl std::fmt::Display for SettingsError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SettingsError::Io(e) => write!(f, "IO error: {}", e),
            SettingsError::Parse(e) => write!(f, "Parse error: {}", e),
        }
    }
}

impl std::error::Error for SettingsError {}

#[cfg(test)]
mod tests {
    use super::*;

    fn scratch_file(name: &str) -> PathBuf {
        std::env::temp_dir()
            .join(format!("vision-settings-{}-{}", std::process::id(), name))
            .join("settings.json")
    }

    #[test]
    fn test_save_and_load() {
        let path = scratch_file("roundtrip");
        let mut settings = Settings::default();
        settings.display.dark_mode = true;
        settings.accessibility.set(Preference::LargeText, true);

        settings.save_to_file(&path).expect("save");
        let loaded = Settings::load_from_file(&path).expect("load");
        assert_eq!(loaded, settings);

        let _ = std::fs::remove_dir_all(path.parent().expect("parent"));
    }

    #[test]
    fn test_repeated_saves_keep_last_and_leave_no_staging_file() {
        let path = scratch_file("repeated");
        let mut settings = Settings::default();
        for round in 0..8 {
            settings.display.dark_mode = round % 2 == 0;
            settings.accessibility.set(Preference::LargeText, round % 3 == 0);
            settings.save_to_file(&path).expect("save");
        }

        let loaded = Settings::load_from_file(&path).expect("load");
        assert_eq!(loaded, settings);
        assert!(!path.with_extension("json.tmp").exists());

        let _ = std::fs::remove_dir_all(path.parent().expect("parent"));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let path = scratch_file("missing");
        assert!(matches!(
            Settings::load_from_file(&path),
            Err(SettingsError::Io(_))
        ));
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let settings: Settings =
            serde_json::from_str(r#"{"accessibility":{"reduced_motion":true}}"#).expect("parse");
        assert!(settings.accessibility.reduced_motion);
        assert!(!settings.accessibility.high_contrast);
        assert_eq!(settings.display, DisplaySettings::default());
    }

    #[test]
    fn test_garbage_is_parse_error() {
        let path = scratch_file("garbage");
        std::fs::create_dir_all(path.parent().expect("parent")).expect("mkdir");
        std::fs::write(&path, "not json").expect("write");

        assert!(matches!(
            Settings::load_from_file(&path),
            Err(SettingsError::Parse(_))
        ));
        let _ = std::fs::remove_dir_all(path.parent().expect("parent"));
    }

    #[test]
    fn test_unknown_language_falls_back() {
        let display = DisplaySettings {
            dark_mode: false,
            language: "xx".to_string(),
        };
        assert_eq!(display.language(), Language::English);
    }

    #[test]
    fn test_preference_toggles() {
        let mut prefs = AccessibilityPreferences::default();
        for preference in [
            Preference::HighContrast,
            Preference::LargeText,
            Preference::ReducedMotion,
        ] {
            assert!(!prefs.get(preference));
            prefs.set(preference, true);
            assert!(prefs.get(preference));
        }
    }
}
