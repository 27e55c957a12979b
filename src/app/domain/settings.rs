use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use super::font::{DEFAULT_FONT_SIZE, DisplayFont, FontFamily};
use crate::app::infrastructure::error::AppError;

/// What to do with bytes that are not valid UTF-8 when opening a file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum DecodePolicy {
    /// Refuse to open the file; the current document stays as it is.
    #[default]
    Strict,
    /// Open the file with invalid sequences replaced by U+FFFD.
    Lossy,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppSettings {
    #[serde(default)]
    pub font: FontFamily,

    #[serde(default = "default_font_size")]
    pub font_size: u32,

    #[serde(default)]
    pub decode_policy: DecodePolicy,

    /// Last directory used in a file open/save dialog.
    #[serde(default)]
    pub last_open_directory: Option<PathBuf>,
}

fn default_font_size() -> u32 {
    DEFAULT_FONT_SIZE
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            font: FontFamily::default(),
            font_size: default_font_size(),
            decode_policy: DecodePolicy::default(),
            last_open_directory: None,
        }
    }
}

impl AppSettings {
    /// Display font described by these settings, falling back to the
    /// default size when the stored one is not usable.
    pub fn display_font(&self) -> DisplayFont {
        DisplayFont::new(self.font, self.font_size)
            .or_else(|e| {
                tracing::warn!("{}. Using size {}.", e, DEFAULT_FONT_SIZE);
                DisplayFont::new(self.font, DEFAULT_FONT_SIZE)
            })
            .unwrap_or_default()
    }

    /// Load settings from disk, or create default if not exists
    pub fn load() -> Self {
        Self::load_from(&Self::get_config_path())
    }

    pub fn load_from(config_path: &Path) -> Self {
        match fs::read_to_string(config_path) {
            Ok(contents) => match serde_json::from_str(&contents) {
                Ok(settings) => settings,
                Err(e) => {
                    tracing::warn!("Failed to parse settings: {}. Using defaults.", e);
                    Self::default()
                }
            },
            Err(_) => {
                tracing::debug!("No settings at {}, using defaults", config_path.display());
                Self::default()
            }
        }
    }

    /// Save settings to disk
    pub fn save(&self) -> Result<(), AppError> {
        self.save_to(&Self::get_config_path())
    }

    pub fn save_to(&self, config_path: &Path) -> Result<(), AppError> {
        // Ensure parent directory exists
        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent)?;
        }

        let json = serde_json::to_string_pretty(self)?;
        fs::write(config_path, json)?;

        Ok(())
    }

    /// Get config file path (cross-platform)
    pub fn get_config_path() -> PathBuf {
        let mut path = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        path.push("powerword");
        path.push("settings.json");
        path
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_settings() {
        let settings = AppSettings::default();
        assert_eq!(settings.font, FontFamily::System);
        assert_eq!(settings.font_size, 16);
        assert_eq!(settings.decode_policy, DecodePolicy::Strict);
        assert!(settings.last_open_directory.is_none());
    }

    #[test]
    fn test_serialize_deserialize() {
        let settings = AppSettings {
            font: FontFamily::TimesNewRoman,
            font_size: 20,
            decode_policy: DecodePolicy::Lossy,
            last_open_directory: Some(PathBuf::from("/home/user/notes")),
        };
        let json = serde_json::to_string(&settings).unwrap();
        let loaded: AppSettings = serde_json::from_str(&json).unwrap();
        assert_eq!(settings, loaded);
    }

    #[test]
    fn test_partial_config() {
        let json = r#"{"font": "Courier"}"#;
        let settings: AppSettings = serde_json::from_str(json).unwrap();
        assert_eq!(settings.font, FontFamily::Courier);
        assert_eq!(settings.font_size, 16);
        assert_eq!(settings.decode_policy, DecodePolicy::Strict);
    }

    #[test]
    fn test_unknown_font_is_rejected() {
        let json = r#"{"font": "Papyrus"}"#;
        assert!(serde_json::from_str::<AppSettings>(json).is_err());
    }

    #[test]
    fn test_zero_font_size_falls_back() {
        let settings = AppSettings {
            font: FontFamily::Helvetica,
            font_size: 0,
            ..Default::default()
        };
        let font = settings.display_font();
        assert_eq!(font.family(), FontFamily::Helvetica);
        assert_eq!(font.size(), 16);
    }

    #[test]
    fn test_save_and_load_from_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("settings.json");
        let settings = AppSettings {
            font: FontFamily::Courier,
            font_size: 24,
            ..Default::default()
        };
        settings.save_to(&path).unwrap();
        assert_eq!(AppSettings::load_from(&path), settings);
    }

    #[test]
    fn test_corrupt_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        fs::write(&path, "{not json").unwrap();
        assert_eq!(AppSettings::load_from(&path), AppSettings::default());
    }

    #[test]
    fn test_missing_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.json");
        assert_eq!(AppSettings::load_from(&path), AppSettings::default());
    }
}
