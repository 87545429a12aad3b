/// Application settings
///
/// Read once at startup from a JSON file in the user's config directory.
/// Any field missing from the file keeps its default. The app never writes
/// this file back.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::Result;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct Settings {
    // ========== Drawing surface ==========

    /// Surface width in pixels
    pub canvas_width: u32,

    /// Surface height in pixels
    pub canvas_height: u32,

    /// Fill color behind the image (RGBA), shows as borders on non-square images
    pub background: [u8; 4],

    // ========== Captions ==========

    /// Caption font size in pixels
    pub font_size: f32,

    /// Caption font file; None tries common system fonts
    pub font_path: Option<PathBuf>,

    /// Caption color (RGBA)
    pub text_color: [u8; 4],

    /// Top caption baseline as a fraction of surface height
    pub top_baseline: f32,

    /// Bottom caption baseline as a fraction of surface height
    pub bottom_baseline: f32,

    // ========== Speech ==========

    /// Speech synthesizer executable (espeak-ng compatible)
    pub speech_program: String,

    /// Initial slider position, 0-100
    pub initial_volume: u8,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            canvas_width: 400,
            canvas_height: 400,
            background: [0, 0, 0, 255],
            font_size: 48.0,
            font_path: None,
            text_color: [255, 255, 255, 255],
            top_baseline: 0.10,
            bottom_baseline: 0.96,
            speech_program: "espeak-ng".to_string(),
            initial_volume: 100,
        }
    }
}

impl Settings {
    /// Parse from a JSON string
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Convert to a JSON string
    #[cfg(test)]
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Where the settings file lives:
    /// - Linux: ~/.config/meme-generator/settings.json
    /// - macOS: ~/Library/Application Support/meme-generator/settings.json
    /// - Windows: %APPDATA%\meme-generator\settings.json
    pub fn default_path() -> Option<PathBuf> {
        let mut path = dirs::config_dir().or_else(dirs::home_dir)?;
        path.push("meme-generator");
        path.push("settings.json");
        Some(path)
    }

    /// Read settings from `path`
    pub fn load(path: &Path) -> Result<Self> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Load from the default location, falling back to defaults when the
    /// file is absent or unreadable
    pub fn load_or_default() -> Self {
        let Some(path) = Self::default_path() else {
            tracing::warn!("⚠️  Could not determine config directory, using default settings");
            return Self::default();
        };

        if !path.exists() {
            tracing::info!("No settings file at {}, using defaults", path.display());
            return Self::default();
        }

        match Self::load(&path) {
            Ok(settings) => {
                tracing::info!("⚙️  Settings loaded from {}", path.display());
                settings
            }
            Err(e) => {
                tracing::warn!("⚠️  Ignoring settings file {}: {}", path.display(), e);
                Self::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_file_keeps_defaults() {
        let settings = Settings::from_json(r#"{ "canvas_width": 640, "font_size": 32.0 }"#).unwrap();

        assert_eq!(settings.canvas_width, 640);
        assert_eq!(settings.font_size, 32.0);
        assert_eq!(settings.canvas_height, 400);
        assert_eq!(settings.bottom_baseline, 0.96);
        assert_eq!(settings.speech_program, "espeak-ng");
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");

        let mut settings = Settings::default();
        settings.speech_program = "/opt/bin/espeak".to_string();
        settings.initial_volume = 40;
        std::fs::write(&path, settings.to_json().unwrap()).unwrap();

        assert_eq!(Settings::load(&path).unwrap(), settings);
    }

    #[test]
    fn test_invalid_json_is_an_error() {
        assert!(Settings::from_json("{ canvas_width: ").is_err());
    }
}
