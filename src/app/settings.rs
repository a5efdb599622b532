use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use super::error::AppError;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppSettings {
    #[serde(default = "default_font_size")]
    pub font_size: u32,

    #[serde(default = "default_window_width")]
    pub window_width: i32,

    #[serde(default = "default_window_height")]
    pub window_height: i32,

    /// Directory of the last file opened or saved.
    #[serde(default)]
    pub last_directory: Option<String>,
}

fn default_font_size() -> u32 {
    14
}

const FONT_SIZE_RANGE: (i32, i32) = (6, 72);

fn default_window_width() -> i32 {
    800
}

fn default_window_height() -> i32 {
    600
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            font_size: default_font_size(),
            window_width: default_window_width(),
            window_height: default_window_height(),
            last_directory: None,
        }
    }
}

impl AppSettings {
    /// Load settings from disk, or create default if not exists
    pub fn load() -> Self {
        Self::load_from(&Self::get_config_path())
    }

    pub fn load_from(path: &Path) -> Self {
        match fs::read_to_string(path) {
            Ok(contents) => match serde_json::from_str(&contents) {
                Ok(settings) => settings,
                Err(e) => {
                    log::warn!("Failed to parse settings {}: {}. Using defaults.", path.display(), e);
                    Self::default()
                }
            },
            Err(_) => {
                // File doesn't exist, use defaults
                let default = Self::default();
                if let Err(e) = default.save_to(path) {
                    log::warn!("Could not write default settings: {}", e);
                }
                default
            }
        }
    }

    /// Save settings to disk
    pub fn save_to(&self, path: &Path) -> Result<(), AppError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)?;

        Ok(())
    }

    /// Get config file path (cross-platform)
    pub fn get_config_path() -> PathBuf {
        let mut path = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        path.push("marknote");
        path.push("settings.json");
        path
    }

    /// `font_size` as a widget text size, kept within a usable range.
    pub fn editor_font_size(&self) -> i32 {
        i32::try_from(self.font_size)
            .unwrap_or(FONT_SIZE_RANGE.1)
            .clamp(FONT_SIZE_RANGE.0, FONT_SIZE_RANGE.1)
    }

    /// Remember the directory containing `file` for the next dialog.
    pub fn remember_directory_of(&mut self, file: &Path) {
        if let Some(parent) = file.parent() {
            if !parent.as_os_str().is_empty() {
                self.last_directory = Some(parent.to_string_lossy().to_string());
            }
        }
    }
}
