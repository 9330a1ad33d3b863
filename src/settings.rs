//! User settings - gesture tuning loaded from a JSON file.
//!
//! Missing or unreadable settings never block startup: `Settings::load` falls
//! back to defaults and logs why.

use crate::constants::{APP_DIR_NAME, DEFAULT_ELEMENT_SIZE, DRAG_THRESHOLD, SETTINGS_FILE_NAME};
use crate::error::{SettingsError, SettingsResult};
use crate::input::Modifiers;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Modifier that constrains a drawn rectangle to a square.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SquareModifier {
    #[default]
    Shift,
    Alt,
    Control,
}

impl SquareModifier {
    pub fn is_held(self, modifiers: Modifiers) -> bool {
        match self {
            SquareModifier::Shift => modifiers.shift,
            SquareModifier::Alt => modifiers.alt,
            SquareModifier::Control => modifiers.control,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Distance a pending drag must exceed before the element moves
    pub drag_threshold: f32,
    /// Side length for click-created elements
    pub default_element_size: f32,
    pub square_modifier: SquareModifier,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            drag_threshold: DRAG_THRESHOLD,
            default_element_size: DEFAULT_ELEMENT_SIZE,
            square_modifier: SquareModifier::default(),
        }
    }
}

impl Settings {
    /// Load from the default location, falling back to defaults on any error.
    pub fn load() -> Self {
        let Some(path) = default_settings_path() else {
            tracing::debug!("No config directory available, using default settings");
            return Self::default();
        };

        if !path.exists() {
            return Self::default();
        }

        match Self::load_from(&path) {
            Ok(settings) => settings,
            Err(e) => {
                tracing::warn!("Failed to load settings from {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    pub fn load_from(path: &Path) -> SettingsResult<Self> {
        let content = fs::read_to_string(path)?;
        let settings: Settings = serde_json::from_str(&content)?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn save_to(&self, path: &Path) -> SettingsResult<()> {
        self.validate()?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)?;
        Ok(())
    }

    /// `self` if valid, otherwise defaults. Used where settings are injected
    /// without going through `load_from`.
    pub fn validated_or_default(self) -> Self {
        match self.validate() {
            Ok(()) => self,
            Err(e) => {
                tracing::warn!("Rejected settings, using defaults: {}", e);
                Self::default()
            }
        }
    }

    pub fn validate(&self) -> SettingsResult<()> {
        if !self.drag_threshold.is_finite() || self.drag_threshold < 0.0 {
            return Err(SettingsError::InvalidValue {
                field: "drag_threshold",
                reason: format!("must be a finite number >= 0, got {}", self.drag_threshold),
            });
        }
        if !self.default_element_size.is_finite() || self.default_element_size <= 0.0 {
            return Err(SettingsError::InvalidValue {
                field: "default_element_size",
                reason: format!("must be a finite number > 0, got {}", self.default_element_size),
            });
        }
        Ok(())
    }
}

/// `<config_dir>/sketchboard/settings.json`, if the platform has a config dir.
pub fn default_settings_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(APP_DIR_NAME).join(SETTINGS_FILE_NAME))
}
