// SPDX-License-Identifier: GPL-3.0-only

use crate::constants::export;
use crate::errors::ConfigError;
use crate::filters::{FilterName, FxName};
use cosmic::cosmic_config::{self, CosmicConfigEntry, cosmic_config_derive::CosmicConfigEntry};
use cosmic::{Theme, theme};
use serde::{Deserialize, Serialize};
use tracing::warn;

/// Application theme preference
///
/// Persisted as an integer: 0 = System, 1 = Light, 2 = Dark. Values outside
/// that range decode to [`AppTheme::System`].
#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
#[serde(from = "u8", into = "u8")]
pub enum AppTheme {
    /// Follow system theme (dark or light based on system setting)
    #[default]
    System,
    /// Always use light theme
    Light,
    /// Always use dark theme
    Dark,
}

impl AppTheme {
    /// Options in the order the appearance page lists them
    pub const ALL: [AppTheme; 3] = [AppTheme::System, AppTheme::Light, AppTheme::Dark];

    /// Persisted integer value
    pub fn index(&self) -> u8 {
        match self {
            Self::System => 0,
            Self::Light => 1,
            Self::Dark => 2,
        }
    }

    /// Decode a persisted value, falling back to the default when out of range
    pub fn from_index_or_default(value: u8) -> Self {
        Self::try_from(value).unwrap_or_else(|err| {
            warn!(%err, "Invalid persisted appearance, using system theme");
            Self::default()
        })
    }

    /// Get the COSMIC theme for this app theme preference
    pub fn theme(&self) -> Theme {
        match self {
            Self::Dark => {
                let mut theme = theme::system_dark();
                theme.theme_type.prefer_dark(Some(true));
                theme
            }
            Self::Light => {
                let mut theme = theme::system_light();
                theme.theme_type.prefer_dark(Some(false));
                theme
            }
            Self::System => theme::system_preference(),
        }
    }
}

impl TryFrom<u8> for AppTheme {
    type Error = ConfigError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Self::System),
            1 => Ok(Self::Light),
            2 => Ok(Self::Dark),
            other => Err(ConfigError::InvalidTheme(other)),
        }
    }
}

impl From<u8> for AppTheme {
    fn from(value: u8) -> Self {
        Self::from_index_or_default(value)
    }
}

impl From<AppTheme> for u8 {
    fn from(theme: AppTheme) -> Self {
        theme.index()
    }
}

#[derive(Debug, Clone, CosmicConfigEntry, Eq, PartialEq, Serialize, Deserialize)]
#[version = 1]
pub struct Config {
    /// Application theme preference (System, Light, Dark)
    pub app_theme: AppTheme,
    /// Colour filter applied to every photo
    pub selected_filter: FilterName,
    /// Effects applied after the colour filter
    pub enabled_effects: Vec<FxName>,
    /// JPEG quality for exported photos (1-100)
    pub jpeg_quality: u8,
    /// Folder name under the pictures directory for exports
    pub save_folder_name: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            app_theme: AppTheme::default(),
            selected_filter: FilterName::default(),
            enabled_effects: Vec::new(),
            jpeg_quality: export::DEFAULT_JPEG_QUALITY,
            save_folder_name: export::DEFAULT_SAVE_FOLDER.to_string(),
        }
    }
}

impl Config {
    /// Whether an effect is switched on
    pub fn effect_enabled(&self, fx: FxName) -> bool {
        self.enabled_effects.contains(&fx)
    }

    /// Switch an effect on or off, keeping the list sorted and free of duplicates
    pub fn set_effect(&mut self, fx: FxName, enabled: bool) {
        self.enabled_effects.retain(|existing| *existing != fx);
        if enabled {
            self.enabled_effects.push(fx);
            self.enabled_effects.sort();
        }
    }

    /// JPEG quality clamped to what the encoder accepts
    pub fn export_quality(&self) -> u8 {
        self.jpeg_quality.clamp(1, 100)
    }
}

/// Load the persisted config, falling back to defaults on any error
///
/// Returns the handler alongside so callers can write changes back.
pub fn load(app_id: &str) -> (Option<cosmic_config::Config>, Config) {
    match cosmic_config::Config::new(app_id, Config::VERSION) {
        Ok(handler) => {
            let config = match Config::get_entry(&handler) {
                Ok(config) => config,
                Err((errors, config)) => {
                    tracing::error!(?errors, "Errors loading config");
                    config
                }
            };
            (Some(handler), config)
        }
        Err(err) => {
            tracing::error!(%err, "Failed to create config handler");
            (None, Config::default())
        }
    }
}
