//! Persisted user settings.
//!
//! The on-disk record is a flat TOML table. Only `theme` is understood;
//! any other keys found in the file are carried through untouched so a
//! newer build's options survive a round trip through an older one.
//!
//! ```toml
//! theme = "dark"
//! ```
//!
//! `#[serde(default)]` keeps a missing key from failing the whole load.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::path::{Path, PathBuf};

/// Name of one of the two built-in colour themes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeName {
    #[default]
    Light,
    Dark,
}

impl ThemeName {
    /// The other theme.
    pub fn toggled(self) -> Self {
        match self {
            ThemeName::Light => ThemeName::Dark,
            ThemeName::Dark => ThemeName::Light,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ThemeName::Light => "light",
            ThemeName::Dark => "dark",
        }
    }

    pub fn is_dark(self) -> bool {
        self == ThemeName::Dark
    }
}

impl fmt::Display for ThemeName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The persisted settings record.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Active colour theme
    pub theme: ThemeName,

    /// Keys this build does not know about
    #[serde(flatten)]
    pub extra: BTreeMap<String, toml::Value>,
}

impl Settings {
    /// Parses a settings record from TOML text.
    pub fn from_toml(content: &str) -> Result<Self, SettingsError> {
        Ok(toml::from_str(content)?)
    }

    /// Serializes the record to TOML text.
    pub fn to_toml(&self) -> Result<String, SettingsError> {
        Ok(toml::to_string_pretty(self)?)
    }
}

/// Reads and writes [`Settings`] at a fixed location.
#[derive(Debug, Clone)]
pub struct SettingsStore {
    path: PathBuf,
}

impl SettingsStore {
    /// A store backed by the file at `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The per-user store: `<config dir>/slate/settings.toml`.
    pub fn default_location() -> Result<Self, SettingsError> {
        let config_dir = dirs::config_dir().ok_or(SettingsError::NoConfigDir)?;
        Ok(Self::new(config_dir.join("slate").join("settings.toml")))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Loads settings, falling back to defaults on any failure.
    ///
    /// A missing file is the normal first-run case and is not logged.
    pub fn load(&self) -> Settings {
        match self.try_load() {
            Ok(settings) => settings,
            Err(e) => {
                tracing::warn!("Ignoring settings at {}: {}", self.path.display(), e);
                Settings::default()
            }
        }
    }

    /// Loads settings, reporting why a present file could not be used.
    pub fn try_load(&self) -> Result<Settings, SettingsError> {
        if !self.path.exists() {
            return Ok(Settings::default());
        }
        let content = std::fs::read_to_string(&self.path)?;
        Settings::from_toml(&content)
    }

    /// Writes settings, creating the parent directory if needed.
    pub fn save(&self, settings: &Settings) -> Result<(), SettingsError> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(&self.path, settings.to_toml()?)?;
        Ok(())
    }
}

/// Settings errors.
#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("Config directory not found")]
    NoConfigDir,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Serialize error: {0}")]
    Serialize(#[from] toml::ser::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_light() {
        assert_eq!(Settings::default().theme, ThemeName::Light);
    }

    #[test]
    fn test_missing_file_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let store = SettingsStore::new(dir.path().join("nope").join("settings.toml"));
        assert_eq!(store.load(), Settings::default());
    }

    #[test]
    fn test_missing_key_defaults() {
        let settings = Settings::from_toml("").unwrap();
        assert_eq!(settings.theme, ThemeName::Light);
    }

    #[test]
    fn test_garbage_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.toml");
        std::fs::write(&path, "theme = \"purple\"").unwrap();
        let store = SettingsStore::new(&path);
        assert!(store.try_load().is_err());
        assert_eq!(store.load().theme, ThemeName::Light);
    }

    #[test]
    fn test_save_and_reload() {
        let dir = tempfile::tempdir().unwrap();
        let store = SettingsStore::new(dir.path().join("slate").join("settings.toml"));
        let settings = Settings {
            theme: ThemeName::Dark,
            ..Default::default()
        };
        store.save(&settings).unwrap();

        let written = std::fs::read_to_string(store.path()).unwrap();
        assert!(written.contains("theme = \"dark\""));
        assert_eq!(store.load(), settings);
    }

    #[test]
    fn test_unknown_keys_survive() {
        let settings = Settings::from_toml("theme = \"dark\"\nfont_size = 12\n").unwrap();
        assert_eq!(settings.theme, ThemeName::Dark);
        assert_eq!(
            settings.extra.get("font_size"),
            Some(&toml::Value::Integer(12))
        );

        let reparsed = Settings::from_toml(&settings.to_toml().unwrap()).unwrap();
        assert_eq!(reparsed, settings);
    }

    #[test]
    fn test_theme_name_toggle() {
        assert_eq!(ThemeName::Dark.to_string(), "dark");
        assert_eq!(ThemeName::Light.toggled(), ThemeName::Dark);
        assert_eq!(ThemeName::Light.toggled().toggled(), ThemeName::Light);
    }
}
