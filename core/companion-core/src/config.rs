//! Configuration loading and saving utilities.
//!
//! Handles paths and persistence for:
//! - The storage root (`~/.companion` unless overridden)
//! - User settings (`settings.json` under the root)
//!
//! Reads are best-effort; malformed files return defaults to keep the app usable.

use fs_err as fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Environment variable that overrides the storage root.
pub const HOME_ENV: &str = "COMPANION_HOME";

const DEFAULT_DIR_NAME: &str = ".companion";
const SETTINGS_FILE: &str = "settings.json";
const LOG_DIR: &str = "logs";

/// Default on-screen time for a notification.
pub const DEFAULT_TOAST_MS: u64 = 4000;

/// Where everything lives on disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorageConfig {
    root: PathBuf,
}

impl Default for StorageConfig {
    /// `~/.companion`, or `./.companion` when the home directory is unknown.
    fn default() -> Self {
        let root = dirs::home_dir()
            .map(|h| h.join(DEFAULT_DIR_NAME))
            .unwrap_or_else(|| PathBuf::from(DEFAULT_DIR_NAME));
        StorageConfig { root }
    }
}

impl StorageConfig {
    pub fn with_root(root: impl Into<PathBuf>) -> Self {
        StorageConfig { root: root.into() }
    }

    /// Honors `COMPANION_HOME` when set and non-empty.
    pub fn from_env() -> Self {
        match std::env::var(HOME_ENV) {
            Ok(value) if !value.trim().is_empty() => Self::with_root(value.trim()),
            _ => Self::default(),
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn settings_file(&self) -> PathBuf {
        self.root.join(SETTINGS_FILE)
    }

    pub fn log_dir(&self) -> PathBuf {
        self.root.join(LOG_DIR)
    }
}

/// User-tunable behavior.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Settings {
    /// Duration applied to notifications that don't specify one.
    pub default_toast_ms: u64,
    /// Whether an empty or corrupt experience list is replaced by seed data.
    pub seed_on_empty: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            default_toast_ms: DEFAULT_TOAST_MS,
            seed_on_empty: true,
        }
    }
}

/// Loads settings from a storage root, returning defaults if the file is
/// missing or malformed.
pub fn load_settings(storage: &StorageConfig) -> Settings {
    let path = storage.settings_file();
    match fs::read_to_string(&path) {
        Ok(content) => serde_json::from_str(&content).unwrap_or_else(|e| {
            tracing::warn!(
                error = %e,
                path = %path.display(),
                "Malformed settings, using defaults"
            );
            Settings::default()
        }),
        Err(_) => Settings::default(),
    }
}

/// Saves settings to disk for a specific storage root.
pub fn save_settings(storage: &StorageConfig, settings: &Settings) -> Result<(), String> {
    let path = storage.settings_file();

    // Ensure parent directory exists
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .map_err(|e| format!("Failed to create config directory: {}", e))?;
    }

    let content = serde_json::to_string_pretty(settings)
        .map_err(|e| format!("Failed to serialize settings: {}", e))?;
    fs::write(&path, content).map_err(|e| format!("Failed to write settings: {}", e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_paths_hang_off_root() {
        let config = StorageConfig::with_root("/tmp/companion-test");
        assert_eq!(
            config.settings_file(),
            PathBuf::from("/tmp/companion-test/settings.json")
        );
        assert_eq!(config.log_dir(), PathBuf::from("/tmp/companion-test/logs"));
    }

    #[test]
    fn test_missing_settings_use_defaults() {
        let temp = tempdir().unwrap();
        let config = StorageConfig::with_root(temp.path());
        assert_eq!(load_settings(&config), Settings::default());
    }

    #[test]
    fn test_malformed_settings_use_defaults() {
        let temp = tempdir().unwrap();
        let config = StorageConfig::with_root(temp.path());
        fs::write(config.settings_file(), "not json").unwrap();
        assert_eq!(load_settings(&config), Settings::default());
    }

    #[test]
    fn test_partial_settings_fill_defaults() {
        let temp = tempdir().unwrap();
        let config = StorageConfig::with_root(temp.path());
        fs::write(config.settings_file(), r#"{"defaultToastMs": 1500}"#).unwrap();

        let settings = load_settings(&config);
        assert_eq!(settings.default_toast_ms, 1500);
        assert!(settings.seed_on_empty);
    }

    #[test]
    fn test_save_then_load_round_trips() {
        let temp = tempdir().unwrap();
        let config = StorageConfig::with_root(temp.path().join("fresh"));
        let settings = Settings {
            default_toast_ms: 250,
            seed_on_empty: false,
        };
        save_settings(&config, &settings).unwrap();
        assert_eq!(load_settings(&config), settings);
    }
}
