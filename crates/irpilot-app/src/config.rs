//! Settings loading and defaults.
//!
//! Settings live in `irpilot.toml` under the user config directory. Every
//! field is serde-defaulted so a partial (or absent) file is fine; CLI flags
//! override on top of whatever was loaded.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::warn;
use url::Url;

use irpilot_core::{Error, Result};

/// Default device address (the device boots as a Wi-Fi access point).
pub const DEFAULT_DEVICE_URL: &str = "http://192.168.4.1";

/// Capture poll period in milliseconds.
pub const DEFAULT_POLL_INTERVAL_MS: u64 = 1000;

/// Poll ticks before a capture session is considered failed (~2 minutes).
pub const DEFAULT_MAX_POLL_TICKS: u32 = 120;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Settings {
    pub device: DeviceSettings,
    pub ui: UiSettings,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DeviceSettings {
    /// Base URL of the device API.
    pub url: String,
    /// Capture poll period in milliseconds.
    pub poll_interval_ms: u64,
    /// Poll ticks before a capture session fails. 0 disables the bound.
    pub max_poll_ticks: u32,
}

impl Default for DeviceSettings {
    fn default() -> Self {
        Self {
            url: DEFAULT_DEVICE_URL.to_string(),
            poll_interval_ms: DEFAULT_POLL_INTERVAL_MS,
            max_poll_ticks: DEFAULT_MAX_POLL_TICKS,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UiSettings {
    /// Use unicode symbols for signal badges (set false for plain terminals).
    pub unicode_symbols: bool,
}

impl Default for UiSettings {
    fn default() -> Self {
        Self {
            unicode_symbols: true,
        }
    }
}

impl Settings {
    /// Parse and validate the configured device URL.
    pub fn device_url(&self) -> Result<Url> {
        Url::parse(&self.device.url).map_err(|_| Error::device_url(&self.device.url))
    }
}

/// Path of the settings file: `<config dir>/ir-pilot/irpilot.toml`.
pub fn config_file_path() -> PathBuf {
    let base = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
    base.join("ir-pilot").join("irpilot.toml")
}

/// Load settings from the default location.
///
/// A missing file yields defaults; an unreadable or invalid file is logged
/// and also yields defaults, so a broken config never blocks startup.
pub fn load_settings() -> Settings {
    let path = config_file_path();
    if !path.exists() {
        return Settings::default();
    }
    match load_settings_from(&path) {
        Ok(settings) => settings,
        Err(e) => {
            warn!("Ignoring invalid settings file {}: {}", path.display(), e);
            Settings::default()
        }
    }
}

/// Load settings from an explicit path. Errors here are surfaced to the
/// caller (an explicitly named file should not be silently ignored).
pub fn load_settings_from(path: &Path) -> Result<Settings> {
    if !path.exists() {
        return Err(Error::ConfigNotFound {
            path: path.to_path_buf(),
        });
    }
    let contents = std::fs::read_to_string(path)?;
    toml::from_str(&contents).map_err(|e| Error::config(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let settings = Settings::default();
        assert_eq!(settings.device.url, DEFAULT_DEVICE_URL);
        assert_eq!(settings.device.poll_interval_ms, 1000);
        assert_eq!(settings.device.max_poll_ticks, 120);
        assert!(settings.ui.unicode_symbols);
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[device]\nurl = \"http://10.0.0.9\"").unwrap();

        let settings = load_settings_from(file.path()).unwrap();
        assert_eq!(settings.device.url, "http://10.0.0.9");
        assert_eq!(settings.device.poll_interval_ms, DEFAULT_POLL_INTERVAL_MS);
        assert!(settings.ui.unicode_symbols);
    }

    #[test]
    fn test_invalid_file_is_an_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "device = \"not a table\"").unwrap();
        assert!(load_settings_from(file.path()).is_err());
    }

    #[test]
    fn test_missing_explicit_file_is_an_error() {
        let err = load_settings_from(Path::new("/nonexistent/irpilot.toml")).unwrap_err();
        assert!(matches!(err, Error::ConfigNotFound { .. }));
    }

    #[test]
    fn test_device_url_validation() {
        let mut settings = Settings::default();
        assert!(settings.device_url().is_ok());

        settings.device.url = "not a url".to_string();
        let err = settings.device_url().unwrap_err();
        assert!(err.is_fatal());
    }
}
