//! Application configuration file.
//!
//! `trip-calendar.toml` lives in the platform config directory. Every field
//! is optional; missing or unreadable files fall back to defaults. View
//! preferences are not stored here, they live in the settings table.

use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{anyhow, Context, Result};
use chrono::NaiveDate;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

use crate::models::week::DateRangeOverride;

pub const CONFIG_FILE_NAME: &str = "trip-calendar.toml";
pub const SERVER_URL_ENV: &str = "TRIP_CALENDAR_SERVER_URL";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DataSourceKind {
    /// Activities come from the local SQLite store.
    #[default]
    Local,
    /// Activities come from the trip web backend.
    Http,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    /// SQLite file; platform data directory when unset.
    #[serde(default)]
    pub database_path: Option<PathBuf>,
    #[serde(default)]
    pub data_source: DataSourceKind,
    #[serde(default = "default_server_url")]
    pub server_url: String,
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,
    /// Initial values of the date filter form.
    #[serde(default = "default_trip_start")]
    pub trip_start: NaiveDate,
    #[serde(default = "default_trip_end")]
    pub trip_end: NaiveDate,
    /// Activities whose location mentions this are highlighted.
    #[serde(default = "default_highlight_keyword")]
    pub highlight_keyword: Option<String>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            database_path: None,
            data_source: DataSourceKind::default(),
            server_url: default_server_url(),
            request_timeout_secs: default_request_timeout_secs(),
            trip_start: default_trip_start(),
            trip_end: default_trip_end(),
            highlight_keyword: default_highlight_keyword(),
        }
    }
}

fn default_server_url() -> String {
    "http://localhost:5000".to_string()
}

fn default_request_timeout_secs() -> u64 {
    10
}

fn default_trip_start() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 10, 28).unwrap_or_default()
}

fn default_trip_end() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 11, 13).unwrap_or_default()
}

fn default_highlight_keyword() -> Option<String> {
    Some("Vietnam".to_string())
}

fn project_dirs() -> Option<ProjectDirs> {
    ProjectDirs::from("com", "TripCalendar", "TripCalendar")
}

impl AppConfig {
    /// Platform location of the config file.
    pub fn default_path() -> Option<PathBuf> {
        project_dirs().map(|dirs| dirs.config_dir().join(CONFIG_FILE_NAME))
    }

    /// Parse a config file.
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let config: Self = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file {}", path.display()))?;
        config.validate()?;
        Ok(config)
    }

    /// Load from `path` (or the platform location), falling back to defaults,
    /// then apply environment overrides.
    pub fn load_or_default(path: Option<&Path>) -> Self {
        let path = path.map(Path::to_path_buf).or_else(Self::default_path);

        let mut config = match path {
            Some(path) if path.exists() => match Self::load_from(&path) {
                Ok(config) => {
                    log::info!("Loaded configuration from {:?}", path);
                    config
                }
                Err(e) => {
                    log::warn!("{:#}, using defaults", e);
                    Self::default()
                }
            },
            _ => Self::default(),
        };

        config.apply_env_overrides();
        config
    }

    pub fn apply_env_overrides(&mut self) {
        if let Ok(url) = env::var(SERVER_URL_ENV) {
            let url = url.trim();
            if !url.is_empty() {
                log::info!("Using server URL from {}", SERVER_URL_ENV);
                self.server_url = url.to_string();
            }
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.trip_start > self.trip_end {
            return Err(anyhow!(
                "trip_start {} is after trip_end {}",
                self.trip_start,
                self.trip_end
            ));
        }
        if self.request_timeout_secs == 0 {
            return Err(anyhow!("request_timeout_secs must be greater than zero"));
        }
        Ok(())
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }
        let content = toml::to_string_pretty(self).context("Failed to serialize configuration")?;
        fs::write(path, content)
            .with_context(|| format!("Failed to write config file {}", path.display()))?;
        Ok(())
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    /// Initial date filter range.
    pub fn trip_range(&self) -> Option<DateRangeOverride> {
        DateRangeOverride::new(self.trip_start, self.trip_end).ok()
    }

    /// Configured database path, or `trips.db` in the platform data directory.
    pub fn resolve_database_path(&self) -> Result<PathBuf> {
        if let Some(path) = &self.database_path {
            return Ok(path.clone());
        }

        #[cfg(debug_assertions)]
        {
            Ok(PathBuf::from("trips.db"))
        }

        #[cfg(not(debug_assertions))]
        {
            match project_dirs() {
                Some(dirs) => {
                    let data_dir = dirs.data_dir();
                    fs::create_dir_all(data_dir).with_context(|| {
                        format!("Failed to create data directory {}", data_dir.display())
                    })?;
                    Ok(data_dir.join("trips.db"))
                }
                None => Ok(PathBuf::from("trips.db")),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serial_test::serial;

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.data_source, DataSourceKind::Local);
        assert_eq!(config.trip_start, NaiveDate::from_ymd_opt(2024, 10, 28).unwrap());
        assert_eq!(config.trip_end, NaiveDate::from_ymd_opt(2024, 11, 13).unwrap());
        assert_eq!(config.request_timeout(), Duration::from_secs(10));
        assert!(config.trip_range().is_some());
    }

    #[test]
    fn test_partial_file_uses_defaults_for_missing_fields() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE_NAME);
        fs::write(
            &path,
            "data_source = \"http\"\nserver_url = \"http://trips.local:8080\"\ntrip_start = \"2025-03-01\"\ntrip_end = \"2025-03-14\"\n",
        )
        .unwrap();

        let config = AppConfig::load_from(&path).unwrap();
        assert_eq!(config.data_source, DataSourceKind::Http);
        assert_eq!(config.server_url, "http://trips.local:8080");
        assert_eq!(config.trip_start, NaiveDate::from_ymd_opt(2025, 3, 1).unwrap());
        assert_eq!(config.request_timeout_secs, 10);
        assert_eq!(config.highlight_keyword.as_deref(), Some("Vietnam"));
    }

    #[test]
    fn test_reversed_trip_range_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE_NAME);
        fs::write(&path, "trip_start = \"2025-03-14\"\ntrip_end = \"2025-03-01\"\n").unwrap();

        assert!(AppConfig::load_from(&path).is_err());
    }

    #[test]
    #[serial]
    fn test_invalid_file_falls_back_to_defaults() {
        env::remove_var(SERVER_URL_ENV);
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE_NAME);
        fs::write(&path, "data_source = [not toml").unwrap();

        assert_eq!(AppConfig::load_or_default(Some(&path)), AppConfig::default());
    }

    #[test]
    fn test_save_and_reload() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join(CONFIG_FILE_NAME);
        let config = AppConfig {
            database_path: Some(PathBuf::from("/tmp/trips.db")),
            data_source: DataSourceKind::Http,
            highlight_keyword: Some("Hoi An".to_string()),
            ..AppConfig::default()
        };

        config.save_to(&path).unwrap();
        assert_eq!(AppConfig::load_from(&path).unwrap(), config);
    }

    #[test]
    #[serial]
    fn test_env_overrides_server_url() {
        env::set_var(SERVER_URL_ENV, "http://override:9000");
        let dir = tempfile::tempdir().unwrap();
        let config = AppConfig::load_or_default(Some(&dir.path().join("missing.toml")));
        env::remove_var(SERVER_URL_ENV);

        assert_eq!(config.server_url, "http://override:9000");
    }

    #[test]
    fn test_configured_database_path_wins() {
        let config = AppConfig {
            database_path: Some(PathBuf::from("custom.db")),
            ..AppConfig::default()
        };
        assert_eq!(config.resolve_database_path().unwrap(), PathBuf::from("custom.db"));
    }
}
