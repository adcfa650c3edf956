use anyhow::{Context, Result, anyhow};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};

use crate::{
    model::Coordinate,
    provider::{nominatim, open_meteo},
    render::DEFAULT_ELEMENT_ID,
};

/// Top-level configuration stored on disk.
///
/// Example TOML:
/// ```toml
/// timeout_secs = 30
///
/// [location]
/// latitude = 39.8
/// longitude = -89.6
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Open-Meteo base URL.
    pub weather_url: String,

    /// Nominatim base URL.
    pub geocoding_url: String,

    /// Nominatim rejects requests without an identifying user agent.
    pub user_agent: String,

    /// Request timeout. Unset leaves requests bounded only by the network stack.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timeout_secs: Option<u64>,

    /// Id of the mount element the widget renders into.
    pub element_id: String,

    /// Position reported to the widget when none is given on the command line.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<Coordinate>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            weather_url: open_meteo::DEFAULT_BASE_URL.to_string(),
            geocoding_url: nominatim::DEFAULT_BASE_URL.to_string(),
            user_agent: concat!("weather-widget/", env!("CARGO_PKG_VERSION")).to_string(),
            timeout_secs: None,
            element_id: DEFAULT_ELEMENT_ID.to_string(),
            location: None,
        }
    }
}

impl Config {
    /// Load config from disk, or return defaults if it doesn't exist yet.
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_file_path()?)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            // First run: no config file, use defaults.
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let cfg: Config = toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        Ok(cfg)
    }

    /// Save config to disk, creating parent directories as needed.
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_file_path()?)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory: {}", parent.display())
            })?;
        }

        let toml =
            toml::to_string_pretty(self).context("Failed to serialize configuration to TOML")?;

        fs::write(path, toml)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;

        Ok(())
    }

    /// Path to the config file.
    pub fn config_file_path() -> Result<PathBuf> {
        let dirs = ProjectDirs::from("dev", "weather-widget", "weather-widget")
            .ok_or_else(|| anyhow!("Could not determine platform config directory"))?;

        Ok(dirs.config_dir().join("config.toml"))
    }

    pub fn set_location(&mut self, coordinate: Coordinate) {
        self.location = Some(coordinate);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_point_at_public_endpoints() {
        let cfg = Config::default();

        assert_eq!(cfg.weather_url, "https://api.open-meteo.com");
        assert_eq!(cfg.geocoding_url, "https://nominatim.openstreetmap.org");
        assert_eq!(cfg.element_id, "weather-widget");
        assert!(cfg.user_agent.starts_with("weather-widget/"));
        assert!(cfg.location.is_none());
        assert!(cfg.timeout_secs.is_none());
    }

    #[test]
    fn missing_file_yields_defaults() {
        let dir = tempfile::tempdir().expect("tempdir");
        let cfg = Config::load_from(&dir.path().join("absent.toml")).expect("defaults");

        assert_eq!(cfg, Config::default());
    }

    #[test]
    fn partial_file_fills_in_defaults() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("config.toml");
        fs::write(&path, "timeout_secs = 3\n[location]\nlatitude = 39.8\nlongitude = -89.6\n")
            .expect("write");

        let cfg = Config::load_from(&path).expect("config");

        assert_eq!(cfg.timeout_secs, Some(3));
        assert_eq!(cfg.location, Some(Coordinate::new(39.8, -89.6)));
        assert_eq!(cfg.weather_url, Config::default().weather_url);
    }

    #[test]
    fn save_then_load_keeps_location() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("nested").join("config.toml");

        let mut cfg = Config::default();
        cfg.set_location(Coordinate::new(33.7, -117.8));
        cfg.save_to(&path).expect("save");

        let loaded = Config::load_from(&path).expect("load");
        assert_eq!(loaded, cfg);
    }

    #[test]
    fn invalid_toml_reports_path() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("config.toml");
        fs::write(&path, "timeout_secs = \"soon\"").expect("write");

        let err = Config::load_from(&path).unwrap_err();
        assert!(err.to_string().contains("Failed to parse config file"));
    }
}
