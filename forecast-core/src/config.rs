use anyhow::{Context, Result, anyhow};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::{fs, path::Path, path::PathBuf};

use crate::error::FetchError;

/// Environment variable that overrides the endpoint stored on disk.
pub const ENDPOINT_ENV: &str = "FORECAST_API_URL";

/// Top-level configuration stored on disk.
///
/// Example TOML:
/// endpoint = "https://weather.example.com/timeline/jakarta"
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct Config {
    /// URL the weather payload is fetched from.
    pub endpoint: Option<String>,
}

impl Config {
    /// Load config from disk, or return an empty default if it doesn't exist yet.
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_file_path()?)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            // First run: no config file, return empty.
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let cfg: Config = toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        Ok(cfg)
    }

    /// Save config to disk, creating parent directories as needed.
    pub fn save(&self) -> Result<PathBuf> {
        let path = Self::config_file_path()?;
        self.save_to(&path)?;
        Ok(path)
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
        let dirs = ProjectDirs::from("dev", "forecast", "forecast-cli")
            .ok_or_else(|| anyhow!("Could not determine platform config directory"))?;

        Ok(dirs.config_dir().join("config.toml"))
    }

    /// Store the endpoint, rejecting blank input.
    pub fn set_endpoint(&mut self, endpoint: &str) -> Result<()> {
        let endpoint = endpoint.trim();
        if endpoint.is_empty() {
            return Err(anyhow!("Endpoint URL must not be empty."));
        }
        self.endpoint = Some(endpoint.to_string());
        Ok(())
    }

    /// Apply `FORECAST_API_URL` from the environment, if set and non-blank.
    pub fn with_env_overrides(self) -> Self {
        self.with_endpoint_override(std::env::var(ENDPOINT_ENV).ok())
    }

    /// Replace the endpoint when `endpoint` is present and non-blank.
    pub fn with_endpoint_override(mut self, endpoint: Option<String>) -> Self {
        if let Some(endpoint) = endpoint.filter(|e| !e.trim().is_empty()) {
            self.endpoint = Some(endpoint.trim().to_string());
        }
        self
    }

    /// The endpoint to fetch from; missing or blank is a configuration error.
    pub fn endpoint(&self) -> Result<&str, FetchError> {
        self.endpoint
            .as_deref()
            .map(str::trim)
            .filter(|e| !e.is_empty())
            .ok_or(FetchError::Configuration)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoint_errors_when_not_set() {
        let cfg = Config::default();
        let err = cfg.endpoint().unwrap_err();

        assert!(err.is_configuration());
        assert_eq!(err.to_string(), "endpoint not configured");
    }

    #[test]
    fn blank_endpoint_counts_as_unset() {
        let cfg = Config { endpoint: Some("  ".into()) };
        assert!(cfg.endpoint().is_err());
    }

    #[test]
    fn set_endpoint_trims_and_rejects_blank() {
        let mut cfg = Config::default();

        cfg.set_endpoint("  https://example.com/days \n").unwrap();
        assert_eq!(cfg.endpoint().unwrap(), "https://example.com/days");

        let err = cfg.set_endpoint("   ").unwrap_err();
        assert!(err.to_string().contains("must not be empty"));
        assert_eq!(cfg.endpoint().unwrap(), "https://example.com/days");
    }

    #[test]
    fn override_replaces_only_when_present() {
        let cfg = Config { endpoint: Some("https://from-file".into()) };

        let same = cfg.clone().with_endpoint_override(None);
        assert_eq!(same.endpoint().unwrap(), "https://from-file");

        let same = cfg.clone().with_endpoint_override(Some(" ".into()));
        assert_eq!(same.endpoint().unwrap(), "https://from-file");

        let replaced = cfg.with_endpoint_override(Some("https://from-flag".into()));
        assert_eq!(replaced.endpoint().unwrap(), "https://from-flag");
    }

    #[test]
    fn missing_file_loads_default() {
        let dir = tempfile::tempdir().unwrap();
        let cfg = Config::load_from(&dir.path().join("nope.toml")).unwrap();
        assert_eq!(cfg, Config::default());
    }

    #[test]
    fn save_then_load_keeps_endpoint() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        let mut cfg = Config::default();
        cfg.set_endpoint("https://example.com/weather.json").unwrap();
        cfg.save_to(&path).unwrap();

        let loaded = Config::load_from(&path).unwrap();
        assert_eq!(loaded, cfg);
    }

    #[test]
    fn malformed_file_reports_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "endpoint = [").unwrap();

        let err = Config::load_from(&path).unwrap_err();
        assert!(err.to_string().contains("Failed to parse config file"));
    }
}
