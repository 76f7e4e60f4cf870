use std::fs;
use std::path::{Path, PathBuf};
use reqwest::Url;
use crate::config::constants::{CONFIG_DIR_NAME, CONFIG_FILE_NAME, SERVER_URL_ENV};
use crate::errors::{SynochatError, SynochatResult};
use crate::structs::config::config::Config;
use crate::structs::validation_result::ValidationResult;

const SAMPLE_CONFIG: &str = r#"# Synochat CLI configuration

[server]
# Base URL of the WeRSS API; config and test endpoints live under /wx
base_url = "http://localhost:8001/api/v1"

# Environment variable holding the bearer token sent with every request
token_env = "SYNOCHAT_API_TOKEN"

# Request timeout against the settings API, in seconds
timeout_secs = 30
"#;

pub struct ConfigManager;

impl ConfigManager {

    pub fn default_path() -> PathBuf {
        dirs::home_dir()
            .map(|d| d.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
            .unwrap_or_else(|| PathBuf::from(CONFIG_FILE_NAME))
    }

    pub fn load() -> SynochatResult<Config> {
        let mut config = Self::load_from(&Self::default_path())?;
        Self::apply_env_overrides(&mut config);
        Ok(config)
    }

    /// Reads a config file; a missing file yields the defaults.
    pub fn load_from(path: &Path) -> SynochatResult<Config> {
        if !path.exists() {
            log::debug!("No config file at {}, using defaults", path.display());
            return Ok(Config::default());
        }

        log::info!("📋 Loading config from: {}", path.display());
        let content = fs::read_to_string(path).map_err(|e| SynochatError::ConfigurationFileError {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;

        toml::from_str(&content).map_err(|e| SynochatError::ConfigurationFileError {
            path: path.display().to_string(),
            reason: e.message().to_string(),
        })
    }

    pub fn apply_env_overrides(config: &mut Config) {
        if let Ok(url) = std::env::var(SERVER_URL_ENV) {
            if !url.trim().is_empty() {
                log::debug!("Using server URL from {}", SERVER_URL_ENV);
                config.server.base_url = url;
            }
        }
    }

    pub fn create_sample_config(path: &Path) -> SynochatResult<()> {
        if path.exists() {
            return Err(SynochatError::config_error(
                &format!("config file already exists: {}", path.display()),
                None,
                Some("Edit the existing file or remove it first"),
            ));
        }

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, SAMPLE_CONFIG)?;
        log::info!("✅ Created sample config at: {}", path.display());
        Ok(())
    }

    pub fn validate_config(config: &Config) -> ValidationResult {
        let mut result = ValidationResult::default();

        match Url::parse(&config.server.base_url) {
            Ok(url) if url.scheme() == "http" || url.scheme() == "https" => {}
            Ok(url) => result.error(format!("server.base_url must use http or https, got '{}'", url.scheme())),
            Err(e) => result.error(format!("server.base_url '{}' is not a valid URL: {}", config.server.base_url, e)),
        }

        if config.server.timeout_secs == 0 {
            result.error("server.timeout_secs must be greater than zero");
        }

        match &config.server.token_env {
            Some(name) if config.server.api_token().is_none() => {
                result.warning(format!("token variable {} is not set; requests will be unauthenticated", name));
            }
            _ => {}
        }

        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn missing_file_yields_defaults() {
        let dir = TempDir::new().unwrap();
        let config = ConfigManager::load_from(&dir.path().join("absent.toml")).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn sample_config_round_trips_through_loader() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join(CONFIG_FILE_NAME);

        ConfigManager::create_sample_config(&path).unwrap();
        let config = ConfigManager::load_from(&path).unwrap();

        assert_eq!(config.server.base_url, "http://localhost:8001/api/v1");
        assert_eq!(config.server.timeout_secs, 30);
        assert!(ConfigManager::create_sample_config(&path).is_err());
    }

    #[test]
    fn partial_file_fills_defaults() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(CONFIG_FILE_NAME);
        fs::write(&path, "[server]\nbase_url = \"https://rss.example.com/api/v1\"\n").unwrap();

        let config = ConfigManager::load_from(&path).unwrap();
        assert_eq!(config.server.base_url, "https://rss.example.com/api/v1");
        assert_eq!(config.server.timeout_secs, 30);
    }

    #[test]
    fn broken_file_is_a_file_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(CONFIG_FILE_NAME);
        fs::write(&path, "[server\n").unwrap();

        let error = ConfigManager::load_from(&path).unwrap_err();
        assert!(matches!(error, SynochatError::ConfigurationFileError { .. }));
    }

    #[test]
    fn validation_flags_bad_url_and_timeout() {
        let mut config = Config::default();
        config.server.base_url = "ftp://example.com".to_string();
        config.server.timeout_secs = 0;
        config.server.token_env = None;

        let result = ConfigManager::validate_config(&config);
        assert!(!result.is_valid());
        assert_eq!(result.errors.len(), 2);
        assert!(result.warnings.is_empty());
    }
}
