use crate::constants;
use crate::error::AppError;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tokio::fs;
use tokio::io::AsyncWriteExt;

/// Configuration structure for the application.
/// Handles loading, saving, and managing application settings.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Config {
    /// Base URL of the backend API, including the version prefix.
    pub api_base_url: String,
    /// Path to the log file. If not specified, logs go to the default location.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub log_file_path: Option<String>,
    /// HTTP timeout in seconds for API requests.
    #[serde(default = "default_http_timeout")]
    pub http_timeout_seconds: u64,
}

fn default_http_timeout() -> u64 {
    constants::DEFAULT_HTTP_TIMEOUT_SECONDS
}

impl Default for Config {
    fn default() -> Self {
        Config {
            api_base_url: constants::DEFAULT_API_BASE_URL.to_string(),
            log_file_path: None,
            http_timeout_seconds: default_http_timeout(),
        }
    }
}

impl Config {
    /// Loads configuration from the default config file location.
    /// Falls back to defaults when no config file exists.
    /// Environment variables override config file values.
    ///
    /// # Environment Variables
    /// - `SCOUT_API_URL` - Override API base URL
    /// - `SCOUT_LOG_FILE` - Override log file path
    /// - `SCOUT_HTTP_TIMEOUT` - Override HTTP timeout in seconds
    pub async fn load() -> Result<Self, AppError> {
        Self::load_from_path(&get_config_path()).await
    }

    /// Loads configuration from an explicit path, applying env overrides.
    pub async fn load_from_path(config_path: &Path) -> Result<Self, AppError> {
        let mut config = if config_path.exists() {
            let content = fs::read_to_string(config_path).await?;
            toml::from_str(&content)?
        } else {
            Config::default()
        };

        if let Ok(api_base_url) = std::env::var("SCOUT_API_URL") {
            config.api_base_url = api_base_url;
        }
        if let Ok(log_file) = std::env::var("SCOUT_LOG_FILE") {
            config.log_file_path = Some(log_file);
        }
        if let Ok(timeout_str) = std::env::var("SCOUT_HTTP_TIMEOUT") {
            match timeout_str.parse::<u64>() {
                Ok(timeout) if timeout > 0 => config.http_timeout_seconds = timeout,
                _ => {
                    return Err(AppError::config_error(format!(
                        "Invalid SCOUT_HTTP_TIMEOUT value: {timeout_str}"
                    )));
                }
            }
        }

        if config.api_base_url.trim().is_empty() {
            return Err(AppError::config_error("API base URL must not be empty"));
        }

        Ok(config)
    }

    /// Saves the configuration to the default config file location,
    /// creating the parent directory if needed.
    pub async fn save(&self) -> Result<(), AppError> {
        self.save_to_path(&get_config_path()).await
    }

    /// Saves the configuration to an explicit path.
    pub async fn save_to_path(&self, config_path: &Path) -> Result<(), AppError> {
        if let Some(parent) = config_path.parent()
            && !parent.exists()
        {
            fs::create_dir_all(parent).await?;
        }

        let content = toml::to_string_pretty(self)?;
        let mut file = fs::File::create(config_path).await?;
        file.write_all(content.as_bytes()).await?;
        file.flush().await?;
        Ok(())
    }

    /// Returns a plain-text listing of the current settings for --list-config.
    pub fn display(&self) -> String {
        format!(
            "api_base_url = {}\nlog_file_path = {}\nhttp_timeout_seconds = {}",
            self.api_base_url,
            self.log_file_path.as_deref().unwrap_or("(default)"),
            self.http_timeout_seconds
        )
    }
}

/// Platform-specific path of the config file.
pub fn get_config_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("sleeper_scout")
        .join("config.toml")
}

/// Platform-specific directory for log files.
pub fn get_log_dir_path() -> PathBuf {
    dirs::state_dir()
        .or_else(dirs::cache_dir)
        .unwrap_or_else(|| PathBuf::from("."))
        .join("sleeper_scout")
        .join("logs")
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use tempfile::tempdir;

    fn clear_env() {
        // Safety: tests are serialized, no concurrent env access
        unsafe {
            std::env::remove_var("SCOUT_API_URL");
            std::env::remove_var("SCOUT_LOG_FILE");
            std::env::remove_var("SCOUT_HTTP_TIMEOUT");
        }
    }

    #[tokio::test]
    #[serial]
    async fn test_load_missing_file_uses_defaults() {
        clear_env();
        let dir = tempdir().unwrap();
        let config = Config::load_from_path(&dir.path().join("config.toml"))
            .await
            .unwrap();
        assert_eq!(config.api_base_url, constants::DEFAULT_API_BASE_URL);
        assert_eq!(
            config.http_timeout_seconds,
            constants::DEFAULT_HTTP_TIMEOUT_SECONDS
        );
        assert!(config.log_file_path.is_none());
    }

    #[tokio::test]
    #[serial]
    async fn test_save_and_load_round_trip() {
        clear_env();
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        let config = Config {
            api_base_url: "https://fantasy.example.com/api/v1".to_string(),
            log_file_path: Some("/tmp/scout.log".to_string()),
            http_timeout_seconds: 10,
        };
        config.save_to_path(&path).await.unwrap();

        let loaded = Config::load_from_path(&path).await.unwrap();
        assert_eq!(loaded.api_base_url, "https://fantasy.example.com/api/v1");
        assert_eq!(loaded.log_file_path.as_deref(), Some("/tmp/scout.log"));
        assert_eq!(loaded.http_timeout_seconds, 10);
    }

    #[tokio::test]
    #[serial]
    async fn test_env_overrides_take_precedence() {
        clear_env();
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        Config::default().save_to_path(&path).await.unwrap();

        unsafe {
            std::env::set_var("SCOUT_API_URL", "http://127.0.0.1:9999/api/v1");
            std::env::set_var("SCOUT_HTTP_TIMEOUT", "5");
        }
        let config = Config::load_from_path(&path).await.unwrap();
        clear_env();

        assert_eq!(config.api_base_url, "http://127.0.0.1:9999/api/v1");
        assert_eq!(config.http_timeout_seconds, 5);
    }

    #[tokio::test]
    #[serial]
    async fn test_invalid_timeout_env_is_rejected() {
        clear_env();
        let dir = tempdir().unwrap();
        unsafe {
            std::env::set_var("SCOUT_HTTP_TIMEOUT", "not-a-number");
        }
        let result = Config::load_from_path(&dir.path().join("config.toml")).await;
        clear_env();

        assert!(matches!(result, Err(AppError::Config(_))));
    }
}
