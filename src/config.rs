//! Connection configuration
//!
//! Settings resolve in precedence order: command-line flag, environment
//! variable (wired through clap), then the global config file at
//! `~/.config/subscription-cli/config.toml`, then defaults. Credentials
//! have no default and are required before any command runs.

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use url::Url;

/// Default engine API base URL
pub const DEFAULT_URL: &str = "http://localhost:8228/v1";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid API URL '{0}': {1}")]
    InvalidUrl(String, url::ParseError),

    #[error("No credentials configured. Set --user/--pass, SUBSCRIPTION_CLI_USER/SUBSCRIPTION_CLI_PASS, or the config file.")]
    MissingCredentials,
}

/// On-disk shape of the global config file
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct FileConfig {
    pub url: Option<String>,
    pub user: Option<String>,
    pub pass: Option<String>,
}

/// Resolved connection settings
#[derive(Debug, Clone)]
pub struct Config {
    pub url: String,
    pub user: Option<String>,
    pub pass: Option<String>,
}

impl Config {
    /// Resolves settings from CLI/env values over the global config file
    pub fn resolve(
        url: Option<String>,
        user: Option<String>,
        pass: Option<String>,
    ) -> Result<Self> {
        let file = Self::load_global()?;

        Ok(Self {
            url: url
                .or(file.url)
                .unwrap_or_else(|| DEFAULT_URL.to_string()),
            user: user.or(file.user),
            pass: pass.or(file.pass),
        })
    }

    /// Returns the global config directory
    pub fn global_config_dir() -> Option<PathBuf> {
        ProjectDirs::from("dev", "subscription", "subscription-cli")
            .map(|dirs| dirs.config_dir().to_path_buf())
    }

    /// Loads the global config file, or defaults when absent
    fn load_global() -> Result<FileConfig> {
        let config_dir = match Self::global_config_dir() {
            Some(dir) => dir,
            None => return Ok(FileConfig::default()),
        };

        let config_path = config_dir.join("config.toml");
        if !config_path.exists() {
            return Ok(FileConfig::default());
        }

        let content = fs::read_to_string(&config_path)
            .with_context(|| format!("Failed to read config: {}", config_path.display()))?;

        toml::from_str(&content)
            .with_context(|| format!("Failed to parse config: {}", config_path.display()))
    }

    /// Access check run before any subcommand dispatches: the URL must
    /// parse and both credentials must be present.
    pub fn validate(&self) -> Result<(), ConfigError> {
        Url::parse(&self.url).map_err(|e| ConfigError::InvalidUrl(self.url.clone(), e))?;

        match (&self.user, &self.pass) {
            (Some(user), Some(pass)) if !user.is_empty() && !pass.is_empty() => Ok(()),
            _ => Err(ConfigError::MissingCredentials),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(url: &str, user: Option<&str>, pass: Option<&str>) -> Config {
        Config {
            url: url.to_string(),
            user: user.map(String::from),
            pass: pass.map(String::from),
        }
    }

    #[test]
    fn parse_file_config() {
        let toml = r#"
url = "https://engine.example.com/v1"
user = "admin"
pass = "foobar"
"#;

        let file: FileConfig = toml::from_str(toml).unwrap();
        assert_eq!(file.url.as_deref(), Some("https://engine.example.com/v1"));
        assert_eq!(file.user.as_deref(), Some("admin"));
        assert_eq!(file.pass.as_deref(), Some("foobar"));
    }

    #[test]
    fn partial_file_config() {
        let file: FileConfig = toml::from_str(r#"user = "admin""#).unwrap();
        assert!(file.url.is_none());
        assert_eq!(file.user.as_deref(), Some("admin"));
        assert!(file.pass.is_none());
    }

    #[test]
    fn validate_accepts_complete_config() {
        let config = config(DEFAULT_URL, Some("admin"), Some("foobar"));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn validate_rejects_missing_credentials() {
        for (user, pass) in [(None, None), (Some("admin"), None), (None, Some("foobar"))] {
            let config = config(DEFAULT_URL, user, pass);
            assert!(matches!(
                config.validate(),
                Err(ConfigError::MissingCredentials)
            ));
        }
    }

    #[test]
    fn validate_rejects_empty_credentials() {
        let config = config(DEFAULT_URL, Some(""), Some("foobar"));
        assert!(config.validate().is_err());
    }

    #[test]
    fn validate_rejects_bad_url() {
        let config = config("not a url", Some("admin"), Some("foobar"));
        assert!(matches!(config.validate(), Err(ConfigError::InvalidUrl(..))));
    }
}
