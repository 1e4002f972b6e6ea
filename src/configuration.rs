//! Configuration file support.
//!
//! The optional `config.yml` supplies defaults for values that can also be
//! given on the command line or through environment variables:
//!
//! ```yaml
//! host: https://network.pivotal.io
//! api_token: my-token
//! user_agent: my-pipeline/1.0
//! ```

use crate::http_utils::{default_user_agent, ClientConfig, DEFAULT_HOST};
use dirs::config_dir;
use serde::{Deserialize, Serialize};
use std::{
    fs,
    io::ErrorKind,
    path::{Path, PathBuf},
};
use tracing::debug;

pub const DEFAULT_APPLICATION_ID: &str = "pivnet";
pub const DEFAULT_CONFIGURATION_FILE_NAME: &str = "config.yml";

/// Overrides the directory the configuration file is read from
pub const CONFIG_DIR_ENV: &str = "PIVNET_CONFIG_DIR";

#[derive(Debug, thiserror::Error)]
pub enum ConfigurationError {
    #[error("failed to resolve the configuration directory")]
    FailedToFindConfigurationDirectory,
    #[error("failed to load configuration data from {path:?}, because of: {cause}")]
    FailedToLoadData {
        path: PathBuf,
        cause: Box<dyn std::error::Error + Send + Sync>,
    },
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Configuration {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    host: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    api_token: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    user_agent: Option<String>,
}

impl Configuration {
    pub fn host(&self) -> Option<&str> {
        self.host.as_deref()
    }

    pub fn api_token(&self) -> Option<&str> {
        self.api_token.as_deref()
    }

    pub fn user_agent(&self) -> Option<&str> {
        self.user_agent.as_deref()
    }

    pub fn get_default_configuration_file_path() -> Result<PathBuf, ConfigurationError> {
        if let Ok(config_dir_str) = std::env::var(CONFIG_DIR_ENV) {
            let mut config_path = PathBuf::from(config_dir_str);
            config_path.push(DEFAULT_CONFIGURATION_FILE_NAME);
            return Ok(config_path);
        }

        match config_dir() {
            Some(mut default_config_file_path) => {
                default_config_file_path.push(DEFAULT_APPLICATION_ID);
                default_config_file_path.push(DEFAULT_CONFIGURATION_FILE_NAME);
                Ok(default_config_file_path)
            }
            None => Err(ConfigurationError::FailedToFindConfigurationDirectory),
        }
    }

    /// Load the default configuration file, falling back to an empty
    /// configuration when there is none.
    pub fn load_default() -> Result<Configuration, ConfigurationError> {
        let default_file_path = Configuration::get_default_configuration_file_path()?;
        debug!("Loading configuration from {}...", default_file_path.display());
        Configuration::load_from_file_or_default(&default_file_path)
    }

    pub fn load_from_file_or_default(path: &Path) -> Result<Configuration, ConfigurationError> {
        match fs::read_to_string(path) {
            Ok(contents) => Configuration::parse(path, &contents),
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!("No configuration file at {}, using defaults", path.display());
                Ok(Configuration::default())
            }
            Err(cause) => Err(ConfigurationError::FailedToLoadData {
                path: path.to_path_buf(),
                cause: Box::new(cause),
            }),
        }
    }

    fn parse(path: &Path, contents: &str) -> Result<Configuration, ConfigurationError> {
        // An empty file is a valid, empty configuration
        if contents.trim().is_empty() {
            return Ok(Configuration::default());
        }
        serde_yaml::from_str(contents).map_err(|cause| ConfigurationError::FailedToLoadData {
            path: path.to_path_buf(),
            cause: Box::new(cause),
        })
    }

    /// Combine command-line values with the file; command-line values win
    pub fn client_config(&self, host: Option<&str>, api_token: Option<&str>) -> ClientConfig {
        ClientConfig {
            host: host
                .or(self.host())
                .unwrap_or(DEFAULT_HOST)
                .to_string(),
            token: api_token.or(self.api_token()).map(str::to_string),
            user_agent: self
                .user_agent()
                .map(str::to_string)
                .unwrap_or_else(default_user_agent),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let configuration =
            Configuration::load_from_file_or_default(&dir.path().join("config.yml")).unwrap();
        assert_eq!(configuration, Configuration::default());
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.yml");
        fs::write(&path, "host: https://example.com\napi_token: secret\n").unwrap();

        let loaded = Configuration::load_from_file_or_default(&path).unwrap();
        assert_eq!(loaded.host(), Some("https://example.com"));
        assert_eq!(loaded.api_token(), Some("secret"));
        assert_eq!(loaded.user_agent(), None);
    }

    #[test]
    fn test_malformed_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.yml");
        fs::write(&path, "host: [unterminated").unwrap();

        let result = Configuration::load_from_file_or_default(&path);
        assert!(matches!(
            result,
            Err(ConfigurationError::FailedToLoadData { .. })
        ));
    }

    #[test]
    fn test_command_line_values_win() {
        let configuration: Configuration = serde_yaml::from_str(
            "host: https://from-file.example.com\napi_token: file-token\n",
        )
        .unwrap();

        let client_config = configuration.client_config(Some("http://localhost:1234"), None);
        assert_eq!(client_config.host, "http://localhost:1234");
        assert_eq!(client_config.token.as_deref(), Some("file-token"));

        let client_config = Configuration::default().client_config(None, None);
        assert_eq!(client_config.host, DEFAULT_HOST);
        assert!(client_config.token.is_none());
    }
}
