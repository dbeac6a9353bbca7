use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use super::auth::AuthConfig;
use super::broadcast::BroadcastConfig;
use super::checker::CheckerConfig;
use super::database::DatabaseConfig;
use super::errors::ConfigError;
use super::import::ImportConfig;
use super::logging::LoggingConfig;
use super::server::ServerConfig;

const LOCAL_CONFIG_PATH: &str = "brandwatch.toml";
const SYSTEM_CONFIG_PATH: &str = "/etc/brandwatch/config.toml";

/// Main configuration structure for Brandwatch
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct Config {
    /// HTTP server configuration (port, bind address)
    #[serde(default)]
    pub server: ServerConfig,

    #[serde(default)]
    pub database: DatabaseConfig,

    #[serde(default)]
    pub logging: LoggingConfig,

    /// Bulk import tuning
    #[serde(default)]
    pub import: ImportConfig,

    /// Status-change coalescing and subscriber stream settings
    #[serde(default)]
    pub broadcast: BroadcastConfig,

    /// External checking system integration
    #[serde(default)]
    pub checker: CheckerConfig,

    #[serde(default)]
    pub auth: AuthConfig,
}

impl Config {
    /// Load configuration from file or use defaults
    ///
    /// Priority order:
    /// 1. Explicitly provided path
    /// 2. brandwatch.toml in current directory
    /// 3. /etc/brandwatch/config.toml
    /// 4. Default configuration
    pub fn load(path: Option<&str>, cli_overrides: CliOverrides) -> Result<Self, ConfigError> {
        let mut config = if let Some(path) = path {
            Self::from_file(path)?
        } else if let Some(found) = Self::get_config_path() {
            Self::from_file(&found)?
        } else {
            Self::default()
        };

        config.apply_cli_overrides(cli_overrides);
        Ok(config)
    }

    pub fn from_toml(contents: &str) -> Result<Self, ConfigError> {
        toml::from_str(contents).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    fn from_file(path: &str) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::FileRead(path.to_string(), e.to_string()))?;
        Self::from_toml(&contents)
    }

    fn apply_cli_overrides(&mut self, overrides: CliOverrides) {
        if let Some(port) = overrides.web_port {
            self.server.web_port = port;
        }
        if let Some(bind) = overrides.bind_address {
            self.server.bind_address = bind;
        }
        if let Some(db) = overrides.database_path {
            self.database.path = db;
        }
        if let Some(level) = overrides.log_level {
            self.logging.level = level;
        }
        if let Some(url) = overrides.checker_feed_url {
            self.checker.feed_url = Some(url);
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.server.web_port == 0 {
            return Err(ConfigError::Validation("Web port cannot be 0".to_string()));
        }

        if self.import.chunk_size == 0 {
            return Err(ConfigError::Validation(
                "import.chunk_size must be at least 1".to_string(),
            ));
        }

        if self.broadcast.flush_threshold == 0 {
            return Err(ConfigError::Validation(
                "broadcast.flush_threshold must be at least 1".to_string(),
            ));
        }

        if self.broadcast.channel_capacity == 0 {
            return Err(ConfigError::Validation(
                "broadcast.channel_capacity must be at least 1".to_string(),
            ));
        }

        if self.checker.status_update_chunk_size == 0 {
            return Err(ConfigError::Validation(
                "checker.status_update_chunk_size must be at least 1".to_string(),
            ));
        }

        if self.checker.connect_timeout_secs == 0 {
            return Err(ConfigError::Validation(
                "checker.connect_timeout_secs must be at least 1".to_string(),
            ));
        }

        let mut seen = HashSet::new();
        for token in &self.auth.tokens {
            if token.token.is_empty() {
                return Err(ConfigError::Validation(format!(
                    "Auth token for '{}' is empty",
                    token.name
                )));
            }
            if !seen.insert(token.token.as_str()) {
                return Err(ConfigError::Validation(format!(
                    "Auth token for '{}' is not unique",
                    token.name
                )));
            }
        }

        Ok(())
    }

    /// Get the path to the configuration file being used
    pub fn get_config_path() -> Option<String> {
        if std::path::Path::new(LOCAL_CONFIG_PATH).exists() {
            Some(LOCAL_CONFIG_PATH.to_string())
        } else if std::path::Path::new(SYSTEM_CONFIG_PATH).exists() {
            Some(SYSTEM_CONFIG_PATH.to_string())
        } else {
            None
        }
    }
}

/// Command-line overrides for configuration
#[derive(Debug, Default)]
pub struct CliOverrides {
    pub web_port: Option<u16>,
    pub bind_address: Option<String>,
    pub database_path: Option<String>,
    pub log_level: Option<String>,
    pub checker_feed_url: Option<String>,
}
