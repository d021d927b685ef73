use serde::{Deserialize, Serialize};

use super::errors::ConfigError;
use super::harness::{HarnessConfig, SpfConfig};
use super::logging::LoggingConfig;
use super::query::QueryConfig;

/// Main configuration structure for zonecheck
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct Config {
    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,

    /// Live query / verification settings
    #[serde(default)]
    pub query: QueryConfig,

    /// Integration harness settings
    #[serde(default)]
    pub harness: HarnessConfig,

    /// SPF flattening settings
    #[serde(default)]
    pub spf: SpfConfig,
}

impl Config {
    /// Load configuration from file or use defaults
    ///
    /// Priority order:
    /// 1. Explicitly provided path
    /// 2. zonecheck.toml in current directory
    /// 3. /etc/zonecheck/config.toml
    /// 4. Default configuration
    pub fn load(path: Option<&str>, cli_overrides: CliOverrides) -> Result<Self, ConfigError> {
        let mut config = if let Some(path) = path {
            Self::from_file(path)?
        } else if std::path::Path::new("zonecheck.toml").exists() {
            Self::from_file("zonecheck.toml")?
        } else if std::path::Path::new("/etc/zonecheck/config.toml").exists() {
            Self::from_file("/etc/zonecheck/config.toml")?
        } else {
            Self::default()
        };

        config.apply_cli_overrides(cli_overrides);
        config.validate()?;
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

    /// Apply command-line overrides to configuration
    pub fn apply_cli_overrides(&mut self, overrides: CliOverrides) {
        if let Some(level) = overrides.log_level {
            self.logging.level = level;
        }
        if let Some(timeout_ms) = overrides.timeout_ms {
            self.query.timeout_ms = timeout_ms;
        }
        if let Some(file) = overrides.providers_file {
            self.harness.providers_file = file;
        }
        if overrides.dual_providers {
            self.harness.dual_providers = true;
        }
        if overrides.verify_live {
            self.harness.verify_live = true;
        }
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.query.validate()?;

        if self.harness.providers_file.trim().is_empty() {
            return Err(ConfigError::Validation(
                "harness.providers_file cannot be empty".to_string(),
            ));
        }
        if self.spf.first_chunk_limit == 0 {
            return Err(ConfigError::Validation(
                "spf.first_chunk_limit cannot be 0".to_string(),
            ));
        }

        Ok(())
    }
}

/// Command-line overrides for configuration
#[derive(Debug, Default)]
pub struct CliOverrides {
    pub log_level: Option<String>,
    pub timeout_ms: Option<u64>,
    pub providers_file: Option<String>,
    pub dual_providers: bool,
    pub verify_live: bool,
}
