use super::errors::ConfigError;
use super::providers::ProviderConfig;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Settings of the live-DNS verification provider.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct QueryConfig {
    /// Per send/receive step, in milliseconds.
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,

    #[serde(default = "default_port")]
    pub port: u16,

    /// Queried when the desired zone delegates to no nameserver.
    #[serde(default = "default_lookup_server")]
    pub default_server: String,

    /// Query every authoritative nameserver instead of only the first.
    #[serde(default = "default_true")]
    pub all_nameservers: bool,

    /// Append synthetic secondaries to the nameserver list.
    #[serde(default)]
    pub simulate_secondaries: bool,

    /// Expected apex SOA serial; 0 compares against the live serial.
    #[serde(default)]
    pub soa_serial: u32,
}

impl Default for QueryConfig {
    fn default() -> Self {
        Self {
            timeout_ms: default_timeout_ms(),
            port: default_port(),
            default_server: default_lookup_server(),
            all_nameservers: true,
            simulate_secondaries: false,
            soa_serial: 0,
        }
    }
}

impl QueryConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }

    /// Layers the provider-specific keys of a `providers.json` entry on top.
    pub fn with_provider_settings(&self, provider: &ProviderConfig) -> Result<Self, ConfigError> {
        let mut merged = self.clone();

        if let Some(server) = provider.setting("defaultServer") {
            merged.default_server = server;
        }
        if let Some(value) = provider.setting("allNameservers") {
            merged.all_nameservers = parse_setting(provider, "allNameservers", &value)?;
        }
        if let Some(value) = provider.setting("simulateSecondaries") {
            merged.simulate_secondaries = parse_setting(provider, "simulateSecondaries", &value)?;
        }
        if let Some(value) = provider.setting("soaSerial") {
            merged.soa_serial = parse_setting(provider, "soaSerial", &value)?;
        }
        if let Some(value) = provider.setting("timeoutMs") {
            merged.timeout_ms = parse_setting(provider, "timeoutMs", &value)?;
        }

        Ok(merged)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.timeout_ms == 0 {
            return Err(ConfigError::Validation(
                "query.timeout_ms cannot be 0".to_string(),
            ));
        }
        if self.port == 0 {
            return Err(ConfigError::Validation("query.port cannot be 0".to_string()));
        }
        if self.default_server.trim().is_empty() {
            return Err(ConfigError::Validation(
                "query.default_server cannot be empty".to_string(),
            ));
        }
        Ok(())
    }
}

fn parse_setting<T>(provider: &ProviderConfig, key: &str, value: &str) -> Result<T, ConfigError>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    value.parse().map_err(|e: T::Err| ConfigError::InvalidSetting {
        provider: provider.name.clone(),
        key: key.to_string(),
        reason: e.to_string(),
    })
}

fn default_timeout_ms() -> u64 {
    5000
}

fn default_port() -> u16 {
    53
}

fn default_lookup_server() -> String {
    "8.8.8.8".to_string()
}

fn default_true() -> bool {
    true
}
