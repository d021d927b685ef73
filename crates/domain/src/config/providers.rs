use super::errors::ConfigError;
use serde::Deserialize;
use serde_json::Value;
use std::collections::BTreeMap;

/// One entry of `providers.json`: which provider type to build and which
/// zone to exercise, plus free-form provider-specific keys.
#[derive(Debug, Clone, Deserialize)]
pub struct ProviderConfig {
    /// Logical name, taken from the JSON object key.
    #[serde(skip)]
    pub name: String,

    pub domain: String,

    #[serde(rename = "providerType")]
    pub provider_type: String,

    #[serde(flatten)]
    pub settings: BTreeMap<String, Value>,
}

impl ProviderConfig {
    pub fn new(name: &str, domain: &str, provider_type: &str) -> Self {
        Self {
            name: name.to_string(),
            domain: domain.to_string(),
            provider_type: provider_type.to_string(),
            settings: BTreeMap::new(),
        }
    }

    pub fn with_setting(mut self, key: &str, value: &str) -> Self {
        self.settings
            .insert(key.to_string(), Value::String(value.to_string()));
        self
    }

    /// Scalar settings rendered as strings; objects and arrays are ignored.
    pub fn setting(&self, key: &str) -> Option<String> {
        match self.settings.get(key)? {
            Value::String(s) => Some(s.clone()),
            Value::Bool(b) => Some(b.to_string()),
            Value::Number(n) => Some(n.to_string()),
            _ => None,
        }
    }
}

/// All provider entries, ordered by logical name.
#[derive(Debug, Clone, Default)]
pub struct ProviderConfigs {
    entries: BTreeMap<String, ProviderConfig>,
}

impl ProviderConfigs {
    pub fn load(path: &str) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::FileRead(path.to_string(), e.to_string()))?;
        Self::from_json(&contents)
    }

    pub fn from_json(contents: &str) -> Result<Self, ConfigError> {
        let mut entries: BTreeMap<String, ProviderConfig> =
            serde_json::from_str(contents).map_err(|e| ConfigError::Parse(e.to_string()))?;

        for (name, entry) in entries.iter_mut() {
            entry.name = name.clone();
            if entry.domain.trim().is_empty() {
                return Err(ConfigError::Validation(format!(
                    "Provider '{}' has no domain",
                    name
                )));
            }
            if entry.provider_type.trim().is_empty() {
                return Err(ConfigError::Validation(format!(
                    "Provider '{}' has no providerType",
                    name
                )));
            }
        }

        Ok(Self { entries })
    }

    pub fn get(&self, name: &str) -> Option<&ProviderConfig> {
        self.entries.get(name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &ProviderConfig> {
        self.entries.values()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
