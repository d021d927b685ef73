//! Name-keyed constructors for DNS providers.
//!
//! The registry is filled by explicit, ordered `register` calls while the
//! process starts, then shared read-only behind an `Arc`.

use crate::ports::DnsProvider;
use std::collections::BTreeMap;
use std::sync::Arc;
use tracing::{debug, warn};
use zonecheck_domain::{DomainError, ProviderConfig};

pub type ProviderConstructor =
    Box<dyn Fn(&ProviderConfig) -> Result<Arc<dyn DnsProvider>, DomainError> + Send + Sync>;

#[derive(Default)]
pub struct ProviderRegistry {
    constructors: BTreeMap<String, ProviderConstructor>,
}

impl ProviderRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `constructor` under `type_name`.
    ///
    /// A name can be registered once; a second registration leaves the first
    /// in place and returns `ProviderAlreadyRegistered`.
    pub fn register<F>(&mut self, type_name: &str, constructor: F) -> Result<(), DomainError>
    where
        F: Fn(&ProviderConfig) -> Result<Arc<dyn DnsProvider>, DomainError>
            + Send
            + Sync
            + 'static,
    {
        if self.constructors.contains_key(type_name) {
            return Err(DomainError::ProviderAlreadyRegistered(type_name.to_string()));
        }

        debug!(provider_type = %type_name, "Registered provider type");
        self.constructors
            .insert(type_name.to_string(), Box::new(constructor));
        Ok(())
    }

    pub fn create(
        &self,
        type_name: &str,
        config: &ProviderConfig,
    ) -> Result<Arc<dyn DnsProvider>, DomainError> {
        let constructor = self.constructors.get(type_name).ok_or_else(|| {
            warn!(
                provider_type = %type_name,
                known = ?self.provider_types(),
                "Unknown provider type"
            );
            DomainError::ProviderNotFound(type_name.to_string())
        })?;

        constructor(config)
    }

    pub fn contains(&self, type_name: &str) -> bool {
        self.constructors.contains_key(type_name)
    }

    /// Registered type names, sorted.
    pub fn provider_types(&self) -> Vec<&str> {
        self.constructors.keys().map(String::as_str).collect()
    }
}
