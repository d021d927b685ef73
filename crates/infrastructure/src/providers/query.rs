//! The `QUERY` provider: verifies a desired zone against live DNS.
//!
//! It never mutates anything. Every correction it returns is a report
//! with a no-op action.

use crate::dns::WireExchanger;
use async_trait::async_trait;
use std::sync::Arc;
use tracing::debug;
use zonecheck_application::ports::{DnsExchanger, DnsProvider};
use zonecheck_application::providers::ProviderRegistry;
use zonecheck_application::use_cases::ReconcileDomainUseCase;
use zonecheck_domain::{
    Correction, DomainConfig, DomainError, Nameserver, ProviderConfig, QueryConfig,
};

pub const QUERY_PROVIDER_TYPE: &str = "QUERY";

pub struct QueryProvider {
    engine: ReconcileDomainUseCase,
}

impl QueryProvider {
    pub fn new(exchanger: Arc<dyn DnsExchanger>, options: QueryConfig) -> Self {
        Self {
            engine: ReconcileDomainUseCase::new(exchanger, options),
        }
    }

    /// Builds a provider over the wire exchanger, layering the entry's
    /// provider-specific keys over `base`.
    pub fn from_provider_config(
        base: &QueryConfig,
        config: &ProviderConfig,
    ) -> Result<Self, DomainError> {
        let options = base
            .with_provider_settings(config)
            .map_err(|e| DomainError::ConfigError(e.to_string()))?;
        options
            .validate()
            .map_err(|e| DomainError::ConfigError(e.to_string()))?;

        debug!(
            provider = %config.name,
            default_server = %options.default_server,
            all_nameservers = options.all_nameservers,
            soa_serial = options.soa_serial,
            "Creating QUERY provider"
        );

        let exchanger = Arc::new(WireExchanger::from_config(&options));
        Ok(Self::new(exchanger, options))
    }
}

#[async_trait]
impl DnsProvider for QueryProvider {
    /// Live DNS is not a registrar: there is nothing to delegate to.
    async fn get_nameservers(&self, _domain: &str) -> Result<Vec<Nameserver>, DomainError> {
        Ok(Vec::new())
    }

    async fn get_domain_corrections(
        &self,
        desired: &DomainConfig,
    ) -> Result<Vec<Correction>, DomainError> {
        self.engine.execute(desired).await
    }
}

/// Adds `QUERY` to `registry`, with `base` as the defaults every entry
/// starts from.
pub fn register_query_provider(
    registry: &mut ProviderRegistry,
    base: QueryConfig,
) -> Result<(), DomainError> {
    registry.register(QUERY_PROVIDER_TYPE, move |config: &ProviderConfig| {
        let provider = QueryProvider::from_provider_config(&base, config)?;
        Ok(Arc::new(provider) as Arc<dyn DnsProvider>)
    })
}
