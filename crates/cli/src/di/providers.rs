use tracing::info;
use zonecheck_application::providers::ProviderRegistry;
use zonecheck_domain::{Config, DomainError};
use zonecheck_infrastructure::providers::register_query_provider;

/// Registers every provider type this binary ships, in a fixed order.
pub fn build_registry(config: &Config) -> Result<ProviderRegistry, DomainError> {
    let mut registry = ProviderRegistry::new();

    register_query_provider(&mut registry, config.query.clone())?;

    info!(provider_types = ?registry.provider_types(), "Provider registry ready");
    Ok(registry)
}
