use async_trait::async_trait;
use zonecheck_domain::{Correction, DomainConfig, DomainError, Nameserver};

/// Contract shared by zone-mutating providers and the verification provider.
#[async_trait]
pub trait DnsProvider: Send + Sync {
    async fn get_nameservers(&self, domain: &str) -> Result<Vec<Nameserver>, DomainError>;

    async fn get_domain_corrections(
        &self,
        desired: &DomainConfig,
    ) -> Result<Vec<Correction>, DomainError>;
}
