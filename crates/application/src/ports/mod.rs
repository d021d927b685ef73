mod dns_exchanger;
mod dns_provider;
mod record_differ;

pub use dns_exchanger::DnsExchanger;
pub use dns_provider::DnsProvider;
pub use record_differ::RecordDiffer;

// Re-export for convenience
pub use zonecheck_domain::{Correction, DomainConfig, Nameserver};
