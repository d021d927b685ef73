//! Zonecheck Domain Layer
pub mod config;
pub mod correction;
pub mod dns_record;
pub mod domain_config;
pub mod errors;
pub mod nameserver;
pub mod spf;

pub use config::{CliOverrides, Config, ConfigError, ProviderConfig, ProviderConfigs, QueryConfig};
pub use correction::Correction;
pub use dns_record::{group_records, RecordConfig, RecordKey, RecordType};
pub use domain_config::{DomainConfig, DEFAULT_NS_TTL};
pub use errors::DomainError;
pub use nameserver::{Nameserver, NameserverAddr, SIMULATED_SECONDARIES};
pub use spf::{split_txt, SpfFlattener};
