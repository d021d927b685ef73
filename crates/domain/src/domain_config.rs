use crate::dns_record::{RecordConfig, RecordType, APEX};
use crate::nameserver::Nameserver;

/// TTL given to apex NS records synthesized from the nameserver list.
pub const DEFAULT_NS_TTL: u32 = 300;

/// Desired state of one zone, handed to a provider for one pass.
#[derive(Debug, Clone, Default)]
pub struct DomainConfig {
    pub name: String,
    pub nameservers: Vec<Nameserver>,
    pub records: Vec<RecordConfig>,
}

impl DomainConfig {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.trim_end_matches('.').to_lowercase(),
            nameservers: Vec::new(),
            records: Vec::new(),
        }
    }

    pub fn with_nameservers(mut self, nameservers: Vec<Nameserver>) -> Self {
        self.nameservers = nameservers;
        self
    }

    pub fn with_records(mut self, records: Vec<RecordConfig>) -> Self {
        self.records = records;
        self
    }

    /// Appends an apex NS record for each configured nameserver not already present.
    pub fn add_ns_records(&mut self, ttl: u32) {
        for ns in &self.nameservers {
            let exists = self.records.iter().any(|r| {
                r.record_type == RecordType::NS && r.name == APEX && r.target == ns.name
            });
            if !exists {
                self.records
                    .push(RecordConfig::new(RecordType::NS, APEX, &ns.name, ttl, &self.name));
            }
        }
    }

    /// Targets of the apex NS records, in record order.
    pub fn apex_ns_targets(&self) -> Vec<String> {
        self.records
            .iter()
            .filter(|r| r.record_type == RecordType::NS && r.name == APEX)
            .map(|r| r.target.clone())
            .collect()
    }
}
