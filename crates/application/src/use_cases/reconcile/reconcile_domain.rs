use crate::ports::{DnsExchanger, RecordDiffer};
use crate::services::{GroupDiffer, RecordDecoder, RecordTypeMapper};
use std::sync::Arc;
use tracing::{debug, info, warn};
use zonecheck_domain::{
    group_records, Correction, DomainConfig, DomainError, Nameserver, QueryConfig,
};

/// Use case: compare a desired zone with what its nameservers serve
///
/// Read-only. Every discrepancy becomes a report-only [`Correction`];
/// an empty result means the live zone has converged.
pub struct ReconcileDomainUseCase {
    exchanger: Arc<dyn DnsExchanger>,
    differ: Arc<dyn RecordDiffer>,
    options: QueryConfig,
}

impl ReconcileDomainUseCase {
    pub fn new(exchanger: Arc<dyn DnsExchanger>, options: QueryConfig) -> Self {
        Self {
            exchanger,
            differ: Arc::new(GroupDiffer::new()),
            options,
        }
    }

    pub fn with_differ(mut self, differ: Arc<dyn RecordDiffer>) -> Self {
        self.differ = differ;
        self
    }

    /// Nameservers a reconcile pass over `desired` will query, in order.
    pub fn nameservers(&self, desired: &DomainConfig) -> Vec<String> {
        let mut nameservers = desired.apex_ns_targets();

        if nameservers.is_empty() {
            warn!(
                domain = %desired.name,
                fallback = %self.options.default_server,
                "No authoritative nameservers found, using default resolver"
            );
            nameservers.push(self.options.default_server.clone());
        }

        if self.options.simulate_secondaries {
            nameservers.extend(
                Nameserver::simulated_secondaries()
                    .into_iter()
                    .map(|ns| ns.name),
            );
        }

        if !self.options.all_nameservers {
            nameservers.truncate(1);
        }

        nameservers
    }

    pub async fn execute(&self, desired: &DomainConfig) -> Result<Vec<Correction>, DomainError> {
        let groups = group_records(&desired.records);
        if groups.is_empty() {
            debug!(domain = %desired.name, "No desired records, nothing to verify");
            return Ok(Vec::new());
        }

        let nameservers = self.nameservers(desired);
        debug!(
            domain = %desired.name,
            groups = groups.len(),
            nameservers = ?nameservers,
            "Verifying live records"
        );

        let mut corrections = Vec::new();

        for (key, wanted) in &groups {
            let question_type = RecordTypeMapper::to_wire(&key.record_type)
                .ok_or_else(|| DomainError::UnmappedRecordType(key.record_type.to_string()))?;
            let fqdn = match wanted.first() {
                Some(record) => record.name_fqdn.clone(),
                None => continue,
            };

            for ns in &nameservers {
                let answers = self
                    .exchanger
                    .exchange(ns, question_type, &fqdn)
                    .await
                    .map_err(|e| DomainError::Lookup {
                        record_type: key.record_type.to_string(),
                        fqdn: fqdn.clone(),
                        nameserver: ns.clone(),
                        source: Box::new(e),
                    })?;

                let mut observed = Vec::with_capacity(answers.len());
                for answer in &answers {
                    let (record, _) =
                        RecordDecoder::decode(answer, &desired.name, self.options.soa_serial)?;
                    observed.push(record);
                }

                debug!(
                    nameserver = %ns,
                    key = %key,
                    answers = observed.len(),
                    "Exchange complete"
                );

                if let Some(detail) = self.differ.diff(wanted, &observed) {
                    corrections.push(Correction::noop(format!(
                        "From {} ({} {}): {}",
                        ns, key.record_type, fqdn, detail
                    )));
                }
            }
        }

        info!(
            domain = %desired.name,
            corrections = corrections.len(),
            "Verification finished"
        );

        Ok(corrections)
    }
}
