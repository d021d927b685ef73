use crate::ports::DnsExchanger;
use hickory_proto::rr::{RData, RecordType as WireRecordType};
use std::collections::{HashMap, VecDeque};
use std::sync::Arc;
use tracing::{debug, info, warn};
use zonecheck_domain::spf::MAX_INCLUDE_DEPTH;
use zonecheck_domain::{split_txt, DomainError, SpfFlattener};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpfUnrollResult {
    pub domain: String,
    pub original: String,
    pub flattened: String,
    /// `flattened` cut into TXT character-strings.
    pub chunks: Vec<String>,
}

/// Use case: flatten a domain's SPF record by inlining whitelisted includes
pub struct UnrollSpfUseCase {
    exchanger: Arc<dyn DnsExchanger>,
    resolver: String,
    flattener: SpfFlattener,
    first_chunk_limit: usize,
}

impl UnrollSpfUseCase {
    pub fn new(
        exchanger: Arc<dyn DnsExchanger>,
        resolver: impl Into<String>,
        flattener: SpfFlattener,
        first_chunk_limit: usize,
    ) -> Self {
        Self {
            exchanger,
            resolver: resolver.into(),
            flattener,
            first_chunk_limit,
        }
    }

    pub async fn execute(&self, domain: &str) -> Result<SpfUnrollResult, DomainError> {
        let original = self.lookup_spf(domain).await?.ok_or_else(|| {
            DomainError::InvalidDnsResponse(format!("{} has no SPF record", domain))
        })?;

        let resolved = self.resolve_includes(&original).await;
        let flattened = self
            .flattener
            .flatten(&original, |include| resolved.get(include).cloned());
        let chunks = split_txt(&flattened, self.first_chunk_limit);

        info!(
            domain = %domain,
            includes = resolved.len(),
            chunks = chunks.len(),
            "SPF record flattened"
        );

        Ok(SpfUnrollResult {
            domain: domain.to_string(),
            original,
            flattened,
            chunks,
        })
    }

    /// Fetches the SPF records of every whitelisted include reachable from
    /// `record`, breadth-first and at most `MAX_INCLUDE_DEPTH` levels deep.
    async fn resolve_includes(&self, record: &str) -> HashMap<String, String> {
        let mut resolved = HashMap::new();
        let mut queue: VecDeque<(String, usize)> = self
            .flattener
            .expandable_includes(record)
            .into_iter()
            .map(|d| (d, 1))
            .collect();

        while let Some((include, depth)) = queue.pop_front() {
            if depth > MAX_INCLUDE_DEPTH || resolved.contains_key(&include) {
                continue;
            }

            match self.lookup_spf(&include).await {
                Ok(Some(spf)) => {
                    for nested in self.flattener.expandable_includes(&spf) {
                        queue.push_back((nested, depth + 1));
                    }
                    resolved.insert(include, spf);
                }
                Ok(None) => debug!(include = %include, "No SPF record, keeping include"),
                Err(e) => warn!(include = %include, error = %e, "SPF lookup failed, keeping include"),
            }
        }

        resolved
    }

    async fn lookup_spf(&self, domain: &str) -> Result<Option<String>, DomainError> {
        let answers = self
            .exchanger
            .exchange(&self.resolver, WireRecordType::TXT, domain)
            .await?;

        let spf = answers.iter().find_map(|record| match record.data() {
            RData::TXT(txt) => {
                let value: String = txt
                    .txt_data()
                    .iter()
                    .map(|segment| String::from_utf8_lossy(segment))
                    .collect();
                value.starts_with("v=spf1").then_some(value)
            }
            _ => None,
        });

        Ok(spf)
    }
}
