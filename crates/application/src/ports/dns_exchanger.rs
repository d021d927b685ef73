use async_trait::async_trait;
use hickory_proto::rr::{Record, RecordType as WireRecordType};
use zonecheck_domain::DomainError;

/// One DNS query/response round trip against a named nameserver.
///
/// Implementations perform exactly one exchange per call: no retry, no
/// cache. A non-NOERROR response code is an error, as is any transport
/// failure.
#[async_trait]
pub trait DnsExchanger: Send + Sync {
    async fn exchange(
        &self,
        nameserver: &str,
        question_type: WireRecordType,
        fqdn: &str,
    ) -> Result<Vec<Record>, DomainError>;
}
