use async_trait::async_trait;
use hickory_proto::rr::{Record, RecordType as WireRecordType};
use std::collections::HashMap;
use std::sync::{Arc, RwLock};
use zonecheck_application::ports::DnsExchanger;
use zonecheck_domain::DomainError;

type ExchangeKey = (String, WireRecordType, String);

/// Canned answers keyed by (nameserver, question type, fqdn).
///
/// Unknown questions get an empty NOERROR answer.
#[derive(Clone, Default)]
pub struct MockDnsExchanger {
    answers: Arc<RwLock<HashMap<ExchangeKey, Vec<Record>>>>,
    errors: Arc<RwLock<HashMap<String, DomainError>>>,
    calls: Arc<RwLock<Vec<ExchangeKey>>>,
}

impl MockDnsExchanger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_answer(
        &self,
        nameserver: &str,
        question_type: WireRecordType,
        fqdn: &str,
        records: Vec<Record>,
    ) {
        self.answers.write().unwrap().insert(
            (nameserver.to_string(), question_type, fqdn.to_string()),
            records,
        );
    }

    /// Every exchange against `nameserver` fails with `error`.
    pub fn set_error(&self, nameserver: &str, error: DomainError) {
        self.errors
            .write()
            .unwrap()
            .insert(nameserver.to_string(), error);
    }

    pub fn calls(&self) -> Vec<ExchangeKey> {
        self.calls.read().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls.read().unwrap().len()
    }
}

#[async_trait]
impl DnsExchanger for MockDnsExchanger {
    async fn exchange(
        &self,
        nameserver: &str,
        question_type: WireRecordType,
        fqdn: &str,
    ) -> Result<Vec<Record>, DomainError> {
        let key = (nameserver.to_string(), question_type, fqdn.to_string());
        self.calls.write().unwrap().push(key.clone());

        if let Some(error) = self.errors.read().unwrap().get(nameserver) {
            return Err(error.clone());
        }

        Ok(self
            .answers
            .read()
            .unwrap()
            .get(&key)
            .cloned()
            .unwrap_or_default())
    }
}
