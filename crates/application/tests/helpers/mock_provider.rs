use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, RwLock};
use zonecheck_application::ports::DnsProvider;
use zonecheck_domain::{Correction, DomainConfig, DomainError, Nameserver};

/// Provider that reports one correction per desired record and remembers
/// every DomainConfig it was handed.
#[derive(Clone, Default)]
pub struct MockDnsProvider {
    nameservers: Arc<RwLock<Vec<Nameserver>>>,
    nameserver_error: Arc<RwLock<Option<DomainError>>>,
    corrections_error_at: Arc<RwLock<Option<usize>>>,
    failing_apply: Arc<RwLock<bool>>,
    seen: Arc<RwLock<Vec<DomainConfig>>>,
    applied: Arc<AtomicUsize>,
}

impl MockDnsProvider {
    pub fn new(nameservers: &[&str]) -> Self {
        let provider = Self::default();
        *provider.nameservers.write().unwrap() = Nameserver::from_strings(nameservers);
        provider
    }

    pub fn set_nameserver_error(&self, error: DomainError) {
        *self.nameserver_error.write().unwrap() = Some(error);
    }

    /// The `call`-th (zero-based) `get_domain_corrections` call fails.
    pub fn fail_corrections_at(&self, call: usize) {
        *self.corrections_error_at.write().unwrap() = Some(call);
    }

    pub fn set_failing_apply(&self, failing: bool) {
        *self.failing_apply.write().unwrap() = failing;
    }

    pub fn seen(&self) -> Vec<DomainConfig> {
        self.seen.read().unwrap().clone()
    }

    pub fn applied(&self) -> usize {
        self.applied.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl DnsProvider for MockDnsProvider {
    async fn get_nameservers(&self, _domain: &str) -> Result<Vec<Nameserver>, DomainError> {
        if let Some(error) = self.nameserver_error.read().unwrap().clone() {
            return Err(error);
        }
        Ok(self.nameservers.read().unwrap().clone())
    }

    async fn get_domain_corrections(
        &self,
        desired: &DomainConfig,
    ) -> Result<Vec<Correction>, DomainError> {
        let call = {
            let mut seen = self.seen.write().unwrap();
            seen.push(desired.clone());
            seen.len() - 1
        };

        if *self.corrections_error_at.read().unwrap() == Some(call) {
            return Err(DomainError::CorrectionFailed(format!("call {}", call)));
        }

        let failing = *self.failing_apply.read().unwrap();
        let corrections = desired
            .records
            .iter()
            .map(|record| {
                let applied = Arc::clone(&self.applied);
                Correction::new(format!("CREATE {}", record), move || {
                    let applied = Arc::clone(&applied);
                    async move {
                        if failing {
                            return Err(DomainError::CorrectionFailed("rejected".to_string()));
                        }
                        applied.fetch_add(1, Ordering::SeqCst);
                        Ok(())
                    }
                })
            })
            .collect();

        Ok(corrections)
    }
}
