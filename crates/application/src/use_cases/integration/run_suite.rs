use super::cases::test_cases;
use super::report::{CaseReport, SuiteReport};
use crate::ports::DnsProvider;
use std::sync::Arc;
use tracing::{error, info, warn};
use zonecheck_domain::config::HarnessConfig;
use zonecheck_domain::{DomainConfig, DomainError, Nameserver};

/// Use case: drive a provider through the fixed integration case table
pub struct RunIntegrationSuiteUseCase {
    options: HarnessConfig,
    verifier: Option<Arc<dyn DnsProvider>>,
}

impl RunIntegrationSuiteUseCase {
    pub fn new(options: HarnessConfig) -> Self {
        Self {
            options,
            verifier: None,
        }
    }

    /// Runs `verifier` on every case after its corrections were applied.
    pub fn with_verifier(mut self, verifier: Arc<dyn DnsProvider>) -> Self {
        self.verifier = Some(verifier);
        self
    }

    /// Runs every case in order against `provider` for `domain`.
    ///
    /// A nameserver lookup failure skips the suite. An error from
    /// `get_domain_corrections` on the provider or the verifier ends the run.
    pub async fn execute(
        &self,
        provider: &dyn DnsProvider,
        domain: &str,
    ) -> Result<SuiteReport, DomainError> {
        let mut nameservers = match provider.get_nameservers(domain).await {
            Ok(ns) => ns,
            Err(e) => {
                error!(domain = %domain, error = %e, "Failed getting nameservers");
                return Ok(SuiteReport::skipped(
                    domain,
                    format!("failed getting nameservers: {}", e),
                ));
            }
        };

        if self.options.dual_providers {
            nameservers.extend(Nameserver::simulated_secondaries());
        }

        let base = DomainConfig::new(domain).with_nameservers(nameservers);
        let mut report = SuiteReport {
            domain: base.name.clone(),
            nameservers: base.nameservers.iter().map(|ns| ns.name.clone()).collect(),
            ..Default::default()
        };

        for (index, case) in test_cases(&base.name).into_iter().enumerate() {
            info!("   Running test {}: {}", index, case.description);

            let mut desired = base.clone().with_records(case.records);
            desired.add_ns_records(self.options.ns_ttl);

            let mut case_report = CaseReport {
                index,
                description: case.description.to_string(),
                ..Default::default()
            };

            let corrections = provider.get_domain_corrections(&desired).await?;
            for correction in &corrections {
                info!("      {}", correction);
                case_report.corrections.push(correction.message.clone());
            }

            for correction in &corrections {
                if let Err(e) = correction.apply().await {
                    warn!(case = index, error = %e, "Correction failed");
                    case_report
                        .apply_failures
                        .push(format!("{}: {}", correction.message, e));
                }
            }

            if let Some(verifier) = &self.verifier {
                for drift in verifier.get_domain_corrections(&desired).await? {
                    warn!(case = index, "Drift: {}", drift);
                    case_report.drift.push(drift.message);
                }
            }

            report.cases.push(case_report);
        }

        Ok(report)
    }
}
