use anyhow::Context;
use std::sync::Arc;
use tracing::{error, info, warn};
use zonecheck_application::providers::ProviderRegistry;
use zonecheck_application::use_cases::{RunIntegrationSuiteUseCase, SuiteReport};
use zonecheck_domain::{Config, ProviderConfig, ProviderConfigs};
use zonecheck_infrastructure::providers::QUERY_PROVIDER_TYPE;

/// Runs the suite for every `providers.json` entry, in name order.
///
/// Returns `Ok(false)` when any provider could not be created or any suite
/// was skipped or had failing cases. A provider error while computing
/// corrections aborts the whole run.
pub async fn run(config: &Config, registry: Arc<ProviderRegistry>) -> anyhow::Result<bool> {
    let providers = ProviderConfigs::load(&config.harness.providers_file).with_context(|| {
        format!(
            "Error loading provider configs from {}",
            config.harness.providers_file
        )
    })?;

    if providers.is_empty() {
        warn!(file = %config.harness.providers_file, "No providers configured");
    }

    let mut succeeded = true;

    for entry in providers.iter() {
        info!(
            "Testing {} on {} ({})",
            entry.domain, entry.name, entry.provider_type
        );

        let provider = match registry.create(&entry.provider_type, entry) {
            Ok(provider) => provider,
            Err(e) => {
                error!(provider = %entry.name, error = %e, "Failed to create provider");
                succeeded = false;
                continue;
            }
        };

        let mut suite = RunIntegrationSuiteUseCase::new(config.harness.clone());
        if config.harness.verify_live {
            let verifier_config = ProviderConfig {
                provider_type: QUERY_PROVIDER_TYPE.to_string(),
                ..entry.clone()
            };
            match registry.create(QUERY_PROVIDER_TYPE, &verifier_config) {
                Ok(verifier) => suite = suite.with_verifier(verifier),
                Err(e) => {
                    error!(provider = %entry.name, error = %e, "Failed to create live verifier");
                    succeeded = false;
                    continue;
                }
            }
        }

        let report = suite
            .execute(provider.as_ref(), &entry.domain)
            .await
            .with_context(|| format!("Integration run for {} aborted", entry.name))?;

        log_summary(&entry.name, &report);
        succeeded &= report.is_success();
    }

    Ok(succeeded)
}

fn log_summary(provider: &str, report: &SuiteReport) {
    if let Some(reason) = &report.skipped {
        warn!(provider = %provider, domain = %report.domain, "Suite skipped: {}", reason);
        return;
    }

    let corrections: usize = report.cases.iter().map(|c| c.corrections.len()).sum();
    info!(
        provider = %provider,
        domain = %report.domain,
        cases = report.cases.len(),
        corrections,
        failed_cases = report.failed_cases(),
        drift = report.drift_count(),
        "Suite finished"
    );
}
