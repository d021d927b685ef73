/// Outcome of one case of the integration suite.
#[derive(Debug, Clone, Default)]
pub struct CaseReport {
    pub index: usize,
    pub description: String,
    pub corrections: Vec<String>,
    /// Discrepancies live verification still saw after applying.
    pub drift: Vec<String>,
    pub apply_failures: Vec<String>,
}

impl CaseReport {
    pub fn passed(&self) -> bool {
        self.apply_failures.is_empty()
    }
}

/// Outcome of running the whole suite against one provider.
#[derive(Debug, Clone, Default)]
pub struct SuiteReport {
    pub domain: String,
    pub nameservers: Vec<String>,
    pub cases: Vec<CaseReport>,
    /// Set when the suite never ran, with the reason.
    pub skipped: Option<String>,
}

impl SuiteReport {
    pub fn skipped(domain: &str, reason: impl Into<String>) -> Self {
        Self {
            domain: domain.to_string(),
            skipped: Some(reason.into()),
            ..Default::default()
        }
    }

    pub fn is_skipped(&self) -> bool {
        self.skipped.is_some()
    }

    pub fn failed_cases(&self) -> usize {
        self.cases.iter().filter(|c| !c.passed()).count()
    }

    pub fn drift_count(&self) -> usize {
        self.cases.iter().map(|c| c.drift.len()).sum()
    }

    pub fn is_success(&self) -> bool {
        !self.is_skipped() && self.failed_cases() == 0
    }
}
