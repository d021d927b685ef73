pub mod cases;
pub mod report;
pub mod run_suite;

pub use cases::{test_cases, TestCase, DEFAULT_CASE_TTL};
pub use report::{CaseReport, SuiteReport};
pub use run_suite::RunIntegrationSuiteUseCase;
