pub mod integration;
pub mod reconcile;
pub mod spf;

pub use integration::{CaseReport, RunIntegrationSuiteUseCase, SuiteReport};
pub use reconcile::ReconcileDomainUseCase;
pub use spf::{SpfUnrollResult, UnrollSpfUseCase};
