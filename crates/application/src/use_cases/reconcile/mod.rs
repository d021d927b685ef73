pub mod reconcile_domain;

pub use reconcile_domain::ReconcileDomainUseCase;
