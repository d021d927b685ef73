use crate::DomainError;
use futures::future::{BoxFuture, FutureExt};
use std::fmt;
use std::future::Future;
use std::sync::Arc;

pub type CorrectionAction =
    Arc<dyn Fn() -> BoxFuture<'static, Result<(), DomainError>> + Send + Sync>;

/// One reported discrepancy plus the action that would remediate it.
///
/// Corrections have no identity beyond their message. The action must be
/// safe to run more than once.
#[derive(Clone)]
pub struct Correction {
    pub message: String,
    action: CorrectionAction,
}

impl Correction {
    pub fn new<F, Fut>(message: impl Into<String>, action: F) -> Self
    where
        F: Fn() -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Result<(), DomainError>> + Send + 'static,
    {
        Self {
            message: message.into(),
            action: Arc::new(move || action().boxed()),
        }
    }

    /// A report-only correction, as produced by read-only verification.
    pub fn noop(message: impl Into<String>) -> Self {
        Self::new(message, || async { Ok(()) })
    }

    pub async fn apply(&self) -> Result<(), DomainError> {
        (self.action)().await
    }
}

impl fmt::Debug for Correction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Correction")
            .field("message", &self.message)
            .finish_non_exhaustive()
    }
}

impl fmt::Display for Correction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}
