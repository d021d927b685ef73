use zonecheck_domain::RecordConfig;

/// Compares one desired RRset with what a nameserver returned for it.
///
/// Returns a human-readable description of the first discrepancy found, or
/// `None` when both sides agree. This is the seam for swapping in a richer
/// correlation diff than the default group comparison.
pub trait RecordDiffer: Send + Sync {
    fn diff(&self, desired: &[RecordConfig], observed: &[RecordConfig]) -> Option<String>;
}
