use crate::ports::RecordDiffer;
use zonecheck_domain::RecordConfig;

/// Self-contained RRset comparison: count, then TTL, then targets.
///
/// Stops at the first failing check, so one call yields at most one
/// discrepancy.
#[derive(Debug, Default, Clone, Copy)]
pub struct GroupDiffer;

impl GroupDiffer {
    pub fn new() -> Self {
        Self
    }
}

impl RecordDiffer for GroupDiffer {
    fn diff(&self, desired: &[RecordConfig], observed: &[RecordConfig]) -> Option<String> {
        if desired.len() != observed.len() {
            return Some(format!(
                "expected {} records, but got {}{}",
                desired.len(),
                observed.len(),
                dump(desired, observed)
            ));
        }

        if let Some(first) = desired.first() {
            if let Some(other) = desired.iter().find(|r| r.ttl != first.ttl) {
                return Some(format!(
                    "desired records carry inconsistent TTLs: {} and {}{}",
                    first.ttl,
                    other.ttl,
                    dump(desired, observed)
                ));
            }
        }

        if let Some(first) = observed.first() {
            if let Some(other) = observed.iter().find(|r| r.ttl != first.ttl) {
                return Some(format!(
                    "nameserver returned inconsistent TTLs: {} and {}{}",
                    first.ttl,
                    other.ttl,
                    dump(desired, observed)
                ));
            }

            let want = desired.first().map(|r| r.ttl).unwrap_or_default();
            if first.ttl != want {
                return Some(format!(
                    "wrong TTL: got {}, want {}{}",
                    first.ttl,
                    want,
                    dump(desired, observed)
                ));
            }
        }

        if sorted_targets(desired) != sorted_targets(observed) {
            return Some(format!(
                "record targets don't match{}",
                dump(desired, observed)
            ));
        }

        None
    }
}

fn sorted_targets(records: &[RecordConfig]) -> String {
    let mut targets: Vec<&str> = records.iter().map(|r| r.target.as_str()).collect();
    targets.sort_unstable();
    targets.join(", ")
}

fn dump(desired: &[RecordConfig], observed: &[RecordConfig]) -> String {
    let mut out = String::from("\nExpected:");
    for r in desired {
        out.push('\n');
        out.push_str(&r.to_string());
    }
    out.push_str("\nFound:");
    for r in observed {
        out.push('\n');
        out.push_str(&r.to_string());
    }
    out
}
