use super::{RecordConfig, RecordType};
use std::collections::BTreeMap;
use std::fmt;

/// Identity of an RRset: records sharing a key are one logical set.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RecordKey {
    pub record_type: RecordType,
    pub name: String,
}

impl RecordKey {
    pub fn new(record_type: RecordType, name: &str) -> Self {
        Self {
            record_type,
            name: name.to_lowercase(),
        }
    }
}

impl fmt::Display for RecordKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.record_type, self.name)
    }
}

/// Buckets records by `(type, name)`, keeping insertion order inside a bucket.
pub fn group_records<'a, I>(records: I) -> BTreeMap<RecordKey, Vec<RecordConfig>>
where
    I: IntoIterator<Item = &'a RecordConfig>,
{
    let mut grouped: BTreeMap<RecordKey, Vec<RecordConfig>> = BTreeMap::new();
    for record in records {
        grouped.entry(record.key()).or_default().push(record.clone());
    }
    grouped
}
