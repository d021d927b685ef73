mod key;
mod record;
mod record_type;

pub use key::{group_records, RecordKey};
pub use record::{canonical_host, relative_name, soa_target, RecordConfig, APEX};
pub use record_type::RecordType;
