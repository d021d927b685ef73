#![allow(dead_code)]

mod mock_exchanger;
mod mock_provider;
mod wire_records;

pub use mock_exchanger::MockDnsExchanger;
pub use mock_provider::MockDnsProvider;
pub use wire_records::{a_record, mx_record, ns_record, ptr_record, soa_record, txt_record};
