//! Mapping between `zonecheck_domain::RecordType` and `hickory_proto::rr::RecordType`
//!
//! Only the types the verification engine can query and decode are mapped.

use hickory_proto::rr::RecordType as WireRecordType;
use zonecheck_domain::RecordType;

/// Bidirectional mapper between domain and wire record types
pub struct RecordTypeMapper;

impl RecordTypeMapper {
    /// Question type to send for a desired record type.
    ///
    /// Returns `None` for types that exist only in configuration (ALIAS) or
    /// that this engine does not verify.
    pub fn to_wire(record_type: &RecordType) -> Option<WireRecordType> {
        match record_type {
            RecordType::A => Some(WireRecordType::A),
            RecordType::AAAA => Some(WireRecordType::AAAA),
            RecordType::CNAME => Some(WireRecordType::CNAME),
            RecordType::MX => Some(WireRecordType::MX),
            RecordType::NS => Some(WireRecordType::NS),
            RecordType::SOA => Some(WireRecordType::SOA),
            RecordType::TXT => Some(WireRecordType::TXT),

            RecordType::PTR | RecordType::SRV | RecordType::CAA | RecordType::ALIAS => None,
        }
    }

    /// Domain type of an answer record; `None` for anything the decoder cannot model.
    pub fn from_wire(wire_type: WireRecordType) -> Option<RecordType> {
        match wire_type {
            WireRecordType::A => Some(RecordType::A),
            WireRecordType::AAAA => Some(RecordType::AAAA),
            WireRecordType::CNAME => Some(RecordType::CNAME),
            WireRecordType::MX => Some(RecordType::MX),
            WireRecordType::NS => Some(RecordType::NS),
            WireRecordType::SOA => Some(RecordType::SOA),
            WireRecordType::TXT => Some(RecordType::TXT),
            _ => None,
        }
    }
}
