//! DNS Message Builder
//!
//! Constructs single-question query messages in wire format using `hickory-proto`.

use hickory_proto::op::{Message, MessageType, OpCode, Query};
use hickory_proto::rr::{DNSClass, Name, RecordType as WireRecordType};
use hickory_proto::serialize::binary::{BinEncodable, BinEncoder};
use std::str::FromStr;
use zonecheck_domain::DomainError;

/// Builds DNS query messages in wire format
pub struct MessageBuilder;

impl MessageBuilder {
    /// Build a class IN query with a random ID and RD set.
    ///
    /// `fqdn` may be given with or without the trailing dot. Returns the ID
    /// alongside the bytes so the response can be matched.
    pub fn build_query(
        fqdn: &str,
        question_type: WireRecordType,
    ) -> Result<(u16, Vec<u8>), DomainError> {
        let name = Name::from_str(&absolute(fqdn)).map_err(|e| {
            DomainError::InvalidDomainName(format!("Invalid domain '{}': {}", fqdn, e))
        })?;

        let mut query = Query::new();
        query.set_name(name);
        query.set_query_type(question_type);
        query.set_query_class(DNSClass::IN);

        let id = fastrand::u16(..);

        let mut message = Message::new(id, MessageType::Query, OpCode::Query);
        message.set_recursion_desired(true);
        message.add_query(query);

        let bytes = Self::serialize_message(&message)?;
        Ok((id, bytes))
    }

    /// Serialize a Message to wire format bytes
    pub fn serialize_message(message: &Message) -> Result<Vec<u8>, DomainError> {
        let mut buf = Vec::with_capacity(512);
        let mut encoder = BinEncoder::new(&mut buf);

        message.emit(&mut encoder).map_err(|e| {
            DomainError::InvalidDnsResponse(format!("Failed to serialize DNS message: {}", e))
        })?;

        Ok(buf)
    }
}

fn absolute(fqdn: &str) -> String {
    if fqdn.ends_with('.') {
        fqdn.to_string()
    } else {
        format!("{}.", fqdn)
    }
}
