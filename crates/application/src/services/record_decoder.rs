use super::RecordTypeMapper;
use hickory_proto::rr::{RData, Record};
use zonecheck_domain::dns_record::{canonical_host, relative_name, soa_target, APEX};
use zonecheck_domain::{DomainError, RecordConfig};

/// Turns answer records into the same model the desired side uses.
pub struct RecordDecoder;

impl RecordDecoder {
    /// Decodes one answer record relative to `origin`.
    ///
    /// Also returns the record's prior serial: the wire SOA serial, reported
    /// as 1 when the wire carries 0, and 0 for every non-SOA record. When
    /// `serial_override` is non-zero and the record is the apex SOA, the
    /// override is written into the decoded target instead of the live
    /// serial.
    pub fn decode(
        record: &Record,
        origin: &str,
        serial_override: u32,
    ) -> Result<(RecordConfig, u32), DomainError> {
        let record_type =
            RecordTypeMapper::from_wire(record.record_type()).ok_or_else(|| unsupported(record))?;

        let owner = record.name().to_utf8();
        let name = relative_name(&owner, origin);
        let mut prior_serial = 0;

        let (target, priority) = match record.data() {
            RData::A(a) => (a.0.to_string(), 0),
            RData::AAAA(aaaa) => (aaaa.0.to_string(), 0),
            RData::CNAME(cname) => (canonical_host(&cname.0.to_utf8()), 0),
            RData::NS(ns) => (canonical_host(&ns.0.to_utf8()), 0),
            RData::MX(mx) => (
                format!(
                    "{} {}",
                    mx.preference(),
                    canonical_host(&mx.exchange().to_utf8())
                ),
                mx.preference(),
            ),
            RData::TXT(txt) => (
                txt.txt_data()
                    .iter()
                    .map(|segment| String::from_utf8_lossy(segment))
                    .collect::<String>(),
                0,
            ),
            RData::SOA(soa) => {
                let wire_serial = soa.serial();
                prior_serial = if wire_serial == 0 { 1 } else { wire_serial };

                let serial = if name == APEX && serial_override != 0 {
                    serial_override
                } else {
                    wire_serial
                };

                (
                    soa_target(
                        &soa.mname().to_utf8(),
                        &soa.rname().to_utf8(),
                        serial,
                        soa.refresh(),
                        soa.retry(),
                        soa.expire(),
                        soa.minimum(),
                    ),
                    0,
                )
            }
            _ => return Err(unsupported(record)),
        };

        let decoded = RecordConfig {
            record_type,
            name,
            name_fqdn: canonical_host(&owner),
            target,
            ttl: record.ttl(),
            priority,
        };

        Ok((decoded, prior_serial))
    }
}

fn unsupported(record: &Record) -> DomainError {
    DomainError::UnsupportedRecordType {
        record_type: record.record_type().to_string(),
        record: record.to_string(),
    }
}
