use hickory_proto::rr::rdata::{A, MX, NS, PTR, SOA, TXT};
use hickory_proto::rr::{Name, RData, Record};
use std::str::FromStr;

fn name(fqdn: &str) -> Name {
    Name::from_str(fqdn).unwrap()
}

pub fn a_record(fqdn: &str, ip: &str, ttl: u32) -> Record {
    Record::from_rdata(name(fqdn), ttl, RData::A(A(ip.parse().unwrap())))
}

pub fn ns_record(fqdn: &str, host: &str, ttl: u32) -> Record {
    Record::from_rdata(name(fqdn), ttl, RData::NS(NS(name(host))))
}

pub fn ptr_record(fqdn: &str, host: &str, ttl: u32) -> Record {
    Record::from_rdata(name(fqdn), ttl, RData::PTR(PTR(name(host))))
}

pub fn mx_record(fqdn: &str, preference: u16, host: &str, ttl: u32) -> Record {
    Record::from_rdata(name(fqdn), ttl, RData::MX(MX::new(preference, name(host))))
}

pub fn txt_record(fqdn: &str, segments: &[&str], ttl: u32) -> Record {
    let segments = segments.iter().map(|s| s.to_string()).collect();
    Record::from_rdata(name(fqdn), ttl, RData::TXT(TXT::new(segments)))
}

pub fn soa_record(fqdn: &str, serial: u32, ttl: u32) -> Record {
    let soa = SOA::new(
        name("ns1.example.net."),
        name("hostmaster.example.com."),
        serial,
        7200,
        3600,
        1209600,
        300,
    );
    Record::from_rdata(name(fqdn), ttl, RData::SOA(soa))
}
