#![allow(dead_code)]
use zonecheck_domain::{RecordConfig, RecordType};

pub const ORIGIN: &str = "example.com";

pub struct RecordBuilder {
    record_type: RecordType,
    name: String,
    target: String,
    ttl: u32,
    origin: String,
}

impl RecordBuilder {
    pub fn new() -> Self {
        Self {
            record_type: RecordType::A,
            name: "@".to_string(),
            target: "192.0.2.1".to_string(),
            ttl: 300,
            origin: ORIGIN.to_string(),
        }
    }

    pub fn a(name: &str, target: &str) -> Self {
        Self::new().name(name).target(target)
    }

    pub fn record_type(mut self, record_type: RecordType) -> Self {
        self.record_type = record_type;
        self
    }

    pub fn name(mut self, name: &str) -> Self {
        self.name = name.to_string();
        self
    }

    pub fn target(mut self, target: &str) -> Self {
        self.target = target.to_string();
        self
    }

    pub fn ttl(mut self, ttl: u32) -> Self {
        self.ttl = ttl;
        self
    }

    pub fn origin(mut self, origin: &str) -> Self {
        self.origin = origin.to_string();
        self
    }

    pub fn build(self) -> RecordConfig {
        RecordConfig::new(
            self.record_type,
            &self.name,
            &self.target,
            self.ttl,
            &self.origin,
        )
    }
}

impl Default for RecordBuilder {
    fn default() -> Self {
        Self::new()
    }
}
