use zonecheck_domain::{RecordConfig, RecordType};

pub const DEFAULT_CASE_TTL: u32 = 300;

/// One step of the integration suite: a description and the full desired
/// record set for that step.
#[derive(Debug, Clone)]
pub struct TestCase {
    pub description: &'static str,
    pub records: Vec<RecordConfig>,
}

impl TestCase {
    fn new(description: &'static str, records: Vec<RecordConfig>) -> Self {
        Self {
            description,
            records,
        }
    }
}

/// The fixed case table, each step an evolution of the previous one.
pub fn test_cases(origin: &str) -> Vec<TestCase> {
    let a = |name: &str, target: &str| a_record(name, target, DEFAULT_CASE_TTL, origin);
    let a_ttl = |name: &str, target: &str, ttl: u32| a_record(name, target, ttl, origin);

    vec![
        TestCase::new("Empty", vec![]),
        TestCase::new("Create an A record", vec![a("@", "1.1.1.1")]),
        TestCase::new("Change it", vec![a("@", "1.2.3.4")]),
        TestCase::new("Add another", vec![a("@", "1.2.3.4"), a("www", "1.2.3.4")]),
        TestCase::new(
            "Add another(same name)",
            vec![a("@", "1.2.3.4"), a("www", "1.2.3.4"), a("www", "5.6.7.8")],
        ),
        TestCase::new(
            "Change a ttl",
            vec![
                a_ttl("@", "1.2.3.4", 100),
                a("www", "1.2.3.4"),
                a("www", "5.6.7.8"),
            ],
        ),
        TestCase::new(
            "Change all ttls",
            vec![
                a_ttl("@", "1.2.3.4", 500),
                a_ttl("www", "1.2.3.4", 400),
                a_ttl("www", "5.6.7.8", 400),
            ],
        ),
        TestCase::new(
            "Delete one",
            vec![a_ttl("@", "1.2.3.4", 500), a_ttl("www", "5.6.7.8", 400)],
        ),
        TestCase::new(
            "Add back and change ttl",
            vec![a_ttl("www", "5.6.7.8", 700), a_ttl("www", "1.2.3.4", 700)],
        ),
    ]
}

fn a_record(name: &str, target: &str, ttl: u32, origin: &str) -> RecordConfig {
    RecordConfig::new(RecordType::A, name, target, ttl, origin)
}
