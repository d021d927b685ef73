use super::{RecordKey, RecordType};
use std::fmt;
use std::net::IpAddr;

/// Label used for the zone apex in origin-relative names.
pub const APEX: &str = "@";

/// One resource record, either desired (from configuration) or observed
/// (decoded from a nameserver answer). Compared by content only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordConfig {
    pub record_type: RecordType,

    /// Origin-relative, lowercase, `@` for the apex.
    pub name: String,

    /// Absolute, lowercase, without the trailing dot.
    pub name_fqdn: String,

    /// Type-dependent rendering: IP literal, hostname, `"pref host"` for MX,
    /// joined character-strings for TXT, the seven SOA fields for SOA.
    pub target: String,

    pub ttl: u32,

    /// MX preference; zero for every other type.
    pub priority: u16,
}

impl RecordConfig {
    /// MX targets of the form `"pref host"` are routed through [`RecordConfig::mx`];
    /// a bare host gets preference 0.
    pub fn new(record_type: RecordType, name: &str, target: &str, ttl: u32, origin: &str) -> Self {
        if record_type == RecordType::MX {
            let (preference, host) = split_mx_target(target);
            return Self::mx(name, preference, host, ttl, origin);
        }

        let target = match record_type {
            RecordType::A | RecordType::AAAA => canonical_ip(target),
            t if t.has_host_target() => canonical_host(target),
            _ => target.to_string(),
        };
        let (name, name_fqdn) = qualify(name, origin);

        Self {
            record_type,
            name,
            name_fqdn,
            target,
            ttl,
            priority: 0,
        }
    }

    pub fn mx(name: &str, preference: u16, host: &str, ttl: u32, origin: &str) -> Self {
        let (name, name_fqdn) = qualify(name, origin);

        Self {
            record_type: RecordType::MX,
            name,
            name_fqdn,
            target: format!("{} {}", preference, canonical_host(host)),
            ttl,
            priority: preference,
        }
    }

    #[allow(clippy::too_many_arguments)]
    pub fn soa(
        name: &str,
        ns: &str,
        mbox: &str,
        serial: u32,
        refresh: i32,
        retry: i32,
        expire: i32,
        minttl: u32,
        ttl: u32,
        origin: &str,
    ) -> Self {
        let (name, name_fqdn) = qualify(name, origin);

        Self {
            record_type: RecordType::SOA,
            name,
            name_fqdn,
            target: soa_target(ns, mbox, serial, refresh, retry, expire, minttl),
            ttl,
            priority: 0,
        }
    }

    pub fn key(&self) -> RecordKey {
        RecordKey::new(self.record_type, &self.name)
    }

    pub fn is_apex(&self) -> bool {
        self.name == APEX
    }

    /// Serial field of an SOA target, `None` for other types or malformed targets.
    pub fn soa_serial(&self) -> Option<u32> {
        if self.record_type != RecordType::SOA {
            return None;
        }
        self.target.split_whitespace().nth(2)?.parse().ok()
    }
}

impl fmt::Display for RecordConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} IN {} {}",
            self.name_fqdn, self.ttl, self.record_type, self.target
        )
    }
}

/// Renders the seven SOA fields the way both sides of a comparison store them.
#[allow(clippy::too_many_arguments)]
pub fn soa_target(
    ns: &str,
    mbox: &str,
    serial: u32,
    refresh: i32,
    retry: i32,
    expire: i32,
    minttl: u32,
) -> String {
    format!(
        "{} {} {} {} {} {} {}",
        canonical_host(ns),
        canonical_host(mbox),
        serial,
        refresh,
        retry,
        expire,
        minttl
    )
}

/// Lowercases a hostname and strips the root label.
pub fn canonical_host(host: &str) -> String {
    host.trim_end_matches('.').to_lowercase()
}

/// Renders an IP literal the way `IpAddr` displays it; other text is kept as-is.
fn canonical_ip(target: &str) -> String {
    target
        .trim()
        .parse::<IpAddr>()
        .map(|ip| ip.to_string())
        .unwrap_or_else(|_| target.to_string())
}

fn split_mx_target(target: &str) -> (u16, &str) {
    let trimmed = target.trim();
    match trimmed.split_once(char::is_whitespace) {
        Some((pref, host)) => match pref.parse() {
            Ok(preference) => (preference, host.trim()),
            Err(_) => (0, trimmed),
        },
        None => (0, trimmed),
    }
}

/// Converts an absolute name into its origin-relative label.
///
/// Names outside the origin are returned in canonical absolute form.
pub fn relative_name(fqdn: &str, origin: &str) -> String {
    let fqdn = canonical_host(fqdn);
    let origin = canonical_host(origin);

    if origin.is_empty() {
        return fqdn;
    }
    if fqdn == origin {
        return APEX.to_string();
    }

    match fqdn
        .strip_suffix(origin.as_str())
        .and_then(|prefix| prefix.strip_suffix('.'))
    {
        Some(label) if !label.is_empty() => label.to_string(),
        _ => fqdn,
    }
}

fn qualify(name: &str, origin: &str) -> (String, String) {
    let origin = canonical_host(origin);
    let trimmed = name.trim();

    if trimmed.is_empty() || trimmed == APEX {
        return (APEX.to_string(), origin);
    }
    if trimmed.ends_with('.') {
        let fqdn = canonical_host(trimmed);
        return (relative_name(&fqdn, &origin), fqdn);
    }

    let label = trimmed.to_lowercase();
    let fqdn = if origin.is_empty() {
        label.clone()
    } else {
        format!("{}.{}", label, origin)
    };
    (label, fqdn)
}
