use std::fmt;
use std::net::{IpAddr, SocketAddr};
use std::str::FromStr;
use std::sync::Arc;

/// Secondaries appended when simulating a zone served by a second provider.
pub const SIMULATED_SECONDARIES: [&str; 2] = ["ns1.foo.com", "ns2.foo.org"];

/// A nameserver delegated for a zone, as reported by a provider.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Nameserver {
    pub name: String,
}

impl Nameserver {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.trim_end_matches('.').to_lowercase(),
        }
    }

    pub fn from_strings<S: AsRef<str>>(names: &[S]) -> Vec<Nameserver> {
        names.iter().map(|n| Nameserver::new(n.as_ref())).collect()
    }

    pub fn simulated_secondaries() -> Vec<Nameserver> {
        Self::from_strings(&SIMULATED_SECONDARIES)
    }
}

impl fmt::Display for Nameserver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

/// Where to send a query: an IP endpoint or a hostname still to be resolved.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum NameserverAddr {
    Resolved(SocketAddr),
    Unresolved { hostname: Arc<str>, port: u16 },
}

impl NameserverAddr {
    /// Parses `ip`, `ip:port`, `[v6]:port`, `host` or `host:port`, using
    /// `default_port` when none is given.
    pub fn parse(s: &str, default_port: u16) -> Result<Self, String> {
        let s = s.trim();
        if s.is_empty() {
            return Err("Empty nameserver address".to_string());
        }
        if let Ok(addr) = s.parse::<SocketAddr>() {
            return Ok(NameserverAddr::Resolved(addr));
        }
        if let Ok(ip) = s.parse::<IpAddr>() {
            return Ok(NameserverAddr::Resolved(SocketAddr::new(ip, default_port)));
        }
        if let Some((host, port)) = parse_host_port(s) {
            return Ok(NameserverAddr::Unresolved {
                hostname: host.trim_end_matches('.').into(),
                port,
            });
        }
        if s.contains(':') || s.contains('/') || s.contains(' ') {
            return Err(format!("Invalid nameserver address '{}'", s));
        }
        Ok(NameserverAddr::Unresolved {
            hostname: s.trim_end_matches('.').into(),
            port: default_port,
        })
    }

    pub fn socket_addr(&self) -> Option<SocketAddr> {
        match self {
            NameserverAddr::Resolved(addr) => Some(*addr),
            NameserverAddr::Unresolved { .. } => None,
        }
    }

    pub fn unresolved_parts(&self) -> Option<(&str, u16)> {
        match self {
            NameserverAddr::Unresolved { hostname, port } => Some((hostname, *port)),
            NameserverAddr::Resolved(_) => None,
        }
    }
}

impl fmt::Display for NameserverAddr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NameserverAddr::Resolved(addr) => write!(f, "{}", addr),
            NameserverAddr::Unresolved { hostname, port } => write!(f, "{}:{}", hostname, port),
        }
    }
}

impl FromStr for NameserverAddr {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s, 53)
    }
}

fn parse_host_port(s: &str) -> Option<(&str, u16)> {
    if s.starts_with('[') {
        let end = s.find(']')?;
        let host = &s[1..end];
        let port = s[end + 1..].strip_prefix(':')?.parse::<u16>().ok()?;
        Some((host, port))
    } else {
        let (host, port_str) = s.rsplit_once(':')?;
        if host.contains(':') {
            return None;
        }
        let port = port_str.parse::<u16>().ok()?;
        Some((host, port))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_bare_ipv4_uses_default_port() {
        let addr = NameserverAddr::parse("8.8.8.8", 53).unwrap();
        assert_eq!(addr.socket_addr(), Some("8.8.8.8:53".parse().unwrap()));
    }

    #[test]
    fn test_parse_ipv6_forms() {
        let bare = NameserverAddr::parse("2001:4860:4860::8888", 53).unwrap();
        assert_eq!(
            bare.socket_addr(),
            Some("[2001:4860:4860::8888]:53".parse().unwrap())
        );

        let bracketed = NameserverAddr::parse("[::1]:5353", 53).unwrap();
        assert_eq!(bracketed.socket_addr(), Some("[::1]:5353".parse().unwrap()));
    }

    #[test]
    fn test_parse_hostname() {
        let addr = NameserverAddr::parse("ns1.example.com.", 53).unwrap();
        assert_eq!(addr.unresolved_parts(), Some(("ns1.example.com", 53)));

        let with_port = NameserverAddr::parse("ns1.example.com:5300", 53).unwrap();
        assert_eq!(with_port.unresolved_parts(), Some(("ns1.example.com", 5300)));
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(NameserverAddr::parse("", 53).is_err());
        assert!(NameserverAddr::parse("not a host", 53).is_err());
    }

    #[test]
    fn test_nameserver_is_canonical() {
        assert_eq!(Nameserver::new("NS1.Example.COM.").name, "ns1.example.com");
    }

    #[test]
    fn test_simulated_secondaries() {
        let names: Vec<String> = Nameserver::simulated_secondaries()
            .into_iter()
            .map(|ns| ns.name)
            .collect();
        assert_eq!(names, vec!["ns1.foo.com", "ns2.foo.org"]);
    }
}
