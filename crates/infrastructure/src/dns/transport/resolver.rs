use std::net::SocketAddr;
use std::time::Duration;
use zonecheck_domain::DomainError;

/// Resolves a nameserver hostname through the system resolver.
///
/// Returns every address in resolver order; callers use the first.
pub async fn resolve_all(
    hostname: &str,
    port: u16,
    timeout: Duration,
) -> Result<Vec<SocketAddr>, DomainError> {
    let target = format!("{}:{}", hostname, port);

    let addrs_iter = tokio::time::timeout(timeout, tokio::net::lookup_host(&target))
        .await
        .map_err(|_| DomainError::TransportTimeout {
            server: target.clone(),
        })?
        .map_err(|e| DomainError::TransportFailure {
            server: target.clone(),
            reason: format!("hostname resolution failed: {}", e),
        })?;

    let addrs: Vec<SocketAddr> = addrs_iter.collect();

    if addrs.is_empty() {
        return Err(DomainError::TransportFailure {
            server: target,
            reason: "hostname resolved to no addresses".to_string(),
        });
    }

    Ok(addrs)
}
