//! UDP Transport for DNS queries (RFC 1035 §4.2.1)
//!
//! Messages are sent as-is (no framing). If the response has the TC bit set,
//! the caller retries over TCP. Datagrams not sent from the queried
//! address are dropped.

use super::{DnsTransport, TransportResponse};
use async_trait::async_trait;
use std::net::{Ipv4Addr, Ipv6Addr, SocketAddr};
use std::time::Duration;
use tokio::net::UdpSocket;
use tracing::{debug, warn};
use zonecheck_domain::DomainError;

/// Maximum UDP DNS response size with EDNS(0)
const MAX_UDP_RESPONSE_SIZE: usize = 4096;

/// DNS over UDP transport
pub struct UdpTransport {
    server_addr: SocketAddr,
}

impl UdpTransport {
    pub fn new(server_addr: SocketAddr) -> Self {
        Self { server_addr }
    }

    fn bind_addr(&self) -> SocketAddr {
        if self.server_addr.is_ipv4() {
            SocketAddr::from((Ipv4Addr::UNSPECIFIED, 0))
        } else {
            SocketAddr::from((Ipv6Addr::UNSPECIFIED, 0))
        }
    }

    fn failure(&self, reason: String) -> DomainError {
        DomainError::TransportFailure {
            server: self.server_addr.to_string(),
            reason,
        }
    }

    fn timeout_error(&self) -> DomainError {
        DomainError::TransportTimeout {
            server: self.server_addr.to_string(),
        }
    }
}

#[async_trait]
impl DnsTransport for UdpTransport {
    async fn send(
        &self,
        message_bytes: &[u8],
        timeout: Duration,
    ) -> Result<TransportResponse, DomainError> {
        let socket = UdpSocket::bind(self.bind_addr())
            .await
            .map_err(|e| self.failure(format!("failed to bind UDP socket: {}", e)))?;

        let bytes_sent =
            tokio::time::timeout(timeout, socket.send_to(message_bytes, self.server_addr))
                .await
                .map_err(|_| self.timeout_error())?
                .map_err(|e| self.failure(format!("failed to send UDP query: {}", e)))?;

        debug!(
            server = %self.server_addr,
            bytes_sent = bytes_sent,
            "UDP query sent"
        );

        let mut recv_buf = vec![0u8; MAX_UDP_RESPONSE_SIZE];
        let deadline = tokio::time::Instant::now() + timeout;

        let bytes_received = loop {
            let (n, from_addr) =
                tokio::time::timeout_at(deadline, socket.recv_from(&mut recv_buf))
                    .await
                    .map_err(|_| self.timeout_error())?
                    .map_err(|e| self.failure(format!("failed to receive UDP response: {}", e)))?;

            if from_addr.ip() == self.server_addr.ip()
                && from_addr.port() == self.server_addr.port()
            {
                break n;
            }

            warn!(
                expected = %self.server_addr,
                received_from = %from_addr,
                "Discarding UDP response from unexpected source"
            );
        };

        recv_buf.truncate(bytes_received);

        debug!(
            server = %self.server_addr,
            bytes_received = bytes_received,
            "UDP response received"
        );

        Ok(TransportResponse {
            bytes: recv_buf,
            protocol_used: "UDP",
        })
    }

    fn protocol_name(&self) -> &'static str {
        "UDP"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bind_matches_server_family() {
        let v4 = UdpTransport::new("8.8.8.8:53".parse().unwrap());
        assert!(v4.bind_addr().is_ipv4());

        let v6 = UdpTransport::new("[2001:4860:4860::8888]:53".parse().unwrap());
        assert!(v6.bind_addr().is_ipv6());
        assert_eq!(v6.protocol_name(), "UDP");
    }

    #[tokio::test]
    async fn test_silent_server_times_out() {
        let silent = UdpSocket::bind("127.0.0.1:0").await.unwrap();
        let transport = UdpTransport::new(silent.local_addr().unwrap());

        let err = transport
            .send(&[0u8; 12], Duration::from_millis(50))
            .await
            .unwrap_err();

        assert!(matches!(err, DomainError::TransportTimeout { .. }));
    }

    #[tokio::test]
    async fn test_datagram_from_other_source_is_discarded() {
        let server = UdpSocket::bind("127.0.0.1:0").await.unwrap();
        let intruder = UdpSocket::bind("127.0.0.1:0").await.unwrap();
        let transport = UdpTransport::new(server.local_addr().unwrap());

        let responder = tokio::spawn(async move {
            let mut buf = [0u8; 512];
            let (_, client) = server.recv_from(&mut buf).await.unwrap();
            intruder.send_to(b"forged", client).await.unwrap();
            tokio::time::sleep(Duration::from_millis(20)).await;
            server.send_to(b"genuine", client).await.unwrap();
        });

        let response = transport
            .send(&[0u8; 12], Duration::from_secs(2))
            .await
            .unwrap();
        responder.await.unwrap();

        assert_eq!(response.bytes, b"genuine");
        assert_eq!(response.protocol_used, "UDP");
    }

    #[tokio::test]
    async fn test_only_foreign_datagrams_time_out() {
        let server = UdpSocket::bind("127.0.0.1:0").await.unwrap();
        let intruder = UdpSocket::bind("127.0.0.1:0").await.unwrap();
        let transport = UdpTransport::new(server.local_addr().unwrap());

        let responder = tokio::spawn(async move {
            let mut buf = [0u8; 512];
            let (_, client) = server.recv_from(&mut buf).await.unwrap();
            intruder.send_to(b"forged", client).await.unwrap();
            server
        });

        let err = transport
            .send(&[0u8; 12], Duration::from_millis(200))
            .await
            .unwrap_err();
        let _server = responder.await.unwrap();

        assert!(matches!(err, DomainError::TransportTimeout { .. }));
    }
}
