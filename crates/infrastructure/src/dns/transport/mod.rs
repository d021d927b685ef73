pub mod resolver;
pub mod tcp;
pub mod udp;

use async_trait::async_trait;
use std::time::Duration;
use zonecheck_domain::DomainError;

pub use tcp::TcpTransport;
pub use udp::UdpTransport;

#[derive(Debug)]
pub struct TransportResponse {
    pub bytes: Vec<u8>,

    pub protocol_used: &'static str,
}

#[async_trait]
pub trait DnsTransport: Send + Sync {
    /// Sends one query and waits for one response; `timeout` bounds each step.
    async fn send(
        &self,
        message_bytes: &[u8],
        timeout: Duration,
    ) -> Result<TransportResponse, DomainError>;

    fn protocol_name(&self) -> &'static str;
}
