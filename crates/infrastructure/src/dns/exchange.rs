//! Live DNS exchange: one question to one nameserver, UDP first, TCP when
//! the UDP answer comes back truncated.

use super::forwarding::{DnsResponse, MessageBuilder, ResponseParser};
use super::transport::{resolver, DnsTransport, TcpTransport, UdpTransport};
use async_trait::async_trait;
use hickory_proto::rr::{Record, RecordType as WireRecordType};
use std::net::SocketAddr;
use std::time::Duration;
use tracing::debug;
use zonecheck_application::ports::DnsExchanger;
use zonecheck_domain::{DomainError, NameserverAddr, QueryConfig};

pub struct WireExchanger {
    port: u16,
    timeout: Duration,
}

impl WireExchanger {
    pub fn new(port: u16, timeout: Duration) -> Self {
        Self { port, timeout }
    }

    pub fn from_config(config: &QueryConfig) -> Self {
        Self::new(config.port, config.timeout())
    }

    async fn server_addr(&self, nameserver: &str) -> Result<SocketAddr, DomainError> {
        let addr = NameserverAddr::parse(nameserver, self.port)
            .map_err(DomainError::InvalidDomainName)?;

        match addr {
            NameserverAddr::Resolved(addr) => Ok(addr),
            NameserverAddr::Unresolved { hostname, port } => {
                let resolved = resolver::resolve_all(&hostname, port, self.timeout).await?;
                debug!(
                    nameserver = %hostname,
                    addr = %resolved[0],
                    candidates = resolved.len(),
                    "Nameserver hostname resolved"
                );
                Ok(resolved[0])
            }
        }
    }

    async fn round_trip(
        &self,
        transport: &dyn DnsTransport,
        server: SocketAddr,
        query_id: u16,
        query: &[u8],
    ) -> Result<DnsResponse, DomainError> {
        let raw = transport.send(query, self.timeout).await?;
        let response = ResponseParser::parse(&raw.bytes)?;

        if response.id != query_id {
            return Err(DomainError::InvalidDnsResponse(format!(
                "{} answered with ID {} over {}, expected {}",
                server, response.id, raw.protocol_used, query_id
            )));
        }

        Ok(response)
    }
}

#[async_trait]
impl DnsExchanger for WireExchanger {
    async fn exchange(
        &self,
        nameserver: &str,
        question_type: WireRecordType,
        fqdn: &str,
    ) -> Result<Vec<Record>, DomainError> {
        let server = self.server_addr(nameserver).await?;
        let (query_id, query) = MessageBuilder::build_query(fqdn, question_type)?;

        let mut response = self
            .round_trip(&UdpTransport::new(server), server, query_id, &query)
            .await?;

        if response.truncated {
            debug!(server = %server, fqdn = %fqdn, "Truncated UDP answer, retrying over TCP");
            response = self
                .round_trip(&TcpTransport::new(server), server, query_id, &query)
                .await?;
        }

        if !response.is_success() {
            return Err(DomainError::ResponseCode {
                server: nameserver.to_string(),
                rcode: response.rcode.to_string(),
            });
        }

        debug!(
            server = %server,
            fqdn = %fqdn,
            question = %question_type,
            answers = response.answers.len(),
            "Exchange complete"
        );

        Ok(response.answers)
    }
}
