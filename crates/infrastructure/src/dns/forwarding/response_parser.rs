use hickory_proto::op::{Message, ResponseCode};
use hickory_proto::rr::Record;
use tracing::debug;
use zonecheck_domain::DomainError;

#[derive(Debug, Clone)]
pub struct DnsResponse {
    pub id: u16,

    pub rcode: ResponseCode,

    pub truncated: bool,

    pub answers: Vec<Record>,
}

impl DnsResponse {
    pub fn is_success(&self) -> bool {
        self.rcode == ResponseCode::NoError
    }
}

pub struct ResponseParser;

impl ResponseParser {
    pub fn parse(response_bytes: &[u8]) -> Result<DnsResponse, DomainError> {
        let message = Message::from_vec(response_bytes).map_err(|e| {
            DomainError::InvalidDnsResponse(format!("Failed to parse DNS response: {}", e))
        })?;

        let response = DnsResponse {
            id: u16::from_be_bytes([response_bytes[0], response_bytes[1]]),
            rcode: message.response_code(),
            truncated: message.truncated(),
            answers: message.answers().to_vec(),
        };

        debug!(
            id = response.id,
            rcode = ?response.rcode,
            answers = response.answers.len(),
            truncated = response.truncated,
            "DNS response parsed"
        );

        Ok(response)
    }
}
