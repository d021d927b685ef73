use thiserror::Error;

#[derive(Error, Debug, Clone)]
pub enum DomainError {
    #[error("Invalid domain name: {0}")]
    InvalidDomainName(String),

    #[error("Invalid DNS response: {0}")]
    InvalidDnsResponse(String),

    #[error("Unsupported record type {record_type} in answer: {record}")]
    UnsupportedRecordType { record_type: String, record: String },

    #[error("Record type {0} has no DNS question type")]
    UnmappedRecordType(String),

    #[error("Looking up {record_type} {fqdn} at {nameserver}: {source}")]
    Lookup {
        record_type: String,
        fqdn: String,
        nameserver: String,
        #[source]
        source: Box<DomainError>,
    },

    #[error("Transport timeout talking to {server}")]
    TransportTimeout { server: String },

    #[error("Transport failure talking to {server}: {reason}")]
    TransportFailure { server: String, reason: String },

    #[error("Bad response code from {server}: {rcode}")]
    ResponseCode { server: String, rcode: String },

    #[error("Provider type not registered: {0}")]
    ProviderNotFound(String),

    #[error("Provider type already registered: {0}")]
    ProviderAlreadyRegistered(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Failed to apply correction: {0}")]
    CorrectionFailed(String),
}

impl DomainError {
    /// True for failures to reach or get a usable answer from a nameserver.
    pub fn is_transport_error(&self) -> bool {
        match self {
            DomainError::TransportTimeout { .. }
            | DomainError::TransportFailure { .. }
            | DomainError::ResponseCode { .. } => true,
            DomainError::Lookup { source, .. } => source.is_transport_error(),
            _ => false,
        }
    }
}
